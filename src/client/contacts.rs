use std::sync::Arc;

use crate::client::{HttpResponse, ResponseMode, Shared, UnsendError, decode_error};
use crate::domain::{Contact, ContactBookId, ContactDraft, ContactId, ContactUpdate};
use crate::transport::{decode_contact_json, encode_contact_json, routes};

#[derive(Clone)]
/// Operations on contacts, scoped by contact book.
///
/// Mutations return `Ok(None)` only in lenient mode, where any status other
/// than exact 200 discards the error body; strict mode surfaces non-2xx
/// statuses as [`UnsendError::HttpStatus`].
pub struct ContactsClient {
    shared: Arc<Shared>,
}

impl ContactsClient {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    /// Create a contact. On success the server-assigned `contactId` is
    /// threaded onto the locally-built record; all caller-supplied fields
    /// are returned unchanged.
    pub async fn create(
        &self,
        book: &ContactBookId,
        draft: ContactDraft,
    ) -> Result<Option<Contact>, UnsendError> {
        let mut local = Contact {
            contact_book_id: book.as_str().to_owned(),
            contact_id: String::new(),
            email: draft.email().to_owned(),
            first_name: draft.first_name().to_owned(),
            last_name: draft.last_name().to_owned(),
            subscribed: draft.subscribed(),
        };
        let body = encode_contact_json(&local).map_err(UnsendError::Encode)?;
        let response = self
            .shared
            .dispatch(routes::create_contact(book), Some(body))
            .await?;
        let Some(response) = self.gate_mutation(response)? else {
            return Ok(None);
        };
        let decoded =
            decode_contact_json(&response.body).map_err(|err| decode_error(err, &response.body))?;
        local.contact_id = decoded.contact_id;
        Ok(Some(local))
    }

    /// Update an existing contact's name and subscription state.
    pub async fn update(
        &self,
        book: &ContactBookId,
        id: &ContactId,
        update: ContactUpdate,
    ) -> Result<Option<Contact>, UnsendError> {
        let local = Contact {
            contact_book_id: book.as_str().to_owned(),
            contact_id: id.as_str().to_owned(),
            email: String::new(),
            first_name: update.first_name,
            last_name: update.last_name,
            subscribed: update.subscribed,
        };
        let body = encode_contact_json(&local).map_err(UnsendError::Encode)?;
        let response = self
            .shared
            .dispatch(routes::update_contact(book, id), Some(body))
            .await?;
        let Some(response) = self.gate_mutation(response)? else {
            return Ok(None);
        };
        decode_contact_json(&response.body).map_err(|err| decode_error(err, &response.body))?;
        Ok(Some(local))
    }

    /// Create or replace a contact under a caller-chosen id.
    pub async fn upsert(
        &self,
        book: &ContactBookId,
        id: &ContactId,
        draft: ContactDraft,
    ) -> Result<Option<Contact>, UnsendError> {
        let local = Contact {
            contact_book_id: book.as_str().to_owned(),
            contact_id: id.as_str().to_owned(),
            email: draft.email().to_owned(),
            first_name: draft.first_name().to_owned(),
            last_name: draft.last_name().to_owned(),
            subscribed: draft.subscribed(),
        };
        let body = encode_contact_json(&local).map_err(UnsendError::Encode)?;
        let response = self
            .shared
            .dispatch(routes::upsert_contact(book, id), Some(body))
            .await?;
        let Some(response) = self.gate_mutation(response)? else {
            return Ok(None);
        };
        decode_contact_json(&response.body).map_err(|err| decode_error(err, &response.body))?;
        Ok(Some(local))
    }

    /// Delete a contact. The response body is never parsed; success is
    /// `status == 200`.
    pub async fn delete(
        &self,
        book: &ContactBookId,
        id: &ContactId,
    ) -> Result<bool, UnsendError> {
        let response = self
            .shared
            .dispatch(routes::delete_contact(book, id), None)
            .await?;
        match self.shared.mode {
            ResponseMode::Strict => {
                self.shared.check_status(&response)?;
                Ok(true)
            }
            ResponseMode::Lenient => Ok(response.status == 200),
        }
    }

    /// Fetch a contact.
    pub async fn get(
        &self,
        book: &ContactBookId,
        id: &ContactId,
    ) -> Result<Contact, UnsendError> {
        let response = self.shared.dispatch(routes::contact(book, id), None).await?;
        self.shared.check_status(&response)?;
        decode_contact_json(&response.body).map_err(|err| decode_error(err, &response.body))
    }

    fn gate_mutation(&self, response: HttpResponse) -> Result<Option<HttpResponse>, UnsendError> {
        match self.shared.mode {
            ResponseMode::Strict => {
                self.shared.check_status(&response)?;
                Ok(Some(response))
            }
            ResponseMode::Lenient => {
                if response.status == 200 {
                    Ok(Some(response))
                } else {
                    Ok(None)
                }
            }
        }
    }
}
