use serde::{Deserialize, Serialize};

use crate::domain::Contact;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactJsonOut<'a> {
    contact_book_id: &'a str,
    contact_id: &'a str,
    email: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    subscribed: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ContactJsonIn {
    contact_book_id: String,
    contact_id: String,
    email: String,
    first_name: String,
    last_name: String,
    subscribed: bool,
}

/// Encode the full contact shape; unset scalars go out as empty strings.
pub fn encode_contact_json(contact: &Contact) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ContactJsonOut {
        contact_book_id: &contact.contact_book_id,
        contact_id: &contact.contact_id,
        email: &contact.email,
        first_name: &contact.first_name,
        last_name: &contact.last_name,
        subscribed: contact.subscribed,
    })
}

pub fn decode_contact_json(json: &str) -> Result<Contact, serde_json::Error> {
    let parsed: ContactJsonIn = serde_json::from_str(json)?;
    Ok(Contact {
        contact_book_id: parsed.contact_book_id,
        contact_id: parsed.contact_id,
        email: parsed.email,
        first_name: parsed.first_name,
        last_name: parsed.last_name,
        subscribed: parsed.subscribed,
    })
}
