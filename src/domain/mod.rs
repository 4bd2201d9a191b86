//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    Attachment, ContactDraft, ContactUpdate, Recipients, SendEmail, SendEmailOptions,
};
pub use response::{Contact, DomainData, EmailData, EmailEvent, EventData};
pub use validation::ValidationError;
pub use value::{
    ApiKey, ContactBookId, ContactId, DEFAULT_SEND_DELAY_SECONDS, EmailId, ScheduledAt,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn ids_reject_empty() {
        assert!(EmailId::new(" ").is_err());
        assert!(ContactBookId::new("").is_err());
        assert!(ContactId::new("\t").is_err());
    }

    #[test]
    fn ids_are_trimmed() {
        let id = EmailId::new(" mail_1 ").unwrap();
        assert_eq!(id.as_str(), "mail_1");
    }

    #[test]
    fn recipients_one_normalizes_into_a_list() {
        let single = Recipients::one("a@example.com").unwrap();
        let list = Recipients::many(vec!["a@example.com".to_owned()]).unwrap();
        assert_eq!(single, list);
        assert_eq!(single.as_slice(), ["a@example.com"]);
    }

    #[test]
    fn recipients_reject_blank_entries() {
        let err = Recipients::many(vec!["a@example.com".to_owned(), "  ".to_owned()]).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "recipient" }));
    }

    #[test]
    fn send_email_requires_recipients_and_sender() {
        let err = SendEmail::new(
            Recipients::default(),
            "from@example.com",
            "hi",
            SendEmailOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "to" }));

        let err = SendEmail::to_one("a@example.com", " ", "hi", SendEmailOptions::default())
            .unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "from" }));
    }

    #[test]
    fn contact_draft_requires_email() {
        let err = ContactDraft::new("  ", "Ada", "Lovelace", true).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "email" }));
    }

    #[test]
    fn attachment_requires_filename() {
        assert!(Attachment::new("", "aGk=").is_err());
        let attachment = Attachment::new("hi.txt", "aGk=").unwrap();
        assert_eq!(attachment.filename(), "hi.txt");
        assert_eq!(attachment.content(), "aGk=");
    }
}
