use crate::domain::validation::ValidationError;
use crate::domain::value::ScheduledAt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Normalized list of recipient addresses (`to`, `cc`, `bcc`).
///
/// Single-address and list construction produce the same wire shape: a JSON
/// array. An empty list is valid for `cc`/`bcc`; [`SendEmail::new`] rejects it
/// for `to`.
pub struct Recipients(Vec<String>);

impl Recipients {
    /// A single recipient, normalized into a one-element list.
    pub fn one(address: impl Into<String>) -> Result<Self, ValidationError> {
        Self::many(vec![address.into()])
    }

    /// A list of recipients; every entry must be non-empty after trimming.
    pub fn many(addresses: Vec<String>) -> Result<Self, ValidationError> {
        let mut normalized = Vec::with_capacity(addresses.len());
        for address in addresses {
            let trimmed = address.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::Empty { field: "recipient" });
            }
            normalized.push(trimmed.to_owned());
        }
        Ok(Self(normalized))
    }

    /// Borrow the normalized addresses.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Whether the list holds no addresses.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Email attachment: a filename plus base64-encoded content.
pub struct Attachment {
    filename: String,
    content: String,
}

impl Attachment {
    /// Create an attachment. The content is expected to be base64 already;
    /// no transcoding happens client-side.
    pub fn new(
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let filename = filename.into();
        if filename.trim().is_empty() {
            return Err(ValidationError::Empty { field: "filename" });
        }
        Ok(Self {
            filename,
            content: content.into(),
        })
    }

    /// Attachment filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Base64-encoded attachment content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, Default)]
/// Optional send-email fields.
///
/// Unset scalars go on the wire as empty strings and unset lists as empty
/// arrays; the Unsend API does not distinguish "absent" from "empty" here.
/// At least one of `text`/`html` is needed for a deliverable message, but
/// that is enforced server-side, not by the client.
pub struct SendEmailOptions {
    pub template_id: Option<String>,
    pub reply_to: Option<String>,
    pub cc: Recipients,
    pub bcc: Recipients,
    pub text: Option<String>,
    pub html: Option<String>,
    pub attachments: Vec<Attachment>,
    /// When `None`, the send defaults to the minimum future-scheduling
    /// window (now + 5 seconds) at encode time.
    pub scheduled_at: Option<ScheduledAt>,
}

#[derive(Debug, Clone)]
/// A validated send-email request.
pub struct SendEmail {
    to: Recipients,
    from: String,
    subject: String,
    options: SendEmailOptions,
}

impl SendEmail {
    /// Create a request addressed to one or more recipients.
    pub fn new(
        to: Recipients,
        from: impl Into<String>,
        subject: impl Into<String>,
        options: SendEmailOptions,
    ) -> Result<Self, ValidationError> {
        if to.is_empty() {
            return Err(ValidationError::Empty { field: "to" });
        }
        let from = from.into();
        if from.trim().is_empty() {
            return Err(ValidationError::Empty { field: "from" });
        }
        Ok(Self {
            to,
            from,
            subject: subject.into(),
            options,
        })
    }

    /// Convenience for a single recipient; wire-identical to calling
    /// [`SendEmail::new`] with a one-element [`Recipients`] list.
    pub fn to_one(
        to: impl Into<String>,
        from: impl Into<String>,
        subject: impl Into<String>,
        options: SendEmailOptions,
    ) -> Result<Self, ValidationError> {
        Self::new(Recipients::one(to)?, from, subject, options)
    }

    /// The recipients (`to`).
    pub fn to(&self) -> &Recipients {
        &self.to
    }

    /// The sender address (`from`).
    pub fn from(&self) -> &str {
        &self.from
    }

    /// The subject line.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The optional fields.
    pub fn options(&self) -> &SendEmailOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// Fields for creating (or upserting) a contact in a contact book.
pub struct ContactDraft {
    email: String,
    first_name: String,
    last_name: String,
    subscribed: bool,
}

impl ContactDraft {
    /// Create a draft; the email address must be non-empty.
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        subscribed: bool,
    ) -> Result<Self, ValidationError> {
        let email = email.into();
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        Ok(Self {
            email: trimmed.to_owned(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            subscribed,
        })
    }

    /// The contact's email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The contact's first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The contact's last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Whether the contact is subscribed.
    pub fn subscribed(&self) -> bool {
        self.subscribed
    }
}

#[derive(Debug, Clone, Default)]
/// Fields for updating an existing contact. The email address is immutable
/// on the Unsend side and is not part of the update shape.
pub struct ContactUpdate {
    pub first_name: String,
    pub last_name: String,
    pub subscribed: bool,
}
