//! Typed Rust client for the Unsend transactional-email HTTP API.
//!
//! The design is layered: a domain layer of strong types with validation and
//! no I/O, a transport layer for routes and wire-format details, and a small
//! client layer orchestrating requests. One [`UnsendClient`] owns the API key
//! and base URL and exposes resource clients for emails, contacts, and
//! sending domains.
//!
//! ```rust,no_run
//! use unsend::{ApiKey, SendEmail, SendEmailOptions, UnsendClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), unsend::UnsendError> {
//!     let client = UnsendClient::new(ApiKey::new("us_...")?)?;
//!     let request = SendEmail::to_one(
//!         "to@example.com",
//!         "from@example.com",
//!         "hello",
//!         SendEmailOptions {
//!             text: Some("hello from Rust".to_owned()),
//!             ..Default::default()
//!         },
//!     )?;
//!     let email_id = client.emails().send(request).await?;
//!     println!("sent: {}", email_id.as_str());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ContactsClient, DEFAULT_BASE_URL, DomainsClient, EmailsClient, ResponseMode, UnsendClient,
    UnsendClientBuilder, UnsendError,
};
pub use domain::{
    ApiKey, Attachment, Contact, ContactBookId, ContactDraft, ContactId, ContactUpdate,
    DEFAULT_SEND_DELAY_SECONDS, DomainData, EmailData, EmailEvent, EmailId, EventData, Recipients,
    ScheduledAt, SendEmail, SendEmailOptions, ValidationError,
};
