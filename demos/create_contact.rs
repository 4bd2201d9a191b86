use std::io;

use unsend::{ApiKey, ContactBookId, ContactDraft, UnsendClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("UNSEND_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNSEND_API_KEY environment variable is required",
        )
    })?;
    let book = std::env::var("UNSEND_CONTACT_BOOK").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNSEND_CONTACT_BOOK environment variable is required",
        )
    })?;
    let email = std::env::var("UNSEND_CONTACT_EMAIL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNSEND_CONTACT_EMAIL environment variable is required",
        )
    })?;

    let client = UnsendClient::new(ApiKey::new(api_key)?)?;
    let book = ContactBookId::new(book)?;
    let draft = ContactDraft::new(email, "Demo", "Contact", true)?;

    match client.contacts().create(&book, draft).await? {
        Some(contact) => println!("created: {}", contact.contact_id),
        None => println!("contact was not created"),
    }

    Ok(())
}
