use std::io;

use unsend::{ApiKey, EmailId, UnsendClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("UNSEND_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNSEND_API_KEY environment variable is required",
        )
    })?;
    let email_id = std::env::var("UNSEND_EMAIL_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNSEND_EMAIL_ID environment variable is required",
        )
    })?;

    let client = UnsendClient::new(ApiKey::new(api_key)?)?;
    let data = client.emails().get(&EmailId::new(email_id)?).await?;

    println!("subject: {}", data.subject);
    for event in &data.email_events {
        println!("{} at {}", event.status, event.created_at);
    }

    Ok(())
}
