use std::io;

use unsend::{ApiKey, SendEmail, SendEmailOptions, UnsendClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("UNSEND_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNSEND_API_KEY environment variable is required",
        )
    })?;
    let to = std::env::var("UNSEND_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNSEND_TO environment variable is required",
        )
    })?;
    let from = std::env::var("UNSEND_FROM").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNSEND_FROM environment variable is required",
        )
    })?;

    let client = UnsendClient::new(ApiKey::new(api_key)?)?;
    let request = SendEmail::to_one(
        to,
        from,
        "Hello from the unsend demo",
        SendEmailOptions {
            text: Some("Hello from Rust.".to_owned()),
            ..Default::default()
        },
    )?;

    let email_id = client.emails().send(request).await?;
    println!("sent: {}", email_id.as_str());

    Ok(())
}
