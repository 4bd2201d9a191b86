use std::io;

use unsend::{ApiKey, UnsendClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("UNSEND_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNSEND_API_KEY environment variable is required",
        )
    })?;

    let client = UnsendClient::new(ApiKey::new(api_key)?)?;
    for domain in client.domains().list().await? {
        println!("{} ({}): {}", domain.name, domain.region, domain.status);
    }

    Ok(())
}
