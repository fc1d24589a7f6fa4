use std::io;

use mailchimp_legacy::{ApiKey, MailChimpClient, Scheme};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("MAILCHIMP_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MAILCHIMP_API_KEY environment variable is required",
        )
    })?;

    let client = MailChimpClient::new(ApiKey::new(api_key)?, Scheme::Https)?;
    println!("{}", client.ping().await?);

    Ok(())
}
