use std::io;

use mailchimp_legacy::{ApiKey, MailChimpClient, Params, Scheme};
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = required_env("MAILCHIMP_API_KEY")?;
    let list_id = required_env("MAILCHIMP_LIST")?;

    let client = MailChimpClient::new(ApiKey::new(api_key)?, Scheme::Https)?;
    let params = Params::new().with("id", list_id);

    for entry in client.list_growth_history(Some(&params)).await? {
        let month = entry
            .month
            .map(|month| month.to_string())
            .unwrap_or_default();
        println!(
            "{month}: existing {}, imports {}, optins {}",
            entry.existing, entry.imports, entry.optins
        );
    }

    Ok(())
}
