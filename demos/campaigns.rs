use std::io;

use mailchimp_legacy::{ApiKey, MailChimpClient, Params, Scheme};
use serde_json::json;
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
    let status = std::env::var("MAILCHIMP_STATUS").unwrap_or_else(|_| "sent".to_owned());

    let client = MailChimpClient::new(ApiKey::new(api_key)?, Scheme::Https)?;
    let params = Params::new()
        .with("filters", json!({ "status": status }))
        .with("limit", 10);

    let campaigns = client.campaigns(Some(&params)).await?;
    println!("{} campaigns match", campaigns.total);
    for campaign in &campaigns.data {
        println!(
            "{} {:<40} sent: {:?}, emails: {}",
            campaign.id, campaign.title, campaign.send_time, campaign.emails_sent
        );
    }

    Ok(())
}
