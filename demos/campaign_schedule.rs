use std::io;

use chrono::{Duration, Utc};
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
    let campaign_id = required_env("MAILCHIMP_CID")?;
    let hours: i64 = std::env::var("MAILCHIMP_DELAY_HOURS")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(24);

    let client = MailChimpClient::new(ApiKey::new(api_key)?, Scheme::Https)?;
    let at = Utc::now() + Duration::hours(hours);
    let params = Params::new()
        .with("cid", campaign_id)
        .with("schedule_time", at);

    let scheduled = client.campaign_schedule(Some(&params)).await?;
    println!("scheduled for {at}: {scheduled}");

    Ok(())
}
