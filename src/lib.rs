//! Typed Rust client for the MailChimp 1.3 HTTP API.
//!
//! The crate has a domain layer of strong types (API key, parameters, result
//! schemas), a transport layer for wire-format quirks (endpoint URL, request
//! body, error envelope, response patches), and a client layer with one async
//! method per remote operation.
//!
//! ```rust,no_run
//! use mailchimp_legacy::{ApiKey, MailChimpClient, Params, Scheme};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mailchimp_legacy::MailChimpError> {
//!     let client = MailChimpClient::new(ApiKey::new("0123456789abcdef-us1")?, Scheme::Https)?;
//!     println!("{}", client.ping().await?);
//!
//!     let params = Params::new().with("id", "b1234346").with("start", 0).with("limit", 25);
//!     for day in client.list_activity(Some(&params)).await? {
//!         println!("{:?}: {} sent", day.day, day.emails_sent);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{MailChimpClient, MailChimpClientBuilder, MailChimpError};
pub use domain::*;
