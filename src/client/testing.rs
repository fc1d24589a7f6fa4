use std::error::Error as StdError;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use url::Url;

use super::{BoxFuture, HttpResponse, HttpTransport, MailChimpClient};
use crate::domain::ApiKey;

#[derive(Debug, Clone)]
pub(super) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    last_url: Option<String>,
    last_body: Option<Value>,
    requests: usize,
    response_status: u16,
    response_body: String,
    failure: Option<String>,
}

impl FakeTransport {
    pub(super) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                last_url: None,
                last_body: None,
                requests: 0,
                response_status,
                response_body: response_body.into(),
                failure: None,
            })),
        }
    }

    /// Every request fails before a response is produced.
    pub(super) fn failing(message: impl Into<String>) -> Self {
        let transport = Self::new(0, "");
        transport.state.lock().unwrap().failure = Some(message.into());
        transport
    }

    pub(super) fn last_request(&self) -> Option<(String, Value)> {
        let state = self.state.lock().unwrap();
        state.last_url.clone().zip(state.last_body.clone())
    }

    pub(super) fn requests(&self) -> usize {
        self.state.lock().unwrap().requests
    }
}

impl HttpTransport for FakeTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let (status, body, failure) = {
                let mut state = self.state.lock().unwrap();
                state.requests += 1;
                state.last_url = Some(url.to_owned());
                state.last_body = Some(body);
                (
                    state.response_status,
                    state.response_body.clone(),
                    state.failure.clone(),
                )
            };
            if let Some(message) = failure {
                return Err(message.into());
            }
            Ok(HttpResponse { status, body })
        })
    }
}

pub(super) fn make_client(transport: FakeTransport) -> MailChimpClient {
    MailChimpClient {
        api_key: ApiKey::new("0123456789abcdef-us1").unwrap(),
        base_url: Url::parse("https://us1.api.mailchimp.com/1.3/").unwrap(),
        http: Arc::new(transport),
    }
}
