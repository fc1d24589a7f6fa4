use serde_json::Value;

/// Failure report MailChimp sends instead of an HTTP error status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub code: i64,
    pub message: String,
}

/// Look for `{"error": "...", "code": N}` in a response body.
///
/// This is a best-effort probe, not validation: bodies that are not JSON
/// objects, or whose `error`/`code` members have other types, count as "no
/// error". An envelope is reported when the message is non-empty or the code
/// is non-zero.
pub fn probe_error(body: &str) -> Option<ErrorEnvelope> {
    let Ok(Value::Object(object)) = serde_json::from_str::<Value>(body) else {
        return None;
    };

    let message = object
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let code = object
        .get("code")
        .and_then(Value::as_i64)
        .unwrap_or_default();

    if message.is_empty() && code == 0 {
        return None;
    }

    Some(ErrorEnvelope {
        code,
        message: message.to_owned(),
    })
}
