use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::domain::{ApiKey, ChimpTime, Method, ParamValue, Params};

/// Parameters of `campaignSchedule` that MailChimp expects as
/// `YYYY-MM-DD HH:MM:SS` in GMT.
const SCHEDULE_TIME_KEYS: &[&str] = &["schedule_time", "schedule_time_b"];

fn wire_time_keys(method: Method) -> &'static [&'static str] {
    match method {
        Method::CampaignSchedule => SCHEDULE_TIME_KEYS,
        _ => &[],
    }
}

/// Build the JSON request body: a fresh copy of `params` plus `apikey`.
///
/// Date/times under the method's wire-time keys are rendered in the provider
/// layout (in UTC); all other date/times are RFC 3339.
pub fn encode_request(method: Method, api_key: &ApiKey, params: Option<&Params>) -> Value {
    let time_keys = wire_time_keys(method);
    let mut body = Map::new();

    if let Some(params) = params {
        for (key, value) in params.iter() {
            let value = match value {
                ParamValue::Json(json) => json.clone(),
                ParamValue::DateTime(at) if time_keys.iter().any(|wire| *wire == key) => {
                    let utc = at.with_timezone(&Utc);
                    Value::String(utc.format(ChimpTime::WIRE_FORMAT).to_string())
                }
                ParamValue::DateTime(at) => {
                    Value::String(at.to_rfc3339_opts(SecondsFormat::Secs, true))
                }
            };
            body.insert(key.to_owned(), value);
        }
    }

    body.insert(
        ApiKey::FIELD.to_owned(),
        Value::String(api_key.as_str().to_owned()),
    );
    Value::Object(body)
}
