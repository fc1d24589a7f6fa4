use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
/// One request parameter value.
///
/// Date/times are kept apart from plain JSON so the client can render them in
/// whatever layout the target method expects.
pub enum ParamValue {
    Json(Value),
    DateTime(DateTime<FixedOffset>),
}

impl From<Value> for ParamValue {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<Map<String, Value>> for ParamValue {
    fn from(value: Map<String, Value>) -> Self {
        Self::Json(Value::Object(value))
    }
}

impl<T: Into<Value>> From<Vec<T>> for ParamValue {
    fn from(value: Vec<T>) -> Self {
        Self::Json(value.into())
    }
}

impl From<NaiveDateTime> for ParamValue {
    /// Naive date/times are taken to be UTC.
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value.and_utc().fixed_offset())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ParamValue {
    fn from(value: DateTime<Tz>) -> Self {
        Self::DateTime(value.fixed_offset())
    }
}

macro_rules! json_param_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Json(Value::from(value))
                }
            }
        )*
    };
}

json_param_from!(&str, String, bool, i32, i64, u32, u64, f64);

#[derive(Debug, Clone, Default, PartialEq)]
/// Parameters for one API call.
///
/// The client copies these into the request body and adds the API key; the
/// caller's value is never modified, so one `Params` can be reused as a
/// template across calls.
///
/// ```rust
/// use mailchimp_legacy::Params;
///
/// let params = Params::new()
///     .with("cid", "0123abcd")
///     .with("for_archive", true);
/// assert_eq!(params.len(), 2);
/// ```
pub struct Params {
    entries: BTreeMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Params::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Insert any serializable value (structs, nested maps, batches).
    pub fn insert_serialized<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Option<ParamValue>, serde_json::Error> {
        let value = serde_json::to_value(value)?;
        Ok(self.insert(key, value))
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
