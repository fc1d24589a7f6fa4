use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::de::{DeserializeOwned, Error as DeError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::domain::validation::ValidationError;

static DATACENTER_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-z]+[0-9]+$").expect("datacenter pattern is valid"));

#[derive(Clone, PartialEq, Eq, Hash)]
/// MailChimp API key (`apikey`).
///
/// Invariant: non-empty after trimming and ends with a datacenter token such as
/// `us1` (the part after the dash in `0123456789abcdef-us1`). The token selects
/// the regional host every request is sent to.
pub struct ApiKey {
    value: String,
    datacenter_start: usize,
}

impl ApiKey {
    /// Request body field carrying the key (`apikey`).
    pub const FIELD: &'static str = "apikey";

    /// Create a validated [`ApiKey`] and locate its datacenter suffix.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let suffix = DATACENTER_SUFFIX
            .find(trimmed)
            .ok_or(ValidationError::MissingDatacenter)?;
        Ok(Self {
            datacenter_start: suffix.start(),
            value: trimmed.to_owned(),
        })
    }

    /// Borrow the full key as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Datacenter token, e.g. `us1`.
    pub fn datacenter(&self) -> &str {
        &self.value[self.datacenter_start..]
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("datacenter", &self.datacenter())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// URL scheme used to reach the API.
pub enum Scheme {
    #[default]
    Https,
    Http,
}

impl Scheme {
    /// `true` selects [`Scheme::Https`].
    pub fn from_secure(secure: bool) -> Self {
        if secure { Self::Https } else { Self::Http }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Https => "https",
            Self::Http => "http",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Which of the provider's date layouts a [`ChimpTime`] was read from.
pub enum ChimpTimeLayout {
    /// `YYYY-MM`
    Month,
    /// `YYYY-MM-DD`
    Date,
    /// `YYYY-MM-DD HH:MM:SS`
    DateTime,
}

impl ChimpTimeLayout {
    fn format(self) -> &'static str {
        match self {
            Self::Month => "%Y-%m",
            Self::Date => "%Y-%m-%d",
            Self::DateTime => ChimpTime::WIRE_FORMAT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Date/time as MailChimp returns it.
///
/// MailChimp does not use RFC 3339; depending on the method a field holds a
/// month (`2011-05`), a day (`2011-05-03`) or a timestamp
/// (`2011-05-03 14:02:11`). The layout is kept so the value serializes back to
/// the same text. Month values resolve to the first day of the month at
/// midnight; day values resolve to midnight.
pub struct ChimpTime {
    datetime: NaiveDateTime,
    layout: ChimpTimeLayout,
}

impl ChimpTime {
    /// `strftime` layout MailChimp uses for timestamps, both in responses and
    /// in `campaignSchedule` parameters.
    pub const WIRE_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    /// Parse one of the three provider layouts, chosen by input length.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidChimpTime {
            input: input.to_owned(),
        };

        let (datetime, layout) = match input.len() {
            7 => {
                let date = NaiveDate::parse_from_str(&format!("{input}-01"), "%Y-%m-%d")
                    .map_err(|_| invalid())?;
                (date.and_time(chrono::NaiveTime::MIN), ChimpTimeLayout::Month)
            }
            10 => {
                let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| invalid())?;
                (date.and_time(chrono::NaiveTime::MIN), ChimpTimeLayout::Date)
            }
            19 => (
                NaiveDateTime::parse_from_str(input, Self::WIRE_FORMAT).map_err(|_| invalid())?,
                ChimpTimeLayout::DateTime,
            ),
            _ => return Err(invalid()),
        };

        Ok(Self { datetime, layout })
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    pub fn layout(&self) -> ChimpTimeLayout {
        self.layout
    }
}

impl fmt::Display for ChimpTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime.format(self.layout.format()))
    }
}

impl Serialize for ChimpTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChimpTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
/// Untyped JSON returned by methods whose schema is not reliably documented.
///
/// Accessors take JSON pointers (`/twitter/clicks/clicks`). Numeric accessors
/// also accept quoted numbers, which MailChimp emits in several places.
pub struct JsonDocument(Value);

impl JsonDocument {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// Top-level object member.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.0.pointer(pointer)
    }

    pub fn str_at(&self, pointer: &str) -> Option<&str> {
        self.pointer(pointer).and_then(Value::as_str)
    }

    pub fn i64_at(&self, pointer: &str) -> Option<i64> {
        match self.pointer(pointer)? {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn f64_at(&self, pointer: &str) -> Option<f64> {
        match self.pointer(pointer)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn bool_at(&self, pointer: &str) -> Option<bool> {
        self.pointer(pointer).and_then(Value::as_bool)
    }

    /// Attempt a typed decode, e.g. into [`crate::domain::EepUrlStats`].
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.0)
    }

    /// Typed decode of a keyed map, e.g. the per-URL [`crate::domain::ClickStats`].
    ///
    /// An empty list (`[]`) or `null` reads as an empty map.
    pub fn decode_map<V: DeserializeOwned>(
        &self,
    ) -> Result<BTreeMap<String, V>, serde_json::Error> {
        lenient_map::deserialize(&self.0)
    }
}

impl From<Value> for JsonDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Numeric `code` of a MailChimp error envelope.
pub struct ErrorCode(i64);

impl ErrorCode {
    pub fn new(code: i64) -> Self {
        Self(code)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }

    pub fn known_kind(self) -> Option<KnownErrorCode> {
        KnownErrorCode::from_code(self.0)
    }

    /// The key is wrong, disabled, or the account cannot use the API.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_auth_error()
        )
    }

    /// The referenced list, campaign, member or user does not exist.
    pub fn is_not_found(self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_not_found()
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KnownErrorCode {
    ServerMethodUnknown,
    ServerInvalidParameters,
    UnknownException,
    RequestTimedOut,
    ValidationError,
    UserUnknown,
    UserDisabled,
    UserDoesNotExist,
    UserNotApproved,
    InvalidApiKey,
    UserUnderMaintenance,
    InvalidAppKey,
    InvalidIp,
    UserDoesExist,
    UserInvalidAction,
    UserMissingEmail,
    UserCannotSendCampaign,
    ListDoesNotExist,
    ListAlreadySubscribed,
    ListNotSubscribed,
    EmailNotExists,
    CampaignDoesNotExist,
    CampaignStatsNotAvailable,
    InvalidEcommOrder,
    InvalidEmail,
    InvalidOptions,
}

impl KnownErrorCode {
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            -32601 => Self::ServerMethodUnknown,
            -32602 => Self::ServerInvalidParameters,
            -99 => Self::UnknownException,
            -98 => Self::RequestTimedOut,
            -100 => Self::ValidationError,
            100 => Self::UserUnknown,
            101 => Self::UserDisabled,
            102 => Self::UserDoesNotExist,
            103 => Self::UserNotApproved,
            104 => Self::InvalidApiKey,
            105 => Self::UserUnderMaintenance,
            106 => Self::InvalidAppKey,
            107 => Self::InvalidIp,
            108 => Self::UserDoesExist,
            120 => Self::UserInvalidAction,
            121 => Self::UserMissingEmail,
            122 => Self::UserCannotSendCampaign,
            200 => Self::ListDoesNotExist,
            214 => Self::ListAlreadySubscribed,
            215 => Self::ListNotSubscribed,
            232 => Self::EmailNotExists,
            300 => Self::CampaignDoesNotExist,
            301 => Self::CampaignStatsNotAvailable,
            330 => Self::InvalidEcommOrder,
            502 => Self::InvalidEmail,
            506 => Self::InvalidOptions,
            _ => return None,
        })
    }

    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::UserUnknown
                | Self::UserDisabled
                | Self::UserDoesNotExist
                | Self::UserNotApproved
                | Self::InvalidApiKey
                | Self::InvalidAppKey
                | Self::InvalidIp
        )
    }

    pub fn is_not_found(self) -> bool {
        matches!(
            self,
            Self::UserDoesNotExist
                | Self::ListDoesNotExist
                | Self::ListNotSubscribed
                | Self::EmailNotExists
                | Self::CampaignDoesNotExist
        )
    }
}

/// Serde adapter for optional [`ChimpTime`] fields: `null` and `""` read as
/// `None`, `None` writes `null`.
pub(crate) mod optional_chimp_time {
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::ChimpTime;

    pub fn serialize<S>(value: &Option<ChimpTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.collect_str(time),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<ChimpTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.is_empty() => ChimpTime::parse(&raw).map(Some).map_err(D::Error::custom),
            _ => Ok(None),
        }
    }
}

/// Serde adapter for keyed maps. MailChimp writes an empty map as `[]`, so an
/// empty list and `null` both read as an empty map.
pub(crate) mod lenient_map {
    use std::collections::BTreeMap;

    use serde::de::{Error as DeError, IgnoredAny};
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MapOrList<V> {
        Map(BTreeMap<String, V>),
        List(Vec<IgnoredAny>),
        Null,
    }

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<BTreeMap<String, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        match MapOrList::deserialize(deserializer)? {
            MapOrList::Map(map) => Ok(map),
            MapOrList::List(items) if items.is_empty() => Ok(BTreeMap::new()),
            MapOrList::List(items) => Err(D::Error::invalid_length(
                items.len(),
                &"a map or an empty list",
            )),
            MapOrList::Null => Ok(BTreeMap::new()),
        }
    }
}
