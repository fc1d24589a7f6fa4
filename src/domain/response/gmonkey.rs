use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Recent activity of a Golden Monkey member (`gmonkeyActivity`).
pub struct GmonkeyActivity {
    pub action: String,
    pub timestamp: String,
    pub url: String,
    pub unique_id: String,
    pub title: String,
    pub list_name: String,
    pub email: String,
    pub fname: String,
    pub lname: String,
    pub member_rating: i64,
    pub member_since: String,
    pub geo: GeoLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoLocation {
    pub latitude: String,
    pub longitude: String,
    pub gmtoff: String,
    pub dstoff: String,
    pub timezone: String,
    pub cc: String,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Outcome of `gmonkeyAdd` and `gmonkeyDel`.
pub struct GmonkeyBatchResult {
    pub success: i64,
    pub errors: i64,
    pub data: Vec<GmonkeyBatchError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GmonkeyBatchError {
    pub email_address: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GmonkeyMember {
    pub list_id: String,
    pub list_name: String,
    pub email: String,
    pub fname: String,
    pub lname: String,
    pub member_rating: i64,
    pub member_since: String,
}
