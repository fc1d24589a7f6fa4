use serde::{Deserialize, Serialize};

use crate::domain::value::{ChimpTime, optional_chimp_time};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Addresses that complained about campaigns sent to a list (`listAbuseReports`).
pub struct ListAbuseReportsResponse {
    pub total: i64,
    pub data: Vec<ListAbuseReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListAbuseReport {
    #[serde(with = "optional_chimp_time")]
    pub date: Option<ChimpTime>,
    pub email: String,
    pub campaign_id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// One day of aggregated list activity (`listActivity`, up to 180 days).
pub struct ListActivity {
    pub user_id: i64,
    #[serde(with = "optional_chimp_time")]
    pub day: Option<ChimpTime>,
    pub emails_sent: i64,
    pub unique_opens: i64,
    pub recipient_clicks: i64,
    pub hard_bounce: i64,
    pub soft_bounce: i64,
    pub abuse_reports: i64,
    pub subs: i64,
    pub unsubs: i64,
    pub other_adds: i64,
    pub other_removes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchSubscribeResponse {
    pub add_count: i64,
    pub update_count: i64,
    pub error_count: i64,
    pub errors: Vec<BatchMemberError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchUnsubscribeResponse {
    pub success_count: i64,
    pub error_count: i64,
    pub errors: Vec<BatchMemberError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchMemberError {
    pub email: String,
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Email clients seen among list subscribers (`listClients`).
///
/// The API sends `members` as a quoted number; the response is patched before
/// decoding so it lands here as an integer.
pub struct ListClientsResponse {
    pub desktop: ClientPlatform,
    pub mobile: ClientPlatform,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientPlatform {
    pub penetration: f64,
    pub clients: Vec<EmailClient>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailClient {
    pub client: String,
    pub icon: String,
    pub percent: f64,
    pub members: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// One month of `listGrowthHistory`; the counters arrive quoted and are patched.
pub struct GrowthHistoryEntry {
    #[serde(with = "optional_chimp_time")]
    pub month: Option<ChimpTime>,
    pub existing: i64,
    pub imports: i64,
    pub optins: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestGrouping {
    pub id: i64,
    pub name: String,
    /// `checkboxes`, `radio`, `select` or `hidden`.
    #[serde(alias = "form_fields")]
    pub form_field: String,
    pub groups: Vec<InterestGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestGroup {
    pub bit: String,
    pub name: String,
    pub display_order: String,
    pub subscribers: i64,
}
