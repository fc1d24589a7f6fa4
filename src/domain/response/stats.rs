//! Campaign reporting results, including the AIM (Analytics/Inbox Monitoring)
//! per-member reports.
//!
//! Several of these shapes were never checked against live responses
//! (`campaignEcommOrders`, `campaignStats` nested sections, the click detail
//! reports); every field defaults when missing so partial payloads still decode.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value::lenient_map;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignAbuseReportsResponse {
    pub total: i64,
    pub data: Vec<CampaignAbuseReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignAbuseReport {
    pub date: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// One entry of `campaignAdvice`.
pub struct CampaignAdvice {
    pub msg: String,
    /// `negative`, `positive` or `neutral`.
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Google Analytics figures for a campaign (`campaignAnalytics`).
pub struct CampaignAnalytics {
    pub visits: i64,
    pub pages: i64,
    pub new_visits: i64,
    pub bounces: i64,
    pub time_on_site: f64,
    pub goal_conversions: i64,
    pub goal_value: f64,
    pub revenue: f64,
    pub transactions: i64,
    pub ecomm_conversions: i64,
    pub goals: Vec<AnalyticsGoal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsGoal {
    pub name: String,
    pub conversions: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Full bounce message (`campaignBounceMessage`).
pub struct BounceMessage {
    pub date: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceMessagesResponse {
    pub total: i64,
    pub data: Vec<BounceMessage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Click counters for one URL; `campaignClickStats` returns a map keyed by URL.
pub struct ClickStats {
    pub clicks: i64,
    pub unique: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Provisional typed view of `campaignEepUrlStats`.
///
/// The published documentation for this method does not match what the API
/// returns, so [`crate::MailChimpClient::campaign_eep_url_stats`] hands back a
/// [`crate::JsonDocument`]; use [`crate::JsonDocument::decode`] to try this
/// shape.
pub struct EepUrlStats {
    pub twitter: EepTwitter,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EepTwitter {
    pub tweets: i64,
    pub first_tweet: String,
    pub last_tweet: String,
    pub retweets: i64,
    pub first_retweet: String,
    pub last_retweet: String,
    pub statuses: Vec<EepTwitterStatus>,
    pub clicks: EepTwitterClicks,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EepTwitterStatus {
    pub status: String,
    pub screen_name: String,
    pub status_id: String,
    pub datetime: String,
    pub is_retweet: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EepTwitterClicks {
    pub clicks: i64,
    pub first_click: String,
    pub last_click: String,
    pub locations: Vec<EepClickLocation>,
    pub referrers: Vec<EepClickReferrer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EepClickLocation {
    pub country: String,
    pub region: String,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EepClickReferrer {
    pub referrer: String,
    pub clicks: i64,
    pub first_click: String,
    pub last_click: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Per-domain delivery figures (`campaignEmailDomainPerformance`).
pub struct EmailDomainPerformance {
    pub domain: String,
    pub total_sent: i64,
    pub emails: i64,
    pub bounces: i64,
    pub opens: i64,
    pub clicks: i64,
    pub unsubs: i64,
    pub delivered: i64,
    pub emails_pct: f64,
    pub opens_pct: f64,
    pub clicks_pct: f64,
    pub unsubs_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryOpens {
    pub code: String,
    pub name: String,
    pub opens: i64,
    /// Whether `campaignGeoOpensForCountry` has region data for this country.
    pub region_detail: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionOpens {
    pub code: String,
    pub name: String,
    pub opens: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignMembersResponse {
    pub total: i64,
    pub data: Vec<CampaignMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignMember {
    pub email: String,
    pub status: String,
    pub absplit_group: String,
    pub tz_group: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Aggregate counters for a sent campaign (`campaignStats`).
pub struct CampaignStats {
    pub syntax_errors: i64,
    pub hard_bounces: i64,
    pub soft_bounces: i64,
    pub unsubscribes: i64,
    pub abuse_reports: i64,
    pub forwards: i64,
    pub forwards_opens: i64,
    pub opens: i64,
    pub last_open: Option<String>,
    pub unique_opens: i64,
    pub clicks: i64,
    pub unique_clicks: i64,
    pub last_click: Option<String>,
    pub users_who_clicked: i64,
    pub emails_sent: i64,
    pub unique_likes: i64,
    pub recipient_likes: i64,
    pub facebook_likes: i64,
    pub absplit: AbsplitStats,
    /// Keyed by timezone group for Timewarp campaigns.
    #[serde(deserialize_with = "lenient_map::deserialize")]
    pub timewarp: BTreeMap<String, TimewarpStats>,
    pub timeseries: Vec<TimeseriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AbsplitStats {
    pub bounces_a: i64,
    pub bounces_b: i64,
    pub forwards_a: i64,
    pub forwards_b: i64,
    pub abuse_reports_a: i64,
    pub abuse_reports_b: i64,
    pub unsubs_a: i64,
    pub unsubs_b: i64,
    pub recipients_click_a: i64,
    pub recipients_click_b: i64,
    pub forwards_opens_a: i64,
    pub forwards_opens_b: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimewarpStats {
    pub opens: i64,
    pub last_open: Option<String>,
    pub unique_opens: i64,
    pub clicks: i64,
    pub last_click: Option<String>,
    pub bounces: i64,
    pub total: i64,
    pub sent: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeseriesPoint {
    pub timestamp: String,
    pub emails_sent: i64,
    pub unique_opens: i64,
    pub recipients_click: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignUnsubscribesResponse {
    pub total: i64,
    pub data: Vec<CampaignUnsubscribe>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignUnsubscribe {
    pub email: String,
    pub reason: String,
    pub reason_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// `campaignClickDetailAIM`: members who clicked one URL.
pub struct ClickDetailAimResponse {
    pub total: i64,
    pub data: Vec<MemberClicks>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberClicks {
    pub email: String,
    pub clicks: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// `campaignEmailStatsAIM`: actions for the requested addresses.
pub struct EmailStatsAimResponse {
    pub success: i64,
    pub error: i64,
    pub data: Vec<AimAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// `campaignEmailStatsAIMAll`: actions keyed by member address.
pub struct EmailStatsAimAllResponse {
    pub total: i64,
    #[serde(deserialize_with = "lenient_map::deserialize")]
    pub data: BTreeMap<String, Vec<AimAction>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AimAction {
    /// `open`, `click` or `bounce`.
    pub action: String,
    pub timestamp: String,
    /// Only present for clicks.
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotOpenedAimResponse {
    pub total: i64,
    pub data: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenedAimResponse {
    pub total: i64,
    pub data: Vec<MemberOpens>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberOpens {
    pub email: String,
    pub open_count: i64,
}
