use serde::{Deserialize, Serialize};

use crate::domain::value::JsonDocument;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Result of `campaignContent`.
pub struct CampaignContent {
    pub html: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Result of `campaignShareReport`.
pub struct CampaignShareReport {
    pub title: String,
    pub url: String,
    pub secure_url: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Result of `campaigns`: one page of campaigns plus the total matching count.
pub struct CampaignsResponse {
    pub total: i64,
    pub data: Vec<Campaign>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    pub id: String,
    pub web_id: i64,
    pub list_id: String,
    /// `None` when the campaign is not filed in a folder.
    pub folder_id: Option<i64>,
    pub template_id: Option<i64>,
    pub content_type: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub create_time: String,
    /// `None` until the campaign has been sent.
    pub send_time: Option<String>,
    pub emails_sent: i64,
    pub status: String,
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub to_name: String,
    pub archive_url: String,
    pub inline_css: bool,
    pub analytics: String,
    pub analytics_tag: String,
    pub authenticate: bool,
    pub ecomm360: bool,
    pub auto_tweet: bool,
    pub auto_fb_post: String,
    pub auto_footer: bool,
    pub timewarp: bool,
    pub timewarp_schedule: Option<String>,
    pub tracking: CampaignTracking,
    pub segment_text: String,
    pub segment_opts: SegmentOptions,
    /// Options specific to the campaign type (rss, auto, ...); shape varies.
    pub type_opts: JsonDocument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignTracking {
    pub html_clicks: bool,
    pub text_clicks: bool,
    pub opens: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    /// `any` or `all`.
    #[serde(rename = "match")]
    pub match_mode: String,
    pub conditions: Vec<JsonDocument>,
}
