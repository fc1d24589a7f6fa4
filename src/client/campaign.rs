//! Campaign management: create, edit, schedule and send campaigns.
//!
//! <https://apidocs.mailchimp.com/api/1.3/#campaign-related>

use std::collections::BTreeMap;

use super::{MailChimpClient, MailChimpError};
use crate::transport::DecodeError;
use crate::domain::{
    CampaignContent, CampaignShareReport, CampaignsResponse, JsonDocument, Method, Params,
};

impl MailChimpClient {
    /// HTML and plain-text content of a sent or saved campaign.
    pub async fn campaign_content(
        &self,
        params: Option<&Params>,
    ) -> Result<CampaignContent, MailChimpError> {
        self.call_json(Method::CampaignContent, params).await
    }

    /// Create a new draft campaign and return its id.
    ///
    /// Expects `type`, `options` and `content`, and `segment_opts` / `type_opts`
    /// where the campaign type needs them.
    pub async fn campaign_create(&self, params: Option<&Params>) -> Result<String, MailChimpError> {
        self.call_string(Method::CampaignCreate, params).await
    }

    /// Delete a campaign. Sent campaigns keep their reports.
    pub async fn campaign_delete(&self, params: Option<&Params>) -> Result<bool, MailChimpError> {
        self.call_bool(Method::CampaignDelete, params).await
    }

    /// Attach an ecommerce order to a campaign (`order` with the campaign id set).
    pub async fn campaign_ecomm_order_add(
        &self,
        params: Option<&Params>,
    ) -> Result<bool, MailChimpError> {
        self.call_bool(Method::CampaignEcommOrderAdd, params).await
    }

    /// Pause an RSS or autoresponder campaign.
    pub async fn campaign_pause(&self, params: Option<&Params>) -> Result<bool, MailChimpError> {
        self.call_bool(Method::CampaignPause, params).await
    }

    /// Copy a campaign and return the id of the copy.
    pub async fn campaign_replicate(
        &self,
        params: Option<&Params>,
    ) -> Result<String, MailChimpError> {
        self.call_string(Method::CampaignReplicate, params).await
    }

    /// Resume a paused RSS or autoresponder campaign.
    pub async fn campaign_resume(&self, params: Option<&Params>) -> Result<bool, MailChimpError> {
        self.call_bool(Method::CampaignResume, params).await
    }

    /// Schedule a campaign for delivery.
    ///
    /// Date/times stored under `schedule_time` and `schedule_time_b` are sent
    /// in UTC as `YYYY-MM-DD HH:MM:SS`; strings under those keys go out as
    /// given. The conversion is done on the request copy.
    ///
    /// Fails with [`MailChimpError::MissingParameters`] before any request when
    /// `params` is `None`.
    pub async fn campaign_schedule(&self, params: Option<&Params>) -> Result<bool, MailChimpError> {
        let Some(params) = params else {
            return Err(MailChimpError::MissingParameters {
                method: Method::CampaignSchedule,
            });
        };
        self.call_bool(Method::CampaignSchedule, Some(params)).await
    }

    /// Number of list members matching a segment.
    pub async fn campaign_segment_test(
        &self,
        params: Option<&Params>,
    ) -> Result<i64, MailChimpError> {
        self.call_int(Method::CampaignSegmentTest, params).await
    }

    /// Send a campaign immediately.
    pub async fn campaign_send_now(&self, params: Option<&Params>) -> Result<bool, MailChimpError> {
        self.call_bool(Method::CampaignSendNow, params).await
    }

    /// Send a test copy to `test_emails`.
    pub async fn campaign_send_test(
        &self,
        params: Option<&Params>,
    ) -> Result<bool, MailChimpError> {
        self.call_bool(Method::CampaignSendTest, params).await
    }

    /// Public, password-protected link to a campaign report.
    pub async fn campaign_share_report(
        &self,
        params: Option<&Params>,
    ) -> Result<CampaignShareReport, MailChimpError> {
        self.call_json(Method::CampaignShareReport, params).await
    }

    /// Editable template sections of a campaign, keyed by section name.
    ///
    /// Section values differ between templates, so they are returned untyped.
    /// A campaign without editable sections yields an empty map.
    pub async fn campaign_template_content(
        &self,
        params: Option<&Params>,
    ) -> Result<BTreeMap<String, JsonDocument>, MailChimpError> {
        let document: JsonDocument = self
            .call_json(Method::CampaignTemplateContent, params)
            .await?;
        Ok(document.decode_map().map_err(DecodeError::from)?)
    }

    /// Move a scheduled campaign back to draft.
    pub async fn campaign_unschedule(
        &self,
        params: Option<&Params>,
    ) -> Result<bool, MailChimpError> {
        self.call_bool(Method::CampaignUnschedule, params).await
    }

    /// Change one option (`name`, `value`) of a draft campaign.
    pub async fn campaign_update(&self, params: Option<&Params>) -> Result<bool, MailChimpError> {
        self.call_bool(Method::CampaignUpdate, params).await
    }

    /// Page through campaigns, optionally narrowed by `filters`.
    pub async fn campaigns(
        &self,
        params: Option<&Params>,
    ) -> Result<CampaignsResponse, MailChimpError> {
        self.call_json(Method::Campaigns, params).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use serde_json::json;

    use super::super::testing::{FakeTransport, make_client};
    use super::*;
    use crate::domain::ParamValue;

    #[tokio::test]
    async fn schedule_without_params_sends_nothing() {
        let transport = FakeTransport::new(200, "true");
        let client = make_client(transport.clone());

        let err = client.campaign_schedule(None).await.unwrap_err();
        assert!(matches!(
            err,
            MailChimpError::MissingParameters {
                method: Method::CampaignSchedule
            }
        ));
        assert_eq!(transport.requests(), 0);
    }

    #[tokio::test]
    async fn schedule_sends_times_in_provider_layout() {
        let transport = FakeTransport::new(200, "true");
        let client = make_client(transport.clone());

        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        let at = minus_five.with_ymd_and_hms(2012, 3, 1, 22, 15, 0).unwrap();
        let params = Params::new().with("cid", "c1").with("schedule_time", at);

        assert!(client.campaign_schedule(Some(&params)).await.unwrap());

        let (url, body) = transport.last_request().unwrap();
        assert!(url.ends_with("?method=campaignSchedule"));
        assert_eq!(body["schedule_time"], json!("2012-03-02 03:15:00"));
        // the caller keeps its own date/time value
        assert_eq!(params.get("schedule_time"), Some(&ParamValue::from(at)));
    }

    #[tokio::test]
    async fn create_returns_campaign_id() {
        let transport = FakeTransport::new(200, r#""7f6f1ac5a2""#);
        let client = make_client(transport.clone());

        let params = Params::new()
            .with("type", "regular")
            .with(
                "options",
                json!({ "list_id": "l1", "subject": "Hi", "from_email": "a@example.com", "from_name": "A" }),
            )
            .with("content", json!({ "html": "<p>Hi</p>" }));

        let cid = client.campaign_create(Some(&params)).await.unwrap();
        assert_eq!(cid, "7f6f1ac5a2");

        let (_, body) = transport.last_request().unwrap();
        assert_eq!(body["options"]["list_id"], json!("l1"));
    }

    #[tokio::test]
    async fn segment_test_returns_count() {
        let transport = FakeTransport::new(200, "42");
        let client = make_client(transport);
        assert_eq!(client.campaign_segment_test(None).await.unwrap(), 42);
    }

    #[tokio::test]
    async fn segment_test_rejects_non_numeric_body() {
        let transport = FakeTransport::new(200, r#""many""#);
        let client = make_client(transport);
        let err = client.campaign_segment_test(None).await.unwrap_err();
        assert!(matches!(err, MailChimpError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn template_content_is_keyed_by_section() {
        let body = r#"{"header":"<h1>Spring</h1>","sidebar":{"items":["a","b"]}}"#;
        let transport = FakeTransport::new(200, body);
        let client = make_client(transport);

        let sections = client.campaign_template_content(None).await.unwrap();
        assert_eq!(sections["header"].as_value(), &json!("<h1>Spring</h1>"));
        assert_eq!(sections["sidebar"].str_at("/items/1"), Some("b"));
    }

    #[tokio::test]
    async fn share_report_decodes() {
        let body = r#"{"title":"Spring","url":"http://eepurl.com/x","secure_url":"https://eepurl.com/x","password":"pw"}"#;
        let transport = FakeTransport::new(200, body);
        let client = make_client(transport);

        let report = client.campaign_share_report(None).await.unwrap();
        assert_eq!(report.secure_url, "https://eepurl.com/x");
        assert_eq!(report.password, "pw");
    }

    #[tokio::test]
    async fn template_content_without_sections_is_empty() {
        let transport = FakeTransport::new(200, "[]");
        let client = make_client(transport);

        let sections = client.campaign_template_content(None).await.unwrap();
        assert!(sections.is_empty());
    }

    #[tokio::test]
    async fn template_content_rejects_scalar_body() {
        let transport = FakeTransport::new(200, "42");
        let client = make_client(transport);

        let err = client.campaign_template_content(None).await.unwrap_err();
        assert!(matches!(err, MailChimpError::MalformedResponse(_)));
    }
}
