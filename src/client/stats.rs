//! Campaign reports, including the per-member AIM (Analytics360/Inbox
//! Monitoring) reports.

use super::{MailChimpClient, MailChimpError};
use crate::domain::{
    BounceMessage, BounceMessagesResponse, CampaignAbuseReportsResponse, CampaignAdvice,
    CampaignAnalytics, CampaignMembersResponse, CampaignStats, CampaignUnsubscribesResponse,
    ClickDetailAimResponse, CountryOpens, EcommOrdersResponse, EmailDomainPerformance,
    EmailStatsAimAllResponse, EmailStatsAimResponse, JsonDocument, Method, NotOpenedAimResponse,
    OpenedAimResponse, Params, RegionOpens,
};

impl MailChimpClient {
    /// Abuse complaints filed against a campaign.
    pub async fn campaign_abuse_reports(
        &self,
        params: Option<&Params>,
    ) -> Result<CampaignAbuseReportsResponse, MailChimpError> {
        self.call_json(Method::CampaignAbuseReports, params).await
    }

    /// Feedback on a campaign's performance compared to the account's history.
    pub async fn campaign_advice(
        &self,
        params: Option<&Params>,
    ) -> Result<Vec<CampaignAdvice>, MailChimpError> {
        self.call_json(Method::CampaignAdvice, params).await
    }

    /// Google Analytics data, for campaigns with analytics tracking enabled.
    pub async fn campaign_analytics(
        &self,
        params: Option<&Params>,
    ) -> Result<CampaignAnalytics, MailChimpError> {
        self.call_json(Method::CampaignAnalytics, params).await
    }

    /// Full bounce message for one `email` of a campaign.
    pub async fn campaign_bounce_message(
        &self,
        params: Option<&Params>,
    ) -> Result<BounceMessage, MailChimpError> {
        self.call_json(Method::CampaignBounceMessage, params).await
    }

    /// Recent bounce messages of a campaign, newest first.
    pub async fn campaign_bounce_messages(
        &self,
        params: Option<&Params>,
    ) -> Result<BounceMessagesResponse, MailChimpError> {
        self.call_json(Method::CampaignBounceMessages, params).await
    }

    /// Click counts per tracked URL.
    ///
    /// A campaign without tracked links answers `[]` instead of `{}`, so the
    /// raw document is returned; [`JsonDocument::decode_map`] into
    /// [`ClickStats`](crate::domain::ClickStats) reads both.
    pub async fn campaign_click_stats(
        &self,
        params: Option<&Params>,
    ) -> Result<JsonDocument, MailChimpError> {
        self.call_json(Method::CampaignClickStats, params).await
    }

    /// Ecommerce360 orders attributed to a campaign.
    pub async fn campaign_ecomm_orders(
        &self,
        params: Option<&Params>,
    ) -> Result<EcommOrdersResponse, MailChimpError> {
        self.call_json(Method::CampaignEcommOrders, params).await
    }

    /// Social stats for the campaign's eepurl.
    ///
    /// The live payload does not follow the documented schema, so the raw
    /// document is returned. [`JsonDocument::decode`] into
    /// [`EepUrlStats`](crate::domain::EepUrlStats) works for the documented shape.
    pub async fn campaign_eep_url_stats(
        &self,
        params: Option<&Params>,
    ) -> Result<JsonDocument, MailChimpError> {
        self.call_json(Method::CampaignEepUrlStats, params).await
    }

    /// Top email domains of the campaign's recipients.
    pub async fn campaign_email_domain_performance(
        &self,
        params: Option<&Params>,
    ) -> Result<Vec<EmailDomainPerformance>, MailChimpError> {
        self.call_json(Method::CampaignEmailDomainPerformance, params)
            .await
    }

    /// Opens by country.
    pub async fn campaign_geo_opens(
        &self,
        params: Option<&Params>,
    ) -> Result<Vec<CountryOpens>, MailChimpError> {
        self.call_json(Method::CampaignGeoOpens, params).await
    }

    /// Opens by region for one `code` country.
    pub async fn campaign_geo_opens_for_country(
        &self,
        params: Option<&Params>,
    ) -> Result<Vec<RegionOpens>, MailChimpError> {
        self.call_json(Method::CampaignGeoOpensForCountry, params)
            .await
    }

    /// Delivery status of every member the campaign was sent to.
    pub async fn campaign_members(
        &self,
        params: Option<&Params>,
    ) -> Result<CampaignMembersResponse, MailChimpError> {
        self.call_json(Method::CampaignMembers, params).await
    }

    /// Aggregate counters of a sent campaign.
    pub async fn campaign_stats(
        &self,
        params: Option<&Params>,
    ) -> Result<CampaignStats, MailChimpError> {
        self.call_json(Method::CampaignStats, params).await
    }

    /// Members who unsubscribed through a campaign, with their reasons.
    pub async fn campaign_unsubscribes(
        &self,
        params: Option<&Params>,
    ) -> Result<CampaignUnsubscribesResponse, MailChimpError> {
        self.call_json(Method::CampaignUnsubscribes, params).await
    }

    /// Members who clicked one `url`.
    pub async fn campaign_click_detail_aim(
        &self,
        params: Option<&Params>,
    ) -> Result<ClickDetailAimResponse, MailChimpError> {
        self.call_json(Method::CampaignClickDetailAim, params).await
    }

    /// Every tracked action of the given `email_address` list.
    pub async fn campaign_email_stats_aim(
        &self,
        params: Option<&Params>,
    ) -> Result<EmailStatsAimResponse, MailChimpError> {
        self.call_json(Method::CampaignEmailStatsAim, params).await
    }

    /// Tracked actions of every recipient, keyed by email address.
    pub async fn campaign_email_stats_aim_all(
        &self,
        params: Option<&Params>,
    ) -> Result<EmailStatsAimAllResponse, MailChimpError> {
        self.call_json(Method::CampaignEmailStatsAimAll, params)
            .await
    }

    /// Recipients who never opened the campaign.
    pub async fn campaign_not_opened_aim(
        &self,
        params: Option<&Params>,
    ) -> Result<NotOpenedAimResponse, MailChimpError> {
        self.call_json(Method::CampaignNotOpenedAim, params).await
    }

    /// Recipients who opened the campaign, with open counts.
    pub async fn campaign_opened_aim(
        &self,
        params: Option<&Params>,
    ) -> Result<OpenedAimResponse, MailChimpError> {
        self.call_json(Method::CampaignOpenedAim, params).await
    }
}
