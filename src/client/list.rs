//! List reports, batch membership changes and interest groups.
//!
//! `listClients` and `listGrowthHistory` answer with quoted counters; their
//! bodies are patched before decoding so the counters read as integers.

use super::{MailChimpClient, MailChimpError};
use crate::domain::{
    BatchSubscribeResponse, BatchUnsubscribeResponse, GrowthHistoryEntry, InterestGrouping,
    ListAbuseReportsResponse, ListActivity, ListClientsResponse, Method, Params,
};

impl MailChimpClient {
    /// Abuse complaints filed by members of a list.
    pub async fn list_abuse_reports(
        &self,
        params: Option<&Params>,
    ) -> Result<ListAbuseReportsResponse, MailChimpError> {
        self.call_json(Method::ListAbuseReports, params).await
    }

    /// Daily activity of a list over the last 180 days.
    pub async fn list_activity(
        &self,
        params: Option<&Params>,
    ) -> Result<Vec<ListActivity>, MailChimpError> {
        self.call_json(Method::ListActivity, params).await
    }

    /// Subscribe or update many members in one call (`id`, `batch`).
    pub async fn list_batch_subscribe(
        &self,
        params: Option<&Params>,
    ) -> Result<BatchSubscribeResponse, MailChimpError> {
        self.call_json(Method::ListBatchSubscribe, params).await
    }

    /// Unsubscribe many `emails` from a list in one call.
    pub async fn list_batch_unsubscribe(
        &self,
        params: Option<&Params>,
    ) -> Result<BatchUnsubscribeResponse, MailChimpError> {
        self.call_json(Method::ListBatchUnsubscribe, params).await
    }

    /// Email clients used by list members, split into desktop and mobile.
    pub async fn list_clients(
        &self,
        params: Option<&Params>,
    ) -> Result<ListClientsResponse, MailChimpError> {
        self.call_json(Method::ListClients, params).await
    }

    /// Monthly member counts of a list.
    pub async fn list_growth_history(
        &self,
        params: Option<&Params>,
    ) -> Result<Vec<GrowthHistoryEntry>, MailChimpError> {
        self.call_json(Method::ListGrowthHistory, params).await
    }

    /// Add a group (`group_name`) to a grouping.
    pub async fn list_interest_group_add(
        &self,
        params: Option<&Params>,
    ) -> Result<bool, MailChimpError> {
        self.call_bool(Method::ListInterestGroupAdd, params).await
    }

    /// Delete a group from a grouping.
    pub async fn list_interest_group_del(
        &self,
        params: Option<&Params>,
    ) -> Result<bool, MailChimpError> {
        self.call_bool(Method::ListInterestGroupDel, params).await
    }

    /// Rename a group (`old_name` to `new_name`).
    pub async fn list_interest_group_update(
        &self,
        params: Option<&Params>,
    ) -> Result<bool, MailChimpError> {
        self.call_bool(Method::ListInterestGroupUpdate, params).await
    }

    /// Create an interest grouping and return its id.
    pub async fn list_interest_grouping_add(
        &self,
        params: Option<&Params>,
    ) -> Result<i64, MailChimpError> {
        self.call_int(Method::ListInterestGroupingAdd, params).await
    }

    /// Change a grouping's `name`, `type` or `groups`.
    pub async fn list_interest_grouping_update(
        &self,
        params: Option<&Params>,
    ) -> Result<bool, MailChimpError> {
        self.call_bool(Method::ListInterestGroupingUpdate, params)
            .await
    }

    /// Delete a grouping and all of its groups.
    pub async fn list_interest_grouping_del(
        &self,
        params: Option<&Params>,
    ) -> Result<bool, MailChimpError> {
        self.call_bool(Method::ListInterestGroupingDel, params).await
    }

    /// Interest groupings of a list, with their groups.
    pub async fn list_interest_groupings(
        &self,
        params: Option<&Params>,
    ) -> Result<Vec<InterestGrouping>, MailChimpError> {
        self.call_json(Method::ListInterestGroupings, params).await
    }
}
