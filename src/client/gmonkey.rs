//! Golden Monkeys: members flagged for closer tracking.

use super::{MailChimpClient, MailChimpError};
use crate::domain::{GmonkeyActivity, GmonkeyBatchResult, GmonkeyMember, Method, Params};

impl MailChimpClient {
    /// Recent opens and clicks of Golden Monkey members.
    pub async fn gmonkey_activity(
        &self,
        params: Option<&Params>,
    ) -> Result<Vec<GmonkeyActivity>, MailChimpError> {
        self.call_json(Method::GmonkeyActivity, params).await
    }

    /// Add list members (`id`, `email_address`) as Golden Monkeys.
    pub async fn gmonkey_add(
        &self,
        params: Option<&Params>,
    ) -> Result<GmonkeyBatchResult, MailChimpError> {
        self.call_json(Method::GmonkeyAdd, params).await
    }

    /// Remove members from the Golden Monkeys.
    pub async fn gmonkey_del(
        &self,
        params: Option<&Params>,
    ) -> Result<GmonkeyBatchResult, MailChimpError> {
        self.call_json(Method::GmonkeyDel, params).await
    }

    /// Every Golden Monkey member across the account's lists.
    pub async fn gmonkey_members(
        &self,
        params: Option<&Params>,
    ) -> Result<Vec<GmonkeyMember>, MailChimpError> {
        self.call_json(Method::GmonkeyMembers, params).await
    }
}
