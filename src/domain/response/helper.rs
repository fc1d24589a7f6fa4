use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// One entry of the account activity feed (`chimpChatter`).
pub struct ChatterItem {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub list_id: String,
    pub campaign_id: String,
    pub update_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifiedDomain {
    pub domain: String,
    /// `verified`, `pending` or `none`.
    pub status: String,
    /// Address the verification email was sent to.
    pub emails: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Result of `getAccountDetails`.
///
/// The nested `orders` and `rewards` sections vary between account types;
/// fields absent from a response keep their defaults.
pub struct AccountDetails {
    pub username: String,
    pub user_id: String,
    pub is_trial: bool,
    pub is_approved: bool,
    pub has_activated: bool,
    pub timezone: String,
    pub plan_type: String,
    pub plan_low: i64,
    pub plan_high: i64,
    pub plan_start_date: Option<String>,
    pub emails_left: i64,
    pub pending_monthly: bool,
    pub first_payment: Option<String>,
    pub last_payment: Option<String>,
    pub times_logged_in: i64,
    pub last_login: Option<String>,
    pub affiliate_link: String,
    pub contact: AccountContact,
    pub modules: Vec<AccountModule>,
    pub orders: Vec<AccountOrder>,
    pub rewards: AccountRewards,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountContact {
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub company: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub url: String,
    pub phone: String,
    pub fax: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountModule {
    pub name: String,
    pub added: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountOrder {
    pub order_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub date: String,
    pub credits_used: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountRewards {
    pub referrals_this_month: i64,
    pub notify_on: String,
    pub notify_email: String,
    pub credits: RewardBalance,
    pub inspections: RewardBalance,
    pub referrals: Vec<Referral>,
    pub applied: Vec<AppliedReward>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardBalance {
    pub this_month: i64,
    pub total_earned: i64,
    pub remaining: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Referral {
    pub name: String,
    pub email: String,
    pub signup_date: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppliedReward {
    pub value: i64,
    pub date: String,
    pub order_id: i64,
    pub order_desc: String,
}
