//! Account-level helpers.

use super::{MailChimpClient, MailChimpError};
use crate::domain::{ChatterItem, JsonDocument, Method, Params, VerifiedDomain};

impl MailChimpClient {
    /// Ids of the campaigns an `email_address` was sent.
    pub async fn campaigns_for_email(
        &self,
        params: Option<&Params>,
    ) -> Result<Vec<String>, MailChimpError> {
        self.call_json(Method::CampaignsForEmail, params).await
    }

    /// The 50 most recent Chimp Chatter messages.
    pub async fn chimp_chatter(
        &self,
        params: Option<&Params>,
    ) -> Result<Vec<ChatterItem>, MailChimpError> {
        self.call_json(Method::ChimpChatter, params).await
    }

    /// Plain text generated from `html`, a template, a URL or a campaign.
    pub async fn generate_text(&self, params: Option<&Params>) -> Result<String, MailChimpError> {
        self.call_string(Method::GenerateText, params).await
    }

    /// Account details. Pass `exclude` to skip the heavier sections.
    ///
    /// The nested sections and number encodings vary between account types,
    /// so the raw document is returned. [`JsonDocument::decode`] into
    /// [`AccountDetails`](crate::domain::AccountDetails) works for the
    /// documented shape.
    pub async fn get_account_details(
        &self,
        params: Option<&Params>,
    ) -> Result<JsonDocument, MailChimpError> {
        self.call_json(Method::GetAccountDetails, params).await
    }

    /// Sending domains and their verification state.
    pub async fn get_verified_domains(
        &self,
        params: Option<&Params>,
    ) -> Result<Vec<VerifiedDomain>, MailChimpError> {
        self.call_json(Method::GetVerifiedDomains, params).await
    }

    /// `html` with its CSS moved inline.
    pub async fn inline_css(&self, params: Option<&Params>) -> Result<String, MailChimpError> {
        self.call_string(Method::InlineCss, params).await
    }

    /// Ids of the lists an `email_address` is subscribed to.
    pub async fn lists_for_email(
        &self,
        params: Option<&Params>,
    ) -> Result<Vec<String>, MailChimpError> {
        self.call_json(Method::ListsForEmail, params).await
    }

    /// Check the key and connectivity.
    ///
    /// Returns `"Everything's Chimpy!"` when all is well.
    pub async fn ping(&self) -> Result<String, MailChimpError> {
        self.call_string(Method::Ping, None).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::testing::{FakeTransport, make_client};
    use super::*;
    use crate::domain::AccountDetails;

    #[tokio::test]
    async fn ping_unquotes_greeting() {
        let transport = FakeTransport::new(200, r#""Everything's Chimpy!""#);
        let client = make_client(transport.clone());

        assert_eq!(client.ping().await.unwrap(), "Everything's Chimpy!");

        let (url, body) = transport.last_request().unwrap();
        assert!(url.ends_with("?method=ping"));
        assert_eq!(body, json!({ "apikey": "0123456789abcdef-us1" }));
    }

    #[tokio::test]
    async fn ping_with_invalid_key_is_auth_error() {
        let transport = FakeTransport::new(200, r#"{"error":"Invalid Mailchimp API Key: 0123456789abcdef-us1","code":104}"#);
        let client = make_client(transport);

        let err = client.ping().await.unwrap_err();
        assert!(err.code().is_some_and(|code| code.is_auth_error()));
    }

    #[tokio::test]
    async fn lists_for_email_returns_ids() {
        let transport = FakeTransport::new(200, r#"["l1","l2"]"#);
        let client = make_client(transport);

        let params = Params::new().with("email_address", "a@example.com");
        let ids = client.lists_for_email(Some(&params)).await.unwrap();
        assert_eq!(ids, ["l1", "l2"]);
    }

    #[tokio::test]
    async fn inline_css_returns_html() {
        let transport = FakeTransport::new(200, r#""<p style=\"color: red;\">Hi</p>""#);
        let client = make_client(transport);

        let html = client.inline_css(None).await.unwrap();
        assert_eq!(html, r#"<p style="color: red;">Hi</p>"#);
    }

    #[tokio::test]
    async fn account_details_decode_on_demand() {
        let body = r#"{"username":"chimp","user_id":"u1","is_trial":false,"plan_type":"monthly",
                       "plan_low":0,"plan_high":500,"first_payment":null,"last_login":"2012-01-05 10:00:00",
                       "contact":{"fname":"Freddie","company":"MailChimp"},
                       "modules":[{"name":"Ecommerce360","added":"2011-01-01 00:00:00"}]}"#;
        let transport = FakeTransport::new(200, body);
        let client = make_client(transport);

        let doc = client.get_account_details(None).await.unwrap();
        let details: AccountDetails = doc.decode().unwrap();
        assert_eq!(details.plan_high, 500);
        assert_eq!(details.first_payment, None);
        assert_eq!(details.last_login.as_deref(), Some("2012-01-05 10:00:00"));
        assert_eq!(details.contact.company, "MailChimp");
        assert_eq!(details.modules[0].name, "Ecommerce360");
        assert!(details.orders.is_empty());
    }

    #[tokio::test]
    async fn account_details_with_quoted_numbers_still_succeed() {
        let body = r#"{"username":"chimp","plan_low":"0","plan_high":"2500","orders":{},
                       "rewards":{"credits":{"remaining":"12"}}}"#;
        let transport = FakeTransport::new(200, body);
        let client = make_client(transport);

        let doc = client.get_account_details(None).await.unwrap();
        assert_eq!(doc.str_at("/username"), Some("chimp"));
        assert_eq!(doc.i64_at("/plan_low"), Some(0));
        assert_eq!(doc.i64_at("/plan_high"), Some(2500));
        assert_eq!(doc.i64_at("/rewards/credits/remaining"), Some(12));
        assert!(doc.decode::<AccountDetails>().is_err());
    }
}
