use url::Url;

use crate::domain::{Method, Scheme};

pub const API_HOST: &str = "api.mailchimp.com";
pub const API_VERSION: &str = "1.3";

/// `{scheme}://{datacenter}.api.mailchimp.com/1.3/`
pub fn base_url(scheme: Scheme, datacenter: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{scheme}://{datacenter}.{API_HOST}/{API_VERSION}/"))
}

/// Base URL with the method selector appended as `?method=<name>`.
pub fn method_url(base: &Url, method: Method) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair("method", method.as_str());
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApiKey;

    #[test]
    fn base_url_host_is_the_datacenter_token() {
        for (raw, expected_host) in [
            ("0123456789abcdef-us1", "us1.api.mailchimp.com"),
            ("fedcba9876543210-us14", "us14.api.mailchimp.com"),
            ("aaaa-eu2", "eu2.api.mailchimp.com"),
        ] {
            let key = ApiKey::new(raw).unwrap();
            let url = base_url(Scheme::Https, key.datacenter()).unwrap();
            assert_eq!(url.host_str(), Some(expected_host));
            assert_eq!(url.path(), "/1.3/");
        }
    }

    #[test]
    fn base_url_scheme_follows_flag() {
        let secure = base_url(Scheme::from_secure(true), "us1").unwrap();
        let plain = base_url(Scheme::from_secure(false), "us1").unwrap();
        assert_eq!(secure.scheme(), "https");
        assert_eq!(plain.scheme(), "http");
    }

    #[test]
    fn method_url_uses_query_selector() {
        let base = base_url(Scheme::Https, "us1").unwrap();
        let url = method_url(&base, Method::ListGrowthHistory);
        assert_eq!(
            url.as_str(),
            "https://us1.api.mailchimp.com/1.3/?method=listGrowthHistory"
        );
        // the base is left untouched for the next call
        assert_eq!(base.query(), None);
    }
}
