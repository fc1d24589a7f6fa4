//! Pre-decode text patches for responses that do not match their schema.
//!
//! Every patched method is listed in [`ResponsePatch::for_method`]; nothing
//! else is rewritten.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Method;

static LIST_CLIENTS_MEMBERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""members"\s*:\s*"([0-9]+)""#).expect("members pattern is valid")
});

static LIST_GROWTH_COUNTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(existing|imports|optins)"\s*:\s*"([0-9]+)""#)
        .expect("growth history pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponsePatch {
    /// `listClients`: `"members":"9"` becomes `"members":9`.
    ListClientsMembers,
    /// `listGrowthHistory`: quoted `existing`, `imports` and `optins` become numbers.
    ListGrowthHistoryCounts,
}

impl ResponsePatch {
    pub fn for_method(method: Method) -> Option<Self> {
        match method {
            Method::ListClients => Some(Self::ListClientsMembers),
            Method::ListGrowthHistory => Some(Self::ListGrowthHistoryCounts),
            _ => None,
        }
    }

    pub fn apply(self, body: &str) -> Cow<'_, str> {
        match self {
            Self::ListClientsMembers => LIST_CLIENTS_MEMBERS.replace_all(body, r#""members":$1"#),
            Self::ListGrowthHistoryCounts => LIST_GROWTH_COUNTS.replace_all(body, r#""$1":$2"#),
        }
    }
}

/// Apply the patch registered for `method`, if any.
pub fn patch_response(method: Method, body: &str) -> Cow<'_, str> {
    match ResponsePatch::for_method(method) {
        Some(patch) => patch.apply(body),
        None => Cow::Borrowed(body),
    }
}
