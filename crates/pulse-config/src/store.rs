//! Datastore (PostgREST) configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Project URL, e.g. `https://abc.supabase.co`. REST calls go to `{url}/rest/v1`.
    #[serde(default)]
    pub url: String,

    /// Service-role key; bypasses row-level security.
    #[serde(default)]
    pub service_role_key: String,
}

impl StoreConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.service_role_key.is_empty()
    }

    /// Base URL of the REST API, without a trailing slash.
    #[must_use]
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        assert!(!StoreConfig::default().is_configured());
    }

    #[test]
    fn rest_url_strips_trailing_slash() {
        let config = StoreConfig {
            url: "https://abc.supabase.co/".into(),
            service_role_key: "service".into(),
        };
        assert!(config.is_configured());
        assert_eq!(config.rest_url(), "https://abc.supabase.co/rest/v1");
    }
}
