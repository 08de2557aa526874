//! Site metadata exposed to every template.
//!
//! A single read-only record: the public base URL plus the site's name and
//! description. Built exactly once at startup and passed explicitly to the
//! templating layer — consumers never reach into the environment
//! themselves, which keeps render code pure and lets tests inject a fake
//! deployment URL.
//!
//! The only environmental input is the `URL` variable, set by the deploy
//! host (CI injects the public address there). Absent or empty, the local
//! development default applies; that is the expected case on a laptop, not
//! a failure.

use serde::{Deserialize, Serialize};

/// Environment variable carrying the public base URL on deploy hosts.
pub const URL_VAR: &str = "URL";

/// Base URL used when [`URL_VAR`] is unset or empty.
pub const DEFAULT_URL: &str = "http://localhost:8080";

/// Display name of the site.
pub const SITE_NAME: &str = "Hearthwiki";

/// One-line description used in page metadata and feeds.
pub const SITE_DESCRIPTION: &str = "A community wiki, preserved as a fast static archive.";

/// Read-only site metadata record, immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    /// Public base URL of the deployed site.
    pub url: String,
    /// Display name, fixed.
    pub site_name: String,
    /// One-line description, fixed.
    pub site_description: String,
}

impl SiteMetadata {
    /// Build the record from the process environment.
    ///
    /// Reads [`URL_VAR`] once; nothing else is consulted.
    pub fn from_env() -> Self {
        Self::from_deploy_url(std::env::var(URL_VAR).ok())
    }

    /// Build the record from an injected deployment URL.
    ///
    /// `None` or an empty string falls back to [`DEFAULT_URL`]; any other
    /// value is taken verbatim.
    pub fn from_deploy_url(url: Option<String>) -> Self {
        Self {
            url: url
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_URL.to_string()),
            site_name: SITE_NAME.to_string(),
            site_description: SITE_DESCRIPTION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_url_falls_back_to_localhost() {
        let meta = SiteMetadata::from_deploy_url(None);
        assert_eq!(meta.url, "http://localhost:8080");
    }

    #[test]
    fn empty_url_falls_back_to_localhost() {
        let meta = SiteMetadata::from_deploy_url(Some(String::new()));
        assert_eq!(meta.url, "http://localhost:8080");
    }

    #[test]
    fn set_url_is_taken_verbatim() {
        let meta = SiteMetadata::from_deploy_url(Some("https://wiki.example.org".to_string()));
        assert_eq!(meta.url, "https://wiki.example.org");
    }

    #[test]
    fn name_and_description_ignore_the_environment() {
        for url in [None, Some("https://wiki.example.org".to_string())] {
            let meta = SiteMetadata::from_deploy_url(url);
            assert_eq!(meta.site_name, SITE_NAME);
            assert_eq!(meta.site_description, SITE_DESCRIPTION);
        }
    }

    #[test]
    fn record_round_trips_through_json() {
        let meta = SiteMetadata::from_deploy_url(Some("https://wiki.example.org".to_string()));
        let json = serde_json::to_string(&meta).unwrap();
        let back: SiteMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, meta);
    }
}
