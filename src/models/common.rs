//! Shapes shared across response records.

use serde::{Deserialize, Serialize};

/// A GitHub account in its compact form, as it appears nested in other
/// records (repository owners, issue authors, event actors, and so on).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// The account login name.
    pub login: String,

    /// The account id.
    pub id: u64,

    #[serde(default)]
    pub node_id: Option<String>,

    #[serde(default)]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub gravatar_id: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,

    #[serde(default)]
    pub followers_url: Option<String>,

    #[serde(default)]
    pub following_url: Option<String>,

    #[serde(default)]
    pub gists_url: Option<String>,

    #[serde(default)]
    pub starred_url: Option<String>,

    #[serde(default)]
    pub subscriptions_url: Option<String>,

    #[serde(default)]
    pub organizations_url: Option<String>,

    #[serde(default)]
    pub repos_url: Option<String>,

    #[serde(default)]
    pub events_url: Option<String>,

    #[serde(default)]
    pub received_events_url: Option<String>,

    /// The account kind, e.g. `"User"` or `"Organization"`.
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,

    #[serde(default)]
    pub site_admin: bool,
}

/// A license as attached to a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    #[serde(default)]
    pub key: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    /// The SPDX identifier, e.g. `"MIT"`.
    #[serde(default)]
    pub spdx_id: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub node_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_decodes_compact_payload() {
        let json = r#"{
            "login": "octocat",
            "id": 1,
            "node_id": "MDQ6VXNlcjE=",
            "avatar_url": "https://github.com/images/error/octocat_happy.gif",
            "type": "User",
            "site_admin": false
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.login, "octocat");
        assert_eq!(account.id, 1);
        assert_eq!(account.account_type.as_deref(), Some("User"));
        assert!(!account.site_admin);
        assert!(account.followers_url.is_none());
    }

    #[test]
    fn test_license_decodes_spdx_id() {
        let json = r#"{"key": "mit", "name": "MIT License", "spdx_id": "MIT"}"#;
        let license: License = serde_json::from_str(json).unwrap();
        assert_eq!(license.spdx_id.as_deref(), Some("MIT"));
    }
}
