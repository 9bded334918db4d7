//! User-shaped response records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A full user profile, as served by `users/{username}`.
///
/// # Example
///
/// ```
/// use octogate::User;
///
/// let user: User = serde_json::from_str(r#"{"login":"octocat","id":1}"#).unwrap();
/// assert_eq!(user.login, "octocat");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
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
    pub user_type: Option<String>,

    #[serde(default)]
    pub site_admin: bool,

    /// The display name, when the user has set one.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub blog: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub hireable: Option<bool>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub twitter_username: Option<String>,

    #[serde(default)]
    pub public_repos: u32,

    #[serde(default)]
    pub public_gists: u32,

    #[serde(default)]
    pub followers: u32,

    #[serde(default)]
    pub following: u32,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A user the configured account is following, as served by
/// `users/{username}/following`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowingUser {
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

    #[serde(rename = "type", default)]
    pub user_type: Option<String>,

    #[serde(default)]
    pub site_admin: bool,
}

/// A follower of the configured account, as served by
/// `users/{username}/followers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFollower {
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

    #[serde(rename = "type", default)]
    pub user_type: Option<String>,

    #[serde(default)]
    pub site_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_minimal_payload() {
        let user: User = serde_json::from_str(r#"{"login":"octocat","id":1}"#).unwrap();
        assert_eq!(user.login, "octocat");
        assert_eq!(user.id, 1);
        assert_eq!(user.followers, 0);
        assert!(user.name.is_none());
        assert!(user.created_at.is_none());
    }

    #[test]
    fn test_user_decodes_full_profile() {
        let json = r#"{
            "login": "octocat",
            "id": 1,
            "node_id": "MDQ6VXNlcjE=",
            "avatar_url": "https://github.com/images/error/octocat_happy.gif",
            "type": "User",
            "site_admin": false,
            "name": "monalisa octocat",
            "company": "GitHub",
            "blog": "https://github.com/blog",
            "location": "San Francisco",
            "email": "octocat@github.com",
            "hireable": false,
            "bio": "There once was...",
            "twitter_username": "monatheoctocat",
            "public_repos": 2,
            "public_gists": 1,
            "followers": 20,
            "following": 0,
            "created_at": "2008-01-14T04:33:35Z",
            "updated_at": "2008-01-14T04:33:35Z"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name.as_deref(), Some("monalisa octocat"));
        assert_eq!(user.public_repos, 2);
        assert_eq!(user.followers, 20);
        assert!(user.created_at.is_some());
        assert_eq!(user.user_type.as_deref(), Some("User"));
    }

    #[test]
    fn test_user_ignores_unknown_fields() {
        let user: User =
            serde_json::from_str(r#"{"login":"octocat","id":1,"plan":{"name":"pro"}}"#).unwrap();
        assert_eq!(user.login, "octocat");
    }

    #[test]
    fn test_follower_list_preserves_document_order() {
        let json = r#"[
            {"login": "first", "id": 10},
            {"login": "second", "id": 20}
        ]"#;

        let followers: Vec<UserFollower> = serde_json::from_str(json).unwrap();
        assert_eq!(followers.len(), 2);
        assert_eq!(followers[0].login, "first");
        assert_eq!(followers[1].login, "second");
    }
}
