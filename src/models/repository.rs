//! Repository-shaped response records.
//!
//! Three endpoints serve this shape: `repos/{owner/repo}`,
//! `users/{username}/repos`, and `users/{username}/subscriptions`. Each gets
//! its own nominal record; the hypermedia URL block they share is factored
//! into [`RepoLinks`] and flattened in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::{Account, License};

/// The hypermedia URL block every repository payload carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepoLinks {
    pub forks_url: Option<String>,
    pub keys_url: Option<String>,
    pub collaborators_url: Option<String>,
    pub teams_url: Option<String>,
    pub hooks_url: Option<String>,
    pub issue_events_url: Option<String>,
    pub events_url: Option<String>,
    pub assignees_url: Option<String>,
    pub branches_url: Option<String>,
    pub tags_url: Option<String>,
    pub blobs_url: Option<String>,
    pub git_tags_url: Option<String>,
    pub git_refs_url: Option<String>,
    pub trees_url: Option<String>,
    pub statuses_url: Option<String>,
    pub languages_url: Option<String>,
    pub stargazers_url: Option<String>,
    pub contributors_url: Option<String>,
    pub subscribers_url: Option<String>,
    pub subscription_url: Option<String>,
    pub commits_url: Option<String>,
    pub git_commits_url: Option<String>,
    pub comments_url: Option<String>,
    pub issue_comment_url: Option<String>,
    pub contents_url: Option<String>,
    pub compare_url: Option<String>,
    pub merges_url: Option<String>,
    pub archive_url: Option<String>,
    pub downloads_url: Option<String>,
    pub issues_url: Option<String>,
    pub pulls_url: Option<String>,
    pub milestones_url: Option<String>,
    pub notifications_url: Option<String>,
    pub labels_url: Option<String>,
    pub releases_url: Option<String>,
    pub deployments_url: Option<String>,
}

/// A repository, as served by `repos/{owner/repo}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// The repository id.
    pub id: u64,

    #[serde(default)]
    pub node_id: Option<String>,

    /// The bare repository name.
    pub name: String,

    /// The `owner/name` form.
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub owner: Option<Account>,

    #[serde(default)]
    pub html_url: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub fork: bool,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(flatten)]
    pub links: RepoLinks,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub git_url: Option<String>,

    #[serde(default)]
    pub ssh_url: Option<String>,

    #[serde(default)]
    pub clone_url: Option<String>,

    #[serde(default)]
    pub svn_url: Option<String>,

    #[serde(default)]
    pub homepage: Option<String>,

    /// The dominant language, when detected.
    #[serde(default)]
    pub language: Option<String>,

    /// Size in kilobytes.
    #[serde(default)]
    pub size: u64,

    #[serde(default)]
    pub stargazers_count: u64,

    #[serde(default)]
    pub watchers_count: u64,

    #[serde(default)]
    pub forks_count: u64,

    #[serde(default)]
    pub open_issues_count: u64,

    #[serde(default)]
    pub default_branch: Option<String>,

    #[serde(default)]
    pub license: Option<License>,
}

/// A repository owned by the configured user, as served by
/// `users/{username}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRepository {
    /// The repository id.
    pub id: u64,

    #[serde(default)]
    pub node_id: Option<String>,

    /// The bare repository name.
    pub name: String,

    /// The `owner/name` form.
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub owner: Option<Account>,

    #[serde(default)]
    pub html_url: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub fork: bool,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(flatten)]
    pub links: RepoLinks,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub git_url: Option<String>,

    #[serde(default)]
    pub ssh_url: Option<String>,

    #[serde(default)]
    pub clone_url: Option<String>,

    #[serde(default)]
    pub svn_url: Option<String>,

    #[serde(default)]
    pub homepage: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    /// Size in kilobytes.
    #[serde(default)]
    pub size: u64,

    #[serde(default)]
    pub stargazers_count: u64,

    #[serde(default)]
    pub watchers_count: u64,

    #[serde(default)]
    pub forks_count: u64,

    #[serde(default)]
    pub open_issues_count: u64,

    #[serde(default)]
    pub default_branch: Option<String>,

    #[serde(default)]
    pub license: Option<License>,
}

/// A repository the configured user watches, as served by
/// `users/{username}/subscriptions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSubscription {
    /// The repository id.
    pub id: u64,

    #[serde(default)]
    pub node_id: Option<String>,

    /// The bare repository name.
    pub name: String,

    /// The `owner/name` form.
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub owner: Option<Account>,

    #[serde(default)]
    pub html_url: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub fork: bool,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(flatten)]
    pub links: RepoLinks,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub git_url: Option<String>,

    #[serde(default)]
    pub ssh_url: Option<String>,

    #[serde(default)]
    pub clone_url: Option<String>,

    #[serde(default)]
    pub svn_url: Option<String>,

    #[serde(default)]
    pub homepage: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    /// Size in kilobytes.
    #[serde(default)]
    pub size: u64,

    #[serde(default)]
    pub stargazers_count: u64,

    #[serde(default)]
    pub watchers_count: u64,

    #[serde(default)]
    pub forks_count: u64,

    #[serde(default)]
    pub open_issues_count: u64,

    #[serde(default)]
    pub default_branch: Option<String>,

    #[serde(default)]
    pub license: Option<License>,
}
