//! Issue-shaped response records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::Account;

/// An issue, as served by `repos/{owner/repo}/issues`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// The issue id.
    pub id: u64,

    #[serde(default)]
    pub node_id: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub repository_url: Option<String>,

    #[serde(default)]
    pub labels_url: Option<String>,

    #[serde(default)]
    pub comments_url: Option<String>,

    #[serde(default)]
    pub events_url: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,

    /// The issue number within the repository.
    #[serde(default)]
    pub number: u64,

    #[serde(default)]
    pub title: Option<String>,

    /// The author.
    #[serde(default)]
    pub user: Option<Account>,

    #[serde(default)]
    pub labels: Vec<IssueLabel>,

    /// `"open"` or `"closed"`.
    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub locked: bool,

    #[serde(default)]
    pub assignee: Option<Account>,

    #[serde(default)]
    pub assignees: Vec<Account>,

    #[serde(default)]
    pub milestone: Option<IssueMilestone>,

    /// Number of comments on the issue.
    #[serde(default)]
    pub comments: u64,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub author_association: Option<String>,

    #[serde(default)]
    pub active_lock_reason: Option<String>,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub closed_by: Option<Account>,
}

/// A label attached to an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueLabel {
    pub id: u64,

    #[serde(default)]
    pub node_id: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    pub name: String,

    /// Hex color without the leading `#`.
    #[serde(default)]
    pub color: Option<String>,

    /// Whether this is one of GitHub's default labels.
    #[serde(rename = "default", default)]
    pub default_label: bool,

    #[serde(default)]
    pub description: Option<String>,
}

/// A milestone an issue is assigned to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueMilestone {
    pub id: u64,

    #[serde(default)]
    pub node_id: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,

    #[serde(default)]
    pub labels_url: Option<String>,

    /// The milestone number within the repository.
    #[serde(default)]
    pub number: u64,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub creator: Option<Account>,

    #[serde(default)]
    pub open_issues: u64,

    #[serde(default)]
    pub closed_issues: u64,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub due_on: Option<DateTime<Utc>>,

    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
}

/// A comment on an issue, as served by
/// `repos/{owner/repo}/issues/comments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueComment {
    /// The comment id.
    pub id: u64,

    #[serde(default)]
    pub node_id: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,

    /// The issue the comment belongs to.
    #[serde(default)]
    pub issue_url: Option<String>,

    /// The comment author.
    #[serde(default)]
    pub user: Option<Account>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub author_association: Option<String>,

    #[serde(default)]
    pub body: Option<String>,

    /// Present when the comment was posted through a GitHub App.
    #[serde(default)]
    pub performed_via_github_app: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_decodes_typical_payload() {
        let json = r#"{
            "id": 1,
            "node_id": "MDU6SXNzdWUx",
            "url": "https://api.github.com/repos/octocat/hello-world/issues/1347",
            "number": 1347,
            "title": "Found a bug",
            "user": {"login": "octocat", "id": 1},
            "labels": [
                {"id": 208045946, "name": "bug", "color": "f29513", "default": true}
            ],
            "state": "open",
            "locked": false,
            "assignees": [{"login": "octocat", "id": 1}],
            "milestone": {"id": 1002604, "number": 1, "title": "v1.0", "open_issues": 4},
            "comments": 0,
            "created_at": "2011-04-22T13:33:48Z",
            "author_association": "COLLABORATOR",
            "body": "I'm having a problem with this."
        }"#;

        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.number, 1347);
        assert_eq!(issue.title.as_deref(), Some("Found a bug"));
        assert_eq!(issue.labels.len(), 1);
        assert!(issue.labels[0].default_label);
        assert_eq!(issue.milestone.as_ref().map(|m| m.open_issues), Some(4));
        assert_eq!(issue.assignees.len(), 1);
        assert!(issue.closed_at.is_none());
    }

    #[test]
    fn test_issue_comment_decodes() {
        let json = r#"{
            "id": 1,
            "url": "https://api.github.com/repos/octocat/hello-world/issues/comments/1",
            "issue_url": "https://api.github.com/repos/octocat/hello-world/issues/1347",
            "user": {"login": "octocat", "id": 1},
            "created_at": "2011-04-14T16:00:49Z",
            "body": "Me too"
        }"#;

        let comment: IssueComment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.id, 1);
        assert_eq!(comment.body.as_deref(), Some("Me too"));
        assert_eq!(comment.user.as_ref().map(|u| u.id), Some(1));
    }

    #[test]
    fn test_issue_list_decodes_empty_array() {
        let issues: Vec<Issue> = serde_json::from_str("[]").unwrap();
        assert!(issues.is_empty());
    }
}
