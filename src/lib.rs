//! Typed read-only client for a subset of the GitHub REST API.
//!
//! The library hides URL construction, authorization header shaping, HTTP
//! invocation, JSON decoding, and status-to-error classification behind a
//! small typed surface: a [`GithubGateway`] with a Users facet and a
//! Repository facet.
//!
//! # Quick Start
//!
//! ```no_run
//! use octogate::{GithubGateway, GithubUser, OAuthConfig, QueryKey, QueryParameter};
//!
//! #[tokio::main]
//! async fn main() -> octogate::Result<()> {
//!     let gateway = GithubGateway::new(
//!         GithubUser::new("octocat")?,
//!         OAuthConfig::none(),
//!     )?;
//!
//!     // Single resource
//!     let user = gateway.users().get_user().await?;
//!     println!("{} ({})", user.login, user.id);
//!
//!     // Collections, default pagination
//!     let followers = gateway.users().get_user_followers().await?;
//!     println!("{} followers on the first page", followers.len());
//!
//!     // Collections, explicit pagination
//!     let query = QueryParameter::new().set(QueryKey::PerPage, 5u32);
//!     let issues = gateway
//!         .repository()
//!         .get_issues_with_query("octocat/hello-world", &query)
//!         .await?;
//!     println!("{} issues", issues.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! One request flows through three collaborators:
//!
//! 1. the endpoint catalog ([`GithubApi`]) supplies the URL template;
//! 2. the URL resolver binds positional path segments and renders the query
//!    string;
//! 3. the communicator ([`GithubClient`]) executes the authenticated GET,
//!    classifies the HTTP status into a [`GithubError`] kind, and decodes
//!    the JSON body.
//!
//! Everything is immutable after construction; gateways and clients are
//! cheap to clone and safe to share across tasks.
//!
//! # Errors
//!
//! Every operation returns exactly one [`GithubError`] kind on failure:
//! classified HTTP statuses (`BadRequest` through `ServiceUnavailable`),
//! `TransportFailure` for network-level problems and unmapped statuses, and
//! `DecodeFailure` for well-delivered bodies of the wrong shape. Nothing is
//! retried.

pub mod auth;
mod catalog;
mod client;
mod config;
mod error;
mod gateway;
mod models;
mod query;
mod resolver;

// Re-export core types
pub use catalog::{GithubApi, QueryKey};
pub use client::GithubClient;
pub use config::{GithubUser, OAuthConfig};
pub use error::{GithubError, Result};
pub use gateway::{GithubGateway, RepositoryApi, UsersApi};
pub use query::{DefaultQueryParameter, Pagination, QueryParameter, QueryValue};
pub use resolver::build_url;

// Re-export response records
pub use models::{
    Account,
    EventActor,
    EventRepo,
    FollowingUser,
    Issue,
    IssueComment,
    IssueLabel,
    IssueMilestone,
    License,
    ReceivedEvent,
    RepoLinks,
    Repository,
    User,
    UserFollower,
    UserRepository,
    UserSubscription,
};
