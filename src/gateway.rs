//! Typed endpoint facade.
//!
//! [`GithubGateway`] composes the URL resolver, the HTTP communicator, and
//! the pagination defaults into two facets: [`UsersApi`] for `users/*`
//! endpoints and [`RepositoryApi`] for `repos/*` endpoints. Every operation
//! comes in a pair: `get_x()` applies the default query policy, while
//! `get_x_with_query()` takes an explicit [`QueryParameter`].

use std::env;

use url::Url;

use crate::catalog::GithubApi;
use crate::client::GithubClient;
use crate::config::{GithubUser, OAuthConfig};
use crate::error::{GithubError, Result};
use crate::models::{
    FollowingUser, Issue, IssueComment, ReceivedEvent, Repository, User, UserFollower,
    UserRepository, UserSubscription,
};
use crate::query::{DefaultQueryParameter, QueryParameter};
use crate::resolver::build_url;

/// The typed entry point to the GitHub API.
///
/// Immutable after construction; operations never mutate shared state, so a
/// gateway can be shared freely across tasks.
///
/// # Example
///
/// ```no_run
/// use octogate::{GithubGateway, GithubUser, OAuthConfig};
///
/// #[tokio::main]
/// async fn main() -> octogate::Result<()> {
///     let gateway = GithubGateway::new(GithubUser::new("octocat")?, OAuthConfig::none())?;
///
///     let user = gateway.users().get_user().await?;
///     println!("{} has {} followers", user.login, user.followers);
///
///     let repos = gateway.users().get_user_repositories().await?;
///     println!("{} repositories", repos.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GithubGateway {
    users: UsersApi,
    repository: RepositoryApi,
}

impl GithubGateway {
    /// Creates a gateway with default pagination.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be constructed.
    pub fn new(user: GithubUser, oauth: OAuthConfig) -> Result<Self> {
        Ok(Self::from_parts(
            GithubClient::new(oauth)?,
            user,
            DefaultQueryParameter::default(),
        ))
    }

    /// Creates a gateway with explicit pagination defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be constructed.
    pub fn with_defaults(
        user: GithubUser,
        oauth: OAuthConfig,
        defaults: DefaultQueryParameter,
    ) -> Result<Self> {
        Ok(Self::from_parts(GithubClient::new(oauth)?, user, defaults))
    }

    /// Composes a gateway from an already-built communicator.
    ///
    /// This is the seam for pointing the gateway at a GitHub Enterprise host
    /// or a test server via [`GithubClient::with_api_root`].
    pub fn from_parts(
        client: GithubClient,
        user: GithubUser,
        defaults: DefaultQueryParameter,
    ) -> Self {
        Self {
            users: UsersApi {
                client: client.clone(),
                user: user.clone(),
                defaults,
            },
            repository: RepositoryApi {
                client,
                user,
                defaults,
            },
        }
    }

    /// Creates a gateway from environment variables.
    ///
    /// Reads `GITHUB_USER` (required) and `GITHUB_TOKEN` (optional; requests
    /// go out unauthenticated without it).
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidArgument`] if `GITHUB_USER` is not set.
    pub fn from_env() -> Result<Self> {
        let user_name = env::var("GITHUB_USER").map_err(|_| {
            GithubError::InvalidArgument("GITHUB_USER environment variable not set".to_string())
        })?;

        let oauth = match env::var("GITHUB_TOKEN") {
            Ok(token) if !token.is_empty() => OAuthConfig::with_token(&token)?,
            _ => OAuthConfig::none(),
        };

        Self::new(GithubUser::new(&user_name)?, oauth)
    }

    /// The Users facet.
    pub fn users(&self) -> &UsersApi {
        &self.users
    }

    /// The Repository facet.
    pub fn repository(&self) -> &RepositoryApi {
        &self.repository
    }
}

/// Resolves the URL for one call: explicit query set, or the default policy
/// (`per_page` for paginated endpoints, empty otherwise).
fn resolve(
    api: GithubApi,
    query: Option<&QueryParameter>,
    defaults: DefaultQueryParameter,
    binds: &[&str],
) -> Result<Url> {
    let substituted;
    let queries = match query {
        Some(queries) => queries,
        None => {
            substituted = if api.paginated() {
                QueryParameter::per_page(defaults.per_page())
            } else {
                QueryParameter::new()
            };
            &substituted
        }
    };

    build_url(api, queries, binds)
}

/// Operations on `users/*` endpoints.
///
/// The configured user name is always the first (and only) positional
/// binding.
#[derive(Debug, Clone)]
pub struct UsersApi {
    client: GithubClient,
    user: GithubUser,
    defaults: DefaultQueryParameter,
}

impl UsersApi {
    /// The configured user identity.
    pub fn user(&self) -> &GithubUser {
        &self.user
    }

    fn url(&self, api: GithubApi, query: Option<&QueryParameter>) -> Result<Url> {
        resolve(api, query, self.defaults, &[self.user.user_name()])
    }

    /// Fetches the configured user's profile.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self) -> Result<User> {
        self.client.get(&self.url(GithubApi::User, None)?).await
    }

    /// Fetches the configured user's profile with an explicit query set.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_user_with_query(&self, query: &QueryParameter) -> Result<User> {
        self.client.get(&self.url(GithubApi::User, Some(query))?).await
    }

    /// Fetches the users the configured user is following.
    #[tracing::instrument(skip(self))]
    pub async fn get_following_users(&self) -> Result<Vec<FollowingUser>> {
        self.client
            .get_as_list(&self.url(GithubApi::FollowingUser, None)?)
            .await
    }

    /// Fetches the users the configured user is following, with an explicit
    /// query set.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_following_users_with_query(
        &self,
        query: &QueryParameter,
    ) -> Result<Vec<FollowingUser>> {
        self.client
            .get_as_list(&self.url(GithubApi::FollowingUser, Some(query))?)
            .await
    }

    /// Fetches the configured user's followers.
    #[tracing::instrument(skip(self))]
    pub async fn get_user_followers(&self) -> Result<Vec<UserFollower>> {
        self.client
            .get_as_list(&self.url(GithubApi::UserFollowers, None)?)
            .await
    }

    /// Fetches the configured user's followers with an explicit query set.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_user_followers_with_query(
        &self,
        query: &QueryParameter,
    ) -> Result<Vec<UserFollower>> {
        self.client
            .get_as_list(&self.url(GithubApi::UserFollowers, Some(query))?)
            .await
    }

    /// Fetches the repositories owned by the configured user.
    #[tracing::instrument(skip(self))]
    pub async fn get_user_repositories(&self) -> Result<Vec<UserRepository>> {
        self.client
            .get_as_list(&self.url(GithubApi::UserRepository, None)?)
            .await
    }

    /// Fetches the repositories owned by the configured user, with an
    /// explicit query set.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_user_repositories_with_query(
        &self,
        query: &QueryParameter,
    ) -> Result<Vec<UserRepository>> {
        self.client
            .get_as_list(&self.url(GithubApi::UserRepository, Some(query))?)
            .await
    }

    /// Fetches the events received by the configured user.
    #[tracing::instrument(skip(self))]
    pub async fn get_received_events(&self) -> Result<Vec<ReceivedEvent>> {
        self.client
            .get_as_list(&self.url(GithubApi::ReceivedEvents, None)?)
            .await
    }

    /// Fetches the events received by the configured user, with an explicit
    /// query set.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_received_events_with_query(
        &self,
        query: &QueryParameter,
    ) -> Result<Vec<ReceivedEvent>> {
        self.client
            .get_as_list(&self.url(GithubApi::ReceivedEvents, Some(query))?)
            .await
    }

    /// Fetches the repositories the configured user watches.
    #[tracing::instrument(skip(self))]
    pub async fn get_user_subscriptions(&self) -> Result<Vec<UserSubscription>> {
        self.client
            .get_as_list(&self.url(GithubApi::UserSubscriptions, None)?)
            .await
    }

    /// Fetches the repositories the configured user watches, with an
    /// explicit query set.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_user_subscriptions_with_query(
        &self,
        query: &QueryParameter,
    ) -> Result<Vec<UserSubscription>> {
        self.client
            .get_as_list(&self.url(GithubApi::UserSubscriptions, Some(query))?)
            .await
    }
}

/// Operations on `repos/*` endpoints.
///
/// Every operation takes a repository domain — a single `owner/repository`
/// string passed through verbatim as the sole positional binding.
#[derive(Debug, Clone)]
pub struct RepositoryApi {
    client: GithubClient,
    user: GithubUser,
    defaults: DefaultQueryParameter,
}

impl RepositoryApi {
    /// The configured user identity.
    pub fn user(&self) -> &GithubUser {
        &self.user
    }

    fn url(
        &self,
        api: GithubApi,
        query: Option<&QueryParameter>,
        repo_domain: &str,
    ) -> Result<Url> {
        resolve(api, query, self.defaults, &[repo_domain])
    }

    /// Fetches repository information for `owner/repository`.
    #[tracing::instrument(skip(self))]
    pub async fn get_repositories(&self, repo_domain: &str) -> Result<Vec<Repository>> {
        self.client
            .get_as_list(&self.url(GithubApi::Repository, None, repo_domain)?)
            .await
    }

    /// Fetches repository information for `owner/repository` with an
    /// explicit query set.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_repositories_with_query(
        &self,
        repo_domain: &str,
        query: &QueryParameter,
    ) -> Result<Vec<Repository>> {
        self.client
            .get_as_list(&self.url(GithubApi::Repository, Some(query), repo_domain)?)
            .await
    }

    /// Fetches the issues of `owner/repository`.
    #[tracing::instrument(skip(self))]
    pub async fn get_issues(&self, repo_domain: &str) -> Result<Vec<Issue>> {
        self.client
            .get_as_list(&self.url(GithubApi::Issues, None, repo_domain)?)
            .await
    }

    /// Fetches the issues of `owner/repository` with an explicit query set.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_issues_with_query(
        &self,
        repo_domain: &str,
        query: &QueryParameter,
    ) -> Result<Vec<Issue>> {
        self.client
            .get_as_list(&self.url(GithubApi::Issues, Some(query), repo_domain)?)
            .await
    }

    /// Fetches the issue comments of `owner/repository`.
    #[tracing::instrument(skip(self))]
    pub async fn get_issues_comments(&self, repo_domain: &str) -> Result<Vec<IssueComment>> {
        self.client
            .get_as_list(&self.url(GithubApi::IssueComments, None, repo_domain)?)
            .await
    }

    /// Fetches the issue comments of `owner/repository` with an explicit
    /// query set.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_issues_comments_with_query(
        &self,
        repo_domain: &str,
        query: &QueryParameter,
    ) -> Result<Vec<IssueComment>> {
        self.client
            .get_as_list(&self.url(GithubApi::IssueComments, Some(query), repo_domain)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_policy() {
        let defaults = DefaultQueryParameter::default();

        // Paginated endpoints pick up the default per_page.
        let url = resolve(GithubApi::UserFollowers, None, defaults, &["octocat"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/users/octocat/followers?per_page=30"
        );

        // Single-resource endpoints get no query string.
        let url = resolve(GithubApi::User, None, defaults, &["octocat"]).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat");
        let url = resolve(GithubApi::Repository, None, defaults, &["o/r"]).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/repos/o/r");
    }

    #[test]
    fn test_explicit_query_overrides_default() {
        let defaults = DefaultQueryParameter::default();
        let query = QueryParameter::per_page(5);

        let url = resolve(
            GithubApi::UserFollowers,
            Some(&query),
            defaults,
            &["octocat"],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/users/octocat/followers?per_page=5"
        );
    }
}
