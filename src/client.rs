//! GitHub HTTP communicator.
//!
//! Low-level client that executes authenticated GET requests against URLs
//! produced by the resolver, classifies response statuses, and decodes JSON
//! bodies into typed values.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::bearer;
use crate::config::OAuthConfig;
use crate::error::{GithubError, Result};

const ACCEPT_JSON: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("octogate/", env!("CARGO_PKG_VERSION"));

/// Low-level GitHub API communicator.
///
/// Handles authorization shaping, status classification, and JSON decoding.
/// Endpoint-level operations live on the gateway facets, which feed this
/// client with resolved URLs.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use octogate::{GithubClient, OAuthConfig};
///
/// # fn example() -> octogate::Result<()> {
/// // Unauthenticated
/// let client = GithubClient::new(OAuthConfig::none())?;
///
/// // Authenticated
/// let client = GithubClient::new(OAuthConfig::with_token("gho_abc")?)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GithubClient {
    http: Client,
    oauth: OAuthConfig,
    api_root: Option<Url>,
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient")
            .field("api_root", &self.api_root.as_ref().map(Url::as_str))
            .finish_non_exhaustive()
    }
}

impl GithubClient {
    /// Creates a communicator with the given OAuth configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::TransportFailure`] if the underlying transport
    /// cannot be constructed.
    pub fn new(oauth: OAuthConfig) -> Result<Self> {
        Self::build(oauth, None)
    }

    /// Creates a communicator whose requests are redirected to `api_root`.
    ///
    /// Only the scheme, host, and port of resolved URLs are rewritten; the
    /// path and query from the endpoint catalog are preserved. Intended for
    /// GitHub Enterprise hosts and test servers.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::TransportFailure`] if the underlying transport
    /// cannot be constructed.
    pub fn with_api_root(oauth: OAuthConfig, api_root: Url) -> Result<Self> {
        Self::build(oauth, Some(api_root))
    }

    fn build(oauth: OAuthConfig, api_root: Option<Url>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()?;

        Ok(Self {
            http,
            oauth,
            api_root,
        })
    }

    /// Performs an authenticated GET and decodes the body as a single value.
    #[tracing::instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let body = self.send_get(url).await?;
        serde_json::from_str(&body).map_err(|err| GithubError::DecodeFailure(err.to_string()))
    }

    /// Performs an authenticated GET and decodes the body as a top-level
    /// JSON array of `T`, in document order.
    ///
    /// A 2xx response whose body is not an array yields
    /// [`GithubError::DecodeFailure`].
    #[tracing::instrument(skip(self))]
    pub async fn get_as_list<T: DeserializeOwned>(&self, url: &Url) -> Result<Vec<T>> {
        let body = self.send_get(url).await?;
        serde_json::from_str::<Vec<T>>(&body)
            .map_err(|err| GithubError::DecodeFailure(err.to_string()))
    }

    /// Sends the GET request and returns the body of a successful response.
    async fn send_get(&self, url: &Url) -> Result<String> {
        let url = self.rebase(url.clone());

        let mut request = self.http.get(url).header(ACCEPT, ACCEPT_JSON);

        let authorization = bearer(self.oauth.access_token().unwrap_or(""));
        if !authorization.is_empty() {
            request = request.header(AUTHORIZATION, authorization);
        }

        let response = request.send().await?;
        let response = Self::check_status(response).await?;

        Ok(response.text().await?)
    }

    /// Rewrites the URL origin when an API root override is configured.
    fn rebase(&self, mut url: Url) -> Url {
        if let Some(root) = &self.api_root {
            url.set_scheme(root.scheme()).ok();
            url.set_host(root.host_str()).ok();
            url.set_port(root.port()).ok();
        }
        url
    }

    /// Classifies the response status; errors consume the body for the
    /// server's message.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(GithubError::from_status(status.as_u16(), message))
    }

    /// Extracts the server's message from a failed response.
    ///
    /// GitHub ships the human-readable message in the body as
    /// `{"message": "..."}`; fall back to the raw body, then the bare status.
    async fn extract_error_message(response: Response, status: StatusCode) -> String {
        let body = match response.text().await {
            Ok(body) => body,
            Err(_) => return format!("HTTP {status}"),
        };

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
                return message.to_string();
            }
        }

        if body.is_empty() {
            return format!("HTTP {status}");
        }

        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug_hides_token() {
        let client =
            GithubClient::new(OAuthConfig::with_token("test-token").unwrap()).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("GithubClient"));
        assert!(!debug.contains("test-token"));
    }

    #[test]
    fn test_rebase_preserves_path_and_query() {
        let client = GithubClient::with_api_root(
            OAuthConfig::none(),
            Url::parse("http://127.0.0.1:9099").unwrap(),
        )
        .unwrap();

        let url = Url::parse("https://api.github.com/users/octocat/followers?per_page=5").unwrap();
        let rebased = client.rebase(url);
        assert_eq!(
            rebased.as_str(),
            "http://127.0.0.1:9099/users/octocat/followers?per_page=5"
        );
    }

    #[test]
    fn test_no_root_override_keeps_url() {
        let client = GithubClient::new(OAuthConfig::none()).unwrap();
        let url = Url::parse("https://api.github.com/users/octocat").unwrap();
        assert_eq!(client.rebase(url.clone()), url);
    }
}
