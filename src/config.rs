//! Caller-supplied configuration: user identity and OAuth credentials.

use std::fmt;

use crate::error::{GithubError, Result};

/// The GitHub account the gateway operates on behalf of.
///
/// The user name becomes the first positional binding of every Users-facet
/// endpoint URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubUser {
    user_name: String,
}

impl GithubUser {
    /// Creates a user identity.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidArgument`] if the user name is empty.
    pub fn new(user_name: &str) -> Result<Self> {
        if user_name.is_empty() {
            return Err(GithubError::InvalidArgument(
                "user name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            user_name: user_name.to_string(),
        })
    }

    /// The account login name.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }
}

/// OAuth access-token configuration.
///
/// With no token configured, requests go out unauthenticated and no
/// `Authorization` header is attached.
#[derive(Clone)]
pub struct OAuthConfig {
    access_token: Option<String>,
}

impl OAuthConfig {
    /// Configuration without a token.
    pub fn none() -> Self {
        Self { access_token: None }
    }

    /// Configuration carrying an access token.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidArgument`] if the token is empty.
    pub fn with_token(access_token: &str) -> Result<Self> {
        if access_token.is_empty() {
            return Err(GithubError::InvalidArgument(
                "access token must not be empty".to_string(),
            ));
        }

        Ok(Self {
            access_token: Some(access_token.to_string()),
        })
    }

    /// The configured token, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

impl fmt::Debug for OAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthConfig")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
