//! URL resolution.
//!
//! Turns an endpoint catalog entry, a query parameter set, and positional
//! bindings into the absolute URL the communicator will fetch.

use url::Url;

use crate::catalog::GithubApi;
use crate::error::{GithubError, Result};
use crate::query::QueryParameter;

/// The positional placeholder marker in endpoint templates.
const PLACEHOLDER: &str = "%s";

/// Builds the absolute URL for an endpoint.
///
/// Each `%s` in the template consumes one binding, strictly left-to-right;
/// surplus bindings are ignored, and if bindings run out the marker is left
/// in place for the server to reject. Bindings are substituted verbatim —
/// callers supply already-legal path segments (this is what lets an
/// `owner/repository` domain span two segments). Query values are
/// percent-encoded; keys render under their canonical tags in insertion
/// order.
///
/// # Errors
///
/// Returns [`GithubError::InvalidArgument`] if the bound string does not
/// parse as a URL; catalog templates cannot trigger this with legal path
/// segments.
pub fn build_url(api: GithubApi, queries: &QueryParameter, binds: &[&str]) -> Result<Url> {
    let bound = bind(api.tag(), binds);

    let rendered = if queries.is_empty() {
        bound
    } else {
        format!("{bound}?{}", render_query(queries))
    };

    Url::parse(&rendered).map_err(|err| GithubError::InvalidArgument(err.to_string()))
}

/// Substitutes one binding per placeholder, left-to-right.
fn bind(template: &str, binds: &[&str]) -> String {
    let mut bound = String::with_capacity(template.len());
    let mut rest = template;
    let mut next = 0;

    while let Some(at) = rest.find(PLACEHOLDER) {
        bound.push_str(&rest[..at]);
        match binds.get(next) {
            Some(value) => {
                bound.push_str(value);
                next += 1;
            }
            None => bound.push_str(PLACEHOLDER),
        }
        rest = &rest[at + PLACEHOLDER.len()..];
    }
    bound.push_str(rest);

    bound
}

/// Renders `key=value` pairs joined by `&`, values percent-encoded.
fn render_query(queries: &QueryParameter) -> String {
    queries
        .entries()
        .map(|(key, value)| format!("{}={}", key.tag(), urlencoding::encode(&value.to_string())))
        .collect::<Vec<String>>()
        .join("&")
}
