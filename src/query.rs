//! Query parameter model.
//!
//! A [`QueryParameter`] is an insertion-ordered set of key/value pairs drawn
//! from the closed [`QueryKey`] catalog. The URL resolver renders it; nothing
//! here touches the wire directly.

use std::fmt;

use crate::catalog::QueryKey;
use crate::error::{GithubError, Result};

/// A pagination request: page size and 1-indexed page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    per_page: u32,
    page: u32,
}

impl Pagination {
    /// Creates a pagination record.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidArgument`] unless both values are >= 1.
    pub fn new(per_page: u32, page: u32) -> Result<Self> {
        if per_page == 0 {
            return Err(GithubError::InvalidArgument(
                "per_page must be >= 1".to_string(),
            ));
        }
        if page == 0 {
            return Err(GithubError::InvalidArgument("page must be >= 1".to_string()));
        }

        Ok(Self { per_page, page })
    }

    /// The page size.
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// The 1-indexed page number.
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// A scalar query value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// An integer value, e.g. a page size.
    Int(u64),
    /// A text value.
    Text(String),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Int(value) => write!(f, "{value}"),
            QueryValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(u64::from(value))
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

/// An ordered set of query parameters for one request.
///
/// Keys render in insertion order; setting a key that is already present
/// replaces its value, so every key renders exactly once.
///
/// # Example
///
/// ```
/// use octogate::{QueryKey, QueryParameter};
///
/// let query = QueryParameter::new().set(QueryKey::PerPage, 50u32);
/// assert!(!query.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParameter {
    entries: Vec<(QueryKey, QueryValue)>,
}

impl QueryParameter {
    /// Creates an empty query parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query set carrying both pagination keys.
    pub fn from_pagination(pagination: Pagination) -> Self {
        Self::new()
            .set(QueryKey::PerPage, pagination.per_page())
            .set(QueryKey::Page, pagination.page())
    }

    /// Creates a query set carrying only `per_page`.
    pub fn per_page(per_page: u32) -> Self {
        Self::new().set(QueryKey::PerPage, per_page)
    }

    /// Sets a key, replacing any previous value for it.
    #[must_use]
    pub fn set(mut self, key: QueryKey, value: impl Into<QueryValue>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Whether no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (QueryKey, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }
}

/// Process-wide pagination defaults, fixed at gateway construction.
///
/// Supplies `per_page` when a paginated operation is called without an
/// explicit query set. `Default` matches GitHub's own page-size default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultQueryParameter {
    per_page: u32,
    page: u32,
}

impl DefaultQueryParameter {
    /// Creates validated pagination defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidArgument`] unless both values are >= 1.
    pub fn new(per_page: u32, page: u32) -> Result<Self> {
        let pagination = Pagination::new(per_page, page)?;
        Ok(Self {
            per_page: pagination.per_page(),
            page: pagination.page(),
        })
    }

    /// The default page size.
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// The default page number.
    pub fn page(&self) -> u32 {
        self.page
    }
}

impl Default for DefaultQueryParameter {
    fn default() -> Self {
        Self {
            per_page: 30,
            page: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_rejects_zero() {
        assert!(matches!(
            Pagination::new(0, 1),
            Err(GithubError::InvalidArgument(_))
        ));
        assert!(matches!(
            Pagination::new(30, 0),
            Err(GithubError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_pagination_accessors() {
        let pagination = Pagination::new(50, 2).unwrap();
        assert_eq!(pagination.per_page(), 50);
        assert_eq!(pagination.page(), 2);
    }

    #[test]
    fn test_empty_query() {
        assert!(QueryParameter::new().is_empty());
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let query = QueryParameter::new()
            .set(QueryKey::Page, 2u32)
            .set(QueryKey::PerPage, 50u32);
        let keys: Vec<QueryKey> = query.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![QueryKey::Page, QueryKey::PerPage]);
    }

    #[test]
    fn test_set_replaces_existing_key() {
        let query = QueryParameter::new()
            .set(QueryKey::PerPage, 10u32)
            .set(QueryKey::PerPage, 20u32);
        let entries: Vec<(QueryKey, QueryValue)> =
            query.entries().map(|(k, v)| (k, v.clone())).collect();
        assert_eq!(entries, vec![(QueryKey::PerPage, QueryValue::Int(20))]);
    }

    #[test]
    fn test_from_pagination_emits_both_keys() {
        let query = QueryParameter::from_pagination(Pagination::new(50, 3).unwrap());
        let entries: Vec<(QueryKey, QueryValue)> =
            query.entries().map(|(k, v)| (k, v.clone())).collect();
        assert_eq!(
            entries,
            vec![
                (QueryKey::PerPage, QueryValue::Int(50)),
                (QueryKey::Page, QueryValue::Int(3)),
            ]
        );
    }

    #[test]
    fn test_default_query_parameter() {
        let defaults = DefaultQueryParameter::default();
        assert_eq!(defaults.per_page(), 30);
        assert_eq!(defaults.page(), 1);

        assert!(DefaultQueryParameter::new(0, 1).is_err());
        assert_eq!(DefaultQueryParameter::new(100, 2).unwrap().per_page(), 100);
    }
}
