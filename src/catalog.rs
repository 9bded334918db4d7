//! Catalogs of supported GitHub endpoints and query keys.
//!
//! Both catalogs are closed: adding an endpoint or a query key is a source
//! change, not a runtime registration.

/// The GitHub REST endpoints this crate can reach.
///
/// Each member carries a unique code and a URL template. Templates are
/// absolute and use `%s` as the positional placeholder marker; the number of
/// markers is the number of bindings [`crate::resolver::build_url`] expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GithubApi {
    /// Profile of a single user.
    User,
    /// Users the user is following.
    FollowingUser,
    /// Followers of the user.
    UserFollowers,
    /// Repositories owned by the user.
    UserRepository,
    /// Events received by the user.
    ReceivedEvents,
    /// Repositories the user watches.
    UserSubscriptions,
    /// A repository addressed as `owner/repository`.
    Repository,
    /// Issues of a repository.
    Issues,
    /// Issue comments of a repository.
    IssueComments,
}

impl GithubApi {
    /// All catalog members, in code order.
    pub const ALL: [GithubApi; 9] = [
        GithubApi::User,
        GithubApi::FollowingUser,
        GithubApi::UserFollowers,
        GithubApi::UserRepository,
        GithubApi::ReceivedEvents,
        GithubApi::UserSubscriptions,
        GithubApi::Repository,
        GithubApi::Issues,
        GithubApi::IssueComments,
    ];

    /// The stable numeric code of this member.
    pub fn code(self) -> u8 {
        match self {
            GithubApi::User => 0,
            GithubApi::FollowingUser => 1,
            GithubApi::UserFollowers => 2,
            GithubApi::UserRepository => 3,
            GithubApi::ReceivedEvents => 4,
            GithubApi::UserSubscriptions => 5,
            GithubApi::Repository => 6,
            GithubApi::Issues => 7,
            GithubApi::IssueComments => 8,
        }
    }

    /// The URL template of this endpoint.
    pub fn tag(self) -> &'static str {
        match self {
            GithubApi::User => "https://api.github.com/users/%s",
            GithubApi::FollowingUser => "https://api.github.com/users/%s/following",
            GithubApi::UserFollowers => "https://api.github.com/users/%s/followers",
            GithubApi::UserRepository => "https://api.github.com/users/%s/repos",
            GithubApi::ReceivedEvents => "https://api.github.com/users/%s/received_events",
            GithubApi::UserSubscriptions => "https://api.github.com/users/%s/subscriptions",
            GithubApi::Repository => "https://api.github.com/repos/%s",
            GithubApi::Issues => "https://api.github.com/repos/%s/issues",
            GithubApi::IssueComments => "https://api.github.com/repos/%s/issues/comments",
        }
    }

    /// Whether pagination is meaningful for this endpoint.
    ///
    /// The facade substitutes the default `per_page` only for paginated
    /// endpoints; single-resource endpoints get an empty query set.
    pub fn paginated(self) -> bool {
        !matches!(self, GithubApi::User | GithubApi::Repository)
    }
}

/// The query keys the URL resolver knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// `per_page=<n>`
    PerPage,
    /// `page=<n>`
    Page,
}

impl QueryKey {
    /// The stable numeric code of this member.
    pub fn code(self) -> u8 {
        match self {
            QueryKey::PerPage => 0,
            QueryKey::Page => 1,
        }
    }

    /// The canonical wire name of this key.
    pub fn tag(self) -> &'static str {
        match self {
            QueryKey::PerPage => "per_page",
            QueryKey::Page => "page",
        }
    }
}
