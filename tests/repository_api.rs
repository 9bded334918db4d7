//! End-to-end tests for the Repository facet.
//!
//! Uses wiremock to stand in for the GitHub API; the gateway is pointed at
//! the mock server through the client's API root override.

use octogate::{
    DefaultQueryParameter, GithubClient, GithubError, GithubGateway, GithubUser, OAuthConfig,
    QueryKey, QueryParameter,
};
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway(mock_uri: &str, oauth: OAuthConfig) -> GithubGateway {
    let client = GithubClient::with_api_root(oauth, Url::parse(mock_uri).unwrap()).unwrap();
    GithubGateway::from_parts(
        client,
        GithubUser::new("octocat").unwrap(),
        DefaultQueryParameter::default(),
    )
}

#[tokio::test]
async fn test_get_repositories_sends_bearer_token_and_maps_401() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "Bad credentials"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway(&mock_server.uri(), OAuthConfig::with_token("abc").unwrap());
    let err = gateway
        .repository()
        .get_repositories("octocat/hello-world")
        .await
        .unwrap_err();

    match err {
        GithubError::Unauthorized(message) => assert_eq!(message, "Bad credentials"),
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_issues_with_per_page_maps_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/issues"))
        .and(query_param("per_page", "50"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"message": "Server Error"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway(&mock_server.uri(), OAuthConfig::none());
    let query = QueryParameter::new().set(QueryKey::PerPage, 50u32);
    let err = gateway
        .repository()
        .get_issues_with_query("octocat/hello-world", &query)
        .await
        .unwrap_err();

    match err {
        GithubError::InternalServerError(message) => assert_eq!(message, "Server Error"),
        other => panic!("expected InternalServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_issues_decodes_list_in_document_order() {
    let mock_server = MockServer::start().await;

    let response = serde_json::json!([
        {
            "id": 1,
            "number": 1347,
            "title": "Found a bug",
            "user": {"login": "octocat", "id": 1},
            "state": "open",
            "comments": 0
        },
        {
            "id": 2,
            "number": 1348,
            "title": "Found another bug",
            "state": "closed",
            "comments": 3
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/issues"))
        .and(query_param("per_page", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway(&mock_server.uri(), OAuthConfig::none());
    let issues = gateway
        .repository()
        .get_issues("octocat/hello-world")
        .await
        .unwrap();

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].number, 1347);
    assert_eq!(issues[1].number, 1348);
    assert_eq!(issues[1].comments, 3);
}

#[tokio::test]
async fn test_get_issues_comments_hits_comments_path() {
    let mock_server = MockServer::start().await;

    let response = serde_json::json!([
        {
            "id": 1,
            "user": {"login": "octocat", "id": 1},
            "body": "Me too",
            "created_at": "2011-04-14T16:00:49Z"
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/issues/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway(&mock_server.uri(), OAuthConfig::none());
    let comments = gateway
        .repository()
        .get_issues_comments("octocat/hello-world")
        .await
        .unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].body.as_deref(), Some("Me too"));
}

#[tokio::test]
async fn test_get_repositories_has_no_default_query() {
    let mock_server = MockServer::start().await;

    // The repository endpoint is not paginated; the default policy must not
    // attach per_page. wiremock matches the path only, and the assertion on
    // the recorded request checks the query is empty.
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 1296269,
                "name": "hello-world",
                "full_name": "octocat/hello-world"
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway(&mock_server.uri(), OAuthConfig::none());
    let repos = gateway
        .repository()
        .get_repositories("octocat/hello-world")
        .await
        .unwrap();

    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].full_name.as_deref(), Some("octocat/hello-world"));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_repo_domain_passes_through_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/my-org/my.repo/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway(&mock_server.uri(), OAuthConfig::none());
    let issues = gateway
        .repository()
        .get_issues("my-org/my.repo")
        .await
        .unwrap();

    assert!(issues.is_empty());
}
