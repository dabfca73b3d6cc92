use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

use outreach_core::PageRequest;

use crate::error::GatewayError;
use crate::http::HttpGateway;
use crate::traits::{
    ActivityGateway, AuthGateway, CampaignGateway, ListCampaignsArgs, ListThemesArgs, LoginArgs,
    RegisterArgs, ThemeGateway, UserGateway,
};

/// Matches only requests carrying no Authorization header at all.
struct NoAuthorizationHeader;

impl Match for NoAuthorizationHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

fn login_args() -> LoginArgs {
    LoginArgs { username: "vera".to_owned(), password: "hunter2".to_owned() }
}

fn token_body(token: &str) -> serde_json::Value {
    json!({ "data": { "token": token } })
}

fn identity_body() -> serde_json::Value {
    json!({
        "data": {
            "id": 1,
            "username": "vera",
            "name": "Vera",
            "role": "ADMIN",
            "privileges": ["MANAGE_USERS"]
        }
    })
}

async fn mount_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(token)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_returns_token() {
    let server = MockServer::start().await;
    let gateway = HttpGateway::new(server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "username": "vera", "password": "hunter2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok-1")))
        .mount(&server)
        .await;

    let jwt = gateway.login(login_args()).await.unwrap();
    assert_eq!(jwt.token, "tok-1");
}

#[tokio::test]
async fn test_login_401_maps_to_invalid_credentials() {
    let server = MockServer::start().await;
    let gateway = HttpGateway::new(server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = gateway.login(login_args()).await.unwrap_err();
    assert!(matches!(err, GatewayError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_500_stays_a_status_error() {
    let server = MockServer::start().await;
    let gateway = HttpGateway::new(server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = gateway.login(login_args()).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_token_attached_to_subsequent_calls() {
    let server = MockServer::start().await;
    let gateway = HttpGateway::new(server.uri()).unwrap();
    mount_login(&server, "tok-7").await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("Authorization", "Bearer tok-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(identity_body()))
        .mount(&server)
        .await;

    gateway.login(login_args()).await.unwrap();
    let identity = gateway.identity().await.unwrap();
    assert_eq!(identity.username, "vera");
}

#[tokio::test]
async fn test_refresh_establishes_token() {
    let server = MockServer::start().await;
    let gateway = HttpGateway::new(server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok-r")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("Authorization", "Bearer tok-r"))
        .respond_with(ResponseTemplate::new(200).set_body_json(identity_body()))
        .mount(&server)
        .await;

    gateway.refresh().await.unwrap();
    assert!(gateway.identity().await.is_ok());
}

#[tokio::test]
async fn test_no_header_before_any_token() {
    let server = MockServer::start().await;
    let gateway = HttpGateway::new(server.uri()).unwrap();

    // Only matches when the header is absent; a stray header means 404.
    Mock::given(method("GET"))
        .and(path("/themes/7"))
        .and(NoAuthorizationHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": 7, "name": "Spring", "description": "Season opener" }
        })))
        .mount(&server)
        .await;

    let theme = gateway.get_theme(7).await.unwrap();
    assert_eq!(theme.name, "Spring");
}

#[tokio::test]
async fn test_logout_clears_token_even_when_remote_fails() {
    let server = MockServer::start().await;
    let gateway = HttpGateway::new(server.uri()).unwrap();
    mount_login(&server, "tok-9").await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(NoAuthorizationHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(identity_body()))
        .mount(&server)
        .await;

    gateway.login(login_args()).await.unwrap();
    let err = gateway.logout().await.unwrap_err();
    assert_eq!(err.status(), Some(500));

    // The identity mock only matches without an Authorization header.
    assert!(gateway.identity().await.is_ok());
}

#[tokio::test]
async fn test_list_themes_sends_page_params() {
    let server = MockServer::start().await;
    let gateway = HttpGateway::new(server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path("/themes"))
        .and(query_param("pageIndex", "2"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "items": [{ "id": 21, "name": "Autumn", "description": "" }],
                "page": { "index": 2, "size": 10, "totalPages": 3 }
            }
        })))
        .mount(&server)
        .await;

    let page =
        gateway.list_themes(ListThemesArgs { page: PageRequest::new(2, 10) }).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.page.total_pages, 3);
}

#[tokio::test]
async fn test_list_campaigns_omits_absent_filters() {
    let server = MockServer::start().await;
    let gateway = HttpGateway::new(server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path("/campaigns"))
        .and(query_param("pageIndex", "0"))
        .and(query_param("pageSize", "20"))
        .and(query_param("themeId", "9"))
        .and(query_param_is_missing("assigned"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "items": [{ "id": 4, "name": "Door to door", "themeId": 9 }],
                "page": { "index": 0, "size": 20, "totalPages": 1 }
            }
        })))
        .mount(&server)
        .await;

    let page = gateway
        .list_campaigns(ListCampaignsArgs {
            page: PageRequest::first(20),
            theme_id: Some(9),
            assigned: None,
        })
        .await
        .unwrap();
    assert_eq!(page.items[0].theme_id, 9);
}

#[tokio::test]
async fn test_register_passes_create_session_flag() {
    let server = MockServer::start().await;
    let gateway = HttpGateway::new(server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(query_param("createSession", "true"))
        .and(body_json(json!({ "username": "max", "password": "pw", "name": "Max" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok-reg")))
        .mount(&server)
        .await;

    let jwt = gateway
        .register(RegisterArgs {
            username: "max".to_owned(),
            password: "pw".to_owned(),
            name: "Max".to_owned(),
            create_session: Some(true),
        })
        .await
        .unwrap();
    assert_eq!(jwt.token, "tok-reg");
}

#[tokio::test]
async fn test_change_role_puts_body() {
    let server = MockServer::start().await;
    let gateway = HttpGateway::new(server.uri()).unwrap();

    Mock::given(method("PUT"))
        .and(path("/users/5/role"))
        .and(body_json(json!({ "role": "CAMPAIGN_MANAGER" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .mount(&server)
        .await;

    let args = crate::traits::ChangeRoleArgs { user_id: 5, role: outreach_core::Role::CampaignManager };
    assert!(gateway.change_user_role(args).await.is_ok());
}

#[tokio::test]
async fn test_activity_action_posts_to_path() {
    let server = MockServer::start().await;
    let gateway = HttpGateway::new(server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/activities/3/close"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .mount(&server)
        .await;

    assert!(gateway.close_activity(3).await.is_ok());
}

#[tokio::test]
async fn test_non_success_status_surfaces_code() {
    let server = MockServer::start().await;
    let gateway = HttpGateway::new(server.uri()).unwrap();

    Mock::given(method("DELETE"))
        .and(path("/users/8"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = gateway.delete_user(8).await.unwrap_err();
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn test_body_without_envelope_is_malformed() {
    let server = MockServer::start().await;
    let gateway = HttpGateway::new(server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path("/themes/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "name": "Spring", "description": ""
        })))
        .mount(&server)
        .await;

    let err = gateway.get_theme(1).await.unwrap_err();
    assert!(matches!(err, GatewayError::MalformedBody { .. }));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Nothing listens on this port.
    let gateway = HttpGateway::new("http://127.0.0.1:9").unwrap();
    let err = gateway.refresh().await.unwrap_err();
    assert!(matches!(err, GatewayError::Transport(_)));
    assert_eq!(err.status(), None);
}
