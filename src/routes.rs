use axum::{
    routing::{get, post},
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn,
};
use tower_http::{
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tower_sessions::cookie::SameSite;
use crate::{handlers, middleware, state::AppState};

pub fn build_router(state: AppState) -> Router {
    let max_body_size = state.config.server.max_body_size;

    // Session store setup
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_name("session");

    Router::new()
        // Page shell
        .route("/", get(handlers::serve_page))

        // Auth gate
        .route("/login", post(handlers::handle_login))
        .route("/register", post(handlers::handle_register))

        // Recipe finder
        .route("/search", post(handlers::search_recipes))

        // Add middleware
        .layer(from_fn(middleware::require_auth))
        .layer(session_layer)

        // Only small forms are accepted
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(TraceLayer::new_for_http())

        // Add state
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, Response, StatusCode},
    };
    use serde_json::json;
    use tempfile::TempDir;
    use tower::ServiceExt;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use crate::config::Config;
    use crate::views::{results::NO_RECIPES_MESSAGE, LOGIN_BACKGROUND_MISSING, RECIPE_BACKGROUND_MISSING};

    const FINDER_MARKER: &str = r#"action="/search""#;
    const LOGIN_MARKER: &str = "🔐 Login";
    const FETCH_ERROR: &str = "Error fetching recipes. Please try again.";

    fn config_in(dir: &TempDir, endpoint: &str) -> Config {
        Config::for_tests(&dir.path().join("login_data.csv"), endpoint)
    }

    fn app_with(dir: &TempDir, endpoint: &str) -> Router {
        build_router(AppState::new(config_in(dir, endpoint)))
    }

    fn form_post(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get_page(cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
        app.clone().oneshot(req).await.unwrap()
    }

    fn location(response: &Response<Body>) -> String {
        response.headers()[header::LOCATION].to_str().unwrap().to_string()
    }

    fn session_cookie(response: &Response<Body>) -> Option<String> {
        response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::to_string)
    }

    async fn body_string(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn logged_in_cookie(app: &Router) -> String {
        send(app, form_post("/register", "username=alice&password=secret1", None)).await;
        let response = send(app, form_post("/login", "username=alice&password=secret1", None)).await;
        session_cookie(&response).expect("login sets a session cookie")
    }

    #[tokio::test]
    async fn fresh_session_sees_login_view() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with(&dir, "http://unused");

        let response = send(&app, get_page(None)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains(LOGIN_MARKER));
        assert!(!html.contains(FINDER_MARKER));
    }

    #[tokio::test]
    async fn register_then_login_reaches_finder() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with(&dir, "http://unused");

        let response = send(&app, form_post("/register", "username=alice&password=secret1", None)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(location(&response).starts_with("/?level=success&message=Registration%20successful"));

        // Wrong password: error notice, still logged out
        let response = send(&app, form_post("/login", "username=alice&password=wrong", None)).await;
        assert!(location(&response).starts_with("/?level=error&message=Invalid%20credentials"));
        let cookie = session_cookie(&response);
        let html = body_string(send(&app, get_page(cookie.as_deref())).await).await;
        assert!(html.contains(LOGIN_MARKER));

        let response = send(&app, form_post("/login", "username=alice&password=secret1", None)).await;
        assert!(location(&response).starts_with("/?level=success&message=Login%20successful"));
        let cookie = session_cookie(&response).unwrap();

        let response = send(&app, get_page(Some(&cookie))).await;
        let html = body_string(response).await;
        assert!(html.contains(FINDER_MARKER));
        assert!(!html.contains(LOGIN_MARKER));
    }

    #[tokio::test]
    async fn notice_from_query_is_rendered() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with(&dir, "http://unused");

        let request = Request::builder()
            .uri("/?level=warning&message=Please%20enter%20both%20username%20and%20password%20to%20register.")
            .body(Body::empty())
            .unwrap();
        let html = body_string(send(&app, request).await).await;
        assert!(html.contains(r#"<div class="notice notice-warning">Please enter both username and password to register.</div>"#));
    }

    #[tokio::test]
    async fn registration_does_not_log_in() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with(&dir, "http://unused");

        let response = send(&app, form_post("/register", "username=bob&password=pw", None)).await;
        let cookie = session_cookie(&response);
        let html = body_string(send(&app, get_page(cookie.as_deref())).await).await;
        assert!(html.contains(LOGIN_MARKER));
    }

    #[tokio::test]
    async fn blank_registration_warns_and_stores_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with(&dir, "http://unused");

        let response = send(&app, form_post("/register", "username=&password=pw", None)).await;
        assert!(location(&response).starts_with("/?level=warning&message=Please%20enter%20both"));
        assert!(!dir.path().join("login_data.csv").exists());
    }

    #[tokio::test]
    async fn search_requires_login() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with(&dir, "http://unused");

        let response = send(&app, form_post("/search", "ingredients=rice&diet=None&servings=4", None)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn search_renders_results_table() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    { "title": "Fried Rice", "sourceUrl": "https://example.com/rice", "readyInMinutes": 20, "servings": 2 },
                    { "title": "Rice Pudding", "sourceUrl": "https://example.com/pudding", "readyInMinutes": 50, "servings": 4 }
                ]
            })))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let app = app_with(&dir, &server.uri());
        let cookie = logged_in_cookie(&app).await;

        let response = send(&app, form_post("/search", "ingredients=rice&diet=Vegetarian&servings=3", Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("<th>Servings Adjustment Ratio</th>"));
        assert!(html.contains(r#"<a href="https://example.com/rice" target="_blank""#));
        assert!(html.contains("<td>1.50</td>"));
        assert!(html.contains("<td>0.75</td>"));
        assert!(html.contains(r#"<option value="Vegetarian" selected>"#));
    }

    #[tokio::test]
    async fn failed_search_looks_like_empty_search_plus_error() {
        let failing = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&failing)
            .await;
        let empty = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .mount(&empty)
            .await;

        let form = "ingredients=unobtainium&diet=None&servings=4";

        let dir = tempfile::tempdir().unwrap();
        let app = app_with(&dir, &failing.uri());
        let cookie = logged_in_cookie(&app).await;
        let failed_html = body_string(send(&app, form_post("/search", form, Some(&cookie))).await).await;

        let dir = tempfile::tempdir().unwrap();
        let app = app_with(&dir, &empty.uri());
        let cookie = logged_in_cookie(&app).await;
        let empty_html = body_string(send(&app, form_post("/search", form, Some(&cookie))).await).await;

        assert_eq!(failed_html.matches(FETCH_ERROR).count(), 1);
        assert!(!empty_html.contains(FETCH_ERROR));
        for html in [&failed_html, &empty_html] {
            assert!(html.contains(NO_RECIPES_MESSAGE));
            assert!(!html.contains("<table"));
        }
        let notice = format!(r#"<div class="notice notice-error">{}</div>"#, FETCH_ERROR);
        assert_eq!(failed_html.replace(&notice, ""), empty_html);
    }

    #[tokio::test]
    async fn blank_ingredients_warn_without_calling_api() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let app = app_with(&dir, &server.uri());
        let cookie = logged_in_cookie(&app).await;

        let html = body_string(send(&app, form_post("/search", "ingredients=+&diet=None&servings=4", Some(&cookie))).await).await;
        assert!(html.contains("Please enter at least one ingredient."));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_login_background_shows_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::for_tests(&dir.path().join("login_data.csv"), "http://unused");
        config.assets.login_background = dir.path().join("missing.png").to_string_lossy().into_owned();
        let app = build_router(AppState::new(config));

        let response = send(&app, get_page(None)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = body_string(response).await;
        assert!(html.contains(LOGIN_BACKGROUND_MISSING));
        assert!(!html.contains(r#"type="password""#));
    }

    #[tokio::test]
    async fn cleared_or_negative_servings_warn_in_finder() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let app = app_with(&dir, &server.uri());
        let cookie = logged_in_cookie(&app).await;

        for servings in ["", "-1", "0"] {
            let form = format!("ingredients=rice&diet=Vegan&servings={}", servings);
            let response = send(&app, form_post("/search", &form, Some(&cookie))).await;
            assert_eq!(response.status(), StatusCode::OK);

            let html = body_string(response).await;
            assert!(html.contains(r#"<div class="notice notice-warning">Servings must be at least 1.</div>"#));
            assert!(html.contains(FINDER_MARKER));
            assert!(html.contains(r#"<option value="Vegan" selected>"#));
            assert!(html.contains(r#"value="4""#));
        }
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_without_api_key_reports_misconfiguration() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(&dir, &server.uri());
        config.recipe.api_key = None;
        let app = build_router(AppState::new(config));
        let cookie = logged_in_cookie(&app).await;

        let response = send(&app, form_post("/search", "ingredients=rice&diet=None&servings=4", Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains(
            r#"<div class="notice notice-error">Recipe search is not configured. Please contact the administrator.</div>"#
        ));
        assert!(html.contains(NO_RECIPES_MESSAGE));
        assert!(!html.contains(FETCH_ERROR));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_finder_background_withholds_finder() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(&dir, &server.uri());
        config.assets.recipe_background = dir.path().join("missing.png").to_string_lossy().into_owned();
        let app = build_router(AppState::new(config));
        let cookie = logged_in_cookie(&app).await;

        let requests = [
            get_page(Some(&cookie)),
            form_post("/search", "ingredients=rice&diet=None&servings=4", Some(&cookie)),
        ];
        for request in requests {
            let response = send(&app, request).await;
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let html = body_string(response).await;
            assert!(html.contains(RECIPE_BACKGROUND_MISSING));
            assert!(!html.contains(FINDER_MARKER));
        }
    }
}
