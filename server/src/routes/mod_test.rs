use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use surveys::SurveyConfig;

use super::*;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn test_state() -> AppState {
    AppState::new(&SurveyConfig::from_backend_url("http://127.0.0.1:9")).unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    let root = serve(api_routes(test_state())).await;
    let response = reqwest::get(format!("{root}/healthz")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn api_routes_do_not_serve_pages() {
    let root = serve(api_routes(test_state())).await;
    let response = reqwest::get(format!("{root}/surveys/42")).await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

// =============================================================
// tag_not_found
// =============================================================

fn page_router() -> Router {
    Router::new()
        .fallback(get(|| async { Html("page") }))
        .layer(middleware::from_fn(tag_not_found))
}

#[tokio::test]
async fn unknown_page_is_tagged_not_found() {
    let root = serve(page_router()).await;
    for path in ["/", "/nowhere", "/surveys", "/surveys/42/extra"] {
        let response = reqwest::get(format!("{root}{path}")).await.unwrap();
        assert_eq!(response.status().as_u16(), 404, "{path}");
        assert_eq!(response.text().await.unwrap(), "page");
    }
}

#[tokio::test]
async fn survey_page_keeps_ok_status() {
    let root = serve(page_router()).await;
    for path in ["/surveys/42", "/surveys/42/", "/surveys/42?ref=mail"] {
        let response = reqwest::get(format!("{root}{path}")).await.unwrap();
        assert_eq!(response.status().as_u16(), 200, "{path}");
    }
}

#[tokio::test]
async fn non_ok_status_is_left_alone() {
    let router = Router::new()
        .fallback(get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Html("boom")) }))
        .layer(middleware::from_fn(tag_not_found));
    let root = serve(router).await;
    let response = reqwest::get(format!("{root}/nowhere")).await.unwrap();
    assert_eq!(response.status().as_u16(), 500);
}

#[tokio::test]
async fn non_html_fallback_keeps_status() {
    let router = Router::new()
        .fallback(get(|| async { "favicon bytes" }))
        .layer(middleware::from_fn(tag_not_found));
    let root = serve(router).await;
    let response = reqwest::get(format!("{root}/favicon.ico")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

// =============================================================
// trim_trailing_slash
// =============================================================

#[tokio::test]
async fn trailing_slash_redirects_to_canonical_path() {
    let router = page_router().layer(middleware::from_fn(trim_trailing_slash));
    let root = serve(router).await;
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let response = client.get(format!("{root}/surveys/42/?ref=mail")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 308);
    assert_eq!(response.headers()["location"], "/surveys/42?ref=mail");

    let response = client.get(format!("{root}/")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

// =============================================================
// Leptos route table
// =============================================================

fn leptos_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("survey-ui").build()
}

#[tokio::test]
async fn route_list_declares_survey_view() {
    let routes = generate_route_list(client::app::App);
    let paths: Vec<&str> = routes.iter().map(|route| route.path()).collect();
    assert!(
        paths.iter().any(|p| p.starts_with("/surveys/") && p.contains("id")),
        "{paths:?}"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn survey_path_renders_survey_page_with_id() {
    let root = serve(page_routes(&leptos_options())).await;

    let response = reqwest::get(format!("{root}/surveys/123")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"data-survey-id="123""#), "{body}");
    assert!(!body.contains("Page not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_path_renders_not_found_page_with_404() {
    let root = serve(page_routes(&leptos_options())).await;

    let response = reqwest::get(format!("{root}/nope")).await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
    let body = response.text().await.unwrap();
    assert!(body.contains("Page not found"), "{body}");
    assert!(body.contains("/surveys/&lt;id&gt;"), "{body}");
    assert!(!body.contains("data-survey-id"));
}

#[tokio::test(flavor = "multi_thread")]
async fn trailing_slash_survey_path_lands_on_survey_page() {
    let root = serve(page_routes(&leptos_options())).await;

    let response = reqwest::get(format!("{root}/surveys/123/")).await.unwrap();
    assert_eq!(response.url().path(), "/surveys/123");
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains(r#"data-survey-id="123""#));
}
