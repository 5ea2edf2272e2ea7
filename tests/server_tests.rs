// tests/server_tests.rs
use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use velocity_landing::dom::Document;
use velocity_landing::server::{routes, ServerState};

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(ServerState::new()))
                .configure(routes::configure),
        )
        .await
    };
}

fn visible_languages(html: &str) -> Vec<String> {
    let doc = Document::parse(html);
    let mut langs: Vec<String> = doc
        .query_classes(&["lang-content", "active"])
        .into_iter()
        .filter_map(|n| {
            ["de", "en"]
                .into_iter()
                .find(|l| doc.has_class(n, l))
                .map(str::to_string)
        })
        .collect();
    langs.dedup();
    langs
}

fn body_text(bytes: web::Bytes) -> String {
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[actix_web::test]
async fn index_is_german_by_default() {
    let app = app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(test::read_body(resp).await);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(visible_languages(&html), vec!["de"]);
}

#[actix_web::test]
async fn language_cookie_is_restored() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/")
        .cookie(Cookie::new("velocityLang", "en"))
        .to_request();
    let html = body_text(test::call_and_read_body(&app, req).await);
    assert_eq!(visible_languages(&html), vec!["en"]);
}

#[actix_web::test]
async fn query_language_switches_and_persists() {
    let app = app!();
    let req = test::TestRequest::get().uri("/?lang=en").to_request();
    let resp = test::call_service(&app, req).await;

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "velocityLang")
        .map(|c| c.value().to_string());
    assert_eq!(cookie.as_deref(), Some("en"));

    let html = body_text(test::read_body(resp).await);
    assert_eq!(visible_languages(&html), vec!["en"]);
}

#[actix_web::test]
async fn query_tab_is_applied_within_its_group() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/?tab=install-manual")
        .to_request();
    let html = body_text(test::call_and_read_body(&app, req).await);
    let doc = Document::parse(&html);

    let manual = doc.get_element_by_id("install-manual").unwrap();
    assert!(doc.has_class(manual, "active"));
    let script = doc.get_element_by_id("install-script").unwrap();
    assert!(!doc.has_class(script, "active"));
    let core = doc.get_element_by_id("req-core").unwrap();
    assert!(doc.has_class(core, "active"));
}

#[actix_web::test]
async fn lang_endpoint_sets_cookie_and_redirects() {
    let app = app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/lang/en").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/")
    );
    assert!(resp
        .response()
        .cookies()
        .any(|c| c.name() == "velocityLang" && c.value() == "en"));

    let bad = test::call_service(&app, test::TestRequest::get().uri("/lang/e1").to_request()).await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn assets_are_served_from_the_binary() {
    let app = app!();
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/assets/style.css").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("text/css; charset=utf-8")
    );

    let missing = test::call_service(
        &app,
        test::TestRequest::get().uri("/assets/missing.js").to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn icons_endpoint_renders_svg() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/api/icons/bitcoin?size=32&color=black")
        .to_request();
    let svg = body_text(test::call_and_read_body(&app, req).await);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="32""#));
    assert!(svg.contains(r#"fill="black""#));

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/icons/nope").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn health_reports_version() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["timestamp"].is_string());
}
