// =====================================================
// FILE: src/server/routes.rs - ACTIX-WEB ROUTES
// =====================================================

use super::{assets, ServerState};
use crate::core::constants::{LANGUAGE_STORAGE_KEY, VERSION};
use crate::icons;
use crate::ui::{MemoryClipboard, MemoryLanguageStore, UiController};
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/lang/{lang}", web::get().to(set_language))
        .route("/assets/{file}", web::get().to(asset))
        .route("/api/icons/{name}", web::get().to(icon))
        .route("/api/health", web::get().to(health_check));
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    lang: Option<String>,
    tab: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IconQuery {
    size: Option<String>,
    color: Option<String>,
}

// Cookie-Werte kommen vom Client, nur kurze Buchstabencodes zulassen
fn plausible_language(lang: &str) -> bool {
    !lang.is_empty() && lang.len() <= 8 && lang.chars().all(|c| c.is_ascii_alphabetic())
}

fn language_cookie(lang: &str) -> Cookie<'static> {
    let mut cookie = Cookie::new(LANGUAGE_STORAGE_KEY, lang.to_string());
    cookie.set_path("/");
    cookie.set_same_site(SameSite::Lax);
    cookie
}

/// Hauptseite: gespeicherte Sprache aus dem Cookie, dann `?lang` und `?tab`.
pub async fn index(
    req: HttpRequest,
    query: web::Query<PageQuery>,
    state: web::Data<ServerState>,
) -> ActixResult<HttpResponse> {
    let saved = req
        .cookie(LANGUAGE_STORAGE_KEY)
        .map(|c| c.value().to_string())
        .filter(|v| plausible_language(v));

    let store = Arc::new(MemoryLanguageStore::new(saved.as_deref()));
    let ui = UiController::new(state.page(), store.clone(), Arc::new(MemoryClipboard::new()));
    ui.restore_language();

    let mut switched = None;
    if let Some(lang) = query.lang.as_deref().filter(|l| plausible_language(l)) {
        ui.switch_language(lang);
        switched = store.value();
    }
    if let Some(tab) = query.tab.as_deref() {
        ui.switch_tab(tab, None);
    }

    let mut response = HttpResponse::Ok();
    response
        .content_type("text/html; charset=utf-8")
        .insert_header(("Vary", "Cookie"));
    if let Some(lang) = switched {
        response.cookie(language_cookie(&lang));
    }
    Ok(response.body(ui.html()))
}

/// Sprachwahl ohne Skript: Cookie setzen und zurück zur Startseite.
pub async fn set_language(path: web::Path<String>) -> ActixResult<HttpResponse> {
    let lang = path.into_inner();
    if !plausible_language(&lang) {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "invalid language",
            "language": lang,
        })));
    }

    Ok(HttpResponse::SeeOther()
        .cookie(language_cookie(&lang))
        .insert_header(("Location", "/"))
        .finish())
}

pub async fn asset(path: web::Path<String>) -> ActixResult<HttpResponse> {
    let file = path.into_inner();
    match assets::get(&file) {
        Some(data) => Ok(HttpResponse::Ok()
            .content_type(assets::content_type(&file))
            .insert_header(("Cache-Control", "public, max-age=3600"))
            .body(data.into_owned())),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

pub async fn icon(
    path: web::Path<String>,
    query: web::Query<IconQuery>,
) -> ActixResult<HttpResponse> {
    let name = path.into_inner();
    match icons::icon_svg(&name, query.size.as_deref(), query.color.as_deref()) {
        Some(svg) => Ok(HttpResponse::Ok()
            .content_type("image/svg+xml")
            .insert_header(("Cache-Control", "public, max-age=86400"))
            .body(svg)),
        None => Ok(HttpResponse::NotFound().json(json!({
            "error": "unknown icon",
            "icon": name,
        }))),
    }
}

/// Health Check Endpoint
pub async fn health_check() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "velocity-landing",
        "version": VERSION,
        "icons": icons::icon_names().len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
