// src/server/mod.rs
pub mod assets;
pub mod routes;

use crate::core::prelude::*;
use crate::dom::Document;
use crate::t;
use actix_web::{middleware, web, App, HttpServer};

/// Shared by all workers: the fully loaded page in its initial state.
/// Every request works on its own clone.
#[derive(Debug, Clone)]
pub struct ServerState {
    page: Document,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            page: crate::loader::render_page(),
        }
    }

    pub fn page(&self) -> Document {
        self.page.clone()
    }
}

crate::impl_default!(ServerState, Self::new());

pub async fn run(config: &Config) -> Result<()> {
    let server = &config.server;
    let state = web::Data::new(ServerState::new());

    log::info!(
        "{}",
        t!(
            "server.starting",
            &server.host,
            &server.port.to_string(),
            &server.workers.to_string()
        )
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure)
    })
    .workers(server.workers)
    .shutdown_timeout(server.shutdown_timeout)
    .bind((server.host.as_str(), server.port))
    .map_err(|e| {
        AppError::Server(t!(
            "server.bind_failed",
            &server.host,
            &server.port.to_string(),
            &e.to_string()
        ))
    })?
    .run()
    .await
    .map_err(|e| AppError::Server(e.to_string()))?;

    log::info!("{}", t!("server.stopped"));
    Ok(())
}
