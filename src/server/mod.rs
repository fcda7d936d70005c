// Server module - actix-web application setup and shared state

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use crate::cloudinary::{AdminClient, AdminTransport, ReqwestTransport};
use crate::config::Config;

pub mod handlers;

/// Per-worker shared state
///
/// Nothing here is mutable across requests; the Admin client only wraps
/// the outbound transport.
pub struct AppState {
    pub config: Config,
    pub admin: AdminClient,
}

impl AppState {
    pub fn new(config: Config, transport: Arc<dyn AdminTransport>) -> Self {
        Self {
            config,
            admin: AdminClient::new(transport),
        }
    }
}

/// Register every route; shared between the binary and endpoint tests
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::cloudinary_tags)
        .service(handlers::cloudinary_simple)
        .service(handlers::sitemap_xml)
        .service(handlers::brand_tokens)
        .service(handlers::seo_schema)
        .service(handlers::health);
}

/// Run the HTTP server until shutdown
pub async fn run(config: Config) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", config.server.address, config.server.port);
    let state = web::Data::new(AppState::new(
        config,
        Arc::new(ReqwestTransport::new()),
    ));

    tracing::info!(address = %bind_address, "Starting site server");

    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes))
        .bind(&bind_address)?
        .run()
        .await
}
