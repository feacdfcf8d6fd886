#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod config;
mod routes;

use crate::config::ServerConfig;
use crate::routes::ai::UploadLimit;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::{Context, Result};
use log::info;
use roadscan_detect::PotholeDetector;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("roadscan=info,actix_web=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    info!(
        "Starting road analysis service on {}:{} (upload limit {} bytes)",
        config.bind, config.port, config.max_upload_bytes
    );

    let detector = PotholeDetector::default();
    let max_upload_bytes = config.max_upload_bytes;
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(detector))
            .app_data(web::Data::new(UploadLimit(max_upload_bytes)))
            .configure(routes::configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server
        .bind((config.bind.as_str(), config.port))
        .with_context(|| format!("Failed to bind {}:{}", config.bind, config.port))?
        .run()
        .await?;

    Ok(())
}
