use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use service::media::MediaStore;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

/// The Web App is served from Telegram's domain, so every origin is allowed.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Router over an already migrated database.
pub fn build_app(db: DatabaseConnection, cfg: &AppConfig) -> Router {
    let state = AppState { db, media: MediaStore::from(&cfg.media) };
    routes::build_router(state, &cfg.media, build_cors())
}

/// Public entry: prepare directories and schema, then serve until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let data_dir = cfg.database.sqlite_data_dir();
    common::env::ensure_env(&cfg.media.static_dir, &cfg.media.upload_dir, data_dir.as_deref()).await?;

    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;
    migration::Migrator::up(&db, None).await?;
    info!(event = "migrated", "database schema up to date");

    let app = build_app(db, &cfg);

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!(event = "drained", "server stopped accepting connections");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 8000;
        assert_eq!(bind_addr(&cfg).unwrap().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn hostname_is_not_a_socket_addr() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "localhost".into();
        assert!(bind_addr(&cfg).is_err());
    }
}
