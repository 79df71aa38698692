//! API Server Entry Point
//!
//! Startup: configuration, database, migrations, seeding, then serve.
//! Startup failures are `anyhow` errors.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use dashboard::application::{PlatformUseCase, SeedDemoUseCase};
use dashboard::config::SameSite;
use dashboard::{DashboardConfig, PgDashboardRepository, ResponseCatalog};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,dashboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;
    let max_connections = env_or("DATABASE_MAX_CONNECTIONS", 5u32)?;

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await?;

    tracing::info!(max_connections, "Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let repo = PgDashboardRepository::new(pool.clone());

    // Startup cleanup: remove expired sessions
    // Errors here should not prevent server startup
    match repo.cleanup_expired().await {
        Ok(sessions) => {
            tracing::info!(sessions_deleted = sessions, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session cleanup failed, continuing anyway");
        }
    }

    let repo_arc = Arc::new(repo.clone());
    PlatformUseCase::new(repo_arc.clone()).seed_defaults().await?;

    if env_or("SEED_DEMO_DATA", false)? {
        let created = SeedDemoUseCase::new(
            repo_arc.clone(),
            repo_arc.clone(),
            repo_arc.clone(),
            repo_arc.clone(),
        )
        .execute()
        .await?;
        tracing::info!(created, "Demo data seeding finished");
    }

    let config = load_config()?;

    let catalog = match env::var("ASSISTANT_CATALOG_PATH") {
        Ok(path) => {
            tracing::info!(path = %path, "Loading assistant catalog override");
            ResponseCatalog::from_file(&path)?
        }
        Err(_) => ResponseCatalog::bundled()?,
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest(
            "/api",
            dashboard::dashboard_router(repo, config, Arc::new(catalog)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env_or("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 31113)))?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Session secret and cookie policy from the environment
fn load_config() -> anyhow::Result<DashboardConfig> {
    let mut config = match env::var("SESSION_SECRET") {
        Ok(secret_b64) => {
            let secret_bytes = Engine::decode(&general_purpose::STANDARD, secret_b64.trim())
                .context("SESSION_SECRET must be base64")?;
            let secret: [u8; 32] = secret_bytes
                .try_into()
                .map_err(|_| anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes"))?;
            DashboardConfig {
                session_secret: secret,
                ..DashboardConfig::default()
            }
        }
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("SESSION_SECRET not set, using a random development secret");
            DashboardConfig::development()
        }
        Err(_) => anyhow::bail!("SESSION_SECRET must be set in production"),
    };

    if let Ok(secure) = env::var("COOKIE_SECURE") {
        config.cookie_secure = secure.trim().parse().context("COOKIE_SECURE must be true or false")?;
    }
    if let Ok(same_site) = env::var("COOKIE_SAME_SITE") {
        config.cookie_same_site = SameSite::parse(&same_site)
            .with_context(|| format!("Unknown COOKIE_SAME_SITE value: {same_site}"))?;
    }

    Ok(config)
}

/// Parse an optional environment variable, falling back to `default`
fn env_or<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid {name}: {e}")),
        Err(_) => Ok(default),
    }
}
