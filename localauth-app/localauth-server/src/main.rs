use axum::{middleware, routing::get, Router};
use std::net::SocketAddr;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{error, info};

use localauth_api::{
    handlers::{health, user},
    middleware::require_auth,
    LocalAuth,
};
use localauth_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    localauth_shared::telemetry::init_telemetry();

    info!("LocalAuth server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Session manager, memory store, expiry sweep
    let local_auth = LocalAuth::new(config.session.clone())?;
    let auth_state = local_auth.state().clone();

    // Build router
    let protected = Router::new()
        .route("/api/auth/user", get(user::current_user))
        .route_layer(middleware::from_fn(require_auth));

    let app = Router::new()
        .route("/", get(user::auth_status))
        .merge(protected);

    // Health check sits outside the session layers
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(auth_state);

    let app = local_auth.install(app).merge(health_routes);

    let app = app.layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()));

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
