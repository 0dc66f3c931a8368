//! FileGate Server — authentication gateway for a filesystem-scoped web service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use filegate_api::state::AppState;
use filegate_auth::gateway::AuthGateway;
use filegate_auth::identity::IdentityVerifier;
use filegate_auth::password::PasswordHasher;
use filegate_auth::session::SessionIssuer;
use filegate_auth::session::issuer::resolve_secret;
use filegate_core::config::AppConfig;
use filegate_core::error::AppError;
use filegate_store::{MemoryUserStore, template_user};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("FILEGATE_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

    AppConfig::load(&config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FileGate v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Identity provider key (parse once, fatal on failure) ──
    let verifier = IdentityVerifier::builtin()?;

    // ── Step 2: User store and template user ─────────────────────────
    let hasher = PasswordHasher::new();
    let store = MemoryUserStore::from_config(&config.accounts, &hasher)?;
    if store.is_empty() && !config.auth.no_auth {
        tracing::warn!("No local accounts provisioned; only identity-token access will succeed");
    }
    let template = template_user(&config.accounts);

    // ── Step 3: Session issuer ───────────────────────────────────────
    let secret = resolve_secret(&config.auth);
    let issuer = SessionIssuer::new(&secret, &config.auth);

    // ── Step 4: Auth gateway ─────────────────────────────────────────
    if config.auth.no_auth {
        tracing::warn!("Authentication disabled; every request runs as the template user");
    }
    let gateway = AuthGateway::new(
        Arc::new(store),
        hasher,
        issuer,
        verifier,
        config.auth.no_auth,
        template,
    );

    // ── Step 5: Build and start HTTP server ──────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        gateway: Arc::new(gateway),
    };
    let app = filegate_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("FileGate server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("FileGate server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
