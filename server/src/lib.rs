//! Shopping List Backend
//!
//! Layered architecture:
//! - domain: Core entities and validation rules
//! - repository: Data access abstractions and the SQLite implementation
//! - http: REST handlers, routing and error mapping

use anyhow::Context;
use tokio::{net::TcpListener, signal};
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod domain;
pub mod http;
pub mod repository;

pub use config::Config;
pub use http::build_router;

use repository::{init_db, DbState, ItemRepository, TagRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub items: ItemRepository,
    pub tags: TagRepository,
}

impl AppState {
    pub fn new(db: &DbState) -> Self {
        Self {
            items: ItemRepository::new(db.connection()),
            tags: TagRepository::new(db.connection()),
        }
    }
}

/// Install the global tracing subscriber, honouring `RUST_LOG`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("shopping_list_server=info,tower_http=info"));
    fmt().with_env_filter(filter).init();
}

/// Open the database and serve until Ctrl+C or SIGTERM
pub async fn run(config: Config) -> anyhow::Result<()> {
    info!("Opening database at {}", config.database_path.display());
    let db = init_db(&config.database_path)
        .await
        .context("database initialization failed")?;

    let app = build_router(AppState::new(&db)).fallback_service(ServeDir::new(&config.static_dir));

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("Server running on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
