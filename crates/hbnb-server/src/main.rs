//! HBnB API Server
//!
//! HTTP front for the in-memory listing core: users, amenities, places and
//! reviews under `/api/v1`, with Swagger UI at `/docs`. All state lives in
//! process memory.

mod doc;
mod handlers;
mod settings;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post, MethodRouter},
    Router,
};
use hbnb_core::HbnbFacade;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use doc::ApiDoc;
use settings::{Environment, ServerConfig};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub facade: Arc<HbnbFacade>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            facade: Arc::new(HbnbFacade::new()),
        }
    }
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[FATAL] Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(config.environment) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting HBnB API server v{}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {:?}", config.environment);

    if let Err(e) = run_server(config).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(environment: Environment) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_log_level()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(env_filter)
        .try_init()?;

    Ok(())
}

async fn run_server(config: ServerConfig) -> Result<()> {
    let app = build_router(AppState::new());

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/v1", api_routes())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Collection routes answer with and without a trailing slash
fn collection(
    router: Router<AppState>,
    path: &str,
    methods: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(path, methods.clone())
        .route(&format!("{}/", path), methods)
}

fn api_routes() -> Router<AppState> {
    let router = Router::new();
    let router = collection(
        router,
        "/users",
        get(handlers::users::list).post(handlers::users::create),
    );
    let router = collection(
        router,
        "/amenities",
        get(handlers::amenities::list).post(handlers::amenities::create),
    );
    let router = collection(
        router,
        "/places",
        get(handlers::places::list).post(handlers::places::create),
    );
    let router = collection(router, "/reviews", post(handlers::reviews::create));

    router
        .route(
            "/users/:id",
            get(handlers::users::get).put(handlers::users::update),
        )
        .route(
            "/amenities/:id",
            get(handlers::amenities::get).put(handlers::amenities::update),
        )
        .route(
            "/places/:id",
            get(handlers::places::get).put(handlers::places::update),
        )
        .route("/places/:id/reviews", get(handlers::places::reviews))
        .route(
            "/reviews/:id",
            get(handlers::reviews::get)
                .put(handlers::reviews::update)
                .delete(handlers::reviews::delete),
        )
}
