//! HTTP server wiring for minipaste (routes, handlers, and shared state).

/// HTTP error mapping for handlers.
pub mod error;
/// HTTP handlers for pages and the JSON API.
pub mod handlers;
/// Askama page templates.
pub mod render;

pub use minipaste_core::{
    config, models, naming, store, AppError, Config, ExpirationWindow, Language, Paste,
    PasteStore, DEFAULT_PORT,
};

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{any, get, post},
    Router,
};
use rand::{rngs::StdRng, SeedableRng};
use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; script-src 'self' 'unsafe-inline'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; font-src 'self'; connect-src 'self'; frame-ancestors 'none'; base-uri 'self'; form-action 'self'";

/// Static asset directories served beneath `ASSETS_DIR`.
const ASSET_DIRS: [&str; 3] = ["scripts", "styles", "images"];

/// Shared state passed to HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PasteStore>,
    pub config: Arc<Config>,
    pub rng: Arc<Mutex<StdRng>>,
    pub expiration: ExpirationWindow,
}

impl AppState {
    /// Construct shared state with an entropy-seeded id generator.
    ///
    /// # Arguments
    /// - `config`: Loaded configuration.
    /// - `store`: Open paste store.
    pub fn new(config: Config, store: PasteStore) -> Self {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    /// Construct shared state with a caller-provided random source.
    pub fn with_rng(config: Config, store: PasteStore, rng: StdRng) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            rng: Arc::new(Mutex::new(rng)),
            expiration: ExpirationWindow::default(),
        }
    }
}

/// Worst-case growth of one content byte on the wire.
///
/// JSON escapes a control byte as `\u0001` (six bytes); form encoding
/// grows a byte to at most three.
const MAX_WIRE_EXPANSION: usize = 6;

/// Transport body limit for a given paste limit.
///
/// The transport limit covers the worst-case encoding of a maximum-size
/// paste; the paste limit itself is enforced on the decoded field.
pub fn transport_body_limit(max_paste_size: usize) -> usize {
    max_paste_size
        .saturating_mul(MAX_WIRE_EXPANSION)
        .saturating_add(64 * 1024)
}

/// Create the application router with all routes and middleware.
///
/// # Arguments
/// - `state`: Shared application state.
/// - `allow_public_access`: Whether to allow cross-origin requests from any origin.
///
/// # Returns
/// Configured `axum::Router`.
pub fn create_app(state: AppState, allow_public_access: bool) -> Router {
    let cors_port = state.config.port;
    create_app_with_cors_port(state, allow_public_access, cors_port)
}

/// Resolve the listener address from env var overrides and security policy.
///
/// # Returns
/// A socket address that enforces loopback when public access is disabled.
pub fn resolve_bind_address(config: &Config, allow_public_access: bool) -> SocketAddr {
    resolve_bind_address_from(
        std::env::var("BIND").ok().as_deref(),
        config,
        allow_public_access,
    )
}

fn resolve_bind_address_from(
    bind: Option<&str>,
    config: &Config,
    allow_public_access: bool,
) -> SocketAddr {
    let default_bind = SocketAddr::from(([127, 0, 0, 1], config.port));
    let requested = match bind {
        Some(value) => match value.trim().parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(err) => {
                tracing::warn!(
                    "Invalid BIND='{}': {}. Falling back to {}",
                    value,
                    err,
                    default_bind
                );
                default_bind
            }
        },
        None => default_bind,
    };

    if allow_public_access || requested.ip().is_loopback() {
        return requested;
    }

    tracing::warn!(
        "Non-loopback bind {} requested without ALLOW_PUBLIC_ACCESS; forcing 127.0.0.1",
        requested
    );
    SocketAddr::from(([127, 0, 0, 1], requested.port()))
}

fn cors_layer(allow_public_access: bool, cors_port: u16) -> CorsLayer {
    let methods = [Method::GET, Method::POST];
    if allow_public_access {
        return CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any);
    }

    let origins: Vec<HeaderValue> = [
        format!("http://localhost:{}", cors_port),
        format!("http://127.0.0.1:{}", cors_port),
    ]
    .iter()
    .filter_map(|origin| HeaderValue::from_str(origin).ok())
    .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

fn with_static_assets(router: Router<AppState>, assets_dir: &Path) -> Router<AppState> {
    ASSET_DIRS.iter().fold(router, |router, dir| {
        router.nest_service(&format!("/{}", dir), ServeDir::new(assets_dir.join(dir)))
    })
}

fn create_app_with_cors_port(state: AppState, allow_public_access: bool, cors_port: u16) -> Router {
    let body_limit = transport_body_limit(state.config.max_paste_size);
    let assets_dir = Path::new(&state.config.assets_dir).to_path_buf();

    let router = Router::new()
        .route(
            "/",
            get(handlers::page::show_form).post(handlers::page::submit_paste),
        )
        .route("/:id", any(handlers::page::show_paste))
        .route("/api/paste", post(handlers::api::create_paste))
        .route("/api/paste/:id", get(handlers::api::get_paste))
        .route("/api/languages", get(handlers::api::list_languages));

    with_static_assets(router, &assets_dir)
        .fallback(handlers::page::redirect_home)
        .with_state(state)
        .layer(
            tower::ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(body_limit))
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors_layer(allow_public_access, cors_port))
                .layer(SetResponseHeaderLayer::overriding(
                    header::CONTENT_SECURITY_POLICY,
                    HeaderValue::from_static(CONTENT_SECURITY_POLICY),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                )),
        )
}

fn listener_cors_port(listener: &tokio::net::TcpListener, fallback_port: u16) -> u16 {
    listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(fallback_port)
}

/// Run the Axum server with graceful shutdown support.
///
/// # Errors
/// Returns any I/O error produced by `axum::serve`.
pub async fn serve_router(
    listener: tokio::net::TcpListener,
    state: AppState,
    allow_public_access: bool,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let cors_port = listener_cors_port(&listener, state.config.port);
    let app = create_app_with_cors_port(state, allow_public_access, cors_port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}
