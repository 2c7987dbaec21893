//! Axum-based chat gateway for the campus assistant. Config-driven via CoreConfig.

mod handlers;

use axum::{
    extract::State,
    http::Method,
    routing::{get, post},
    Json, Router,
};
use campus_core::{Assistant, CoreConfig};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Pre-flight check: config parses, data sources load, port is free.
async fn run_verify(config: &CoreConfig) -> Result<(), String> {
    print!("Loading dataset and knowledge base... ");
    let assistant = Assistant::load(config)
        .await
        .map_err(|e| format!("data load failed: {}", e))?;
    println!(
        "OK ({} students, {} courses, {} FAQ answers)",
        assistant.dataset().student_count(),
        assistant.dataset().course_count(),
        assistant.knowledge().len()
    );

    print!("Checking {}:{}... ", config.host, config.port);
    match std::net::TcpListener::bind((config.host.as_str(), config.port)) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => return Err(format!("Port {} BLOCKED: {}", config.port, e)),
    }

    println!("\nAll checks passed. Ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[campus-gateway] .env not loaded: {} (using system environment)", e);
    }

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--verify") {
        let verified = match CoreConfig::load() {
            Ok(config) => run_verify(&config).await,
            Err(e) => Err(format!("Config load failed: {}", e)),
        };
        match verified {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(CoreConfig::load()?);
    tracing::info!("Starting chatbot service...");
    let assistant = Arc::new(Assistant::load(&config).await?);
    tracing::info!(
        students = assistant.dataset().student_count(),
        faq_answers = assistant.knowledge().len(),
        "Chatbot initialised with CSV data and knowledge base"
    );

    let app = build_app(AppState {
        config: Arc::clone(&config),
        assistant,
    });

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("{} listening on {}", config.app_name, listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/api/chat", post(handlers::chat::chat))
        .route("/health", get(health))
        .route("/status", get(status))
        .with_state(state)
        .layer(cors)
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) assistant: Arc<Assistant>,
}

/// GET /health – liveness check.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /status – app identity and loaded table sizes.
async fn status(State(state): State<AppState>) -> Json<serde_json::Value> {
    let dataset = state.assistant.dataset();
    Json(serde_json::json!({
        "app_name": state.config.app_name,
        "port": state.config.port,
        "university": state.assistant.university_name(),
        "students": dataset.student_count(),
        "courses": dataset.course_count(),
        "faq_answers": state.assistant.knowledge().len(),
    }))
}
