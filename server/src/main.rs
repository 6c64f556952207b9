use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tracing::info;

use adapters::{create_app_state, get_queue, handle_connection};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let app_state = create_app_state();

    let app = Router::new()
        .route("/ws", get(handle_connection))
        .route("/queue", get(get_queue))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Server listening on {addr}");
    axum::serve(listener, app).await.unwrap();
    info!("Server shut down");
}
