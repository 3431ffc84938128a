mod csrf;
mod routes;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use bunner_csrf_rs::OriginGuardLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,bunner_csrf_rs=debug")),
        )
        .init();

    let app_state = csrf::build_state().expect("valid CSRF configuration");

    let app = Router::new()
        .route("/transfer", get(routes::form).post(routes::transfer))
        .layer(OriginGuardLayer::from_shared(app_state.guard.clone()))
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse().unwrap();
    tracing::info!("Axum example running on http://{addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
