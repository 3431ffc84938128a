mod csrf;
mod routes;

use actix_web::{App, HttpServer, web};
use csrf::middleware::BunnerCsrf;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,bunner_csrf_rs=debug")),
        )
        .init();

    let app_state = csrf::build_state().expect("valid CSRF configuration");

    HttpServer::new(move || {
        let state = app_state.clone();
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(BunnerCsrf::new(state.guard.clone()))
            .route("/transfer", web::get().to(routes::form))
            .route("/transfer", web::post().to(routes::transfer))
    })
    .bind(("127.0.0.1", 5002))?
    .run()
    .await
}
