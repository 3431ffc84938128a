use std::sync::Arc;

use bunner_csrf_rs::{GuardOptions, OriginGuard, ValidationError};

pub type SharedGuard = Arc<OriginGuard>;

#[derive(Clone)]
pub struct AppState {
    pub guard: SharedGuard,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let options = GuardOptions::new()
        .origins(["http://127.0.0.1:5001", "http://localhost:5001"])
        .ignore_scheme(false);

    let guard = Arc::new(OriginGuard::try_new(options)?);

    Ok(AppState {
        guard,
        greeting: "Welcome to the Axum CSRF example!",
    })
}
