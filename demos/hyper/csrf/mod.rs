use std::sync::Arc;

use bunner_csrf_rs::{GuardOptions, OriginGuard, ValidationError};

pub type SharedGuard = Arc<OriginGuard>;
pub type SharedAppState = Arc<AppState>;

pub struct AppState {
    pub guard: SharedGuard,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<SharedAppState, ValidationError> {
    let options = GuardOptions::new()
        .origin("127.0.0.1:5003")
        .origin("localhost:5003")
        .ignore_scheme(true);

    let guard = Arc::new(OriginGuard::try_new(options)?);

    Ok(Arc::new(AppState {
        guard,
        greeting: "Welcome to the Hyper CSRF example!",
    }))
}

pub mod middleware;
