use std::sync::Arc;

use bunner_csrf_rs::{GuardOptions, OriginGuard};

pub type SharedGuard = Arc<OriginGuard>;

#[derive(Clone)]
pub struct AppState {
    pub guard: SharedGuard,
    pub greeting: &'static str,
}

const OPTIONS_JSON: &str = r#"{
    "origins": ["http://127.0.0.1:5002", "http://localhost:5002"],
    "ignore_proto": false
}"#;

pub fn build_state() -> Result<AppState, serde_json::Error> {
    let options: GuardOptions = serde_json::from_str(OPTIONS_JSON)?;

    Ok(AppState {
        guard: Arc::new(OriginGuard::new(options)),
        greeting: "Welcome to the Actix CSRF example!",
    })
}

pub mod middleware;
