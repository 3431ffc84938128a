use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::csrf::AppState;

pub async fn form(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><form method=\"post\" action=\"/transfer\"><button>Transfer</button></form>",
        state.greeting
    ))
}

pub async fn transfer(State(state): State<AppState>) -> impl IntoResponse {
    let origins = state.guard.origins().collect::<Vec<_>>().join(", ");
    Html(format!(
        "<p>Transfer accepted. Trusted origins: {origins}</p>"
    ))
}
