use actix_web::{HttpResponse, Responder, http::header::CONTENT_TYPE, web};

use crate::csrf::AppState;

pub async fn form(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, "text/html; charset=utf-8"))
        .body(format!(
            "<h1>{}</h1><form method=\"post\" action=\"/transfer\"><button>Transfer</button></form>",
            state.greeting
        ))
}

pub async fn transfer(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, "text/html; charset=utf-8"))
        .body(format!(
            "<p>Transfer accepted. {} trusted origins configured.</p>",
            state.guard.origins().count()
        ))
}
