use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::header::CONTENT_TYPE;
use hyper::http::{Method, StatusCode};
use hyper::service::Service;
use hyper::{Request, Response};

use crate::csrf::SharedAppState;
use crate::csrf::middleware::CsrfBody;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

#[derive(Clone)]
pub struct Router {
    state: SharedAppState,
}

pub fn router(state: SharedAppState) -> Router {
    Router { state }
}

impl Service<Request<Incoming>> for Router {
    type Response = Response<CsrfBody>;
    type Error = Infallible;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let state = self.state.clone();

        Box::pin(async move {
            let response = match (req.method(), req.uri().path()) {
                (&Method::GET, "/transfer") => form(state),
                (&Method::POST, "/transfer") => transfer(),
                _ => not_found(),
            };

            Ok(response)
        })
    }
}

fn form(state: SharedAppState) -> Response<CsrfBody> {
    let body = format!(
        "<h1>{}</h1><form method=\"post\" action=\"/transfer\"><button>Transfer</button></form>",
        state.greeting
    );

    html(StatusCode::OK, body)
}

fn transfer() -> Response<CsrfBody> {
    html(StatusCode::OK, "<p>Transfer accepted.</p>".to_string())
}

fn html(status: StatusCode, body: String) -> Response<CsrfBody> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .expect("valid response")
}

fn not_found() -> Response<CsrfBody> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Full::new(Bytes::from("Not Found")))
        .expect("valid response")
}
