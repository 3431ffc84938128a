use std::future::Future;
use std::pin::Pin;

use bunner_csrf_rs::constants::{FORBIDDEN_BODY, FORBIDDEN_CONTENT_TYPE, header};
use bunner_csrf_rs::{GuardDecision, RequestContext};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::StatusCode;
use hyper::http::header::HeaderMap;
use hyper::service::Service;
use hyper::{Request, Response};

use super::SharedGuard;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type CsrfBody = Full<Bytes>;

/// Hyper middleware that mirrors the pattern described in the
/// official "Getting Started with a Server Middleware" guide:
/// https://hyper.rs/guides/1/server/middleware/
#[derive(Clone)]
pub struct BunnerCsrf<S> {
    inner: S,
    guard: SharedGuard,
}

impl<S> BunnerCsrf<S> {
    pub fn new(guard: SharedGuard, inner: S) -> Self {
        Self { inner, guard }
    }
}

impl<S> Service<Request<Incoming>> for BunnerCsrf<S>
where
    S: Service<Request<Incoming>, Response = Response<CsrfBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<CsrfBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let decision = {
            let headers = req.headers();
            self.guard.check(&RequestContext {
                method: req.method().as_str(),
                origin: header_value(headers, header::ORIGIN),
                referer: header_value(headers, header::REFERER),
            })
        };

        match decision {
            GuardDecision::Rejected(_) => Box::pin(async move { Ok(forbidden()) }),
            GuardDecision::Accepted(_) | GuardDecision::NotApplicable => {
                let inner = self.inner.clone();
                Box::pin(async move { inner.call(req).await })
            }
        }
    }
}

fn forbidden() -> Response<CsrfBody> {
    Response::builder()
        .status(StatusCode::FORBIDDEN)
        .header(header::CONTENT_TYPE, FORBIDDEN_CONTENT_TYPE)
        .body(Full::new(Bytes::from_static(FORBIDDEN_BODY.as_bytes())))
        .expect("failed to build forbidden response")
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
}
