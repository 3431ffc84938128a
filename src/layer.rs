use crate::constants::{FORBIDDEN_BODY, FORBIDDEN_CONTENT_TYPE};
use crate::context::RequestContext;
use crate::guard::OriginGuard;
use crate::result::{GuardDecision, Rejection};
use futures_util::future::Either;
use http::header::{self, HeaderMap, HeaderName, HeaderValue};
use http::{Request, Response, StatusCode};
use std::future::{Ready, ready};
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::{debug, trace};

/// Produces the response sent in place of the protected handler.
///
/// Implemented for [`Forbidden`] and for any
/// `Fn(Request<ReqBody>, Rejection) -> Response<ResBody>` closure.
pub trait RejectionHandler<ReqBody, ResBody>: Send + Sync + 'static {
    fn reject(&self, request: Request<ReqBody>, rejection: Rejection) -> Response<ResBody>;
}

impl<F, ReqBody, ResBody> RejectionHandler<ReqBody, ResBody> for F
where
    F: Fn(Request<ReqBody>, Rejection) -> Response<ResBody> + Send + Sync + 'static,
{
    fn reject(&self, request: Request<ReqBody>, rejection: Rejection) -> Response<ResBody> {
        self(request, rejection)
    }
}

/// Default rejection handler: `403 Forbidden` with a plain-text body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Forbidden;

impl<ReqBody, ResBody> RejectionHandler<ReqBody, ResBody> for Forbidden
where
    ResBody: From<&'static str>,
{
    fn reject(&self, _request: Request<ReqBody>, _rejection: Rejection) -> Response<ResBody> {
        let mut response = Response::new(ResBody::from(FORBIDDEN_BODY));
        *response.status_mut() = StatusCode::FORBIDDEN;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(FORBIDDEN_CONTENT_TYPE),
        );
        response
    }
}

/// Tower layer that wraps a service with an [`OriginGuard`].
pub struct OriginGuardLayer<H = Forbidden> {
    guard: Arc<OriginGuard>,
    handler: Arc<H>,
}

impl OriginGuardLayer {
    pub fn new(guard: OriginGuard) -> Self {
        Self::from_shared(Arc::new(guard))
    }

    pub fn from_shared(guard: Arc<OriginGuard>) -> Self {
        Self {
            guard,
            handler: Arc::new(Forbidden),
        }
    }
}

impl<H> OriginGuardLayer<H> {
    /// Replaces the handler invoked for rejected requests.
    pub fn forbidden_handler<T>(self, handler: T) -> OriginGuardLayer<T> {
        OriginGuardLayer {
            guard: self.guard,
            handler: Arc::new(handler),
        }
    }

    pub fn guard(&self) -> &OriginGuard {
        &self.guard
    }
}

impl<H> Clone for OriginGuardLayer<H> {
    fn clone(&self) -> Self {
        Self {
            guard: Arc::clone(&self.guard),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<S, H> Layer<S> for OriginGuardLayer<H> {
    type Service = OriginGuardService<S, H>;

    fn layer(&self, inner: S) -> Self::Service {
        OriginGuardService {
            inner,
            guard: Arc::clone(&self.guard),
            handler: Arc::clone(&self.handler),
        }
    }
}

/// Service produced by [`OriginGuardLayer`].
pub struct OriginGuardService<S, H = Forbidden> {
    inner: S,
    guard: Arc<OriginGuard>,
    handler: Arc<H>,
}

impl<S: Clone, H> Clone for OriginGuardService<S, H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            guard: Arc::clone(&self.guard),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<S, H, ReqBody, ResBody> Service<Request<ReqBody>> for OriginGuardService<S, H>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    H: RejectionHandler<ReqBody, ResBody>,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = Either<S::Future, Ready<Result<Self::Response, Self::Error>>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        let decision = {
            let headers = request.headers();
            self.guard.check(&RequestContext {
                method: request.method().as_str(),
                origin: header_str(headers, &header::ORIGIN),
                referer: header_str(headers, &header::REFERER),
            })
        };

        if let Some(rejection) = decision.rejection() {
            debug!(
                method = %request.method(),
                path = request.uri().path(),
                origin = ?rejection.origin,
                referer = ?rejection.referer,
                "cross-site request rejected"
            );
            return Either::Right(ready(Ok(self.handler.reject(request, rejection))));
        }

        if let GuardDecision::Accepted(matched) = decision {
            trace!(via = matched.as_str(), "request origin accepted");
        }
        Either::Left(self.inner.call(request))
    }
}

// Header values may carry UTF-8 beyond visible ASCII; only invalid UTF-8 is
// treated as absent.
fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;
