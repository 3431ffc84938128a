use std::future::{Ready, ready};
use std::pin::Pin;
use std::task::{Context, Poll};

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{CONTENT_TYPE, HeaderMap};
use actix_web::{Error, HttpResponse};
use bunner_csrf_rs::constants::{FORBIDDEN_BODY, FORBIDDEN_CONTENT_TYPE, header};
use bunner_csrf_rs::{GuardDecision, RequestContext};

use super::SharedGuard;

type LocalBoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + 'a>>;

pub struct BunnerCsrf {
    guard: SharedGuard,
}

impl BunnerCsrf {
    pub fn new(guard: SharedGuard) -> Self {
        Self { guard }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BunnerCsrf
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = BunnerCsrfMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BunnerCsrfMiddleware {
            service,
            guard: self.guard.clone(),
        }))
    }
}

pub struct BunnerCsrfMiddleware<S> {
    service: S,
    guard: SharedGuard,
}

impl<S, B> Service<ServiceRequest> for BunnerCsrfMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let decision = {
            let headers = req.headers();
            self.guard.check(&RequestContext {
                method: req.method().as_str(),
                origin: header_value(headers, header::ORIGIN),
                referer: header_value(headers, header::REFERER),
            })
        };

        match decision {
            GuardDecision::Rejected(_) => {
                let response = HttpResponse::Forbidden()
                    .insert_header((CONTENT_TYPE, FORBIDDEN_CONTENT_TYPE))
                    .body(FORBIDDEN_BODY)
                    .map_into_right_body();
                Box::pin(async move { Ok(req.into_response(response)) })
            }
            GuardDecision::Accepted(_) | GuardDecision::NotApplicable => {
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
        }
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
}
