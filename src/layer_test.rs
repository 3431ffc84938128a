use super::*;
use crate::options::GuardOptions;
use crate::result::HeaderCheck;
use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::{ServiceExt, service_fn};

type Body = String;

fn layer(origins: &[&str]) -> OriginGuardLayer {
    OriginGuardLayer::new(OriginGuard::new(
        GuardOptions::new().origins(origins.iter().copied()),
    ))
}

fn counting_service(
    calls: Arc<AtomicUsize>,
) -> impl Service<Request<Body>, Response = Response<Body>, Error = Infallible> + Clone {
    service_fn(move |_request: Request<Body>| {
        let calls = Arc::clone(&calls);
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, Infallible>(Response::new(Body::from("downstream")))
        }
    })
}

fn request(method: &str, origin: Option<&str>, referer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri("/submit");
    if let Some(origin) = origin {
        builder = builder.header(header::ORIGIN, origin);
    }
    if let Some(referer) = referer {
        builder = builder.header(header::REFERER, referer);
    }
    builder.body(Body::new()).expect("valid request")
}

mod forbidden {
    use super::*;

    #[test]
    fn when_rejecting_should_build_plain_text_403() {
        // Arrange
        let rejection = Rejection {
            origin: HeaderCheck::Absent,
            referer: HeaderCheck::Absent,
        };

        // Act
        let response: Response<Body> =
            Forbidden.reject(request("POST", None, None), rejection);

        // Assert
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("text/plain; charset=utf-8"))
        );
        assert_eq!(response.body(), "Forbidden\n");
    }
}

mod service {
    use super::*;

    #[tokio::test]
    async fn when_get_request_should_call_downstream() {
        // Arrange
        let calls = Arc::new(AtomicUsize::new(0));
        let service = layer(&["https://a.test"]).layer(counting_service(Arc::clone(&calls)));

        // Act
        let response = service
            .oneshot(request("GET", Some("https://evil.test"), None))
            .await
            .expect("infallible");

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn when_post_from_allowed_origin_should_call_downstream() {
        // Arrange
        let calls = Arc::new(AtomicUsize::new(0));
        let service = layer(&["https://a.test"]).layer(counting_service(Arc::clone(&calls)));

        // Act
        let response = service
            .oneshot(request("POST", Some("https://a.test"), None))
            .await
            .expect("infallible");

        // Assert
        assert_eq!(response.body(), "downstream");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn when_post_from_allowed_referer_should_call_downstream() {
        // Arrange
        let calls = Arc::new(AtomicUsize::new(0));
        let service = layer(&["https://a.test"]).layer(counting_service(Arc::clone(&calls)));

        // Act
        let response = service
            .oneshot(request("POST", None, Some("https://a.test/form")))
            .await
            .expect("infallible");

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn when_post_from_foreign_origin_should_reject_without_calling_downstream() {
        // Arrange
        let calls = Arc::new(AtomicUsize::new(0));
        let service = layer(&["https://a.test"]).layer(counting_service(Arc::clone(&calls)));

        // Act
        let response = service
            .oneshot(request("POST", Some("https://b.test"), None))
            .await
            .expect("infallible");

        // Assert
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(response.body(), "Forbidden\n");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn when_referer_path_has_utf8_under_allowed_origin_should_call_downstream() {
        // Arrange
        let calls = Arc::new(AtomicUsize::new(0));
        let service = layer(&["https://a.test"]).layer(counting_service(Arc::clone(&calls)));
        let mut request = request("POST", None, None);
        request.headers_mut().insert(
            header::REFERER,
            HeaderValue::from_bytes("https://a.test/café".as_bytes())
                .expect("utf-8 header value"),
        );

        // Act
        let response = service.oneshot(request).await.expect("infallible");

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn when_origin_header_not_utf8_should_treat_as_absent() {
        // Arrange
        let calls = Arc::new(AtomicUsize::new(0));
        let service = layer(&["https://a.test"]).layer(counting_service(Arc::clone(&calls)));
        let mut request = request("POST", None, None);
        request.headers_mut().insert(
            header::ORIGIN,
            HeaderValue::from_bytes(b"https://a.test\xff").expect("opaque header value"),
        );

        // Act
        let response = service.oneshot(request).await.expect("infallible");

        // Assert
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn when_custom_handler_configured_should_receive_request_and_rejection() {
        // Arrange
        let calls = Arc::new(AtomicUsize::new(0));
        let service = layer(&["https://a.test"])
            .forbidden_handler(|request: Request<Body>, rejection: Rejection| {
                let mut response = Response::new(format!(
                    "{} {:?} {:?}",
                    request.uri().path(),
                    rejection.origin,
                    rejection.referer
                ));
                *response.status_mut() = StatusCode::UNPROCESSABLE_ENTITY;
                response
            })
            .layer(counting_service(Arc::clone(&calls)));

        // Act
        let response = service
            .oneshot(request("POST", Some("https://b.test"), Some("https://b.test/")))
            .await
            .expect("infallible");

        // Assert
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.body(), "/submit Mismatch Mismatch");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}

mod origin_guard_layer {
    use super::*;

    #[test]
    fn when_cloned_should_share_guard() {
        // Arrange
        let original = layer(&["https://a.test"]);

        // Act
        let cloned = original.clone();

        // Assert
        assert!(std::ptr::eq(original.guard(), cloned.guard()));
    }

    #[test]
    fn when_built_from_shared_guard_should_reuse_it() {
        // Arrange
        let guard = Arc::new(OriginGuard::new(
            GuardOptions::new().origins(["https://a.test"]),
        ));

        // Act
        let layer = OriginGuardLayer::from_shared(Arc::clone(&guard));

        // Assert
        assert!(std::ptr::eq(layer.guard(), guard.as_ref()));
    }
}
