//! Static Responder
//!
//! Echoes the whole example fixture on every request, with no delay.

use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::errors::ResponderError;
use crate::logging::log_request;
use mockd_fixture::Fixture;

/// Route served by [`StaticResponder`]
pub const ROUTE: &str = "/mock/example";

/// Serves a fixture serialized once at construction
#[derive(Debug, Clone)]
pub struct StaticResponder {
    body: Bytes,
}

impl StaticResponder {
    pub fn new(fixture: &Fixture) -> Result<Self, ResponderError> {
        let body = serde_json::to_vec(fixture.value())?;
        Ok(Self {
            body: Bytes::from(body),
        })
    }

    /// Serialized fixture, exactly as sent on the wire
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Router with `GET /mock/example` mounted
    pub fn router(self) -> Router {
        Router::new()
            .route(ROUTE, get(get_example))
            .with_state(Arc::new(self))
    }
}

async fn get_example(State(responder): State<Arc<StaticResponder>>, request: Request) -> Response {
    log_request(&request);
    let content_type = HeaderValue::from_static("application/json");
    ([(header::CONTENT_TYPE, content_type)], responder.body.clone()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn example() -> Fixture {
        Fixture::from_value(json!({
            "query": "hotels near Lake Lucerne",
            "answer": [
                {"name": "Hotel Schweizerhof", "stars": 5, "price_per_night": 420.0},
                {"name": "Art Deco Hotel Montana", "stars": 4, "price_per_night": 310.5}
            ],
            "source": null
        }))
    }

    fn request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_body_matches_fixture() {
        let fixture = example();
        let router = StaticResponder::new(&fixture).unwrap().router();

        for _ in 0..3 {
            let response = router
                .clone()
                .oneshot(request(Method::GET, ROUTE))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert_eq!(body.as_ref(), serde_json::to_vec(fixture.value()).unwrap());

            let value: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(&value, fixture.value());
        }
    }

    #[tokio::test]
    async fn test_scalar_fixture() {
        let fixture = Fixture::from_value(json!("just a string"));
        let responder = StaticResponder::new(&fixture).unwrap();
        assert_eq!(responder.body(), br#""just a string""#);

        let response = responder
            .router()
            .oneshot(request(Method::GET, ROUTE))
            .await
            .unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body.as_ref(), br#""just a string""#);
    }

    #[tokio::test]
    async fn test_post_is_rejected() {
        let router = StaticResponder::new(&example()).unwrap().router();

        let response = router.oneshot(request(Method::POST, ROUTE)).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_random_route_not_mounted() {
        let router = StaticResponder::new(&example()).unwrap().router();

        let response = router
            .oneshot(request(Method::GET, "/mock/backend/getResponse"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
