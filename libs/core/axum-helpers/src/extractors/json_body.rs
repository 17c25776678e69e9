//! JSON body extractor with the standard error shape.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but a missing, malformed or mistyped body is rejected
/// with a 400 `{"error": "Invalid request body"}` instead of axum's plain-text
/// rejection.
///
/// ```ignore
/// use axum_helpers::JsonBody;
///
/// async fn sell(JsonBody(body): JsonBody<QuantityRequest>) -> impl IntoResponse { ... }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Quantity {
        quantity: i64,
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            post(|JsonBody(body): JsonBody<Quantity>| async move { body.quantity.to_string() }),
        )
    }

    fn request(content_type: &str, body: &'static str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let response = app()
            .oneshot(request("application/json", r#"{"quantity": 4}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"4");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        for (content_type, body) in [
            ("application/json", "{not json"),
            ("application/json", r#"{"quantity": "four"}"#),
            ("text/plain", r#"{"quantity": 4}"#),
        ] {
            let response = app().oneshot(request(content_type, body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(json["error"], "Invalid request body");
        }
    }
}
