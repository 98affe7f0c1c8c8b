use crate::interceptor::{Interceptor, InterceptorResult, Next};
use async_trait::async_trait;
use axum::extract::Request;
use std::time::Instant;

/// An interceptor that logs request timing and status
#[derive(Clone, Default)]
pub struct LoggingInterceptor;

#[async_trait]
impl Interceptor for LoggingInterceptor {
    async fn intercept(&self, request: Request, next: Next) -> InterceptorResult {
        let method = request.method().clone();
        let uri = request.uri().clone();
        let start = Instant::now();

        tracing::debug!(%method, %uri, "--> request");

        match next.run(request).await {
            Ok(response) => {
                tracing::info!(
                    %method,
                    %uri,
                    status = response.status().as_u16(),
                    elapsed = ?start.elapsed(),
                    "<-- response"
                );
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(%method, %uri, error = %e, elapsed = ?start.elapsed(), "<-- failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interceptor::InterceptorLayer;
    use axum::{Router, body::Body, http::StatusCode, routing::get};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_logging_passes_response_through() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let app = Router::new()
            .route("/", get(|| async { (StatusCode::ACCEPTED, "queued") }))
            .layer(InterceptorLayer::default().with(LoggingInterceptor));

        let request = axum::http::Request::builder()
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"queued");
    }
}
