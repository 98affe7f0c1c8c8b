use async_trait::async_trait;
use axum::{extract::Request, response::Response};
use std::future::Future;
use std::pin::Pin;

pub mod layer;
pub mod logging;

pub use layer::{InterceptorLayer, InterceptorService};
pub use logging::LoggingInterceptor;

/// standard return type for Interceptors
pub type InterceptorResult = Result<Response, InterceptorError>;

/// A type-erased error for interceptors
pub type InterceptorError = Box<dyn std::error::Error + Send + Sync>;

/// Boxed future returned by the rest of the chain
pub type NextFuture = Pin<Box<dyn Future<Output = InterceptorResult> + Send>>;

/// Represents the next handler in the chain
pub struct Next {
    run: Box<dyn FnOnce(Request) -> NextFuture + Send>,
}

impl Next {
    /// Create a new Next handler
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(Request) -> NextFuture + Send + 'static,
    {
        Self { run: Box::new(f) }
    }

    /// Execute the next handler
    pub async fn run(self, request: Request) -> InterceptorResult {
        (self.run)(request).await
    }
}

/// The Interceptor trait
///
/// Interceptors wrap the whole application, outside the CRUD router. They can
/// inspect the request before it is routed and the response after the
/// controller produced it.
///
/// # Example
/// ```
/// use crudstamp::interceptor::{Interceptor, InterceptorResult, Next};
/// use crudstamp::async_trait;
/// use axum::extract::Request;
///
/// struct Tagging;
///
/// #[async_trait]
/// impl Interceptor for Tagging {
///     async fn intercept(&self, request: Request, next: Next) -> InterceptorResult {
///         let mut response = next.run(request).await?;
///         response.headers_mut().insert("x-tagged", "1".parse().unwrap());
///         Ok(response)
///     }
/// }
/// ```
#[async_trait]
pub trait Interceptor: Send + Sync + 'static {
    async fn intercept(&self, request: Request, next: Next) -> InterceptorResult;
}
