use crate::error::StampError;
use crate::interceptor::{Interceptor, InterceptorResult, Next};
use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Tower Layer running a chain of interceptors around the inner service.
///
/// Interceptors run in the order they were added; the first one sees the
/// request first and the response last.
#[derive(Clone, Default)]
pub struct InterceptorLayer {
    interceptors: Arc<Vec<Arc<dyn Interceptor>>>,
}

impl InterceptorLayer {
    pub fn new(interceptors: Vec<Arc<dyn Interceptor>>) -> Self {
        Self {
            interceptors: Arc::new(interceptors),
        }
    }

    pub fn with<I: Interceptor>(self, interceptor: I) -> Self {
        let mut interceptors = (*self.interceptors).clone();
        interceptors.push(Arc::new(interceptor));
        Self::new(interceptors)
    }
}

impl<S> Layer<S> for InterceptorLayer {
    type Service = InterceptorService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        InterceptorService {
            inner,
            interceptors: self.interceptors.clone(),
        }
    }
}

#[derive(Clone)]
pub struct InterceptorService<S> {
    inner: S,
    interceptors: Arc<Vec<Arc<dyn Interceptor>>>,
}

impl<S> Service<Request> for InterceptorService<S>
where
    S: Service<Request, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let interceptors = self.interceptors.clone();
        // keep the service that was driven to readiness
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let mut chain = Next::new(move |req| {
                Box::pin(async move {
                    let response = match inner.call(req).await {
                        Ok(response) => response,
                        Err(never) => match never {},
                    };
                    InterceptorResult::Ok(response)
                })
            });

            for interceptor in interceptors.iter().rev() {
                let interceptor = interceptor.clone();
                let next = chain;
                chain = Next::new(move |req| {
                    Box::pin(async move { interceptor.intercept(req, next).await })
                });
            }

            match chain.run(request).await {
                Ok(response) => Ok(response),
                Err(e) => {
                    tracing::error!(error = %e, "Interceptor failed");
                    Ok(StampError::Internal(e.to_string()).into_response())
                }
            }
        })
    }
}
