use async_trait::async_trait;
use axum::{extract::Request, response::Response};
use std::fmt;
use std::ops::Deref;

/// The id segment captured from `/{id}`.
///
/// Holds the segment exactly as routing captured it. It is never parsed, so
/// `"007"` stays `"007"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for ResourceId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A controller serving one CRUD resource.
///
/// Each method receives the request exactly as axum delivered it (headers,
/// URI, extensions and the unread body) and owns every decision about
/// status codes, validation and storage. The router only picks the method.
///
/// # Example
/// ```
/// use crudstamp::prelude::*;
/// use axum::extract::Request;
///
/// struct Greetings;
///
/// #[async_trait]
/// impl ResourceController for Greetings {
///     async fn list(&self, _request: Request) -> Response {
///         "all greetings".into_response()
///     }
///     async fn show(&self, id: ResourceId, _request: Request) -> Response {
///         format!("greeting {}", id).into_response()
///     }
///     async fn create(&self, _request: Request) -> Response {
///         StatusCode::CREATED.into_response()
///     }
///     async fn update(&self, _id: ResourceId, _request: Request) -> Response {
///         StatusCode::NO_CONTENT.into_response()
///     }
///     async fn remove(&self, _id: ResourceId, _request: Request) -> Response {
///         StatusCode::NO_CONTENT.into_response()
///     }
/// }
/// ```
#[async_trait]
pub trait ResourceController: Send + Sync + 'static {
    /// `GET /`
    async fn list(&self, request: Request) -> Response;

    /// `GET /{id}`
    async fn show(&self, id: ResourceId, request: Request) -> Response;

    /// `POST /`
    async fn create(&self, request: Request) -> Response;

    /// `PUT /{id}`
    async fn update(&self, id: ResourceId, request: Request) -> Response;

    /// `DELETE /{id}`
    async fn remove(&self, id: ResourceId, request: Request) -> Response;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_id_keeps_raw_text() {
        let id = ResourceId::new("007");
        assert_eq!(id.as_str(), "007");
        assert_eq!(id.to_string(), "007");
        assert_eq!(&*id, "007");
        assert_eq!(id.into_inner(), "007".to_string());
    }
}
