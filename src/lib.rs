//! # crudstamp
//!
//! Five REST routes wired to a controller, either compiled into an axum
//! router or stamped out as route files for other projects.
//!
//! | Verb | Path | Controller method |
//! |---|---|---|
//! | GET | `/` | `list` |
//! | GET | `/{id}` | `show` |
//! | POST | `/` | `create` |
//! | PUT | `/{id}` | `update` |
//! | DELETE | `/{id}` | `remove` |
//!
//! The router never looks inside a request: it picks the controller method
//! and hands the request over as received.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crudstamp::prelude::*;
//! use axum::extract::Request;
//!
//! #[resource(path = "/notes")]
//! pub struct NoteController;
//!
//! #[async_trait]
//! impl ResourceController for NoteController {
//!     async fn list(&self, _request: Request) -> Response {
//!         Json(vec!["first note"]).into_response()
//!     }
//!     async fn show(&self, id: ResourceId, _request: Request) -> Response {
//!         (StatusCode::NOT_FOUND, format!("no note {}", id)).into_response()
//!     }
//!     async fn create(&self, _request: Request) -> Response {
//!         StatusCode::CREATED.into_response()
//!     }
//!     async fn update(&self, _id: ResourceId, _request: Request) -> Response {
//!         StatusCode::NO_CONTENT.into_response()
//!     }
//!     async fn remove(&self, _id: ResourceId, _request: Request) -> Response {
//!         StatusCode::NO_CONTENT.into_response()
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> crudstamp::Result<()> {
//!     let app = mount(Router::new(), Arc::new(NoteController));
//!     crudstamp::lifecycle::serve(app, "127.0.0.1:3000").await
//! }
//! ```
//!
//! Stamping a route file instead:
//!
//! ```
//! use crudstamp::stencil::{ResourceName, Stencil, TemplateKind};
//!
//! let name = ResourceName::new("users").unwrap();
//! let file = Stencil::builtin(TemplateKind::Express).render(&name).unwrap();
//! assert_eq!(file.file_name, "users.js");
//! assert!(file.contents.contains("require('../controllers/users.js')"));
//! ```

pub mod common;
pub mod config;
pub mod controller;
pub mod error;
pub mod interceptor;
pub mod lifecycle;
pub mod router;
pub mod stencil;

// Re-export core types
pub use common::ApiResponse;
pub use config::{ConfigService, StampConfig};
pub use controller::{ResourceController, ResourceId};
pub use error::{Result, StampError};
pub use router::{Action, ROUTES, Resource, RouteSpec, crud_router, mount};
pub use stencil::{PLACEHOLDER, ResourceName, Scaffold, Stencil, TemplateKind, TemplateSource};

// Re-export macros
pub use crudstamp_macro::resource;

// Re-export commonly used types from dependencies
pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use crudstamp::prelude::*;
/// ```
pub mod prelude {
    pub use crate::common::ApiResponse;
    pub use crate::controller::{ResourceController, ResourceId};
    pub use crate::error::{Result, StampError};
    pub use crate::interceptor::{Interceptor, InterceptorLayer, InterceptorResult, LoggingInterceptor, Next};
    pub use crate::lifecycle::shutdown_signal;
    pub use crate::resource;
    pub use crate::router::{Action, Resource, crud_router, mount};
    pub use async_trait::async_trait;
    pub use axum::{
        Json, Router,
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
}
