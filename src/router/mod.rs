//! The five CRUD routes and the axum router that dispatches them.

use crate::controller::{ResourceController, ResourceId};
use axum::{
    Router,
    extract::{Path, Request},
    http::Method,
    routing::{MethodRouter, get},
};
use std::sync::Arc;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Controller method a route delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    List,
    Show,
    Create,
    Update,
    Remove,
}

impl Action {
    pub fn route(self) -> &'static RouteSpec {
        &ROUTES[self as usize]
    }
}

/// One row of the route table.
#[derive(Debug, Clone)]
pub struct RouteSpec {
    pub method: Method,
    pub path: &'static str,
    pub action: Action,
}

impl RouteSpec {
    pub fn takes_id(&self) -> bool {
        self.path.contains("{id}")
    }
}

/// Every route a CRUD router serves, in registration order.
pub static ROUTES: [RouteSpec; 5] = [
    RouteSpec {
        method: Method::GET,
        path: "/",
        action: Action::List,
    },
    RouteSpec {
        method: Method::GET,
        path: "/{id}",
        action: Action::Show,
    },
    RouteSpec {
        method: Method::POST,
        path: "/",
        action: Action::Create,
    },
    RouteSpec {
        method: Method::PUT,
        path: "/{id}",
        action: Action::Update,
    },
    RouteSpec {
        method: Method::DELETE,
        path: "/{id}",
        action: Action::Remove,
    },
];

/// A controller bound to the path it is mounted under.
///
/// Implemented by `#[resource(path = "...")]`.
pub trait Resource: ResourceController {
    fn base_path() -> &'static str;
}

/// Build a router serving [`ROUTES`] against `controller`.
///
/// Handlers pass the request through untouched; the `{id}` capture is handed
/// over as a plain string. `/{id}/` is served like `/{id}`, matching Express'
/// non-strict routing.
pub fn crud_router<C, S>(controller: Arc<C>) -> Router<S>
where
    C: ResourceController,
    S: Clone + Send + Sync + 'static,
{
    register(Router::new(), "", controller)
}

/// Serve `controller`'s routes under [`Resource::base_path`].
///
/// Routes are registered with their full path rather than nested, so the
/// controller sees the request URI as the client sent it. Both `/base` and
/// `/base/` reach `list` and `create`.
pub fn mount<C, S>(router: Router<S>, controller: Arc<C>) -> Router<S>
where
    C: Resource,
    S: Clone + Send + Sync + 'static,
{
    let base = C::base_path().trim_end_matches('/');
    tracing::debug!(base_path = C::base_path(), "Mounting CRUD routes");
    register(router, base, controller)
}

fn register<C, S>(router: Router<S>, base: &str, controller: Arc<C>) -> Router<S>
where
    C: ResourceController,
    S: Clone + Send + Sync + 'static,
{
    let collection = collection_routes(controller.clone());
    let member = member_routes(controller);

    let router = if base.is_empty() {
        router.route(ROUTES[0].path, collection)
    } else {
        router
            .route(base, collection.clone())
            .route(&format!("{}/", base), collection)
    };

    let member_path = format!("{}{}", base, ROUTES[1].path);
    router
        .route(&member_path, member.clone())
        .route(&format!("{}/", member_path), member)
}

fn collection_routes<C, S>(controller: Arc<C>) -> MethodRouter<S>
where
    C: ResourceController,
    S: Clone + Send + Sync + 'static,
{
    get({
        let controller = controller.clone();
        move |request: Request| {
            let controller = controller.clone();
            async move { controller.list(request).await }
        }
    })
    .post({
        let controller = controller.clone();
        move |request: Request| {
            let controller = controller.clone();
            async move { controller.create(request).await }
        }
    })
}

fn member_routes<C, S>(controller: Arc<C>) -> MethodRouter<S>
where
    C: ResourceController,
    S: Clone + Send + Sync + 'static,
{
    get({
        let controller = controller.clone();
        move |Path(id): Path<String>, request: Request| {
            let controller = controller.clone();
            async move { controller.show(ResourceId::from(id), request).await }
        }
    })
    .put({
        let controller = controller.clone();
        move |Path(id): Path<String>, request: Request| {
            let controller = controller.clone();
            async move { controller.update(ResourceId::from(id), request).await }
        }
    })
    .delete({
        let controller = controller.clone();
        move |Path(id): Path<String>, request: Request| {
            let controller = controller.clone();
            async move { controller.remove(ResourceId::from(id), request).await }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{StatusCode, header},
        response::{IntoResponse, Response},
    };
    use std::sync::Mutex;
    use strum::IntoEnumIterator;
    use tower::ServiceExt;

    #[derive(Debug, Clone, PartialEq)]
    struct Call {
        action: Action,
        id: Option<String>,
        method: Method,
        uri: String,
        trace: Option<String>,
        body: String,
    }

    #[derive(Default)]
    struct RecordingController {
        calls: Mutex<Vec<Call>>,
    }

    impl RecordingController {
        async fn record(&self, action: Action, id: Option<ResourceId>, request: Request) -> Response {
            let (parts, body) = request.into_parts();
            let body = to_bytes(body, usize::MAX).await.unwrap();
            let call = Call {
                action,
                id: id.map(ResourceId::into_inner),
                method: parts.method,
                uri: parts.uri.to_string(),
                trace: parts
                    .headers
                    .get("x-trace")
                    .map(|v| v.to_str().unwrap().to_string()),
                body: String::from_utf8(body.to_vec()).unwrap(),
            };
            let reply = format!("{}:{}", action, call.id.clone().unwrap_or_default());
            self.calls.lock().unwrap().push(call);
            (StatusCode::IM_A_TEAPOT, [("x-controller", "recording")], reply).into_response()
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ResourceController for RecordingController {
        async fn list(&self, request: Request) -> Response {
            self.record(Action::List, None, request).await
        }
        async fn show(&self, id: ResourceId, request: Request) -> Response {
            self.record(Action::Show, Some(id), request).await
        }
        async fn create(&self, request: Request) -> Response {
            self.record(Action::Create, None, request).await
        }
        async fn update(&self, id: ResourceId, request: Request) -> Response {
            self.record(Action::Update, Some(id), request).await
        }
        async fn remove(&self, id: ResourceId, request: Request) -> Response {
            self.record(Action::Remove, Some(id), request).await
        }
    }

    fn request(method: Method, uri: &str, body: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .method(method)
            .uri(uri)
            .header("x-trace", "t-1")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_route_table_matches_actions() {
        assert_eq!(ROUTES.len(), 5);
        for action in Action::iter() {
            assert_eq!(action.route().action, action);
        }
        let with_id: Vec<Action> = ROUTES
            .iter()
            .filter(|r| r.takes_id())
            .map(|r| r.action)
            .collect();
        assert_eq!(with_id, vec![Action::Show, Action::Update, Action::Remove]);
    }

    #[test]
    fn test_action_names_match_controller_methods() {
        let names: Vec<String> = Action::iter().map(|a| a.to_string()).collect();
        assert_eq!(names, vec!["list", "show", "create", "update", "remove"]);
        assert_eq!("remove".parse::<Action>().unwrap(), Action::Remove);
    }

    #[tokio::test]
    async fn test_each_route_reaches_one_controller_method() {
        let cases = [
            (Method::GET, "/", Action::List, None),
            (Method::GET, "/42", Action::Show, Some("42")),
            (Method::POST, "/", Action::Create, None),
            (Method::PUT, "/42", Action::Update, Some("42")),
            (Method::DELETE, "/42", Action::Remove, Some("42")),
        ];

        for (method, uri, action, id) in cases {
            let controller = Arc::new(RecordingController::default());
            let app: Router = crud_router(controller.clone());

            let response = app.oneshot(request(method.clone(), uri, "")).await.unwrap();
            assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);

            let calls = controller.calls();
            assert_eq!(calls.len(), 1, "{} {}", method, uri);
            assert_eq!(calls[0].action, action);
            assert_eq!(calls[0].id.as_deref(), id);
        }
    }

    #[tokio::test]
    async fn test_request_is_forwarded_untouched() {
        let controller = Arc::new(RecordingController::default());
        let app: Router = crud_router(controller.clone());

        let response = app
            .oneshot(request(Method::PUT, "/abc-DEF?dry=1", r#"{"name":"x"}"#))
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("x-controller").unwrap(),
            "recording"
        );
        assert_eq!(body_text(response).await, "update:abc-DEF");

        let call = &controller.calls()[0];
        assert_eq!(call.method, Method::PUT);
        assert_eq!(call.uri, "/abc-DEF?dry=1");
        assert_eq!(call.trace.as_deref(), Some("t-1"));
        assert_eq!(call.body, r#"{"name":"x"}"#);
    }

    #[tokio::test]
    async fn test_id_is_not_coerced() {
        for id in ["007", "-1", "1e3", "abc-DEF"] {
            let controller = Arc::new(RecordingController::default());
            let app: Router = crud_router(controller.clone());
            let uri = format!("/{}", id);

            app.oneshot(request(Method::DELETE, &uri, "")).await.unwrap();
            assert_eq!(controller.calls()[0].id.as_deref(), Some(id));
        }
    }

    #[tokio::test]
    async fn test_unknown_verbs_and_paths_are_rejected() {
        let controller = Arc::new(RecordingController::default());
        let app: Router = crud_router(controller.clone());

        let response = app
            .clone()
            .oneshot(request(Method::PATCH, "/1", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = app
            .clone()
            .oneshot(request(Method::DELETE, "/", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = app.oneshot(request(Method::GET, "/1/extra", "")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        assert!(controller.calls().is_empty());
    }

    struct Rooted(RecordingController);

    #[async_trait]
    impl ResourceController for Rooted {
        async fn list(&self, request: Request) -> Response {
            self.0.list(request).await
        }
        async fn show(&self, id: ResourceId, request: Request) -> Response {
            self.0.show(id, request).await
        }
        async fn create(&self, request: Request) -> Response {
            self.0.create(request).await
        }
        async fn update(&self, id: ResourceId, request: Request) -> Response {
            self.0.update(id, request).await
        }
        async fn remove(&self, id: ResourceId, request: Request) -> Response {
            self.0.remove(id, request).await
        }
    }

    impl Resource for Rooted {
        fn base_path() -> &'static str {
            "/"
        }
    }

    #[tokio::test]
    async fn test_trailing_slash_reaches_same_action() {
        let controller = Arc::new(RecordingController::default());
        let app: Router = crud_router(controller.clone());

        let response = app
            .clone()
            .oneshot(request(Method::GET, "/7/", ""))
            .await
            .unwrap();
        assert_eq!(body_text(response).await, "show:7");

        let response = app.oneshot(request(Method::DELETE, "/7/", "")).await.unwrap();
        assert_eq!(body_text(response).await, "remove:7");

        let calls = controller.calls();
        assert_eq!(calls[0].uri, "/7/");
    }

    #[tokio::test]
    async fn test_mount_at_root() {
        let controller = Arc::new(Rooted(RecordingController::default()));
        let app: Router = mount(Router::new(), controller.clone());

        let response = app.oneshot(request(Method::GET, "/9", "")).await.unwrap();
        assert_eq!(body_text(response).await, "show:9");
    }
}
