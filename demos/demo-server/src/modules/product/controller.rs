use super::model::{Product, ProductInput};
use super::store::ProductStore;
use axum::extract::{FromRequest, Request};
use crudstamp::common::StatusCode;
use crudstamp::prelude::*;

#[resource(path = "/products")]
pub struct ProductController {
    store: Arc<ProductStore>,
}

impl ProductController {
    pub fn new(store: Arc<ProductStore>) -> Self {
        Self { store }
    }

    async fn read_input(request: Request) -> std::result::Result<ProductInput, Response> {
        let Json(input) = Json::<ProductInput>::from_request(request, &())
            .await
            .map_err(IntoResponse::into_response)?;
        input.validate().map_err(|message| {
            ApiResponse::<()>::error(StatusCode::UnprocessableEntity, message).into_response()
        })?;
        Ok(input)
    }

    fn not_found(id: &ResourceId) -> Response {
        ApiResponse::<()>::error(StatusCode::NotFound, format!("Product not found: {}", id))
            .into_response()
    }
}

#[async_trait]
impl ResourceController for ProductController {
    async fn list(&self, _request: Request) -> Response {
        ApiResponse::success(self.store.list()).into_response()
    }

    async fn show(&self, id: ResourceId, _request: Request) -> Response {
        match self.store.get(&id) {
            Some(product) => ApiResponse::success(product).into_response(),
            None => Self::not_found(&id),
        }
    }

    async fn create(&self, request: Request) -> Response {
        let input = match Self::read_input(request).await {
            Ok(input) => input,
            Err(response) => return response,
        };
        let product = self.store.insert(input);
        tracing::info!(id = %product.id, "Created product");
        ApiResponse::created(product).into_response()
    }

    async fn update(&self, id: ResourceId, request: Request) -> Response {
        let input = match Self::read_input(request).await {
            Ok(input) => input,
            Err(response) => return response,
        };
        match self.store.replace(&id, input) {
            Some(product) => ApiResponse::success(product).into_response(),
            None => Self::not_found(&id),
        }
    }

    async fn remove(&self, id: ResourceId, _request: Request) -> Response {
        match self.store.remove(&id) {
            Some(product) => {
                tracing::info!(id = %product.id, "Removed product");
                ApiResponse::<Product>::success(product).into_response()
            }
            None => Self::not_found(&id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, StatusCode as HttpStatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        let controller = ProductController::new(Arc::new(ProductStore::new()));
        mount(Router::new(), Arc::new(controller))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (HttpStatusCode, Value) {
        let mut builder = axum::http::Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[test]
    fn test_base_path() {
        assert_eq!(ProductController::base_path(), "/products");
    }

    #[tokio::test]
    async fn test_crud_flow() {
        let app = app();

        let (status, created) = send(
            &app,
            Method::POST,
            "/products",
            Some(json!({ "name": "Keyboard", "price": 49.5 })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::CREATED);
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let (status, listed) = send(&app, Method::GET, "/products", None).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(listed["data"].as_array().unwrap().len(), 1);

        let (status, shown) = send(&app, Method::GET, &format!("/products/{}", id), None).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(shown["data"]["name"], "Keyboard");

        let (status, updated) = send(
            &app,
            Method::PUT,
            &format!("/products/{}", id),
            Some(json!({ "name": "Keyboard", "price": 39.0 })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(updated["data"]["price"], 39.0);

        let (status, _) = send(&app, Method::DELETE, &format!("/products/{}", id), None).await;
        assert_eq!(status, HttpStatusCode::OK);

        let (status, missing) = send(&app, Method::GET, &format!("/products/{}", id), None).await;
        assert_eq!(status, HttpStatusCode::NOT_FOUND);
        assert_eq!(missing["error"]["code"], "NotFound");
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected_by_controller() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/products",
            Some(json!({ "name": " ", "price": 3.0 })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UnprocessableEntity");

        let (status, _) = send(&app, Method::POST, "/products", None).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_update_unknown_product() {
        let app = app();
        let (status, _) = send(
            &app,
            Method::PUT,
            "/products/nope",
            Some(json!({ "name": "x", "price": 1.0 })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::NOT_FOUND);
    }
}
