use crudstamp::prelude::*;
use crudstamp::{StampConfig, lifecycle};
use tracing_subscriber::EnvFilter;

mod modules;

use modules::product::{ProductController, ProductStore};

#[tokio::main]
async fn main() -> crudstamp::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting demo server...");

    let config = StampConfig::from_env()?;
    let products = Arc::new(ProductController::new(Arc::new(ProductStore::new())));

    let router = mount(Router::new(), products).layer(InterceptorLayer::default().with(LoggingInterceptor));

    lifecycle::serve(router, &config.addr()).await
}
