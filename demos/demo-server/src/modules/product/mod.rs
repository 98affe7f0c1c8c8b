pub mod controller;
pub mod model;
pub mod store;

pub use controller::ProductController;
pub use store::ProductStore;
