use proc_macro::TokenStream;

mod resource;

/// Attribute macro binding a controller to the path its CRUD routes are
/// mounted under.
///
/// Implements `crudstamp::Resource` for the annotated type. The type must
/// also implement `crudstamp::ResourceController`.
///
/// # Example
/// ```ignore
/// use crudstamp::prelude::*;
///
/// #[resource(path = "/products")]
/// pub struct ProductController {
///     store: Arc<ProductStore>,
/// }
///
/// let app = mount(Router::new(), Arc::new(controller));
/// ```
#[proc_macro_attribute]
pub fn resource(attr: TokenStream, item: TokenStream) -> TokenStream {
    resource::resource_attribute(attr, item)
}
