pub mod generate;
pub mod routes;
pub mod templates;
