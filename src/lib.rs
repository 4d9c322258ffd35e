//! Customer CRUD REST backend: handler → service → repository → store.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod validation;

pub use error::ApiError;
pub use model::{Customer, CustomerDto};
pub use repository::{CustomerRepository, PgCustomerRepository};
pub use routes::{common_routes, customer_routes};
pub use service::CustomerService;
pub use state::AppState;
pub use store::{ensure_customer_table, ensure_database_exists};
