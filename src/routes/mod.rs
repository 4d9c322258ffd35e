//! Router construction.

mod common;
mod customer;

pub use common::common_routes;
pub use customer::customer_routes;
