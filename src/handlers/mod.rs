//! HTTP request handlers.

pub mod customer;
