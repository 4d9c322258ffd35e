//! Customer resource routes.

use crate::handlers::customer::{
    add, cancel_edit, delete as delete_handler, edit, get_by_id, list, page_index_change, update,
};
use crate::state::AppState;
use axum::routing::{delete, get, post, put};
use axum::Router;

pub fn customer_routes(state: AppState) -> Router {
    Router::new()
        .route("/customer", get(list))
        .route("/customer/get/:id", get(get_by_id))
        .route("/customer/add", post(add))
        .route("/customer/update/:id", put(update))
        .route("/customer/delete/:id", delete(delete_handler))
        .route("/customer/edit/:id", post(edit))
        .route("/customer/cancelEdit", post(cancel_edit))
        .route("/customer/pageIndexChange", post(page_index_change))
        .with_state(state)
}
