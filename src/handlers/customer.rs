//! Customer endpoint handlers: list, get, add, update, delete, the edit
//! alias, and two no-op endpoints kept from the legacy form UI.

use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::model::CustomerDto;
use crate::state::AppState;
use crate::validation;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerDto>>, ApiError> {
    let customers = state
        .service
        .get_all()
        .await
        .map_err(|e| ApiError::internal("Error retrieving customers", e))?;
    if customers.is_empty() {
        return Err(ApiError::NotFound("No customers found"));
    }
    Ok(Json(customers))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerDto>, ApiError> {
    let customer = state
        .service
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Error retrieving customer", e))?;
    customer
        .map(Json)
        .ok_or(ApiError::NotFound("Customer not found"))
}

pub async fn add(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CustomerDto>,
) -> Result<Json<Value>, ApiError> {
    validation::validate(&dto)?;
    let added = state
        .service
        .add(dto)
        .await
        .map_err(|e| ApiError::internal("Error adding customer", e))?;
    if added {
        Ok(Json(json!({ "message": "Successfully added the record" })))
    } else {
        Err(ApiError::BadRequest("Failed to add the record".into()))
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(mut dto): JsonBody<CustomerDto>,
) -> Result<Json<Value>, ApiError> {
    validation::validate(&dto)?;
    // Path id wins over whatever the body carried.
    dto.customer_id = id;
    let updated = state
        .service
        .update(dto)
        .await
        .map_err(|e| ApiError::internal("Error updating customer", e))?;
    if updated {
        Ok(Json(json!({ "message": "Successfully updated the record" })))
    } else {
        Err(ApiError::NotFound(
            "Customer not found or failed to update the record",
        ))
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state
        .service
        .delete(id)
        .await
        .map_err(|e| ApiError::internal("Error deleting customer", e))?;
    if deleted {
        Ok(Json(json!({ "message": "Successfully deleted the record" })))
    } else {
        Err(ApiError::NotFound(
            "Customer not found or failed to delete record",
        ))
    }
}

/// POST alias of [`update`] with its own messages.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(mut dto): JsonBody<CustomerDto>,
) -> Result<Json<Value>, ApiError> {
    validation::validate(&dto)?;
    dto.customer_id = id;
    let updated = state
        .service
        .update(dto)
        .await
        .map_err(|e| ApiError::internal("Error editing customer", e))?;
    if updated {
        Ok(Json(json!({ "message": "Successfully edited the record" })))
    } else {
        Err(ApiError::NotFound(
            "Customer not found or failed to edit record",
        ))
    }
}

/// No server-side edit state exists; acknowledged for client compatibility.
pub async fn cancel_edit() -> Json<Value> {
    Json(json!({ "message": "Edit cancelled" }))
}

#[derive(Deserialize)]
pub struct PageIndexQuery {
    #[serde(rename = "newIndex")]
    new_index: i32,
}

/// Pagination lives client-side; the index is echoed back unchanged.
pub async fn page_index_change(Query(query): Query<PageIndexQuery>) -> Json<Value> {
    Json(json!({ "message": "Page index changed", "index": query.new_index }))
}
