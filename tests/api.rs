//! End-to-end tests over the router and service, backed by an in-memory
//! repository so no database is required.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use customer_api::{
    common_routes, customer_routes, AppState, Customer, CustomerDto, CustomerRepository,
    CustomerService,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct MemoryRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: Vec<Customer>,
    next_id: i64,
}

#[async_trait]
impl CustomerRepository for MemoryRepository {
    async fn get_all(&self) -> Result<Vec<Customer>, sqlx::Error> {
        Ok(self.inner.lock().unwrap().rows.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, sqlx::Error> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.iter().find(|c| c.customer_id == id).cloned())
    }

    async fn add(&self, customer: &Customer) -> Result<bool, sqlx::Error> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let mut row = customer.clone();
        row.customer_id = inner.next_id;
        inner.rows.push(row);
        Ok(true)
    }

    async fn update(&self, customer: &Customer) -> Result<bool, sqlx::Error> {
        let mut inner = self.inner.lock().unwrap();
        match inner
            .rows
            .iter_mut()
            .find(|c| c.customer_id == customer.customer_id)
        {
            Some(row) => {
                *row = customer.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.rows.len();
        inner.rows.retain(|c| c.customer_id != id);
        Ok(inner.rows.len() < before)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

fn service() -> CustomerService {
    CustomerService::new(Arc::new(MemoryRepository::default()))
}

fn app() -> Router {
    let state = AppState { service: service() };
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(customer_routes(state))
}

fn sample_dto() -> CustomerDto {
    CustomerDto {
        customer_id: 0,
        address: "1 Main St".into(),
        city: "Springfield".into(),
        state: "IL".into(),
        company_name: "Acme".into(),
        intro_date: "2024-01-01T00:00:00Z".parse().unwrap(),
        credit_limit: "1000.00".parse().unwrap(),
    }
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// Service-level properties.

#[tokio::test]
async fn absent_id_is_none_and_mutations_report_failure() {
    let svc = service();
    assert!(svc.find_by_id(42).await.unwrap().is_none());

    let mut dto = sample_dto();
    dto.customer_id = 42;
    assert!(!svc.update(dto).await.unwrap());
    assert!(!svc.delete(42).await.unwrap());
}

#[tokio::test]
async fn added_record_appears_in_get_all() {
    let svc = service();
    assert!(svc.add(sample_dto()).await.unwrap());
    let all = svc.get_all().await.unwrap();
    assert!(all
        .iter()
        .any(|c| c.address == "1 Main St" && c.company_name == "Acme"));
}

#[tokio::test]
async fn update_replaces_every_field_but_the_id() {
    let svc = service();
    svc.add(sample_dto()).await.unwrap();
    let id = svc.get_all().await.unwrap()[0].customer_id;

    let mut replacement = sample_dto();
    replacement.customer_id = id;
    replacement.city = "Shelbyville".into();
    replacement.credit_limit = "250.50".parse().unwrap();
    assert!(svc.update(replacement.clone()).await.unwrap());

    let found = svc.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found, replacement);
    assert_eq!(found.customer_id, id);
}

#[tokio::test]
async fn delete_is_idempotently_gone() {
    let svc = service();
    svc.add(sample_dto()).await.unwrap();
    let id = svc.get_all().await.unwrap()[0].customer_id;

    assert!(svc.delete(id).await.unwrap());
    assert!(svc.find_by_id(id).await.unwrap().is_none());
    assert!(!svc.delete(id).await.unwrap());
}

// HTTP scenarios.

#[tokio::test]
async fn empty_store_lists_as_not_found() {
    let (status, body) = send(&app(), "GET", "/customer", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No customers found" }));
}

#[tokio::test]
async fn add_then_get_returns_the_record_with_assigned_id() {
    let app = app();
    let payload = json!({
        "address": "1 Main St",
        "city": "Springfield",
        "state": "IL",
        "companyName": "Acme",
        "introDate": "2024-01-01T00:00:00Z",
        "creditLimit": 1000.00
    });
    let (status, body) = send(&app, "POST", "/customer/add", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Successfully added the record" }));

    let (status, body) = send(&app, "GET", "/customer", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<CustomerDto> = serde_json::from_value(body).unwrap();
    assert_eq!(listed.len(), 1);
    let id = listed[0].customer_id;
    assert_ne!(id, 0);

    let (status, body) = send(&app, "GET", &format!("/customer/get/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: CustomerDto = serde_json::from_value(body).unwrap();
    assert_eq!(fetched.address, "1 Main St");
    assert_eq!(fetched.company_name, "Acme");
    assert_eq!(fetched.credit_limit, "1000.00".parse::<Decimal>().unwrap());
}

#[tokio::test]
async fn update_of_missing_id_is_not_found() {
    let payload = serde_json::to_value(sample_dto()).unwrap();
    let (status, body) = send(&app(), "PUT", "/customer/update/999", Some(payload)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "message": "Customer not found or failed to update the record" })
    );
}

#[tokio::test]
async fn path_id_overrides_body_id_on_update() {
    let app = app();
    send(
        &app,
        "POST",
        "/customer/add",
        Some(serde_json::to_value(sample_dto()).unwrap()),
    )
    .await;

    let mut replacement = sample_dto();
    replacement.customer_id = 555; // ignored; the path parameter wins
    replacement.city = "Shelbyville".into();
    let (status, _) = send(
        &app,
        "PUT",
        "/customer/update/1",
        Some(serde_json::to_value(replacement).unwrap()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", "/customer/get/555", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, body) = send(&app, "GET", "/customer/get/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "Shelbyville");
}

#[tokio::test]
async fn delete_then_redelete_is_not_found() {
    let app = app();
    send(
        &app,
        "POST",
        "/customer/add",
        Some(serde_json::to_value(sample_dto()).unwrap()),
    )
    .await;

    let (status, body) = send(&app, "DELETE", "/customer/delete/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Successfully deleted the record" }));

    let (status, _) = send(&app, "GET", "/customer/get/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "DELETE", "/customer/delete/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "message": "Customer not found or failed to delete record" })
    );
}

#[tokio::test]
async fn edit_alias_updates_with_its_own_messages() {
    let app = app();
    send(
        &app,
        "POST",
        "/customer/add",
        Some(serde_json::to_value(sample_dto()).unwrap()),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        "/customer/edit/1",
        Some(serde_json::to_value(sample_dto()).unwrap()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Successfully edited the record" }));

    let (status, body) = send(
        &app,
        "POST",
        "/customer/edit/999",
        Some(serde_json::to_value(sample_dto()).unwrap()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "message": "Customer not found or failed to edit record" })
    );
}

#[tokio::test]
async fn validation_failures_list_every_bad_field() {
    let payload = json!({
        "address": "x".repeat(201),
        "city": "Springfield",
        "state": "IL",
        "companyName": "Acme",
        "introDate": "2024-01-01T00:00:00Z",
        "creditLimit": "-5"
    });
    let (status, body) = send(&app(), "POST", "/customer/add", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_object().unwrap();
    assert!(errors.contains_key("address"));
    assert!(errors.contains_key("creditLimit"));
    assert!(!errors.contains_key("city"));
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/customer/add")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn legacy_no_op_endpoints_acknowledge() {
    let app = app();
    let (status, body) = send(&app, "POST", "/customer/cancelEdit", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Edit cancelled" }));

    let (status, body) = send(&app, "POST", "/customer/pageIndexChange?newIndex=3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Page index changed", "index": 3 }));
}

#[tokio::test]
async fn health_and_readiness_report_ok() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");
}
