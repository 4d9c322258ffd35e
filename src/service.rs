//! DTO translation and repository delegation. No business rules live here;
//! the handler layer owns request validation and HTTP mapping.

use crate::model::{Customer, CustomerDto};
use crate::repository::CustomerRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// All records mapped to DTOs, repository order preserved.
    pub async fn get_all(&self) -> Result<Vec<CustomerDto>, sqlx::Error> {
        let customers = self.repository.get_all().await?;
        Ok(customers.into_iter().map(CustomerDto::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<CustomerDto>, sqlx::Error> {
        Ok(self.repository.find_by_id(id).await?.map(CustomerDto::from))
    }

    /// Insert; the id in the DTO is taken as given (the store assigns the
    /// real one on insert).
    pub async fn add(&self, dto: CustomerDto) -> Result<bool, sqlx::Error> {
        self.repository.add(&Customer::from(dto)).await
    }

    /// Full-record replace. The caller must set `customer_id` before
    /// invoking; the handler does this from the path parameter.
    pub async fn update(&self, dto: CustomerDto) -> Result<bool, sqlx::Error> {
        self.repository.update(&Customer::from(dto)).await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        self.repository.delete(id).await
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        self.repository.ping().await
    }
}
