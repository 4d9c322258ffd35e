//! Data access over the `customer` table.

use crate::model::Customer;
use async_trait::async_trait;
use sqlx::PgPool;

/// Seam between the service and the store. Absence is reported as
/// `Option`/`bool`, never as an error; every method commits independently at
/// single-row granularity.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Every row, ordered by id. Empty vec if none.
    async fn get_all(&self) -> Result<Vec<Customer>, sqlx::Error>;

    /// Single-row lookup by primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, sqlx::Error>;

    /// Insert a new row; the store assigns the id. True iff a row was affected.
    async fn add(&self, customer: &Customer) -> Result<bool, sqlx::Error>;

    /// Full replace of the row matching `customer.customer_id`. A missing id
    /// naturally affects zero rows and yields false.
    async fn update(&self, customer: &Customer) -> Result<bool, sqlx::Error>;

    /// Look up first; absent returns false without attempting deletion.
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;

    /// Connectivity probe for the readiness route.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// PostgreSQL-backed repository over a shared pool.
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str = "customer_id, address, city, state, company_name, intro_date, credit_limit";

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn get_all(&self) -> Result<Vec<Customer>, sqlx::Error> {
        let sql = format!("SELECT {} FROM customer ORDER BY customer_id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Customer>(&sql).fetch_all(&self.pool).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, sqlx::Error> {
        let sql = format!("SELECT {} FROM customer WHERE customer_id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn add(&self, customer: &Customer) -> Result<bool, sqlx::Error> {
        const SQL: &str = "INSERT INTO customer \
            (address, city, state, company_name, intro_date, credit_limit) \
            VALUES ($1, $2, $3, $4, $5, $6)";
        tracing::debug!(sql = SQL, "query");
        let result = sqlx::query(SQL)
            .bind(&customer.address)
            .bind(&customer.city)
            .bind(&customer.state)
            .bind(&customer.company_name)
            .bind(customer.intro_date)
            .bind(customer.credit_limit)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn update(&self, customer: &Customer) -> Result<bool, sqlx::Error> {
        const SQL: &str = "UPDATE customer SET \
            address = $2, city = $3, state = $4, company_name = $5, \
            intro_date = $6, credit_limit = $7 \
            WHERE customer_id = $1";
        tracing::debug!(sql = SQL, id = customer.customer_id, "query");
        let result = sqlx::query(SQL)
            .bind(customer.customer_id)
            .bind(&customer.address)
            .bind(&customer.city)
            .bind(&customer.state)
            .bind(&customer.company_name)
            .bind(customer.intro_date)
            .bind(customer.credit_limit)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(false);
        }
        const SQL: &str = "DELETE FROM customer WHERE customer_id = $1";
        tracing::debug!(sql = SQL, id, "query");
        let result = sqlx::query(SQL).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
