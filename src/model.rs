//! Customer storage record and its wire-facing DTO.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Storage-side customer record. Column names match the `customer` table;
/// `customer_id` is assigned by the store on insert and immutable after that.
#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Customer {
    pub customer_id: i64,
    pub address: String,
    pub city: String,
    pub state: String,
    pub company_name: String,
    pub intro_date: DateTime<Utc>,
    pub credit_limit: Decimal,
}

/// Wire shape for customer payloads. Text fields and the id default when
/// absent from the body; `creditLimit` accepts a JSON number or decimal
/// string and serializes as a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    #[serde(rename = "customerID", default)]
    pub customer_id: i64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default = "unix_epoch")]
    pub intro_date: DateTime<Utc>,
    #[serde(default)]
    pub credit_limit: Decimal,
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

impl From<Customer> for CustomerDto {
    fn from(c: Customer) -> Self {
        CustomerDto {
            customer_id: c.customer_id,
            address: c.address,
            city: c.city,
            state: c.state,
            company_name: c.company_name,
            intro_date: c.intro_date,
            credit_limit: c.credit_limit,
        }
    }
}

impl From<CustomerDto> for Customer {
    fn from(dto: CustomerDto) -> Self {
        Customer {
            customer_id: dto.customer_id,
            address: dto.address,
            city: dto.city,
            state: dto.state,
            company_name: dto.company_name,
            intro_date: dto.intro_date,
            credit_limit: dto.credit_limit,
        }
    }
}
