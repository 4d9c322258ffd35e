//! Request-body field rules for the customer payload.
//! All violations are collected so the caller gets the full set at once.

use crate::model::CustomerDto;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Text maxima; the `customer` table DDL uses the same widths.
pub const ADDRESS_MAX: usize = 200;
pub const CITY_MAX: usize = 100;
pub const STATE_MAX: usize = 50;
pub const COMPANY_NAME_MAX: usize = 150;

/// Field name to messages, serialized as `{"field": ["message", ...]}`.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    fn push(&mut self, field: &'static str, message: String) {
        self.0.entry(field).or_default().push(message);
    }
}

/// Validate a customer payload. Text fields are bounded by the column widths
/// and the credit limit must not be negative; absent fields already defaulted
/// during deserialization, so presence is not re-checked here.
pub fn validate(dto: &CustomerDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_length(&mut errors, "address", &dto.address, ADDRESS_MAX);
    check_length(&mut errors, "city", &dto.city, CITY_MAX);
    check_length(&mut errors, "state", &dto.state, STATE_MAX);
    check_length(&mut errors, "companyName", &dto.company_name, COMPANY_NAME_MAX);
    if dto.credit_limit < Decimal::ZERO {
        errors.push("creditLimit", "creditLimit must not be negative".into());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_length(errors: &mut ValidationErrors, field: &'static str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.push(field, format!("{} must be at most {} characters", field, max));
    }
}
