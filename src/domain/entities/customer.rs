//! Customer entity representing a registered ticket buyer.

use serde::Serialize;

/// A registered customer.
///
/// Customers are created once by the store and never mutated or deleted.
/// The `national_id` (CPF) is the natural deduplication key; its format is
/// not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
}

impl Customer {
    /// Creates a new Customer instance.
    pub fn new(id: i64, new_customer: NewCustomer) -> Self {
        Self {
            id,
            name: new_customer.name,
            email: new_customer.email,
            phone: new_customer.phone,
            national_id: new_customer.national_id,
        }
    }
}

/// Input data for registering a new customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
}

impl NewCustomer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        national_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            national_id: national_id.into(),
        }
    }
}
