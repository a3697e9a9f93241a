//! Client model for invoicing-service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer of the freelancer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// NIF/CIF or equivalent tax identifier.
    pub tax_id: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a client.
#[derive(Debug, Clone)]
pub struct CreateClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub tax_id: String,
}

/// Input for updating a client. All contact fields are replaced.
#[derive(Debug, Clone)]
pub struct UpdateClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub tax_id: String,
}

impl Client {
    pub fn apply_update(&mut self, input: UpdateClient) {
        self.name = input.name;
        self.email = input.email;
        self.phone = input.phone;
        self.address = input.address;
        self.tax_id = input.tax_id;
    }
}
