use crate::models::{CreateClient, UpdateClient};
use serde::Deserialize;
use validator::Validate;

/// Body for creating or replacing a client. Every field is required.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    #[validate(length(min = 1, message = "Tax id is required"))]
    pub tax_id: String,
}

impl From<ClientRequest> for CreateClient {
    fn from(req: ClientRequest) -> Self {
        CreateClient {
            name: req.name,
            email: req.email,
            phone: req.phone,
            address: req.address,
            tax_id: req.tax_id,
        }
    }
}

impl From<ClientRequest> for UpdateClient {
    fn from(req: ClientRequest) -> Self {
        UpdateClient {
            name: req.name,
            email: req.email,
            phone: req.phone,
            address: req.address,
            tax_id: req.tax_id,
        }
    }
}
