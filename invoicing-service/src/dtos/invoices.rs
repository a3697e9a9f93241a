use crate::config::InvoiceDefaults;
use crate::models::{
    start_of_day, CreateInvoice, CreateLineItem, Invoice, InvoiceStatus, UpdateInvoice,
};
use crate::services::EmailDraft;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRequest {
    /// Present when editing an existing item.
    pub id: Option<String>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "Quantity cannot be negative"))]
    pub quantity: f64,

    #[validate(range(min = 0.0, message = "Unit price cannot be negative"))]
    pub unit_price: f64,
}

/// Body for creating or replacing an invoice.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    #[validate(length(min = 1, message = "Client is required"))]
    pub client_id: String,

    pub issue_date: NaiveDate,

    /// Defaults to the issue date plus the configured payment terms.
    pub due_date: Option<NaiveDate>,

    #[validate(length(min = 1, message = "At least one line item is required"), nested)]
    pub items: Vec<LineItemRequest>,

    #[validate(range(min = 0.0, max = 100.0, message = "Tax rate must be between 0 and 100"))]
    pub tax_rate: Option<f64>,

    pub notes: Option<String>,
}

impl InvoiceRequest {
    pub fn into_create(self, defaults: &InvoiceDefaults) -> CreateInvoice {
        let due_date = self
            .due_date
            .unwrap_or(self.issue_date + Duration::days(defaults.payment_terms_days));

        CreateInvoice {
            client_id: self.client_id,
            issue_date: start_of_day(self.issue_date),
            due_date: start_of_day(due_date),
            items: self
                .items
                .into_iter()
                .map(|item| CreateLineItem {
                    id: item.id,
                    description: item.description,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                })
                .collect(),
            tax_rate: self.tax_rate.unwrap_or(defaults.tax_rate),
            notes: self.notes.filter(|n| !n.is_empty()),
        }
    }

    pub fn into_update(self, defaults: &InvoiceDefaults) -> UpdateInvoice {
        let create = self.into_create(defaults);
        UpdateInvoice {
            client_id: create.client_id,
            issue_date: create.issue_date,
            due_date: create.due_date,
            items: create.items,
            tax_rate: create.tax_rate,
            notes: create.notes,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: InvoiceStatus,
}

/// Stored invoice plus the status reports would use for it right now.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub effective_status: InvoiceStatus,
}

/// Edits to the composed invoice email before it is sent. Omitted fields keep the draft's text.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EmailRequest {
    #[validate(email(message = "Invalid email format"))]
    pub to: Option<String>,

    #[validate(length(min = 1, message = "Subject cannot be empty"))]
    pub subject: Option<String>,

    pub message: Option<String>,
}

impl EmailRequest {
    pub fn apply_to(self, mut draft: EmailDraft) -> EmailDraft {
        if let Some(to) = self.to {
            draft.to = to;
        }
        if let Some(subject) = self.subject {
            draft.subject = subject;
        }
        if let Some(message) = self.message {
            draft.message = message;
        }
        draft
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextNumberResponse {
    pub invoice_number: String,
}
