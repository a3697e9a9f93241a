use crate::models::{start_of_day, CreatePayment};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[validate(length(min = 1, message = "Invoice is required"))]
    pub invoice_id: String,

    #[validate(range(min = 0.0, message = "Amount cannot be negative"))]
    pub amount: f64,

    pub payment_date: NaiveDate,

    #[validate(length(min = 1, message = "Payment method is required"))]
    pub payment_method: String,

    pub notes: Option<String>,
}

impl From<PaymentRequest> for CreatePayment {
    fn from(req: PaymentRequest) -> Self {
        CreatePayment {
            invoice_id: req.invoice_id,
            amount: req.amount,
            payment_date: start_of_day(req.payment_date),
            payment_method: req.payment_method,
            notes: req.notes,
        }
    }
}
