pub mod clients;
pub mod invoices;
pub mod payments;
pub mod reports;

pub use clients::ClientRequest;
pub use invoices::{
    EmailRequest, InvoiceRequest, InvoiceResponse, LineItemRequest, NextNumberResponse,
    StatusRequest,
};
pub use payments::PaymentRequest;
pub use reports::{IncomeQuery, IncomeReportResponse};
