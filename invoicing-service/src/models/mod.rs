//! Domain models for invoicing-service.

mod client;
mod invoice;
mod line_item;
mod payment;
mod report;

pub use client::{Client, CreateClient, UpdateClient};
pub use invoice::{
    start_of_day, CreateInvoice, Invoice, InvoiceStatus, ParseStatusError, UpdateInvoice,
};
pub use line_item::{CreateLineItem, LineItem};
pub use payment::{CreatePayment, Payment};
pub use report::{ClientIncome, ClientIncomeReport, DashboardStats, IncomeTotals, Period};
