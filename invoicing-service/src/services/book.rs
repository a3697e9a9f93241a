//! Bookkeeping workflows over the key-value store.
//!
//! Each mutation loads the affected collections, applies the change and saves
//! the whole collection back. Mutations are serialized by a single lock so
//! invoice numbering cannot race inside one process.

use crate::models::{
    Client, CreateClient, CreateInvoice, CreateLineItem, CreatePayment, Invoice, InvoiceStatus,
    LineItem, Payment, UpdateClient, UpdateInvoice,
};
use crate::services::calculations::compute_invoice_totals;
use crate::services::ids::IdGenerator;
use crate::services::metrics::{CLIENTS_TOTAL, INVOICED_AMOUNT_TOTAL, INVOICES_TOTAL};
use crate::services::numbering::next_invoice_number;
use crate::services::storage::{load_records, save_records, Collection, KeyValueStore};
use chrono::Utc;
use service_core::error::AppError;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

pub struct InvoiceBook {
    store: Arc<dyn KeyValueStore>,
    ids: Arc<dyn IdGenerator>,
    write_lock: Mutex<()>,
}

impl InvoiceBook {
    pub fn new(store: Arc<dyn KeyValueStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            ids,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.store.health_check().await
    }

    // -------------------------------------------------------------------------
    // Client Operations
    // -------------------------------------------------------------------------

    pub async fn list_clients(&self) -> Result<Vec<Client>, AppError> {
        load_records(self.store.as_ref(), Collection::Clients).await
    }

    pub async fn get_client(&self, client_id: &str) -> Result<Client, AppError> {
        self.list_clients()
            .await?
            .into_iter()
            .find(|c| c.id == client_id)
            .ok_or_else(|| client_not_found(client_id))
    }

    #[instrument(skip(self, input))]
    pub async fn create_client(&self, input: CreateClient) -> Result<Client, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut clients: Vec<Client> = self.list_clients().await?;

        let client = Client {
            id: self.ids.new_id(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            address: input.address,
            tax_id: input.tax_id,
            created_at: Utc::now(),
        };
        clients.push(client.clone());
        save_records(self.store.as_ref(), Collection::Clients, &clients).await?;

        CLIENTS_TOTAL.with_label_values(&["created"]).inc();
        info!(client_id = %client.id, "Client created");

        Ok(client)
    }

    /// Replace a client's contact fields. Existing invoices keep their snapshot.
    #[instrument(skip(self, input))]
    pub async fn update_client(
        &self,
        client_id: &str,
        input: UpdateClient,
    ) -> Result<Client, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut clients: Vec<Client> = self.list_clients().await?;

        let client = clients
            .iter_mut()
            .find(|c| c.id == client_id)
            .ok_or_else(|| client_not_found(client_id))?;
        client.apply_update(input);
        let updated = client.clone();

        save_records(self.store.as_ref(), Collection::Clients, &clients).await?;

        CLIENTS_TOTAL.with_label_values(&["updated"]).inc();
        info!(client_id = %client_id, "Client updated");

        Ok(updated)
    }

    /// Delete a client. Invoices that reference it are left untouched.
    #[instrument(skip(self))]
    pub async fn delete_client(&self, client_id: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut clients: Vec<Client> = self.list_clients().await?;

        let before = clients.len();
        clients.retain(|c| c.id != client_id);
        if clients.len() == before {
            return Err(client_not_found(client_id));
        }

        save_records(self.store.as_ref(), Collection::Clients, &clients).await?;

        CLIENTS_TOTAL.with_label_values(&["deleted"]).inc();
        info!(client_id = %client_id, "Client deleted");

        Ok(())
    }

    // -------------------------------------------------------------------------
    // Invoice Operations
    // -------------------------------------------------------------------------

    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, AppError> {
        load_records(self.store.as_ref(), Collection::Invoices).await
    }

    pub async fn get_invoice(&self, invoice_id: &str) -> Result<Invoice, AppError> {
        self.list_invoices()
            .await?
            .into_iter()
            .find(|i| i.id == invoice_id)
            .ok_or_else(|| invoice_not_found(invoice_id))
    }

    /// Number the next invoice would receive, without reserving it.
    pub async fn peek_next_number(&self) -> Result<String, AppError> {
        Ok(next_invoice_number(&self.list_invoices().await?))
    }

    /// Create a pending invoice with a fresh sequential number and a client snapshot.
    #[instrument(skip(self, input), fields(client_id = %input.client_id))]
    pub async fn create_invoice(&self, input: CreateInvoice) -> Result<Invoice, AppError> {
        let _guard = self.write_lock.lock().await;

        let client = self.snapshot_client(&input.client_id).await?;
        let items = self.build_items(input.items)?;
        let mut invoices: Vec<Invoice> = self.list_invoices().await?;

        let now = Utc::now();
        let mut invoice = Invoice {
            id: self.ids.new_id(),
            invoice_number: next_invoice_number(&invoices),
            client_id: client.id.clone(),
            client,
            issue_date: input.issue_date,
            due_date: input.due_date,
            items,
            subtotal: 0.0,
            tax_rate: input.tax_rate,
            tax_amount: 0.0,
            total: 0.0,
            status: InvoiceStatus::Pending,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };
        invoice.apply_totals(compute_invoice_totals(&invoice.items, invoice.tax_rate));

        invoices.push(invoice.clone());
        save_records(self.store.as_ref(), Collection::Invoices, &invoices).await?;

        INVOICES_TOTAL.with_label_values(&["created"]).inc();
        if invoice.total.is_finite() && invoice.total > 0.0 {
            INVOICED_AMOUNT_TOTAL.inc_by(invoice.total);
        }
        info!(
            invoice_id = %invoice.id,
            invoice_number = %invoice.invoice_number,
            total = invoice.total,
            "Invoice created"
        );

        Ok(invoice)
    }

    /// Replace an invoice's contents, re-snapshotting the client and recomputing totals.
    #[instrument(skip(self, input))]
    pub async fn update_invoice(
        &self,
        invoice_id: &str,
        input: UpdateInvoice,
    ) -> Result<Invoice, AppError> {
        let _guard = self.write_lock.lock().await;

        let client = self.snapshot_client(&input.client_id).await?;
        let items = self.build_items(input.items)?;
        let mut invoices: Vec<Invoice> = self.list_invoices().await?;

        let invoice = invoices
            .iter_mut()
            .find(|i| i.id == invoice_id)
            .ok_or_else(|| invoice_not_found(invoice_id))?;

        invoice.client_id = client.id.clone();
        invoice.client = client;
        invoice.issue_date = input.issue_date;
        invoice.due_date = input.due_date;
        invoice.items = items;
        invoice.tax_rate = input.tax_rate;
        invoice.notes = input.notes;
        invoice.apply_totals(compute_invoice_totals(&invoice.items, invoice.tax_rate));
        invoice.updated_at = Utc::now();
        let updated = invoice.clone();

        save_records(self.store.as_ref(), Collection::Invoices, &invoices).await?;

        INVOICES_TOTAL.with_label_values(&["updated"]).inc();
        info!(invoice_id = %invoice_id, total = updated.total, "Invoice updated");

        Ok(updated)
    }

    /// Explicitly set the stored status. Any status may follow any other.
    #[instrument(skip(self))]
    pub async fn set_invoice_status(
        &self,
        invoice_id: &str,
        status: InvoiceStatus,
    ) -> Result<Invoice, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut invoices: Vec<Invoice> = self.list_invoices().await?;

        let invoice = invoices
            .iter_mut()
            .find(|i| i.id == invoice_id)
            .ok_or_else(|| invoice_not_found(invoice_id))?;
        let previous = invoice.status;
        invoice.status = status;
        invoice.updated_at = Utc::now();
        let updated = invoice.clone();

        save_records(self.store.as_ref(), Collection::Invoices, &invoices).await?;

        INVOICES_TOTAL.with_label_values(&["status_changed"]).inc();
        info!(
            invoice_id = %invoice_id,
            from = %previous,
            to = %status,
            "Invoice status changed"
        );

        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_invoice(&self, invoice_id: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut invoices: Vec<Invoice> = self.list_invoices().await?;

        let before = invoices.len();
        invoices.retain(|i| i.id != invoice_id);
        if invoices.len() == before {
            return Err(invoice_not_found(invoice_id));
        }

        save_records(self.store.as_ref(), Collection::Invoices, &invoices).await?;

        INVOICES_TOTAL.with_label_values(&["deleted"]).inc();
        info!(invoice_id = %invoice_id, "Invoice deleted");

        Ok(())
    }

    // -------------------------------------------------------------------------
    // Payment Operations
    // -------------------------------------------------------------------------

    pub async fn list_payments(&self) -> Result<Vec<Payment>, AppError> {
        load_records(self.store.as_ref(), Collection::Payments).await
    }

    /// Store a payment. The invoice's status is not changed.
    #[instrument(skip(self, input), fields(invoice_id = %input.invoice_id))]
    pub async fn record_payment(&self, input: CreatePayment) -> Result<Payment, AppError> {
        let _guard = self.write_lock.lock().await;

        let invoices = self.list_invoices().await?;
        if !invoices.iter().any(|i| i.id == input.invoice_id) {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "Invoice {} does not exist",
                input.invoice_id
            )));
        }

        let mut payments = self.list_payments().await?;
        let payment = Payment {
            id: self.ids.new_id(),
            invoice_id: input.invoice_id,
            amount: input.amount,
            payment_date: input.payment_date,
            payment_method: input.payment_method,
            notes: input.notes,
        };
        payments.push(payment.clone());
        save_records(self.store.as_ref(), Collection::Payments, &payments).await?;

        info!(payment_id = %payment.id, amount = payment.amount, "Payment recorded");

        Ok(payment)
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    async fn snapshot_client(&self, client_id: &str) -> Result<Client, AppError> {
        self.get_client(client_id).await.map_err(|e| match e {
            AppError::NotFound(_) => {
                warn!(client_id = %client_id, "Invoice references unknown client");
                AppError::BadRequest(anyhow::anyhow!("Client {} does not exist", client_id))
            }
            other => other,
        })
    }

    fn build_items(&self, inputs: Vec<CreateLineItem>) -> Result<Vec<LineItem>, AppError> {
        if inputs.is_empty() {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "An invoice needs at least one line item"
            )));
        }

        Ok(inputs
            .into_iter()
            .map(|input| {
                let id = input.id.unwrap_or_else(|| self.ids.new_id());
                LineItem::new(id, input.description, input.quantity, input.unit_price)
            })
            .collect())
    }
}

fn client_not_found(client_id: &str) -> AppError {
    AppError::NotFound(anyhow::anyhow!("Client {} not found", client_id))
}

fn invoice_not_found(invoice_id: &str) -> AppError {
    AppError::NotFound(anyhow::anyhow!("Invoice {} not found", invoice_id))
}
