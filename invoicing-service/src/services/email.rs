//! Invoice email drafts. Sending is simulated by the HTTP layer; nothing
//! here talks to a mail transport.

use crate::models::Invoice;
use crate::services::format::{format_currency, format_date};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailDraft {
    pub to: String,
    pub subject: String,
    pub message: String,
}

/// Draft addressed to the invoice's client snapshot.
pub fn compose_invoice_email(invoice: &Invoice) -> EmailDraft {
    let client = &invoice.client;

    let concepts = invoice
        .items
        .iter()
        .map(|item| {
            format!(
                "- {}: {} x {} = {}",
                item.description,
                item.quantity,
                format_currency(item.unit_price),
                format_currency(item.total)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let message = format!(
        "Estimado/a {name},\n\n\
         Adjunto encontrará la factura {number} correspondiente a los servicios prestados.\n\n\
         Detalles de la factura:\n\
         - Fecha de emisión: {issued}\n\
         - Fecha de vencimiento: {due}\n\
         - Importe total: {total}\n\
         - Estado: {status}\n\n\
         Conceptos:\n\
         {concepts}\n\n\
         Subtotal: {subtotal}\n\
         IVA ({rate}%): {tax}\n\
         Total: {total}\n\n\
         Quedamos a su disposición para cualquier consulta.\n\n\
         Saludos cordiales.",
        name = client.name,
        number = invoice.invoice_number,
        issued = format_date(&invoice.issue_date),
        due = format_date(&invoice.due_date),
        total = format_currency(invoice.total),
        status = invoice.status.label(),
        concepts = concepts,
        subtotal = format_currency(invoice.subtotal),
        rate = invoice.tax_rate,
        tax = format_currency(invoice.tax_amount),
    );

    EmailDraft {
        to: client.email.clone(),
        subject: format!("Factura {} - {}", invoice.invoice_number, client.name),
        message,
    }
}
