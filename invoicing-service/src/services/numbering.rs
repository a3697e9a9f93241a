//! Sequential invoice numbers of the form `F-000123`.
//!
//! The next number is derived by scanning every existing invoice, so two
//! concurrent load/compute/save sequences could pick the same value. Callers
//! serialize invoice creation (see `InvoiceBook`).

use crate::models::Invoice;
use once_cell::sync::Lazy;
use regex::Regex;

pub const INVOICE_NUMBER_PREFIX: &str = "F-";

static INVOICE_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"F-([0-9]+)").expect("invoice number pattern is valid"));

/// Numeric suffix of an invoice number, or `None` when it does not match `F-<digits>`.
///
/// Suffixes too large for `u64` saturate so they still rank above every other number.
pub fn parse_sequence(invoice_number: &str) -> Option<u64> {
    let digits = INVOICE_NUMBER_PATTERN
        .captures(invoice_number)
        .and_then(|caps| caps.get(1))?
        .as_str();
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

pub fn format_invoice_number(sequence: u64) -> String {
    format!("{}{:06}", INVOICE_NUMBER_PREFIX, sequence)
}

/// Highest existing suffix plus one. Non-matching numbers count as zero.
pub fn next_invoice_number(invoices: &[Invoice]) -> String {
    let max = invoices
        .iter()
        .filter_map(|invoice| parse_sequence(&invoice.invoice_number))
        .max()
        .unwrap_or(0);

    format_invoice_number(max.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::invoice_numbered;

    #[test]
    fn first_invoice_is_one() {
        assert_eq!(next_invoice_number(&[]), "F-000001");
    }

    #[test]
    fn takes_max_plus_one_regardless_of_order() {
        let invoices = vec![invoice_numbered("F-000003"), invoice_numbered("F-000001")];
        assert_eq!(next_invoice_number(&invoices), "F-000004");
    }

    #[test]
    fn ignores_numbers_outside_the_pattern() {
        let invoices = vec![
            invoice_numbered("INV-2024-77"),
            invoice_numbered(""),
            invoice_numbered("F-000002"),
        ];
        assert_eq!(next_invoice_number(&invoices), "F-000003");
    }

    #[test]
    fn only_foreign_numbers_start_at_one() {
        let invoices = vec![invoice_numbered("draft")];
        assert_eq!(next_invoice_number(&invoices), "F-000001");
    }

    #[test]
    fn grows_past_six_digits() {
        let invoices = vec![invoice_numbered("F-999999")];
        assert_eq!(next_invoice_number(&invoices), "F-1000000");
    }

    #[test]
    fn oversized_suffix_still_counts() {
        let huge = format!("F-{}", "9".repeat(25));
        assert_eq!(parse_sequence(&huge), Some(u64::MAX));

        let invoices = vec![invoice_numbered("F-000010"), invoice_numbered(&huge)];
        assert_eq!(
            next_invoice_number(&invoices),
            format_invoice_number(u64::MAX)
        );
    }

    #[test]
    fn parses_suffix() {
        assert_eq!(parse_sequence("F-000042"), Some(42));
        assert_eq!(parse_sequence("F-"), None);
        assert_eq!(parse_sequence("X-12"), None);
    }
}
