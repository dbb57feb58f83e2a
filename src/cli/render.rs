//! Plain-text rendering of entities for the menu.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::DATE_FORMAT;
use crate::domain::entities::{Customer, Sale, SaleRecord, Show};

/// Formats an amount with two decimals, rounding halves away from zero.
pub fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// One line of the show listing, with occupancy.
pub fn show_line(show: &Show) -> String {
    format!(
        "ID: {} - {} at {} - {}/{} tickets sold ({:.1}%)",
        show.id,
        show.date.format(DATE_FORMAT),
        show.time_slot,
        show.tickets_sold,
        show.capacity,
        show.occupancy_percent()
    )
}

/// One line of the show picker used by the sale flow.
pub fn available_show_line(show: &Show) -> String {
    format!(
        "ID: {} - {} at {} - Available: {}",
        show.id,
        show.date.format(DATE_FORMAT),
        show.time_slot,
        show.available_count()
    )
}

/// One line of the customer listing.
pub fn customer_line(customer: &Customer) -> String {
    format!(
        "ID: {} - Name: {} - CPF: {} - Email: {} - Phone: {}",
        customer.id, customer.name, customer.national_id, customer.email, customer.phone
    )
}

/// One line of the sale listing.
pub fn sale_line(record: &SaleRecord) -> String {
    format!(
        "ID: {} - {} - {} at {} - {} ticket(s) - Total: {} - Sold: {}",
        record.sale.id,
        record.customer.name,
        record.show.date.format(DATE_FORMAT),
        record.show.time_slot,
        record.sale.quantity,
        format_amount(record.sale.total_price),
        record.sale.sold_at.format("%d/%m/%Y %H:%M")
    )
}

/// Confirmation printed after a successful sale.
pub fn receipt(sale: &Sale) -> String {
    format!(
        "Sale completed! ID: {} - {} ticket(s) - Total: {}",
        sale.id,
        sale.quantity,
        format_amount(sale.total_price)
    )
}
