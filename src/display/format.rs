//! Currency and date formatting
//!
//! Pure rendering helpers following the es-DO conventions the app has always
//! used: DOP currency and Spanish long-form dates.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::models::Money;

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Render an amount as DOP currency, e.g. `RD$1,050.00`
pub fn format_price(amount: Money) -> String {
    amount.to_string()
}

/// Render a timestamp in Spanish long form, e.g. `23 de agosto de 2026, 14:05`
pub fn format_date(date: DateTime<Utc>) -> String {
    format!(
        "{} de {} de {}, {:02}:{:02}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year(),
        date.hour(),
        date.minute()
    )
}
