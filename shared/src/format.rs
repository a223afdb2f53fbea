use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::BillStatus;

/// A bill date that cannot be rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid bill date: {0:?}")]
pub struct DateFormatError(pub String);

/// French short month names, truncated to three characters and capitalized
const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Format a YYYY-MM-DD date as shown in the bills table, e.g. "4 Avr. 04"
pub fn format_date(date_str: &str) -> Result<String, DateFormatError> {
    let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| DateFormatError(date_str.to_string()))?;

    let month = MONTHS[date.month0() as usize];
    let year = date.year().rem_euclid(100);
    Ok(format!("{} {}. {:02}", date.day(), month, year))
}

/// Display label of a status code. Unknown codes are returned unchanged.
pub fn format_status(status: &BillStatus) -> String {
    match status {
        BillStatus::Pending => "En attente".to_string(),
        BillStatus::Accepted => "Accepté".to_string(),
        BillStatus::Refused => "Refusé".to_string(),
        BillStatus::Other(code) => code.clone(),
    }
}
