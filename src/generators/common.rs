//! Common utilities for document generation.
//!
//! Shared helpers for execution-date wording and download filenames.

use chrono::{Local, NaiveDate};

/// Today's date in the server's local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Day of month as used in "this 05 day of".
pub fn execution_day(date: NaiveDate) -> String {
    date.format("%d").to_string()
}

/// Month and year as used in "day of March, 2025.".
pub fn execution_month_year(date: NaiveDate) -> String {
    date.format("%B, %Y").to_string()
}

/// Attachment filename for a company's formation document.
pub fn download_filename(company_name: &str) -> String {
    let sanitized = sanitize_filename::sanitize(format!("{}_certificate.pdf", company_name.trim()));
    if sanitized == "_certificate.pdf" {
        "certificate.pdf".to_string()
    } else {
        sanitized
    }
}
