use crate::error::ReconError;
use crate::model::EmailSet;

/// Header fragment marking the supplier email column. Case-sensitive, and
/// deliberately a fragment: real exports vary between "EmailID",
/// "EmailIDs", "Contact EmailID".
pub const SUPPLIER_EMAIL_HEADER: &str = "EmailI";

/// Zero-based position of the email column in the user table. Header names
/// vary between exports; the position does not.
pub const USER_EMAIL_COLUMN: usize = 2;

/// First header containing [`SUPPLIER_EMAIL_HEADER`] as a substring.
pub fn find_email_column(headers: &[String]) -> Option<usize> {
    headers.iter().position(|h| h.contains(SUPPLIER_EMAIL_HEADER))
}

/// Trim + lowercase. Returns `None` unless the result is non-empty and
/// contains `@`; anything else (blank cell, "n/a", a stray name) is not an
/// email. No further validation; any `@`-bearing string is accepted.
pub fn normalize_email(raw: &str) -> Option<String> {
    let cleaned = raw.trim().to_lowercase();
    if !cleaned.is_empty() && cleaned.contains('@') {
        Some(cleaned)
    } else {
        None
    }
}

/// Extract the unique emails from supplier CSV text.
///
/// The email column is located by header name; a cell may carry several
/// addresses separated by `;`. Malformed rows are skipped, not fatal.
pub fn parse_supplier_emails(csv_data: &str) -> Result<EmailSet, ReconError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ReconError::FileRead(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let email_idx = find_email_column(&headers).ok_or_else(|| ReconError::ColumnNotFound {
        table: "suppliers".into(),
        detail: format!("no header contains '{SUPPLIER_EMAIL_HEADER}'"),
    })?;

    let mut emails = EmailSet::new();
    for record in reader.records() {
        let Ok(record) = record else { continue };
        // Short rows have no email cell; treat like an empty cell
        let cell = record.get(email_idx).unwrap_or("");
        for candidate in cell.split(';') {
            if let Some(email) = normalize_email(candidate) {
                emails.insert(email);
            }
        }
    }

    Ok(emails)
}

/// Extract the unique emails from user CSV text.
///
/// Emails live at a fixed column position ([`USER_EMAIL_COLUMN`]), one per
/// row, with no splitting. Malformed rows are skipped, not fatal.
pub fn parse_user_emails(csv_data: &str) -> Result<EmailSet, ReconError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ReconError::FileRead(e.to_string()))?;

    if headers.len() <= USER_EMAIL_COLUMN {
        return Err(ReconError::ColumnNotFound {
            table: "users".into(),
            detail: format!(
                "{} column(s), need at least {}",
                headers.len(),
                USER_EMAIL_COLUMN + 1
            ),
        });
    }

    let mut emails = EmailSet::new();
    for record in reader.records() {
        let Ok(record) = record else { continue };
        let cell = record.get(USER_EMAIL_COLUMN).unwrap_or("");
        if let Some(email) = normalize_email(cell) {
            emails.insert(email);
        }
    }

    Ok(emails)
}
