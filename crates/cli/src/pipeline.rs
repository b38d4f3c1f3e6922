//! End-to-end comparison pipeline: read, extract, compare, report.

use std::path::Path;

use mailrecon_engine::{compare_emails, parse_supplier_emails, parse_user_emails, ReconError};

/// Fixed input/output names, resolved against the working directory.
pub const SUPPLIER_FILE: &str = "ARContacts.csv";
pub const USER_FILE: &str = "Susers.csv";
pub const REPORT_FILE: &str = "email_comparison_report.xlsx";

/// Run the full comparison and return the text report. The Excel workbook
/// is written to `report_path` as a side effect.
pub fn run(
    supplier_path: &Path,
    user_path: &Path,
    report_path: &Path,
) -> Result<String, ReconError> {
    let supplier_data = read_source(supplier_path)?;
    let user_data = read_source(user_path)?;

    let supplier_emails = parse_supplier_emails(&supplier_data)?;
    let user_emails = parse_user_emails(&user_data)?;

    let result = compare_emails(&supplier_emails, &user_emails);

    mailrecon_io::xlsx::export(&result, report_path)?;

    Ok(mailrecon_io::text::render(&result.summary))
}

/// Strict UTF-8 read; non-UTF-8 bytes are a `FileRead` error, not
/// transcoded.
fn read_source(path: &Path) -> Result<String, ReconError> {
    std::fs::read_to_string(path)
        .map_err(|e| ReconError::FileRead(format!("cannot read {}: {e}", path.display())))
}
