//! Excel workbook export for comparison results.

use std::path::Path;

use rust_xlsxwriter::{Workbook, XlsxError};

use mailrecon_engine::error::ReconError;
use mailrecon_engine::model::ComparisonResult;

/// Sheet names, in workbook order.
pub const SUMMARY_SHEET: &str = "Summary";
pub const BOTH_SHEET: &str = "Emails in Both";
pub const SUPPLIERS_ONLY_SHEET: &str = "Only in Suppliers";
pub const USERS_ONLY_SHEET: &str = "Only in Users";

/// Metric labels on the summary sheet, row order fixed.
const SUMMARY_LABELS: [&str; 5] = [
    "Total supplier emails",
    "Total user emails",
    "Emails present in both tables",
    "Emails only in supplier table",
    "Emails only in user table",
];

fn xlsx_err(context: &str, e: XlsxError) -> ReconError {
    ReconError::Write(format!("{context}: {e}"))
}

/// Write the four-sheet comparison workbook to `path`, replacing any
/// existing file. The file is created and flushed entirely within this
/// call; a failure partway through may leave no file or a stale one.
pub fn export(result: &ComparisonResult, path: &Path) -> Result<(), ReconError> {
    let mut workbook = Workbook::new();

    let s = &result.summary;
    let counts = [
        s.total_supplier_emails,
        s.total_user_emails,
        s.emails_in_both_count,
        s.only_in_suppliers_count,
        s.only_in_users_count,
    ];

    let summary = workbook
        .add_worksheet()
        .set_name(SUMMARY_SHEET)
        .map_err(|e| xlsx_err("failed to create summary sheet", e))?;

    summary
        .write_string(0, 0, "Metric")
        .and_then(|ws| ws.write_string(0, 1, "Count"))
        .map_err(|e| xlsx_err("failed to write summary header", e))?;

    for (i, (label, count)) in SUMMARY_LABELS.iter().zip(counts).enumerate() {
        let row = (i + 1) as u32;
        summary
            .write_string(row, 0, *label)
            .and_then(|ws| ws.write_number(row, 1, count as f64))
            .map_err(|e| xlsx_err(&format!("failed to write summary row '{label}'"), e))?;
    }

    write_email_sheet(&mut workbook, BOTH_SHEET, &result.details.emails_in_both)?;
    write_email_sheet(&mut workbook, SUPPLIERS_ONLY_SHEET, &result.details.only_in_suppliers)?;
    write_email_sheet(&mut workbook, USERS_ONLY_SHEET, &result.details.only_in_users)?;

    workbook
        .save(path)
        .map_err(|e| xlsx_err("failed to save workbook", e))?;

    Ok(())
}

/// Single-column detail sheet: "Email" header plus one row per address.
/// Created even when the list is empty so the workbook shape is constant.
fn write_email_sheet(
    workbook: &mut Workbook,
    name: &str,
    emails: &[String],
) -> Result<(), ReconError> {
    let sheet = workbook
        .add_worksheet()
        .set_name(name)
        .map_err(|e| xlsx_err(&format!("failed to create sheet '{name}'"), e))?;

    sheet
        .write_string(0, 0, "Email")
        .map_err(|e| xlsx_err(&format!("failed to write header on '{name}'"), e))?;

    for (i, email) in emails.iter().enumerate() {
        sheet
            .write_string((i + 1) as u32, 0, email.as_str())
            .map_err(|e| xlsx_err(&format!("failed to write row on '{name}'"), e))?;
    }

    Ok(())
}
