use std::path::Path;

use tempfile::tempdir;

use mailrecon_cli::pipeline;
use mailrecon_engine::ReconError;

const SUPPLIERS: &str = "\
SupplierName,Region,EmailIDs
Acme,NA,Sales@acme.com; support@ACME.com
Borealis,EU,ops@borealis.eu
";

const USERS: &str = "\
UserId,Login,WorkEmail
u_01,jsmith,SALES@acme.com
u_02,kperez,kperez@internal.example
";

fn write_inputs(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let supplier_path = dir.join("ARContacts.csv");
    let user_path = dir.join("Susers.csv");
    std::fs::write(&supplier_path, SUPPLIERS).unwrap();
    std::fs::write(&user_path, USERS).unwrap();
    (supplier_path, user_path)
}

#[test]
fn run_writes_workbook_and_returns_report() {
    let dir = tempdir().unwrap();
    let (supplier_path, user_path) = write_inputs(dir.path());
    let report_path = dir.path().join("email_comparison_report.xlsx");

    let report = pipeline::run(&supplier_path, &user_path, &report_path).unwrap();

    assert!(report.contains("Email Comparison Analysis Report"));
    assert!(report.contains("Total supplier emails: 3"));
    assert!(report.contains("Total user emails: 2"));
    assert!(report.contains("Emails present in both tables: 1"));
    assert!(report.contains("Emails only in supplier table: 2"));
    assert!(report.contains("Emails only in user table: 1"));

    let metadata = std::fs::metadata(&report_path).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn missing_supplier_file_is_a_read_error() {
    let dir = tempdir().unwrap();
    let user_path = dir.path().join("Susers.csv");
    std::fs::write(&user_path, USERS).unwrap();

    let err = pipeline::run(
        &dir.path().join("ARContacts.csv"),
        &user_path,
        &dir.path().join("out.xlsx"),
    )
    .unwrap_err();

    assert!(matches!(err, ReconError::FileRead(_)));
    assert!(err.to_string().contains("ARContacts.csv"));
}

#[test]
fn supplier_without_email_column_fails() {
    let dir = tempdir().unwrap();
    let supplier_path = dir.path().join("ARContacts.csv");
    let user_path = dir.path().join("Susers.csv");
    std::fs::write(&supplier_path, "SupplierName,Region\nAcme,NA\n").unwrap();
    std::fs::write(&user_path, USERS).unwrap();

    let err = pipeline::run(&supplier_path, &user_path, &dir.path().join("out.xlsx"))
        .unwrap_err();

    assert!(matches!(err, ReconError::ColumnNotFound { .. }));
}

#[test]
fn narrow_user_table_fails() {
    let dir = tempdir().unwrap();
    let supplier_path = dir.path().join("ARContacts.csv");
    let user_path = dir.path().join("Susers.csv");
    std::fs::write(&supplier_path, SUPPLIERS).unwrap();
    std::fs::write(&user_path, "UserId,Login\nu_01,jsmith\n").unwrap();

    let err = pipeline::run(&supplier_path, &user_path, &dir.path().join("out.xlsx"))
        .unwrap_err();

    assert!(matches!(err, ReconError::ColumnNotFound { .. }));
    assert!(err.to_string().contains("users"));
}

#[test]
fn no_workbook_is_written_when_extraction_fails() {
    let dir = tempdir().unwrap();
    let supplier_path = dir.path().join("ARContacts.csv");
    let user_path = dir.path().join("Susers.csv");
    std::fs::write(&supplier_path, "SupplierName,Region\nAcme,NA\n").unwrap();
    std::fs::write(&user_path, USERS).unwrap();
    let report_path = dir.path().join("out.xlsx");

    let _ = pipeline::run(&supplier_path, &user_path, &report_path);

    assert!(!report_path.exists());
}
