//! `mailrecon-engine` — Supplier/user email reconciliation engine.
//!
//! Pure engine crate: receives raw CSV text, returns extracted email sets
//! and classified comparison results. No CLI or file-output dependencies.

pub mod compare;
pub mod error;
pub mod extract;
pub mod model;

pub use compare::compare_emails;
pub use error::ReconError;
pub use extract::{parse_supplier_emails, parse_user_emails};
pub use model::{ComparisonResult, EmailSet};
