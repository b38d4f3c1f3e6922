use std::collections::BTreeSet;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Normalized, deduplicated emails extracted from one source table.
///
/// Normalization is trim + lowercase, so membership is case-insensitive.
/// The ordered set also gives the detail sequences their lexicographic
/// order without a separate sort.
pub type EmailSet = BTreeSet<String>;

// ---------------------------------------------------------------------------
// Comparison output
// ---------------------------------------------------------------------------

/// The five headline counts of a comparison run.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSummary {
    pub total_supplier_emails: usize,
    pub total_user_emails: usize,
    pub emails_in_both_count: usize,
    pub only_in_suppliers_count: usize,
    pub only_in_users_count: usize,
}

/// Sorted email lists, one per bucket. Together they partition the union
/// of both input sets.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonDetails {
    pub emails_in_both: Vec<String>,
    pub only_in_suppliers: Vec<String>,
    pub only_in_users: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub summary: ComparisonSummary,
    pub details: ComparisonDetails,
}
