use crate::model::{ComparisonDetails, ComparisonResult, ComparisonSummary, EmailSet};

/// Classify two email sets into both / supplier-only / user-only buckets.
///
/// Pure set arithmetic; the detail lists come out sorted because the sets
/// iterate in lexicographic order. Empty inputs are valid and produce an
/// all-zero summary.
pub fn compare_emails(supplier_emails: &EmailSet, user_emails: &EmailSet) -> ComparisonResult {
    let emails_in_both: Vec<String> = supplier_emails
        .intersection(user_emails)
        .cloned()
        .collect();
    let only_in_suppliers: Vec<String> = supplier_emails
        .difference(user_emails)
        .cloned()
        .collect();
    let only_in_users: Vec<String> = user_emails
        .difference(supplier_emails)
        .cloned()
        .collect();

    ComparisonResult {
        summary: ComparisonSummary {
            total_supplier_emails: supplier_emails.len(),
            total_user_emails: user_emails.len(),
            emails_in_both_count: emails_in_both.len(),
            only_in_suppliers_count: only_in_suppliers.len(),
            only_in_users_count: only_in_users.len(),
        },
        details: ComparisonDetails {
            emails_in_both,
            only_in_suppliers,
            only_in_users,
        },
    }
}
