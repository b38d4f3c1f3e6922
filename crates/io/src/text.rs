//! Plain-text summary rendering.

use mailrecon_engine::model::ComparisonSummary;

/// Render the fixed-format analysis report. Pure; the caller decides where
/// the string goes.
pub fn render(summary: &ComparisonSummary) -> String {
    format!(
        "\nEmail Comparison Analysis Report\n\
         ==============================\n\
         \n\
         Summary:\n\
         --------\n\
         Total supplier emails: {}\n\
         Total user emails: {}\n\
         Emails present in both tables: {}\n\
         Emails only in supplier table: {}\n\
         Emails only in user table: {}\n",
        summary.total_supplier_emails,
        summary.total_user_emails,
        summary.emails_in_both_count,
        summary.only_in_suppliers_count,
        summary.only_in_users_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_template() {
        let summary = ComparisonSummary {
            total_supplier_emails: 12,
            total_user_emails: 7,
            emails_in_both_count: 5,
            only_in_suppliers_count: 7,
            only_in_users_count: 2,
        };

        let expected = "\nEmail Comparison Analysis Report\n\
                        ==============================\n\
                        \n\
                        Summary:\n\
                        --------\n\
                        Total supplier emails: 12\n\
                        Total user emails: 7\n\
                        Emails present in both tables: 5\n\
                        Emails only in supplier table: 7\n\
                        Emails only in user table: 2\n";
        assert_eq!(render(&summary), expected);
    }

    #[test]
    fn zero_counts_render_as_zero() {
        let summary = ComparisonSummary {
            total_supplier_emails: 0,
            total_user_emails: 0,
            emails_in_both_count: 0,
            only_in_suppliers_count: 0,
            only_in_users_count: 0,
        };

        let report = render(&summary);
        assert!(report.contains("Total supplier emails: 0\n"));
        assert!(report.contains("Emails only in user table: 0\n"));
    }
}
