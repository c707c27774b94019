//! The audit trail page: balance changes recorded by the database trigger.

use maud::{Markup, html};

use crate::{
    endpoints,
    models::audit::AuditLogEntry,
    views::layout::{base, format_currency, format_timestamp, nav_bar},
};

/// Render the audit trail page, newest entries first.
pub fn audit_log_view(entries: &[AuditLogEntry]) -> Markup {
    let table_row = |entry: &AuditLogEntry| {
        html! {
            tr
            {
                th scope="row" { (entry.audit_id) }

                td { (entry.account_id) }

                td class="amount" { (format_currency(entry.old_balance_cents)) }

                td class="amount" { (format_currency(entry.new_balance_cents)) }

                td { (entry.changed_by) }

                td { (format_timestamp(entry.changed_at)) }
            }
        }
    };

    let content = html! {
        (nav_bar(endpoints::AUDIT_LOG_VIEW))

        main
        {
            section
            {
                h1 { "Audit Trail" }

                p
                {
                    "Every balance change, recorded by the "
                    code { "trg_audit_account_balance" }
                    " trigger. "
                    a href=(endpoints::AUDIT_LOG_VIEW) { "Refresh" }
                }

                table
                {
                    thead
                    {
                        tr
                        {
                            th scope="col" { "ID" }
                            th scope="col" { "Account" }
                            th scope="col" class="amount" { "Old Balance" }
                            th scope="col" class="amount" { "New Balance" }
                            th scope="col" { "Changed By" }
                            th scope="col" { "Changed At" }
                        }
                    }

                    tbody
                    {
                        @for entry in entries {
                            (table_row(entry))
                        }

                        @if entries.is_empty() {
                            tr
                            {
                                td class="empty" colspan="6" { "No balance changes recorded yet." }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Audit Trail", &content)
}
