//! The transfer page: the funds-transfer form and the live balances table.

use maud::{Markup, html};

use crate::{
    endpoints,
    models::account::Account,
    views::{
        alert::Alert,
        layout::{base, format_currency, nav_bar},
    },
};

/// Render the transfer page.
///
/// `alert` carries the outcome of a form submission; the initial GET passes
/// `None`.
pub fn transfer_view(accounts: &[Account], alert: Option<&Alert>) -> Markup {
    let table_row = |account: &Account| {
        html! {
            tr
            {
                th scope="row" { (account.account_id) }

                td { (account.customer_id) }

                td { (account.account_type) }

                td class="amount" { (format_currency(account.balance_cents)) }
            }
        }
    };

    let content = html! {
        (nav_bar(endpoints::TRANSFER_VIEW))

        main
        {
            section
            {
                h1 { "Transfer Funds" }

                p
                {
                    "Move money between accounts. The transfer is applied "
                    "atomically by the database; both balances change or neither does."
                }

                @if let Some(alert) = alert {
                    (alert.to_html())
                }

                form method="post" action=(endpoints::TRANSFER)
                {
                    div class="field"
                    {
                        label for="sender_id" { "Sender Account ID" }
                        input type="number" name="sender_id" id="sender_id" min="1" step="1" required;
                    }

                    div class="field"
                    {
                        label for="receiver_id" { "Receiver Account ID" }
                        input type="number" name="receiver_id" id="receiver_id" min="1" step="1" required;
                    }

                    div class="field"
                    {
                        label for="amount" { "Amount ($)" }
                        input type="number" name="amount" id="amount" min="0.01" step="0.01" required;
                    }

                    button type="submit" { "Transfer Now" }
                }
            }

            section
            {
                h2 { "Live Account Balances" }

                table
                {
                    thead
                    {
                        tr
                        {
                            th scope="col" { "Account" }
                            th scope="col" { "Customer" }
                            th scope="col" { "Type" }
                            th scope="col" class="amount" { "Balance" }
                        }
                    }

                    tbody
                    {
                        @for account in accounts {
                            (table_row(account))
                        }

                        @if accounts.is_empty() {
                            tr
                            {
                                td class="empty" colspan="4" { "No accounts found." }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Transfer Funds", &content)
}
