//! Transfer page handlers.
//!
//! - GET `/` renders the transfer form and the live balances table
//! - POST `/transfer` submits the form and re-renders the page with the
//!   outcome as an alert

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    db::DbPool,
    error::AppError,
    models::account::Account,
    services::transfer_service,
    views::{self, alert::Alert},
};

/// The transfer form fields.
///
/// The amount arrives as the raw form string and is parsed to cents by
/// [parse_amount_cents]; deserializing into a float would lose exactness.
#[derive(Debug, Deserialize)]
pub struct TransferForm {
    pub sender_id: i64,
    pub receiver_id: i64,
    pub amount: String,
}

/// Render the transfer page.
pub async fn transfer_page(State(pool): State<DbPool>) -> Result<Response, AppError> {
    let accounts = list_accounts(&pool).await?;

    Ok(views::transfer::transfer_view(&accounts, None).into_response())
}

/// Handle a transfer submission.
///
/// Business-rule failures (bad amount, unknown account, insufficient funds)
/// re-render the page with an error alert and the matching status code.
/// Unexpected database failures propagate and render the error page.
pub async fn submit_transfer(
    State(pool): State<DbPool>,
    Form(form): Form<TransferForm>,
) -> Result<Response, AppError> {
    let outcome = match parse_amount_cents(&form.amount) {
        Ok(amount_cents) => transfer_service::execute_transfer(
            &pool,
            form.sender_id,
            form.receiver_id,
            amount_cents,
        )
        .await
        .map(|_| amount_cents),
        Err(error) => Err(error),
    };

    let (status, alert) = match outcome {
        Ok(amount_cents) => {
            tracing::info!(
                sender_id = form.sender_id,
                receiver_id = form.receiver_id,
                amount_cents,
                "transfer committed"
            );

            (
                StatusCode::OK,
                Alert::success(
                    "Transfer successful",
                    format!(
                        "Moved {} from account {} to account {}. The transaction was committed.",
                        views::format_currency(amount_cents),
                        form.sender_id,
                        form.receiver_id
                    ),
                ),
            )
        }
        // Only business-rule failures become an alert; anything else is a
        // real fault and renders the error page.
        Err(error @ AppError::Database(_)) => return Err(error),
        Err(error) => {
            tracing::warn!(
                sender_id = form.sender_id,
                receiver_id = form.receiver_id,
                "transfer rejected: {error}"
            );

            (
                error.status_code(),
                Alert::error("Transfer failed", error.to_string()),
            )
        }
    };

    let accounts = list_accounts(&pool).await?;

    Ok((
        status,
        views::transfer::transfer_view(&accounts, Some(&alert)),
    )
        .into_response())
}

/// Fetch all accounts for the balances table, ordered by account id.
async fn list_accounts(pool: &DbPool) -> Result<Vec<Account>, AppError> {
    let accounts = sqlx::query_as::<_, Account>(
        r#"
        SELECT account_id, customer_id, account_type, balance_cents, created_at, updated_at
        FROM accounts
        ORDER BY account_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(accounts)
}

/// Parse a dollar amount like "10", "10.5", or "10.50" into cents.
///
/// Parsing is exact: digits only, at most two decimal places, and the result
/// must be positive.
pub(crate) fn parse_amount_cents(input: &str) -> Result<i64, AppError> {
    let input = input.trim();
    let invalid = || AppError::InvalidRequest(format!("'{input}' is not a valid dollar amount"));

    let (dollars, cents) = match input.split_once('.') {
        Some((dollars, cents)) => (dollars, cents),
        None => (input, ""),
    };

    if dollars.is_empty() && cents.is_empty() {
        return Err(invalid());
    }

    if !dollars.chars().all(|c| c.is_ascii_digit()) || !cents.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    if cents.len() > 2 {
        return Err(AppError::InvalidRequest(format!(
            "'{input}' has more than two decimal places"
        )));
    }

    let dollars: i64 = if dollars.is_empty() {
        0
    } else {
        dollars.parse().map_err(|_| invalid())?
    };

    let cents_value: i64 = match cents.len() {
        0 => 0,
        // A single digit is tenths of a dollar
        1 => cents.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => cents.parse().map_err(|_| invalid())?,
    };

    let amount_cents = dollars
        .checked_mul(100)
        .and_then(|total| total.checked_add(cents_value))
        .ok_or_else(invalid)?;

    if amount_cents == 0 {
        return Err(AppError::InvalidRequest(
            "transfer amount must be positive".to_string(),
        ));
    }

    Ok(amount_cents)
}

#[cfg(test)]
mod parse_amount_cents_tests {
    use crate::error::AppError;

    use super::parse_amount_cents;

    #[test]
    fn parses_whole_dollars() {
        assert_eq!(parse_amount_cents("10").unwrap(), 1000);
    }

    #[test]
    fn parses_one_decimal_place_as_tenths() {
        assert_eq!(parse_amount_cents("10.5").unwrap(), 1050);
    }

    #[test]
    fn parses_two_decimal_places() {
        assert_eq!(parse_amount_cents("10.50").unwrap(), 1050);
        assert_eq!(parse_amount_cents("0.01").unwrap(), 1);
    }

    #[test]
    fn parses_cents_without_leading_zero() {
        assert_eq!(parse_amount_cents(".75").unwrap(), 75);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_amount_cents(" 12.34 ").unwrap(), 1234);
    }

    #[test]
    fn rejects_zero() {
        let result = parse_amount_cents("0");

        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[test]
    fn rejects_negative_amounts() {
        let result = parse_amount_cents("-5");

        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[test]
    fn rejects_more_than_two_decimal_places() {
        let result = parse_amount_cents("1.005");

        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[test]
    fn rejects_non_numeric_input() {
        for input in ["", ".", "ten", "10,00", "1e3"] {
            let result = parse_amount_cents(input);

            assert!(
                matches!(result, Err(AppError::InvalidRequest(_))),
                "input '{input}' should be rejected"
            );
        }
    }

    #[test]
    fn rejects_overflowing_amounts() {
        let result = parse_amount_cents("92233720368547758080");

        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }
}
