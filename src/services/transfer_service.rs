//! Funds transfer invocation.
//!
//! The transfer itself is the `transfer_funds` stored procedure; the debit,
//! credit, and audit logging all happen inside the database, and a single
//! `CALL` statement commits or rolls back as a unit. This module validates
//! the request, issues the call, and translates database errors into
//! [AppError] values the page layer can display.

use crate::{db::DbPool, error::AppError};

/// Validate a transfer request before touching the database.
///
/// # Errors
///
/// - `InvalidRequest` if the amount is not positive
/// - `InvalidRequest` if sender and receiver are the same account
pub fn validate_transfer(
    sender_id: i64,
    receiver_id: i64,
    amount_cents: i64,
) -> Result<(), AppError> {
    if amount_cents <= 0 {
        return Err(AppError::InvalidRequest(
            "transfer amount must be positive".to_string(),
        ));
    }

    if sender_id == receiver_id {
        return Err(AppError::InvalidRequest(
            "sender and receiver must be different accounts".to_string(),
        ));
    }

    Ok(())
}

/// Execute a transfer by calling the `transfer_funds` stored procedure.
///
/// # Errors
///
/// - `InvalidRequest`: the request failed validation
/// - `AccountNotFound`: sender or receiver does not exist
/// - `InsufficientFunds`: the sender's balance does not cover the amount
/// - `Database`: any other database failure
pub async fn execute_transfer(
    pool: &DbPool,
    sender_id: i64,
    receiver_id: i64,
    amount_cents: i64,
) -> Result<(), AppError> {
    validate_transfer(sender_id, receiver_id, amount_cents)?;

    sqlx::query("CALL transfer_funds($1, $2, $3)")
        .bind(sender_id)
        .bind(receiver_id)
        .bind(amount_cents)
        .execute(pool)
        .await
        .map_err(map_transfer_error)?;

    Ok(())
}

/// Translate the SQLSTATE raised inside the procedure into a domain error.
///
/// - `23514` (check_violation): the sender's balance went negative
/// - `P0002` (no_data_found): sender or receiver does not exist
/// - `P0001` (raise_exception): the procedure rejected the input
fn map_transfer_error(error: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_error) = &error {
        match db_error.code().as_deref() {
            Some("23514") => return AppError::InsufficientFunds,
            Some("P0002") => return AppError::AccountNotFound,
            Some("P0001") => return AppError::InvalidRequest(db_error.message().to_string()),
            _ => {}
        }
    }

    AppError::Database(error)
}

#[cfg(test)]
mod validate_transfer_tests {
    use crate::error::AppError;

    use super::validate_transfer;

    #[test]
    fn accepts_a_positive_transfer_between_distinct_accounts() {
        assert!(validate_transfer(1, 2, 500).is_ok());
    }

    #[test]
    fn rejects_zero_amount() {
        let result = validate_transfer(1, 2, 0);

        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[test]
    fn rejects_negative_amount() {
        let result = validate_transfer(1, 2, -100);

        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[test]
    fn rejects_transfer_to_same_account() {
        let result = validate_transfer(7, 7, 500);

        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }
}

#[cfg(test)]
mod map_transfer_error_tests {
    use crate::error::AppError;

    use super::map_transfer_error;

    #[test]
    fn passes_through_non_database_errors() {
        let mapped = map_transfer_error(sqlx::Error::RowNotFound);

        assert!(matches!(mapped, AppError::Database(_)));
    }
}
