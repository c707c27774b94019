//! Account data model.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A row from the `accounts` table.
///
/// # Balance Storage
///
/// Balances are stored as `i64` cents, never floats. $10.50 is 1050 cents.
/// The database enforces `balance_cents >= 0` with a CHECK constraint, which
/// is what rejects an overdrawing transfer.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Account {
    pub account_id: i64,

    /// The customer who owns this account. One customer may hold several
    /// accounts.
    pub customer_id: i64,

    /// Either `checking` or `savings` (CHECK constraint).
    pub account_type: String,

    /// Current balance in cents.
    pub balance_cents: i64,

    pub created_at: DateTime<Utc>,

    /// Kept current by the `transfer_funds` procedure.
    pub updated_at: DateTime<Utc>,
}
