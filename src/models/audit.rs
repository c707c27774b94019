//! Balance audit trail data model.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A row from the `account_audit_log` table.
///
/// Rows are inserted exclusively by the `trg_audit_account_balance` database
/// trigger whenever an account balance changes. The application only reads
/// this table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct AuditLogEntry {
    pub audit_id: i64,

    /// The account whose balance changed.
    pub account_id: i64,

    pub old_balance_cents: i64,

    pub new_balance_cents: i64,

    /// The database role that performed the change.
    pub changed_by: String,

    pub changed_at: DateTime<Utc>,
}
