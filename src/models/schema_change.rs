//! Schema change event data model.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A row from the `schema_change_log` table.
///
/// Rows are inserted by the `trg_log_schema_changes` and
/// `trg_log_schema_drops` event triggers on DDL commands. The application
/// only reads this table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct SchemaChangeEntry {
    pub event_id: i64,

    /// The command tag, e.g. `CREATE TABLE` or `DROP TABLE`.
    pub event_type: String,

    /// The affected object's identity. Not every DDL command reports one.
    pub object_name: Option<String>,

    /// The database role that ran the command.
    pub executed_by: String,

    pub occurred_at: DateTime<Utc>,
}
