//! Audit trail page handler.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    db::DbPool, error::AppError, handlers::MAX_LOG_ROWS, models::audit::AuditLogEntry, views,
};

/// Render the audit trail page.
///
/// Entries come from `account_audit_log`, which is populated by the
/// `trg_audit_account_balance` trigger; newest first, capped at
/// [MAX_LOG_ROWS](crate::handlers::MAX_LOG_ROWS).
pub async fn audit_log_page(State(pool): State<DbPool>) -> Result<Response, AppError> {
    let entries = sqlx::query_as::<_, AuditLogEntry>(
        r#"
        SELECT audit_id, account_id, old_balance_cents, new_balance_cents, changed_by, changed_at
        FROM account_audit_log
        ORDER BY changed_at DESC, audit_id DESC
        LIMIT $1
        "#,
    )
    .bind(MAX_LOG_ROWS)
    .fetch_all(&pool)
    .await?;

    Ok(views::audit::audit_log_view(&entries).into_response())
}
