//! Schema change page handler.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    db::DbPool, error::AppError, handlers::MAX_LOG_ROWS,
    models::schema_change::SchemaChangeEntry, views,
};

/// Render the schema change page.
///
/// Events come from `schema_change_log`, which is populated by the DDL event
/// triggers; newest first, capped at [MAX_LOG_ROWS](crate::handlers::MAX_LOG_ROWS).
pub async fn schema_log_page(State(pool): State<DbPool>) -> Result<Response, AppError> {
    let entries = sqlx::query_as::<_, SchemaChangeEntry>(
        r#"
        SELECT event_id, event_type, object_name, executed_by, occurred_at
        FROM schema_change_log
        ORDER BY occurred_at DESC, event_id DESC
        LIMIT $1
        "#,
    )
    .bind(MAX_LOG_ROWS)
    .fetch_all(&pool)
    .await?;

    Ok(views::schema_log::schema_log_view(&entries).into_response())
}
