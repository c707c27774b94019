//! HTTP request handlers.
//!
//! Each handler extracts request data, runs its query or delegates to a
//! service, and renders a page. Read-only queries live directly in the
//! handlers; only the transfer goes through the service layer.

/// Audit trail page
pub mod audit;
/// JSON health check
pub mod health;
/// Schema change page
pub mod schema_log;
/// Transfer form page and submission
pub mod transfer;

/// Newest-first row cap for the log pages.
pub(crate) const MAX_LOG_ROWS: i64 = 200;
