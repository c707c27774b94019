//! Business-facing services.
//!
//! The only write path in the application lives here. Everything else is a
//! read-only query issued from a handler.

pub mod transfer_service;
