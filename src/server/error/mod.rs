//! Error types for the consent hub server.
//!
//! This module provides the error handling system with specialized error types for each domain
//! (authentication, configuration, validation, consent data). Every public operation returns the
//! unified [`Error`], which callers classify through [`Error::kind`] and render for end users
//! through [`Error::public_message`] without leaking store internals.

pub mod auth;
pub mod config;
pub mod consent;
pub mod kind;
pub mod validation;

#[cfg(test)]
mod tests;

use thiserror::Error;

use crate::server::error::{
    auth::AuthError, config::ConfigError, consent::ConsentError, validation::ValidationError,
};

/// Main error type for the consent hub server.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (no identity attached to the request)
/// - Validation errors (caller-supplied parameter outside its contract)
/// - Consent data errors (unknown collection point, bad retention period, out of range ids)
/// - Cancellation and internal errors
/// - Database errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing identity).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Caller-supplied parameter failed validation before any store access.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Consent domain error (lookup, retention period, data integrity).
    #[error(transparent)]
    ConsentError(#[from] ConsentError),
    /// Cancellation signal fired before the named step.
    #[error("Operation cancelled before: {0}")]
    Cancelled(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
