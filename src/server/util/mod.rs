//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers shared by services and repositories: retention period
//! arithmetic for purpose expiration, cooperative cancellation between store calls, and checked
//! numeric narrowing for values read from the database.

pub mod cancel;
pub mod convert;
pub mod expiration;

#[cfg(test)]
mod tests;
