//! Server application models and type definitions.
//!
//! This module contains the value types exchanged with callers: the authenticated identity,
//! commands and queries with their filters, paginated results, and the enriched views returned
//! by the consent and logo services. Database model aliases live in [`db`].

pub mod auth;
pub mod collection_point;
pub mod consent;
pub mod db;
pub mod logo;
pub mod pagination;
