//! Data access layer.
//!
//! Repositories wrap SeaORM queries for one table each and accept any `ConnectionTrait`, so the
//! same repository works on a pooled connection or inside a transaction. The consent module also
//! hosts the query composer used by the consent service.

pub mod collection_point;
pub mod consent;
pub mod file;
pub mod reference;

#[cfg(test)]
mod tests;
