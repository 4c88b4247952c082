//! Test fixture modules for database record creation.
//!
//! - `factory` - In-memory models with standard test values, no database required
//! - `reference` - Companies, websites, purposes, custom fields and files
//! - `collection_point` - Collection points and their purpose links
//! - `consent` - Consent records

pub mod collection_point;
pub mod consent;
pub mod factory;
pub mod reference;
