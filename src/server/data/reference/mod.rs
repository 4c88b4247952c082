//! Reference data repositories: companies, websites and purposes.
//!
//! Lookups take the full id set up front and issue one query per call.

pub mod company;
pub mod purpose;
pub mod website;
