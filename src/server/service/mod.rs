//! Service layer.
//!
//! Services own the business rules of the consent hub: identity and parameter validation before
//! any store access, cancellation checks between store calls, batched enrichment of consent
//! records and the atomic collection point aggregate write.

pub mod collection_point;
pub mod consent;
pub mod logo;
pub mod pagination;
