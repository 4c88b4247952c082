//! Collection point aggregate repositories.
//!
//! The collection point row and its children (purpose links, custom field configuration and
//! consent page detail) are written together. Pass a transaction as the connection to make the
//! aggregate atomic.

pub mod collection_point;
pub mod custom_field;
pub mod page_detail;
pub mod purpose_link;

pub use collection_point::CollectionPointRepository;
