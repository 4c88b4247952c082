//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate used throughout the server.

/// Tenant company.
pub type CompanyModel = entity::company::Model;

/// Website a collection point is published on.
pub type WebsiteModel = entity::website::Model;

/// Declared processing purpose with its retention period.
pub type PurposeModel = entity::purpose::Model;

/// Consent-capture touchpoint and its identity-key configuration.
pub type CollectionPointModel = entity::collection_point::Model;

/// Link between a collection point and a purpose, carrying display priority.
pub type PurposeLinkModel = entity::collection_point_purpose::Model;

/// Presentation texts and images of a collection point's consent page.
pub type PageDetailModel = entity::consent_page::Model;

/// Recorded consent event.
pub type ConsentModel = entity::consent::Model;

/// Stored upload.
pub type FileModel = entity::file::Model;
