//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main consent-hub crate so fixtures and tests
//! read the same way on both sides.

pub type CompanyModel = entity::company::Model;
pub type WebsiteModel = entity::website::Model;
pub type PurposeModel = entity::purpose::Model;
pub type CustomFieldModel = entity::custom_field::Model;
pub type CollectionPointModel = entity::collection_point::Model;
pub type PurposeLinkModel = entity::collection_point_purpose::Model;
pub type ConsentModel = entity::consent::Model;
pub type FileTypeModel = entity::file_type::Model;
pub type FileModel = entity::file::Model;
