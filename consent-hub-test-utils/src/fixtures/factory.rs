//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating database models with standard test values. These are
//! in-memory model instances that don't require database interaction, suitable for unit tests
//! and for seeding SeaORM's mock database.

use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::RecordStatus;

use crate::model::{
    CollectionPointModel, CompanyModel, ConsentModel, PurposeLinkModel, PurposeModel,
    WebsiteModel,
};

/// Fixed timestamp used for every mock record, `2024-01-01T00:00:00`.
pub fn mock_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("2024-01-01T00:00:00 is a valid timestamp")
}

/// Create a mock active company model.
pub fn mock_company_model(id: i32, name: &str) -> CompanyModel {
    CompanyModel {
        id,
        name: name.to_string(),
        status: RecordStatus::Active,
    }
}

/// Create a mock active website model owned by `company_id`.
pub fn mock_website_model(id: i32, company_id: i32) -> WebsiteModel {
    WebsiteModel {
        id,
        company_id,
        description: format!("Website {}", id),
        url: format!("https://site-{}.example.com", id),
        url_policy: Some(format!("https://site-{}.example.com/privacy", id)),
        status: RecordStatus::Active,
    }
}

/// Create a mock active purpose model with a "30 days" retention period.
pub fn mock_purpose_model(id: i32, company_id: i32, code: &str) -> PurposeModel {
    PurposeModel {
        id,
        guid: format!("00000000-0000-0000-0000-{:012}", id),
        company_id,
        code: code.to_string(),
        description: format!("Purpose {}", code),
        warning_description: None,
        purpose_category_id: 1,
        expiration_period: "30 days".to_string(),
        status: RecordStatus::Active,
        version: 1,
        created_at: mock_timestamp(),
        updated_at: mock_timestamp(),
    }
}

/// Create a mock active collection point model with no identity keys configured.
pub fn mock_collection_point_model(
    id: i32,
    company_id: i32,
    website_id: i32,
) -> CollectionPointModel {
    CollectionPointModel {
        id,
        guid: format!("cp-{}", id),
        company_id,
        website_id,
        name: format!("Collection point {}", id),
        language: "en-US".to_string(),
        expiration_period: "1 year".to_string(),
        status: RecordStatus::Active,
        version: 1,
        uid_primary: false,
        uid_required: false,
        id_card_number_primary: false,
        id_card_number_required: false,
        email_primary: false,
        email_required: false,
        full_name_primary: false,
        full_name_required: false,
        phone_number_primary: false,
        phone_number_required: false,
        created_by: 1,
        created_at: mock_timestamp(),
        updated_by: 1,
        updated_at: mock_timestamp(),
    }
}

/// Create a mock active purpose link model.
pub fn mock_purpose_link_model(
    id: i32,
    collection_point_id: i32,
    purpose_id: i32,
    priority: i32,
) -> PurposeLinkModel {
    PurposeLinkModel {
        id,
        collection_point_id,
        purpose_id,
        section_info_id: None,
        priority,
        status: RecordStatus::Active,
        version: 1,
        created_by: 1,
        created_at: mock_timestamp(),
        updated_by: 1,
        updated_at: mock_timestamp(),
    }
}

/// Create a mock current, active consent model.
pub fn mock_consent_model(
    id: i32,
    company_id: i32,
    collection_point_id: i32,
    website_id: i32,
) -> ConsentModel {
    ConsentModel {
        id,
        uid: id as i64,
        company_id,
        collection_point_id,
        website_id,
        full_name: Some(format!("Subject {}", id)),
        id_card_number: Some(format!("ID-{}", id)),
        email: Some(format!("subject-{}@example.com", id)),
        phone_number: Some(format!("+6600000{:04}", id)),
        from_browser: Some("Firefox".to_string()),
        remark: None,
        verify_type: Some("Email".to_string()),
        total_transactions: 1,
        consent_datetime: mock_timestamp(),
        created_at: mock_timestamp(),
        status: RecordStatus::Active,
        is_current: true,
    }
}
