//! Consent queries, filters and enriched views.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::RecordStatus;
use serde::{Deserialize, Serialize};

use crate::server::model::auth::Identity;

/// Optional exact-match filters for consent queries.
///
/// `None` and empty strings both mean "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ConsentFilter {
    pub full_name: Option<String>,
    pub id_card_number: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub collection_point_guid: Option<String>,
}

impl ConsentFilter {
    /// Returns `value` when it is set to a non-empty string.
    pub fn present(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// True when no filter is set, which callers treat as an empty result.
    pub fn is_unset(&self) -> bool {
        [
            &self.full_name,
            &self.id_card_number,
            &self.phone_number,
            &self.email,
            &self.collection_point_guid,
        ]
        .into_iter()
        .all(|value| Self::present(value).is_none())
    }
}

/// Paginated consent listing request.
#[derive(Clone, Debug)]
pub struct ListConsentsQuery {
    pub identity: Option<Identity>,
    pub filter: ConsentFilter,
    /// Restrict to records flagged as the current version.
    pub current_version_only: bool,
    /// 1-based page number.
    pub offset: i64,
    pub limit: i64,
}

/// Single consent lookup for one collection point.
#[derive(Clone, Debug)]
pub struct FindConsentQuery {
    pub identity: Option<Identity>,
    pub filter: ConsentFilter,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CollectionPointView {
    pub id: i32,
    pub guid: String,
    pub version: i32,
    pub status: RecordStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WebsiteView {
    pub id: i32,
    pub description: String,
    pub url_home_page: String,
    pub url_policy_page: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompanyView {
    pub id: i32,
    pub name: String,
    pub status: RecordStatus,
}

/// Purpose offered by a collection point, with its computed expiration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PurposeView {
    pub id: i32,
    pub guid: String,
    pub company_id: i32,
    pub code: String,
    pub description: String,
    pub warning_description: Option<String>,
    pub purpose_category_id: i32,
    /// `None` when the stored retention period cannot be parsed.
    pub expired_date_time: Option<NaiveDateTime>,
    pub version: i32,
    pub priority: i32,
    pub status: RecordStatus,
}

/// Consent record enriched with its company, website and purposes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConsentView {
    pub id: i32,
    pub uid: i32,
    pub company_id: i32,
    pub company_name: Option<String>,
    pub collection_point_id: i32,
    pub collection_point_guid: Option<String>,
    pub collection_point_version: Option<i32>,
    pub website: Option<WebsiteView>,
    pub purposes: Vec<PurposeView>,
    pub full_name: Option<String>,
    pub id_card_number: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub from_browser: Option<String>,
    pub remark: Option<String>,
    pub verify_type: Option<String>,
    pub total_transactions: i32,
    pub consent_date_time: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub status: RecordStatus,
}
