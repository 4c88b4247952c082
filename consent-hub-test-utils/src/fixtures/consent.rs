//! Consent record fixtures.

use entity::sea_orm_active_enums::RecordStatus;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{CollectionPointModel, ConsentModel},
    TestContext,
};

impl TestContext {
    pub fn consent<'a>(&'a mut self) -> ConsentFixtures<'a> {
        ConsentFixtures { context: self }
    }
}

pub struct ConsentFixtures<'a> {
    context: &'a mut TestContext,
}

/// Subject identity fields for a consent fixture.
#[derive(Clone, Debug, Default)]
pub struct MockSubject {
    pub full_name: Option<String>,
    pub id_card_number: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl MockSubject {
    /// Subject with only a full name and email set.
    pub fn named(full_name: &str, email: &str) -> Self {
        Self {
            full_name: Some(full_name.to_string()),
            email: Some(email.to_string()),
            ..Default::default()
        }
    }
}

impl<'a> ConsentFixtures<'a> {
    /// Insert a current, active consent for `collection_point`.
    pub async fn insert_mock_consent(
        &self,
        collection_point: &CollectionPointModel,
        subject: MockSubject,
    ) -> Result<ConsentModel, TestError> {
        self.insert_consent(collection_point, subject, 1, true).await
    }

    /// Insert an active consent with an explicit uid and current-version flag.
    pub async fn insert_consent(
        &self,
        collection_point: &CollectionPointModel,
        subject: MockSubject,
        uid: i64,
        is_current: bool,
    ) -> Result<ConsentModel, TestError> {
        let consent = entity::consent::ActiveModel {
            uid: ActiveValue::Set(uid),
            company_id: ActiveValue::Set(collection_point.company_id),
            collection_point_id: ActiveValue::Set(collection_point.id),
            website_id: ActiveValue::Set(collection_point.website_id),
            full_name: ActiveValue::Set(subject.full_name),
            id_card_number: ActiveValue::Set(subject.id_card_number),
            email: ActiveValue::Set(subject.email),
            phone_number: ActiveValue::Set(subject.phone_number),
            from_browser: ActiveValue::Set(Some("Firefox".to_string())),
            remark: ActiveValue::Set(None),
            verify_type: ActiveValue::Set(Some("Email".to_string())),
            total_transactions: ActiveValue::Set(1),
            consent_datetime: ActiveValue::Set(factory::mock_timestamp()),
            created_at: ActiveValue::Set(factory::mock_timestamp()),
            status: ActiveValue::Set(RecordStatus::Active),
            is_current: ActiveValue::Set(is_current),
            ..Default::default()
        };

        Ok(consent.insert(&self.context.db).await?)
    }
}
