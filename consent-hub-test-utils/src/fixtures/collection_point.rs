//! Collection point and purpose link fixtures.

use entity::sea_orm_active_enums::RecordStatus;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{CollectionPointModel, PurposeLinkModel},
    TestContext,
};

impl TestContext {
    pub fn collection_point<'a>(&'a mut self) -> CollectionPointFixtures<'a> {
        CollectionPointFixtures { context: self }
    }
}

pub struct CollectionPointFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> CollectionPointFixtures<'a> {
    /// Insert an active collection point with external id `guid`.
    pub async fn insert_mock_collection_point(
        &self,
        company_id: i32,
        website_id: i32,
        guid: &str,
    ) -> Result<CollectionPointModel, TestError> {
        self.insert_collection_point(company_id, website_id, guid, RecordStatus::Active)
            .await
    }

    /// Insert a collection point with an explicit status.
    pub async fn insert_collection_point(
        &self,
        company_id: i32,
        website_id: i32,
        guid: &str,
        status: RecordStatus,
    ) -> Result<CollectionPointModel, TestError> {
        let mock = factory::mock_collection_point_model(0, company_id, website_id);
        let collection_point = entity::collection_point::ActiveModel {
            guid: ActiveValue::Set(guid.to_string()),
            company_id: ActiveValue::Set(company_id),
            website_id: ActiveValue::Set(website_id),
            name: ActiveValue::Set(mock.name),
            language: ActiveValue::Set(mock.language),
            expiration_period: ActiveValue::Set(mock.expiration_period),
            status: ActiveValue::Set(status),
            version: ActiveValue::Set(1),
            uid_primary: ActiveValue::Set(false),
            uid_required: ActiveValue::Set(false),
            id_card_number_primary: ActiveValue::Set(false),
            id_card_number_required: ActiveValue::Set(false),
            email_primary: ActiveValue::Set(true),
            email_required: ActiveValue::Set(true),
            full_name_primary: ActiveValue::Set(false),
            full_name_required: ActiveValue::Set(false),
            phone_number_primary: ActiveValue::Set(false),
            phone_number_required: ActiveValue::Set(false),
            created_by: ActiveValue::Set(1),
            created_at: ActiveValue::Set(mock.created_at),
            updated_by: ActiveValue::Set(1),
            updated_at: ActiveValue::Set(mock.updated_at),
            ..Default::default()
        };

        Ok(collection_point.insert(&self.context.db).await?)
    }

    /// Link a purpose to a collection point with the given display priority.
    pub async fn insert_mock_purpose_link(
        &self,
        collection_point_id: i32,
        purpose_id: i32,
        priority: i32,
    ) -> Result<PurposeLinkModel, TestError> {
        self.insert_purpose_link(collection_point_id, purpose_id, priority, RecordStatus::Active)
            .await
    }

    /// Link a purpose to a collection point with an explicit link status.
    pub async fn insert_purpose_link(
        &self,
        collection_point_id: i32,
        purpose_id: i32,
        priority: i32,
        status: RecordStatus,
    ) -> Result<PurposeLinkModel, TestError> {
        let link = entity::collection_point_purpose::ActiveModel {
            collection_point_id: ActiveValue::Set(collection_point_id),
            purpose_id: ActiveValue::Set(purpose_id),
            section_info_id: ActiveValue::Set(None),
            priority: ActiveValue::Set(priority),
            status: ActiveValue::Set(status),
            version: ActiveValue::Set(1),
            created_by: ActiveValue::Set(1),
            created_at: ActiveValue::Set(factory::mock_timestamp()),
            updated_by: ActiveValue::Set(1),
            updated_at: ActiveValue::Set(factory::mock_timestamp()),
            ..Default::default()
        };

        Ok(link.insert(&self.context.db).await?)
    }
}
