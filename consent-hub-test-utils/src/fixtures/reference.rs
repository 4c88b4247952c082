//! Reference data fixtures: companies, websites, purposes, custom fields and files.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::RecordStatus;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{CompanyModel, CustomFieldModel, FileModel, FileTypeModel, PurposeModel, WebsiteModel},
    TestContext,
};

impl TestContext {
    pub fn reference<'a>(&'a mut self) -> ReferenceFixtures<'a> {
        ReferenceFixtures { context: self }
    }
}

pub struct ReferenceFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> ReferenceFixtures<'a> {
    /// Insert an active company.
    pub async fn insert_mock_company(&self, name: &str) -> Result<CompanyModel, TestError> {
        let company = entity::company::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            status: ActiveValue::Set(RecordStatus::Active),
            ..Default::default()
        };

        Ok(company.insert(&self.context.db).await?)
    }

    /// Insert an active website owned by `company_id`.
    pub async fn insert_mock_website(&self, company_id: i32) -> Result<WebsiteModel, TestError> {
        let mock = factory::mock_website_model(0, company_id);
        let website = entity::website::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            description: ActiveValue::Set(mock.description),
            url: ActiveValue::Set(mock.url),
            url_policy: ActiveValue::Set(mock.url_policy),
            status: ActiveValue::Set(RecordStatus::Active),
            ..Default::default()
        };

        Ok(website.insert(&self.context.db).await?)
    }

    /// Insert an active purpose with a "30 days" retention period created at `2024-01-01`.
    pub async fn insert_mock_purpose(
        &self,
        company_id: i32,
        code: &str,
    ) -> Result<PurposeModel, TestError> {
        self.insert_purpose(company_id, code, "30 days", RecordStatus::Active)
            .await
    }

    /// Insert a purpose with an explicit retention period and status.
    pub async fn insert_purpose(
        &self,
        company_id: i32,
        code: &str,
        expiration_period: &str,
        status: RecordStatus,
    ) -> Result<PurposeModel, TestError> {
        let mock = factory::mock_purpose_model(0, company_id, code);
        let purpose = entity::purpose::ActiveModel {
            guid: ActiveValue::Set(format!("purpose-{}-{}", company_id, code)),
            company_id: ActiveValue::Set(company_id),
            code: ActiveValue::Set(mock.code),
            description: ActiveValue::Set(mock.description),
            warning_description: ActiveValue::Set(None),
            purpose_category_id: ActiveValue::Set(mock.purpose_category_id),
            expiration_period: ActiveValue::Set(expiration_period.to_string()),
            status: ActiveValue::Set(status),
            version: ActiveValue::Set(1),
            created_at: ActiveValue::Set(mock.created_at),
            updated_at: ActiveValue::Set(mock.updated_at),
            ..Default::default()
        };

        Ok(purpose.insert(&self.context.db).await?)
    }

    /// Insert an active custom field definition.
    pub async fn insert_mock_custom_field(
        &self,
        company_id: i32,
        code: &str,
    ) -> Result<CustomFieldModel, TestError> {
        let custom_field = entity::custom_field::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            code: ActiveValue::Set(code.to_string()),
            description: ActiveValue::Set(format!("Custom field {}", code)),
            status: ActiveValue::Set(RecordStatus::Active),
            ..Default::default()
        };

        Ok(custom_field.insert(&self.context.db).await?)
    }

    /// Insert a file type with the given code, e.g. `IMAGE`.
    pub async fn insert_mock_file_type(&self, code: &str) -> Result<FileTypeModel, TestError> {
        let file_type = entity::file_type::ActiveModel {
            code: ActiveValue::Set(code.to_string()),
            description: ActiveValue::Set(format!("{} files", code)),
            ..Default::default()
        };

        Ok(file_type.insert(&self.context.db).await?)
    }

    /// Insert a stored file last updated at `updated_at`.
    pub async fn insert_mock_file(
        &self,
        company_id: i32,
        file_type_id: i32,
        full_file_name: &str,
        status: RecordStatus,
        updated_at: NaiveDateTime,
    ) -> Result<FileModel, TestError> {
        let file = entity::file::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            file_type_id: ActiveValue::Set(file_type_id),
            full_file_name: ActiveValue::Set(full_file_name.to_string()),
            original_file_name: ActiveValue::Set(full_file_name.to_string()),
            status: ActiveValue::Set(status),
            created_by: ActiveValue::Set(1),
            created_at: ActiveValue::Set(factory::mock_timestamp()),
            updated_by: ActiveValue::Set(1),
            updated_at: ActiveValue::Set(updated_at),
            ..Default::default()
        };

        Ok(file.insert(&self.context.db).await?)
    }
}
