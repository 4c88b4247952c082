//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Methods are chained together and everything queued is executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// reference fixtures. Finalize with `build()` to create the [`TestContext`].
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_consent_tables: bool,

    // Reference fixtures to insert, by name
    companies: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_consent_tables: false,
            companies: Vec::new(),
        }
    }

    /// Add every table used by the consent and collection point pipeline.
    ///
    /// Creates Company, Website, Purpose, CustomField, CollectionPoint, CollectionPointPurpose,
    /// CollectionPointCustomField, ConsentPage, Consent, FileType and File.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_consent_tables(mut self) -> Self {
        self.include_consent_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use consent_hub_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), consent_hub_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Company)
    ///     .with_table(Website)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock active company during `build()`.
    ///
    /// Requires the company table, either through `with_consent_tables` or `with_table`.
    pub fn with_mock_company(mut self, name: impl Into<String>) -> Self {
        self.companies.push(name.into());
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_consent_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Company),
                schema.create_table_from_entity(entity::prelude::Website),
                schema.create_table_from_entity(entity::prelude::Purpose),
                schema.create_table_from_entity(entity::prelude::CustomField),
                schema.create_table_from_entity(entity::prelude::CollectionPoint),
                schema.create_table_from_entity(entity::prelude::CollectionPointPurpose),
                schema.create_table_from_entity(entity::prelude::CollectionPointCustomField),
                schema.create_table_from_entity(entity::prelude::ConsentPage),
                schema.create_table_from_entity(entity::prelude::Consent),
                schema.create_table_from_entity(entity::prelude::FileType),
                schema.create_table_from_entity(entity::prelude::File),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        for name in self.companies {
            context.reference().insert_mock_company(&name).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builder_creates_consent_tables() {
        let result = TestBuilder::new().with_consent_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_inserts_companies() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_consent_tables()
            .with_mock_company("Acme")
            .with_mock_company("Globex")
            .build()
            .await?;

        let companies = entity::prelude::Company::find().all(&test.db).await?;
        assert_eq!(companies.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_builder_fails_fixture_without_tables() {
        let result = TestBuilder::new().with_mock_company("Acme").build().await;
        assert!(result.is_err());
    }
}
