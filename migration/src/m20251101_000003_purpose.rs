use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_company::Company;

static IDX_PURPOSE_COMPANY_ID: &str = "idx-purpose-company_id";
static FK_PURPOSE_COMPANY_ID: &str = "fk-purpose-company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Purpose::Table)
                    .if_not_exists()
                    .col(pk_auto(Purpose::Id))
                    .col(string_uniq(Purpose::Guid))
                    .col(integer(Purpose::CompanyId))
                    .col(string(Purpose::Code))
                    .col(string(Purpose::Description))
                    .col(text_null(Purpose::WarningDescription))
                    .col(integer(Purpose::PurposeCategoryId))
                    .col(string(Purpose::ExpirationPeriod))
                    .col(string_len(Purpose::Status, 16))
                    .col(integer(Purpose::Version))
                    .col(timestamp(Purpose::CreatedAt))
                    .col(timestamp(Purpose::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PURPOSE_COMPANY_ID)
                            .from(Purpose::Table, Purpose::CompanyId)
                            .to(Company::Table, Company::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PURPOSE_COMPANY_ID)
                    .table(Purpose::Table)
                    .col(Purpose::CompanyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PURPOSE_COMPANY_ID)
                    .table(Purpose::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Purpose::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Purpose {
    Table,
    Id,
    Guid,
    CompanyId,
    Code,
    Description,
    WarningDescription,
    PurposeCategoryId,
    ExpirationPeriod,
    Status,
    Version,
    CreatedAt,
    UpdatedAt,
}
