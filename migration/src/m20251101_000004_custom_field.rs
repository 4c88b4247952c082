use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_company::Company;

static FK_CUSTOM_FIELD_COMPANY_ID: &str = "fk-custom_field-company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomField::Table)
                    .if_not_exists()
                    .col(pk_auto(CustomField::Id))
                    .col(integer(CustomField::CompanyId))
                    .col(string(CustomField::Code))
                    .col(string(CustomField::Description))
                    .col(string_len(CustomField::Status, 16))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CUSTOM_FIELD_COMPANY_ID)
                            .from(CustomField::Table, CustomField::CompanyId)
                            .to(Company::Table, Company::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomField::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CustomField {
    Table,
    Id,
    CompanyId,
    Code,
    Description,
    Status,
}
