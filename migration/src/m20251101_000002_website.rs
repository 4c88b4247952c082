use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_company::Company;

static IDX_WEBSITE_COMPANY_ID: &str = "idx-website-company_id";
static FK_WEBSITE_COMPANY_ID: &str = "fk-website-company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Website::Table)
                    .if_not_exists()
                    .col(pk_auto(Website::Id))
                    .col(integer(Website::CompanyId))
                    .col(string(Website::Description))
                    .col(string(Website::Url))
                    .col(string_null(Website::UrlPolicy))
                    .col(string_len(Website::Status, 16))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_WEBSITE_COMPANY_ID)
                            .from(Website::Table, Website::CompanyId)
                            .to(Company::Table, Company::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WEBSITE_COMPANY_ID)
                    .table(Website::Table)
                    .col(Website::CompanyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WEBSITE_COMPANY_ID)
                    .table(Website::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Website::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Website {
    Table,
    Id,
    CompanyId,
    Description,
    Url,
    UrlPolicy,
    Status,
}
