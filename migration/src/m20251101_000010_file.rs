use sea_orm_migration::{prelude::*, schema::*};

static IDX_FILE_COMPANY_ID: &str = "idx-file-company_id";
static FK_FILE_FILE_TYPE_ID: &str = "fk-file-file_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FileType::Table)
                    .if_not_exists()
                    .col(pk_auto(FileType::Id))
                    .col(string_uniq(FileType::Code))
                    .col(string(FileType::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(File::Table)
                    .if_not_exists()
                    .col(pk_auto(File::Id))
                    .col(integer(File::CompanyId))
                    .col(integer(File::FileTypeId))
                    .col(string(File::FullFileName))
                    .col(string(File::OriginalFileName))
                    .col(string_len(File::Status, 16))
                    .col(integer(File::CreatedBy))
                    .col(timestamp(File::CreatedAt))
                    .col(integer(File::UpdatedBy))
                    .col(timestamp(File::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FILE_FILE_TYPE_ID)
                            .from(File::Table, File::FileTypeId)
                            .to(FileType::Table, FileType::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FILE_COMPANY_ID)
                    .table(File::Table)
                    .col(File::CompanyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FILE_COMPANY_ID)
                    .table(File::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(File::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FileType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FileType {
    Table,
    Id,
    Code,
    Description,
}

#[derive(DeriveIden)]
pub enum File {
    Table,
    Id,
    CompanyId,
    FileTypeId,
    FullFileName,
    OriginalFileName,
    Status,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}
