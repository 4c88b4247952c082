use entity::sea_orm_active_enums::RecordStatus;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::db::FileModel;

pub struct FileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FileRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the most recently updated active files of a company with the given file type code
    ///
    /// # Arguments
    /// - `company_id`: Tenant owning the files
    /// - `file_type_code`: File type code such as `IMAGE`
    /// - `limit`: Maximum number of files to return
    pub async fn get_latest_by_type(
        &self,
        company_id: i32,
        file_type_code: &str,
        limit: u64,
    ) -> Result<Vec<FileModel>, DbErr> {
        entity::prelude::File::find()
            .inner_join(entity::prelude::FileType)
            .filter(entity::file::Column::CompanyId.eq(company_id))
            .filter(entity::file::Column::Status.eq(RecordStatus::Active))
            .filter(entity::file_type::Column::Code.eq(file_type_code))
            .order_by_desc(entity::file::Column::UpdatedAt)
            .order_by_desc(entity::file::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}
