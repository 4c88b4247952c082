//! Tests for FileRepository::get_latest_by_type.

use super::*;

use chrono::Duration;
use entity::sea_orm_active_enums::RecordStatus;

use crate::server::data::file::FileRepository;

/// Tests image file selection.
///
/// Expected: only active files of the tenant with the requested type code, most recently
/// updated first, bounded by the limit
#[tokio::test]
async fn returns_latest_active_files_of_type() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_mock_company("Acme")
        .with_mock_company("Globex")
        .build()
        .await?;
    let image = test.reference().insert_mock_file_type("IMAGE").await?;
    let document = test.reference().insert_mock_file_type("DOCUMENT").await?;
    let base = factory::mock_timestamp();

    let older = test
        .reference()
        .insert_mock_file(1, image.id, "older.png", RecordStatus::Active, base)
        .await?;
    let newest = test
        .reference()
        .insert_mock_file(1, image.id, "newest.png", RecordStatus::Active, base + Duration::days(2))
        .await?;
    let middle = test
        .reference()
        .insert_mock_file(1, image.id, "middle.png", RecordStatus::Active, base + Duration::days(1))
        .await?;
    test.reference()
        .insert_mock_file(1, image.id, "removed.png", RecordStatus::Deleted, base + Duration::days(3))
        .await?;
    test.reference()
        .insert_mock_file(1, document.id, "terms.pdf", RecordStatus::Active, base + Duration::days(4))
        .await?;
    test.reference()
        .insert_mock_file(2, image.id, "globex.png", RecordStatus::Active, base + Duration::days(5))
        .await?;

    let file_repo = FileRepository::new(&test.db);

    let all = file_repo.get_latest_by_type(1, "IMAGE", 10).await?;
    assert_eq!(all, vec![newest.clone(), middle, older]);

    let limited = file_repo.get_latest_by_type(1, "IMAGE", 1).await?;
    assert_eq!(limited, vec![newest]);

    Ok(())
}
