//! Tests for CollectionPointService::create_collection_point.
//!
//! This module verifies that the aggregate is written completely on success, that any failed
//! write leaves no rows behind, and that invalid commands are rejected before the store is
//! touched.

use super::*;

/// Tests creating a collection point with 3 purposes and 2 custom fields.
///
/// Expected: 1 collection point, 3 purpose links, 2 custom field configs, 1 page detail
#[tokio::test]
async fn creates_complete_aggregate() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_mock_company("Acme")
        .build()
        .await?;
    let (website_id, purpose_ids, custom_field_ids) = seed_reference_data(&mut test).await?;

    let service = CollectionPointService::new(&test.db);
    let collection_point_id = service
        .create_collection_point(
            command(website_id, &purpose_ids, &custom_field_ids),
            &CancelSignal::new(),
        )
        .await
        .unwrap();

    assert_eq!(aggregate_row_counts(&test).await?, (1, 3, 2, 1));

    let collection_point = entity::prelude::CollectionPoint::find_by_id(collection_point_id)
        .one(&test.db)
        .await?
        .expect("collection point should exist");
    assert_eq!(collection_point.company_id, 1);
    assert_eq!(collection_point.created_by, 7);
    assert_eq!(collection_point.updated_by, 7);
    assert_eq!(collection_point.version, 1);
    assert_eq!(
        collection_point.status,
        entity::sea_orm_active_enums::RecordStatus::Active
    );
    assert!(Uuid::parse_str(&collection_point.guid).is_ok());
    assert!(collection_point.email_primary && collection_point.email_required);
    assert!(!collection_point.full_name_primary && collection_point.full_name_required);
    assert!(!collection_point.uid_primary && !collection_point.uid_required);

    let links = entity::prelude::CollectionPointPurpose::find()
        .all(&test.db)
        .await?;
    assert!(links
        .iter()
        .all(|link| link.collection_point_id == collection_point_id && link.version == 1));
    let mut linked: Vec<i32> = links.iter().map(|link| link.purpose_id).collect();
    linked.sort();
    assert_eq!(linked, purpose_ids);

    let configs = entity::prelude::CollectionPointCustomField::find()
        .all(&test.db)
        .await?;
    assert!(configs
        .iter()
        .all(|config| config.collection_point_id == collection_point_id));

    let page = entity::prelude::ConsentPage::find()
        .one(&test.db)
        .await?
        .expect("page detail should exist");
    assert_eq!(page.collection_point_id, collection_point_id);
    assert_eq!(page.header_label.as_deref(), Some("Stay in touch"));
    assert_eq!(page.label_action_ok.as_deref(), Some("Subscribe"));

    Ok(())
}

/// Tests a failure while writing purpose links.
///
/// The last purpose id does not exist, so its link violates the foreign key.
///
/// Expected: Err(Internal) and zero rows in every aggregate table
#[tokio::test]
async fn rolls_back_on_purpose_link_failure() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_mock_company("Acme")
        .build()
        .await?;
    let (website_id, mut purpose_ids, custom_field_ids) = seed_reference_data(&mut test).await?;
    purpose_ids[2] = 999;

    let service = CollectionPointService::new(&test.db);
    let result = service
        .create_collection_point(
            command(website_id, &purpose_ids, &custom_field_ids),
            &CancelSignal::new(),
        )
        .await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Internal);
    assert_eq!(aggregate_row_counts(&test).await?, (0, 0, 0, 0));

    Ok(())
}

/// Tests a failure while writing custom field configuration.
///
/// Expected: Err(Internal) and zero rows in every aggregate table
#[tokio::test]
async fn rolls_back_on_custom_field_failure() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_mock_company("Acme")
        .build()
        .await?;
    let (website_id, purpose_ids, _) = seed_reference_data(&mut test).await?;

    let service = CollectionPointService::new(&test.db);
    let result = service
        .create_collection_point(
            command(website_id, &purpose_ids, &[404, 405]),
            &CancelSignal::new(),
        )
        .await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Internal);
    assert_eq!(aggregate_row_counts(&test).await?, (0, 0, 0, 0));

    Ok(())
}

/// Tests a failure while writing the page detail, the last step of the aggregate.
///
/// The consent page table is never created, so its insert fails after every other row
/// has been written inside the transaction.
///
/// Expected: Err(Internal) and zero rows in the remaining aggregate tables
#[tokio::test]
async fn rolls_back_on_page_detail_failure() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Company)
        .with_table(entity::prelude::Website)
        .with_table(entity::prelude::Purpose)
        .with_table(entity::prelude::CustomField)
        .with_table(entity::prelude::CollectionPoint)
        .with_table(entity::prelude::CollectionPointPurpose)
        .with_table(entity::prelude::CollectionPointCustomField)
        .with_mock_company("Acme")
        .build()
        .await?;
    let (website_id, purpose_ids, custom_field_ids) = seed_reference_data(&mut test).await?;

    let result = CollectionPointService::new(&test.db)
        .create_collection_point(
            command(website_id, &purpose_ids, &custom_field_ids),
            &CancelSignal::new(),
        )
        .await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Internal);
    assert_eq!(
        entity::prelude::CollectionPoint::find().count(&test.db).await?,
        0
    );
    assert_eq!(
        entity::prelude::CollectionPointPurpose::find()
            .count(&test.db)
            .await?,
        0
    );
    assert_eq!(
        entity::prelude::CollectionPointCustomField::find()
            .count(&test.db)
            .await?,
        0
    );

    Ok(())
}

/// Expected: Err(Unauthorized) and nothing written without an identity
#[tokio::test]
async fn fails_without_identity() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_mock_company("Acme")
        .build()
        .await?;
    let (website_id, purpose_ids, custom_field_ids) = seed_reference_data(&mut test).await?;

    let mut anonymous = command(website_id, &purpose_ids, &custom_field_ids);
    anonymous.identity = None;

    let result = CollectionPointService::new(&test.db)
        .create_collection_point(anonymous, &CancelSignal::new())
        .await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Unauthorized);
    assert_eq!(aggregate_row_counts(&test).await?, (0, 0, 0, 0));

    Ok(())
}

/// Tests command validation before the transaction begins.
///
/// Expected: Err(Validation) naming the offending field, nothing written
#[tokio::test]
async fn rejects_invalid_commands() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_mock_company("Acme")
        .build()
        .await?;
    let (website_id, purpose_ids, custom_field_ids) = seed_reference_data(&mut test).await?;
    let service = CollectionPointService::new(&test.db);
    let cancel = CancelSignal::new();

    let mut unknown_code = command(website_id, &purpose_ids, &custom_field_ids);
    unknown_code.key_identifiers.push(key("Passport", false, true));

    let mut two_primaries = command(website_id, &purpose_ids, &custom_field_ids);
    two_primaries.key_identifiers.push(key("PhoneNumber", true, true));

    let mut bad_period = command(website_id, &purpose_ids, &custom_field_ids);
    bad_period.expiration_period = "until revoked".to_string();

    for (invalid, field) in [
        (unknown_code, "consent_key_identifier"),
        (two_primaries, "consent_key_identifier"),
        (bad_period, "expiration_period"),
    ] {
        match service.create_collection_point(invalid, &cancel).await {
            Err(Error::ValidationError(err)) => assert_eq!(err.field, field),
            other => panic!("expected validation error on {}, got {:?}", field, other),
        }
    }

    assert_eq!(aggregate_row_counts(&test).await?, (0, 0, 0, 0));

    Ok(())
}

/// Expected: Err(Cancelled) and nothing written when cancelled before the transaction
#[tokio::test]
async fn stops_when_cancelled() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_mock_company("Acme")
        .build()
        .await?;
    let (website_id, purpose_ids, custom_field_ids) = seed_reference_data(&mut test).await?;
    let cancel = CancelSignal::new();
    cancel.cancel();

    let result = CollectionPointService::new(&test.db)
        .create_collection_point(command(website_id, &purpose_ids, &custom_field_ids), &cancel)
        .await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Cancelled);
    assert_eq!(aggregate_row_counts(&test).await?, (0, 0, 0, 0));

    Ok(())
}

/// Expected: a later entry for the same key replaces an earlier one
#[test]
fn later_key_entries_replace_earlier_ones() {
    let keys = key_configuration(&[key("Uid", true, true), key("Uid", false, false)]).unwrap();

    assert_eq!(keys.uid, KeyFlags::default());
    assert_eq!(keys.primary_count(), 0);
}
