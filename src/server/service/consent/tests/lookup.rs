//! Tests for LookupIndexBuilder::build against an in-memory database.

use super::*;

use chrono::NaiveDate;
use entity::sea_orm_active_enums::RecordStatus;

use crate::server::service::consent::lookup::LookupIndexes;

/// Tests purpose ordering within one collection point.
///
/// Expected: ascending link priority, ties broken by purpose id
#[tokio::test]
async fn orders_purposes_by_priority_then_id() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_mock_company("Acme")
        .build()
        .await?;
    let website = test.reference().insert_mock_website(1).await?;
    let collection_point = test
        .collection_point()
        .insert_mock_collection_point(1, website.id, "cp-newsletter")
        .await?;
    let first = test.reference().insert_mock_purpose(1, "FIRST").await?;
    let second = test.reference().insert_mock_purpose(1, "SECOND").await?;
    let third = test.reference().insert_mock_purpose(1, "THIRD").await?;
    test.collection_point()
        .insert_mock_purpose_link(collection_point.id, third.id, 1)
        .await?;
    test.collection_point()
        .insert_mock_purpose_link(collection_point.id, first.id, 5)
        .await?;
    test.collection_point()
        .insert_mock_purpose_link(collection_point.id, second.id, 1)
        .await?;

    let indexes = LookupIndexBuilder::new(&test.db)
        .build(1, &[collection_point.id], &CancelSignal::new())
        .await
        .unwrap();

    let ids: Vec<i32> = indexes.purposes[&collection_point.id]
        .iter()
        .map(|purpose| purpose.id)
        .collect();
    assert_eq!(ids, vec![second.id, third.id, first.id]);

    Ok(())
}

/// Tests the computed purpose expiration.
///
/// Expected: created 2024-01-01 with "30 days" expires 2024-01-31; an unparsable period yields
/// no expiration instead of an error
#[tokio::test]
async fn computes_purpose_expiration() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_mock_company("Acme")
        .build()
        .await?;
    let website = test.reference().insert_mock_website(1).await?;
    let collection_point = test
        .collection_point()
        .insert_mock_collection_point(1, website.id, "cp-newsletter")
        .await?;
    let thirty_days = test.reference().insert_mock_purpose(1, "MARKETING").await?;
    let forever = test
        .reference()
        .insert_purpose(1, "LEGAL", "until revoked", RecordStatus::Active)
        .await?;
    test.collection_point()
        .insert_mock_purpose_link(collection_point.id, thirty_days.id, 1)
        .await?;
    test.collection_point()
        .insert_mock_purpose_link(collection_point.id, forever.id, 2)
        .await?;

    let indexes = LookupIndexBuilder::new(&test.db)
        .build(1, &[collection_point.id], &CancelSignal::new())
        .await
        .unwrap();

    let purposes = &indexes.purposes[&collection_point.id];
    let expected = NaiveDate::from_ymd_opt(2024, 1, 31)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(purposes[0].expired_date_time, Some(expected));
    assert_eq!(purposes[1].expired_date_time, None);

    Ok(())
}

/// Tests indexes for several collection points, including ones that do not resolve.
///
/// Expected: entries keyed by collection point id; unknown and other tenants' ids are absent
#[tokio::test]
async fn indexes_by_collection_point() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_mock_company("Acme")
        .with_mock_company("Globex")
        .build()
        .await?;
    let newsletter = seed_collection_point(&mut test, "cp-newsletter").await?;
    let checkout = seed_collection_point(&mut test, "cp-checkout").await?;
    let globex_site = test.reference().insert_mock_website(2).await?;
    let globex_cp = test
        .collection_point()
        .insert_mock_collection_point(2, globex_site.id, "cp-globex")
        .await?;

    let indexes = LookupIndexBuilder::new(&test.db)
        .build(
            1,
            &[newsletter.id, checkout.id, newsletter.id, globex_cp.id, 999],
            &CancelSignal::new(),
        )
        .await
        .unwrap();

    assert_eq!(indexes.collection_points.len(), 2);
    assert_eq!(indexes.collection_points[&checkout.id].guid, "cp-checkout");
    assert_eq!(indexes.websites[&newsletter.id].id, newsletter.website_id);
    assert_eq!(indexes.companies[&checkout.id].name, "Acme");
    assert_eq!(indexes.purposes[&newsletter.id].len(), 2);
    assert!(!indexes.collection_points.contains_key(&globex_cp.id));
    assert!(!indexes.purposes.contains_key(&999));

    Ok(())
}

/// Tests that an empty id set never reaches the store.
///
/// Uses a database without tables, so any query would fail.
///
/// Expected: Ok with empty indexes
#[tokio::test]
async fn skips_queries_for_empty_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let indexes = LookupIndexBuilder::new(&test.db)
        .build(1, &[], &CancelSignal::new())
        .await
        .unwrap();

    assert_eq!(indexes, LookupIndexes::default());

    Ok(())
}

/// Expected: Err(Cancelled) before the first lookup query
#[tokio::test]
async fn stops_when_cancelled() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let cancel = CancelSignal::new();
    cancel.cancel();

    let result = LookupIndexBuilder::new(&test.db)
        .build(1, &[1, 2, 3], &cancel)
        .await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Cancelled);

    Ok(())
}
