mod lookup;

use super::*;

use consent_hub_test_utils::{
    fixtures::consent::MockSubject, model::CollectionPointModel, prelude::*,
};

use crate::server::error::kind::ErrorKind;

fn identity() -> Option<Identity> {
    Some(Identity {
        company_id: 1,
        user_id: 7,
    })
}

fn email_filter(email: &str) -> ConsentFilter {
    ConsentFilter {
        email: Some(email.to_string()),
        ..Default::default()
    }
}

/// Seeds company 1 ("Acme") with a website, a collection point and two linked purposes.
async fn seed_collection_point(
    test: &mut TestContext,
    guid: &str,
) -> Result<CollectionPointModel, TestError> {
    let website = test.reference().insert_mock_website(1).await?;
    let collection_point = test
        .collection_point()
        .insert_mock_collection_point(1, website.id, guid)
        .await?;
    let analytics = test
        .reference()
        .insert_mock_purpose(1, &format!("{}-ANALYTICS", guid))
        .await?;
    let marketing = test
        .reference()
        .insert_mock_purpose(1, &format!("{}-MARKETING", guid))
        .await?;
    test.collection_point()
        .insert_mock_purpose_link(collection_point.id, analytics.id, 2)
        .await?;
    test.collection_point()
        .insert_mock_purpose_link(collection_point.id, marketing.id, 1)
        .await?;

    Ok(collection_point)
}
