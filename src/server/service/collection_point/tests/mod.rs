mod create_collection_point;

use super::*;

use consent_hub_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::server::{
    error::kind::ErrorKind,
    model::collection_point::{CustomFieldInput, PageDetailInput, PurposeInput},
};

/// Row counts of every table in the collection point aggregate:
/// (collection points, purpose links, custom field configs, page details)
async fn aggregate_row_counts(test: &TestContext) -> Result<(u64, u64, u64, u64), TestError> {
    Ok((
        entity::prelude::CollectionPoint::find().count(&test.db).await?,
        entity::prelude::CollectionPointPurpose::find()
            .count(&test.db)
            .await?,
        entity::prelude::CollectionPointCustomField::find()
            .count(&test.db)
            .await?,
        entity::prelude::ConsentPage::find().count(&test.db).await?,
    ))
}

fn key(code: &str, is_primary_key: bool, is_required: bool) -> KeyIdentifierInput {
    KeyIdentifierInput {
        code: code.to_string(),
        is_primary_key,
        is_required,
    }
}

/// Command for company 1 / user 7 with the given purposes and custom fields.
fn command(
    website_id: i32,
    purpose_ids: &[i32],
    custom_field_ids: &[i32],
) -> CreateCollectionPointCommand {
    CreateCollectionPointCommand {
        identity: Some(Identity {
            company_id: 1,
            user_id: 7,
        }),
        name: "Newsletter signup".to_string(),
        website_id,
        language: "en-US".to_string(),
        expiration_period: "1 year".to_string(),
        key_identifiers: vec![key("Email", true, true), key("Fullname", false, true)],
        purposes: purpose_ids
            .iter()
            .enumerate()
            .map(|(i, &purpose_id)| PurposeInput {
                purpose_id,
                priority: i as i32 + 1,
                section_info_id: None,
            })
            .collect(),
        custom_fields: custom_field_ids
            .iter()
            .enumerate()
            .map(|(i, &custom_field_id)| CustomFieldInput {
                custom_field_id,
                is_required: i == 0,
                sequence: i as i32 + 1,
            })
            .collect(),
        page_detail: PageDetailInput {
            header_text: Some("Stay in touch".to_string()),
            confirm_button_text: Some("Subscribe".to_string()),
            policy_url: Some("https://shop.example.com/privacy".to_string()),
            ..Default::default()
        },
    }
}

/// Seeds company 1 with a website, three purposes and two custom fields.
///
/// Returns (website id, purpose ids, custom field ids).
async fn seed_reference_data(
    test: &mut TestContext,
) -> Result<(i32, Vec<i32>, Vec<i32>), TestError> {
    let website = test.reference().insert_mock_website(1).await?;

    let mut purpose_ids = Vec::new();
    for code in ["MARKETING", "ANALYTICS", "PROFILING"] {
        purpose_ids.push(test.reference().insert_mock_purpose(1, code).await?.id);
    }

    let mut custom_field_ids = Vec::new();
    for code in ["NICKNAME", "BIRTHDAY"] {
        custom_field_ids.push(test.reference().insert_mock_custom_field(1, code).await?.id);
    }

    Ok((website.id, purpose_ids, custom_field_ids))
}
