use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::model::{collection_point::PageDetailInput, db::PageDetailModel};

pub struct PageDetailRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PageDetailRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the consent page of a collection point, copying every field verbatim
    pub async fn create(
        &self,
        collection_point_id: i32,
        page: &PageDetailInput,
    ) -> Result<PageDetailModel, DbErr> {
        let page_detail = entity::consent_page::ActiveModel {
            collection_point_id: ActiveValue::Set(collection_point_id),
            header_logo: ActiveValue::Set(page.logo_image.clone()),
            header_label: ActiveValue::Set(page.header_text.clone()),
            header_bg_image: ActiveValue::Set(page.header_background_image.clone()),
            body_top_description: ActiveValue::Set(page.body_top_description_text.clone()),
            body_bottom_description: ActiveValue::Set(page.body_bottom_description_text.clone()),
            body_bg_image: ActiveValue::Set(page.background_image.clone()),
            label_check_box_accept: ActiveValue::Set(page.accept_check_box_text.clone()),
            label_action_ok: ActiveValue::Set(page.confirm_button_text.clone()),
            label_action_cancel: ActiveValue::Set(page.cancel_button_text.clone()),
            label_link_to_policy: ActiveValue::Set(page.policy_url_text.clone()),
            label_link_to_policy_url: ActiveValue::Set(page.policy_url.clone()),
            redirect_url: ActiveValue::Set(page.redirect_url.clone()),
            header_label_thank_page: ActiveValue::Set(page.success_header_text.clone()),
            short_description_thank_page: ActiveValue::Set(page.success_description_text.clone()),
            button_thank_page: ActiveValue::Set(page.success_button_text.clone()),
            ..Default::default()
        };

        page_detail.insert(self.db).await
    }
}
