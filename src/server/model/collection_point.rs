//! Collection point creation command and identity key configuration.

use std::str::FromStr;

use serde::Deserialize;

use crate::server::model::auth::Identity;

/// Identity field a data subject can be recognised by on a collection point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    Uid,
    IdCardNumber,
    Email,
    FullName,
    PhoneNumber,
}

impl FromStr for IdentityKey {
    type Err = String;

    /// Parses the key type codes used by consent forms: `Uid`, `IdCardNumber`, `Email`,
    /// `Fullname` and `PhoneNumber`.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "Uid" => Ok(Self::Uid),
            "IdCardNumber" => Ok(Self::IdCardNumber),
            "Email" => Ok(Self::Email),
            "Fullname" => Ok(Self::FullName),
            "PhoneNumber" => Ok(Self::PhoneNumber),
            unknown => Err(format!("unknown consent key type code {:?}", unknown)),
        }
    }
}

/// Identity key entry as submitted, before its code is parsed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct KeyIdentifierInput {
    pub code: String,
    pub is_primary_key: bool,
    pub is_required: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PurposeInput {
    pub purpose_id: i32,
    pub priority: i32,
    pub section_info_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CustomFieldInput {
    pub custom_field_id: i32,
    pub is_required: bool,
    pub sequence: i32,
}

/// Presentation fields of the consent page, stored verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PageDetailInput {
    pub logo_image: Option<String>,
    pub header_text: Option<String>,
    pub header_background_image: Option<String>,
    pub body_top_description_text: Option<String>,
    pub body_bottom_description_text: Option<String>,
    pub background_image: Option<String>,
    pub accept_check_box_text: Option<String>,
    pub confirm_button_text: Option<String>,
    pub cancel_button_text: Option<String>,
    pub policy_url_text: Option<String>,
    pub policy_url: Option<String>,
    pub redirect_url: Option<String>,
    pub success_header_text: Option<String>,
    pub success_description_text: Option<String>,
    pub success_button_text: Option<String>,
}

/// Request to create a collection point together with its purposes, custom fields and page.
#[derive(Clone, Debug)]
pub struct CreateCollectionPointCommand {
    pub identity: Option<Identity>,
    pub name: String,
    pub website_id: i32,
    pub language: String,
    /// Retention period descriptor such as `1 year`.
    pub expiration_period: String,
    pub key_identifiers: Vec<KeyIdentifierInput>,
    pub purposes: Vec<PurposeInput>,
    pub custom_fields: Vec<CustomFieldInput>,
    pub page_detail: PageDetailInput,
}

/// Primary/required flag pair for one identity key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyFlags {
    pub primary: bool,
    pub required: bool,
}

/// Validated identity key configuration of a collection point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyConfiguration {
    pub uid: KeyFlags,
    pub id_card_number: KeyFlags,
    pub email: KeyFlags,
    pub full_name: KeyFlags,
    pub phone_number: KeyFlags,
}

impl KeyConfiguration {
    pub fn flags_mut(&mut self, key: IdentityKey) -> &mut KeyFlags {
        match key {
            IdentityKey::Uid => &mut self.uid,
            IdentityKey::IdCardNumber => &mut self.id_card_number,
            IdentityKey::Email => &mut self.email,
            IdentityKey::FullName => &mut self.full_name,
            IdentityKey::PhoneNumber => &mut self.phone_number,
        }
    }

    pub fn primary_count(&self) -> usize {
        [
            self.uid,
            self.id_card_number,
            self.email,
            self.full_name,
            self.phone_number,
        ]
        .iter()
        .filter(|flags| flags.primary)
        .count()
    }
}
