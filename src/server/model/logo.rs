use serde::Serialize;

/// Image available for a consent page header or background.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub id: i32,
    pub file_name: String,
    pub original_file_name: String,
    pub url: String,
}
