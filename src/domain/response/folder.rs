use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// One entry of `folders`.
pub struct Folder {
    pub folder_id: i64,
    pub name: String,
    pub date_created: String,
    /// `campaign` or `autoresponder`.
    #[serde(rename = "type")]
    pub kind: String,
}
