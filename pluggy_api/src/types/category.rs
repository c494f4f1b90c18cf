use serde::{Deserialize, Serialize};

/// Transaction category. Categories form a tree through `parent_id`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub description: String,
    pub parent_id: Option<String>,
    pub parent_description: Option<String>,
}
