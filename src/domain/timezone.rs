use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timezone {
    pub name: String,
    /// Seconds east of UTC.
    pub offset: i64,
    pub offset_hours: String,
    #[serde(rename = "abbr")]
    pub abbreviation: String,
    #[serde(rename = "abbrName")]
    pub abbreviation_name: Option<String>,
    pub is_dst: bool,
}
