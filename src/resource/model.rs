use serde::{Deserialize, Serialize};

/// Decoded payload of the remote post resource.
///
/// Extra fields on the wire (`id`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
}
