use serde::{Deserialize, Serialize};
use yew::AttrValue;

/// the authenticated user; the session itself lives in a cookie
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: AttrValue,
    pub username: AttrValue,
    #[serde(default)]
    pub avatar: AttrValue,
}

/// Cached public display data of any user appearing in friendship records.
/// Entries are immutable snapshots, replaced wholesale on refresh.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: AttrValue,
    pub username: AttrValue,
    #[serde(default)]
    pub avatar: AttrValue,
}

impl UserProfile {
    /// placeholder for ids the directory has never seen
    pub fn unknown(id: &str) -> Self {
        Self {
            id: id.to_string().into(),
            username: "unknown user".into(),
            avatar: AttrValue::default(),
        }
    }
}

/// oauth code exchange reply
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
pub struct LoginResp {
    pub user: User,
}
