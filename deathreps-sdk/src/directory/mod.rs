use std::cell::RefCell;
use std::collections::HashMap;

use once_cell::sync::OnceCell;
use yew::AttrValue;

use crate::model::user::UserProfile;

static DIRECTORY: OnceCell<UserDirectory> = OnceCell::new();

/// Process-wide id -> profile cache, merged from every successful list
/// fetch regardless of origin. Lives for the application session.
pub fn directory() -> &'static UserDirectory {
    DIRECTORY.get_or_init(UserDirectory::default)
}

// single-threaded wasm; every write is an independent keyed upsert
unsafe impl Sync for UserDirectory {}
unsafe impl Send for UserDirectory {}

#[derive(Debug, Default)]
pub struct UserDirectory {
    profiles: RefCell<HashMap<AttrValue, UserProfile>>,
}

impl UserDirectory {
    /// Upserts each profile by id, replacing any prior snapshot wholesale.
    /// Profiles without an id are dropped; no other validation.
    pub fn merge(&self, profiles: &[UserProfile]) {
        let mut map = self.profiles.borrow_mut();
        for profile in profiles {
            if profile.id.is_empty() {
                continue;
            }
            map.insert(profile.id.clone(), profile.clone());
        }
    }

    /// cached snapshot, or a placeholder the caller can render
    pub fn get(&self, id: &str) -> UserProfile {
        self.profiles
            .borrow()
            .get(id)
            .cloned()
            .unwrap_or_else(|| UserProfile::unknown(id))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn profile(id: &str, username: &str, avatar: &str) -> UserProfile {
        UserProfile {
            id: id.to_string().into(),
            username: username.to_string().into(),
            avatar: avatar.to_string().into(),
        }
    }

    #[test]
    fn merge_is_idempotent() {
        let dir = UserDirectory::default();
        let p = profile("123", "grim", "a1");
        dir.merge(&[p.clone()]);
        let once = dir.get("123");
        dir.merge(&[p]);
        assert_eq!(dir.get("123"), once);
    }

    #[test]
    fn newer_snapshot_replaces_wholesale() {
        let dir = UserDirectory::default();
        dir.merge(&[profile("123", "grim", "a1")]);
        // the new snapshot has no avatar; the old one must not leak through
        dir.merge(&[profile("123", "reaper", "")]);

        let cached = dir.get("123");
        assert_eq!(cached.username, "reaper");
        assert!(cached.avatar.is_empty());
    }

    #[test]
    fn unknown_id_yields_a_sentinel() {
        let dir = UserDirectory::default();
        let cached = dir.get("999");
        assert_eq!(cached.id, "999");
        assert_eq!(cached.username, "unknown user");
    }

    #[test]
    fn profiles_without_an_id_are_skipped() {
        let dir = UserDirectory::default();
        dir.merge(&[profile("", "ghost", "")]);
        assert_eq!(dir.get("").username, "unknown user");
    }
}
