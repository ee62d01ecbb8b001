use gloo::storage::{LocalStorage, Storage};

const AVATAR_BASE: &str = "https://cdn.discordapp.com/avatars";
const DEFAULT_AVATAR: &str = "https://cdn.discordapp.com/embed/avatars/0.png";

/// discord cdn avatar url; falls back to the default embed avatar
pub fn get_avatar_url(user_id: &str, avatar: &str) -> String {
    if user_id.is_empty() || avatar.is_empty() {
        DEFAULT_AVATAR.to_string()
    } else {
        format!("{}/{}/{}.png", AVATAR_BASE, user_id, avatar)
    }
}

pub fn get_local_storage(key: &str) -> Option<String> {
    LocalStorage::get(key).ok()
}

pub fn set_local_storage(key: &str, value: &str) {
    if let Err(err) = LocalStorage::set(key, value) {
        log::error!("write local storage {} failed: {:?}", key, err);
    }
}

pub fn remove_local_storage(key: &str) {
    LocalStorage::delete(key);
}

/// epoch millis to a short calendar date for list rows
pub fn format_time(timestamp_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms)
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn avatar_url_falls_back_without_a_hash() {
        assert_eq!(get_avatar_url("123", ""), DEFAULT_AVATAR);
        assert_eq!(
            get_avatar_url("123", "a1b2"),
            "https://cdn.discordapp.com/avatars/123/a1b2.png"
        );
    }
}
