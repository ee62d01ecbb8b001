use yew::AttrValue;
use yewdux::{Dispatch, Store};

use crate::error::Error;

/// Single-slot global notification channel. Publishing replaces whatever is
/// currently showing; the toast component clears it after `delay` ms.
#[derive(Default, Debug, Clone, PartialEq, Store)]
pub struct Notification {
    pub id: i64,
    pub content: AttrValue,
    pub delay: u32,
    pub type_: NotificationType,
}

impl Notification {
    pub fn info(content: impl ToString) -> Self {
        Self {
            id: chrono::Utc::now().timestamp_millis(),
            content: content.to_string().into(),
            type_: NotificationType::Info,
            delay: 3000,
        }
    }

    pub fn error(err: &Error) -> Self {
        Self {
            id: chrono::Utc::now().timestamp_millis(),
            content: err.to_string().into(),
            type_: NotificationType::Error,
            delay: 5000,
        }
    }

    pub fn notify(self) {
        Dispatch::<Notification>::global().set(self);
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationType {
    #[default]
    Info,
    Error,
}
