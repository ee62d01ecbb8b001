use serde::{Deserialize, Serialize};
use yewdux::Store;

use crate::model::user::User;

/// current authenticated session; an empty `login_user.id` means signed out
#[derive(Default, Debug, Clone, PartialEq, Store)]
pub struct AppState {
    pub login_user: User,
}

/// page theme, persisted across sessions
#[derive(Default, Debug, Clone, PartialEq, Store, Serialize, Deserialize)]
#[store(storage = "local")]
pub struct ThemeState {
    pub theme: Theme,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Crimson,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::Crimson];

    pub fn class(&self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
            Theme::Crimson => "theme-crimson",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Crimson => "Crimson",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Dark" => Ok(Theme::Dark),
            "Light" => Ok(Theme::Light),
            "Crimson" => Ok(Theme::Crimson),
            _ => Err(format!("unknown theme: {}", s)),
        }
    }
}
