pub mod friend;
pub mod notification;
pub mod page;
pub mod settings;
pub mod user;

/// local storage key for the signed-in user snapshot
pub const LOGIN_USER: &str = "dr-login-user";
