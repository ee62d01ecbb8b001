pub mod add_friend;
pub mod constant;
pub mod friends;
pub mod notification;
pub mod settings;
