use self::{
    friend::FriendApi,
    http::{FriendHttp, OAuth2Http, SettingsHttp},
    oauth2::OAuth2Api,
    settings::SettingsApi,
};

pub mod friend;
mod http;
mod oauth2;
mod settings;

// The session credential is a same-origin cookie sent implicitly with every
// request; there is no token header to attach.

pub fn friends() -> Box<dyn FriendApi> {
    Box::new(FriendHttp)
}

pub fn settings() -> Box<dyn SettingsApi> {
    Box::new(SettingsHttp)
}

pub fn oauth2() -> Box<dyn OAuth2Api> {
    Box::new(OAuth2Http)
}
