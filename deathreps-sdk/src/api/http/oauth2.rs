use gloo_net::http::Request;

use crate::api::oauth2::OAuth2Api;
use crate::model::user::LoginResp;
use crate::Result;

use super::RespStatus;

pub struct OAuth2Http;

#[async_trait::async_trait(?Send)]
impl OAuth2Api for OAuth2Http {
    async fn discord(&self, code: &str, state: &str) -> Result<LoginResp> {
        let resp = Request::get(&format!(
            "/api/auth/discord/callback?code={}&state={}",
            code, state
        ))
        .send()
        .await?
        .success()
        .await?
        .json()
        .await?;
        Ok(resp)
    }
}
