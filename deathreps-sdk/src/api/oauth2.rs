use crate::model::user::LoginResp;
use crate::Result;

/// Opaque session provider: the exchange sets the session cookie, the reply
/// only carries the user's display data.
#[async_trait::async_trait(?Send)]
pub trait OAuth2Api {
    async fn discord(&self, code: &str, state: &str) -> Result<LoginResp>;
}
