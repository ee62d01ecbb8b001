use async_trait::async_trait;
use gloo_net::http::Response;
use serde::Deserialize;

pub use friend::*;
pub use oauth2::*;
pub use settings::*;

use crate::error::Error;
use crate::Result;

mod friend;
mod oauth2;
mod settings;

/// non-2xx body shape; the string is user-visible, report it verbatim
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[async_trait(?Send)]
pub trait RespStatus: Sized {
    async fn success(self) -> Result<Self>;
}

#[async_trait(?Send)]
impl RespStatus for Response {
    async fn success(self) -> Result<Self> {
        let status = self.status();
        if (200..=299).contains(&status) {
            return Ok(self);
        }
        let message = self
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("request failed with status {}", status));
        Err(match status {
            401 => Error::Unauthorized,
            404 => Error::NotFound(message),
            409 => Error::Duplicate(message),
            _ => Error::Server(message),
        })
    }
}
