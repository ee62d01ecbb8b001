use gloo_net::http::Request;

use crate::api::settings::SettingsApi;
use crate::model::settings::ExerciseSettings;
use crate::Result;

use super::RespStatus;

pub struct SettingsHttp;

#[async_trait::async_trait(?Send)]
impl SettingsApi for SettingsHttp {
    async fn get_settings(&self) -> Result<ExerciseSettings> {
        let settings = Request::get("/api/settings")
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(settings)
    }

    async fn save_settings(&self, settings: &ExerciseSettings) -> Result<()> {
        Request::put("/api/settings")
            .json(settings)?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }
}
