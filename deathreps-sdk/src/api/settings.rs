use crate::model::settings::ExerciseSettings;
use crate::Result;

#[async_trait::async_trait(?Send)]
pub trait SettingsApi {
    async fn get_settings(&self) -> Result<ExerciseSettings>;

    async fn save_settings(&self, settings: &ExerciseSettings) -> Result<()>;
}
