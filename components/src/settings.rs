use web_sys::{HtmlInputElement, InputEvent, MouseEvent};
use yew::{html, Component, Context, Html, NodeRef, Properties, TargetCast};

use deathreps_sdk::api;
use deathreps_sdk::error::Error;
use deathreps_sdk::model::notification::Notification;
use deathreps_sdk::model::settings::{
    clamp_multiplier, clamp_reps, ExerciseSettings, GameMultiplier, MULTIPLIER_MAX,
    MULTIPLIER_MIN, MULTIPLIER_STEP, REPS_MAX, REPS_MIN,
};

use crate::constant::{ADD_OVERRIDE, LOADING, SAVE, SETTINGS_SAVED};

#[derive(Properties, PartialEq, Debug)]
pub struct SettingsProps {}

/// Exercise settings form: base reps per death plus per-game multiplier
/// overrides. Values are clamped on input; the server stores what it gets.
pub struct SettingsForm {
    settings: ExerciseSettings,
    game_input: NodeRef,
    loading: bool,
    saving: bool,
}

pub enum SettingsMsg {
    Loaded(ExerciseSettings),
    LoadFailed(Error),
    RepsChanged(u32),
    ExerciseChanged(String),
    MultiplierChanged(usize, f64),
    AddOverride,
    RemoveOverride(usize),
    Save,
    Saved,
    SaveFailed(Error),
}

impl Component for SettingsForm {
    type Message = SettingsMsg;
    type Properties = SettingsProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async {
            match api::settings().get_settings().await {
                Ok(settings) => SettingsMsg::Loaded(settings),
                Err(err) => SettingsMsg::LoadFailed(err),
            }
        });
        Self {
            settings: ExerciseSettings::default(),
            game_input: NodeRef::default(),
            loading: true,
            saving: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SettingsMsg::Loaded(settings) => {
                self.settings = settings;
                self.loading = false;
                true
            }
            SettingsMsg::LoadFailed(err) => {
                // fall back to defaults; the form stays usable
                log::error!("load settings failed: {}", err);
                Notification::error(&err).notify();
                self.loading = false;
                true
            }
            SettingsMsg::RepsChanged(reps) => {
                self.settings.reps_per_death = clamp_reps(reps);
                true
            }
            SettingsMsg::ExerciseChanged(exercise) => {
                self.settings.exercise = exercise.into();
                true
            }
            SettingsMsg::MultiplierChanged(index, value) => {
                if let Some(entry) = self.settings.overrides.get_mut(index) {
                    entry.multiplier = clamp_multiplier(value);
                }
                true
            }
            SettingsMsg::AddOverride => {
                let Some(input) = self.game_input.cast::<HtmlInputElement>() else {
                    return false;
                };
                let game = input.value();
                if game.trim().is_empty() {
                    return false;
                }
                input.set_value("");
                self.settings.overrides.push(GameMultiplier {
                    game: game.trim().to_string().into(),
                    multiplier: 1.0,
                });
                true
            }
            SettingsMsg::RemoveOverride(index) => {
                if index < self.settings.overrides.len() {
                    self.settings.overrides.remove(index);
                    return true;
                }
                false
            }
            SettingsMsg::Save => {
                self.saving = true;
                let settings = self.settings.clone();
                ctx.link().send_future(async move {
                    match api::settings().save_settings(&settings).await {
                        Ok(()) => SettingsMsg::Saved,
                        Err(err) => SettingsMsg::SaveFailed(err),
                    }
                });
                true
            }
            SettingsMsg::Saved => {
                self.saving = false;
                Notification::info(SETTINGS_SAVED).notify();
                true
            }
            SettingsMsg::SaveFailed(err) => {
                self.saving = false;
                log::error!("save settings failed: {}", err);
                Notification::error(&err).notify();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <div class="settings-loading">{LOADING}</div> };
        }

        let on_exercise = ctx.link().callback(|e: InputEvent| {
            SettingsMsg::ExerciseChanged(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let on_reps = ctx.link().callback(|e: InputEvent| {
            let value = e
                .target_unchecked_into::<HtmlInputElement>()
                .value()
                .parse()
                .unwrap_or(REPS_MIN);
            SettingsMsg::RepsChanged(value)
        });

        let overrides = self
            .settings
            .overrides
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let value = e
                        .target_unchecked_into::<HtmlInputElement>()
                        .value()
                        .parse()
                        .unwrap_or(1.0);
                    SettingsMsg::MultiplierChanged(index, value)
                });
                let remove = ctx
                    .link()
                    .callback(move |_: MouseEvent| SettingsMsg::RemoveOverride(index));
                html! {
                    <div class="override-row">
                        <span class="game">{&entry.game}</span>
                        <input type="range"
                            min={MULTIPLIER_MIN.to_string()}
                            max={MULTIPLIER_MAX.to_string()}
                            step={MULTIPLIER_STEP.to_string()}
                            value={entry.multiplier.to_string()}
                            {oninput} />
                        <span class="value">{format!("x{}", entry.multiplier)}</span>
                        <button onclick={remove}>{"x"}</button>
                    </div>
                }
            })
            .collect::<Html>();

        let add = ctx
            .link()
            .callback(|_: MouseEvent| SettingsMsg::AddOverride);
        let save = ctx.link().callback(|_: MouseEvent| SettingsMsg::Save);
        html! {
            <div class="settings">
                <div class="settings-row">
                    <label>{"Exercise"}</label>
                    <input type="text" value={self.settings.exercise.clone()} oninput={on_exercise} />
                </div>
                <div class="settings-row">
                    <label>{format!("Reps per death: {}", self.settings.reps_per_death)}</label>
                    <input type="range"
                        min={REPS_MIN.to_string()}
                        max={REPS_MAX.to_string()}
                        value={self.settings.reps_per_death.to_string()}
                        oninput={on_reps} />
                </div>
                <div class="settings-overrides">
                    {overrides}
                    <div class="override-add">
                        <input type="text" ref={self.game_input.clone()} placeholder={"game name"} />
                        <button onclick={add}>{ADD_OVERRIDE}</button>
                    </div>
                </div>
                <button class="settings-save" onclick={save} disabled={self.saving}>{SAVE}</button>
            </div>
        }
    }
}
