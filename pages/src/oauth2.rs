use web_sys::UrlSearchParams;
use yew::{html, AttrValue, Component, Html};
use yew_router::scope_ext::RouterScopeExt;
use yewdux::Dispatch;

use deathreps_sdk::api;
use deathreps_sdk::model::page::Page;
use deathreps_sdk::model::user::User;
use deathreps_sdk::model::LOGIN_USER;
use deathreps_sdk::state::AppState;

/// Discord oauth callback: exchanges code/state, stores the user, goes home.
pub struct OAuth2 {
    err_msg: AttrValue,
}

pub enum Msg {
    Success(Box<User>),
    Failed(AttrValue),
}

impl Component for OAuth2 {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &yew::Context<Self>) -> Self {
        let search = gloo::utils::window().location().search().unwrap_or_default();
        let (code, state) = match UrlSearchParams::new_with_str(&search) {
            Ok(params) => (
                params.get("code").unwrap_or_default(),
                params.get("state").unwrap_or_default(),
            ),
            Err(_) => (String::new(), String::new()),
        };

        ctx.link().send_future(async move {
            match api::oauth2().discord(&code, &state).await {
                Ok(resp) => Msg::Success(Box::new(resp.user)),
                Err(err) => Msg::Failed(err.to_string().into()),
            }
        });
        Self {
            err_msg: AttrValue::default(),
        }
    }

    fn update(&mut self, ctx: &yew::Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Success(user) => {
                // the session cookie is already set; keep the display data
                // so a refresh does not blank the header
                if let Ok(raw) = serde_json::to_string(&*user) {
                    utils::set_local_storage(LOGIN_USER, &raw);
                }
                Dispatch::<AppState>::global().reduce_mut(|s| s.login_user = *user);
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Page::Home);
                }
                false
            }
            Msg::Failed(err) => {
                log::error!("discord login failed: {}", err);
                self.err_msg = err;
                true
            }
        }
    }

    fn view(&self, _ctx: &yew::Context<Self>) -> Html {
        let content = if self.err_msg.is_empty() {
            html!(<p>{ "Signing in..." }</p>)
        } else {
            html!(
                <div>
                    <p>{ "Sign-in failed" }</p>
                    <p>{ self.err_msg.clone() }</p>
                </div>
            )
        };
        html! {
            <div class="oauth2-signing-in">
                { content }
            </div>
        }
    }
}
