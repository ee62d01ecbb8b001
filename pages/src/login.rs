use std::rc::Rc;

use yew::{classes, html, Component, Context, Html};
use yewdux::Dispatch;

use deathreps_sdk::state::ThemeState;

/// Static themed page; the actual login is the server-side oauth redirect.
pub struct Login {
    theme_state: Rc<ThemeState>,
    _theme_dis: Dispatch<ThemeState>,
}

pub enum LoginMsg {
    ThemeChanged(Rc<ThemeState>),
}

impl Component for Login {
    type Message = LoginMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let theme_dis =
            Dispatch::global().subscribe_silent(ctx.link().callback(LoginMsg::ThemeChanged));
        Self {
            theme_state: theme_dis.get(),
            _theme_dis: theme_dis,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LoginMsg::ThemeChanged(state) => {
                self.theme_state = state;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class={classes!("page", "login", self.theme_state.theme.class())}>
                <h1>{"deathreps"}</h1>
                <p>{"Every death costs you reps. Sign in to start counting."}</p>
                <a class="discord-login" href="/api/auth/discord">
                    {"Sign in with Discord"}
                </a>
            </div>
        }
    }
}
