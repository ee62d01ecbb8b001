use std::rc::Rc;

use web_sys::MouseEvent;
use yew::{classes, html, Component, Context, Html, Properties};
use yew_router::prelude::Link;
use yewdux::Dispatch;

use components::friends::FriendsView;
use components::notification::NotificationCom;
use components::settings::SettingsForm;
use deathreps_sdk::model::page::Page;
use deathreps_sdk::model::user::User;
use deathreps_sdk::model::LOGIN_USER;
use deathreps_sdk::state::{AppState, Theme, ThemeState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainContent {
    Dashboard,
    Friends,
    Settings,
}

#[derive(Properties, PartialEq, Debug)]
pub struct HomeProps {
    pub content: MainContent,
}

/// Page shell: theme class, top bar with nav and user chip, routed content.
pub struct Home {
    app_state: Rc<AppState>,
    app_dis: Dispatch<AppState>,
    theme_state: Rc<ThemeState>,
    _theme_dis: Dispatch<ThemeState>,
}

pub enum HomeMsg {
    AppStateChanged(Rc<AppState>),
    ThemeChanged(Rc<ThemeState>),
    SwitchTheme(Theme),
    Logout,
}

impl Component for Home {
    type Message = HomeMsg;
    type Properties = HomeProps;

    fn create(ctx: &Context<Self>) -> Self {
        let app_dis =
            Dispatch::global().subscribe_silent(ctx.link().callback(HomeMsg::AppStateChanged));
        let theme_dis =
            Dispatch::global().subscribe_silent(ctx.link().callback(HomeMsg::ThemeChanged));

        // restore the session display data after a refresh; the session
        // itself is a cookie, so no token handling happens here
        if app_dis.get().login_user.id.is_empty() {
            if let Some(raw) = utils::get_local_storage(LOGIN_USER) {
                if let Ok(user) = serde_json::from_str::<User>(&raw) {
                    app_dis.reduce_mut(|s| s.login_user = user);
                }
            }
        }

        Self {
            app_state: app_dis.get(),
            app_dis,
            theme_state: theme_dis.get(),
            _theme_dis: theme_dis,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            HomeMsg::AppStateChanged(state) => {
                self.app_state = state;
                true
            }
            HomeMsg::ThemeChanged(state) => {
                self.theme_state = state;
                true
            }
            HomeMsg::SwitchTheme(theme) => {
                Dispatch::<ThemeState>::global().reduce_mut(|s| s.theme = theme);
                false
            }
            HomeMsg::Logout => {
                utils::remove_local_storage(LOGIN_USER);
                self.app_dis.reduce_mut(|s| s.login_user = User::default());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let user = &self.app_state.login_user;
        let theme = self.theme_state.theme;

        let theme_buttons = Theme::ALL
            .iter()
            .map(|&t| {
                let mut class = classes!("theme-btn");
                if t == theme {
                    class.push("active");
                }
                let onclick = ctx
                    .link()
                    .callback(move |_: MouseEvent| HomeMsg::SwitchTheme(t));
                html! { <button {class} {onclick}>{t.label()}</button> }
            })
            .collect::<Html>();

        let user_chip = if user.id.is_empty() {
            html! { <Link<Page> classes="login-link" to={Page::Login}>{"Sign in"}</Link<Page>> }
        } else {
            let logout = ctx.link().callback(|_: MouseEvent| HomeMsg::Logout);
            html! {
                <div class="user-chip">
                    <img class="avatar"
                        src={utils::get_avatar_url(user.id.as_str(), user.avatar.as_str())} />
                    <span>{&user.username}</span>
                    <button onclick={logout}>{"Log out"}</button>
                </div>
            }
        };

        let content = match ctx.props().content {
            MainContent::Dashboard => html! {
                <div class="dashboard">
                    <h1>{"deathreps"}</h1>
                    <p>{"Die in game, pay in reps. Hook up your Discord server and keep each other honest."}</p>
                </div>
            },
            MainContent::Friends if user.id.is_empty() => html! {
                <div class="dashboard">
                    <p>{"Sign in to see your friends."}</p>
                </div>
            },
            MainContent::Friends => html! { <FriendsView user_id={user.id.clone()} /> },
            MainContent::Settings => html! { <SettingsForm /> },
        };

        html! {
            <div class={classes!("page", theme.class())}>
                <header class="top-bar">
                    <nav>
                        <Link<Page> to={Page::Home}>{"Home"}</Link<Page>>
                        <Link<Page> to={Page::Friends}>{"Friends"}</Link<Page>>
                        <Link<Page> to={Page::Settings}>{"Settings"}</Link<Page>>
                    </nav>
                    <div class="theme-switch">{theme_buttons}</div>
                    {user_chip}
                </header>
                <main>
                    {content}
                </main>
                <NotificationCom />
            </div>
        }
    }
}
