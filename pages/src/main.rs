mod home;
mod login;
mod oauth2;

use yew::prelude::*;
use yew_router::{BrowserRouter, Switch};

use deathreps_sdk::model::page::Page;

use crate::home::{Home, MainContent};
use crate::login::Login;
use crate::oauth2::OAuth2;

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Page> render={move |page|
                match page {
                    Page::Home => html!{<Home content={MainContent::Dashboard}/>},
                    Page::Friends => html!{<Home content={MainContent::Friends}/>},
                    Page::Settings => html!{<Home content={MainContent::Settings}/>},
                    Page::Login => html!{<Login/>},
                    Page::OAuthCallback => html!{<OAuth2/>},
                    Page::Redirect => html!{<Home content={MainContent::Dashboard}/>}}
            }/>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
