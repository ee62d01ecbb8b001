use yew_router::Routable;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Page {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/oauth/callback")]
    OAuthCallback,
    #[at("/friends")]
    Friends,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    Redirect,
}
