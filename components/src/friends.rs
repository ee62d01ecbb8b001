use web_sys::MouseEvent;
use yew::{classes, html, AttrValue, Component, Context, Html, Properties};

use deathreps_sdk::api;
use deathreps_sdk::api::friend::{mutate_then_refetch, FriendsResponse, Mutation};
use deathreps_sdk::directory::directory;
use deathreps_sdk::error::Error;
use deathreps_sdk::model::friend::{FriendTab, Friendship, FriendsSnapshot, LoadState};
use deathreps_sdk::model::notification::Notification;

use crate::add_friend::AddFriend;
use crate::constant::{
    ACCEPT, BLOCK, LOADING, NO_FRIENDS, REFRESH, REJECT, REMOVE, RETRY, UNBLOCK,
};

#[derive(Properties, PartialEq, Debug)]
pub struct FriendsProps {
    pub user_id: AttrValue,
}

/// The friends view. Owns the relationship snapshot for as long as it is
/// mounted; the list is refetched on mount and after every successful
/// mutation, never patched locally.
pub struct FriendsView {
    snapshot: FriendsSnapshot,
    active_tab: FriendTab,
}

pub enum FriendsMsg {
    Refresh,
    Loaded(FriendsResponse),
    LoadFailed(Error),
    SwitchTab(FriendTab),
    Mutate(Mutation),
}

impl Component for FriendsView {
    type Message = FriendsMsg;
    type Properties = FriendsProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(FriendsMsg::Refresh);
        Self {
            snapshot: FriendsSnapshot::default(),
            active_tab: FriendTab::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FriendsMsg::Refresh => {
                self.snapshot.begin_loading();
                // a refresh racing an in-flight fetch is fine: the last
                // response to arrive overwrites the snapshot, and yew drops
                // messages for a dismounted component
                ctx.link().send_future(async {
                    match api::friends().list_friendships().await {
                        Ok(resp) => FriendsMsg::Loaded(resp),
                        Err(err) => FriendsMsg::LoadFailed(err),
                    }
                });
                true
            }
            FriendsMsg::Loaded(resp) => {
                directory().merge(&resp.users);
                self.snapshot.resolve(resp.friendships);
                true
            }
            FriendsMsg::LoadFailed(err) => {
                log::error!("friends request failed: {}", err);
                Notification::error(&err).notify();
                self.snapshot.fail(err.to_string().into());
                true
            }
            FriendsMsg::SwitchTab(tab) => {
                // projection only; never triggers a fetch
                let changed = tab != self.active_tab;
                self.active_tab = tab;
                changed
            }
            FriendsMsg::Mutate(mutation) => {
                self.snapshot.begin_loading();
                ctx.link().send_future(async move {
                    let api = api::friends();
                    match mutate_then_refetch(api.as_ref(), mutation).await {
                        Ok(resp) => FriendsMsg::Loaded(resp),
                        Err(err) => FriendsMsg::LoadFailed(err),
                    }
                });
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let tabs = FriendTab::ALL
            .iter()
            .map(|&tab| {
                let mut class = classes!("friends-tab");
                if tab == self.active_tab {
                    class.push("active");
                }
                let onclick = ctx
                    .link()
                    .callback(move |_: MouseEvent| FriendsMsg::SwitchTab(tab));
                html! {
                    <button {class} {onclick}>{tab.label()}</button>
                }
            })
            .collect::<Html>();

        let visible = self.active_tab.filter(&self.snapshot.list);
        let rows = if visible.is_empty() {
            html! { <div class="friends-empty">{NO_FRIENDS}</div> }
        } else {
            visible
                .into_iter()
                .map(|f| self.render_row(ctx, f))
                .collect::<Html>()
        };

        let status_bar = match &self.snapshot.state {
            LoadState::Loading => html! { <div class="friends-loading">{LOADING}</div> },
            LoadState::Failed(msg) => {
                let onclick = ctx.link().callback(|_: MouseEvent| FriendsMsg::Refresh);
                html! {
                    <div class="friends-error">
                        <span>{msg.clone()}</span>
                        <button {onclick}>{RETRY}</button>
                    </div>
                }
            }
            LoadState::Idle | LoadState::Ready => html!(),
        };

        let on_added = ctx.link().callback(|_: ()| FriendsMsg::Refresh);
        let refresh = ctx.link().callback(|_: MouseEvent| FriendsMsg::Refresh);
        html! {
            <div class="friends">
                <AddFriend {on_added} />
                <div class="friends-tabs">
                    {tabs}
                    <button class="friends-refresh" onclick={refresh}>{REFRESH}</button>
                </div>
                {status_bar}
                <div class="friends-list">
                    {rows}
                </div>
            </div>
        }
    }
}

impl FriendsView {
    fn render_row(&self, ctx: &Context<Self>, friendship: &Friendship) -> Html {
        let other = friendship.other_party(ctx.props().user_id.as_str());
        let profile = directory().get(other.as_str());

        let action = |label: &'static str, mutation: Mutation| {
            let onclick = ctx
                .link()
                .callback(move |_: MouseEvent| FriendsMsg::Mutate(mutation));
            html! { <button {onclick}>{label}</button> }
        };
        let id = friendship.id;
        let actions = match self.active_tab {
            FriendTab::Overview => html! {
                <>
                    {action(BLOCK, Mutation::Block(id))}
                    {action(REMOVE, Mutation::Remove(id))}
                </>
            },
            FriendTab::Blocked => action(UNBLOCK, Mutation::Unblock(id)),
            FriendTab::Incoming => html! {
                <>
                    {action(ACCEPT, Mutation::Accept(id))}
                    {action(REJECT, Mutation::Remove(id))}
                </>
            },
        };

        html! {
            <div class="friend-item" key={id}>
                <img class="avatar"
                    src={utils::get_avatar_url(profile.id.as_str(), profile.avatar.as_str())} />
                <div class="friend-info">
                    <span class="name">{&profile.username}</span>
                    <span class="time">{utils::format_time(friendship.created_at)}</span>
                </div>
                <div class="friend-actions">
                    {actions}
                </div>
            </div>
        }
    }
}
