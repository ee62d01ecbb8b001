use web_sys::{HtmlInputElement, MouseEvent};
use yew::{html, Callback, Component, Context, Html, NodeRef, Properties};

use deathreps_sdk::api;
use deathreps_sdk::error::Error;
use deathreps_sdk::model::notification::Notification;

use crate::constant::{ADD_FRIEND_PROMPT, REQUEST_SENT};

#[derive(Properties, PartialEq, Debug)]
pub struct AddFriendProps {
    pub on_added: Callback<()>,
}

/// Discord-id input plus send button. Bad ids are rejected client-side by
/// the repository before any request goes out.
pub struct AddFriend {
    input: NodeRef,
    sending: bool,
}

pub enum AddFriendMsg {
    Submit,
    Sent,
    Failed(Error),
}

impl Component for AddFriend {
    type Message = AddFriendMsg;
    type Properties = AddFriendProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            input: NodeRef::default(),
            sending: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AddFriendMsg::Submit => {
                let Some(input) = self.input.cast::<HtmlInputElement>() else {
                    return false;
                };
                let target_id = input.value();
                self.sending = true;
                ctx.link().send_future(async move {
                    match api::friends().create_friend_request(target_id.trim()).await {
                        Ok(()) => AddFriendMsg::Sent,
                        Err(err) => AddFriendMsg::Failed(err),
                    }
                });
                true
            }
            AddFriendMsg::Sent => {
                self.sending = false;
                if let Some(input) = self.input.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
                Notification::info(REQUEST_SENT).notify();
                ctx.props().on_added.emit(());
                true
            }
            AddFriendMsg::Failed(err) => {
                self.sending = false;
                log::warn!("friend request rejected: {}", err);
                Notification::error(&err).notify();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(|_: MouseEvent| AddFriendMsg::Submit);
        html! {
            <div class="add-friend">
                <input type="text"
                    ref={self.input.clone()}
                    placeholder={ADD_FRIEND_PROMPT}
                    disabled={self.sending} />
                <button {onclick} disabled={self.sending}>{"Send"}</button>
            </div>
        }
    }
}
