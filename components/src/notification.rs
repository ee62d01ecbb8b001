use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::{classes, html, Component, Context, Html, Properties};
use yewdux::Dispatch;

use deathreps_sdk::model::notification::{Notification, NotificationType};

/// Single-slot toast: shows the most recent notification and clears it
/// after its delay. A newer notification replaces the pending one; dropping
/// the old `Timeout` cancels it.
pub struct NotificationCom {
    current: Option<(Rc<Notification>, Timeout)>,
    _noti_dis: Dispatch<Notification>,
}

#[derive(Clone, PartialEq, Properties)]
pub struct Props {}

pub enum Msg {
    Changed(Rc<Notification>),
    Dismiss(i64),
}

impl Component for NotificationCom {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let _noti_dis = Dispatch::global().subscribe_silent(ctx.link().callback(Msg::Changed));
        Self {
            current: None,
            _noti_dis,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Changed(noti) => {
                if noti.content.is_empty() {
                    self.current = None;
                    return true;
                }
                let id = noti.id;
                let ctx = ctx.link().clone();
                let timeout = Timeout::new(noti.delay, move || ctx.send_message(Msg::Dismiss(id)));
                self.current = Some((noti, timeout));
                true
            }
            Msg::Dismiss(id) => {
                // a stale timeout must not clear a newer notification
                if matches!(&self.current, Some((noti, _)) if noti.id == id) {
                    self.current = None;
                    return true;
                }
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let item = self.current.as_ref().map(|(noti, _)| {
            let mut class = classes!("notification-item");
            match noti.type_ {
                NotificationType::Info => class.push("info"),
                NotificationType::Error => class.push("error"),
            }
            html! {
                <div {class}>
                    {noti.content.clone()}
                </div>
            }
        });
        html! {
            <div class="notify">
                {item}
            </div>
        }
    }
}
