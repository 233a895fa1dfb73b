use crate::state::Message;
use dioxus::prelude::*;

#[component]
pub fn Toast(#[props(!optional)] message: Option<Message>, on_close: EventHandler<()>) -> Element {
    rsx! {
        if let Some(msg) = message {
            div {
                class: if msg.is_error { "toast error" } else { "toast success" },
                role: "status",
                span { class: "toast-text", "{msg.text}" }
                button {
                    class: "toast-close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
        }
    }
}
