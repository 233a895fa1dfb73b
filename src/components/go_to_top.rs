use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdArrowUpward;
use tracing::warn;

const SCROLL_TO_TOP: &str = "window.scrollTo({ top: 0, behavior: 'smooth' });";

#[component]
pub fn GoToTop() -> Element {
    rsx! {
        button {
            class: "go-to-top",
            title: "Go to top",
            onclick: move |_| {
                spawn(async move {
                    if let Err(e) = document::eval(SCROLL_TO_TOP).await {
                        warn!(error = ?e, "Failed to scroll to top");
                    }
                });
            },
            Icon {
                width: 20,
                height: 20,
                icon: MdArrowUpward
            }
        }
    }
}
