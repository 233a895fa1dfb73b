use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdDescription;

#[component]
pub fn Header(count: usize) -> Element {
    rsx! {
        div { class: "header",
            Icon {
                width: 28,
                height: 28,
                icon: MdDescription
            }
            h1 { "My Resumes" }
            span { class: "resume-count", "{count}" }
        }
    }
}
