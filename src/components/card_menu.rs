use crate::app::Route;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdMoreVert;

#[component]
pub fn CardMenu(resume_id: String, on_delete: EventHandler<String>) -> Element {
    let mut open = use_signal(|| false);

    let edit = Route::PersonalDetails {
        id: resume_id.clone(),
    };
    let preview = Route::PreviewResume {
        id: resume_id.clone(),
    };
    // Download opens the preview page
    let download = preview.clone();

    rsx! {
        div { class: "card-menu",
            button {
                class: "card-menu-trigger",
                title: "Actions",
                onclick: move |_| open.set(!open()),
                Icon {
                    width: 20,
                    height: 20,
                    icon: MdMoreVert
                }
            }
            if open() {
                div {
                    class: "card-menu-backdrop",
                    onclick: move |_| open.set(false),
                }
                div { class: "card-menu-content",
                    button {
                        class: "card-menu-item",
                        onclick: move |_| {
                            navigator().push(edit.clone());
                        },
                        "Edit"
                    }
                    div { class: "card-menu-separator" }
                    button {
                        class: "card-menu-item",
                        onclick: move |_| {
                            navigator().push(preview.clone());
                        },
                        "Preview"
                    }
                    div { class: "card-menu-separator" }
                    button {
                        class: "card-menu-item",
                        onclick: move |_| {
                            navigator().push(download.clone());
                        },
                        "Download"
                    }
                    div { class: "card-menu-separator" }
                    button {
                        class: "card-menu-item danger",
                        onclick: move |_| {
                            open.set(false);
                            on_delete.call(resume_id.clone());
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}
