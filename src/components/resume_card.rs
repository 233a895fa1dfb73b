use crate::app::Route;
use crate::components::CardMenu;
use crate::resume::Resume;
use dioxus::prelude::*;

#[component]
pub fn ResumeCard(resume: Resume, on_delete: EventHandler<String>) -> Element {
    let created = resume.created_display();
    let edit = Route::PersonalDetails {
        id: resume.id.clone(),
    };

    rsx! {
        div { class: "resume-card-frame",
            div { class: "card resume-card",
                CardMenu { resume_id: resume.id.clone(), on_delete: on_delete }
                div {
                    h2 {
                        class: "resume-title",
                        onclick: move |_| {
                            navigator().push(edit.clone());
                        },
                        "{resume.title}"
                    }
                    div { class: "resume-title-underline" }
                }
                p { class: "resume-created",
                    "Created: "
                    span { class: "resume-created-date", "{created}" }
                }
            }
        }
    }
}
