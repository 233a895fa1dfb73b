use crate::components::ResumeCard;
use crate::resume::Resume;
use dioxus::prelude::*;

#[component]
pub fn ResumeGrid(resumes: Vec<Resume>, on_delete: EventHandler<String>) -> Element {
    rsx! {
        div { class: "resume-grid",
            for resume in resumes {
                ResumeCard {
                    key: "{resume.id}",
                    resume: resume.clone(),
                    on_delete: on_delete
                }
            }
        }
    }
}
