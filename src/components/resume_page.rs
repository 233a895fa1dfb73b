use crate::app::{Route, Services};
use crate::resume::ResumeStore;
use dioxus::prelude::*;

#[component]
fn ResumePage(id: String, heading: &'static str) -> Element {
    let services = use_context::<Services>();

    let resource = use_resource(move || {
        let store = services.store.clone();
        let id = id.clone();
        async move {
            store
                .list_resumes()
                .await
                .ok()
                .and_then(|resumes| resumes.into_iter().find(|r| r.id == id))
                .map(|r| r.title)
        }
    });

    let title = match &*resource.read() {
        Some(Some(title)) => title.clone(),
        Some(None) => "Unknown resume".to_string(),
        None => "Loading...".to_string(),
    };

    rsx! {
        div { class: "resume-page",
            Link { class: "back-link", to: Route::Dashboard {}, "← Back to dashboard" }
            h1 { "{heading}" }
            h2 { class: "resume-title", "{title}" }
        }
    }
}

#[component]
pub fn PersonalDetails(id: String) -> Element {
    rsx! {
        ResumePage { id: id, heading: "Personal Details" }
    }
}

#[component]
pub fn PreviewResume(id: String) -> Element {
    rsx! {
        ResumePage { id: id, heading: "Preview Resume" }
    }
}
