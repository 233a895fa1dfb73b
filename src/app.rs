use crate::components::*;
use crate::resume::{
    AppConfig, FileLocalStore, JsonResumeStore, Resume, ResumeStore, delete_resume_and_skills,
};
use crate::state::{AppState, DeleteState, Message};
use dioxus::prelude::*;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, error, warn};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/dashboard/:id/personal-details")]
    PersonalDetails { id: String },
    #[route("/dashboard/:id/preview-resume")]
    PreviewResume { id: String },
}

/// Collaborators shared by every page through the context.
#[derive(Clone, Debug)]
pub struct Services {
    pub store: JsonResumeStore,
    pub local: FileLocalStore,
    pub toast_duration: Duration,
}

impl Services {
    pub fn from_config(config: &AppConfig) -> Self {
        let resumes_path = config.resumes_path().unwrap_or_else(|e| {
            warn!(error = %e, "No data directory, using working directory for resumes");
            PathBuf::from("resumes.json")
        });
        let local_store_path = config.local_store_path().unwrap_or_else(|e| {
            warn!(error = %e, "No data directory, using working directory for local storage");
            PathBuf::from("local-storage.json")
        });

        let services = Self {
            store: JsonResumeStore::new(resumes_path),
            local: FileLocalStore::new(local_store_path),
            toast_duration: Duration::from_millis(config.toast_duration_ms),
        };

        debug!(
            resumes = %services.store.path().display(),
            local_store = %services.local.path().display(),
            "Resolved storage paths"
        );

        services
    }
}

/// Expects the `AppConfig` loaded by `main` in the launch context.
#[allow(non_snake_case)]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    use_context_provider(|| Services::from_config(&config));

    rsx! {
        style { {include_str!("../assets/main.css")} }
        div { class: "app-container",
            Router::<Route> {}
        }
    }
}

#[component]
fn Dashboard() -> Element {
    let services = use_context::<Services>();
    let mut state = use_signal(AppState::new);

    let services_for_load = services.clone();
    use_effect(move || {
        let services = services_for_load.clone();
        spawn(async move {
            refresh_resumes(state, services).await;
        });
    });

    let on_delete = move |id: String| {
        state.write().request_delete(id);
    };

    let on_cancel = move |_: ()| {
        state.write().cancel_delete();
    };

    let on_confirm = move |_: ()| {
        let services = services.clone();
        spawn(async move {
            confirm_delete(state, services).await;
        });
    };

    let on_close_message = move |_: ()| {
        state.write().clear_message();
    };

    let (resumes, delete, pending_title, message) = {
        let state = state.read();
        (
            state.resumes.clone(),
            state.delete.clone(),
            state.pending_title().map(str::to_string).unwrap_or_default(),
            state.message.clone(),
        )
    };

    rsx! {
        DashboardView {
            resumes: resumes,
            delete: delete,
            pending_title: pending_title,
            message: message,
            on_delete: on_delete,
            on_confirm: on_confirm,
            on_cancel: on_cancel,
            on_close_message: on_close_message
        }
    }
}

#[component]
fn DashboardView(
    resumes: Vec<Resume>,
    delete: DeleteState,
    pending_title: String,
    #[props(!optional)] message: Option<Message>,
    on_delete: EventHandler<String>,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
    on_close_message: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "dashboard",
            Header { count: resumes.len() }
            ResumeGrid {
                resumes: resumes.clone(),
                on_delete: on_delete
            }
            if delete.is_dialog_open() {
                DeleteConfirmDialog {
                    resume_title: pending_title,
                    is_loading: delete.is_loading(),
                    on_confirm: on_confirm,
                    on_cancel: on_cancel
                }
            }
            Toast { message: message, on_close: on_close_message }
            GoToTop {}
        }
    }
}

async fn refresh_resumes(mut state: Signal<AppState>, services: Services) {
    match services.store.list_resumes().await {
        Ok(resumes) => {
            debug!(count = resumes.len(), "Loaded resumes");
            state.write().set_resumes(resumes);
        }
        Err(e) => {
            error!(error = %e, "Failed to load resumes");
            let seq = state
                .write()
                .set_message(Message::error(format!("Failed to load resumes: {}", e)));
            schedule_message_expiry(state, seq, services.toast_duration);
        }
    }
}

async fn confirm_delete(mut state: Signal<AppState>, services: Services) {
    let Some(id) = state.write().begin_delete() else {
        return;
    };

    let result = delete_resume_and_skills(&services.store, &services.local, &id).await;

    let seq = {
        let mut write_state = state.write();
        write_state.finish_delete(&result);
        write_state.message_seq()
    };
    schedule_message_expiry(state, seq, services.toast_duration);

    if result.is_ok() {
        refresh_resumes(state, services).await;
    }
}

fn schedule_message_expiry(mut state: Signal<AppState>, seq: u64, after: Duration) {
    spawn(async move {
        tokio::time::sleep(after).await;
        state.write().expire_message(seq);
    });
}
