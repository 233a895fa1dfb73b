use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdAutorenew;
use tracing::warn;

/// Escape closes the dialog unless a delete is in flight.
pub fn dismisses_dialog(key: &Key, is_loading: bool) -> bool {
    *key == Key::Escape && !is_loading
}

#[component]
pub fn DeleteConfirmDialog(
    resume_title: String,
    is_loading: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let description = if resume_title.is_empty() {
        "This action cannot be undone. This will permanently delete your resume.".to_string()
    } else {
        format!(
            "This action cannot be undone. This will permanently delete \"{}\".",
            resume_title
        )
    };

    rsx! {
        div {
            class: "dialog-overlay",
            tabindex: "0",
            onmounted: move |evt: MountedEvent| async move {
                if let Err(e) = evt.set_focus(true).await {
                    warn!(error = ?e, "Failed to focus delete dialog");
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                if dismisses_dialog(&evt.key(), is_loading) {
                    on_cancel.call(());
                }
            },
            onclick: move |_| {
                if !is_loading {
                    on_cancel.call(());
                }
            },
            div {
                class: "delete-confirm-dialog",
                role: "alertdialog",
                onclick: move |evt| evt.stop_propagation(),
                h3 { "Are you absolutely sure?" }
                p { "{description}" }
                div { class: "dialog-buttons",
                    button {
                        class: "secondary",
                        disabled: is_loading,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "primary danger",
                        disabled: is_loading,
                        onclick: move |_| on_confirm.call(()),
                        if is_loading {
                            span { class: "button-busy",
                                Icon {
                                    class: "spin",
                                    width: 16,
                                    height: 16,
                                    icon: MdAutorenew
                                }
                                "Deleting"
                            }
                        } else {
                            "Continue"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_dialog(is_loading: bool) -> String {
        fn dialog_root(is_loading: bool) -> Element {
            rsx! {
                DeleteConfirmDialog {
                    resume_title: "Dev Resume".to_string(),
                    is_loading: is_loading,
                    on_confirm: |_| {},
                    on_cancel: |_| {}
                }
            }
        }

        let mut dom = VirtualDom::new_with_props(dialog_root, is_loading);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_escape_dismisses_when_idle() {
        assert!(dismisses_dialog(&Key::Escape, false));
    }

    #[test]
    fn test_escape_ignored_while_deleting() {
        assert!(!dismisses_dialog(&Key::Escape, true));
    }

    #[test]
    fn test_other_keys_do_not_dismiss() {
        assert!(!dismisses_dialog(&Key::Enter, false));
        assert!(!dismisses_dialog(&Key::Character("q".to_string()), false));
    }

    #[test]
    fn test_overlay_is_focusable() {
        let html = render_dialog(false);
        assert!(html.contains("tabindex=\"0\""));
        assert!(html.contains("Continue"));
    }

    #[test]
    fn test_loading_shows_deleting_label() {
        let html = render_dialog(true);
        assert!(html.contains("Deleting"));
        assert!(!html.contains("Continue"));
    }
}
