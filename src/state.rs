use crate::resume::Resume;

pub const DELETE_SUCCESS_MESSAGE: &str = "Resume deleted successfully!";
pub const DELETE_FAILURE_MESSAGE: &str = "Failed to delete resume";

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum DeleteState {
    #[default]
    Idle,
    Confirming { id: String },
    Deleting { id: String },
}

impl DeleteState {
    pub fn selection(&self) -> Option<&str> {
        match self {
            DeleteState::Idle => None,
            DeleteState::Confirming { id } | DeleteState::Deleting { id } => Some(id),
        }
    }

    /// The confirmation dialog is shown exactly while a selection exists.
    pub fn is_dialog_open(&self) -> bool {
        self.selection().is_some()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DeleteState::Deleting { .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub resumes: Vec<Resume>,
    pub delete: DeleteState,
    pub message: Option<Message>,
    message_seq: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            resumes: Vec::new(),
            delete: DeleteState::Idle,
            message: None,
            message_seq: 0,
        }
    }

    pub fn set_resumes(&mut self, resumes: Vec<Resume>) {
        self.resumes = resumes;
    }

    pub fn pending_title(&self) -> Option<&str> {
        let id = self.delete.selection()?;
        self.resumes
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.title.as_str())
    }

    /// Returns the sequence number of the new message.
    pub fn set_message(&mut self, message: Message) -> u64 {
        self.message_seq += 1;
        self.message = Some(message);
        self.message_seq
    }

    pub fn message_seq(&self) -> u64 {
        self.message_seq
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Clears the message only if nothing newer replaced it since `seq`.
    pub fn expire_message(&mut self, seq: u64) {
        if self.message_seq == seq {
            self.message = None;
        }
    }

    pub fn request_delete(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if id.is_empty() || self.delete.is_loading() {
            return false;
        }
        self.delete = DeleteState::Confirming { id };
        true
    }

    pub fn cancel_delete(&mut self) -> bool {
        match self.delete {
            DeleteState::Confirming { .. } => {
                self.delete = DeleteState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Moves Confirming to Deleting and hands back the id to delete.
    pub fn begin_delete(&mut self) -> Option<String> {
        match std::mem::take(&mut self.delete) {
            DeleteState::Confirming { id } => {
                self.delete = DeleteState::Deleting { id: id.clone() };
                Some(id)
            }
            other => {
                self.delete = other;
                None
            }
        }
    }

    /// Leaves Deleting. A failed delete keeps the selection so the dialog
    /// stays open for a retry or a cancel.
    pub fn finish_delete<E>(&mut self, result: &Result<(), E>) {
        let id = match std::mem::take(&mut self.delete) {
            DeleteState::Deleting { id } => id,
            other => {
                self.delete = other;
                return;
            }
        };

        match result {
            Ok(()) => {
                self.resumes.retain(|r| r.id != id);
                self.set_message(Message::success(DELETE_SUCCESS_MESSAGE));
            }
            Err(_) => {
                self.delete = DeleteState::Confirming { id };
                self.set_message(Message::error(DELETE_FAILURE_MESSAGE));
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(ids: &[&str]) -> AppState {
        let mut state = AppState::new();
        state.set_resumes(
            ids.iter()
                .map(|id| Resume::new(*id, format!("Resume {id}"), "2024-01-05"))
                .collect(),
        );
        state
    }

    #[test]
    fn test_idle_by_default() {
        let state = AppState::new();
        assert_eq!(state.delete, DeleteState::Idle);
        assert!(!state.delete.is_dialog_open());
        assert!(!state.delete.is_loading());
    }

    #[test]
    fn test_request_delete_selects_that_card_only() {
        let mut state = state_with(&["1", "2", "3"]);
        assert!(state.request_delete("2"));
        assert_eq!(state.delete.selection(), Some("2"));
        assert_eq!(state.pending_title(), Some("Resume 2"));
        assert!(state.delete.is_dialog_open());
        assert!(!state.delete.is_loading());
    }

    #[test]
    fn test_request_delete_rejects_empty_id() {
        let mut state = state_with(&["1"]);
        assert!(!state.request_delete(""));
        assert_eq!(state.delete, DeleteState::Idle);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut state = state_with(&["1"]);
        state.request_delete("1");
        assert!(state.cancel_delete());
        assert_eq!(state.delete, DeleteState::Idle);
        assert_eq!(state.resumes.len(), 1);
        assert!(state.message.is_none());
    }

    #[test]
    fn test_begin_delete_requires_confirming() {
        let mut state = state_with(&["1"]);
        assert_eq!(state.begin_delete(), None);
        assert_eq!(state.delete, DeleteState::Idle);

        state.request_delete("1");
        assert_eq!(state.begin_delete().as_deref(), Some("1"));
        assert!(state.delete.is_loading());
        assert!(state.delete.is_dialog_open());

        assert_eq!(state.begin_delete(), None);
    }

    #[test]
    fn test_deleting_ignores_cancel_and_new_requests() {
        let mut state = state_with(&["1", "2"]);
        state.request_delete("1");
        state.begin_delete();

        assert!(!state.cancel_delete());
        assert!(!state.request_delete("2"));
        assert_eq!(
            state.delete,
            DeleteState::Deleting {
                id: "1".to_string()
            }
        );
    }

    #[test]
    fn test_finish_success() {
        let mut state = state_with(&["1", "2"]);
        state.request_delete("1");
        state.begin_delete();
        state.finish_delete::<()>(&Ok(()));

        assert_eq!(state.delete, DeleteState::Idle);
        assert!(!state.delete.is_loading());
        assert_eq!(state.message, Some(Message::success(DELETE_SUCCESS_MESSAGE)));
        assert_eq!(state.resumes.len(), 1);
        assert_eq!(state.resumes[0].id, "2");
    }

    #[test]
    fn test_finish_failure_keeps_selection() {
        let mut state = state_with(&["1"]);
        state.request_delete("1");
        state.begin_delete();
        state.finish_delete(&Err("backend down"));

        assert_eq!(
            state.delete,
            DeleteState::Confirming {
                id: "1".to_string()
            }
        );
        assert!(!state.delete.is_loading());
        assert_eq!(state.message, Some(Message::error(DELETE_FAILURE_MESSAGE)));
        assert_eq!(state.resumes.len(), 1);
    }

    #[test]
    fn test_finish_outside_deleting_is_ignored() {
        let mut state = state_with(&["1"]);
        state.request_delete("1");
        state.finish_delete::<()>(&Ok(()));

        assert_eq!(
            state.delete,
            DeleteState::Confirming {
                id: "1".to_string()
            }
        );
        assert!(state.message.is_none());
    }

    #[test]
    fn test_expire_message_only_clears_own_message() {
        let mut state = AppState::new();
        let first = state.set_message(Message::success("first"));
        let second = state.set_message(Message::error("second"));

        state.expire_message(first);
        assert_eq!(state.message, Some(Message::error("second")));

        state.expire_message(second);
        assert!(state.message.is_none());
    }
}
