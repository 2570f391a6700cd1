//! Application state definitions

use crate::state::SignupForm;
use crate::validation::FieldErrors;

/// State shared between the event loop and the renderer
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The active form session
    pub form: SignupForm,
    /// Errors from the last validation attempt, keyed by field path
    pub field_errors: FieldErrors,
    /// Serialized payload shown after a successful submit
    pub output: Option<String>,
    /// Transient confirmation message for the status bar
    pub status_message: Option<String>,
    /// Last error for the status bar (upload failures and the like)
    pub error_message: Option<String>,
    /// Whether the storage service answered the startup probe
    pub storage_connected: bool,
    /// True while a submission is in flight; blocks re-entry
    pub submitting: bool,
}

impl AppState {
    /// Record an error message for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Drop transient status/error messages
    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }

    /// Replace the form with a fresh empty session
    pub fn reset_form(&mut self) {
        self.form = SignupForm::new();
        self.field_errors = FieldErrors::default();
    }
}
