//! Project creation dialog state.
//!
//! DESIGN
//! ======
//! Two states, closed and open. Every transition to closed goes through
//! [`ProjectDialogState::close`], which clears the input and the error, so
//! no path can leave stale text behind. `confirm` returns the name to create
//! instead of calling anything itself; the component fires the create action
//! with that value.

#[cfg(test)]
#[path = "project_dialog_test.rs"]
mod project_dialog_test;

use crate::config::PROJECT_NAME_MAX_LEN;

/// Inline message shown when confirming without a name.
pub const EMPTY_NAME_MESSAGE: &str = "Your project needs a name!";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDialogState {
    pub visible: bool,
    /// Raw input text, untrimmed.
    pub name: String,
    pub error_message: Option<String>,
}

impl ProjectDialogState {
    /// Show the dialog from a blank state.
    pub fn open(&mut self) {
        self.close();
        self.visible = true;
    }

    /// Replace the input text, truncated to the maximum name length.
    pub fn set_name(&mut self, value: &str) {
        self.name = value.chars().take(PROJECT_NAME_MAX_LEN).collect();
    }

    /// Confirm the form.
    ///
    /// Returns the trimmed name and closes when it is non-empty. Otherwise
    /// stays open with [`EMPTY_NAME_MESSAGE`] and returns `None`.
    pub fn confirm(&mut self) -> Option<String> {
        if !self.visible {
            return None;
        }
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            self.error_message = Some(EMPTY_NAME_MESSAGE.to_owned());
            return None;
        }
        let name = trimmed.to_owned();
        self.close();
        Some(name)
    }

    /// Dismiss without creating anything.
    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.visible = false;
        self.name.clear();
        self.error_message = None;
    }
}
