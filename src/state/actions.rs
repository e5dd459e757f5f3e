#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::net::types::Action;

/// Actions (synthetic events) listed on the first Manage Events tab.
#[derive(Clone, Debug, Default)]
pub struct ActionsState {
    pub items: Vec<Action>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ActionsState {
    /// Mark a fetch as started, keeping the current rows on screen.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store a fetch outcome.
    pub fn finish_load(&mut self, result: Result<Vec<Action>, String>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => self.error = Some(e),
        }
    }
}
