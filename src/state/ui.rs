#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared across the page shell.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub events_tab: EventsTab,
}

impl UiState {
    /// Switch the Manage Events tab. Touches nothing but the tab.
    pub fn select_tab(&mut self, tab: EventsTab) {
        self.events_tab = tab;
    }
}

/// Tabs of the Manage Events page, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventsTab {
    #[default]
    Synthetic,
    Events,
    Properties,
}

impl EventsTab {
    pub fn all() -> &'static [EventsTab] {
        &[EventsTab::Synthetic, EventsTab::Events, EventsTab::Properties]
    }

    /// Stable key used for DOM attributes.
    pub fn key(self) -> &'static str {
        match self {
            EventsTab::Synthetic => "synthetic",
            EventsTab::Events => "events",
            EventsTab::Properties => "properties",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventsTab::Synthetic => "Synthetic Events",
            EventsTab::Events => "Events",
            EventsTab::Properties => "Properties",
        }
    }
}
