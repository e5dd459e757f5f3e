//! Manage Events page: synthetic events, event usage, and property usage
//! behind a three-way tab strip.

use leptos::prelude::*;

use crate::components::actions_table::ActionsTable;
use crate::components::event_usage_table::EventUsageTable;
use crate::components::property_usage_table::PropertyUsageTable;
use crate::state::ui::{EventsTab, UiState};
use crate::state::user::UserState;

/// Tab container. Holds no business state: each pane reads what it needs
/// from context and remounts (resetting its sort/toggle) on every switch.
#[component]
pub fn ManageEventsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let user = expect_context::<RwSignal<UserState>>();
    let active_tab = move || ui.with(|u| u.events_tab);

    view! {
        <div class="manage-events" data-attr="manage-events-table">
            <header class="page-header">
                <h1>"Manage Events"</h1>
            </header>

            {move || {
                user.with(|s| s.error.clone())
                    .map(|e| view! { <div class="alert alert--error">{e}</div> })
            }}

            <div class="tabs" role="tablist">
                {EventsTab::all()
                    .iter()
                    .map(move |&tab| {
                        view! {
                            <button
                                class="tabs__tab"
                                role="tab"
                                data-tab={tab.key()}
                                class:tabs__tab--active=move || active_tab() == tab
                                on:click=move |_| ui.update(|u| u.select_tab(tab))
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="tabs__pane" role="tabpanel">
                {move || match active_tab() {
                    EventsTab::Synthetic => view! { <ActionsTable/> }.into_any(),
                    EventsTab::Events => view! { <EventUsageTable/> }.into_any(),
                    EventsTab::Properties => view! { <PropertyUsageTable/> }.into_any(),
                }}
            </div>
        </div>
    }
}
