//! Events pane: every event name with its 30-day volume and query count.

use leptos::prelude::*;

use crate::components::usage_table::{UsageTable, event_row_view};
use crate::state::user::UserState;
use crate::util::usage_table::{TableSort, sorted_rows};

const VOLUME_TIP: &str = "Total number of events over the last 30 days. Can be delayed by up to an hour.";
const QUERIES_TIP: &str = "Number of queries in PostHog that included a filter on this event.";

#[component]
pub fn EventUsageTable() -> impl IntoView {
    let user = expect_context::<RwSignal<UserState>>();
    let sort = RwSignal::new(TableSort::default());

    let rows = Signal::derive(move || {
        let order = sort.get();
        user.with(|s| {
            sorted_rows(s.event_usage(), order)
                .into_iter()
                .map(event_row_view)
                .collect::<Vec<_>>()
        })
    });

    view! {
        <UsageTable
            name_title="Event"
            volume_tip=VOLUME_TIP
            queries_tip=QUERIES_TIP
            sort=sort
            rows=rows
        />
    }
}
