//! Properties pane: event properties with 30-day usage, plus a toggle that
//! hides the properties the platform records on its own.

#[cfg(test)]
#[path = "property_usage_table_test.rs"]
mod property_usage_table_test;

use leptos::prelude::*;

use crate::components::usage_table::{UsageTable, property_row_view};
use crate::state::user::UserState;
use crate::util::property_registry::visible_properties;
use crate::util::usage_table::{TableSort, sorted_rows};

const VOLUME_TIP: &str =
    "Total number of events that included this property in the last 30 days. Can be delayed by up to an hour.";
const QUERIES_TIP: &str = "Number of queries in PostHog that included a filter on this property.";

/// Label of the built-in toggle button for the current toggle state.
pub fn toggle_label(show_built_ins: bool) -> &'static str {
    if show_built_ins {
        "Hide PostHog properties"
    } else {
        "Show PostHog properties"
    }
}

#[component]
pub fn PropertyUsageTable() -> impl IntoView {
    let user = expect_context::<RwSignal<UserState>>();
    let sort = RwSignal::new(TableSort::default());
    let show_built_ins = RwSignal::new(true);

    let rows = Signal::derive(move || {
        let order = sort.get();
        let show = show_built_ins.get();
        user.with(|s| {
            let listed = visible_properties(s.property_usage(), show);
            sorted_rows(&listed, order)
                .into_iter()
                .map(property_row_view)
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="property-usage">
            <button
                class="btn btn--small"
                class:btn--primary=move || show_built_ins.get()
                on:click=move |_| show_built_ins.update(|v| *v = !*v)
            >
                {move || toggle_label(show_built_ins.get())}
            </button>
            <UsageTable
                name_title="Property"
                volume_tip=VOLUME_TIP
                queries_tip=QUERIES_TIP
                sort=sort
                rows=rows
            />
        </div>
    }
}
