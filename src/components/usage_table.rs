//! Sortable 30-day usage table shared by the event and property panes.

#[cfg(test)]
#[path = "usage_table_test.rs"]
mod usage_table_test;

use leptos::prelude::*;

use crate::config::USAGE_PAGE_SIZE;
use crate::net::types::{EventUsage, PropertyUsage};
use crate::util::property_registry;
use crate::util::usage_table::{SortDirection, TableSort, UsageColumn, page_count, page_slice};

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsageRowView {
    /// Raw event name or property key; used as the row key.
    pub name: String,
    /// Text shown in the first column.
    pub label: String,
    /// Tooltip for the first column, empty when there is none.
    pub description: &'static str,
    pub volume: u64,
    pub usage_count: u64,
}

/// Event rows show the event name as-is.
pub fn event_row_view(row: &EventUsage) -> UsageRowView {
    UsageRowView {
        name: row.event.clone(),
        label: row.event.clone(),
        description: "",
        volume: row.volume,
        usage_count: row.usage_count,
    }
}

/// Property rows show the registry label and description for known keys.
pub fn property_row_view(row: &PropertyUsage) -> UsageRowView {
    let descriptor = property_registry::lookup(&row.key);
    UsageRowView {
        name: row.key.clone(),
        label: descriptor.map_or_else(|| row.key.clone(), |d| d.label.to_owned()),
        description: descriptor.map_or("", |d| d.description),
        volume: row.volume,
        usage_count: row.usage_count,
    }
}

/// Table with sortable Name / 30 day volume / 30 day queries columns.
///
/// `rows` must already be filtered and sorted; this component only pages.
#[component]
pub fn UsageTable(
    name_title: &'static str,
    volume_tip: &'static str,
    queries_tip: &'static str,
    sort: RwSignal<TableSort>,
    rows: Signal<Vec<UsageRowView>>,
) -> impl IntoView {
    let page = RwSignal::new(0_usize);
    let pages = move || page_count(rows.with(Vec::len), USAGE_PAGE_SIZE);
    let visible = move || rows.with(|r| page_slice(r, page.get(), USAGE_PAGE_SIZE).to_vec());

    view! {
        <table class="usage-table">
            <thead>
                <tr>
                    <SortHeader label=name_title column=UsageColumn::Name sort=sort/>
                    <SortHeader label="30 day volume" tip=volume_tip column=UsageColumn::Volume sort=sort/>
                    <SortHeader label="30 day queries" tip=queries_tip column=UsageColumn::Queries sort=sort/>
                </tr>
            </thead>
            <tbody>
                {move || {
                    visible()
                        .into_iter()
                        .map(|row| {
                            let name_cell = if row.description.is_empty() {
                                view! { <span>{row.label}</span> }.into_any()
                            } else {
                                view! {
                                    <span class="property-key-info" title=row.description>
                                        {row.label}
                                    </span>
                                }
                                    .into_any()
                            };
                            view! {
                                <tr class="usage-table__row" data-key=row.name>
                                    <td>{name_cell}</td>
                                    <td class="usage-table__number">{row.volume.to_string()}</td>
                                    <td class="usage-table__number">{row.usage_count.to_string()}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>

        <Show when=move || { pages() > 1 }>
            <div class="usage-table__pager">
                <button
                    class="btn btn--small"
                    disabled=move || page.get() == 0
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
                >
                    "‹"
                </button>
                <span class="usage-table__page">{move || format!("{} / {}", page.get() + 1, pages())}</span>
                <button
                    class="btn btn--small"
                    disabled=move || page.get() + 1 >= pages()
                    on:click=move |_| page.update(|p| *p += 1)
                >
                    "›"
                </button>
            </div>
        </Show>
    }
}

/// Clickable column header showing the active sort direction.
#[component]
fn SortHeader(
    label: &'static str,
    #[prop(optional)] tip: Option<&'static str>,
    column: UsageColumn,
    sort: RwSignal<TableSort>,
) -> impl IntoView {
    let direction = move || sort.with(|s| s.direction_of(column));

    let title = match tip {
        Some(tip) => view! {
            <span class="tooltip" title=tip>
                {label}
                <span class="info-indicator">"ⓘ"</span>
            </span>
        }
        .into_any(),
        None => view! { <span>{label}</span> }.into_any(),
    };

    view! {
        <th
            class="usage-table__header"
            class:usage-table__header--sorted=move || direction().is_some()
            on:click=move |_| sort.update(|s| s.click(column))
        >
            {title}
            <span class="usage-table__sort">{move || direction().map_or("", SortDirection::indicator)}</span>
        </th>
    }
}
