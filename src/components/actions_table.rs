//! Synthetic events pane: the team's actions, fetched on mount.

use leptos::prelude::*;

use crate::state::actions::ActionsState;

#[component]
pub fn ActionsTable() -> impl IntoView {
    let actions = RwSignal::new(ActionsState::default());

    #[cfg(feature = "csr")]
    {
        actions.update(ActionsState::begin_load);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_actions().await.map_err(|e| {
                leptos::logging::warn!("actions fetch failed: {e}");
                e.to_string()
            });
            actions.update(|s| s.finish_load(result));
        });
    }

    view! {
        <div class="actions-table">
            <Show when=move || actions.with(|s| s.loading)>
                <p class="actions-table__status">"Loading actions..."</p>
            </Show>
            {move || {
                actions
                    .with(|s| s.error.clone())
                    .map(|e| view! { <div class="alert alert--error">{e}</div> })
            }}
            <table class="usage-table">
                <thead>
                    <tr>
                        <th>"Action"</th>
                        <th>"30 day volume"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        actions
                            .with(|s| s.items.clone())
                            .into_iter()
                            .map(|a| {
                                view! {
                                    <tr class="usage-table__row">
                                        <td>{a.name}</td>
                                        <td class="usage-table__number">
                                            {a.count.map_or_else(|| "—".to_owned(), |c| c.to_string())}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}
