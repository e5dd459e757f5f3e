//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::create_project_modal::CreateProjectModal;
use crate::pages::manage_events::ManageEventsPage;
use crate::state::{project_dialog::ProjectDialogState, ui::UiState, user::UserState};

/// Root application component.
///
/// Provides the shared state contexts, loads the current user, and mounts
/// the project creation dialog next to the routed page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let user = RwSignal::new(UserState::default());
    let ui = RwSignal::new(UiState::default());
    let project_dialog = RwSignal::new(ProjectDialogState::default());

    provide_context(user);
    provide_context(ui);
    provide_context(project_dialog);

    load_user(user);

    let on_create = Callback::new(move |name: String| create_project(user, name));

    view! {
        <Stylesheet id="leptos" href="/pkg/analytics-ui.css"/>
        <Title text="Manage Events"/>

        <header class="app-header">
            <span class="app-header__project">
                {move || user.with(|s| s.team_name().unwrap_or("—").to_owned())}
            </span>
            <button class="btn btn--primary" on:click=move |_| project_dialog.update(ProjectDialogState::open)>
                "+ New Project"
            </button>
        </header>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ManageEventsPage/>
                <Route path=StaticSegment("events") view=ManageEventsPage/>
            </Routes>
        </Router>

        <CreateProjectModal on_create=on_create/>
    }
}

/// Fetch the current user into `user`. No-op outside the browser.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn load_user(user: RwSignal<UserState>) {
    #[cfg(feature = "csr")]
    {
        user.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_current_user().await;
            user.update(|s| {
                s.loading = false;
                match result {
                    Ok(u) => {
                        s.user = Some(u);
                        s.error = None;
                    }
                    Err(e) => {
                        leptos::logging::warn!("user fetch failed: {e}");
                        s.error = Some(e.to_string());
                    }
                }
            });
        });
    }
}

/// Create a project, then reload the user so the new team shows up.
/// The dialog has already closed; failures are only logged.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn create_project(user: RwSignal<UserState>, name: String) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::create_project(&name).await {
                Ok(()) => {
                    leptos::logging::log!("project created: {name}");
                    load_user(user);
                }
                Err(e) => leptos::logging::warn!("project creation failed: {e}"),
            }
        });
    }
}
