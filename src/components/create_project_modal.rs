//! Modal dialog for creating a new project.

use leptos::prelude::*;

use crate::config::PROJECT_NAME_MAX_LEN;
use crate::state::project_dialog::ProjectDialogState;

/// "Creating a Project" modal.
///
/// Visibility, input, and error live in the `RwSignal<ProjectDialogState>`
/// context. `on_create` receives the trimmed name once per successful
/// confirm and is never awaited.
#[component]
pub fn CreateProjectModal(on_create: Callback<String>) -> impl IntoView {
    let dialog = expect_context::<RwSignal<ProjectDialogState>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            if let Some(input) = input_ref.get() {
                if let Err(e) = input.focus() {
                    leptos::logging::warn!("project name focus failed: {e:?}");
                }
            }
        });
    }

    let confirm = Callback::new(move |()| {
        if let Some(name) = dialog.try_update(ProjectDialogState::confirm).flatten() {
            on_create.run(name);
        }
    });
    let cancel = Callback::new(move |()| dialog.update(ProjectDialogState::cancel));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            cancel.run(());
        }
    };

    view! {
        <Show when=move || dialog.with(|d| d.visible)>
            <div class="dialog-backdrop" on:click=move |_| cancel.run(())>
                <div
                    class="dialog dialog--project"
                    role="dialog"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2>"Creating a Project"</h2>
                    <p>
                        "Projects are a way of tracking multiple products under the umbrella of a single organization."
                        <br/>
                        "All organization members will be able to access the new project."
                    </p>
                    <label class="dialog__input-group">
                        <span class="dialog__addon">"Name"</span>
                        <input
                            node_ref=input_ref
                            class="dialog__input"
                            type="text"
                            placeholder="for example \"Global Website\""
                            maxlength={PROJECT_NAME_MAX_LEN.to_string()}
                            prop:value=move || dialog.with(|d| d.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                dialog.update(|d| d.set_name(&value));
                            }
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    confirm.run(());
                                }
                            }
                        />
                    </label>
                    {move || {
                        dialog
                            .with(|d| d.error_message.clone())
                            .map(|message| view! { <div class="alert alert--error">{message}</div> })
                    }}
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" on:click=move |_| confirm.run(())>
                            "Create Project"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
