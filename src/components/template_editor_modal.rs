//! Template Editor Modal
//!
//! Controlled dialog for creating, editing, and deleting a template. Create
//! vs edit mode is decided purely by whether a template was supplied.

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::HandlerFuture;
use crate::api::Template;
use crate::components::design_system::{Button, ButtonVariant, Input};

/// Saves the edited template (create when its id is empty), resolving to the
/// saved record; the dialog closes when the handler resolves Ok.
pub type TemplateSaveHandler = Arc<dyn Fn(Template) -> HandlerFuture<Template>>;

/// Deletes a template by id; the dialog closes when the handler resolves Ok.
pub type TemplateDeleteHandler = Arc<dyn Fn(String) -> HandlerFuture<()>>;

#[component]
pub fn TemplateEditorModal(
    /// The template being edited; `None` switches the dialog to create mode
    template: RwSignal<Option<Template>>,
    /// Whether the dialog is open
    is_open: RwSignal<bool>,
    /// Called with the edited template on Save Template
    on_save: TemplateSaveHandler,
    /// Called with the template id on confirmed delete
    on_delete: TemplateDeleteHandler,
) -> impl IntoView {
    let on_save = StoredValue::new_local(on_save);
    let on_delete = StoredValue::new_local(on_delete);

    let template_id = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let structure = RwSignal::new(String::new());

    let is_saving = RwSignal::new(false);
    let is_deleting = RwSignal::new(false);

    Effect::new(move |_| match template.get() {
        Some(t) => {
            template_id.set(t.id);
            name.set(t.name);
            structure.set(t.structure);
        }
        None => {
            template_id.set(String::new());
            name.set(String::new());
            structure.set(String::new());
        }
    });

    let is_edit = Signal::derive(move || template.get().is_some());

    let handle_close = move |_: ev::MouseEvent| {
        is_open.set(false);
    };

    let handle_save = move |_: ev::MouseEvent| {
        if is_saving.get() {
            return;
        }
        let edited = Template {
            id: template_id.get(),
            name: name.get(),
            structure: structure.get(),
        };
        let save = on_save.get_value();
        is_saving.set(true);
        spawn_local(async move {
            match save(edited).await {
                Ok(_saved) => is_open.set(false),
                Err(e) => log::error!("Failed to save template: {e}"),
            }
            is_saving.set(false);
        });
    };

    let handle_delete = move |_: ev::MouseEvent| {
        let id = template_id.get();
        if id.is_empty() || is_deleting.get() {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Are you sure you want to delete this template?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let delete = on_delete.get_value();
        is_deleting.set(true);
        spawn_local(async move {
            match delete(id).await {
                Ok(()) => is_open.set(false),
                Err(e) => log::error!("Failed to delete template: {e}"),
            }
            is_deleting.set(false);
        });
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4">
                <div class="bg-white rounded-lg max-w-2xl w-full">
                    <div class="p-6">
                        // Header
                        <div class="flex justify-between items-center mb-6">
                            <h2 class="text-xl font-semibold">
                                {move || {
                                    if is_edit.get() { "Edit Template" } else { "Create New Template" }
                                }}
                            </h2>
                            <button
                                class="text-gray-500 hover:text-gray-700"
                                on:click=handle_close
                            >
                                "X"
                            </button>
                        </div>

                        <div class="space-y-4">
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Template Name"
                                </label>
                                <Input value=name placeholder="Enter template name" />
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Template Structure"
                                </label>
                                <textarea
                                    class="w-full p-2 border border-gray-300 rounded-md h-64 font-mono text-sm"
                                    placeholder="Enter template structure..."
                                    prop:value=move || structure.get()
                                    on:input=move |evt| structure.set(event_target_value(&evt))
                                />
                            </div>
                        </div>

                        // Footer
                        <div class="flex justify-between mt-6">
                            <div>
                                {move || {
                                    is_edit
                                        .get()
                                        .then(|| {
                                            view! {
                                                <Button
                                                    variant=ButtonVariant::Danger
                                                    on_click=handle_delete
                                                    loading=is_deleting
                                                >
                                                    {move || {
                                                        if is_deleting.get() {
                                                            "Deleting..."
                                                        } else {
                                                            "Delete Template"
                                                        }
                                                    }}
                                                </Button>
                                            }
                                        })
                                }}
                            </div>
                            <div class="flex gap-4">
                                <Button variant=ButtonVariant::Secondary on_click=handle_close>
                                    "Cancel"
                                </Button>
                                <Button on_click=handle_save loading=is_saving>
                                    {move || {
                                        if is_saving.get() { "Saving..." } else { "Save Template" }
                                    }}
                                </Button>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
