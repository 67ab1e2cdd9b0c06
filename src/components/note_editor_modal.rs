//! Note Editor Modal
//!
//! Controlled dialog for editing a single existing note, including manual
//! regeneration of its AI response. The local draft re-syncs whenever the
//! `note` prop changes, discarding any unsaved edits to the previous note.

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::HandlerFuture;
use crate::api::{Note, NoteType, Template};
use crate::components::design_system::{Button, ButtonVariant, Input, Select};
use crate::utils::text::normalize_session_date;

/// Saves the edited note; the dialog closes when the handler resolves Ok.
pub type NoteSaveHandler = Arc<dyn Fn(Note) -> HandlerFuture<()>>;

/// Runs generation for `(note_id, template_id)`, resolving to the generated
/// text. Supplied by the page so the modal never touches page state directly.
pub type GenerateHandler = Arc<dyn Fn(String, String) -> HandlerFuture<String>>;

#[component]
pub fn NoteEditorModal(
    /// The note being edited
    note: RwSignal<Option<Note>>,
    /// Whether the dialog is open
    is_open: RwSignal<bool>,
    /// Templates for the template selector
    templates: RwSignal<Vec<Template>>,
    /// Called with the full draft on Save Changes
    on_save: NoteSaveHandler,
    /// Called on Re-Generate Response
    on_generate: GenerateHandler,
) -> impl IntoView {
    let on_save = StoredValue::new_local(on_save);
    let on_generate = StoredValue::new_local(on_generate);

    // Draft state, a full local copy of the passed-in note
    let note_id = RwSignal::new(String::new());
    let client_name = RwSignal::new(String::new());
    let session_date = RwSignal::new(String::new());
    let note_type = RwSignal::new(NoteType::default().as_str().to_string());
    let template_id = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let generated_response = RwSignal::new(String::new());
    let last_updated = RwSignal::new(Option::<String>::None);

    let is_saving = RwSignal::new(false);
    let is_generating = RwSignal::new(false);

    Effect::new(move |_| {
        if let Some(n) = note.get() {
            note_id.set(n.id);
            client_name.set(n.client_name);
            session_date.set(normalize_session_date(&n.session_date));
            note_type.set(n.note_type);
            template_id.set(n.template_id);
            content.set(n.content);
            generated_response.set(n.generated_response.unwrap_or_default());
            last_updated.set(n.last_updated);
        }
    });

    let handle_close = move |_: ev::MouseEvent| {
        is_open.set(false);
    };

    let handle_save = move |_: ev::MouseEvent| {
        if is_saving.get() {
            return;
        }
        let draft = Note {
            id: note_id.get(),
            client_name: client_name.get(),
            session_date: session_date.get(),
            note_type: note_type.get(),
            template_id: template_id.get(),
            content: content.get(),
            generated_response: Some(generated_response.get()),
            last_updated: last_updated.get(),
        };
        let save = on_save.get_value();
        is_saving.set(true);
        spawn_local(async move {
            match save(draft).await {
                Ok(()) => is_open.set(false),
                Err(e) => log::error!("Failed to save note: {e}"),
            }
            is_saving.set(false);
        });
    };

    // Requires both a note id and a template id; a no-op otherwise.
    let handle_generate = move |_: ev::MouseEvent| {
        let id = note_id.get();
        let tid = template_id.get();
        if id.is_empty() || tid.is_empty() || is_generating.get() {
            return;
        }
        let generate = on_generate.get_value();
        is_generating.set(true);
        spawn_local(async move {
            if let Ok(text) = generate(id, tid).await {
                generated_response.set(text);
            }
            is_generating.set(false);
        });
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4">
                <div class="bg-white rounded-lg max-w-3xl w-full max-h-[90vh] overflow-y-auto">
                    <div class="p-6">
                        // Header
                        <div class="flex justify-between items-center mb-6">
                            <h2 class="text-xl font-semibold">"Edit Note"</h2>
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
                                    "Client Name"
                                </label>
                                <Input value=client_name />
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Session Date"
                                </label>
                                <Input value=session_date input_type="date" />
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Note Type"
                                </label>
                                <Select value=note_type>
                                    {NoteType::ALL
                                        .iter()
                                        .map(|t| {
                                            let value = t.as_str();
                                            view! { <option value=value>{value}</option> }
                                        })
                                        .collect_view()}
                                </Select>
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Template"
                                </label>
                                <Select value=template_id>
                                    {move || {
                                        templates
                                            .get()
                                            .into_iter()
                                            .map(|t| {
                                                view! {
                                                    <option value=t.id.clone()>{t.name.clone()}</option>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </Select>
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Note Content"
                                </label>
                                <textarea
                                    class="w-full p-2 border border-gray-300 rounded-md min-h-32"
                                    prop:value=move || content.get()
                                    on:input=move |evt| content.set(event_target_value(&evt))
                                />
                            </div>

                            <div>
                                <div class="flex justify-between items-center mb-1">
                                    <label class="block text-sm font-medium text-gray-700">
                                        "Generated Response"
                                    </label>
                                    <Button
                                        on_click=handle_generate
                                        loading=is_generating
                                        class="px-3 py-1 text-sm"
                                    >
                                        {move || {
                                            if is_generating.get() {
                                                "Generating..."
                                            } else {
                                                "Re-Generate Response"
                                            }
                                        }}
                                    </Button>
                                </div>
                                <textarea
                                    class="w-full p-2 border border-gray-300 rounded-md h-80"
                                    placeholder="Edit generated response..."
                                    prop:value=move || generated_response.get()
                                    on:input=move |evt| {
                                        generated_response.set(event_target_value(&evt))
                                    }
                                />
                            </div>
                        </div>

                        // Footer
                        <div class="flex justify-end gap-4 mt-6">
                            <Button variant=ButtonVariant::Secondary on_click=handle_close>
                                "Cancel"
                            </Button>
                            <Button on_click=handle_save loading=is_saving>
                                {move || if is_saving.get() { "Saving..." } else { "Save Changes" }}
                            </Button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
