//! Notes Page
//!
//! The single page of the app. Owns all server-derived state (notes,
//! templates, per-note generation status) and hands the modals async
//! handlers, so every mutation funnels back through here.

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::HandlerFuture;
use crate::api::{self, ApiError, GenerateRequest, Note, NoteDraft, NoteType, Template, TemplateDraft};
use crate::components::design_system::{Button, ButtonVariant, Input, LoadingSpinner, Select};
use crate::components::note_editor_modal::{GenerateHandler, NoteEditorModal, NoteSaveHandler};
use crate::components::template_editor_modal::{
    TemplateDeleteHandler, TemplateEditorModal, TemplateSaveHandler,
};
use crate::services::generation::{GenerationLedger, GenerationStatus};
use crate::utils::text::{
    emphasis_segments, format_display_date, today_iso, word_count, Segment, WORD_LIMITS,
};

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Run one generation attempt for a note and record it in the ledger.
///
/// The fence token taken at the start means a slower, older attempt can never
/// overwrite the result of a newer one for the same note.
async fn run_generation(
    generation: RwSignal<GenerationLedger>,
    note_id: String,
    template_id: String,
) -> Result<String, ApiError> {
    let seq = generation
        .try_update(|ledger| ledger.begin(&note_id))
        .unwrap_or(0);
    let request = GenerateRequest {
        template_id,
        note_id: note_id.clone(),
    };
    match api::generate_response(&request).await {
        Ok(response) => {
            generation.try_update(|ledger| {
                ledger.complete(&note_id, seq, response.generated_note.clone())
            });
            Ok(response.generated_note)
        }
        Err(e) => {
            log::error!("Failed to generate response for note {note_id}: {e}");
            generation.try_update(|ledger| ledger.fail(&note_id, seq, e.to_string()));
            Err(e)
        }
    }
}

/// Assemble the creation payload from the form fields. The client name is
/// trimmed, matching the value the validation gate checks.
fn creation_draft(
    client_name: &str,
    session_date: &str,
    note_type: &str,
    template_id: &str,
    content: &str,
) -> NoteDraft {
    NoteDraft {
        client_name: client_name.trim().to_string(),
        session_date: session_date.to_string(),
        note_type: note_type.to_string(),
        template_id: template_id.to_string(),
        content: content.to_string(),
    }
}

/// Create a note on the server and prepend it to the in-memory list (the
/// sole optimistic mutation). A failure is logged to the console only and
/// leaves the list untouched.
pub async fn upload_note(notes: RwSignal<Vec<Note>>, draft: NoteDraft) -> Option<Note> {
    match api::create_note(&draft).await {
        Ok(note) => {
            notes.update(|list| list.insert(0, note.clone()));
            Some(note)
        }
        Err(e) => {
            log::error!("Failed to upload note: {e}");
            None
        }
    }
}

#[component]
pub fn NotesPage() -> impl IntoView {
    // Server-derived state
    let notes = RwSignal::new(Vec::<Note>::new());
    let templates = RwSignal::new(Vec::<Template>::new());
    let generation = RwSignal::new(GenerationLedger::new());
    let is_loading_notes = RwSignal::new(true);

    // Upload form
    let client_name = RwSignal::new(String::new());
    let session_date = RwSignal::new(today_iso());
    let note_type = RwSignal::new(NoteType::default().as_str().to_string());
    let selected_template_id = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let words = RwSignal::new(0usize);
    let is_uploading = RwSignal::new(false);

    // Modals
    let editing_note = RwSignal::new(Option::<Note>::None);
    let note_modal_open = RwSignal::new(false);
    let editing_template = RwSignal::new(Option::<Template>::None);
    let template_modal_open = RwSignal::new(false);

    spawn_local(async move {
        match api::list_notes().await {
            Ok(list) => notes.set(list),
            Err(e) => log::error!("Failed to fetch notes: {e}"),
        }
        is_loading_notes.set(false);
    });
    spawn_local(async move {
        match api::list_templates().await {
            Ok(list) => templates.set(list),
            Err(e) => log::error!("Failed to fetch templates: {e}"),
        }
    });

    // Template selection is checked in the click handler, with an alert.
    let can_upload = Signal::derive(move || {
        !client_name.get().trim().is_empty() && WORD_LIMITS.contains(words.get())
    });

    let handle_content_input = move |evt: ev::Event| {
        let value = event_target_value(&evt);
        words.set(word_count(&value));
        content.set(value);
    };

    let handle_upload = move |_: ev::MouseEvent| {
        if is_uploading.get() {
            return;
        }
        if client_name.get().trim().is_empty() {
            alert("Please enter a client name");
            return;
        }
        let template_id = selected_template_id.get();
        if template_id.is_empty() {
            alert("Please select a template");
            return;
        }
        if !WORD_LIMITS.contains(words.get()) {
            alert(&format!(
                "Note content must be between {} and {} words",
                WORD_LIMITS.min, WORD_LIMITS.max
            ));
            return;
        }

        let draft = creation_draft(
            &client_name.get(),
            &session_date.get(),
            &note_type.get(),
            &template_id,
            &content.get(),
        );
        is_uploading.set(true);
        spawn_local(async move {
            if let Some(note) = upload_note(notes, draft).await {
                client_name.set(String::new());
                session_date.set(today_iso());
                note_type.set(NoteType::default().as_str().to_string());
                selected_template_id.set(String::new());
                content.set(String::new());
                words.set(0);
                is_uploading.set(false);

                // Failures are recorded on the card via the ledger.
                let _ = run_generation(generation, note.id, template_id).await;
            } else {
                is_uploading.set(false);
            }
        });
    };

    let save_note: NoteSaveHandler = Arc::new(move |draft: Note| -> HandlerFuture<()> {
        Box::pin(async move {
            api::update_note(&draft.id, &draft).await?;
            notes.set(api::list_notes().await?);
            Ok(())
        })
    });

    let generate_for_modal: GenerateHandler = Arc::new(
        move |note_id: String, template_id: String| -> HandlerFuture<String> {
            Box::pin(run_generation(generation, note_id, template_id))
        },
    );

    let save_template: TemplateSaveHandler =
        Arc::new(move |template: Template| -> HandlerFuture<Template> {
            Box::pin(async move {
                let draft = TemplateDraft {
                    name: template.name.clone(),
                    structure: template.structure.clone(),
                };
                let saved = if template.is_persisted() {
                    api::update_template(&template.id, &draft).await?
                } else {
                    api::create_template(&draft).await?
                };
                templates.set(api::list_templates().await?);
                Ok(saved)
            })
        });

    let remove_template: TemplateDeleteHandler = Arc::new(move |id: String| -> HandlerFuture<()> {
        Box::pin(async move {
            api::delete_template(&id).await?;
            templates.set(api::list_templates().await?);
            if selected_template_id.get_untracked() == id {
                selected_template_id.set(String::new());
            }
            Ok(())
        })
    });

    let on_edit_note = Callback::new(move |note: Note| {
        editing_note.set(Some(note));
        note_modal_open.set(true);
    });

    let open_create_template = move |_: ev::MouseEvent| {
        editing_template.set(None);
        template_modal_open.set(true);
    };

    let open_edit_template = move |_: ev::MouseEvent| {
        let id = selected_template_id.get();
        let found = templates
            .get_untracked()
            .into_iter()
            .find(|t| t.id == id);
        if let Some(template) = found {
            editing_template.set(Some(template));
            template_modal_open.set(true);
        }
    };

    view! {
        <div class="min-h-screen bg-gray-100">
            <header class="bg-white shadow-sm">
                <div class="max-w-7xl mx-auto px-6 py-4">
                    <h1 class="text-2xl font-bold text-gray-900">"Session Notes"</h1>
                </div>
            </header>

            <main class="max-w-7xl mx-auto p-6 grid grid-cols-1 lg:grid-cols-2 gap-6 items-start">
                // Upload form
                <div class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-lg font-semibold mb-4">"New Session Note"</h2>
                    <div class="space-y-4">
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">
                                "Client Name"
                            </label>
                            <Input value=client_name placeholder="Enter client name" />
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
                            <div class="flex gap-2">
                                <Select value=selected_template_id>
                                    <option value="">"Select a template..."</option>
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
                                <Button
                                    variant=ButtonVariant::Secondary
                                    class="px-3 py-2 text-sm whitespace-nowrap"
                                    on_click=open_create_template
                                >
                                    "Create New"
                                </Button>
                                {move || {
                                    (!selected_template_id.get().is_empty())
                                        .then(|| {
                                            view! {
                                                <Button
                                                    variant=ButtonVariant::Secondary
                                                    class="px-3 py-2 text-sm"
                                                    on_click=open_edit_template
                                                >
                                                    "Edit"
                                                </Button>
                                            }
                                        })
                                }}
                            </div>
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">
                                "Note Content"
                            </label>
                            <textarea
                                class="w-full p-2 border border-gray-300 rounded-md h-48"
                                placeholder="Enter session notes..."
                                prop:value=move || content.get()
                                on:input=handle_content_input
                            />
                            <p class=move || {
                                if words.get() == 0 || WORD_LIMITS.contains(words.get()) {
                                    "text-sm text-gray-500 mt-1"
                                } else {
                                    "text-sm text-red-600 mt-1"
                                }
                            }>
                                {move || {
                                    format!(
                                        "{} words ({}-{} required)",
                                        words.get(),
                                        WORD_LIMITS.min,
                                        WORD_LIMITS.max,
                                    )
                                }}
                            </p>
                        </div>

                        <Button
                            on_click=handle_upload
                            disabled=Signal::derive(move || !can_upload.get())
                            loading=is_uploading
                            class="w-full"
                        >
                            {move || if is_uploading.get() { "Uploading..." } else { "Upload Note" }}
                        </Button>
                    </div>
                </div>

                // Notes list
                <div>
                    <h2 class="text-lg font-semibold mb-4">
                        {move || format!("Notes ({})", notes.get().len())}
                    </h2>
                    <Show
                        when=move || !is_loading_notes.get()
                        fallback=|| {
                            view! {
                                <div class="flex justify-center py-12">
                                    <LoadingSpinner size="lg" />
                                </div>
                            }
                        }
                    >
                        <NotesList notes=notes generation=generation on_edit=on_edit_note />
                    </Show>
                </div>
            </main>

            <NoteEditorModal
                note=editing_note
                is_open=note_modal_open
                templates=templates
                on_save=save_note
                on_generate=generate_for_modal
            />
            <TemplateEditorModal
                template=editing_template
                is_open=template_modal_open
                on_save=save_template
                on_delete=remove_template
            />
        </div>
    }
}

/// The list body: one card per note, rebuilt whenever the list signal
/// changes. Rows are not keyed on id, so a refetch after an edit replaces
/// the card's displayed fields rather than reusing the stale row.
#[component]
pub fn NotesList(
    notes: RwSignal<Vec<Note>>,
    generation: RwSignal<GenerationLedger>,
    on_edit: Callback<Note>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !notes.get().is_empty()
            fallback=|| {
                view! {
                    <p class="text-gray-500 text-center py-12">
                        "No notes yet. Upload your first session note to get started."
                    </p>
                }
            }
        >
            <div class="space-y-4">
                {move || {
                    notes
                        .get()
                        .into_iter()
                        .map(|note| {
                            view! {
                                <NoteCard note=note generation=generation on_edit=on_edit />
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}

/// One note in the list, with its live generation status overlaid.
#[component]
fn NoteCard(
    note: Note,
    generation: RwSignal<GenerationLedger>,
    on_edit: Callback<Note>,
) -> impl IntoView {
    let status = {
        let id = note.id.clone();
        Signal::derive(move || generation.with(|ledger| ledger.status(&id)))
    };
    let is_generating =
        Signal::derive(move || matches!(status.get(), GenerationStatus::Generating));

    // Ledger text wins over whatever was stored on the note, so a fresh
    // generation shows up without a refetch.
    let response_text = {
        let stored = note.generated_response.clone().filter(|s| !s.is_empty());
        Signal::derive(move || match status.get() {
            GenerationStatus::Generated(text) => Some(text),
            _ => stored.clone(),
        })
    };

    let handle_edit = {
        let note = note.clone();
        move |_: ev::MouseEvent| on_edit.run(note.clone())
    };

    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <div class="flex justify-between items-start mb-2">
                <div>
                    <h3 class="text-lg font-semibold text-gray-900">
                        {note.client_name.clone()}
                    </h3>
                    <p class="text-sm text-gray-500">
                        {format_display_date(&note.session_date)}
                        " · "
                        {note.note_type.clone()}
                    </p>
                </div>
                <Button
                    variant=ButtonVariant::Secondary
                    class="px-3 py-1 text-sm"
                    on_click=handle_edit
                >
                    "Edit"
                </Button>
            </div>

            <p class="text-gray-700 whitespace-pre-wrap mb-4">{note.content.clone()}</p>

            <div class="border-t border-gray-200 pt-4">
                <h4 class="text-sm font-medium text-gray-700 mb-2">"Generated Response"</h4>
                {move || {
                    if is_generating.get() {
                        view! {
                            <div class="flex items-center gap-2 text-gray-500">
                                <LoadingSpinner size="sm" />
                                <span class="text-sm">"Generating response..."</span>
                            </div>
                        }
                            .into_any()
                    } else if let GenerationStatus::Failed(reason) = status.get() {
                        view! {
                            <p class="text-sm text-red-600">
                                {format!("Generation failed: {reason}")}
                            </p>
                        }
                            .into_any()
                    } else if let Some(text) = response_text.get() {
                        view! {
                            <div class="text-sm text-gray-700 space-y-1">
                                {render_generated(&text)}
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <p class="text-sm text-gray-400 italic">"No generated response yet"</p>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// Render generated text line by line, turning `*span*` runs into bold.
fn render_generated(text: &str) -> AnyView {
    emphasis_segments(text)
        .into_iter()
        .map(|line| {
            let spans = line
                .into_iter()
                .map(|segment| match segment {
                    Segment::Plain(s) => view! { <span>{s}</span> }.into_any(),
                    Segment::Strong(s) => view! { <strong>{s}</strong> }.into_any(),
                })
                .collect_view();
            view! { <p class="min-h-4">{spans}</p> }
        })
        .collect_view()
        .into_any()
}

#[cfg(test)]
mod tests {
    use super::creation_draft;

    #[test]
    fn test_creation_draft_trims_client_name() {
        let draft = creation_draft(
            "  Jane Doe  ",
            "2026-08-30",
            "Progress",
            "t1",
            "ten words of session content for the draft body here",
        );
        assert_eq!(draft.client_name, "Jane Doe");
        assert_eq!(draft.session_date, "2026-08-30");
        assert_eq!(draft.template_id, "t1");
    }

    #[test]
    fn test_creation_draft_keeps_content_verbatim() {
        let draft = creation_draft("A", "2026-01-01", "Intake", "t2", "  spaced  content  ");
        assert_eq!(draft.content, "  spaced  content  ");
    }
}
