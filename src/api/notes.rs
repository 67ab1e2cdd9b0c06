use serde::{Deserialize, Serialize};

use super::core::{delete_json, get_json, send_json, ApiError, DeleteAck};

// ============================================================================
// Note Types
// ============================================================================

/// A clinical session note as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub client_name: String,
    pub session_date: String,
    pub note_type: String,
    pub template_id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Creation payload: a note before the server has assigned an id or any
/// generated response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub client_name: String,
    pub session_date: String,
    pub note_type: String,
    pub template_id: String,
    pub content: String,
}

/// The closed set of note types offered by the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteType {
    Intake,
    #[default]
    Progress,
    Service,
}

impl NoteType {
    pub const ALL: [NoteType; 3] = [NoteType::Intake, NoteType::Progress, NoteType::Service];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteType::Intake => "Intake",
            NoteType::Progress => "Progress",
            NoteType::Service => "Service",
        }
    }

    pub fn parse(value: &str) -> Option<NoteType> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

// ============================================================================
// Note Operations
// ============================================================================

pub async fn list_notes() -> Result<Vec<Note>, ApiError> {
    get_json("/notes", "Failed to fetch notes").await
}

pub async fn get_note(note_id: &str) -> Result<Note, ApiError> {
    get_json(&format!("/notes/{note_id}"), "Failed to fetch note").await
}

pub async fn create_note(draft: &NoteDraft) -> Result<Note, ApiError> {
    send_json("POST", "/notes", draft, "Failed to create note").await
}

pub async fn update_note(note_id: &str, note: &Note) -> Result<Note, ApiError> {
    send_json(
        "PUT",
        &format!("/notes/{note_id}"),
        note,
        "Failed to update note",
    )
    .await
}

pub async fn delete_note(note_id: &str) -> Result<DeleteAck, ApiError> {
    delete_json(&format!("/notes/{note_id}"), "Failed to delete note").await
}
