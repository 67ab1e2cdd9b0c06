use serde_json::json;

use crate::api::core::ApiError;
use crate::api::generate::{GenerateRequest, GenerateResponse};
use crate::api::notes::{Note, NoteDraft, NoteType};
use crate::api::templates::{Template, TemplateDraft};

// --- Note Types ---

#[test]
fn test_note_deserialization_full() {
    let json = json!({
        "id": "n1",
        "client_name": "Jane Doe",
        "session_date": "2024-01-15",
        "note_type": "Progress",
        "template_id": "t1",
        "content": "Session went well.",
        "generated_response": "Summary text",
        "last_updated": "2024-01-15T10:00:00Z"
    });
    let note: Note = serde_json::from_value(json).unwrap();
    assert_eq!(note.id, "n1");
    assert_eq!(note.client_name, "Jane Doe");
    assert_eq!(note.generated_response.as_deref(), Some("Summary text"));
}

#[test]
fn test_note_deserialization_without_generated_response() {
    let json = json!({
        "id": "n2",
        "client_name": "John",
        "session_date": "2024-02-01",
        "note_type": "Intake",
        "template_id": "",
        "content": "First visit."
    });
    let note: Note = serde_json::from_value(json).unwrap();
    assert_eq!(note.generated_response, None);
    assert_eq!(note.last_updated, None);
}

#[test]
fn test_note_serialization_skips_absent_optionals() {
    let note = Note {
        id: "n3".to_string(),
        client_name: "A".to_string(),
        session_date: "2024-03-01".to_string(),
        note_type: "Service".to_string(),
        template_id: "t9".to_string(),
        content: "c".to_string(),
        generated_response: None,
        last_updated: None,
    };
    let value = serde_json::to_value(&note).unwrap();
    let obj = value.as_object().unwrap();
    assert!(!obj.contains_key("generated_response"));
    assert!(!obj.contains_key("last_updated"));
}

#[test]
fn test_note_draft_serializes_exactly_creation_fields() {
    let draft = NoteDraft {
        client_name: "Jane Doe".to_string(),
        session_date: "2024-01-15".to_string(),
        note_type: "Progress".to_string(),
        template_id: "t1".to_string(),
        content: "Fifty words of session content.".to_string(),
    };
    let value = serde_json::to_value(&draft).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 5);
    for key in [
        "client_name",
        "session_date",
        "note_type",
        "template_id",
        "content",
    ] {
        assert!(obj.contains_key(key), "missing field {key}");
    }
    assert!(!obj.contains_key("id"));
    assert!(!obj.contains_key("generated_response"));
}

#[test]
fn test_note_type_round_trip() {
    for note_type in NoteType::ALL {
        assert_eq!(NoteType::parse(note_type.as_str()), Some(note_type));
    }
    assert_eq!(NoteType::parse("progress"), None);
    assert_eq!(NoteType::parse(""), None);
    assert_eq!(NoteType::default(), NoteType::Progress);
}

// --- Template Types ---

#[test]
fn test_template_deserialization() {
    let json = json!({
        "id": "t1",
        "name": "SOAP",
        "structure": "Subjective:\nObjective:\nAssessment:\nPlan:"
    });
    let template: Template = serde_json::from_value(json).unwrap();
    assert_eq!(template.id, "t1");
    assert_eq!(template.name, "SOAP");
}

#[test]
fn test_template_save_routing_follows_persistence() {
    let mut template = Template {
        id: String::new(),
        name: "DAP".to_string(),
        structure: "Data:\nAssessment:\nPlan:".to_string(),
    };
    assert!(!template.is_persisted());

    template.id = "t1".to_string();
    assert!(template.is_persisted());
}

#[test]
fn test_template_draft_has_no_id() {
    let draft = TemplateDraft {
        name: "DAP".to_string(),
        structure: "Data:\nAssessment:\nPlan:".to_string(),
    };
    let value = serde_json::to_value(&draft).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert!(!obj.contains_key("id"));
}

// --- Generation Types ---

#[test]
fn test_generate_request_serialization() {
    let request = GenerateRequest {
        template_id: "t1".to_string(),
        note_id: "n1".to_string(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["template_id"], "t1");
    assert_eq!(value["note_id"], "n1");
}

#[test]
fn test_generate_response_deserialization() {
    let json = json!({
        "generated_note": "Structured summary.",
        "template_used": "SOAP",
        "timestamp": "2024-01-15T10:05:00Z",
        "note_id": "n1"
    });
    let response: GenerateResponse = serde_json::from_value(json).unwrap();
    assert_eq!(response.generated_note, "Structured summary.");
    assert_eq!(response.note_id, "n1");
}

// --- Errors ---

#[test]
fn test_api_error_display() {
    let err = ApiError::http(404, "Failed to fetch note");
    assert_eq!(err.to_string(), "Failed to fetch note (HTTP 404)");

    let err = ApiError::transport("Failed to fetch notes");
    assert_eq!(err.to_string(), "Failed to fetch notes");
    assert_eq!(err.status, None);
}
