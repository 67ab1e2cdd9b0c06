use serde::{Deserialize, Serialize};

use super::core::{delete_json, get_json, send_json, ApiError, DeleteAck};

// ============================================================================
// Template Types
// ============================================================================

/// A reusable structural prompt definition for note generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub structure: String,
}

impl Template {
    /// Whether this template already exists on the server. Saving a
    /// persisted template routes to update, an unpersisted one to create.
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Creation/update payload for a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDraft {
    pub name: String,
    pub structure: String,
}

// ============================================================================
// Template Operations
// ============================================================================

pub async fn list_templates() -> Result<Vec<Template>, ApiError> {
    get_json("/templates", "Failed to fetch templates").await
}

pub async fn get_template(template_id: &str) -> Result<Template, ApiError> {
    get_json(
        &format!("/templates/{template_id}"),
        "Failed to fetch template",
    )
    .await
}

pub async fn create_template(draft: &TemplateDraft) -> Result<Template, ApiError> {
    send_json("POST", "/templates", draft, "Failed to create template").await
}

pub async fn update_template(template_id: &str, draft: &TemplateDraft) -> Result<Template, ApiError> {
    send_json(
        "PUT",
        &format!("/templates/{template_id}"),
        draft,
        "Failed to update template",
    )
    .await
}

pub async fn delete_template(template_id: &str) -> Result<DeleteAck, ApiError> {
    delete_json(
        &format!("/templates/{template_id}"),
        "Failed to delete template",
    )
    .await
}
