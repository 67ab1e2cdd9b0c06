//! Per-note generation state.
//!
//! Client-only overlay tracking in-flight and completed AI generations,
//! keyed by note id. The page wraps one [`GenerationLedger`] in a signal;
//! nothing here is persisted, so a reload falls back to whatever
//! `generated_response` was last stored on the note itself.

use std::collections::HashMap;

/// Generation status of a single note.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Generating,
    Generated(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    seq: u64,
    status: GenerationStatus,
}

/// Tracks generation status per note id with sequence fencing.
///
/// Each `begin` hands out a fresh token; a completion or failure is applied
/// only if its token is still the note's latest, so rapid repeated
/// re-generate clicks cannot have a stale response overwrite a newer one.
/// Entries for different notes are fully independent.
#[derive(Debug, Clone, Default)]
pub struct GenerationLedger {
    entries: HashMap<String, Entry>,
    next_seq: u64,
}

impl GenerationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a note as generating and return the fence token for this attempt.
    pub fn begin(&mut self, note_id: &str) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.entries.insert(
            note_id.to_string(),
            Entry {
                seq,
                status: GenerationStatus::Generating,
            },
        );
        seq
    }

    /// Record a successful generation. Returns false if `seq` is stale.
    pub fn complete(&mut self, note_id: &str, seq: u64, text: String) -> bool {
        self.apply(note_id, seq, GenerationStatus::Generated(text))
    }

    /// Record a failed generation. Returns false if `seq` is stale.
    pub fn fail(&mut self, note_id: &str, seq: u64, reason: String) -> bool {
        self.apply(note_id, seq, GenerationStatus::Failed(reason))
    }

    fn apply(&mut self, note_id: &str, seq: u64, status: GenerationStatus) -> bool {
        match self.entries.get_mut(note_id) {
            Some(entry) if entry.seq == seq => {
                entry.status = status;
                true
            }
            _ => false,
        }
    }

    /// Status of a note; `Idle` when the note has no entry.
    pub fn status(&self, note_id: &str) -> GenerationStatus {
        self.entries
            .get(note_id)
            .map(|entry| entry.status.clone())
            .unwrap_or_default()
    }

    pub fn is_generating(&self, note_id: &str) -> bool {
        matches!(self.status(note_id), GenerationStatus::Generating)
    }

    /// Most recently generated text for a note, if any.
    pub fn generated_text(&self, note_id: &str) -> Option<String> {
        match self.entries.get(note_id) {
            Some(Entry {
                status: GenerationStatus::Generated(text),
                ..
            }) => Some(text.clone()),
            _ => None,
        }
    }
}
