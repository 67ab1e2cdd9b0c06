#[cfg(test)]
mod tests {
    use crate::services::generation::{GenerationLedger, GenerationStatus};

    #[test]
    fn test_status_defaults_to_idle() {
        let ledger = GenerationLedger::new();
        assert_eq!(ledger.status("missing"), GenerationStatus::Idle);
        assert!(!ledger.is_generating("missing"));
        assert_eq!(ledger.generated_text("missing"), None);
    }

    #[test]
    fn test_begin_marks_generating() {
        let mut ledger = GenerationLedger::new();
        ledger.begin("n1");
        assert_eq!(ledger.status("n1"), GenerationStatus::Generating);
        assert!(ledger.is_generating("n1"));
    }

    #[test]
    fn test_complete_stores_generated_text() {
        let mut ledger = GenerationLedger::new();
        let seq = ledger.begin("n1");
        assert!(ledger.complete("n1", seq, "Summary".to_string()));
        assert_eq!(
            ledger.status("n1"),
            GenerationStatus::Generated("Summary".to_string())
        );
        assert_eq!(ledger.generated_text("n1"), Some("Summary".to_string()));
        assert!(!ledger.is_generating("n1"));
    }

    #[test]
    fn test_completion_never_touches_other_notes() {
        let mut ledger = GenerationLedger::new();
        let seq_a = ledger.begin("a");
        let seq_b = ledger.begin("b");

        assert!(ledger.complete("a", seq_a, "for a".to_string()));
        assert_eq!(ledger.status("b"), GenerationStatus::Generating);

        assert!(ledger.complete("b", seq_b, "for b".to_string()));
        assert_eq!(ledger.generated_text("a"), Some("for a".to_string()));
        assert_eq!(ledger.generated_text("b"), Some("for b".to_string()));
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut ledger = GenerationLedger::new();
        let first = ledger.begin("n1");
        let second = ledger.begin("n1");

        // The older request resolves after a newer one started.
        assert!(!ledger.complete("n1", first, "stale".to_string()));
        assert_eq!(ledger.status("n1"), GenerationStatus::Generating);

        assert!(ledger.complete("n1", second, "fresh".to_string()));
        assert_eq!(ledger.generated_text("n1"), Some("fresh".to_string()));
    }

    #[test]
    fn test_stale_failure_does_not_clobber_newer_result() {
        let mut ledger = GenerationLedger::new();
        let first = ledger.begin("n1");
        let second = ledger.begin("n1");
        assert!(ledger.complete("n1", second, "good".to_string()));

        assert!(!ledger.fail("n1", first, "timed out".to_string()));
        assert_eq!(ledger.generated_text("n1"), Some("good".to_string()));
    }

    #[test]
    fn test_fail_records_reason_and_clears_spinner() {
        let mut ledger = GenerationLedger::new();
        let seq = ledger.begin("n1");
        assert!(ledger.fail("n1", seq, "Failed to generate response".to_string()));
        assert_eq!(
            ledger.status("n1"),
            GenerationStatus::Failed("Failed to generate response".to_string())
        );
        assert!(!ledger.is_generating("n1"));
        // A failure leaves no generated text to show; the list falls back to
        // the note's persisted generated_response.
        assert_eq!(ledger.generated_text("n1"), None);
    }

    #[test]
    fn test_regenerate_after_completion() {
        let mut ledger = GenerationLedger::new();
        let seq = ledger.begin("n1");
        assert!(ledger.complete("n1", seq, "v1".to_string()));

        let seq = ledger.begin("n1");
        assert!(ledger.is_generating("n1"));
        assert!(ledger.complete("n1", seq, "v2".to_string()));
        assert_eq!(ledger.generated_text("n1"), Some("v2".to_string()));
    }
}
