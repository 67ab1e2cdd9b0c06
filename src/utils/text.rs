//! Text and date helpers for the note form and list.

use chrono::NaiveDate;

/// Inclusive word-count bounds for note content.
///
/// This is the single source of truth shared by the upload button's disabled
/// state, the helper text under the textarea, and the submit handler's
/// blocking check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLimits {
    pub min: usize,
    pub max: usize,
}

impl WordLimits {
    pub const fn contains(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

pub const WORD_LIMITS: WordLimits = WordLimits { min: 10, max: 1000 };

/// Number of whitespace-delimited words in `text`. Blank input counts 0.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Today's date as an ISO `YYYY-MM-DD` string (form default).
pub fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Reduce an ISO-ish timestamp to its `YYYY-MM-DD` date part.
pub fn normalize_session_date(raw: &str) -> String {
    raw.split('T').next().unwrap_or(raw).to_string()
}

/// Human-readable date for list rows; falls back to the raw string when the
/// value does not parse as a date.
pub fn format_display_date(raw: &str) -> String {
    let date_part = raw.split('T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// A run of generated-response text: plain, or emphasized via `*span*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Strong(String),
}

/// Split text into lines of [`Segment`]s, turning `*span*` into `Strong`.
///
/// A pair of asterisks must enclose at least one character; unmatched or
/// adjacent asterisks stay literal.
pub fn emphasis_segments(text: &str) -> Vec<Vec<Segment>> {
    text.lines().map(line_segments).collect()
}

fn line_segments(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut rest = line;

    loop {
        match rest.find('*') {
            None => {
                plain.push_str(rest);
                break;
            }
            Some(start) => {
                let after = &rest[start + 1..];
                match after.find('*') {
                    Some(end) if end > 0 => {
                        plain.push_str(&rest[..start]);
                        if !plain.is_empty() {
                            segments.push(Segment::Plain(std::mem::take(&mut plain)));
                        }
                        segments.push(Segment::Strong(after[..end].to_string()));
                        rest = &after[end + 1..];
                    }
                    _ => {
                        // Unmatched or empty pair: keep this star as literal text.
                        plain.push_str(&rest[..start + 1]);
                        rest = after;
                    }
                }
            }
        }
    }

    if !plain.is_empty() {
        segments.push(Segment::Plain(plain));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // word_count Tests
    // ========================================================================

    #[test]
    fn test_word_count_basic() {
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(word_count("single"), 1);
    }

    #[test]
    fn test_word_count_blank_is_zero() {
        // The previous implementation counted a blank string as one word,
        // which let an empty note look non-empty to the validator.
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("\n\t"), 0);
    }

    #[test]
    fn test_word_count_collapses_whitespace_runs() {
        assert_eq!(word_count("  a   b \n c\t\td  "), 4);
    }

    #[test]
    fn test_word_limits_boundaries() {
        assert!(!WORD_LIMITS.contains(9));
        assert!(WORD_LIMITS.contains(10));
        assert!(WORD_LIMITS.contains(1000));
        assert!(!WORD_LIMITS.contains(1001));
        assert!(!WORD_LIMITS.contains(0));
    }

    // ========================================================================
    // Date Tests
    // ========================================================================

    #[test]
    fn test_normalize_session_date_strips_time() {
        assert_eq!(normalize_session_date("2024-01-15T10:00:00Z"), "2024-01-15");
        assert_eq!(normalize_session_date("2024-01-15"), "2024-01-15");
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date("2024-01-15"), "Jan 15, 2024");
        assert_eq!(format_display_date("2024-03-05T08:30:00Z"), "Mar 5, 2024");
    }

    #[test]
    fn test_format_display_date_falls_back_on_garbage() {
        assert_eq!(format_display_date("not-a-date"), "not-a-date");
        assert_eq!(format_display_date(""), "");
    }

    // ========================================================================
    // emphasis_segments Tests
    // ========================================================================

    #[test]
    fn test_emphasis_simple_span() {
        let lines = emphasis_segments("before *bold* after");
        assert_eq!(
            lines,
            vec![vec![
                Segment::Plain("before ".to_string()),
                Segment::Strong("bold".to_string()),
                Segment::Plain(" after".to_string()),
            ]]
        );
    }

    #[test]
    fn test_emphasis_multiple_lines() {
        let lines = emphasis_segments("*Assessment*\nstable");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], vec![Segment::Strong("Assessment".to_string())]);
        assert_eq!(lines[1], vec![Segment::Plain("stable".to_string())]);
    }

    #[test]
    fn test_emphasis_unmatched_star_stays_plain() {
        let lines = emphasis_segments("a * b");
        assert_eq!(lines, vec![vec![Segment::Plain("a * b".to_string())]]);
    }

    #[test]
    fn test_emphasis_adjacent_stars_stay_literal() {
        let lines = emphasis_segments("**bold**");
        assert_eq!(
            lines,
            vec![vec![
                Segment::Plain("*".to_string()),
                Segment::Strong("bold".to_string()),
                Segment::Plain("*".to_string()),
            ]]
        );
    }

    #[test]
    fn test_emphasis_plain_text_untouched() {
        let lines = emphasis_segments("no markup here");
        assert_eq!(
            lines,
            vec![vec![Segment::Plain("no markup here".to_string())]]
        );
    }
}
