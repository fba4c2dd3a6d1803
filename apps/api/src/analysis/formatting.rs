//! Formatting Analyzer: structural and ATS-safety signals.
//!
//! Score is additive across independent checks. The table-risk check only ever
//! subtracts, and nothing here clamps the total.

use serde::{Deserialize, Serialize};

use crate::taxonomy::patterns::{
    BULLET_GLYPHS, COLUMN_GAP, EMAIL_RE, LINKEDIN_RE, PHONE_RE, SECTION_HEADERS,
};

/// Only the first N non-empty lines are inspected for bullets and line length.
const HEAD_LINES: usize = 30;
/// Lines at or above this length are ignored for the average.
const MAX_MEASURED_LINE: usize = 100;
const TABLE_PENALTY: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Pass,
    Warn,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormattingCheck {
    SectionHeaders,
    Bullets,
    LineLength,
    TableRisk,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingFeedback {
    pub check: FormattingCheck,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingResult {
    pub score: i32,
    /// Email 7 + phone 7 + LinkedIn 6. Already included in `score`.
    pub contact_score: u8,
    pub has_table_risk: bool,
    pub feedback: Vec<FormattingFeedback>,
}

impl FormattingResult {
    /// Contact sub-score fed to the suggestion rules: a floored third of the
    /// whole formatting score, so strong structure can offset missing details.
    pub fn contact_subscore(&self) -> i32 {
        self.score.div_euclid(3)
    }
}

pub fn analyze_formatting(text: &str) -> FormattingResult {
    let text_lower = text.to_lowercase();
    let non_empty: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let head = &non_empty[..non_empty.len().min(HEAD_LINES)];

    let mut score = 0;
    let mut feedback = Vec::new();
    let mut record = |points: i32, check, severity, message: &str| {
        score += points;
        feedback.push(FormattingFeedback {
            check,
            severity,
            message: message.to_string(),
        });
    };

    let header_count = SECTION_HEADERS
        .iter()
        .filter(|h| text_lower.contains(*h))
        .count();
    match header_count {
        n if n >= 4 => record(20, FormattingCheck::SectionHeaders, Severity::Pass, "Excellent section organization"),
        n if n >= 2 => record(12, FormattingCheck::SectionHeaders, Severity::Warn, "Basic section organization"),
        _ => record(5, FormattingCheck::SectionHeaders, Severity::Fail, "Missing clear section headers"),
    }

    let bullet_count = head
        .iter()
        .filter(|line| line.contains(BULLET_GLYPHS))
        .count();
    match bullet_count {
        n if n >= 10 => record(15, FormattingCheck::Bullets, Severity::Pass, "Good use of bullet points"),
        n if n >= 5 => record(10, FormattingCheck::Bullets, Severity::Warn, "Some bullet points used"),
        _ => record(3, FormattingCheck::Bullets, Severity::Fail, "Consider using bullet points"),
    }

    let avg = average_line_length(head);
    if (30.0..=80.0).contains(&avg) {
        record(15, FormattingCheck::LineLength, Severity::Pass, "Good line length consistency");
    } else {
        record(7, FormattingCheck::LineLength, Severity::Warn, "Varying line lengths");
    }

    let has_table_risk = text.contains('|') || text.contains(COLUMN_GAP);
    if has_table_risk {
        record(
            -TABLE_PENALTY,
            FormattingCheck::TableRisk,
            Severity::Warn,
            "Potential table/column structure detected (ATS risk)",
        );
    }

    let contact_score = contact_score(text, &text_lower);

    FormattingResult {
        score: score + i32::from(contact_score),
        contact_score,
        has_table_risk,
        feedback,
    }
}

/// Mean char length of lines shorter than 100 chars; 0 when there are none.
fn average_line_length(lines: &[&str]) -> f64 {
    let lengths: Vec<usize> = lines
        .iter()
        .map(|line| line.chars().count())
        .filter(|len| *len < MAX_MEASURED_LINE)
        .collect();
    if lengths.is_empty() {
        return 0.0;
    }
    lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
}

fn contact_score(text: &str, text_lower: &str) -> u8 {
    let mut points = 0;
    if EMAIL_RE.is_match(text) {
        points += 7;
    }
    if PHONE_RE.is_match(text) {
        points += 7;
    }
    if LINKEDIN_RE.is_match(text_lower) {
        points += 6;
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn severity_of(result: &FormattingResult, check: FormattingCheck) -> Option<Severity> {
        result
            .feedback
            .iter()
            .find(|f| f.check == check)
            .map(|f| f.severity)
    }

    #[test]
    fn test_empty_text_floor() {
        let result = analyze_formatting("");
        // 5 (headers) + 3 (bullets) + 7 (line length) + 0 contact
        assert_eq!(result.score, 15);
        assert_eq!(result.contact_score, 0);
        assert_eq!(result.feedback.len(), 3);
        assert!(!result.has_table_risk);
    }

    #[test]
    fn test_header_tiers() {
        let four = analyze_formatting("experience education skills summary");
        assert_eq!(severity_of(&four, FormattingCheck::SectionHeaders), Some(Severity::Pass));
        let two = analyze_formatting("education and objective");
        assert_eq!(severity_of(&two, FormattingCheck::SectionHeaders), Some(Severity::Warn));
    }

    #[test]
    fn test_repeated_header_counts_once() {
        let result = analyze_formatting("education education education");
        assert_eq!(severity_of(&result, FormattingCheck::SectionHeaders), Some(Severity::Fail));
    }

    #[test]
    fn test_bullets_only_counted_in_first_thirty_lines() {
        let mut text = String::new();
        for _ in 0..30 {
            text.push_str("plain line without glyph\n");
        }
        for _ in 0..12 {
            text.push_str("• late bullet\n");
        }
        let result = analyze_formatting(&text);
        assert_eq!(severity_of(&result, FormattingCheck::Bullets), Some(Severity::Fail));
    }

    #[test]
    fn test_bullet_pass_tier() {
        let text = "• item number one\n".repeat(10);
        let result = analyze_formatting(&text);
        assert_eq!(severity_of(&result, FormattingCheck::Bullets), Some(Severity::Pass));
    }

    #[test]
    fn test_line_length_window() {
        // 40 chars per line
        let text = "a".repeat(40) + "\n" + &"b".repeat(40);
        let result = analyze_formatting(&text);
        assert_eq!(severity_of(&result, FormattingCheck::LineLength), Some(Severity::Pass));

        let short = analyze_formatting("short\nlines");
        assert_eq!(severity_of(&short, FormattingCheck::LineLength), Some(Severity::Warn));
    }

    #[test]
    fn test_contact_signals_are_additive() {
        let email_only = analyze_formatting("jane@example.com");
        assert_eq!(email_only.contact_score, 7);

        let all = analyze_formatting("jane@example.com\n555-123-4567\nlinkedin.com/in/jane");
        assert_eq!(all.contact_score, 20);
    }

    #[test]
    fn test_contact_subscore_floors() {
        let with_score = |score| FormattingResult {
            score,
            contact_score: 0,
            has_table_risk: false,
            feedback: Vec::new(),
        };
        assert_eq!(with_score(42).contact_subscore(), 14);
        assert_eq!(with_score(41).contact_subscore(), 13);
        assert_eq!(with_score(50).contact_subscore(), 16);
        assert_eq!(with_score(-4).contact_subscore(), -2);
    }

    #[test]
    fn test_contact_emits_no_feedback() {
        let result = analyze_formatting("jane@example.com");
        assert_eq!(result.feedback.len(), 3);
    }

    #[test]
    fn test_pipe_triggers_table_penalty() {
        let plain = analyze_formatting("Name Role");
        let piped = analyze_formatting("Name | Role");
        assert!(piped.has_table_risk);
        assert_eq!(piped.score, plain.score - 10);
        assert_eq!(severity_of(&piped, FormattingCheck::TableRisk), Some(Severity::Warn));
    }

    #[test]
    fn test_column_gap_triggers_table_penalty() {
        let result = analyze_formatting("Skills          Python");
        assert!(result.has_table_risk);
        let nine = analyze_formatting("Skills         Python");
        assert!(!nine.has_table_risk);
    }
}
