//! Suggestion Generator: prioritized improvement items.
//!
//! Every applicable rule fires in a fixed order (high-priority rules first), then
//! the list is cut to `MAX_SUGGESTIONS`. There is no sort step.

use serde::{Deserialize, Serialize};

use crate::analysis::content::ContentSignals;
use crate::analysis::skill_matcher::MatchResult;

pub const MAX_SUGGESTIONS: usize = 5;
/// Skills listed per "missing skills" suggestion.
const MAX_LISTED_SKILLS: usize = 5;
const MIN_PROJECT_LINES: usize = 2;
/// Compared against `FormattingResult::contact_subscore`.
pub const CONTACT_THRESHOLD: i32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    #[allow(dead_code)]
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub section: String,
}

impl Suggestion {
    fn new(priority: Priority, title: &str, description: String, section: &str) -> Self {
        Self {
            priority,
            title: title.to_string(),
            description,
            section: section.to_string(),
        }
    }
}

pub fn generate_suggestions(
    matches: &MatchResult,
    signals: &ContentSignals,
    contact_subscore: i32,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if !matches.missing_required.is_empty() {
        suggestions.push(Suggestion::new(
            Priority::High,
            "Add Missing Required Skills",
            format!(
                "Critical skills missing from your resume: {}. Add these to your skills section or highlight in experience.",
                list_first(&matches.missing_required)
            ),
            "Skills",
        ));
    }

    if signals.project_lines.len() < MIN_PROJECT_LINES {
        suggestions.push(Suggestion::new(
            Priority::High,
            "Strengthen Project Section",
            "Add at least 2-3 detailed project descriptions with measurable outcomes. Use the STAR method.".to_string(),
            "Projects",
        ));
    }

    if contact_subscore < CONTACT_THRESHOLD {
        suggestions.push(Suggestion::new(
            Priority::High,
            "Complete Contact Information",
            "Ensure your email, phone, and LinkedIn URL are present and professional.".to_string(),
            "Contact",
        ));
    }

    if !matches.missing_preferred.is_empty() {
        suggestions.push(Suggestion::new(
            Priority::Medium,
            "Add Preferred Skills",
            format!(
                "Consider adding these nice-to-have skills: {}",
                list_first(&matches.missing_preferred)
            ),
            "Skills",
        ));
    }

    if signals.quantified_hits.is_empty() {
        suggestions.push(Suggestion::new(
            Priority::Medium,
            "Quantify Your Achievements",
            "Add specific metrics, percentages, or numbers to demonstrate impact (e.g., \"Improved performance by 40%\").".to_string(),
            "Experience",
        ));
    }

    if signals.action_verb_hits.is_empty() {
        suggestions.push(Suggestion::new(
            Priority::Medium,
            "Use Action Verbs",
            "Start bullet points with strong action verbs like \"Developed,\" \"Optimized,\" \"Led,\" \"Achieved.\"".to_string(),
            "Experience",
        ));
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

fn list_first(skills: &[String]) -> String {
    skills
        .iter()
        .take(MAX_LISTED_SKILLS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::content::analyze_projects;
    use crate::analysis::skill_matcher::match_skills;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_everything_missing_truncates_to_five() {
        let matches = match_skills("", &skills(&["python"]), &skills(&["docker"]));
        let suggestions = generate_suggestions(&matches, &ContentSignals::default(), 0);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        let titles: Vec<&str> = suggestions.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Add Missing Required Skills",
                "Strengthen Project Section",
                "Complete Contact Information",
                "Add Preferred Skills",
                "Quantify Your Achievements",
            ]
        );
    }

    #[test]
    fn test_high_priority_precedes_medium() {
        let matches = match_skills("", &skills(&["python"]), &skills(&["docker"]));
        let suggestions = generate_suggestions(&matches, &ContentSignals::default(), 0);
        let priorities: Vec<Priority> = suggestions.iter().map(|s| s.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted);
    }

    #[test]
    fn test_missing_skills_list_capped_at_five() {
        let required = skills(&["a1", "b2", "c3", "d4", "e5", "f6", "g7"]);
        let matches = match_skills("", &required, &[]);
        let suggestions = generate_suggestions(&matches, &ContentSignals::default(), 20);
        assert!(suggestions[0].description.contains("a1, b2, c3, d4, e5."));
        assert!(!suggestions[0].description.contains("f6"));
    }

    #[test]
    fn test_strong_resume_gets_no_suggestions() {
        let text = "Developed project alpha with 40% gains\nBuilt project beta for 300 users";
        let matches = match_skills(text, &skills(&["project"]), &[]);
        let signals = analyze_projects(text);
        let suggestions = generate_suggestions(&matches, &signals, 20);
        assert!(suggestions.is_empty(), "{suggestions:?}");
    }

    #[test]
    fn test_contact_threshold() {
        let matches = MatchResult::default();
        let signals = analyze_projects("Led project one by 10%\nLed project two by 20%");
        assert!(generate_suggestions(&matches, &signals, 14).is_empty());
        let below = generate_suggestions(&matches, &signals, 13);
        assert_eq!(below.len(), 1);
        assert_eq!(below[0].section, "Contact");
    }

    #[test]
    fn test_action_verb_rule_fires_last() {
        let matches = MatchResult::default();
        let signals = ContentSignals::default();
        let suggestions = generate_suggestions(&matches, &signals, 20);
        let last = suggestions.last().unwrap();
        assert_eq!(last.title, "Use Action Verbs");
        assert_eq!(last.priority, Priority::Medium);
    }
}
