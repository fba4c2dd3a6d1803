//! Experience Classifier: buckets seniority from lexical markers, falling back
//! to skill breadth and document length when the markers tie.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::taxonomy::patterns::{JUNIOR_MARKERS, SENIOR_MARKERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Fresher/Entry Level")]
    FresherEntry,
    #[serde(rename = "Junior to Mid Level")]
    JuniorToMid,
    #[serde(rename = "Mid to Senior Level")]
    MidToSenior,
    #[serde(rename = "Senior/Experienced Level")]
    SeniorExperienced,
}

impl ExperienceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FresherEntry => "Fresher/Entry Level",
            Self::JuniorToMid => "Junior to Mid Level",
            Self::MidToSenior => "Mid to Senior Level",
            Self::SeniorExperienced => "Senior/Experienced Level",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Each marker counts at most once, however often it occurs.
pub fn classify_experience(text: &str, found_skill_count: usize) -> ExperienceLevel {
    let text_lower = text.to_lowercase();
    let junior = count_markers(&text_lower, JUNIOR_MARKERS);
    let senior = count_markers(&text_lower, SENIOR_MARKERS);

    if junior > senior {
        return ExperienceLevel::FresherEntry;
    }
    if senior > junior {
        return ExperienceLevel::SeniorExperienced;
    }

    let word_count = text.split_whitespace().count();
    if found_skill_count >= 10 && word_count >= 500 {
        ExperienceLevel::MidToSenior
    } else if found_skill_count >= 5 && word_count >= 300 {
        ExperienceLevel::JuniorToMid
    } else {
        ExperienceLevel::FresherEntry
    }
}

fn count_markers(text_lower: &str, markers: &[&str]) -> usize {
    markers.iter().filter(|m| text_lower.contains(*m)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_junior_markers_win() {
        assert_eq!(
            classify_experience("Software intern and graduate student", 20),
            ExperienceLevel::FresherEntry
        );
    }

    #[test]
    fn test_senior_markers_win() {
        assert_eq!(
            classify_experience("Senior engineer, team lead", 0),
            ExperienceLevel::SeniorExperienced
        );
    }

    #[test]
    fn test_markers_take_precedence_over_fallback() {
        let text = format!("{} senior", words(600));
        assert_eq!(classify_experience(&text, 0), ExperienceLevel::SeniorExperienced);
    }

    #[test]
    fn test_tie_falls_back_to_skills_and_words() {
        assert_eq!(classify_experience(&words(500), 10), ExperienceLevel::MidToSenior);
        assert_eq!(classify_experience(&words(300), 5), ExperienceLevel::JuniorToMid);
        assert_eq!(classify_experience(&words(299), 5), ExperienceLevel::FresherEntry);
        assert_eq!(classify_experience(&words(800), 4), ExperienceLevel::FresherEntry);
    }

    #[test]
    fn test_balanced_markers_tie() {
        // one junior, one senior marker
        let text = format!("{} junior senior", words(498));
        assert_eq!(classify_experience(&text, 12), ExperienceLevel::MidToSenior);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(classify_experience("", 0), ExperienceLevel::FresherEntry);
    }

    #[test]
    fn test_label_round_trips_through_serde() {
        let json = serde_json::to_string(&ExperienceLevel::JuniorToMid).unwrap();
        assert_eq!(json, "\"Junior to Mid Level\"");
        assert_eq!(ExperienceLevel::SeniorExperienced.to_string(), "Senior/Experienced Level");
    }
}
