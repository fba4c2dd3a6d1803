//! Skill Matcher: case-insensitive substring containment of skills in resume text.
//!
//! There is no tokenization and no word-boundary check: "go" matches inside
//! "google" and "r" matches almost anything. Short skills are accepted noise.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::taxonomy::skills::{SkillCategory, SKILL_TAXONOMY};

/// Partition of a role's skill lists into matched and missing.
/// For each list, `matched ∪ missing` is the input list in its original order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched_required: Vec<String>,
    pub missing_required: Vec<String>,
    pub matched_preferred: Vec<String>,
    pub missing_preferred: Vec<String>,
}

impl MatchResult {
    pub fn required_match_rate(&self) -> f64 {
        rate(self.matched_required.len(), self.missing_required.len())
    }

    pub fn preferred_match_rate(&self) -> f64 {
        rate(self.matched_preferred.len(), self.missing_preferred.len())
    }

    pub fn total_matched(&self) -> usize {
        self.matched_required.len() + self.matched_preferred.len()
    }

    pub fn total_skills(&self) -> usize {
        self.total_matched() + self.missing_required.len() + self.missing_preferred.len()
    }
}

/// Denominator is floored at 1 so an empty list rates 0.
fn rate(matched: usize, missing: usize) -> f64 {
    matched as f64 / (matched + missing).max(1) as f64
}

/// Taxonomy skills found in one category, in taxonomy order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryHits {
    pub category: String,
    pub display_name: String,
    pub skills: Vec<String>,
}

/// Output of a full taxonomy scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomySkills {
    /// Deduplicated across categories.
    pub found: BTreeSet<String>,
    /// Only categories with at least one hit.
    pub by_category: Vec<CategoryHits>,
}

/// Splits each skill list into matched/missing against the lowered document.
/// A skill listed twice in the input is reported twice; the engine does not
/// rewrite the caller's lists.
pub fn match_skills(text: &str, required: &[String], preferred: &[String]) -> MatchResult {
    let text_lower = text.to_lowercase();
    let (matched_required, missing_required) = partition(&text_lower, required);
    let (matched_preferred, missing_preferred) = partition(&text_lower, preferred);

    MatchResult {
        matched_required,
        missing_required,
        matched_preferred,
        missing_preferred,
    }
}

fn partition(text_lower: &str, skills: &[String]) -> (Vec<String>, Vec<String>) {
    skills
        .iter()
        .cloned()
        .partition(|skill| text_lower.contains(&skill.to_lowercase()))
}

/// Scans the whole skill taxonomy. A skill listed under several categories is
/// reported under each of them but only once in `found`.
pub fn detect_taxonomy_skills(text: &str) -> TaxonomySkills {
    scan_categories(text, SKILL_TAXONOMY)
}

fn scan_categories(text: &str, categories: &[SkillCategory]) -> TaxonomySkills {
    let text_lower = text.to_lowercase();
    let mut found = BTreeSet::new();
    let mut by_category = Vec::new();

    for category in categories {
        let hits: Vec<String> = category
            .skills
            .iter()
            .filter(|skill| text_lower.contains(*skill))
            .map(|skill| skill.to_string())
            .collect();

        if hits.is_empty() {
            continue;
        }
        found.extend(hits.iter().cloned());
        by_category.push(CategoryHits {
            category: category.name.to_string(),
            display_name: category.display_name(),
            skills: hits,
        });
    }

    TaxonomySkills { found, by_category }
}
