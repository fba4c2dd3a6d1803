//! Full analysis pipeline: text + role → `AnalysisReport`.
//!
//! The four analyzers run independently over the same text, then the aggregator
//! and suggestion generator consume their outputs. Pure and synchronous.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::aggregator::{aggregate, ScoreBundle};
use crate::analysis::bullets::{generate_bullet_improvements, BulletImprovement};
use crate::analysis::content::{analyze_projects, ContentSignals};
use crate::analysis::formatting::{analyze_formatting, FormattingResult};
use crate::analysis::review::{build_review, RecruiterReview, ReviewInputs};
use crate::analysis::skill_matcher::{detect_taxonomy_skills, match_skills, MatchResult, TaxonomySkills};
use crate::analysis::suggestions::{generate_suggestions, Suggestion};
use crate::analysis::AnalysisError;
use crate::taxonomy::RoleProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub role: RoleProfile,
    /// Carried through for display; not used in scoring.
    pub job_description: Option<String>,
    pub word_count: usize,
    pub skill_match: MatchResult,
    pub skills: TaxonomySkills,
    pub content: ContentSignals,
    pub formatting: FormattingResult,
    pub scores: ScoreBundle,
    pub verdict_message: String,
    pub suggestions: Vec<Suggestion>,
    pub bullet_improvements: Vec<BulletImprovement>,
    pub review: RecruiterReview,
}

/// Scores `text` against `role`. Refuses whitespace-only text instead of
/// producing a floor score for a document that failed to extract.
pub fn analyze(
    text: &str,
    role: &RoleProfile,
    job_description: Option<&str>,
) -> Result<AnalysisReport, AnalysisError> {
    if text.trim().is_empty() {
        return Err(AnalysisError::NoContent);
    }

    let skill_match = match_skills(text, &role.required_skills, &role.preferred_skills);
    let skills = detect_taxonomy_skills(text);
    let content = analyze_projects(text);
    let formatting = analyze_formatting(text);

    let scores = aggregate(text, &skill_match, formatting.score);
    let suggestions = generate_suggestions(&skill_match, &content, formatting.contact_subscore());
    let bullet_improvements = generate_bullet_improvements(text);

    let word_count = text.split_whitespace().count();
    let review = build_review(&ReviewInputs {
        text,
        word_count,
        skill_count: skills.found.len(),
        signals: &content,
        formatting: &formatting,
        scores: &scores,
    });

    info!(
        role = %role.name,
        ats_score = scores.ats_score,
        shortlist_probability = scores.shortlist_probability,
        verdict = ?scores.verdict,
        "Resume analysis complete"
    );

    Ok(AnalysisReport {
        role: role.clone(),
        job_description: job_description
            .map(str::trim)
            .filter(|jd| !jd.is_empty())
            .map(String::from),
        word_count,
        skill_match,
        skills,
        content,
        formatting,
        verdict_message: scores.verdict.message().to_string(),
        scores,
        suggestions,
        bullet_improvements,
        review,
    })
}
