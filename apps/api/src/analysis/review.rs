//! Recruiter-style review: strong points, gaps, verdict reasoning and a checklist.

use serde::{Deserialize, Serialize};

use crate::analysis::aggregator::ScoreBundle;
use crate::analysis::content::ContentSignals;
use crate::analysis::formatting::FormattingResult;

const SOLID_SKILL_COUNT: usize = 5;
const MIN_CHECKLIST_SKILLS: usize = 3;
const MIN_PROJECTS: usize = 2;
const MIN_ACTION_VERBS: usize = 3;
/// Email and phone both present.
const CONTACT_COMPLETE_POINTS: u8 = 14;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictReason {
    pub positive: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub name: String,
    pub status: String,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsSafety {
    pub word_count: usize,
    pub optimal_length: bool,
    pub table_free: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruiterReview {
    pub strong_points: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub verdict_reasons: Vec<VerdictReason>,
    pub ats_safety: AtsSafety,
    pub checklist: Vec<ChecklistItem>,
}

pub struct ReviewInputs<'a> {
    pub text: &'a str,
    pub word_count: usize,
    pub skill_count: usize,
    pub signals: &'a ContentSignals,
    pub formatting: &'a FormattingResult,
    pub scores: &'a ScoreBundle,
}

pub fn build_review(inputs: &ReviewInputs<'_>) -> RecruiterReview {
    RecruiterReview {
        strong_points: strong_points(inputs),
        improvement_areas: improvement_areas(inputs),
        verdict_reasons: verdict_reasons(inputs.scores),
        ats_safety: AtsSafety {
            word_count: inputs.word_count,
            optimal_length: (300..=1000).contains(&inputs.word_count),
            table_free: !inputs.formatting.has_table_risk,
        },
        checklist: checklist(inputs),
    }
}

fn strong_points(inputs: &ReviewInputs<'_>) -> Vec<String> {
    let signals = inputs.signals;
    let mut points = Vec::new();
    if !signals.project_lines.is_empty() {
        points.push(format!("{} project descriptions found", signals.project_lines.len()));
    }
    if !signals.action_verb_hits.is_empty() {
        points.push(format!("{} action verbs used", signals.distinct_verbs()));
    }
    if !signals.quantified_hits.is_empty() {
        points.push(format!("{} quantified achievements", signals.quantified_hits.len()));
    }
    if inputs.skill_count >= SOLID_SKILL_COUNT {
        points.push(format!("{} technical skills listed", inputs.skill_count));
    }
    points
}

fn improvement_areas(inputs: &ReviewInputs<'_>) -> Vec<String> {
    let signals = inputs.signals;
    let mut areas = Vec::new();
    if signals.project_lines.len() < MIN_PROJECTS {
        areas.push("Add more project descriptions".to_string());
    }
    if signals.quantified_hits.is_empty() {
        areas.push("Include quantified results/metrics".to_string());
    }
    if signals.action_verb_hits.len() < MIN_ACTION_VERBS {
        areas.push("Use more action verbs".to_string());
    }
    if inputs.skill_count < SOLID_SKILL_COUNT {
        areas.push("Expand technical skills section".to_string());
    }
    areas
}

fn verdict_reasons(scores: &ScoreBundle) -> Vec<VerdictReason> {
    let reason = |positive: bool, good: &str, bad: &str| VerdictReason {
        positive,
        message: (if positive { good } else { bad }).to_string(),
    };
    vec![
        reason(
            scores.ats_score >= 70,
            "Strong ATS score indicating good keyword optimization",
            "ATS score below optimal - needs keyword improvements",
        ),
        reason(
            scores.skill_match_pct >= 70.0,
            "Good skill alignment with job requirements",
            "Skill gaps identified that need addressing",
        ),
        reason(
            scores.project_quality >= 60,
            "Solid project experience demonstrated",
            "Project descriptions need more detail and metrics",
        ),
    ]
}

fn checklist(inputs: &ReviewInputs<'_>) -> Vec<ChecklistItem> {
    let signals = inputs.signals;
    let contact_complete = inputs.formatting.contact_score >= CONTACT_COMPLETE_POINTS;
    let pipe_free = !inputs.text.contains('|');

    vec![
        item(
            "Contact Information",
            (if contact_complete { "Complete" } else { "Incomplete" }).to_string(),
            contact_complete,
        ),
        item(
            "Skills Section",
            format!("{} skills found", inputs.skill_count),
            inputs.skill_count >= MIN_CHECKLIST_SKILLS,
        ),
        item(
            "Project Descriptions",
            format!("{} projects", signals.project_lines.len()),
            signals.project_lines.len() >= MIN_PROJECTS,
        ),
        item(
            "Action Verbs",
            format!("{} used", signals.action_verb_hits.len()),
            signals.action_verb_hits.len() >= MIN_ACTION_VERBS,
        ),
        item(
            "Quantified Results",
            format!("{} metrics", signals.quantified_hits.len()),
            !signals.quantified_hits.is_empty(),
        ),
        item(
            "ATS Formatting",
            (if pipe_free { "Clean" } else { "Complex" }).to_string(),
            pipe_free,
        ),
    ]
}

fn item(name: &str, status: String, passed: bool) -> ChecklistItem {
    ChecklistItem {
        name: name.to_string(),
        status,
        passed,
    }
}
