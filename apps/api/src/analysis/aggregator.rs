//! Score Aggregator: combines sub-scores into the ATS score, shortlist
//! probability and hiring verdict.
//!
//! Every weight and threshold here is a fixed step function so that a given
//! (text, role) pair always produces the same numbers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::content::{analyze_projects, ContentSignals};
use crate::analysis::experience::{classify_experience, ExperienceLevel};
use crate::analysis::skill_matcher::{detect_taxonomy_skills, MatchResult};

const KEYWORD_REQUIRED_WEIGHT: f64 = 20.0;
const KEYWORD_PREFERRED_WEIGHT: f64 = 10.0;
const FORMATTING_CAP: i32 = 20;
const SKILL_CAP: usize = 20;
const PROJECT_CAP: usize = 20;

const SHORTLIST_MIN: i32 = 5;
const SHORTLIST_MAX: i32 = 95;

/// Skill match reported when the role lists no skills at all.
const NEUTRAL_SKILL_MATCH_PCT: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Hire,
    Borderline,
    Reject,
}

impl Verdict {
    pub fn from_probability(shortlist_probability: u8) -> Self {
        match shortlist_probability {
            p if p >= 70 => Self::Hire,
            p if p >= 50 => Self::Borderline,
            _ => Self::Reject,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Hire => "Your resume is well-positioned for this role. Consider tailoring it slightly for each application.",
            Self::Borderline => "Your resume has potential but needs improvements. Focus on the suggestions above to increase your chances.",
            Self::Reject => "Your resume needs significant improvements. Follow the actionable suggestions above to transform your resume.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
    CriticalIssues,
}

impl ScoreBand {
    pub fn from_ats(ats_score: u8) -> Self {
        match ats_score {
            s if s >= 80 => Self::Excellent,
            s if s >= 60 => Self::Good,
            s if s >= 40 => Self::NeedsWork,
            _ => Self::CriticalIssues,
        }
    }
}

/// Points contributed by each ATS component before the final clamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// 0..=30
    pub keyword: f64,
    /// At most 20; may be negative when formatting is penalised.
    pub formatting: i32,
    /// 0..=20
    pub skills: u32,
    /// 0..=20
    pub projects: u32,
    /// 3, 7 or 10
    pub length: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.keyword
            + f64::from(self.formatting)
            + f64::from(self.skills)
            + f64::from(self.projects)
            + f64::from(self.length)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBundle {
    pub ats_score: u8,
    pub skill_match_pct: f64,
    pub project_quality: u8,
    pub shortlist_probability: u8,
    pub experience_level: ExperienceLevel,
    pub verdict: Verdict,
    pub band: ScoreBand,
    pub breakdown: ScoreBreakdown,
}

/// Recomputes every derived score from scratch; nothing is cached between calls.
pub fn aggregate(text: &str, matches: &MatchResult, formatting_score: i32) -> ScoreBundle {
    let taxonomy = detect_taxonomy_skills(text);
    let signals = analyze_projects(text);
    let word_count = text.split_whitespace().count();

    let breakdown = ScoreBreakdown {
        keyword: keyword_points(matches),
        formatting: formatting_score.min(FORMATTING_CAP),
        skills: (2 * taxonomy.found.len()).min(SKILL_CAP) as u32,
        projects: project_points(&signals),
        length: length_points(word_count),
    };
    let ats_score = breakdown.total().clamp(0.0, 100.0) as u8;

    let skill_match_pct = skill_match_pct(matches);
    let project_quality = project_quality(&signals);
    let shortlist_probability = shortlist_probability(ats_score, skill_match_pct, project_quality);
    let verdict = Verdict::from_probability(shortlist_probability);

    debug!(
        keyword = breakdown.keyword,
        formatting = breakdown.formatting,
        skills = breakdown.skills,
        projects = breakdown.projects,
        length = breakdown.length,
        ats_score,
        shortlist_probability,
        "Aggregated ATS score"
    );

    ScoreBundle {
        ats_score,
        skill_match_pct,
        project_quality,
        shortlist_probability,
        experience_level: classify_experience(text, taxonomy.found.len()),
        verdict,
        band: ScoreBand::from_ats(ats_score),
        breakdown,
    }
}

fn keyword_points(matches: &MatchResult) -> f64 {
    matches.required_match_rate() * KEYWORD_REQUIRED_WEIGHT
        + matches.preferred_match_rate() * KEYWORD_PREFERRED_WEIGHT
}

fn project_points(signals: &ContentSignals) -> u32 {
    let raw = 5 * signals.project_lines.len()
        + 3 * signals.quantified_hits.len()
        + 2 * signals.action_verb_hits.len();
    raw.min(PROJECT_CAP) as u32
}

/// Full marks for 300..=1000 words.
pub fn length_points(word_count: usize) -> u32 {
    match word_count {
        300..=1000 => 10,
        200..=299 | 1001..=1500 => 7,
        _ => 3,
    }
}

/// Share of the role's combined skill list found in the resume, 0..=100.
pub fn skill_match_pct(matches: &MatchResult) -> f64 {
    let total = matches.total_skills();
    if total == 0 {
        return NEUTRAL_SKILL_MATCH_PCT;
    }
    matches.total_matched() as f64 / total as f64 * 100.0
}

pub fn project_quality(signals: &ContentSignals) -> u8 {
    let raw = 20 * signals.project_lines.len()
        + 15 * signals.quantified_hits.len()
        + 10 * signals.action_verb_hits.len();
    raw.min(100) as u8
}

pub fn shortlist_probability(ats_score: u8, skill_match_pct: f64, project_quality: u8) -> u8 {
    let adjusted = i32::from(ats_score)
        + tier_adjustment(skill_match_pct)
        + tier_adjustment(f64::from(project_quality));
    adjusted.clamp(SHORTLIST_MIN, SHORTLIST_MAX) as u8
}

fn tier_adjustment(pct: f64) -> i32 {
    if pct >= 80.0 {
        10
    } else if pct >= 60.0 {
        5
    } else if pct < 40.0 {
        -10
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::formatting::analyze_formatting;
    use crate::analysis::skill_matcher::match_skills;
    use crate::taxonomy::RoleProfile;
    use proptest::prelude::*;

    fn score(text: &str, role: &RoleProfile) -> ScoreBundle {
        let matches = match_skills(text, &role.required_skills, &role.preferred_skills);
        aggregate(text, &matches, analyze_formatting(text).score)
    }

    #[test]
    fn test_length_boundaries() {
        assert_eq!(length_points(300), 10);
        assert_eq!(length_points(1000), 10);
        assert_eq!(length_points(299), 7);
        assert_eq!(length_points(1001), 7);
        assert_eq!(length_points(200), 7);
        assert_eq!(length_points(1500), 7);
        assert_eq!(length_points(199), 3);
        assert_eq!(length_points(1501), 3);
        assert_eq!(length_points(0), 3);
    }

    #[test]
    fn test_empty_text_hits_minimum() {
        let bundle = score("", &RoleProfile::builtin("Software Developer").unwrap());
        // keyword 0 + formatting 15 + skills 0 + projects 0 + length 3
        assert_eq!(bundle.ats_score, 18);
        assert_eq!(bundle.shortlist_probability, 5);
        assert_eq!(bundle.verdict, Verdict::Reject);
        assert_eq!(bundle.band, ScoreBand::CriticalIssues);
        assert_eq!(bundle.experience_level, ExperienceLevel::FresherEntry);
    }

    #[test]
    fn test_empty_role_keyword_points_are_zero() {
        let role = RoleProfile::custom("");
        let bundle = score("python docker", &role);
        assert_eq!(bundle.breakdown.keyword, 0.0);
        assert!((bundle.skill_match_pct - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_formatting_is_capped_but_may_be_negative() {
        let matches = MatchResult::default();
        assert_eq!(aggregate("", &matches, 55).breakdown.formatting, 20);
        assert_eq!(aggregate("", &matches, -4).breakdown.formatting, -4);
    }

    #[test]
    fn test_sample_sentence_scores() {
        let text = "Developed a scalable API using Python and Docker, improved performance by 40%, led a team of 5 engineers.";
        let bundle = score(text, &RoleProfile::builtin("Software Developer").unwrap());
        // 1 project line, 1 quantified hit, 1 verb hit → 5 + 3 + 2
        assert_eq!(bundle.breakdown.projects, 10);
        assert_eq!(bundle.project_quality, 45);
        assert!(bundle.breakdown.skills > 0);
        assert!(bundle.breakdown.keyword > 0.0);
    }

    #[test]
    fn test_shortlist_adjustments() {
        assert_eq!(shortlist_probability(50, 85.0, 85), 70);
        assert_eq!(shortlist_probability(50, 65.0, 65), 60);
        assert_eq!(shortlist_probability(50, 50.0, 50), 50);
        assert_eq!(shortlist_probability(50, 10.0, 10), 30);
        assert_eq!(shortlist_probability(100, 100.0, 100), 95);
        assert_eq!(shortlist_probability(0, 0.0, 0), 5);
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(Verdict::from_probability(70), Verdict::Hire);
        assert_eq!(Verdict::from_probability(69), Verdict::Borderline);
        assert_eq!(Verdict::from_probability(50), Verdict::Borderline);
        assert_eq!(Verdict::from_probability(49), Verdict::Reject);
    }

    #[test]
    fn test_verdict_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Verdict::Borderline).unwrap(), "\"BORDERLINE\"");
    }

    #[test]
    fn test_score_band() {
        assert_eq!(ScoreBand::from_ats(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_ats(60), ScoreBand::Good);
        assert_eq!(ScoreBand::from_ats(40), ScoreBand::NeedsWork);
        assert_eq!(ScoreBand::from_ats(39), ScoreBand::CriticalIssues);
    }

    proptest! {
        #[test]
        fn test_scores_stay_in_range(text in ".{0,400}") {
            let bundle = score(&text, &RoleProfile::general());
            prop_assert!(bundle.ats_score <= 100);
            prop_assert!((5..=95).contains(&bundle.shortlist_probability));
            prop_assert!(bundle.project_quality <= 100);
            prop_assert_eq!(bundle.verdict, Verdict::from_probability(bundle.shortlist_probability));
        }
    }
}
