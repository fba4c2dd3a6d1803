//! Fixed phrase lists and compiled patterns used by the analyzers.
//!
//! All patterns are static literals compiled once on first use. Resume text is
//! only ever matched against them, never compiled as a pattern itself.

use lazy_static::lazy_static;
use regex::Regex;

/// Phrases that mark a line as describing project work.
pub const PROJECT_MARKERS: &[&str] = &[
    "project",
    "developed",
    "built",
    "created",
    "designed",
    "implemented",
    "launched",
    "deployed",
    "worked on",
];

pub const SECTION_HEADERS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "summary",
    "objective",
    "certifications",
    "work experience",
    "professional experience",
    "technical skills",
];

pub const BULLET_GLYPHS: &[char] = &['•', '-', '*', '·', '○', '▪', '›', '→'];

pub const JUNIOR_MARKERS: &[&str] = &[
    "intern", "trainee", "junior", "entry", "fresher", "graduate", "student",
];

pub const SENIOR_MARKERS: &[&str] = &[
    "senior",
    "lead",
    "architect",
    "manager",
    "director",
    "principal",
    "staff",
];

/// Raw text containing this run of spaces is treated as a column layout.
pub const COLUMN_GAP: &str = "          ";

/// Classification a bullet rule assigns when its pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternTag {
    Weak,
    Strong,
}

lazy_static! {
    /// Percentages, dollar amounts and counts followed by a unit word.
    pub static ref QUANTIFIED_RE: Regex =
        Regex::new(r"\d+%|\$\d+|\d+\s*(?:x|times|users|clients)").unwrap();

    pub static ref EMAIL_RE: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap();
    pub static ref PHONE_RE: Regex = Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap();
    pub static ref LINKEDIN_RE: Regex = Regex::new(r"linkedin\.com/in/").unwrap();

    /// Any digit run; a rewritten bullet without one gets an impact suffix.
    pub static ref METRIC_RE: Regex = Regex::new(r"\d+%|\$\d+|\d+").unwrap();

    /// Ordered (pattern, tag) rules applied to lower-cased bullet lines.
    pub static ref BULLET_RULES: Vec<(Regex, PatternTag)> = vec![
        (Regex::new(r"(responsible for|duties include|task was|job involved)").unwrap(), PatternTag::Weak),
        (Regex::new(r"(helped|assisted|participated in)").unwrap(), PatternTag::Weak),
        (Regex::new(r"(some|various|different)").unwrap(), PatternTag::Weak),
        // No leading bullet glyph before the first lower-case letter.
        (Regex::new(r"^[^•\-\*]*[a-z]").unwrap(), PatternTag::Weak),
        (Regex::new(r"(developed|created|designed|implemented|led|managed)").unwrap(), PatternTag::Strong),
        (Regex::new(r"\d+%|\$\d+|\d+\s*(?:users|clients|hours|days)").unwrap(), PatternTag::Strong),
        (Regex::new(r"(improved|optimized|increased|decreased|reduced)").unwrap(), PatternTag::Strong),
    ];
}
