//! Bullet rewriting: flags weak resume lines and proposes a stronger phrasing.
//!
//! Classification walks the ordered (pattern, tag) rules in `BULLET_RULES`.
//! A strong match always wins; a line is weak only when some weak rule matches
//! and no strong rule does.

use serde::{Deserialize, Serialize};

use crate::taxonomy::patterns::{PatternTag, BULLET_RULES, METRIC_RE};
use crate::taxonomy::verbs::first_action_verb;

pub const MAX_REWRITES: usize = 3;
const VERB_PREFIX: &str = "Developed and ";
const IMPACT_SUFFIX: &str = " resulting in measurable impact";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletClass {
    Strong,
    Weak,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletImprovement {
    pub before: String,
    pub after: String,
}

pub fn classify_bullet(line: &str) -> BulletClass {
    let line_lower = line.to_lowercase();
    let mut weak = false;

    for (pattern, tag) in BULLET_RULES.iter() {
        if !pattern.is_match(&line_lower) {
            continue;
        }
        match tag {
            PatternTag::Strong => return BulletClass::Strong,
            PatternTag::Weak => weak = true,
        }
    }

    if weak {
        BulletClass::Weak
    } else {
        BulletClass::Neutral
    }
}

/// Rewrites the first three weak lines of the document.
pub fn generate_bullet_improvements(text: &str) -> Vec<BulletImprovement> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| classify_bullet(line) == BulletClass::Weak)
        .take(MAX_REWRITES)
        .map(|line| BulletImprovement {
            before: line.to_string(),
            after: rewrite(line),
        })
        .collect()
}

fn rewrite(line: &str) -> String {
    let line_lower = line.to_lowercase();
    let mut improved = if first_action_verb(&line_lower).is_some() {
        line.to_string()
    } else {
        format!("{VERB_PREFIX}{line_lower}")
    };

    if !METRIC_RE.is_match(line) {
        improved.push_str(IMPACT_SUFFIX);
    }
    improved
}
