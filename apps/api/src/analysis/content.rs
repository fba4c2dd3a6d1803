//! Content Analyzer: per-line detection of project work, action verbs and
//! quantified results. The three checks are independent; one line can feed all three.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::taxonomy::patterns::{PROJECT_MARKERS, QUANTIFIED_RE};
use crate::taxonomy::verbs::first_action_verb;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionVerbHit {
    pub verb: String,
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantifiedHit {
    pub line: String,
    /// Every numeric token on the line, in order.
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSignals {
    pub project_lines: Vec<String>,
    pub action_verb_hits: Vec<ActionVerbHit>,
    pub quantified_hits: Vec<QuantifiedHit>,
}

impl ContentSignals {
    pub fn distinct_verbs(&self) -> usize {
        self.action_verb_hits
            .iter()
            .map(|hit| hit.verb.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

pub fn analyze_projects(text: &str) -> ContentSignals {
    let mut signals = ContentSignals::default();

    for line in text.split('\n') {
        let trimmed = line.trim();
        let line_lower = trimmed.to_lowercase();

        if PROJECT_MARKERS.iter().any(|m| line_lower.contains(m)) {
            signals.project_lines.push(trimmed.to_string());
        }

        if let Some(verb) = first_action_verb(&line_lower) {
            signals.action_verb_hits.push(ActionVerbHit {
                verb: verb.to_string(),
                line: trimmed.to_string(),
            });
        }

        let tokens: Vec<String> = QUANTIFIED_RE
            .find_iter(&line_lower)
            .map(|m| m.as_str().to_string())
            .collect();
        if !tokens.is_empty() {
            signals.quantified_hits.push(QuantifiedHit {
                line: trimmed.to_string(),
                tokens,
            });
        }
    }

    signals
}
