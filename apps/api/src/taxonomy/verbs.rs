//! Action-verb taxonomy. Category order matters: the flattened list is scanned
//! front to back and the first verb found in a line wins.

use lazy_static::lazy_static;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VerbCategory {
    pub key: &'static str,
    pub display_name: &'static str,
    pub verbs: &'static [&'static str],
}

pub const ACTION_VERB_CATEGORIES: &[VerbCategory] = &[
    VerbCategory {
        key: "leadership",
        display_name: "Leadership & Management",
        verbs: &[
            "led", "managed", "directed", "coordinated", "supervised", "mentored", "coached",
            "spearheaded", "championed", "overseen",
        ],
    },
    VerbCategory {
        key: "technical",
        display_name: "Technical & Development",
        verbs: &[
            "developed", "created", "designed", "implemented", "built", "engineered",
            "architected", "coded", "programmed", "constructed", "fabricated", "assembled",
        ],
    },
    VerbCategory {
        key: "optimization",
        display_name: "Optimization & Improvement",
        verbs: &[
            "optimized", "improved", "enhanced", "streamlined", "refined", "upgraded",
            "transformed", "modernized", "revamped", "restructured",
        ],
    },
    VerbCategory {
        key: "achievement",
        display_name: "Achievement & Results",
        verbs: &[
            "achieved", "delivered", "exceeded", "accomplished", "completed", "finished",
            "concluded", "finalized", "executed", "produced",
        ],
    },
    VerbCategory {
        key: "analysis",
        display_name: "Analysis & Research",
        verbs: &[
            "analyzed", "investigated", "evaluated", "assessed", "examined", "reviewed",
            "studied", "researched", "audited", "diagnosed", "identified",
        ],
    },
    VerbCategory {
        key: "problem_solving",
        display_name: "Problem Solving",
        verbs: &[
            "solved", "resolved", "fixed", "repaired", "troubleshot", "debugged", "corrected",
            "rectified", "remedied", "mitigated",
        ],
    },
    VerbCategory {
        key: "communication",
        display_name: "Communication",
        verbs: &[
            "communicated", "presented", "collaborated", "negotiated", "facilitated", "mediated",
            "demonstrated", "explained",
        ],
    },
    VerbCategory {
        key: "innovation",
        display_name: "Innovation & Creation",
        verbs: &[
            "innovated", "pioneered", "initiated", "introduced", "established", "launched",
            "instigated", "originated", "conceived", "devised",
        ],
    },
    VerbCategory {
        key: "efficiency",
        display_name: "Efficiency & Reduction",
        verbs: &[
            "increased", "decreased", "reduced", "lowered", "minimized", "maximized",
            "eliminated", "cut", "slashed", "condensed",
        ],
    },
    VerbCategory {
        key: "automation",
        display_name: "Automation & Integration",
        verbs: &[
            "automated", "integrated", "deployed", "configured", "installed", "implemented",
            "customized", "modified", "adapted", "converted",
        ],
    },
    VerbCategory {
        key: "strategic",
        display_name: "Strategic & Planning",
        verbs: &[
            "planned", "organized", "strategized", "prioritized", "scheduled", "forecasted",
            "projected", "budgeted", "allocated", "assigned",
        ],
    },
    VerbCategory {
        key: "training",
        display_name: "Training & Development",
        verbs: &[
            "trained", "taught", "educated", "instructed", "developed", "certified", "qualified",
            "prepared", "onboarded", "guided",
        ],
    },
];

lazy_static! {
    /// Every verb in category order. Verbs listed under two categories appear twice.
    pub static ref ACTION_VERBS_ALL: Vec<&'static str> = ACTION_VERB_CATEGORIES
        .iter()
        .flat_map(|c| c.verbs.iter().copied())
        .collect();
}

/// First action verb (in taxonomy order) contained in an already lower-cased line.
pub fn first_action_verb(line_lower: &str) -> Option<&'static str> {
    ACTION_VERBS_ALL
        .iter()
        .copied()
        .find(|verb| line_lower.contains(verb))
}
