//! Role profiles: the required/preferred skill lists a resume is scored against.

use serde::{Deserialize, Serialize};

/// Name reported for a caller-supplied skill list.
pub const CUSTOM_ROLE_NAME: &str = "Custom";
/// Name reported when the caller selects no role at all.
pub const DEFAULT_ROLE_NAME: &str = "General";

struct RoleDefinition {
    name: &'static str,
    required: &'static [&'static str],
    preferred: &'static [&'static str],
}

const BUILTIN_ROLES: &[RoleDefinition] = &[
    RoleDefinition {
        name: "Software Developer",
        required: &["python", "java", "javascript", "git", "sql", "problem-solving"],
        preferred: &["docker", "aws", "react", "agile", "ci/cd"],
    },
    RoleDefinition {
        name: "Data Analyst",
        required: &["python", "sql", "data analysis", "statistics", "tableau"],
        preferred: &["pandas", "numpy", "machine learning", "power bi", "excel"],
    },
    RoleDefinition {
        name: "Data Scientist",
        required: &["python", "machine learning", "statistics", "sql", "data analysis"],
        preferred: &["tensorflow", "pytorch", "deep learning", "nlp", "data visualization"],
    },
    RoleDefinition {
        name: "Frontend Developer",
        required: &["html", "css", "javascript", "react", "git"],
        preferred: &["vue", "angular", "typescript", "webpack", "testing"],
    },
    RoleDefinition {
        name: "Backend Developer",
        required: &["python", "java", "sql", "git", "api"],
        preferred: &["docker", "aws", "microservices", "ci/cd", "redis"],
    },
    RoleDefinition {
        name: "Full Stack Developer",
        required: &["javascript", "react", "python", "sql", "git"],
        preferred: &["docker", "aws", "node.js", "mongodb", "ci/cd"],
    },
    RoleDefinition {
        name: "DevOps Engineer",
        required: &["docker", "kubernetes", "aws", "ci/cd", "terraform"],
        preferred: &["python", "linux", "jenkins", "ansible", "git"],
    },
    RoleDefinition {
        name: "Machine Learning Engineer",
        required: &["python", "machine learning", "tensorflow", "sql", "deep learning"],
        preferred: &["pytorch", "docker", "aws", "mlops", "kubernetes"],
    },
];

/// A target role. Immutable once built; the engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub name: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
}

impl RoleProfile {
    /// Looks up a built-in role by its exact display name.
    pub fn builtin(name: &str) -> Option<Self> {
        BUILTIN_ROLES
            .iter()
            .find(|role| role.name == name)
            .map(Self::from_definition)
    }

    /// All built-in roles in catalog order.
    pub fn builtin_all() -> Vec<Self> {
        BUILTIN_ROLES.iter().map(Self::from_definition).collect()
    }

    /// Builds a role from a comma-separated skill list. Blank items are dropped
    /// and the preferred list is always empty.
    pub fn custom(skills_csv: &str) -> Self {
        Self {
            name: CUSTOM_ROLE_NAME.to_string(),
            required_skills: skills_csv
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            preferred_skills: vec![],
        }
    }

    /// Fallback profile used when the caller selects no role.
    pub fn general() -> Self {
        Self {
            name: DEFAULT_ROLE_NAME.to_string(),
            required_skills: to_owned(&["python", "java", "sql", "git", "communication"]),
            preferred_skills: to_owned(&["docker", "aws", "agile"]),
        }
    }

    fn from_definition(def: &RoleDefinition) -> Self {
        Self {
            name: def.name.to_string(),
            required_skills: to_owned(def.required),
            preferred_skills: to_owned(def.preferred),
        }
    }
}

fn to_owned(skills: &[&str]) -> Vec<String> {
    skills.iter().map(|s| s.to_string()).collect()
}
