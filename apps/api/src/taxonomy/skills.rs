//! Skill taxonomy: category name → canonical lower-case skill strings.

use serde::Serialize;

/// One named bucket of skills in the taxonomy.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

impl SkillCategory {
    /// "cloud_devops" → "Cloud Devops"
    pub fn display_name(&self) -> String {
        self.name
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub const SKILL_TAXONOMY: &[SkillCategory] = &[
    SkillCategory {
        name: "programming_languages",
        skills: &[
            "python", "java", "javascript", "c++", "c#", "ruby", "go", "rust", "scala", "kotlin",
            "typescript", "php", "swift", "r", "matlab", "perl", "bash", "shell",
        ],
    },
    SkillCategory {
        name: "frontend",
        skills: &[
            "html", "css", "react", "vue", "angular", "jquery", "bootstrap", "tailwind", "sass",
            "less", "webpack", "vite", "nextjs", "nuxt", "svelte",
        ],
    },
    SkillCategory {
        name: "backend",
        skills: &[
            "node.js", "express", "django", "flask", "spring", "laravel", "rails", "asp.net",
            "fastapi", "nestjs", "gin", "echo", "play",
        ],
    },
    SkillCategory {
        name: "databases",
        skills: &[
            "sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "cassandra",
            "dynamodb", "oracle", "sqlite", "mariadb", "firebase",
        ],
    },
    SkillCategory {
        name: "cloud_devops",
        skills: &[
            "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "terraform", "ansible",
            "ci/cd", "git", "github", "gitlab", "bitbucket", "circleci", "travis",
        ],
    },
    SkillCategory {
        name: "data_science",
        skills: &[
            "machine learning", "deep learning", "tensorflow", "pytorch", "pandas", "numpy",
            "scikit-learn", "data analysis", "statistics", "nlp", "computer vision",
            "data visualization", "tableau", "power bi",
        ],
    },
    SkillCategory {
        name: "testing",
        skills: &[
            "unit testing", "integration testing", "selenium", "pytest", "jest", "mocha",
            "testing", "test-driven development", "tdd", "bdd", "cypress",
        ],
    },
    SkillCategory {
        name: "soft_skills",
        skills: &[
            "communication", "teamwork", "leadership", "problem-solving", "time management",
            "agile", "scrum", "project management", "collaboration", "analytical", "creative",
        ],
    },
];
