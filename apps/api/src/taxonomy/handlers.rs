//! Read-only catalog endpoints over the static taxonomy.

use axum::Json;
use serde::Serialize;

use crate::taxonomy::skills::{SkillCategory, SKILL_TAXONOMY};
use crate::taxonomy::verbs::{VerbCategory, ACTION_VERB_CATEGORIES};
use crate::taxonomy::RoleProfile;

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<RoleProfile>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub categories: &'static [SkillCategory],
}

#[derive(Debug, Serialize)]
pub struct ActionVerbsResponse {
    pub categories: &'static [VerbCategory],
}

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: RoleProfile::builtin_all(),
    })
}

/// GET /api/v1/taxonomy/skills
pub async fn handle_list_skills() -> Json<SkillsResponse> {
    Json(SkillsResponse {
        categories: SKILL_TAXONOMY,
    })
}

/// GET /api/v1/taxonomy/action-verbs
pub async fn handle_list_action_verbs() -> Json<ActionVerbsResponse> {
    Json(ActionVerbsResponse {
        categories: ACTION_VERB_CATEGORIES,
    })
}
