//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::encouragement::pick_quote;
use crate::analysis::{analyze, AnalysisReport};
use crate::errors::AppError;
use crate::state::AppState;
use crate::taxonomy::roles::CUSTOM_ROLE_NAME;
use crate::taxonomy::RoleProfile;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    /// Built-in role name, or "Custom" together with `custom_skills`.
    #[serde(default)]
    pub role: Option<String>,
    /// Comma-separated required skills for a custom role.
    #[serde(default)]
    pub custom_skills: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub report: AnalysisReport,
    /// Randomly chosen on every call; not part of the report.
    pub encouragement: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores already-extracted resume text against a role.
pub async fn handle_analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let role = resolve_role(request.role.as_deref(), request.custom_skills.as_deref())?;
    respond(&request.resume_text, &role, request.job_description.as_deref())
}

/// POST /api/v1/analyze/upload
///
/// Multipart form: `file` (required), `role`, `custom_skills`, `job_description`.
/// The document is converted to text by the configured extractor, then scored.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut upload = None;
    let mut role = None;
    let mut custom_skills = None;
    let mut job_description = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_multipart)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(invalid_multipart)?;
                upload = Some((file_name, data));
            }
            "role" => role = Some(field.text().await.map_err(invalid_multipart)?),
            "custom_skills" => custom_skills = Some(field.text().await.map_err(invalid_multipart)?),
            "job_description" => {
                job_description = Some(field.text().await.map_err(invalid_multipart)?)
            }
            _ => {}
        }
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::Validation("file field is required".to_string()))?;
    info!(file_name = %file_name, size = data.len(), "Received resume upload");

    let role = resolve_role(role.as_deref(), custom_skills.as_deref())?;
    let text = state.extractor.extract(&file_name, data).await?;

    respond(&text, &role, job_description.as_deref())
}

fn respond(
    text: &str,
    role: &RoleProfile,
    job_description: Option<&str>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let report = analyze(text, role, job_description)?;
    let analysis_id = Uuid::new_v4();
    info!(analysis_id = %analysis_id, ats_score = report.scores.ats_score, "Analysis complete");

    Ok(Json(AnalyzeResponse {
        analysis_id,
        generated_at: Utc::now(),
        report,
        encouragement: pick_quote().to_string(),
    }))
}

/// Picks the role profile for a request.
///
/// - `role = "Custom"` requires `custom_skills`.
/// - Any other non-empty `role` must name a built-in profile.
/// - No role: `custom_skills` if given, otherwise the general profile.
pub fn resolve_role(
    role: Option<&str>,
    custom_skills: Option<&str>,
) -> Result<RoleProfile, AppError> {
    let role = role.map(str::trim).filter(|r| !r.is_empty());
    let custom_skills = custom_skills.map(str::trim).filter(|s| !s.is_empty());

    match (role, custom_skills) {
        (Some(CUSTOM_ROLE_NAME), Some(skills)) => Ok(RoleProfile::custom(skills)),
        (Some(CUSTOM_ROLE_NAME), None) => Err(AppError::Validation(
            "custom_skills is required when role is Custom".to_string(),
        )),
        (Some(name), _) => RoleProfile::builtin(name)
            .ok_or_else(|| AppError::Validation(format!("Unknown role '{name}'"))),
        (None, Some(skills)) => Ok(RoleProfile::custom(skills)),
        (None, None) => Ok(RoleProfile::general()),
    }
}

fn invalid_multipart(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart body: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_builtin_role() {
        let role = resolve_role(Some("DevOps Engineer"), None).unwrap();
        assert_eq!(role.name, "DevOps Engineer");
    }

    #[test]
    fn test_resolve_unknown_role_is_validation_error() {
        assert!(matches!(
            resolve_role(Some("Astronaut"), None),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_resolve_custom_role() {
        let role = resolve_role(Some("Custom"), Some("python, sql")).unwrap();
        assert_eq!(role.required_skills, vec!["python", "sql"]);
        assert!(matches!(
            resolve_role(Some("Custom"), Some("  ")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_resolve_defaults() {
        assert_eq!(resolve_role(None, None).unwrap(), RoleProfile::general());
        assert_eq!(resolve_role(Some(" "), None).unwrap(), RoleProfile::general());
        assert_eq!(
            resolve_role(None, Some("rust")).unwrap().required_skills,
            vec!["rust"]
        );
    }

    #[tokio::test]
    async fn test_handle_analyze_rejects_blank_text() {
        let request = AnalyzeRequest {
            resume_text: "   ".to_string(),
            role: None,
            custom_skills: None,
            job_description: None,
        };
        let result = handle_analyze(Json(request)).await;
        assert!(matches!(result, Err(AppError::NoContent(_))));
    }

    #[tokio::test]
    async fn test_handle_analyze_returns_report() {
        let request = AnalyzeRequest {
            resume_text: "Developed dashboards with Python and SQL".to_string(),
            role: Some("Data Analyst".to_string()),
            custom_skills: None,
            job_description: Some("Analyst, fintech".to_string()),
        };
        let Json(response) = handle_analyze(Json(request)).await.unwrap();
        assert_eq!(response.report.role.name, "Data Analyst");
        assert_eq!(response.report.skill_match.matched_required, vec!["python", "sql"]);
        assert!(!response.encouragement.is_empty());
        assert!(!response.analysis_id.is_nil());
    }
}
