//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::{SettingsFormDto, SubmitSettingsResponse},
    error::{map_domain_error, Problem},
};
use crate::contract::ContextId;
use crate::domain::{RequestMethod, Service, Submission, SubmissionResult};
use axum::{
    extract::{Form, Path},
    http::{Method, StatusCode},
    Extension, Json,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Settings form populated from the store
pub async fn get_settings(
    Extension(service): Extension<Arc<Service>>,
    Path(context_id): Path<ContextId>,
) -> Result<Json<SettingsFormDto>, Problem> {
    let data = service
        .display(context_id)
        .await
        .map_err(|e| with_instance(map_domain_error(e), context_id))?;

    Ok(Json(data.into()))
}

/// Validate and save a submitted settings form
pub async fn submit_settings(
    Extension(service): Extension<Arc<Service>>,
    Path(context_id): Path<ContextId>,
    method: Method,
    Form(params): Form<HashMap<String, String>>,
) -> Result<(StatusCode, Json<SubmitSettingsResponse>), Problem> {
    let submission = Submission::new(RequestMethod::parse(method.as_str()), params);

    let result = service
        .submit(context_id, &submission)
        .await
        .map_err(|e| with_instance(map_domain_error(e), context_id))?;

    let status = match result {
        SubmissionResult::Saved { .. } => StatusCode::OK,
        SubmissionResult::Invalid { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };

    Ok((status, Json(result.into())))
}

fn with_instance(problem: Problem, context_id: ContextId) -> Problem {
    problem.with_instance(format!("/contexts/{}/plugins/crossref/settings", context_id))
}
