// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    application::use_cases::job_use_case::{JobUseCase, JobUseCaseError},
    domain::{models::manual_entry::ManualJobEntry, services::crawl_service::JobCrawler},
};

/// 手动录入职位
pub async fn create_manual_job(
    Extension(crawler): Extension<Arc<JobCrawler>>,
    payload: Result<Json<ManualJobEntry>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return JobUseCaseError::ValidationError(rejection.body_text()).into_response()
        }
    };
    let use_case = JobUseCase::new(crawler);
    match use_case.manual_entry(payload) {
        Ok(job) => (StatusCode::CREATED, Json(json!({ "job": job }))).into_response(),
        Err(e) => e.into_response(),
    }
}
