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
use tracing::warn;

use crate::{
    application::{
        dto::crawl_request::{CrawlRequestDto, CrawlResponseDto},
        use_cases::job_use_case::JobUseCase,
    },
    domain::services::crawl_service::JobCrawler,
};

/// 搜索职位
///
/// 有职位时返回 200，`warning` 携带非致命提示；没有职位时返回 500。
pub async fn crawl_jobs(
    Extension(crawler): Extension<Arc<JobCrawler>>,
    payload: Result<Json<CrawlRequestDto>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Rejected crawl request body: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Job role is required", "jobs": [] })),
            )
                .into_response();
        }
    };
    let use_case = JobUseCase::new(crawler);
    match use_case.search(payload).await {
        Ok(result) if result.jobs.is_empty() => {
            let error = result
                .error
                .unwrap_or_else(|| "Failed to crawl jobs".to_string());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": error, "jobs": [] })),
            )
                .into_response()
        }
        Ok(result) => (
            StatusCode::OK,
            Json(CrawlResponseDto {
                jobs: result.jobs,
                warning: result.error,
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string(), "jobs": [] })),
        )
            .into_response(),
    }
}
