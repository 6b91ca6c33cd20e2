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
        dto::fetch_job_request::{FetchJobErrorDto, FetchJobRequestDto, FetchJobResponseDto},
        use_cases::job_use_case::JobUseCase,
    },
    domain::services::crawl_service::JobCrawler,
};

/// 抓取单个职位 URL
///
/// 被拦截时返回 403，其他失败返回 500，两者都提示调用方可以手动录入。
pub async fn fetch_job(
    Extension(crawler): Extension<Arc<JobCrawler>>,
    payload: Result<Json<FetchJobRequestDto>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Rejected fetch-job request body: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Job URL is required", "blocked": false })),
            )
                .into_response();
        }
    };
    let use_case = JobUseCase::new(crawler);
    let result = match use_case.fetch_job(payload).await {
        Ok(result) => result,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string(), "blocked": false })),
            )
                .into_response()
        }
    };

    match result.job {
        Some(job) if result.success => (
            StatusCode::OK,
            Json(FetchJobResponseDto { success: true, job }),
        )
            .into_response(),
        _ => {
            let status = if result.blocked {
                StatusCode::FORBIDDEN
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            let body = FetchJobErrorDto {
                error: result
                    .error
                    .unwrap_or_else(|| "Failed to fetch job".to_string()),
                blocked: result.blocked,
                can_manual_paste: Some(true),
                block_reason: result.block_reason,
            };
            (status, Json(body)).into_response()
        }
    }
}
