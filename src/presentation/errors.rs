// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::use_cases::job_use_case::JobUseCaseError;

/// 用例错误统一映射为 400
impl IntoResponse for JobUseCaseError {
    fn into_response(self) -> Response {
        let status = match self {
            JobUseCaseError::ValidationError(_) => StatusCode::BAD_REQUEST,
        };
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
