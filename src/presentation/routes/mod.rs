// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::crawl_service::JobCrawler;
use crate::presentation::handlers::{crawl_handler, fetch_job_handler, manual_job_handler};
use axum::{
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(crawler: Arc<JobCrawler>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/api/crawl", post(crawl_handler::crawl_jobs))
        .route("/api/fetch-job", post(fetch_job_handler::fetch_job))
        .route("/api/manual-job", post(manual_job_handler::create_manual_job))
        .layer(Extension(crawler))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
