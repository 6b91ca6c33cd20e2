// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::lenient_string;
use crate::domain::models::crawl::BlockReason;
use crate::domain::models::job::JobRecord;
use serde::{Deserialize, Serialize};

/// 单 URL 抓取请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchJobRequestDto {
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_url: String,
}

/// 单 URL 抓取成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchJobResponseDto {
    pub success: bool,
    pub job: JobRecord,
}

/// 单 URL 抓取失败响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchJobErrorDto {
    pub error: String,
    pub blocked: bool,
    /// 调用方应提供手动录入表单
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manual_paste: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<BlockReason>,
}
