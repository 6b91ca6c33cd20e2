// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::lenient_string;
use crate::domain::models::job::{JobBoard, JobRecord};
use serde::{Deserialize, Serialize};

/// 搜索请求
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlRequestDto {
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_role: String,
    #[serde(default = "default_board", deserialize_with = "lenient_string")]
    pub job_board: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
}

fn default_board() -> String {
    JobBoard::Awign.as_str().to_string()
}

impl CrawlRequestDto {
    /// 解析招聘网站，未知或不可搜索的值回退到 Awign
    pub fn board(&self) -> JobBoard {
        self.job_board
            .parse::<JobBoard>()
            .ok()
            .filter(JobBoard::is_crawlable)
            .unwrap_or(JobBoard::Awign)
    }

    /// 空白地点视为未指定
    pub fn location(&self) -> Option<&str> {
        Some(self.location.trim()).filter(|l| !l.is_empty())
    }
}

/// 搜索成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlResponseDto {
    pub jobs: Vec<JobRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
