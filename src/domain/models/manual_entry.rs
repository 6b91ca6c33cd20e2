// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::{JobBoard, JobRecord, RawJob};
use crate::domain::services::normalizer::Normalizer;
use crate::utils::errors::CrawlError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 手动录入描述的最大长度
pub const MANUAL_DESCRIPTION_CAP: usize = 8000;

/// 手动录入的职位
///
/// 当抓取被拦截时由调用方收集，不会再进入爬虫流程。
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ManualJobEntry {
    #[validate(length(min = 1, message = "Job title is required"))]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[validate(length(min = 20, message = "Description must be at least 20 characters"))]
    pub description: String,
    #[serde(default)]
    pub url: String,
}

impl ManualJobEntry {
    /// 校验并转换为来源为 `manual` 的职位记录
    pub fn into_record(self) -> Result<JobRecord, CrawlError> {
        let entry = ManualJobEntry {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            url: self.url.trim().to_string(),
        };
        entry
            .validate()
            .map_err(|e| CrawlError::MalformedInput(e.to_string()))?;

        Ok(Normalizer::new(JobBoard::Manual, MANUAL_DESCRIPTION_CAP).normalize(RawJob {
            id: None,
            title: entry.title,
            company: entry.company,
            location: entry.location,
            description: entry.description,
            url: entry.url,
        }))
    }
}
