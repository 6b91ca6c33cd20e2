// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::{
    application::dto::{crawl_request::CrawlRequestDto, fetch_job_request::FetchJobRequestDto},
    domain::{
        models::{
            crawl::{CrawlResult, SingleJobResult},
            job::JobRecord,
            manual_entry::ManualJobEntry,
        },
        services::crawl_service::JobCrawler,
    },
    engines::validators::{validate_job_role, validate_job_url},
    utils::errors::CrawlError,
};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobUseCaseError {
    /// 请求参数无效，未访问任何页面
    #[error("{0}")]
    ValidationError(String),
}

impl From<CrawlError> for JobUseCaseError {
    fn from(error: CrawlError) -> Self {
        match error {
            CrawlError::MalformedInput(reason) => JobUseCaseError::ValidationError(reason),
            other => JobUseCaseError::ValidationError(other.to_string()),
        }
    }
}

/// 职位相关用例：搜索、单 URL 抓取与手动录入
pub struct JobUseCase {
    crawler: Arc<JobCrawler>,
}

impl JobUseCase {
    pub fn new(crawler: Arc<JobCrawler>) -> Self {
        Self { crawler }
    }

    /// 校验请求后执行搜索
    pub async fn search(&self, request: CrawlRequestDto) -> Result<CrawlResult, JobUseCaseError> {
        let role = validate_job_role(&request.job_role)?;
        Ok(self
            .crawler
            .search(role, request.board(), request.location())
            .await)
    }

    /// 校验 URL 后抓取单个职位
    pub async fn fetch_job(
        &self,
        request: FetchJobRequestDto,
    ) -> Result<SingleJobResult, JobUseCaseError> {
        let url = validate_job_url(&request.job_url)?;
        Ok(self.crawler.fetch_single(url.as_str()).await)
    }

    /// 手动录入不经过浏览器
    pub fn manual_entry(&self, entry: ManualJobEntry) -> Result<JobRecord, JobUseCaseError> {
        Ok(entry.into_record()?)
    }
}
