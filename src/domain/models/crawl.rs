// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::JobRecord;
use serde::{Deserialize, Serialize};

/// 搜索结果
///
/// `jobs` 非空时 `error` 只是警告；`jobs` 为空时 `error` 表示失败。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlResult {
    pub jobs: Vec<JobRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CrawlResult {
    pub fn success(jobs: Vec<JobRecord>) -> Self {
        Self { jobs, error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            jobs: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// 追加一条警告，多条警告以空格连接
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        let warning = warning.into();
        self.error = Some(match self.error.take() {
            Some(existing) => format!("{} {}", existing, warning),
            None => warning,
        });
        self
    }

    /// 没有任何职位且带有错误
    pub fn is_fatal(&self) -> bool {
        self.jobs.is_empty() && self.error.is_some()
    }

    /// 有职位但带有警告
    pub fn warning(&self) -> Option<&str> {
        if self.jobs.is_empty() {
            None
        } else {
            self.error.as_deref()
        }
    }
}

/// `blocked = true` 的具体原因，仅用于诊断
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cause", rename_all = "camelCase")]
pub enum BlockReason {
    /// 命中反爬挑战标记
    BotChallenge { marker: String },
    /// 提取到的描述过短
    InsufficientContent { length: usize },
    /// 浏览器或导航失败
    Failure,
}

/// 单个 URL 抓取结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleJobResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<JobRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// 调用方应提供手动录入入口
    pub blocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<BlockReason>,
}

impl SingleJobResult {
    pub fn success(job: JobRecord) -> Self {
        Self {
            success: true,
            job: Some(job),
            error: None,
            blocked: false,
            block_reason: None,
        }
    }

    /// 失败并建议手动录入
    pub fn blocked(error: impl Into<String>, reason: BlockReason) -> Self {
        Self {
            success: false,
            job: None,
            error: Some(error.into()),
            blocked: true,
            block_reason: Some(reason),
        }
    }

    /// 输入无效，未创建任何浏览器会话
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            job: None,
            error: Some(error.into()),
            blocked: false,
            block_reason: None,
        }
    }
}
