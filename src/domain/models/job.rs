// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 职位来源
///
/// 封闭集合：两个内置招聘网站加上手动录入（单 URL 抓取的结果也归为手动）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobBoard {
    Awign,
    Indeed,
    Manual,
}

impl JobBoard {
    /// 可以搜索的网站
    pub const CRAWLABLE: [JobBoard; 2] = [JobBoard::Awign, JobBoard::Indeed];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobBoard::Awign => "awign",
            JobBoard::Indeed => "indeed",
            JobBoard::Manual => "manual",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            JobBoard::Awign => "Awign Expert",
            JobBoard::Indeed => "Indeed",
            JobBoard::Manual => "Manual",
        }
    }

    /// 生成职位 ID 时使用的前缀
    pub fn id_prefix(&self) -> &'static str {
        match self {
            JobBoard::Awign => "job",
            JobBoard::Indeed => "indeed",
            JobBoard::Manual => "manual",
        }
    }

    pub fn is_crawlable(&self) -> bool {
        Self::CRAWLABLE.contains(self)
    }
}

impl fmt::Display for JobBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobBoard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "awign" => Ok(JobBoard::Awign),
            "indeed" => Ok(JobBoard::Indeed),
            "manual" => Ok(JobBoard::Manual),
            other => Err(format!("Unknown job board: {}", other)),
        }
    }
}

/// 归一化后的职位记录
///
/// 所有对外输出的记录都经过 `Normalizer`，保证 `title` 与 `description` 非空。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub source: JobBoard,
}

/// 列表页候选职位（尚未补全描述）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobStub {
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub url: String,
    /// 列表卡片上的摘要，详情页失败时作为描述兜底
    pub snippet: Option<String>,
    /// 文本启发式路径会直接给出描述，不再访问详情页
    pub description: Option<String>,
}

impl JobStub {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// 摘要非空时返回摘要
    pub fn snippet(&self) -> Option<&str> {
        self.snippet.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// 归一化之前的原始职位数据
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawJob {
    /// 已有 ID 时保留，否则由 `Normalizer` 生成
    pub id: Option<String>,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
}

impl From<JobRecord> for RawJob {
    fn from(record: JobRecord) -> Self {
        Self {
            id: Some(record.id),
            title: record.title,
            company: record.company,
            location: record.location,
            description: record.description,
            url: record.url,
        }
    }
}

impl From<JobStub> for RawJob {
    fn from(stub: JobStub) -> Self {
        Self {
            id: None,
            title: stub.title,
            company: stub.company.unwrap_or_default(),
            location: stub.location.unwrap_or_default(),
            description: stub.description.unwrap_or_default(),
            url: stub.url,
        }
    }
}
