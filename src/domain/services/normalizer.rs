// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::{JobBoard, JobRecord, RawJob};
use crate::utils::text::{squash_inline, truncate_chars};
use chrono::Utc;
use uuid::Uuid;

/// 缺省标题
pub const DEFAULT_TITLE: &str = "Job Position";
/// 缺省描述
pub const DEFAULT_DESCRIPTION: &str = "No detailed description available.";

/// 字段缺省值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefaults {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

impl FieldDefaults {
    pub fn for_board(board: JobBoard) -> Self {
        let (company, location) = match board {
            JobBoard::Awign => ("Awign", "Remote/India"),
            JobBoard::Indeed => ("Company not specified", "Location not specified"),
            JobBoard::Manual => ("Company", "Location not specified"),
        };
        Self {
            title: DEFAULT_TITLE,
            company,
            location,
            description: DEFAULT_DESCRIPTION,
        }
    }
}

/// 结果归一化器
///
/// 纯函数式地把 [`RawJob`] 转为 [`JobRecord`]：填充缺省值、标记来源、生成 ID、
/// 截断描述。对已归一化的记录再次归一化不会改变任何字段。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    source: JobBoard,
    defaults: FieldDefaults,
    description_cap: usize,
}

impl Normalizer {
    pub fn new(source: JobBoard, description_cap: usize) -> Self {
        Self {
            source,
            defaults: FieldDefaults::for_board(source),
            description_cap,
        }
    }

    pub fn normalize(&self, raw: RawJob) -> JobRecord {
        let description = match raw.description.trim() {
            "" => self.defaults.description.to_string(),
            text => truncate_chars(text, self.description_cap),
        };
        let description = if description.is_empty() {
            self.defaults.description.to_string()
        } else {
            description
        };

        JobRecord {
            id: raw
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| generate_id(self.source)),
            title: or_default(&raw.title, self.defaults.title),
            company: or_default(&raw.company, self.defaults.company),
            location: or_default(&raw.location, self.defaults.location),
            description,
            url: raw.url.trim().to_string(),
            source: self.source,
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    let value = squash_inline(value);
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// 生成职位 ID：来源前缀 + 毫秒时间戳 + 随机后缀
pub fn generate_id(source: JobBoard) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}-{}-{}",
        source.id_prefix(),
        Utc::now().timestamp_millis(),
        &suffix[..8]
    )
}
