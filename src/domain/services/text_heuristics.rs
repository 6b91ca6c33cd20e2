// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 文本启发式解析
//!
//! 当结构化选择器全部失效时，逐行扫描页面渲染文本，按职位边界切分出候选职位。

use crate::utils::text::{char_len, squash_inline};
use once_cell::sync::Lazy;
use regex::Regex;

/// 职位名词，用于识别标题行
const ROLE_NOUNS: [&str; 8] = [
    "engineer",
    "manager",
    "developer",
    "analyst",
    "executive",
    "specialist",
    "coordinator",
    "associate",
];

/// 地点词表
const GAZETTEER: [&str; 10] = [
    "bangalore",
    "bengaluru",
    "mumbai",
    "delhi",
    "hyderabad",
    "pune",
    "chennai",
    "remote",
    "india",
    "hybrid",
];

/// 导航、页眉、法律声明等模板行
const BOILERPLATE: [&str; 4] = [
    "sign in",
    "terms and conditions",
    "privacy policy",
    "admin login",
];

const SENTENCE_ENDINGS: [char; 7] = ['.', '!', '?', ':', ';', ',', '…'];

/// 描述行的最小长度（不含）
const MIN_DESCRIPTION_LEN: usize = 50;

static PAGINATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bshowing\b|\bpage \d+ of \d+\b|\b\d+\s*[-–]\s*\d+ of \d+\b")
        .expect("Failed to compile pagination regex")
});

/// 是否为模板行（所有提取路径共用）
pub(crate) fn is_boilerplate(line: &str) -> bool {
    if char_len(line.trim()) < 5 {
        return true;
    }
    let lower = line.to_lowercase();
    BOILERPLATE.iter().any(|marker| lower.contains(marker))
}

fn is_pagination(line: &str) -> bool {
    PAGINATION_RE.is_match(line)
}

/// 文本路径得到的候选职位
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStub {
    pub title: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// 逐行分类的文本解析器
#[derive(Debug, Clone)]
pub struct TextHeuristicParser {
    role: String,
    limit: usize,
}

impl TextHeuristicParser {
    pub fn new(role: &str, limit: usize) -> Self {
        Self {
            role: squash_inline(role).to_lowercase(),
            limit,
        }
    }

    /// 判断一行是否为职位标题边界
    ///
    /// 以句读结尾、包含链接或邮箱的行是正文，不作为边界。
    pub fn is_title_boundary(&self, line: &str) -> bool {
        let len = char_len(line);
        if !(15..150).contains(&len) {
            return false;
        }
        let words = line.split_whitespace().count();
        if !(2..=15).contains(&words) {
            return false;
        }
        if line.ends_with(SENTENCE_ENDINGS) || line.contains('@') || line.contains("http") {
            return false;
        }
        let lower = line.to_lowercase();
        (!self.role.is_empty() && lower.contains(&self.role))
            || ROLE_NOUNS.iter().any(|noun| lower.contains(noun))
    }

    pub fn parse(&self, text: &str) -> Vec<TextStub> {
        let mut stubs = Vec::new();
        let mut current: Option<TextStub> = None;

        for line in text.lines().map(squash_inline) {
            if stubs.len() >= self.limit {
                break;
            }
            if is_boilerplate(&line) {
                continue;
            }

            if self.is_title_boundary(&line) {
                if let Some(stub) = current.take() {
                    stubs.push(stub);
                }
                current = Some(TextStub {
                    title: line,
                    ..Default::default()
                });
                continue;
            }

            let Some(stub) = current.as_mut() else {
                continue;
            };
            let lower = line.to_lowercase();
            // 命中词表的行总是地点，后出现的覆盖先出现的
            if GAZETTEER.iter().any(|place| lower.contains(place)) {
                stub.location = Some(line);
            } else if stub.description.is_none()
                && char_len(&line) > MIN_DESCRIPTION_LEN
                && !is_pagination(&line)
            {
                stub.description = Some(line);
            }
        }

        if let Some(stub) = current {
            if stubs.len() < self.limit {
                stubs.push(stub);
            }
        }
        stubs
    }
}
