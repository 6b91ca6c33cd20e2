// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 详情页提取
//!
//! 每个字段各自按级联选择器查找；描述字段在选择器全部失败后依次尝试兜底策略，
//! 最后退化为页面正文文本。

use crate::domain::services::selector_cascade::FieldCascade;
use crate::engines::traits::PageSnapshot;
use crate::utils::text::{char_len, clean_block, truncate_chars, visible_text};
use scraper::Html;

/// 描述字段的兜底策略
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionFallback {
    /// 通用内容容器
    Containers(FieldCascade),
    /// 页面正文文本，长度需大于 `longer_than`，截断到 `cap`
    BodyText { longer_than: usize, cap: usize },
}

/// 某个招聘网站（或通用单页）的详情页选择器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailProfile {
    pub title: Option<FieldCascade>,
    pub company: Option<FieldCascade>,
    pub location: Option<FieldCascade>,
    pub description: FieldCascade,
    pub fallbacks: Vec<DescriptionFallback>,
}

impl DetailProfile {
    /// 只提取描述的配置（列表补全路径使用）
    pub fn description_only(description: FieldCascade, fallbacks: Vec<DescriptionFallback>) -> Self {
        Self {
            title: None,
            company: None,
            location: None,
            description,
            fallbacks,
        }
    }
}

/// 详情页提取结果，未找到的字段为 `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailFields {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl DetailFields {
    pub fn description_len(&self) -> usize {
        self.description.as_deref().map(char_len).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DetailExtractor<'a> {
    profile: &'a DetailProfile,
}

impl<'a> DetailExtractor<'a> {
    pub fn new(profile: &'a DetailProfile) -> Self {
        Self { profile }
    }

    pub fn extract(&self, page: &PageSnapshot) -> DetailFields {
        let document = page.document();
        let field = |cascade: &Option<FieldCascade>| {
            cascade
                .as_ref()
                .and_then(|cascade| cascade.first_match(&document))
        };

        DetailFields {
            title: field(&self.profile.title),
            company: field(&self.profile.company),
            location: field(&self.profile.location),
            description: self.description(page, &document),
        }
    }

    fn description(&self, page: &PageSnapshot, document: &Html) -> Option<String> {
        if let Some(found) = self.profile.description.first_match(document) {
            return Some(found);
        }
        self.profile
            .fallbacks
            .iter()
            .find_map(|fallback| match fallback {
                DescriptionFallback::Containers(cascade) => cascade.first_match(document),
                DescriptionFallback::BodyText { longer_than, cap } => {
                    let body = body_text(page, document);
                    (char_len(&body) > *longer_than).then(|| truncate_chars(&body, *cap))
                }
            })
    }
}

/// 优先使用浏览器的 innerText，缺失时从 HTML 推算
fn body_text(page: &PageSnapshot, document: &Html) -> String {
    let text = clean_block(&page.text);
    if text.is_empty() {
        clean_block(&visible_text(document))
    } else {
        text
    }
}
