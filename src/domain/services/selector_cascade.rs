// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 级联选择器
//!
//! 每个字段对应一组按优先级排列的选择器，依次尝试，第一个通过长度门槛的结果胜出。

use crate::utils::text::{char_len, clean_block, element_text, squash_inline, truncate_chars};
use scraper::{ElementRef, Html, Selector};
use tracing::{trace, warn};

/// 长度门槛（按字符计，均为开区间）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthGate {
    pub longer_than: usize,
    pub shorter_than: Option<usize>,
}

impl LengthGate {
    pub const fn longer_than(min: usize) -> Self {
        Self {
            longer_than: min,
            shorter_than: None,
        }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            longer_than: min,
            shorter_than: Some(max),
        }
    }

    pub fn admits(&self, text: &str) -> bool {
        let len = char_len(text);
        len > self.longer_than && self.shorter_than.is_none_or(|max| len < max)
    }
}

/// 文本清理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// 折叠为单行
    Inline,
    /// 保留段落
    Block,
}

/// 单个字段的级联选择器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCascade {
    name: &'static str,
    selectors: &'static [&'static str],
    gate: LengthGate,
    mode: TextMode,
    cap: Option<usize>,
}

impl FieldCascade {
    pub const fn new(
        name: &'static str,
        selectors: &'static [&'static str],
        gate: LengthGate,
    ) -> Self {
        Self {
            name,
            selectors,
            gate,
            mode: TextMode::Inline,
            cap: None,
        }
    }

    /// 以段落方式清理，并截断到 `cap` 个字符
    pub const fn block(mut self, cap: usize) -> Self {
        self.mode = TextMode::Block;
        self.cap = Some(cap);
        self
    }

    /// 在整个文档中查找
    pub fn first_match(&self, document: &Html) -> Option<String> {
        self.selectors.iter().find_map(|raw| {
            let selector = parse_selector(raw)?;
            let element = document.select(&selector).next()?;
            self.accept(element)
        })
    }

    /// 在某个元素（如职位卡片）内部查找
    pub fn first_match_in(&self, scope: ElementRef<'_>) -> Option<String> {
        self.selectors.iter().find_map(|raw| {
            let selector = parse_selector(raw)?;
            let element = scope.select(&selector).next()?;
            self.accept(element)
        })
    }

    fn accept(&self, element: ElementRef<'_>) -> Option<String> {
        let raw = element_text(element);
        let text = match self.mode {
            TextMode::Inline => squash_inline(&raw),
            TextMode::Block => clean_block(&raw),
        };
        if !self.gate.admits(&text) {
            trace!(
                "Rejected {} candidate of {} chars",
                self.name,
                char_len(&text)
            );
            return None;
        }
        Some(match self.cap {
            Some(cap) => truncate_chars(&text, cap),
            None => text,
        })
    }
}

/// 解析选择器，无效选择器记录日志后跳过
pub fn parse_selector(raw: &str) -> Option<Selector> {
    match Selector::parse(raw) {
        Ok(selector) => Some(selector),
        Err(e) => {
            warn!("Skipping invalid selector {:?}: {:?}", raw, e);
            None
        }
    }
}
