// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 页面文本处理工具
//!
//! 选择器命中的元素文本通常带有大量缩进与空行，这里统一做清理与截断。

use scraper::{ElementRef, Html, Node, Selector};

/// 不计入可见文本的标签
const INVISIBLE_TAGS: [&str; 5] = ["script", "style", "noscript", "template", "svg"];

/// 字符数（非字节数）
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// 按字符截断，并去掉截断处的尾随空白
pub fn truncate_chars(text: &str, cap: usize) -> String {
    match text.char_indices().nth(cap) {
        Some((byte_idx, _)) => text[..byte_idx].trim_end().to_string(),
        None => text.to_string(),
    }
}

/// 将所有空白折叠为单个空格，用于标题、公司、地点等单行字段
pub fn squash_inline(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 保留段落结构的清理：逐行折叠空白并去除空行
pub fn clean_block(text: &str) -> String {
    text.lines()
        .map(squash_inline)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// 元素的 textContent（未清理）
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// 提取 `<body>` 中的可见文本，每个文本节点一行
///
/// 在没有浏览器 `innerText` 的情况下（例如测试中直接由 HTML 构造的快照）用作近似。
pub fn visible_text(document: &Html) -> String {
    let root = match Selector::parse("body") {
        Ok(selector) => document.select(&selector).next(),
        Err(_) => None,
    };
    let root = match root {
        Some(body) => body,
        None => document.root_element(),
    };

    let mut lines = Vec::new();
    for node in root.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| INVISIBLE_TAGS.contains(&el.name()))
        });
        if hidden {
            continue;
        }
        let line = squash_inline(text);
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines.join("\n")
}
