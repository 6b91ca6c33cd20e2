// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 原始 HTML 中的挑战页标记（区分大小写）
const HTML_MARKERS: [&str; 6] = [
    "Ray ID",
    "challenge-platform",
    "captcha",
    "cf-chl-",
    "<title>Robot Check</title>",
    "hcaptcha.com",
];

/// 渲染文本中的挑战页措辞（小写，忽略大小写匹配）
const TEXT_MARKERS: [&str; 6] = [
    "please verify you are a human",
    "verify you are a human",
    "verify you are human",
    "access denied",
    "checking your browser before accessing",
    "unusual traffic from your computer",
];

/// 反爬检测器
///
/// 无状态的子串匹配。漏报可以接受，误报的代价只是让调用方走手动录入。
#[derive(Debug, Clone, Copy, Default)]
pub struct BotProtectionDetector;

impl BotProtectionDetector {
    pub fn new() -> Self {
        Self
    }

    /// 返回命中的第一个标记
    pub fn detect(&self, html: &str, text: &str) -> Option<&'static str> {
        if let Some(marker) = HTML_MARKERS.iter().find(|m| html.contains(*m)) {
            return Some(*marker);
        }
        let text = text.to_lowercase();
        TEXT_MARKERS.iter().find(|m| text.contains(*m)).copied()
    }
}
