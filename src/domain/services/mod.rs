// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 反爬检测（bot_detector）：识别挑战页
/// - 级联选择器（selector_cascade）：按优先级尝试选择器
/// - 列表页提取（listing_extractor）：卡片、链接、文本三级回退
/// - 文本启发式（text_heuristics）：逐行切分无结构页面文本
/// - 详情页提取（detail_extractor）：字段级联与正文兜底
/// - 归一化（normalizer）：填充缺省值、生成 ID、截断描述
/// - 抓取服务（crawl_service）：编排会话、导航与提取
pub mod bot_detector;
pub mod crawl_service;
pub mod detail_extractor;
pub mod listing_extractor;
pub mod normalizer;
pub mod selector_cascade;
pub mod text_heuristics;
