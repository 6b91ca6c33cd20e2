// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 职位（job）：职位记录、列表候选项与来源
/// - 爬取结果（crawl）：搜索结果与单 URL 抓取结果
/// - 手动录入（manual_entry）：被拦截时由用户填写的职位
pub mod crawl;
pub mod job;
pub mod manual_entry;
