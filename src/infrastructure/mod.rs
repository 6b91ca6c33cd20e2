// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层
///
/// 提供具体招聘网站的 URL 规则与选择器配置。
pub mod boards;
