// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 位于 HTTP 表示层与领域层之间：定义请求/响应结构并完成输入校验
pub mod dto;
pub mod use_cases;
