// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 每个处理器只负责把请求交给用例，并把结果映射为状态码与 JSON
pub mod crawl_handler;
pub mod fetch_job_handler;
pub mod manual_job_handler;
