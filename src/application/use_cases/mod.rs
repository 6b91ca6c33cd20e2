// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 负责请求校验，并把请求转交给领域层的抓取服务
pub mod job_use_case;
