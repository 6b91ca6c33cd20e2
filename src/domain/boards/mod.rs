// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 招聘网站数据源接口
///
/// 领域层只定义数据源契约与集合，具体网站的选择器配置由基础设施层提供。
pub mod source;

pub use source::{BoardCatalog, JobBoardSource};
