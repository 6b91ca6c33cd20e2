// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// - 领域模型（models）：职位记录、搜索结果与手动录入
/// - 数据源接口（boards）：招聘网站契约，具体配置由基础设施层提供
/// - 服务（services）：提取流水线与抓取编排
pub mod boards;
pub mod models;
pub mod services;
