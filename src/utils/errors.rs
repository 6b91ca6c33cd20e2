// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 爬取错误类型
///
/// 浏览器、导航与提取过程中的所有失败都归入此枚举，
/// 在操作边界处被转换为 `CrawlResult` / `SingleJobResult` 的错误字段。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrawlError {
    /// 浏览器进程无法启动
    #[error("Failed to launch browser: {0}")]
    LaunchFailure(String),

    /// 页面在截止时间内未就绪
    #[error("Navigation to {url} timed out after {timeout_ms}ms")]
    NavigationTimeout { url: String, timeout_ms: u64 },

    /// 导航失败（非超时）
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// CDP 调用或页面求值失败
    #[error("Browser error: {0}")]
    Browser(String),

    /// 无效输入，在创建会话之前拒绝
    #[error("Invalid input: {0}")]
    MalformedInput(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CrawlError {
    /// 判断错误是否会终止整个列表批次
    ///
    /// 详情页的导航失败只会降级单条记录，启动失败与输入错误则终止整个请求。
    pub fn is_fatal_for_batch(&self) -> bool {
        matches!(
            self,
            CrawlError::LaunchFailure(_) | CrawlError::MalformedInput(_) | CrawlError::Internal(_)
        )
    }
}
