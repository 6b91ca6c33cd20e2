// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{BrowserLauncher, BrowserProfile, BrowserSession};
use crate::utils::errors::CrawlError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// 关闭会话的最长等待时间，超过后放弃等待
///
/// 需大于浏览器引擎自身的关闭上限（CDP 请求超时加进程退出等待）。
pub const RELEASE_TIMEOUT: Duration = Duration::from_secs(45);

/// 浏览器会话管理器
///
/// 每个请求独占一个会话。调用方必须对每次 `acquire` 成功的会话恰好调用一次
/// `release`，包括导航或提取失败的路径。
#[derive(Clone)]
pub struct SessionManager {
    launcher: Arc<dyn BrowserLauncher>,
}

impl SessionManager {
    pub fn new(launcher: Arc<dyn BrowserLauncher>) -> Self {
        Self { launcher }
    }

    /// 启动会话，失败不重试
    pub async fn acquire(
        &self,
        profile: BrowserProfile,
    ) -> Result<Box<dyn BrowserSession>, CrawlError> {
        info!(
            "Launching {} browser session ({:?} profile)",
            self.launcher.name(),
            profile
        );
        self.launcher.launch(profile).await.map_err(|e| {
            error!("Browser launch failed: {}", e);
            e
        })
    }

    /// 释放会话，关闭失败或超时只记录日志，总会在 `RELEASE_TIMEOUT` 内返回
    pub async fn release(&self, session: Box<dyn BrowserSession>) {
        match tokio::time::timeout(RELEASE_TIMEOUT, session.close()).await {
            Ok(Ok(())) => debug!("Browser session released"),
            Ok(Err(e)) => warn!("Browser session did not close cleanly: {}", e),
            Err(_) => warn!(
                "Browser session did not close within {}s, abandoning it",
                RELEASE_TIMEOUT.as_secs()
            ),
        }
    }
}
