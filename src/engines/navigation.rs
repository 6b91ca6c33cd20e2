// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::pacing::{DelayProvider, DelayWindow};
use crate::engines::traits::{BrowserSession, NavigationOptions};
use crate::utils::errors::CrawlError;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// 导航与节奏控制器
///
/// 每次导航都受 `timeout` 约束；就绪后按 `settle` 区间等待，让客户端渲染完成。
#[derive(Clone)]
pub struct Navigator {
    delay: Arc<dyn DelayProvider>,
}

impl Navigator {
    pub fn new(delay: Arc<dyn DelayProvider>) -> Self {
        Self { delay }
    }

    /// 导航到 `url` 并等待页面就绪
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 页面已就绪且稳定等待已结束
    /// * `Err(CrawlError::NavigationTimeout)` - 页面未在截止时间内就绪
    /// * `Err(CrawlError)` - 导航本身失败
    pub async fn navigate(
        &self,
        session: &mut dyn BrowserSession,
        url: &str,
        options: &NavigationOptions,
    ) -> Result<(), CrawlError> {
        let started = Instant::now();
        let load = async {
            session.goto(url).await?;
            session.wait_until(options.wait).await
        };

        match tokio::time::timeout(options.timeout, load).await {
            Ok(Ok(())) => {
                debug!(
                    "Loaded {} in {}ms ({:?})",
                    url,
                    started.elapsed().as_millis(),
                    options.wait
                );
            }
            Ok(Err(e)) => {
                warn!("Navigation to {} failed: {}", url, e);
                return Err(e);
            }
            Err(_) => {
                warn!("Navigation to {} exceeded {}ms", url, options.timeout_ms());
                return Err(CrawlError::NavigationTimeout {
                    url: url.to_string(),
                    timeout_ms: options.timeout_ms(),
                });
            }
        }

        self.delay.pause(options.settle).await;
        Ok(())
    }

    /// 详情页之间的请求间隔，无条件执行
    pub async fn pace(&self, window: DelayWindow) {
        self.delay.pause(window).await;
    }
}
