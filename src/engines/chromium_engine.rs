// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::BrowserSettings;
use crate::engines::traits::{
    BrowserLauncher, BrowserProfile, BrowserSession, PageSnapshot, WaitStrategy,
};
use crate::utils::errors::CrawlError;
use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::network::{Headers, SetExtraHttpHeadersParams};
use chromiumoxide::handler::viewport::Viewport;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// 网络空闲判定的采样间隔
const IDLE_SAMPLE_INTERVAL: Duration = Duration::from_millis(500);
/// 网络空闲判定的最大采样次数，总时长需明显短于最短的导航超时（20s）
const IDLE_MAX_SAMPLES: u32 = 16;
/// 等待浏览器进程退出的上限
const EXIT_WAIT_TIMEOUT: Duration = Duration::from_secs(5);

const READY_STATE_SCRIPT: &str = "document.readyState";
const RESOURCE_COUNT_SCRIPT: &str = "performance.getEntriesByType('resource').length";
const INNER_TEXT_SCRIPT: &str = "document.body ? document.body.innerText : ''";

/// Chromium 启动器
///
/// 基于chromiumoxide实现，每次 `launch` 启动一个独立的浏览器进程；
/// 配置了远程调试地址时改为连接远程浏览器，只新建页面。
pub struct ChromiumLauncher {
    settings: BrowserSettings,
}

impl ChromiumLauncher {
    pub fn new(settings: BrowserSettings) -> Self {
        Self { settings }
    }

    fn remote_debugging_url(&self) -> Option<String> {
        self.settings
            .remote_debugging_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| std::env::var("CHROMIUM_REMOTE_DEBUGGING_URL").ok())
    }

    /// 按配置档构建浏览器启动参数
    fn browser_config(&self, profile: BrowserProfile) -> Result<BrowserConfig, CrawlError> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .request_timeout(Duration::from_millis(self.settings.request_timeout_ms));

        if !self.settings.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &self.settings.executable {
            builder = builder.chrome_executable(path);
        }
        for arg in profile.launch_args() {
            builder = builder.arg(*arg);
        }
        if let Some((width, height)) = profile.viewport() {
            builder = builder.window_size(width, height).viewport(Viewport {
                width,
                height,
                ..Default::default()
            });
        }

        builder.build().map_err(CrawlError::LaunchFailure)
    }

    async fn prepare_page(&self, page: &Page, profile: BrowserProfile) -> Result<(), CrawlError> {
        page.set_user_agent(self.settings.user_agent.as_str())
            .await
            .map_err(|e| CrawlError::LaunchFailure(format!("Failed to set user agent: {}", e)))?;

        let headers = profile.extra_headers();
        if !headers.is_empty() {
            let map: serde_json::Map<String, serde_json::Value> = headers
                .iter()
                .map(|(name, value)| (name.to_string(), serde_json::Value::from(*value)))
                .collect();
            page.execute(SetExtraHttpHeadersParams::new(Headers::new(
                serde_json::Value::Object(map),
            )))
            .await
            .map_err(|e| CrawlError::LaunchFailure(format!("Failed to set headers: {}", e)))?;
        }
        Ok(())
    }
}

#[async_trait]
impl BrowserLauncher for ChromiumLauncher {
    async fn launch(&self, profile: BrowserProfile) -> Result<Box<dyn BrowserSession>, CrawlError> {
        let (browser, mut handler, owns_process) = match self.remote_debugging_url() {
            Some(url) => {
                tracing::info!("Connecting to remote Chrome instance at: {}", url);
                let (browser, handler) = Browser::connect(url).await.map_err(|e| {
                    CrawlError::LaunchFailure(format!("Failed to connect to remote Chrome: {}", e))
                })?;
                (browser, handler, false)
            }
            None => {
                let config = self.browser_config(profile)?;
                let (browser, handler) = Browser::launch(config)
                    .await
                    .map_err(|e| CrawlError::LaunchFailure(e.to_string()))?;
                (browser, handler, true)
            }
        };

        // Drive CDP events until the connection closes
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::trace!("CDP handler event error: {}", e);
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                shutdown(browser, handler_task, owns_process).await;
                return Err(CrawlError::LaunchFailure(format!(
                    "Failed to open page: {}",
                    e
                )));
            }
        };

        if let Err(e) = self.prepare_page(&page, profile).await {
            let _ = page.close().await;
            shutdown(browser, handler_task, owns_process).await;
            return Err(e);
        }

        Ok(Box::new(ChromiumSession {
            browser,
            page,
            handler_task,
            owns_process,
        }))
    }

    fn name(&self) -> &'static str {
        "chromium"
    }
}

/// 单个 Chromium 会话
pub struct ChromiumSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
    owns_process: bool,
}

impl ChromiumSession {
    async fn eval<T: serde::de::DeserializeOwned>(&self, script: &str) -> Result<T, CrawlError> {
        self.page
            .evaluate(script)
            .await
            .map_err(|e| CrawlError::Browser(format!("Script evaluation failed: {}", e)))?
            .into_value::<T>()
            .map_err(|e| CrawlError::Browser(format!("Unexpected script result: {}", e)))
    }

    /// 页面加载完成时返回已请求的资源数，否则返回 `None`
    async fn resource_count(&self) -> Result<Option<u64>, CrawlError> {
        let ready: String = self.eval(READY_STATE_SCRIPT).await?;
        if ready != "complete" {
            return Ok(None);
        }
        self.eval(RESOURCE_COUNT_SCRIPT).await.map(Some)
    }
}

/// 资源数在连续两次采样间不变即视为网络空闲
///
/// 采样次数用尽后按当前页面状态继续，不报错。
async fn wait_for_network_idle<F, Fut>(mut sample: F) -> Result<(), CrawlError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<u64>, CrawlError>>,
{
    let mut previous: Option<u64> = None;
    for _ in 0..IDLE_MAX_SAMPLES {
        tokio::time::sleep(IDLE_SAMPLE_INTERVAL).await;
        match sample().await? {
            None => previous = None,
            Some(count) if previous == Some(count) => return Ok(()),
            Some(count) => previous = Some(count),
        }
    }
    tracing::debug!("Network never went idle, continuing with current page state");
    Ok(())
}

#[async_trait]
impl BrowserSession for ChromiumSession {
    async fn goto(&mut self, url: &str) -> Result<(), CrawlError> {
        self.page
            .goto(url)
            .await
            .map_err(|e| CrawlError::Navigation(e.to_string()))?;
        Ok(())
    }

    async fn wait_until(&mut self, strategy: WaitStrategy) -> Result<(), CrawlError> {
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| CrawlError::Navigation(e.to_string()))?;
        match strategy {
            WaitStrategy::Load => Ok(()),
            WaitStrategy::NetworkIdle => {
                let session: &ChromiumSession = self;
                wait_for_network_idle(|| session.resource_count()).await
            }
        }
    }

    async fn snapshot(&mut self) -> Result<PageSnapshot, CrawlError> {
        let html = self
            .page
            .content()
            .await
            .map_err(|e| CrawlError::Browser(e.to_string()))?;
        let text: String = self.eval(INNER_TEXT_SCRIPT).await?;
        let url = self
            .page
            .url()
            .await
            .map_err(|e| CrawlError::Browser(e.to_string()))?
            .unwrap_or_default();
        Ok(PageSnapshot::new(url, html, text))
    }

    async fn close(self: Box<Self>) -> Result<(), CrawlError> {
        let ChromiumSession {
            browser,
            page,
            handler_task,
            owns_process,
        } = *self;
        if let Err(e) = page.close().await {
            tracing::debug!("Page close failed: {}", e);
        }
        shutdown(browser, handler_task, owns_process).await
    }
}

/// 终止浏览器进程（远程浏览器只断开连接）并停止事件处理任务
async fn shutdown(
    mut browser: Browser,
    handler_task: JoinHandle<()>,
    owns_process: bool,
) -> Result<(), CrawlError> {
    let result = if owns_process {
        let closed = match browser.close().await {
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::warn!("Browser close failed, killing process: {}", e);
                kill(&mut browser).await;
                Err(CrawlError::Browser(format!("Failed to close browser: {}", e)))
            }
        };
        match tokio::time::timeout(EXIT_WAIT_TIMEOUT, browser.wait()).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => tracing::debug!("Waiting for browser exit failed: {}", e),
            Err(_) => {
                tracing::warn!(
                    "Browser did not exit within {}s, killing process",
                    EXIT_WAIT_TIMEOUT.as_secs()
                );
                kill(&mut browser).await;
            }
        }
        closed
    } else {
        Ok(())
    };
    drop(browser);
    handler_task.abort();
    result
}

async fn kill(browser: &mut Browser) {
    if let Some(Err(e)) = browser.kill().await {
        tracing::warn!("Failed to kill browser process: {}", e);
    }
}
