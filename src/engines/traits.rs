// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::engines::pacing::DelayWindow;
use crate::utils::errors::CrawlError;
use crate::utils::text::visible_text;
use async_trait::async_trait;
use scraper::Html;
use std::time::Duration;

/// 桌面 Chrome 的 User-Agent
pub const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// 浏览器启动配置档
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserProfile {
    /// 仅设置 User-Agent 与沙箱参数
    Default,
    /// 真实视口、语言请求头，并关闭自动化检测标志
    Stealth,
}

impl BrowserProfile {
    /// 附加的启动参数（沙箱参数由引擎统一处理）
    pub fn launch_args(&self) -> &'static [&'static str] {
        match self {
            BrowserProfile::Default => &["--disable-setuid-sandbox"],
            BrowserProfile::Stealth => &[
                "--disable-setuid-sandbox",
                "--disable-blink-features=AutomationControlled",
                "--disable-infobars",
                "--disable-dev-shm-usage",
                "--disable-accelerated-2d-canvas",
                "--disable-gpu",
                "--window-size=1920,1080",
            ],
        }
    }

    /// 每个请求附带的额外请求头
    pub fn extra_headers(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            BrowserProfile::Default => &[],
            BrowserProfile::Stealth => &[
                ("Accept-Language", "en-US,en;q=0.9"),
                ("Accept-Encoding", "gzip, deflate, br"),
                (
                    "Accept",
                    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
                ),
            ],
        }
    }

    /// 视口尺寸
    pub fn viewport(&self) -> Option<(u32, u32)> {
        match self {
            BrowserProfile::Default => None,
            BrowserProfile::Stealth => Some((1920, 1080)),
        }
    }
}

/// 页面就绪判定策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitStrategy {
    /// 等待 load 事件
    Load,
    /// 等待 load 事件后，资源请求数在连续两次采样间不再变化
    NetworkIdle,
}

/// 导航参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationOptions {
    pub wait: WaitStrategy,
    pub timeout: Duration,
    /// 页面就绪后的稳定等待
    pub settle: DelayWindow,
}

impl NavigationOptions {
    pub fn network_idle(timeout_ms: u64, settle: DelayWindow) -> Self {
        Self {
            wait: WaitStrategy::NetworkIdle,
            timeout: Duration::from_millis(timeout_ms),
            settle,
        }
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }
}

/// 渲染后的页面状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    /// 当前页面地址
    pub url: String,
    /// 渲染后的完整 HTML
    pub html: String,
    /// `document.body.innerText`
    pub text: String,
}

impl PageSnapshot {
    pub fn new(url: impl Into<String>, html: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
            text: text.into(),
        }
    }

    /// 仅由 HTML 构造快照，可见文本按文本节点逐行近似 innerText
    pub fn from_html(url: impl Into<String>, html: impl Into<String>) -> Self {
        let html = html.into();
        let text = visible_text(&Html::parse_document(&html));
        Self {
            url: url.into(),
            html,
            text,
        }
    }

    pub fn document(&self) -> Html {
        Html::parse_document(&self.html)
    }
}

/// 单个浏览器会话（一个浏览器进程 + 一个页面）
///
/// 会话只被一个调用方顺序使用，因此方法均取 `&mut self`。
#[async_trait]
pub trait BrowserSession: Send {
    /// 发起导航
    async fn goto(&mut self, url: &str) -> Result<(), CrawlError>;

    /// 等待页面达到指定的就绪状态
    async fn wait_until(&mut self, strategy: WaitStrategy) -> Result<(), CrawlError>;

    /// 读取当前页面的 HTML 与可见文本
    async fn snapshot(&mut self) -> Result<PageSnapshot, CrawlError>;

    /// 关闭页面并终止浏览器进程
    async fn close(self: Box<Self>) -> Result<(), CrawlError>;
}

/// 浏览器启动器特质
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    /// 按配置档启动一个隔离的浏览器会话
    async fn launch(&self, profile: BrowserProfile) -> Result<Box<dyn BrowserSession>, CrawlError>;

    /// 启动器名称
    fn name(&self) -> &'static str;
}
