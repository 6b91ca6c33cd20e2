// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use jobcrawl::config::settings::Settings;
use jobcrawl::domain::services::crawl_service::JobCrawler;
use jobcrawl::engines::pacing::{DelayProvider, NoDelay};
use jobcrawl::engines::traits::{
    BrowserLauncher, BrowserProfile, BrowserSession, PageSnapshot, WaitStrategy,
};
use jobcrawl::infrastructure::boards::default_catalog;
use jobcrawl::utils::errors::CrawlError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// 脚本化的页面行为
#[derive(Debug, Clone)]
pub enum Script {
    /// 正常加载
    Page(PageSnapshot),
    /// 永不就绪，由导航超时终止
    Hang,
    /// 导航失败
    Fail(CrawlError),
    /// 导航过程中 panic
    Panic,
}

/// 由 HTML 构造页面，可见文本从 HTML 推算
pub fn html_page(url: &str, html: &str) -> Script {
    Script::Page(PageSnapshot::from_html(url, html))
}

/// 显式指定 innerText 的页面
pub fn text_page(url: &str, html: &str, text: &str) -> Script {
    Script::Page(PageSnapshot::new(url, html, text))
}

/// 浏览器活动记录
#[derive(Debug, Default)]
pub struct BrowserLog {
    launches: AtomicUsize,
    closes: AtomicUsize,
    visits: Mutex<Vec<String>>,
    profiles: Mutex<Vec<BrowserProfile>>,
}

impl BrowserLog {
    pub fn launches(&self) -> usize {
        self.launches.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }

    pub fn profiles(&self) -> Vec<BrowserProfile> {
        self.profiles.lock().unwrap().clone()
    }
}

/// 内存中的浏览器，按 URL 返回预设页面
pub struct FakeLauncher {
    pages: Arc<HashMap<String, Script>>,
    log: Arc<BrowserLog>,
    fail_launch: bool,
}

impl FakeLauncher {
    pub fn new(pages: Vec<(&str, Script)>) -> Self {
        Self {
            pages: Arc::new(
                pages
                    .into_iter()
                    .map(|(url, script)| (url.to_string(), script))
                    .collect(),
            ),
            log: Arc::new(BrowserLog::default()),
            fail_launch: false,
        }
    }

    /// 每次启动都失败
    pub fn failing() -> Self {
        let mut launcher = Self::new(Vec::new());
        launcher.fail_launch = true;
        launcher
    }

    pub fn log(&self) -> Arc<BrowserLog> {
        self.log.clone()
    }
}

#[async_trait]
impl BrowserLauncher for FakeLauncher {
    async fn launch(&self, profile: BrowserProfile) -> Result<Box<dyn BrowserSession>, CrawlError> {
        self.log.launches.fetch_add(1, Ordering::SeqCst);
        if self.fail_launch {
            return Err(CrawlError::LaunchFailure(
                "No usable sandbox available".to_string(),
            ));
        }
        self.log.profiles.lock().unwrap().push(profile);
        Ok(Box::new(FakeSession {
            pages: self.pages.clone(),
            log: self.log.clone(),
            current: None,
        }))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

pub struct FakeSession {
    pages: Arc<HashMap<String, Script>>,
    log: Arc<BrowserLog>,
    current: Option<PageSnapshot>,
}

#[async_trait]
impl BrowserSession for FakeSession {
    async fn goto(&mut self, url: &str) -> Result<(), CrawlError> {
        self.log.visits.lock().unwrap().push(url.to_string());
        match self.pages.get(url) {
            Some(Script::Page(page)) => {
                self.current = Some(page.clone());
                Ok(())
            }
            Some(Script::Hang) => {
                std::future::pending::<()>().await;
                Ok(())
            }
            Some(Script::Fail(e)) => Err(e.clone()),
            Some(Script::Panic) => panic!("renderer crashed while loading {}", url),
            None => Err(CrawlError::Navigation(format!(
                "net::ERR_NAME_NOT_RESOLVED at {}",
                url
            ))),
        }
    }

    async fn wait_until(&mut self, _strategy: WaitStrategy) -> Result<(), CrawlError> {
        Ok(())
    }

    async fn snapshot(&mut self) -> Result<PageSnapshot, CrawlError> {
        self.current
            .clone()
            .ok_or_else(|| CrawlError::Browser("No page loaded".to_string()))
    }

    async fn close(self: Box<Self>) -> Result<(), CrawlError> {
        self.log.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// 使用内置网站配置与默认设置构造抓取服务
pub fn crawler_with(launcher: FakeLauncher, delay: Arc<dyn DelayProvider>) -> (JobCrawler, Arc<BrowserLog>) {
    let log = launcher.log();
    let crawler = JobCrawler::new(
        Arc::new(launcher),
        delay,
        default_catalog(),
        &Settings::default(),
    );
    (crawler, log)
}

pub fn crawler(launcher: FakeLauncher) -> (JobCrawler, Arc<BrowserLog>) {
    crawler_with(launcher, Arc::new(NoDelay))
}
