// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 职位抓取服务
//!
//! 对外只暴露两个操作：按职位名称搜索某个招聘网站，以及抓取单个职位 URL。
//! 两个操作都不会返回错误，所有失败都被转换为结果中的 `error` 字段。

use crate::config::settings::{ExtractionSettings, NavigationSettings, Settings};
use crate::domain::boards::{BoardCatalog, JobBoardSource};
use crate::domain::models::crawl::{BlockReason, CrawlResult, SingleJobResult};
use crate::domain::models::job::{JobBoard, JobRecord, JobStub, RawJob};
use crate::domain::models::manual_entry::MANUAL_DESCRIPTION_CAP;
use crate::domain::services::bot_detector::BotProtectionDetector;
use crate::domain::services::detail_extractor::{DetailExtractor, DetailFields};
use crate::domain::services::normalizer::{FieldDefaults, Normalizer, DEFAULT_DESCRIPTION};
use crate::engines::navigation::Navigator;
use crate::engines::pacing::DelayProvider;
use crate::engines::session::SessionManager;
use crate::engines::traits::{BrowserLauncher, BrowserProfile, BrowserSession, NavigationOptions};
use crate::engines::validators::validate_job_url;
use crate::utils::errors::CrawlError;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

const EXTERNAL_LINK_DESCRIPTION: &str = "Job description not available - external link.";
const FETCH_FAILED_DESCRIPTION: &str = "Failed to fetch job description.";
const MANUAL_FALLBACK_HINT: &str = "Please paste the job description manually.";

/// 详情页访问结果
enum DetailPage {
    Blocked(&'static str),
    Described(Option<String>),
}

/// 职位抓取服务
///
/// 无跨请求状态：每次调用独占一个浏览器会话，并在所有退出路径上释放。
#[derive(Clone)]
pub struct JobCrawler {
    sessions: SessionManager,
    navigator: Navigator,
    catalog: BoardCatalog,
    detector: BotProtectionDetector,
    navigation: NavigationSettings,
    extraction: ExtractionSettings,
}

impl JobCrawler {
    pub fn new(
        launcher: Arc<dyn BrowserLauncher>,
        delay: Arc<dyn DelayProvider>,
        catalog: BoardCatalog,
        settings: &Settings,
    ) -> Self {
        Self {
            sessions: SessionManager::new(launcher),
            navigator: Navigator::new(delay),
            catalog,
            detector: BotProtectionDetector::new(),
            navigation: settings.navigation.clone(),
            extraction: settings.extraction.clone(),
        }
    }

    /// 在指定招聘网站上搜索职位
    ///
    /// # 参数
    ///
    /// * `role` - 职位名称，去除首尾空白后不能为空
    /// * `board` - 招聘网站，必须是可搜索的网站
    /// * `location` - 地点，仅部分网站支持
    ///
    /// # 返回值
    ///
    /// `jobs` 非空时 `error` 为警告；为空时 `error` 说明失败原因
    #[instrument(skip(self, board, location), fields(board = %board))]
    pub async fn search(&self, role: &str, board: JobBoard, location: Option<&str>) -> CrawlResult {
        let Some(source) = self.catalog.source(board) else {
            warn!("Search requested for unsupported board {}", board);
            return CrawlResult::failure(format!("Unsupported job board: {}", board));
        };
        let listing_url = match source.listing_url(role, location) {
            Ok(url) => url,
            Err(e) => return CrawlResult::failure(user_message(&e)),
        };
        let role = role.trim();

        let mut session = match self.sessions.acquire(source.browser_profile()).await {
            Ok(session) => session,
            Err(e) => return CrawlResult::failure(e.to_string()),
        };

        let outcome = AssertUnwindSafe(self.crawl_board(
            session.as_mut(),
            source.as_ref(),
            &listing_url,
            role,
        ))
        .catch_unwind()
        .await;
        self.sessions.release(session).await;

        match outcome {
            Ok(Ok(result)) => {
                info!(
                    "Search on {} returned {} jobs{}",
                    board,
                    result.jobs.len(),
                    if result.error.is_some() { " with warnings" } else { "" }
                );
                result
            }
            Ok(Err(e)) => {
                error!("Search on {} failed: {}", board, e);
                CrawlResult::failure(e.to_string())
            }
            Err(payload) => {
                let e = CrawlError::Internal(panic_message(payload));
                error!("Search on {} aborted: {}", board, e);
                CrawlResult::failure(e.to_string())
            }
        }
    }

    /// 抓取任意职位页面
    ///
    /// URL 无效时不会创建浏览器会话，结果 `blocked = false`；
    /// 其余失败一律 `blocked = true`，提示调用方改用手动录入。
    #[instrument(skip(self))]
    pub async fn fetch_single(&self, job_url: &str) -> SingleJobResult {
        let url = match validate_job_url(job_url) {
            Ok(url) => url,
            Err(e) => {
                debug!("Rejected job URL {:?}: {}", job_url, e);
                return SingleJobResult::rejected(user_message(&e));
            }
        };
        let url = url.to_string();

        let mut session = match self.sessions.acquire(BrowserProfile::Stealth).await {
            Ok(session) => session,
            Err(e) => return SingleJobResult::blocked(e.to_string(), BlockReason::Failure),
        };

        let outcome = AssertUnwindSafe(self.fetch_page(session.as_mut(), &url))
            .catch_unwind()
            .await;
        self.sessions.release(session).await;

        match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                warn!("Single job fetch for {} failed: {}", url, e);
                SingleJobResult::blocked(e.to_string(), BlockReason::Failure)
            }
            Err(payload) => {
                let e = CrawlError::Internal(panic_message(payload));
                error!("Single job fetch for {} aborted: {}", url, e);
                SingleJobResult::blocked(e.to_string(), BlockReason::Failure)
            }
        }
    }

    async fn crawl_board(
        &self,
        session: &mut dyn BrowserSession,
        source: &dyn JobBoardSource,
        listing_url: &str,
        role: &str,
    ) -> Result<CrawlResult, CrawlError> {
        let board = source.board();
        let timeouts = self.navigation.timeouts_for(board);

        info!("Navigating to {} listings: {}", board.display_name(), listing_url);
        let options = NavigationOptions::network_idle(
            timeouts.listing_timeout_ms,
            self.navigation.listing_settle,
        );
        self.navigator.navigate(session, listing_url, &options).await?;
        let page = session.snapshot().await?;

        if let Some(marker) = self.detector.detect(&page.html, &page.text) {
            warn!("Bot protection on {} listing page (marker {:?})", board, marker);
            return Ok(CrawlResult::failure(format!(
                "Bot protection detected on {}. {}",
                board.display_name(),
                MANUAL_FALLBACK_HINT
            )));
        }

        let listing = source.extract_listing(&page, role, self.extraction.max_listings);
        let total = listing.stubs.len();
        let normalizer = Normalizer::new(board, source.description_cap());
        let detail_options = NavigationOptions::network_idle(
            timeouts.detail_timeout_ms,
            self.navigation.detail_settle,
        );

        let mut jobs = Vec::with_capacity(total);
        let mut visits = 0usize;
        let mut failed = 0usize;

        for stub in listing.stubs {
            let description = match stub.description.clone() {
                Some(description) => description,
                None if stub.url == page.url
                    || stub.url == listing_url
                    || !source.accepts_detail_url(&stub.url) =>
                {
                    snippet_or(&stub, EXTERNAL_LINK_DESCRIPTION)
                }
                None => {
                    if visits > 0 {
                        self.navigator.pace(self.navigation.inter_request).await;
                    }
                    visits += 1;

                    match self.visit_detail(session, source, &stub.url, &detail_options).await {
                        Ok(DetailPage::Described(Some(description))) => description,
                        Ok(DetailPage::Described(None)) => snippet_or(&stub, DEFAULT_DESCRIPTION),
                        Ok(DetailPage::Blocked(marker)) => {
                            warn!(
                                "Bot protection on detail page {} (marker {:?}), using snippet",
                                stub.url, marker
                            );
                            let company = stub
                                .company
                                .as_deref()
                                .unwrap_or(FieldDefaults::for_board(board).company);
                            snippet_or(
                                &stub,
                                &format!(
                                    "{} at {}. Visit {} for full details.",
                                    stub.title,
                                    company,
                                    board.display_name()
                                ),
                            )
                        }
                        Err(e) if e.is_fatal_for_batch() => return Err(e),
                        Err(e) => {
                            warn!("Failed to fetch details for job {:?}: {}", stub.title, e);
                            failed += 1;
                            snippet_or(&stub, FETCH_FAILED_DESCRIPTION)
                        }
                    }
                }
            };

            let mut raw = RawJob::from(stub);
            raw.description = description;
            jobs.push(normalizer.normalize(raw));
        }

        let mut result = CrawlResult::success(jobs);
        if let Some(advisory) = listing.advisory {
            result = result.with_warning(advisory);
        }
        if failed > 0 {
            result = result.with_warning(format!(
                "Could not fetch full descriptions for {} of {} jobs; listing snippets were used instead.",
                failed, total
            ));
        }
        Ok(result)
    }

    async fn visit_detail(
        &self,
        session: &mut dyn BrowserSession,
        source: &dyn JobBoardSource,
        url: &str,
        options: &NavigationOptions,
    ) -> Result<DetailPage, CrawlError> {
        debug!("Fetching details from {}", url);
        self.navigator.navigate(session, url, options).await?;
        let page = session.snapshot().await?;
        if let Some(marker) = self.detector.detect(&page.html, &page.text) {
            return Ok(DetailPage::Blocked(marker));
        }
        Ok(DetailPage::Described(source.extract_detail(&page).description))
    }

    async fn fetch_page(
        &self,
        session: &mut dyn BrowserSession,
        url: &str,
    ) -> Result<SingleJobResult, CrawlError> {
        let options = NavigationOptions::network_idle(
            self.navigation.single_timeout_ms,
            self.navigation.single_settle,
        );
        info!("Fetching single job URL: {}", url);
        self.navigator.navigate(session, url, &options).await?;
        let page = session.snapshot().await?;

        if let Some(marker) = self.detector.detect(&page.html, &page.text) {
            warn!("Bot protection detected on {} (marker {:?})", url, marker);
            return Ok(SingleJobResult::blocked(
                format!("Bot protection detected. {}", MANUAL_FALLBACK_HINT),
                BlockReason::BotChallenge {
                    marker: marker.to_string(),
                },
            ));
        }

        let fields = DetailExtractor::new(self.catalog.single_page()).extract(&page);
        let length = fields.description_len();
        if length < self.extraction.min_single_description {
            warn!(
                "Description from {} too short ({} chars), asking for manual entry",
                url, length
            );
            return Ok(SingleJobResult::blocked(
                format!(
                    "Could not extract job description from the page. The page structure may be unsupported. {}",
                    MANUAL_FALLBACK_HINT
                ),
                BlockReason::InsufficientContent { length },
            ));
        }

        let record = single_page_record(url, fields);
        debug!("Extracted {:?} from {}", record.title, url);
        Ok(SingleJobResult::success(record))
    }
}

fn single_page_record(url: &str, fields: DetailFields) -> JobRecord {
    Normalizer::new(JobBoard::Manual, MANUAL_DESCRIPTION_CAP).normalize(RawJob {
        id: None,
        title: fields.title.unwrap_or_default(),
        company: fields.company.unwrap_or_default(),
        location: fields.location.unwrap_or_default(),
        description: fields.description.unwrap_or_default(),
        url: url.to_string(),
    })
}

fn snippet_or(stub: &JobStub, fallback: &str) -> String {
    stub.snippet()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

/// 输入错误只返回原因本身
fn user_message(error: &CrawlError) -> String {
    match error {
        CrawlError::MalformedInput(reason) => reason.clone(),
        other => other.to_string(),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "extraction panicked".to_string()
    }
}
