// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::JobBoard;
use crate::domain::services::detail_extractor::{DetailExtractor, DetailFields, DetailProfile};
use crate::domain::services::listing_extractor::{ListingExtraction, ListingExtractor, ListingProfile};
use crate::engines::traits::{BrowserProfile, PageSnapshot};
use crate::utils::errors::CrawlError;
use crate::utils::url_utils::host_matches;
use std::collections::HashMap;
use std::sync::Arc;

/// 招聘网站数据源
///
/// 每个网站只提供 URL 规则与选择器配置，提取流程由默认方法统一实现。
pub trait JobBoardSource: Send + Sync {
    fn board(&self) -> JobBoard;

    /// 浏览器启动配置
    fn browser_profile(&self) -> BrowserProfile;

    /// 搜索结果页 URL
    fn listing_url(&self, role: &str, location: Option<&str>) -> Result<String, CrawlError>;

    fn listing_profile(&self) -> &ListingProfile;

    fn detail_profile(&self) -> &DetailProfile;

    /// 站点域名，用于判断详情链接是否为站内链接
    fn host(&self) -> &'static str;

    /// 描述的最大长度
    fn description_cap(&self) -> usize;

    fn extract_listing(&self, page: &PageSnapshot, role: &str, limit: usize) -> ListingExtraction {
        ListingExtractor::new(self.listing_profile()).extract(page, role, limit)
    }

    fn extract_detail(&self, page: &PageSnapshot) -> DetailFields {
        DetailExtractor::new(self.detail_profile()).extract(page)
    }

    fn accepts_detail_url(&self, url: &str) -> bool {
        host_matches(url, self.host())
    }
}

/// 可用的数据源集合，外加单 URL 抓取使用的通用详情配置
#[derive(Clone)]
pub struct BoardCatalog {
    sources: HashMap<JobBoard, Arc<dyn JobBoardSource>>,
    single_page: Arc<DetailProfile>,
}

impl BoardCatalog {
    pub fn new(single_page: DetailProfile) -> Self {
        Self {
            sources: HashMap::new(),
            single_page: Arc::new(single_page),
        }
    }

    pub fn with_source(mut self, source: Arc<dyn JobBoardSource>) -> Self {
        self.sources.insert(source.board(), source);
        self
    }

    pub fn source(&self, board: JobBoard) -> Option<Arc<dyn JobBoardSource>> {
        self.sources.get(&board).cloned()
    }

    pub fn single_page(&self) -> &DetailProfile {
        &self.single_page
    }

    pub fn boards(&self) -> Vec<JobBoard> {
        let mut boards: Vec<_> = self.sources.keys().copied().collect();
        boards.sort_by_key(|board| board.as_str());
        boards
    }
}

impl std::fmt::Debug for BoardCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardCatalog")
            .field("boards", &self.boards())
            .finish()
    }
}
