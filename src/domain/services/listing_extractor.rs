// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 列表页提取
//!
//! 按顺序尝试三种策略，第一个产出候选职位的策略胜出：
//! 职位卡片选择器、通用链接扫描、文本启发式解析。全部失败时生成一个占位职位。

use crate::domain::models::job::JobStub;
use crate::domain::services::selector_cascade::{parse_selector, FieldCascade};
use crate::domain::services::text_heuristics::{is_boilerplate, TextHeuristicParser};
use crate::engines::traits::PageSnapshot;
use crate::utils::text::{char_len, element_text, squash_inline};
use crate::utils::url_utils::absolutize;
use scraper::{ElementRef, Html};
use std::collections::HashSet;
use tracing::debug;

/// 单次搜索最多返回的候选职位数
pub const MAX_LISTING_STUBS: usize = 10;

/// 占位职位附带的提示
pub const LIMITED_EXTRACTION_ADVISORY: &str =
    "Limited job data extracted. The website structure may have changed.";

/// 卡片内通过 ID 属性拼接详情链接（例如 `data-jk`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdLink {
    pub attribute: &'static str,
    pub url_prefix: &'static str,
}

/// 卡片链接的查找方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub selectors: &'static [&'static str],
    pub id_link: Option<IdLink>,
}

/// 某个招聘网站的列表页选择器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingProfile {
    pub board_name: &'static str,
    /// 职位卡片选择器，按顺序尝试，第一个命中的选择器生效
    pub card_selectors: &'static [&'static str],
    pub title: FieldCascade,
    pub company: Option<FieldCascade>,
    pub location: FieldCascade,
    pub snippet: Option<FieldCascade>,
    pub card_link: CardLink,
    /// 通用链接扫描时 href 需要包含的子串之一
    pub link_markers: &'static [&'static str],
    /// 文本启发式路径下缺省的地点
    pub text_location: &'static str,
}

/// 产出候选职位的策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingPass {
    Cards,
    Links,
    Text,
    Placeholder,
}

/// 列表页提取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingExtraction {
    pub stubs: Vec<JobStub>,
    pub pass: ListingPass,
    /// 非致命提示，只在占位路径下出现
    pub advisory: Option<String>,
}

/// 列表页提取器
#[derive(Debug, Clone, Copy)]
pub struct ListingExtractor<'a> {
    profile: &'a ListingProfile,
}

impl<'a> ListingExtractor<'a> {
    pub fn new(profile: &'a ListingProfile) -> Self {
        Self { profile }
    }

    /// 提取候选职位，数量不超过 `min(limit, MAX_LISTING_STUBS)`
    pub fn extract(&self, page: &PageSnapshot, role: &str, limit: usize) -> ListingExtraction {
        let limit = limit.min(MAX_LISTING_STUBS);
        let document = page.document();

        let stubs = self.card_pass(&document, &page.url, limit);
        if !stubs.is_empty() {
            return self.finish(stubs, ListingPass::Cards);
        }

        let stubs = self.link_pass(&document, &page.url, limit);
        if !stubs.is_empty() {
            return self.finish(stubs, ListingPass::Links);
        }

        let stubs = self.text_pass(&page.text, &page.url, role, limit);
        if !stubs.is_empty() {
            return self.finish(stubs, ListingPass::Text);
        }

        debug!(
            "No listings recognised on {} for role {:?}, using placeholder",
            self.profile.board_name, role
        );
        ListingExtraction {
            stubs: vec![self.placeholder(role, &page.url)],
            pass: ListingPass::Placeholder,
            advisory: Some(LIMITED_EXTRACTION_ADVISORY.to_string()),
        }
    }

    fn finish(&self, stubs: Vec<JobStub>, pass: ListingPass) -> ListingExtraction {
        debug!(
            "Extracted {} listings from {} via {:?} pass",
            stubs.len(),
            self.profile.board_name,
            pass
        );
        ListingExtraction {
            stubs,
            pass,
            advisory: None,
        }
    }

    fn card_pass(&self, document: &Html, page_url: &str, limit: usize) -> Vec<JobStub> {
        for raw in self.profile.card_selectors {
            let Some(selector) = parse_selector(raw) else {
                continue;
            };
            let mut collector = StubCollector::new(limit);
            for card in document.select(&selector) {
                if collector.is_full() {
                    break;
                }
                if let Some(stub) = self.card_stub(card, page_url) {
                    collector.push(stub);
                }
            }
            if !collector.is_empty() {
                return collector.into_stubs();
            }
        }
        Vec::new()
    }

    fn card_stub(&self, card: ElementRef<'_>, page_url: &str) -> Option<JobStub> {
        let title = self.profile.title.first_match_in(card)?;
        if is_boilerplate(&title) {
            return None;
        }
        let url = self
            .card_link(card, page_url)
            .unwrap_or_else(|| page_url.to_string());

        let mut stub = JobStub::new(title, url);
        stub.company = self
            .profile
            .company
            .as_ref()
            .and_then(|cascade| cascade.first_match_in(card));
        stub.location = self.profile.location.first_match_in(card);
        stub.snippet = self
            .profile
            .snippet
            .as_ref()
            .and_then(|cascade| cascade.first_match_in(card));
        Some(stub)
    }

    fn card_link(&self, card: ElementRef<'_>, page_url: &str) -> Option<String> {
        let link = &self.profile.card_link;
        if let Some(id_link) = link.id_link {
            let id = card.value().attr(id_link.attribute).or_else(|| {
                let selector = parse_selector(&format!("[{}]", id_link.attribute))?;
                card.select(&selector)
                    .next()
                    .and_then(|el| el.value().attr(id_link.attribute))
            });
            if let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) {
                return Some(format!("{}{}", id_link.url_prefix, id));
            }
        }
        link.selectors.iter().find_map(|raw| {
            let selector = parse_selector(raw)?;
            card.select(&selector)
                .filter_map(|anchor| anchor.value().attr("href"))
                .find_map(|href| absolutize(page_url, href))
        })
    }

    fn link_pass(&self, document: &Html, page_url: &str, limit: usize) -> Vec<JobStub> {
        let Some(anchors) = parse_selector("a[href]") else {
            return Vec::new();
        };
        let mut collector = StubCollector::new(limit);
        for anchor in document.select(&anchors) {
            if collector.is_full() {
                break;
            }
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            if !self.profile.link_markers.iter().any(|m| href.contains(m)) {
                continue;
            }
            let text = squash_inline(&element_text(anchor));
            if !(10..200).contains(&char_len(&text)) || is_boilerplate(&text) {
                continue;
            }
            if let Some(url) = absolutize(page_url, href) {
                collector.push(JobStub::new(text, url));
            }
        }
        collector.into_stubs()
    }

    fn text_pass(&self, text: &str, page_url: &str, role: &str, limit: usize) -> Vec<JobStub> {
        let mut collector = StubCollector::new(limit);
        for parsed in TextHeuristicParser::new(role, limit).parse(text) {
            let description = parsed.description.unwrap_or_else(|| {
                format!(
                    "Job opportunity for {} role. Please apply to learn more about the specific requirements and responsibilities.",
                    parsed.title
                )
            });
            let mut stub = JobStub::new(parsed.title, page_url);
            stub.location = Some(
                parsed
                    .location
                    .unwrap_or_else(|| self.profile.text_location.to_string()),
            );
            stub.description = Some(description);
            collector.push(stub);
        }
        collector.into_stubs()
    }

    fn placeholder(&self, role: &str, page_url: &str) -> JobStub {
        let role = squash_inline(role);
        let board = self.profile.board_name;
        let mut stub = JobStub::new(format!("{} Position", role), page_url);
        stub.description = Some(format!(
            "This is a {} position at {}. The crawler was unable to extract detailed job information from the page. The page may have updated its structure. Please visit the {} job board directly for full details.",
            role, board, board
        ));
        stub
    }
}

/// 去重并限制数量
struct StubCollector {
    limit: usize,
    seen: HashSet<(String, String)>,
    stubs: Vec<JobStub>,
}

impl StubCollector {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            seen: HashSet::new(),
            stubs: Vec::new(),
        }
    }

    fn push(&mut self, stub: JobStub) {
        if self.is_full() {
            return;
        }
        if self.seen.insert((stub.title.clone(), stub.url.clone())) {
            self.stubs.push(stub);
        }
    }

    fn is_full(&self) -> bool {
        self.stubs.len() >= self.limit
    }

    fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }

    fn into_stubs(self) -> Vec<JobStub> {
        self.stubs
    }
}
