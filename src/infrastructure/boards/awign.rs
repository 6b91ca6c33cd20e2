// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::boards::JobBoardSource;
use crate::domain::models::job::JobBoard;
use crate::domain::services::detail_extractor::{DescriptionFallback, DetailProfile};
use crate::domain::services::listing_extractor::{CardLink, ListingProfile};
use crate::domain::services::selector_cascade::{FieldCascade, LengthGate};
use crate::engines::traits::BrowserProfile;
use crate::engines::validators::validate_job_role;
use crate::utils::errors::CrawlError;

const LISTING_BASE: &str = "https://www.awignexpert.com/jobs/explore";
const HOST: &str = "awignexpert.com";
const DESCRIPTION_CAP: usize = 5000;
const BODY_TEXT_CAP: usize = 3000;

const CARD_SELECTORS: &[&str] = &[r#"[class*="job"], [class*="card"], [class*="listing"]"#];
const TITLE_SELECTORS: &[&str] = &[r#"h2, h3, h4, [class*="title"], [class*="name"]"#];
const LOCATION_SELECTORS: &[&str] = &[r#"[class*="location"], [class*="place"]"#];
const LINK_SELECTORS: &[&str] = &["a[href*='job']"];

const DESCRIPTION_SELECTORS: &[&str] = &[
    r#"[class*="description"]"#,
    r#"[class*="content"]"#,
    r#"[class*="detail"]"#,
    r#"[class*="job-info"]"#,
    "article",
    "main",
    ".prose",
];

/// Awign Expert
///
/// 页面由前端动态渲染，卡片类名不稳定，因此选择器都是属性子串匹配。
/// 搜索不支持地点参数。
#[derive(Debug, Clone)]
pub struct AwignSource {
    listing: ListingProfile,
    detail: DetailProfile,
}

impl AwignSource {
    pub fn new() -> Self {
        Self {
            listing: ListingProfile {
                board_name: JobBoard::Awign.display_name(),
                card_selectors: CARD_SELECTORS,
                title: FieldCascade::new("title", TITLE_SELECTORS, LengthGate::longer_than(3)),
                company: None,
                location: FieldCascade::new("location", LOCATION_SELECTORS, LengthGate::longer_than(0)),
                snippet: None,
                card_link: CardLink {
                    selectors: LINK_SELECTORS,
                    id_link: None,
                },
                link_markers: &["job", "explore"],
                text_location: "India",
            },
            detail: DetailProfile::description_only(
                FieldCascade::new("description", DESCRIPTION_SELECTORS, LengthGate::longer_than(100))
                    .block(DESCRIPTION_CAP),
                vec![DescriptionFallback::BodyText {
                    longer_than: 0,
                    cap: BODY_TEXT_CAP,
                }],
            ),
        }
    }
}

impl Default for AwignSource {
    fn default() -> Self {
        Self::new()
    }
}

impl JobBoardSource for AwignSource {
    fn board(&self) -> JobBoard {
        JobBoard::Awign
    }

    fn browser_profile(&self) -> BrowserProfile {
        BrowserProfile::Default
    }

    fn listing_url(&self, role: &str, _location: Option<&str>) -> Result<String, CrawlError> {
        let role = validate_job_role(role)?;
        Ok(format!(
            "{}?page=1&jobTitle={}",
            LISTING_BASE,
            urlencoding::encode(role)
        ))
    }

    fn listing_profile(&self) -> &ListingProfile {
        &self.listing
    }

    fn detail_profile(&self) -> &DetailProfile {
        &self.detail
    }

    fn host(&self) -> &'static str {
        HOST
    }

    fn description_cap(&self) -> usize {
        DESCRIPTION_CAP
    }
}
