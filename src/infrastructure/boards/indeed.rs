// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::boards::JobBoardSource;
use crate::domain::models::job::JobBoard;
use crate::domain::services::detail_extractor::{DescriptionFallback, DetailProfile};
use crate::domain::services::listing_extractor::{CardLink, IdLink, ListingProfile};
use crate::domain::services::selector_cascade::{FieldCascade, LengthGate};
use crate::engines::traits::BrowserProfile;
use crate::engines::validators::validate_job_role;
use crate::utils::errors::CrawlError;

const LISTING_BASE: &str = "https://www.indeed.com/jobs";
const VIEW_JOB_PREFIX: &str = "https://www.indeed.com/viewjob?jk=";
const HOST: &str = "indeed.com";
const DESCRIPTION_CAP: usize = 5000;
const CONTAINER_CAP: usize = 3000;

const CARD_SELECTORS: &[&str] = &[
    r#".job_seen_beacon, .jobsearch-ResultsList > li, [data-testid="job-card"], .result, .tapItem"#,
];
// 优先取标题链接文本，其次才是标题容器
const TITLE_SELECTORS: &[&str] = &[
    r#"h2.jobTitle a, [data-testid="job-title"] a, .jobTitle a, h2 a, a[data-jk]"#,
    "h2.jobTitle, .jobTitle, h2",
];
const COMPANY_SELECTORS: &[&str] = &[
    r#"[data-testid="company-name"], .companyName, .company, [class*="company"], span[class*="companyName"]"#,
];
const LOCATION_SELECTORS: &[&str] = &[
    r#"[data-testid="text-location"], .companyLocation, [class*="location"], div[class*="companyLocation"]"#,
];
const SNIPPET_SELECTORS: &[&str] =
    &[r#".job-snippet, [class*="snippet"], .summary, [class*="description"], ul[style]"#];
const LINK_SELECTORS: &[&str] =
    &[r#"a[data-jk], a[href*="/rc/clk"], a[href*="viewjob"], h2 a, .jobTitle a"#];

const DESCRIPTION_SELECTORS: &[&str] = &[
    "#jobDescriptionText",
    r#"[data-testid="job-description"]"#,
    ".jobsearch-jobDescriptionText",
    r#"[class*="jobDescription"]"#,
    ".job-description",
    "#jobDescription",
    r#"div[id="jobDescriptionText"]"#,
];
const CONTAINER_SELECTORS: &[&str] = &["main, article, .jobsearch-ViewJobLayout"];

/// Indeed
///
/// 反爬较严格，使用隐身浏览器配置；卡片上的摘要在详情页失败时作为描述兜底。
#[derive(Debug, Clone)]
pub struct IndeedSource {
    listing: ListingProfile,
    detail: DetailProfile,
}

impl IndeedSource {
    pub fn new() -> Self {
        Self {
            listing: ListingProfile {
                board_name: JobBoard::Indeed.display_name(),
                card_selectors: CARD_SELECTORS,
                title: FieldCascade::new("title", TITLE_SELECTORS, LengthGate::longer_than(3)),
                company: Some(FieldCascade::new(
                    "company",
                    COMPANY_SELECTORS,
                    LengthGate::longer_than(0),
                )),
                location: FieldCascade::new("location", LOCATION_SELECTORS, LengthGate::longer_than(0)),
                snippet: Some(FieldCascade::new(
                    "snippet",
                    SNIPPET_SELECTORS,
                    LengthGate::longer_than(0),
                )),
                card_link: CardLink {
                    selectors: LINK_SELECTORS,
                    id_link: Some(IdLink {
                        attribute: "data-jk",
                        url_prefix: VIEW_JOB_PREFIX,
                    }),
                },
                link_markers: &["viewjob", "/rc/clk", "jk="],
                text_location: "Location not specified",
            },
            detail: DetailProfile::description_only(
                FieldCascade::new("description", DESCRIPTION_SELECTORS, LengthGate::longer_than(50))
                    .block(DESCRIPTION_CAP),
                vec![DescriptionFallback::Containers(
                    FieldCascade::new("container", CONTAINER_SELECTORS, LengthGate::longer_than(100))
                        .block(CONTAINER_CAP),
                )],
            ),
        }
    }
}

impl Default for IndeedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl JobBoardSource for IndeedSource {
    fn board(&self) -> JobBoard {
        JobBoard::Indeed
    }

    fn browser_profile(&self) -> BrowserProfile {
        BrowserProfile::Stealth
    }

    fn listing_url(&self, role: &str, location: Option<&str>) -> Result<String, CrawlError> {
        let role = validate_job_role(role)?;
        let location = location.map(str::trim).unwrap_or_default();
        let query = serde_urlencoded::to_string(&[("q", role), ("l", location), ("sort", "date")][..])
            .map_err(|e| CrawlError::MalformedInput(e.to_string()))?;
        Ok(format!("{}?{}", LISTING_BASE, query))
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
