// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 任意职位页面的通用详情配置

use crate::domain::models::manual_entry::MANUAL_DESCRIPTION_CAP;
use crate::domain::services::detail_extractor::{DescriptionFallback, DetailProfile};
use crate::domain::services::selector_cascade::{FieldCascade, LengthGate};

const BODY_TEXT_CAP: usize = 5000;
const BODY_TEXT_MIN: usize = 200;

const TITLE_SELECTORS: &[&str] = &[
    "h1",
    r#"[data-testid="job-title"]"#,
    ".job-title",
    ".jobTitle",
    r#"[class*="JobTitle"]"#,
    r#"[class*="job-title"]"#,
    r#"h2[class*="title"]"#,
];
const COMPANY_SELECTORS: &[&str] = &[
    r#"[data-testid="company-name"]"#,
    ".company-name",
    ".companyName",
    r#"[class*="company"]"#,
    r#"[class*="Company"]"#,
    r#"a[href*="company"]"#,
];
const LOCATION_SELECTORS: &[&str] = &[
    r#"[data-testid="location"]"#,
    r#"[data-testid="text-location"]"#,
    ".location",
    ".companyLocation",
    r#"[class*="location"]"#,
    r#"[class*="Location"]"#,
];
const DESCRIPTION_SELECTORS: &[&str] = &[
    "#jobDescriptionText",
    r#"[data-testid="job-description"]"#,
    ".job-description",
    ".jobDescription",
    r#"[class*="description"]"#,
    r#"[class*="Description"]"#,
    "article",
    "main",
    ".content",
    "#content",
];

/// 通用详情页配置：四个字段都尝试提取，描述最后退化为正文文本
pub fn single_page_profile() -> DetailProfile {
    DetailProfile {
        title: Some(FieldCascade::new("title", TITLE_SELECTORS, LengthGate::between(3, 200))),
        company: Some(FieldCascade::new(
            "company",
            COMPANY_SELECTORS,
            LengthGate::between(1, 100),
        )),
        location: Some(FieldCascade::new(
            "location",
            LOCATION_SELECTORS,
            LengthGate::between(2, 150),
        )),
        description: FieldCascade::new("description", DESCRIPTION_SELECTORS, LengthGate::longer_than(100))
            .block(MANUAL_DESCRIPTION_CAP),
        fallbacks: vec![DescriptionFallback::BodyText {
            longer_than: BODY_TEXT_MIN,
            cap: BODY_TEXT_CAP,
        }],
    }
}
