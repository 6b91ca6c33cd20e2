// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{crawler, crawler_with, html_page, text_page, FakeLauncher, Script};
use jobcrawl::config::settings::Settings;
use jobcrawl::domain::models::job::JobBoard;
use jobcrawl::engines::pacing::RecordingDelay;
use jobcrawl::engines::traits::BrowserProfile;
use std::sync::Arc;

const AWIGN_ANALYST: &str =
    "https://www.awignexpert.com/jobs/explore?page=1&jobTitle=data%20analyst";
const INDEED_NURSE: &str = "https://www.indeed.com/jobs?q=nurse&l=&sort=date";

const ANALYST_DUTIES: &str = "Clean survey datasets, build weekly dashboards in Google Sheets and share findings with the operations team every Friday.";
const SENIOR_DUTIES: &str = "Own the reporting layer for client projects, review SQL written by interns and present quarterly insights to stakeholders.";

fn awign_cards() -> &'static str {
    r#"<html><body><section>
        <div class="job-card">
          <h3>Data Analyst Intern</h3>
          <span class="job-location">Bengaluru</span>
          <a href="/jobs/data-analyst-intern-1">Apply</a>
        </div>
        <div class="job-card">
          <h3>Senior Data Analyst</h3>
          <span class="job-location">Remote</span>
          <a href="/jobs/senior-data-analyst-2">Apply</a>
        </div>
    </section></body></html>"#
}

fn awign_detail(description: &str) -> String {
    format!(
        r#"<html><body><div class="job-description">{}</div></body></html>"#,
        description
    )
}

fn indeed_card(jk: &str, title: &str, snippet: Option<&str>) -> String {
    let snippet = snippet
        .map(|s| format!(r#"<div class="job-snippet">{}</div>"#, s))
        .unwrap_or_default();
    format!(
        r#"<li><div class="job_seen_beacon">
             <h2 class="jobTitle"><a data-jk="{jk}" href="/rc/clk?jk={jk}"><span>{title}</span></a></h2>
             <span data-testid="company-name">Nomad Health</span>
             <div data-testid="text-location">Denver, CO</div>
             {snippet}
           </div></li>"#
    )
}

fn indeed_listing(cards: &[String]) -> String {
    format!(
        r#"<html><body><ul class="jobsearch-ResultsList">{}</ul></body></html>"#,
        cards.concat()
    )
}

#[tokio::test]
async fn test_awign_cards_are_enriched_from_detail_pages() {
    let delay = Arc::new(RecordingDelay::new());
    let launcher = FakeLauncher::new(vec![
        (AWIGN_ANALYST, html_page(AWIGN_ANALYST, awign_cards())),
        (
            "https://www.awignexpert.com/jobs/data-analyst-intern-1",
            html_page(
                "https://www.awignexpert.com/jobs/data-analyst-intern-1",
                &awign_detail(ANALYST_DUTIES),
            ),
        ),
        (
            "https://www.awignexpert.com/jobs/senior-data-analyst-2",
            html_page(
                "https://www.awignexpert.com/jobs/senior-data-analyst-2",
                &awign_detail(SENIOR_DUTIES),
            ),
        ),
    ]);
    let (crawler, log) = crawler_with(launcher, delay.clone());

    let result = crawler.search("data analyst", JobBoard::Awign, None).await;

    assert_eq!(result.error, None);
    assert_eq!(result.jobs.len(), 2);
    let first = &result.jobs[0];
    assert_eq!(first.title, "Data Analyst Intern");
    assert_eq!(first.company, "Awign");
    assert_eq!(first.location, "Bengaluru");
    assert_eq!(first.description, ANALYST_DUTIES);
    assert_eq!(first.url, "https://www.awignexpert.com/jobs/data-analyst-intern-1");
    assert_eq!(first.source, JobBoard::Awign);
    assert!(first.id.starts_with("job-"));
    assert_eq!(result.jobs[1].description, SENIOR_DUTIES);
    assert_ne!(first.id, result.jobs[1].id);

    let navigation = Settings::default().navigation;
    assert_eq!(
        delay.recorded(),
        vec![
            navigation.listing_settle,
            navigation.detail_settle,
            navigation.inter_request,
            navigation.detail_settle,
        ]
    );
    assert_eq!(log.visits().len(), 3);
    assert_eq!(log.profiles(), vec![BrowserProfile::Default]);
    assert_eq!(log.launches(), 1);
    assert_eq!(log.closes(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_listing_timeout_fails_and_releases_session() {
    let (crawler, log) = crawler(FakeLauncher::new(vec![(AWIGN_ANALYST, Script::Hang)]));

    let result = crawler.search("data analyst", JobBoard::Awign, None).await;

    assert!(result.jobs.is_empty());
    let error = result.error.unwrap();
    assert!(error.contains("timed out after 30000ms"), "{}", error);
    assert_eq!(log.launches(), 1);
    assert_eq!(log.closes(), 1);
}

#[tokio::test]
async fn test_panic_during_search_is_reported_and_session_closed() {
    let (crawler, log) = crawler(FakeLauncher::new(vec![(AWIGN_ANALYST, Script::Panic)]));

    let result = crawler.search("data analyst", JobBoard::Awign, None).await;

    assert!(result.jobs.is_empty());
    let error = result.error.unwrap();
    assert!(error.starts_with("Internal error: renderer crashed"), "{}", error);
    assert_eq!(log.closes(), 1);
}

#[tokio::test]
async fn test_launch_failure_is_fatal() {
    let (crawler, log) = crawler(FakeLauncher::failing());

    let result = crawler.search("nurse", JobBoard::Indeed, None).await;

    assert!(result.is_fatal());
    assert_eq!(
        result.error.as_deref(),
        Some("Failed to launch browser: No usable sandbox available")
    );
    assert_eq!(log.launches(), 1);
    assert_eq!(log.closes(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_detail_timeout_degrades_to_snippet() {
    let listing = indeed_listing(&[
        indeed_card("aaa111", "Travel Nurse", Some("Thirteen week ICU contract.")),
        indeed_card("bbb222", "Night Shift Nurse", Some("Med-surg floor, three nights a week.")),
    ]);
    let launcher = FakeLauncher::new(vec![
        (INDEED_NURSE, html_page(INDEED_NURSE, &listing)),
        (
            "https://www.indeed.com/viewjob?jk=aaa111",
            html_page(
                "https://www.indeed.com/viewjob?jk=aaa111",
                r#"<html><body><div id="jobDescriptionText">Provide bedside care in a 24-bed ICU and precept new graduates.</div></body></html>"#,
            ),
        ),
        ("https://www.indeed.com/viewjob?jk=bbb222", Script::Hang),
    ]);
    let (crawler, log) = crawler(launcher);

    let result = crawler.search("nurse", JobBoard::Indeed, None).await;

    assert_eq!(result.jobs.len(), 2);
    assert_eq!(
        result.jobs[0].description,
        "Provide bedside care in a 24-bed ICU and precept new graduates."
    );
    assert_eq!(result.jobs[1].description, "Med-surg floor, three nights a week.");
    assert_eq!(result.jobs[1].company, "Nomad Health");
    assert_eq!(result.jobs[1].url, "https://www.indeed.com/viewjob?jk=bbb222");
    assert!(result.jobs.iter().all(|job| job.source == JobBoard::Indeed));
    assert_eq!(
        result.warning(),
        Some("Could not fetch full descriptions for 1 of 2 jobs; listing snippets were used instead.")
    );
    assert_eq!(log.profiles(), vec![BrowserProfile::Stealth]);
    assert_eq!(log.closes(), 1);
}

#[tokio::test]
async fn test_blocked_detail_page_uses_summary_line() {
    let listing = indeed_listing(&[indeed_card("ccc333", "Travel Nurse", None)]);
    let launcher = FakeLauncher::new(vec![
        (INDEED_NURSE, html_page(INDEED_NURSE, &listing)),
        (
            "https://www.indeed.com/viewjob?jk=ccc333",
            text_page(
                "https://www.indeed.com/viewjob?jk=ccc333",
                "<html><body></body></html>",
                "Please verify you are a human",
            ),
        ),
    ]);
    let (crawler, _log) = crawler(launcher);

    let result = crawler.search("nurse", JobBoard::Indeed, None).await;

    assert_eq!(result.error, None);
    assert_eq!(result.jobs.len(), 1);
    assert_eq!(
        result.jobs[0].description,
        "Travel Nurse at Nomad Health. Visit Indeed for full details."
    );
}

#[tokio::test]
async fn test_bot_protection_on_listing_is_fatal() {
    let challenge = r#"<html><head><title>Just a moment...</title>
        <script src="/cdn-cgi/challenge-platform/h/b/orchestrate/jsch/v1"></script></head>
        <body><div class="job-card"><h3>Data Analyst Intern</h3></div></body></html>"#;
    let (crawler, log) = crawler(FakeLauncher::new(vec![(
        AWIGN_ANALYST,
        html_page(AWIGN_ANALYST, challenge),
    )]));

    let result = crawler.search("data analyst", JobBoard::Awign, None).await;

    assert!(result.jobs.is_empty());
    assert_eq!(
        result.error.as_deref(),
        Some("Bot protection detected on Awign Expert. Please paste the job description manually.")
    );
    assert_eq!(log.visits(), vec![AWIGN_ANALYST.to_string()]);
    assert_eq!(log.closes(), 1);
}

#[tokio::test]
async fn test_unrecognised_listing_yields_placeholder() {
    let url = "https://www.awignexpert.com/jobs/explore?page=1&jobTitle=quantum%20baker";
    let (crawler, log) = crawler(FakeLauncher::new(vec![(
        url,
        html_page(url, "<html><body><p>No results</p></body></html>"),
    )]));

    let result = crawler.search("quantum baker", JobBoard::Awign, None).await;

    assert_eq!(result.jobs.len(), 1);
    let job = &result.jobs[0];
    assert_eq!(job.title, "quantum baker Position");
    assert_eq!(job.company, "Awign");
    assert_eq!(job.location, "Remote/India");
    assert_eq!(job.url, url);
    assert!(job
        .description
        .starts_with("This is a quantum baker position at Awign Expert."));
    assert_eq!(
        result.warning(),
        Some("Limited job data extracted. The website structure may have changed.")
    );
    assert_eq!(log.visits().len(), 1);
}

#[tokio::test]
async fn test_text_fallback_builds_jobs_without_detail_visits() {
    let url = "https://www.awignexpert.com/jobs/explore?page=1&jobTitle=software%20engineer";
    let text = "Senior Software Engineer\nBangalore, India\nWe are looking for a backend engineer with 5 years experience...";
    let (crawler, log) = crawler(FakeLauncher::new(vec![(
        url,
        text_page(url, "<html><body><div>rendered by script</div></body></html>", text),
    )]));

    let result = crawler.search("software engineer", JobBoard::Awign, None).await;

    assert_eq!(result.error, None);
    assert_eq!(result.jobs.len(), 1);
    let job = &result.jobs[0];
    assert_eq!(job.title, "Senior Software Engineer");
    assert_eq!(job.location, "Bangalore, India");
    assert_eq!(
        job.description,
        "We are looking for a backend engineer with 5 years experience..."
    );
    assert_eq!(job.url, url);
    assert_eq!(log.visits().len(), 1);
}

#[tokio::test]
async fn test_results_are_capped_and_external_links_not_visited() {
    let url = "https://www.awignexpert.com/jobs/explore?page=1&jobTitle=sales";
    let cards = (1..=12)
        .map(|i| {
            format!(
                r#"<div class="job-card"><h3>Field Sales Associate {:02}</h3><a href="https://forms.example.org/job-{}">Apply</a></div>"#,
                i, i
            )
        })
        .collect::<String>();
    let html = format!("<html><body>{}</body></html>", cards);
    let (crawler, log) = crawler(FakeLauncher::new(vec![(url, html_page(url, &html))]));

    let result = crawler.search("sales", JobBoard::Awign, None).await;

    assert_eq!(result.jobs.len(), 10);
    assert_eq!(result.jobs[0].title, "Field Sales Associate 01");
    assert_eq!(result.jobs[9].title, "Field Sales Associate 10");
    assert!(result
        .jobs
        .iter()
        .all(|job| job.description == "Job description not available - external link."));
    assert_eq!(log.visits().len(), 1);
}

#[tokio::test]
async fn test_invalid_requests_never_launch_a_browser() {
    let (crawler, log) = crawler(FakeLauncher::new(Vec::new()));

    let blank = crawler.search("   ", JobBoard::Awign, None).await;
    assert_eq!(blank.error.as_deref(), Some("Job role is required"));
    assert!(blank.jobs.is_empty());

    let manual = crawler.search("nurse", JobBoard::Manual, None).await;
    assert_eq!(manual.error.as_deref(), Some("Unsupported job board: manual"));

    assert_eq!(log.launches(), 0);
}
