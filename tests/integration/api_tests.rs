// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{crawler, html_page, FakeLauncher};
use axum::http::StatusCode;
use axum_test::TestServer;
use jobcrawl::presentation::routes;
use serde_json::{json, Value};
use std::sync::Arc;

const JOB_URL: &str = "https://careers.example.com/jobs/42";

fn server(launcher: FakeLauncher) -> TestServer {
    let (crawler, _log) = crawler(launcher);
    TestServer::new(routes::routes(Arc::new(crawler))).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = server(FakeLauncher::new(Vec::new()));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_crawl_requires_role() {
    let server = server(FakeLauncher::new(Vec::new()));

    let response = server
        .post("/api/crawl")
        .json(&json!({ "jobRole": "  ", "jobBoard": "indeed" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Job role is required", "jobs": [] })
    );
}

#[tokio::test]
async fn test_crawl_non_string_role_is_bad_request() {
    let server = server(FakeLauncher::new(Vec::new()));

    let response = server
        .post("/api/crawl")
        .json(&json!({ "jobRole": 7 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Job role is required", "jobs": [] })
    );

    let response = server.post("/api/crawl").text("jobRole=analyst").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Job role is required");
}

#[tokio::test]
async fn test_crawl_returns_jobs_with_warning() {
    let url = "https://www.awignexpert.com/jobs/explore?page=1&jobTitle=quantum%20baker";
    let server = server(FakeLauncher::new(vec![(
        url,
        html_page(url, "<html><body><p>No results</p></body></html>"),
    )]));

    let response = server
        .post("/api/crawl")
        .json(&json!({ "jobRole": "quantum baker", "jobBoard": "monster" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["jobs"][0]["title"], "quantum baker Position");
    assert_eq!(body["jobs"][0]["source"], "awign");
    assert_eq!(
        body["warning"],
        "Limited job data extracted. The website structure may have changed."
    );
}

#[tokio::test]
async fn test_crawl_failure_is_server_error() {
    let server = server(FakeLauncher::failing());

    let response = server
        .post("/api/crawl")
        .json(&json!({ "jobRole": "nurse", "jobBoard": "indeed" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(
        body["error"],
        "Failed to launch browser: No usable sandbox available"
    );
    assert_eq!(body["jobs"], json!([]));
}

#[tokio::test]
async fn test_fetch_job_rejects_bad_urls() {
    let server = server(FakeLauncher::new(Vec::new()));

    let response = server.post("/api/fetch-job").json(&json!({})).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Job URL is required", "blocked": false })
    );

    let response = server
        .post("/api/fetch-job")
        .json(&json!({ "jobUrl": 42 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Job URL is required", "blocked": false })
    );

    let response = server
        .post("/api/fetch-job")
        .json(&json!({ "jobUrl": "not a url" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Invalid URL format", "blocked": false })
    );

    let response = server
        .post("/api/fetch-job")
        .json(&json!({ "jobUrl": "http://localhost:8080/jobs/1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "localhost is not allowed");
}

#[tokio::test]
async fn test_fetch_job_blocked_page_is_forbidden() {
    let server = server(FakeLauncher::new(vec![(
        JOB_URL,
        html_page(
            JOB_URL,
            r#"<html><head><title>Robot Check</title></head><body>Sorry</body></html>"#,
        ),
    )]));

    let response = server
        .post("/api/fetch-job")
        .json(&json!({ "jobUrl": JOB_URL }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body = response.json::<Value>();
    assert_eq!(body["blocked"], true);
    assert_eq!(body["canManualPaste"], true);
    assert_eq!(body["blockReason"]["cause"], "botChallenge");
    assert_eq!(body["blockReason"]["marker"], "<title>Robot Check</title>");
}

#[tokio::test]
async fn test_fetch_job_success() {
    let description = "Plan delivery routes for the Pune hub, track driver attendance and resolve customer escalations within the same day.";
    let html = format!(
        r#"<html><body><h1>Logistics Coordinator</h1><article>{}</article></body></html>"#,
        description
    );
    let server = server(FakeLauncher::new(vec![(JOB_URL, html_page(JOB_URL, &html))]));

    let response = server
        .post("/api/fetch-job")
        .json(&json!({ "jobUrl": JOB_URL }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["job"]["title"], "Logistics Coordinator");
    assert_eq!(body["job"]["description"], description);
    assert_eq!(body["job"]["source"], "manual");
}

#[tokio::test]
async fn test_manual_job_entry() {
    let server = server(FakeLauncher::new(Vec::new()));

    let response = server
        .post("/api/manual-job")
        .json(&json!({
            "title": "  Customer Support Associate ",
            "company": "Zomato",
            "description": "Handle inbound chats and emails for restaurant partners."
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["job"]["title"], "Customer Support Associate");
    assert_eq!(body["job"]["company"], "Zomato");
    assert_eq!(body["job"]["source"], "manual");

    let response = server
        .post("/api/manual-job")
        .json(&json!({ "title": 12, "description": "Handle inbound chats and emails." }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());

    let response = server
        .post("/api/manual-job")
        .json(&json!({ "title": "Analyst", "description": "Too short" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.contains("at least 20 characters"), "{}", error);
}
