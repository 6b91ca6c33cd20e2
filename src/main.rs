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

use jobcrawl::config::settings::Settings;
use jobcrawl::domain::services::crawl_service::JobCrawler;
use jobcrawl::engines::chromium_engine::ChromiumLauncher;
use jobcrawl::engines::pacing::JitteredDelay;
use jobcrawl::infrastructure::boards::default_catalog;
use jobcrawl::presentation::routes;
use jobcrawl::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize telemetry
    telemetry::init_telemetry();
    info!("Starting jobcrawl...");

    let settings = Settings::new()?;
    info!("Configuration loaded");

    let launcher = Arc::new(ChromiumLauncher::new(settings.browser.clone()));
    let catalog = default_catalog();
    info!("Job boards available: {:?}", catalog.boards());

    let crawler = Arc::new(JobCrawler::new(
        launcher,
        Arc::new(JitteredDelay),
        catalog,
        &settings,
    ));

    let app = routes::routes(crawler);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
