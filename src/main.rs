mod config;
mod github;
mod http;
mod logger;
mod projects;

use anyhow::{Context, Result};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    logger::init()?;

    log::info!("Starting");
    let config = Config::load();

    if config.token.is_none() {
        log::warn!("GITHUB_TOKEN not set, unauthenticated calls hit stricter rate limits");
    }

    let issues = github::fetch_approved_issues(&config)
        .await
        .context("Cannot fetch project issues")?;

    let projects = if issues.is_empty() {
        log::info!("No approved projects found");
        log::info!(
            "Label issues with '{}' to publish them",
            config.approval_labels.join("' or '")
        );
        Vec::new()
    } else {
        log::info!("Parsing project data");
        let projects = projects::extract_all(&issues);
        if projects.is_empty() {
            log::warn!("No valid projects found");
        }
        projects
    };

    projects::save_projects(&config.output_file, &projects)
        .context("Cannot write the projects file")?;

    log::info!("Generation complete");
    Ok(())
}
