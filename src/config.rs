use std::{env, path::PathBuf};

const DEFAULT_REPOSITORY: &str = "Brainhack-Marseille/brainhack-marseille.github.io";
const DEFAULT_API_URL: &str = "https://api.github.com";

const OUTPUT_FILE: &str = "assets/data/projects_2026.json";
const APPROVAL_LABELS: [&str; 1] = ["project:approved"];

/// Runtime configuration, read once from the environment.
pub struct Config {
    pub repository: String,
    pub token: Option<String>,
    pub api_url: String,
    pub approval_labels: Vec<String>,
    pub output_file: PathBuf,
}

impl Config {
    pub fn load() -> Config {
        Config {
            repository: env::var("GITHUB_REPOSITORY")
                .unwrap_or_else(|_| DEFAULT_REPOSITORY.to_owned()),
            token: env::var("GITHUB_TOKEN").ok().filter(|token| !token.is_empty()),
            api_url: env::var("GITHUB_API_URL")
                .map(|url| url.trim_end_matches('/').to_owned())
                .unwrap_or_else(|_| DEFAULT_API_URL.to_owned()),
            approval_labels: APPROVAL_LABELS.iter().map(|label| label.to_string()).collect(),
            output_file: PathBuf::from(OUTPUT_FILE),
        }
    }
}
