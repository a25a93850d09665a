use crate::{config::Config, get, http};
use serde_json::Value;

const PER_PAGE: u32 = 100;

pub struct GithubClient {
    api_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(config: &Config) -> GithubClient {
        GithubClient {
            api_url: config.api_url.to_owned(),
            token: config.token.to_owned(),
        }
    }

    /// Fetch every issue carrying `label`, open and closed, in one full page.
    ///
    /// Items come back as raw JSON objects so one malformed issue cannot
    /// poison the whole batch; typed decoding happens per item later.
    pub async fn issues_with_label(
        &self,
        repository: &str,
        label: &str,
    ) -> Result<Vec<Value>, http::Error> {
        let uri = format!(
            "{}/repos/{}/issues?labels={}&state=all&per_page={}",
            self.api_url, repository, label, PER_PAGE
        );

        let response = get!(&uri, self.token.as_deref())?;

        let issues = serde_json::from_str::<Vec<Value>>(&response)
            .map_err(|cause| http::Error::ParseResponseError { cause })?;

        Ok(issues)
    }
}
