pub mod github_client;
mod macros;
mod response;

pub use response::Issue;
pub use response::Label;

use crate::config::Config;
use anyhow::Result;
use github_client::GithubClient;
use serde_json::Value;

const PROJECT_LABEL: &str = "project";

/// Fetch all issues labeled `project` and keep the approved ones, open and
/// closed (closed projects stay visible as archived).
pub async fn fetch_approved_issues(config: &Config) -> Result<Vec<Value>> {
    log::info!("Fetching issues from {}", config.repository);

    let client = GithubClient::new(config);
    let issues = client
        .issues_with_label(&config.repository, PROJECT_LABEL)
        .await?;

    log::info!(
        "Found {} issue(s) with '{}' label",
        issues.len(),
        PROJECT_LABEL
    );

    let approved: Vec<Value> = issues
        .into_iter()
        .filter(|issue| is_approved(issue, &config.approval_labels))
        .collect();

    for issue in &approved {
        log::info!(
            "#{}: {} [{}]",
            issue.get("number").and_then(Value::as_u64).unwrap_or_default(),
            issue.get("title").and_then(Value::as_str).unwrap_or(""),
            issue.get("state").and_then(Value::as_str).unwrap_or("unknown"),
        );
    }

    log::info!("{} approved project(s) (open + closed)", approved.len());

    Ok(approved)
}

// One approval label suffices; labels are read leniently since the items
// are still raw JSON at this point.
fn is_approved(issue: &Value, approval_labels: &[String]) -> bool {
    let Some(labels) = issue.get("labels").and_then(Value::as_array) else {
        return false;
    };

    labels
        .iter()
        .filter_map(|label| label.get("name").and_then(Value::as_str))
        .any(|name| approval_labels.iter().any(|approval| approval == name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use mockito::Server;
    use serde_json::json;
    use std::path::PathBuf;

    fn approval_labels() -> Vec<String> {
        vec!["project:approved".to_owned()]
    }

    fn test_config(api_url: String) -> Config {
        Config {
            repository: "foo/bar".to_owned(),
            token: None,
            api_url,
            approval_labels: approval_labels(),
            output_file: PathBuf::from("projects.json"),
        }
    }

    fn issue(number: u64, labels: &[&str]) -> Value {
        json!({
            "number": number,
            "title": format!("Project {}", number),
            "body": "### Title\nX",
            "labels": labels.iter().map(|name| json!({ "name": name })).collect::<Vec<_>>(),
            "state": "open",
            "html_url": format!("https://github.com/foo/bar/issues/{}", number),
            "created_at": "2026-01-01T00:00:00Z",
            "updated_at": "2026-01-02T00:00:00Z",
        })
    }

    #[test]
    fn approved_when_any_approval_label_matches() {
        let labels = vec!["status:web_ready".to_owned(), "project:approved".to_owned()];
        assert!(is_approved(&issue(1, &["project", "project:approved"]), &labels));
        assert!(is_approved(&issue(2, &["status:web_ready"]), &labels));
        assert!(!is_approved(&issue(3, &["project"]), &labels));
    }

    #[test]
    fn not_approved_without_labels() {
        assert!(!is_approved(&issue(1, &[]), &approval_labels()));
        assert!(!is_approved(&json!({ "number": 1 }), &approval_labels()));
        // Label objects without a name are skipped, not an error.
        assert!(!is_approved(
            &json!({ "number": 1, "labels": [{ "color": "d73a4a" }] }),
            &approval_labels(),
        ));
    }

    #[tokio::test]
    async fn fetches_and_filters_approved_issues() -> Result<()> {
        let mut server = Server::new_async().await;

        let page = json!([
            issue(1, &["project", "project:approved"]),
            issue(2, &["project"]),
            issue(3, &["project", "project:approved"]),
        ]);

        let mock = server
            .mock("GET", "/repos/foo/bar/issues?labels=project&state=all&per_page=100")
            .with_body(page.to_string())
            .create_async()
            .await;

        let approved = fetch_approved_issues(&test_config(server.url())).await?;

        mock.assert_async().await;
        assert_eq!(approved.len(), 2);
        assert_eq!(approved[0]["number"], 1);
        assert_eq!(approved[1]["number"], 3);

        Ok(())
    }

    #[tokio::test]
    async fn empty_page_is_not_an_error() -> Result<()> {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/repos/foo/bar/issues?labels=project&state=all&per_page=100")
            .with_body("[]")
            .create_async()
            .await;

        let approved = fetch_approved_issues(&test_config(server.url())).await?;
        assert!(approved.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_is_fatal() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/repos/foo/bar/issues?labels=project&state=all&per_page=100")
            .with_status(403)
            .with_body("rate limited")
            .create_async()
            .await;

        let result = fetch_approved_issues(&test_config(server.url())).await;
        assert!(result.is_err());
    }
}
