use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::github::Issue;

use super::{image::extract_image_url, sections::parse_issue_body, text::clean_text};

/// One approved project, shaped exactly as the website consumes it.
/// Field order here is the serialization order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub id: u64,
    pub title: String,
    pub leaders: String,
    pub collaborators: String,
    pub description: String,
    pub goals: String,
    pub learning: String,
    pub repository: String,
    pub communication: String,
    pub onboarding: String,
    pub data: String,
    pub skills: String,
    pub good_first_issues: String,
    pub num_collaborators: String,
    pub image: String,
    pub r#type: String,
    pub development_status: String,
    pub topics: String,
    pub tools: String,
    pub programming_languages: String,
    pub modalities: String,
    pub git_skills: String,
    pub issue_url: String,
    pub created_at: String,
    pub updated_at: String,
    pub labels: Vec<String>,
}

impl ProjectRecord {
    /// Decode one raw API item and build its record.
    ///
    /// The typed decode is the per-issue failure surface: a malformed item
    /// errors here and the caller decides whether the batch goes on.
    pub fn from_json(value: &Value) -> Result<ProjectRecord> {
        let issue: Issue =
            serde_json::from_value(value.clone()).context("malformed issue object")?;

        Ok(ProjectRecord::from_issue(&issue))
    }

    pub fn from_issue(issue: &Issue) -> ProjectRecord {
        let body = issue.body.as_deref().unwrap_or_default();
        let sections = parse_issue_body(body);

        ProjectRecord {
            id: issue.number,
            // the issue's own title stands in when the form field was removed
            title: clean_text(
                sections
                    .get("Title")
                    .map(String::as_str)
                    .unwrap_or(&issue.title),
            ),
            leaders: field(&sections, "Leaders"),
            collaborators: field(&sections, "Collaborators"),
            description: field(&sections, "Project Description"),
            goals: field(&sections, "Goals for Brainhack Marseille 2026"),
            learning: field(&sections, "What will participants learn?"),
            repository: field(&sections, "Link to project repository/sources"),
            communication: field(&sections, "Communication channels"),
            onboarding: field(&sections, "Onboarding documentation"),
            data: field(&sections, "Data to use"),
            skills: field(&sections, "Skills"),
            good_first_issues: field(&sections, "Good first issues"),
            num_collaborators: field(&sections, "Number of collaborators"),
            image: extract_image_url(section(&sections, "Image")),
            r#type: field(&sections, "Type"),
            development_status: field(&sections, "Development status"),
            topics: field(&sections, "Topic"),
            tools: field(&sections, "Tools"),
            programming_languages: field(&sections, "Programming language"),
            modalities: field(&sections, "Modalities"),
            git_skills: field(&sections, "Git skills"),
            issue_url: issue.html_url.to_owned(),
            created_at: issue.created_at.to_owned(),
            updated_at: issue.updated_at.to_owned(),
            labels: issue.label_names(),
        }
    }
}

fn section<'a>(sections: &'a HashMap<String, String>, name: &str) -> &'a str {
    sections.get(name).map(String::as_str).unwrap_or_default()
}

fn field(sections: &HashMap<String, String>, name: &str) -> String {
    clean_text(section(sections, name))
}
