use std::collections::HashMap;

const HEADER_MARKER: &str = "### ";

/// Split an issue body into sections keyed by `### ` header lines.
///
/// Lines before the first header are discarded; a repeated header name
/// overwrites the earlier section. Section content keeps its lines verbatim
/// and is trimmed only at the boundaries.
pub fn parse_issue_body(body: &str) -> HashMap<String, String> {
    let mut sections = HashMap::new();
    let mut current_section: Option<String> = None;
    let mut current_content: Vec<&str> = Vec::new();

    for line in body.split('\n') {
        if let Some(rest) = line.strip_prefix(HEADER_MARKER) {
            // flush the running section before starting the next one
            if let Some(name) = current_section.take() {
                sections.insert(name, current_content.join("\n").trim().to_string());
            }
            current_section = Some(rest.trim().to_string());
            current_content.clear();
        } else if current_section.is_some() {
            current_content.push(line);
        }
    }

    if let Some(name) = current_section {
        sections.insert(name, current_content.join("\n").trim().to_string());
    }

    sections
}
