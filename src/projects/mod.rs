mod image;
mod record;
mod sections;
mod text;
mod writer;

pub use record::ProjectRecord;
pub use writer::save_projects;

use serde_json::Value;

/// Turn raw issue items into project records, skipping the ones that
/// cannot be decoded so a single broken submission never sinks the batch.
pub fn extract_all(issues: &[Value]) -> Vec<ProjectRecord> {
    issues
        .iter()
        .filter_map(|issue| match ProjectRecord::from_json(issue) {
            Ok(record) => {
                log::info!("Parsed '{}'", record.title);
                Some(record)
            }
            Err(e) => {
                let number = issue
                    .get("number")
                    .and_then(Value::as_u64)
                    .unwrap_or_default();
                log::error!("Failed to parse issue #{}: {:#}", number, e);
                None
            }
        })
        .collect()
}
