const NO_RESPONSE_PLACEHOLDERS: [&str; 3] = ["no response", "*no response*", "_no response_"];

const INSTRUCTIONS_MARKER: &str = "PLEASE DELETE THESE INSTRUCTIONS";
const INSTRUCTIONS_LINE_MARKER: &str = "PLEASE DELETE";

pub const MISSING_IMAGE_PLACEHOLDER: &str = "Leave this text if you don't have an image yet";

/// Normalize one section's text for output.
///
/// The issue form fills untouched fields with "No response" markers and the
/// template ships an instruction block submitters regularly leave in place;
/// both are scrubbed here.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    if NO_RESPONSE_PLACEHOLDERS.contains(&text.trim().to_lowercase().as_str()) {
        return String::new();
    }

    let text = if text.contains(INSTRUCTIONS_MARKER) {
        strip_instruction_lines(text)
    } else {
        text.to_string()
    };

    if text.contains(MISSING_IMAGE_PLACEHOLDER) {
        return String::new();
    }

    text.trim().to_string()
}

fn strip_instruction_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| {
            !line.contains(INSTRUCTIONS_LINE_MARKER) && !line.trim_start().starts_with("- (")
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
