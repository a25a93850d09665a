use once_cell::sync::Lazy;
use regex::Regex;

use super::text::MISSING_IMAGE_PLACEHOLDER;

static IMG_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"src=["'](https?://[^"']+)["']"#).unwrap());
static MARKDOWN_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[.*?\]\((https?://[^)]+)\)").unwrap());
static PLAIN_URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(https?://\S+)").unwrap());

// Ordered by priority; the first extractor to match wins.
const EXTRACTORS: [fn(&str) -> Option<String>; 3] =
    [from_img_tag, from_markdown_image, from_plain_url];

/// Pull a usable image URL out of the raw `Image` section.
///
/// GitHub renders uploaded images as HTML `<img>` tags, pasted ones as
/// markdown references, and some submitters paste a bare URL; all three
/// forms are handled, in that order.
pub fn extract_image_url(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = text.trim();

    if text.contains(MISSING_IMAGE_PLACEHOLDER) {
        return String::new();
    }

    EXTRACTORS
        .iter()
        .find_map(|extract| extract(text))
        .unwrap_or_default()
}

fn from_img_tag(text: &str) -> Option<String> {
    IMG_TAG_RE
        .captures(text)
        .map(|captures| captures[1].to_string())
}

fn from_markdown_image(text: &str) -> Option<String> {
    MARKDOWN_IMAGE_RE
        .captures(text)
        .map(|captures| captures[1].to_string())
}

fn from_plain_url(text: &str) -> Option<String> {
    if !text.starts_with("http://") && !text.starts_with("https://") {
        return None;
    }

    PLAIN_URL_RE
        .captures(text)
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_html_img_src() {
        let text = r#"<img width="600" src="https://example.com/shot.png" alt="screenshot" />"#;
        assert_eq!(extract_image_url(text), "https://example.com/shot.png");

        let single_quoted = "<img src='https://example.com/shot.png'/>";
        assert_eq!(extract_image_url(single_quoted), "https://example.com/shot.png");
    }

    #[test]
    fn html_src_wins_over_markdown() {
        let text = r#"<img src="https://a" /> and ![x](https://b)"#;
        assert_eq!(extract_image_url(text), "https://a");
    }

    #[test]
    fn extracts_markdown_image() {
        assert_eq!(
            extract_image_url("![project logo](https://example.com/logo.png)"),
            "https://example.com/logo.png"
        );
    }

    #[test]
    fn markdown_wins_over_plain_url() {
        let text = "https://c/ignored ![x](https://b)";
        assert_eq!(extract_image_url(text), "https://b");
    }

    #[test]
    fn plain_url_stops_at_whitespace() {
        assert_eq!(
            extract_image_url("https://example.com/img.png extra text"),
            "https://example.com/img.png"
        );
    }

    #[test]
    fn plain_url_must_lead_the_text() {
        assert_eq!(extract_image_url("see https://example.com/img.png"), "");
    }

    #[test]
    fn placeholder_yields_empty() {
        let text = "Leave this text if you don't have an image yet";
        assert_eq!(extract_image_url(text), "");
    }

    #[test]
    fn non_http_sources_are_rejected() {
        assert_eq!(extract_image_url(r#"<img src="/relative/path.png">"#), "");
        assert_eq!(extract_image_url(r#"<img src="ftp://example.com/x.png">"#), "");
        assert_eq!(extract_image_url("![x](data:image/png;base64,AAAA)"), "");
        assert_eq!(extract_image_url(""), "");
    }
}
