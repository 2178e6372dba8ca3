//! Description extraction from skill markdown.
//!
//! Priority: a `description:` line (usually frontmatter), then the first
//! markdown heading, then [`NO_DESCRIPTION`].

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::text::read_text_lossy;

/// Fallback used when nothing better can be extracted.
pub const NO_DESCRIPTION: &str = "No description";

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_compile_err) => match Regex::new(r"$^") {
            Ok(fallback) => fallback,
            Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
        },
    }
}

static DESCRIPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r#"(?m)^description:\s*["']?(.+?)["']?\s*$"#));
static HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"(?m)^#+\s+(.+)$"));

/// Extract a one-line description from already-loaded text.
#[must_use]
pub fn description_from_text(text: &str) -> String {
    if let Some(value) = DESCRIPTION_LINE.captures(text).and_then(|c| c.get(1)) {
        return value.as_str().trim().to_string();
    }

    if let Some(heading) = HEADING_LINE.captures(text).and_then(|c| c.get(1)) {
        return heading.as_str().trim().to_string();
    }

    NO_DESCRIPTION.to_string()
}

/// Extract a one-line description from a file.
///
/// Never fails: unreadable or binary files yield [`NO_DESCRIPTION`].
#[must_use]
pub fn extract_description(path: &Path) -> String {
    match read_text_lossy(path) {
        Ok(text) => description_from_text(&text),
        Err(e) => {
            log::debug!("Falling back to default description: {}", e);
            NO_DESCRIPTION.to_string()
        }
    }
}
