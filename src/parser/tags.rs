//! Checked tag detection
//!
//! Matching is plain substring containment on purpose: a tag inside a longer
//! word or nested brackets still counts, and a tag checked on several lines
//! is reported once per line.

pub const ALL_TESTS_PHRASE: &str = "all tests";
const CHECKED_MARKER: &str = "[x]";

/// Result of scanning text for checked tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    pub run_all: bool,
    pub tags: Vec<String>,
}

/// A line counts as checked when it holds a lowercase `[x]` box
pub fn is_line_checked(line: &str) -> bool {
    line.contains(CHECKED_MARKER)
}

/// Find which of `tags_to_look_for` are checked in `text`
///
/// With no tags to look for everything runs. Otherwise a checked
/// "all tests" line selects everything, and every checked line appends each
/// tag it mentions in the caller's tag order.
pub fn scan_checked_tags<S: AsRef<str>>(text: &str, tags_to_look_for: &[S]) -> TagSelection {
    if tags_to_look_for.is_empty() {
        return TagSelection {
            run_all: true,
            tags: Vec::new(),
        };
    }

    let mut selection = TagSelection::default();
    for line in text.lines().filter(|line| is_line_checked(line)) {
        if line.contains(ALL_TESTS_PHRASE) {
            selection.run_all = true;
        }
        for tag in tags_to_look_for {
            let tag = tag.as_ref();
            if line.contains(tag) {
                selection.tags.push(tag.to_string());
            }
        }
    }
    selection
}

/// Split a user supplied tag list such as `"@sanity, @quick"` into tags
pub fn clean_up_tags(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
