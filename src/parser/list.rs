//! Bulleted list blocks that follow a marker line
//!
//! ```text
//! Run these Cypress specs too:
//!
//! - `cypress/e2e/spec-b.cy.js`
//! - cypress/e2e/**/*.cy.js
//!
//! more text here
//! ```

pub const ADDITIONAL_SPECS_MARKER: &str = "Run these Cypress specs too";
pub const PAGES_TO_TEST_MARKER: &str = "Run these pages too";

/// Collect the bullet items listed after the first line containing `marker`
///
/// Items have their `- ` prefix and every backtick removed. A bare `-` keeps
/// the list open without adding an item. Scanning stops at a blank line once
/// the list has started, or at any other text once an item was collected.
pub fn extract_list_block(text: &str, marker: &str) -> Vec<String> {
    let mut lines = text.lines().skip_while(|line| !line.contains(marker));
    if lines.next().is_none() {
        return Vec::new();
    }

    let mut items = Vec::new();
    let mut list_started = false;

    for line in lines {
        let line = line.trim();

        if line == "-" {
            list_started = true;
            continue;
        }

        if let Some(item) = line.strip_prefix("- ") {
            list_started = true;
            let cleaned = item.replace('`', "");
            let cleaned = cleaned.trim();
            if !cleaned.is_empty() {
                items.push(cleaned.to_string());
            }
            continue;
        }

        if line.is_empty() {
            if list_started {
                break;
            }
            continue;
        }

        if !items.is_empty() {
            break;
        }
    }

    items
}

/// Spec files or globs to run in addition to the default suite
pub fn find_additional_specs(text: &str) -> Vec<String> {
    extract_list_block(text, ADDITIONAL_SPECS_MARKER)
}

/// Extra URL paths to visit
pub fn find_pages_to_test(text: &str) -> Vec<String> {
    extract_list_block(text, PAGES_TO_TEST_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_single_line() {
        let body = "
      # PR

      Run these Cypress specs too:

      - cypress/e2e/spec-b.cy.js
    ";
        assert_eq!(find_additional_specs(body), vec!["cypress/e2e/spec-b.cy.js"]);
    }

    #[test]
    fn test_stops_after_the_list() {
        let body = "
      # PR

      Run these Cypress specs too:

      - cypress/e2e/spec-b.cy.js
      - cypress/e2e/spec-c.cy.js

      more text here
      - not a spec
    ";
        assert_eq!(
            find_additional_specs(body),
            vec!["cypress/e2e/spec-b.cy.js", "cypress/e2e/spec-c.cy.js"]
        );
    }

    #[test]
    fn test_allows_wildcards() {
        let body = "Run these Cypress specs too:\n\n- cypress/e2e/spec-b.cy.js\n- cypress/e2e/**.cy.js\n";
        assert_eq!(
            find_additional_specs(body),
            vec!["cypress/e2e/spec-b.cy.js", "cypress/e2e/**.cy.js"]
        );
    }

    #[test]
    fn test_removes_back_ticks() {
        let body = "
      Run these Cypress specs too:

      - `cypress/e2e/spec-b.cy.js`
      - `cypress/e2e/**.cy.js`

      more text here
    ";
        assert_eq!(
            find_additional_specs(body),
            vec!["cypress/e2e/spec-b.cy.js", "cypress/e2e/**.cy.js"]
        );
    }

    #[test]
    fn test_bare_dash_adds_nothing() {
        let body = "Run these Cypress specs too:\n-\n- cypress/e2e/spec-d.cy.js\n\nthe end";
        assert_eq!(find_additional_specs(body), vec!["cypress/e2e/spec-d.cy.js"]);
    }

    #[test]
    fn test_heading_without_blank_line_ends_list() {
        let body = "Run these Cypress specs too:\n- cypress/e2e/a.cy.js\n## Notes\n- unrelated";
        assert_eq!(find_additional_specs(body), vec!["cypress/e2e/a.cy.js"]);
    }

    #[test]
    fn test_unrelated_checkbox_after_marker_gives_nothing() {
        let body = "Run these Cypress specs too:\n[x] run Cypress tests\n";
        assert!(find_additional_specs(body).is_empty());
    }

    #[test]
    fn test_missing_marker() {
        assert!(find_additional_specs("- cypress/e2e/a.cy.js").is_empty());
        assert!(find_additional_specs("").is_empty());
    }

    #[test]
    fn test_only_first_marker_is_scanned() {
        let body = "Run these pages too:\n- /about\n\nRun these pages too:\n- /contact\n";
        assert_eq!(find_pages_to_test(body), vec!["/about"]);
    }

    #[test]
    fn test_pages_and_specs_are_independent() {
        let body = "Run these Cypress specs too:\n- cypress/e2e/a.cy.js\n\nRun these pages too:\n- /\n- `/about`\n";
        assert_eq!(find_additional_specs(body), vec!["cypress/e2e/a.cy.js"]);
        assert_eq!(find_pages_to_test(body), vec!["/", "/about"]);
    }
}
