use super::directive::{base_url_from_line, env_variable_from_line, should_run_from_line};
use super::list::{find_additional_specs, find_pages_to_test};
use super::tags::scan_checked_tags;
use crate::models::{PullRequestComment, SelectionPlan};

/// Resolve the test selection plan for a pull request
///
/// The body is scanned for every kind of directive. Comments are scanned
/// afterwards for base URL directives only, so a URL posted in a comment
/// replaces the one in the body and later comments win over earlier ones.
///
/// # Example
/// ```
/// use grep_pr_tests::parser::find_tests_to_run;
/// let plan = find_tests_to_run("baseUrl http://localhost:7777\n- [x] @sanity", &["@sanity"], &[]);
/// assert_eq!(plan.base_url.as_deref(), Some("http://localhost:7777"));
/// assert_eq!(plan.tags, vec!["@sanity"]);
/// assert!(!plan.run_all);
/// ```
pub fn find_tests_to_run<S: AsRef<str>>(
    body: &str,
    tags: &[S],
    comments: &[PullRequestComment],
) -> SelectionPlan {
    let mut plan = SelectionPlan::default();

    for line in body.lines() {
        if let Some(run) = should_run_from_line(line) {
            plan.should_run_suite = Some(run);
        }

        if let Some(url) = base_url_from_line(line) {
            plan.base_url = Some(url);
        } else if let Some(directive) = env_variable_from_line(line) {
            plan.environment.insert(directive.key, directive.value);
        }
    }

    plan.additional_spec_paths = find_additional_specs(body);
    plan.additional_pages_to_test = find_pages_to_test(body);

    for comment in comments {
        if let Some(url) = comment.body.lines().filter_map(base_url_from_line).last() {
            plan.base_url = Some(url);
        }
    }

    let selection = scan_checked_tags(body, tags);
    plan.run_all = selection.run_all;
    plan.tags = selection.tags;

    plan
}
