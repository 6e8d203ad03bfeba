pub mod cast;
pub mod directive;
pub mod list;
pub mod pull_request_url;
pub mod resolver;
pub mod tags;

pub use cast::{cast, parse_number};
pub use directive::{base_url_from_line, env_variable_from_line, should_run_from_line, EnvDirective};
pub use list::{extract_list_block, find_additional_specs, find_pages_to_test};
pub use pull_request_url::{parse_pull_request_url, PullRequestUrlError};
pub use resolver::find_tests_to_run;
pub use tags::{clean_up_tags, is_line_checked, scan_checked_tags, TagSelection};
