pub mod apply;
pub mod body;
pub mod common;
pub mod parse;
pub mod should_run;
pub mod tests_to_run;

pub use common::TargetArgs;
