use crate::Result;
use anyhow::Context;
use std::path::Path;

/// SHA of the commit checked out in the repository enclosing `dir`
pub fn head_commit(dir: &Path) -> Result<String> {
    let repo = git2::Repository::discover(dir)
        .with_context(|| format!("No git repository found from {}", dir.display()))?;
    let head = repo.head().context("Repository has no HEAD")?;
    let commit = head.peel_to_commit().context("HEAD does not point to a commit")?;
    let sha = commit.id().to_string();
    tracing::debug!(%sha, "using HEAD commit");
    Ok(sha)
}
