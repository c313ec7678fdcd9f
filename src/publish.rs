use anyhow::Result;
use tracing::info;

use crate::gitio::{self, GitBackend};
use crate::workspace::PRIMARY_BRANCH;

pub const REMOTE_NAME: &str = "origin";

/// Register `url` as origin and push the primary branch with upstream tracking.
pub fn publish(git: &dyn GitBackend, url: &str) -> Result<()> {
  info!("Pushing to remote repository...");
  gitio::add_remote(git, REMOTE_NAME, url)?;
  gitio::rename_branch(git, PRIMARY_BRANCH)?;
  gitio::push_upstream(git, REMOTE_NAME, PRIMARY_BRANCH)
}
