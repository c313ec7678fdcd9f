use std::path::{Path, PathBuf};

use anyhow::Result;
use thiserror::Error;
use tracing::debug;

use crate::util::run_git;

/// One git invocation: argument list plus extra environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    pub args: Vec<String>,
    pub envs: Vec<(String, String)>,
}

impl GitCommand {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { args: args.into_iter().map(Into::into).collect(), envs: Vec::new() }
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Shell-ish rendering used in logs, e.g. `git commit -m Fix bug in core`.
    pub fn display(&self) -> String {
        format!("git {}", self.args.join(" "))
    }
}

/// git exited non-zero (or could not be started at all).
#[derive(Debug, Error)]
#[error("{command} failed: {diagnostics}")]
pub struct GitCommandError {
    pub command: String,
    pub diagnostics: String,
}

/// Synchronous git executor. Returns stdout on success, a [`GitCommandError`] otherwise.
pub trait GitBackend {
    fn execute(&self, cmd: &GitCommand) -> Result<String>;
}

/// Runs the real `git` binary inside a fixed working tree.
pub struct GitCli {
    repo: PathBuf,
}

impl GitCli {
    pub fn new(repo: &Path) -> Self {
        Self { repo: repo.to_path_buf() }
    }
}

impl GitBackend for GitCli {
    fn execute(&self, cmd: &GitCommand) -> Result<String> {
        debug!("running {}", cmd.display());
        run_git(&self.repo, cmd)
    }
}

pub fn init_repository(git: &dyn GitBackend, branch: &str) -> Result<()> {
    git.execute(&GitCommand::new(["init", "-b", branch]))?;
    Ok(())
}

pub fn set_config(git: &dyn GitBackend, key: &str, value: &str) -> Result<()> {
    git.execute(&GitCommand::new(["config", key, value]))?;
    Ok(())
}

pub fn stage_all(git: &dyn GitBackend) -> Result<()> {
    git.execute(&GitCommand::new(["add", "."]))?;
    Ok(())
}

/// Commit staged changes, backdating both author and committer dates to `date`.
pub fn commit_at(git: &dyn GitBackend, message: &str, date: &str) -> Result<()> {
    let cmd =
        GitCommand::new(["commit", "-m", message, "--date", date]).env("GIT_COMMITTER_DATE", date);
    git.execute(&cmd)?;
    Ok(())
}

pub fn add_remote(git: &dyn GitBackend, name: &str, url: &str) -> Result<()> {
    git.execute(&GitCommand::new(["remote", "add", name, url]))?;
    Ok(())
}

pub fn rename_branch(git: &dyn GitBackend, branch: &str) -> Result<()> {
    git.execute(&GitCommand::new(["branch", "-M", branch]))?;
    Ok(())
}

pub fn push_upstream(git: &dyn GitBackend, remote: &str, branch: &str) -> Result<()> {
    git.execute(&GitCommand::new(["push", "-u", remote, branch]))?;
    Ok(())
}
