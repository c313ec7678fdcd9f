// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Derive, create and initialize the repository directory that receives the generated history
// role: setup/initializer
// inputs: EffectiveConfig (repository, identity), base directory, now, GitBackend
// outputs: Workspace handle (name + absolute root); git repo on branch main with src/<module>/ skeleton
// side_effects: Creates directories; runs git init/config
// invariants:
// - all later file and git operations address the workspace by explicit path (no chdir)
// - identity config is only written for overrides that were supplied
// errors: git failures propagate as GitCommandError; IO errors carry the path
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::info;

use crate::cli::EffectiveConfig;
use crate::gitio::{self, GitBackend};
use crate::model::MODULES;

pub const PRIMARY_BRANCH: &str = "main";
pub const README_FILE: &str = "README.md";
pub const SOURCE_DIR: &str = "src";

/// The directory the history is generated into.
#[derive(Debug, Clone)]
pub struct Workspace {
  name: String,
  root: PathBuf,
}

impl Workspace {
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn readme_path(&self) -> PathBuf {
    self.root.join(README_FILE)
  }

  /// Resolve a `/`-separated path relative to the root.
  pub fn join(&self, rel: &str) -> PathBuf {
    rel.split('/').fold(self.root.clone(), |acc, part| acc.join(part))
  }
}

/// Directory name for the generated repository.
///
/// With a remote URL this is the text between its last `/` and last `.`
/// (`https://host/org/myproj.git` gives `myproj`). URLs without an extension
/// keep everything after the last `/`. Otherwise, or when that yields
/// nothing, a `repository-<timestamp>` name is used.
pub fn directory_name(repository: Option<&str>, now: NaiveDateTime) -> String {
  let fallback = || format!("repository-{}", now.format("%Y-%m-%d-%H-%M-%S"));
  let Some(url) = repository else {
    return fallback();
  };
  let start = url.rfind('/').map_or(0, |i| i + 1);
  let tail = &url[start..];
  let name = match tail.rfind('.') {
    Some(end) => &tail[..end],
    None => tail,
  };
  if name.is_empty() {
    fallback()
  } else {
    name.to_string()
  }
}

/// Create `<base_dir>/<name>`; succeeds when it already exists.
pub fn create(base_dir: &Path, name: &str) -> Result<Workspace> {
  let root = base_dir.join(name);
  std::fs::create_dir_all(&root).with_context(|| format!("creating {}", root.display()))?;
  Ok(Workspace { name: name.to_string(), root })
}

pub fn initialize(ws: &Workspace, git: &dyn GitBackend, cfg: &EffectiveConfig) -> Result<()> {
  info!("Initializing repository in {}", ws.root().display());
  gitio::init_repository(git, PRIMARY_BRANCH)?;

  if let Some(name) = cfg.user_name.as_deref() {
    gitio::set_config(git, "user.name", name)?;
  }
  if let Some(email) = cfg.user_email.as_deref() {
    gitio::set_config(git, "user.email", email)?;
  }

  seed_skeleton(ws)
}

/// `src/` plus one directory per catalog module.
pub fn seed_skeleton(ws: &Workspace) -> Result<()> {
  for module in MODULES {
    let dir = ws.root().join(SOURCE_DIR).join(module);
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
  }
  Ok(())
}
