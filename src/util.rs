// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for paths, "now" resolution, git subprocess execution, logging setup, and man page rendering
// role: utilities/helpers
// inputs: Paths; optional now override strings; GitCommand; clap CommandFactory
// outputs: Canonicalized paths, local naive timestamps, git stdout, man page text
// side_effects: run_git invokes subprocesses; init_tracing installs the global subscriber
// invariants:
// - run_git never returns Ok for a non-zero git exit status
// - failures from run_git are always GitCommandError (spawn failures included)
// errors: run_git surfaces command + stderr
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDateTime};
use clap::CommandFactory;
use tracing_subscriber::EnvFilter;

use crate::gitio::{GitCommand, GitCommandError};

pub fn canonicalize_lossy<P: AsRef<Path>>(p: P) -> String {
  let p = p.as_ref();
  let pb: PathBuf = match std::fs::canonicalize(p) {
    Ok(x) => x,
    Err(_) => match std::env::current_dir() {
      Ok(cwd) => cwd.join(p),
      Err(_) => PathBuf::from(p),
    },
  };
  pb.to_string_lossy().to_string()
}

pub fn run_git(repo: &Path, cmd: &GitCommand) -> Result<String> {
  let out = Command::new("git")
    .args(&cmd.args)
    .envs(cmd.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    .current_dir(repo)
    .output()
    .map_err(|e| GitCommandError {
      command: cmd.display(),
      diagnostics: format!("spawning git: {e}"),
    })?;

  if out.status.success() {
    Ok(String::from_utf8_lossy(&out.stdout).to_string())
  } else {
    let stderr = String::from_utf8_lossy(&out.stderr);
    Err(
      GitCommandError {
        command: cmd.display(),
        diagnostics: stderr.trim_end().to_string(),
      }
      .into(),
    )
  }
}

/// Install the global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `verbose`.
pub fn init_tracing(verbose: bool) {
  let default = if verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_ansi(std::io::stderr().is_terminal())
    .with_target(false)
    .try_init();
}

/// Returns the effective "now" as a local wall-clock timestamp.
///
/// When `override_now` is `Some`, that instant is used; otherwise the
/// current local time. Keeps `Local::now()` out of the rest of the code.
pub fn effective_now(override_now: Option<DateTime<Local>>) -> NaiveDateTime {
  override_now.unwrap_or_else(Local::now).naive_local()
}

/// Parse a `--now-override` string into a local DateTime.
/// Accepts RFC3339 (e.g. 2025-08-15T12:00:00Z) or a naive local timestamp
/// formatted as `%Y-%m-%dT%H:%M:%S`.
pub fn parse_now_override(s: Option<&str>) -> Option<DateTime<Local>> {
  s.and_then(|raw| {
    chrono::DateTime::parse_from_rfc3339(raw)
      .ok()
      .map(|dt| dt.with_timezone(&Local))
      .or_else(|| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
          .ok()
          .and_then(|naive| naive.and_local_timezone(Local).earliest())
      })
  })
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
