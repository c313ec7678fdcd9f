use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::util;

/// Longest window accepted before "now": 15 years.
pub const MAX_DAYS_BEFORE: i64 = 15 * 365;

/// Longest window accepted after "now": 100 years.
pub const MAX_DAYS_AFTER: i64 = 100 * 365;

/// Hard ceiling on commits recorded for a single day.
pub const MAX_COMMITS_PER_DAY: i64 = 20;

#[derive(Parser, Debug)]
#[command(
    name = "git-history-generator",
    version,
    about = "Generate a backdated Git commit history",
    long_about = None,
    allow_negative_numbers = true
)]
pub struct Cli {
  /// Do not commit on weekends
  #[arg(long = "no-weekends", alias = "no_weekends")]
  pub no_weekends: bool,

  /// Maximum commits per day (1-20)
  #[arg(long = "max-commits", alias = "max_commits", default_value_t = 10)]
  pub max_commits: i64,

  /// Commit frequency percentage: chance that an eligible day gets any commits
  #[arg(long, default_value_t = 80)]
  pub frequency: i64,

  /// Remote Git repository URL; also names the local directory
  #[arg(short = 'r', long, allow_hyphen_values = true)]
  pub repository: Option<String>,

  /// Repository-local user.name override
  #[arg(long = "user-name", alias = "user_name", allow_hyphen_values = true)]
  pub user_name: Option<String>,

  /// Repository-local user.email override
  #[arg(long = "user-email", alias = "user_email", allow_hyphen_values = true)]
  pub user_email: Option<String>,

  /// Days before the current date (max: 5475, i.e. 15 years)
  #[arg(long = "days-before", alias = "days_before", default_value_t = 365)]
  pub days_before: i64,

  /// Days after the current date (max: 36500, i.e. 100 years)
  #[arg(long = "days-after", alias = "days_after", default_value_t = 0)]
  pub days_after: i64,

  /// Directory in which the repository directory is created
  #[arg(long, default_value = ".")]
  pub base_dir: PathBuf,

  /// Seed for the random source (reproducible histories)
  #[arg(long)]
  pub seed: Option<u64>,

  /// Log at debug level
  #[arg(short, long)]
  pub verbose: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override the "now" instant (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

/// Bad user input, reported before anything touches the filesystem.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveConfig {
  pub base_dir: String, // absolute path for stability
  pub no_weekends: bool,
  pub max_commits: u32,
  pub frequency: i64,
  pub repository: Option<String>,
  pub user_name: Option<String>,
  pub user_email: Option<String>,
  pub days_before: u32,
  pub days_after: u32,
  pub seed: Option<u64>,
  pub now_override: Option<String>,
}

/// Long flags whose value is the next argv token unless given as `--flag=value`.
const VALUE_FLAGS: [&str; 15] = [
  "--max-commits",
  "--max_commits",
  "--frequency",
  "--repository",
  "--user-name",
  "--user_name",
  "--user-email",
  "--user_email",
  "--days-before",
  "--days_before",
  "--days-after",
  "--days_after",
  "--base-dir",
  "--seed",
  "--now-override",
];

fn legacy_long_form(flag: &str) -> Option<&'static str> {
  match flag {
    "-nw" => Some("--no-weekends"),
    "-mc" => Some("--max-commits"),
    "-fr" => Some("--frequency"),
    "-un" => Some("--user-name"),
    "-ue" => Some("--user-email"),
    "-db" => Some("--days-before"),
    "-da" => Some("--days-after"),
    _ => None,
  }
}

/// Rewrite the two-letter single-dash spellings (`-nw`, `-db 30`, `-mc=5`) to
/// their long forms so clap does not read them as clustered short flags.
///
/// Only tokens in flag position are touched: the value following a
/// value-taking flag passes through verbatim, as does everything after `--`.
pub fn expand_legacy_flags<I>(args: I) -> Vec<OsString>
where
  I: IntoIterator<Item = OsString>,
{
  let mut out = Vec::new();
  let mut iter = args.into_iter();
  // argv[0] is the program name.
  out.extend(iter.next());

  let mut value_pending = false;
  while let Some(arg) = iter.next() {
    if value_pending {
      value_pending = false;
      out.push(arg);
      continue;
    }
    let Some(s) = arg.to_str().map(str::to_owned) else {
      out.push(arg);
      continue;
    };
    if s == "--" {
      out.push(arg);
      out.extend(iter.by_ref());
      break;
    }

    let (flag, value) = match s.split_once('=') {
      Some((f, v)) => (f, Some(v)),
      None => (s.as_str(), None),
    };
    let long = legacy_long_form(flag);
    let name = long.unwrap_or(flag);
    value_pending = value.is_none() && (name == "-r" || VALUE_FLAGS.contains(&name));

    match (long, value) {
      (Some(l), Some(v)) => out.push(OsString::from(format!("{l}={v}"))),
      (Some(l), None) => out.push(OsString::from(l)),
      (None, _) => out.push(arg),
    }
  }
  out
}

/// Clamp `days_before` to [`MAX_DAYS_BEFORE`]. The flag reports whether clamping happened.
pub fn clamp_days_before(days_before: i64) -> (i64, bool) {
  if days_before > MAX_DAYS_BEFORE {
    (MAX_DAYS_BEFORE, true)
  } else {
    (days_before, false)
  }
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  let (days_before, clamped) = clamp_days_before(cli.days_before);
  if clamped {
    warn!(
      "Days before adjusted to maximum allowed: {} days (15 years)",
      MAX_DAYS_BEFORE
    );
  }

  if days_before < 0 {
    return Err(ValidationError("days_before must not be negative".into()).into());
  }
  if cli.days_after < 0 {
    return Err(ValidationError("days_after must not be negative".into()).into());
  }
  if cli.days_after > MAX_DAYS_AFTER {
    return Err(ValidationError(format!("days_after must not exceed {MAX_DAYS_AFTER}")).into());
  }
  if cli.max_commits < 1 {
    return Err(ValidationError("max_commits must be at least 1".into()).into());
  }

  let max_commits = if cli.max_commits > MAX_COMMITS_PER_DAY {
    warn!(
      "Max commits adjusted to maximum allowed: {} per day",
      MAX_COMMITS_PER_DAY
    );
    MAX_COMMITS_PER_DAY
  } else {
    cli.max_commits
  };

  if let Some(raw) = cli.now_override.as_deref() {
    if util::parse_now_override(Some(raw)).is_none() {
      return Err(ValidationError(format!("invalid --now-override: {raw}")).into());
    }
  }

  Ok(EffectiveConfig {
    base_dir: util::canonicalize_lossy(&cli.base_dir),
    no_weekends: cli.no_weekends,
    max_commits: u32::try_from(max_commits)?,
    frequency: cli.frequency,
    repository: cli.repository,
    user_name: cli.user_name,
    user_email: cli.user_email,
    days_before: u32::try_from(days_before)?,
    days_after: u32::try_from(cli.days_after)?,
    seed: cli.seed,
    now_override: cli.now_override,
  })
}
