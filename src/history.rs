// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Walk the timeline, decide which days get commits and how many, and drive the commit producer
// role: processing/orchestrator
// inputs: EffectiveConfig, Workspace, GitBackend, Dice, now
// outputs: HistorySummary (days considered, active days, commits); README header plus per-commit files on disk
// side_effects: Truncates and rewrites README.md header; writes files; runs git add/commit
// invariants:
// - weekend days are skipped before any draw when no_weekends is set
// - a day proceeds only when a 0..=100 draw is strictly below frequency
// - commits per day are drawn from 1..=max_commits (max_commits already capped at 20)
// - commit instants start at 20:00 and are 15 minutes apart
// errors: First producer failure aborts the run; nothing is rolled back
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::info;

use crate::cli::{EffectiveConfig, MAX_COMMITS_PER_DAY};
use crate::commit::produce_commit;
use crate::dice::Dice;
use crate::gitio::GitBackend;
use crate::window::{commit_instants, is_weekend, Timeline};
use crate::workspace::Workspace;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct HistorySummary {
  pub days_considered: u32,
  pub active_days: u32,
  pub commits: u32,
}

pub fn readme_header(directory: &str) -> String {
  format!("# Project History\n\nGenerated commit history for {directory}\n\n")
}

pub fn write_readme_header(ws: &Workspace) -> Result<()> {
  let path = ws.readme_path();
  std::fs::write(&path, readme_header(ws.name()))
    .with_context(|| format!("writing {}", path.display()))
}

/// Whether a day that survived the weekend filter receives commits.
pub fn day_proceeds(dice: &mut dyn Dice, frequency: i64) -> bool {
  dice.roll(0, 100) < frequency
}

pub fn generate(
  cfg: &EffectiveConfig,
  ws: &Workspace,
  git: &dyn GitBackend,
  dice: &mut dyn Dice,
  now: NaiveDateTime,
) -> Result<HistorySummary> {
  write_readme_header(ws)?;

  let timeline = Timeline::new(now, cfg.days_before, cfg.days_after);
  info!(
    "Generating commits from {} to {} ({} days)",
    timeline.start().date(),
    timeline.end().date(),
    timeline.total_days()
  );

  let max_per_day = i64::from(cfg.max_commits).clamp(1, MAX_COMMITS_PER_DAY);
  let mut summary = HistorySummary::default();

  for day in timeline.days() {
    summary.days_considered += 1;
    if cfg.no_weekends && is_weekend(day) {
      continue;
    }
    if !day_proceeds(dice, cfg.frequency) {
      continue;
    }

    let commits_today = u32::try_from(dice.roll(1, max_per_day))?;
    summary.active_days += 1;
    for instant in commit_instants(day, commits_today) {
      produce_commit(ws, git, dice, instant)?;
      summary.commits += 1;
    }
  }

  Ok(summary)
}
