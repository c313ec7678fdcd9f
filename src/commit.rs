use std::fs::OpenOptions;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::debug;

use crate::dice::{choose, Dice};
use crate::gitio::{self, GitBackend};
use crate::model::{render_message, CommitRecord, MESSAGE_TEMPLATES, MODULES};
use crate::workspace::Workspace;

/// Random template filled with a random module.
pub fn synthesize_message(dice: &mut dyn Dice) -> String {
  let template = *choose(dice, &MESSAGE_TEMPLATES);
  let module = *choose(dice, &MODULES);
  render_message(template, module)
}

/// Writes one file, appends one README line, and records one commit dated `when`.
pub fn produce_commit(
  ws: &Workspace,
  git: &dyn GitBackend,
  dice: &mut dyn Dice,
  when: NaiveDateTime,
) -> Result<CommitRecord> {
  let message = synthesize_message(dice);
  // Independent of the module named in the message.
  let file_module = *choose(dice, &MODULES);
  let record = CommitRecord::new(message, file_module, when);

  let path = ws.join(&record.file_path);
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
  }
  std::fs::write(&path, record.file_contents())
    .with_context(|| format!("writing {}", path.display()))?;

  let readme = ws.readme_path();
  let mut file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(&readme)
    .with_context(|| format!("opening {}", readme.display()))?;
  file
    .write_all(record.readme_line.as_bytes())
    .with_context(|| format!("appending to {}", readme.display()))?;

  gitio::stage_all(git)?;
  gitio::commit_at(git, &record.message, &record.git_date())?;

  debug!("[commit] {} {} ({})", record.git_date(), record.message, record.file_path);
  Ok(record)
}
