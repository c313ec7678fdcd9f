use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, info};

mod cli;
mod commit;
mod dice;
mod gitio;
mod history;
mod model;
mod publish;
mod util;
mod window;
mod workspace;

use crate::cli::{Cli, ValidationError, normalize};
use crate::dice::RandDice;
use crate::gitio::{GitCli, GitCommandError};

fn main() {
  let cli = Cli::parse_from(cli::expand_legacy_flags(std::env::args_os()));

  if cli.gen_man {
    match util::render_man_page::<Cli>() {
      Ok(page) => print!("{}", page),
      Err(err) => {
        eprintln!("{err:#}");
        std::process::exit(1);
      }
    }
    return;
  }

  util::init_tracing(cli.verbose);

  if let Err(err) = run(cli) {
    report_failure(&err);
    std::process::exit(1);
  }
}

fn run(cli: Cli) -> Result<()> {
  // Phase 1: resolve and validate options; nothing touches disk before this succeeds
  let cfg = normalize(cli)?;
  debug!("effective config: {}", serde_json::to_string(&cfg)?);

  // Phase 2: create and initialize the repository directory
  let now = util::effective_now(util::parse_now_override(cfg.now_override.as_deref()));
  let name = workspace::directory_name(cfg.repository.as_deref(), now);
  let ws = workspace::create(Path::new(&cfg.base_dir), &name)?;
  let git = GitCli::new(ws.root());
  workspace::initialize(&ws, &git, &cfg)?;

  // Phase 3: generate the history
  let mut dice = RandDice::new(cfg.seed);
  let summary = history::generate(&cfg, &ws, &git, &mut dice, now)?;
  info!(
    "Created {} commits on {} of {} days in {}",
    summary.commits,
    summary.active_days,
    summary.days_considered,
    ws.root().display()
  );
  debug!("summary: {}", serde_json::to_string(&summary)?);

  // Phase 4: publish
  if let Some(url) = cfg.repository.as_deref() {
    publish::publish(&git, url)?;
  }

  info!("Repository generation completed successfully!");
  Ok(())
}

fn report_failure(err: &anyhow::Error) {
  if let Some(v) = err.downcast_ref::<ValidationError>() {
    eprintln!("{v}");
  } else if let Some(g) = err.downcast_ref::<GitCommandError>() {
    error!("Command failed: {}", g.command);
    error!("Error: {}", g.diagnostics);
  } else {
    error!("{err:#}");
  }
}
