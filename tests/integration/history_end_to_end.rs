use test_support::{files_with_extension, generator_cmd, git_stdout, tempdir, work_dir};

const NOW: &str = "2024-03-06T09:30:00";

#[test]
fn two_days_back_yields_two_evening_commits() {
  let sandbox = tempdir();
  let mut cmd = generator_cmd(sandbox.path());
  cmd.args([
    "--now-override",
    NOW,
    "-db",
    "2",
    "-da",
    "0",
    "-fr",
    "100",
    "-mc",
    "1",
    "-un",
    "Fixture Bot",
    "-ue",
    "fixture@example.com",
  ]);
  let out = cmd.output().unwrap();
  assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

  let repo = work_dir(sandbox.path()).join("repository-2024-03-06-09-30-00");
  assert!(repo.join(".git").is_dir());

  let log = git_stdout(
    sandbox.path(),
    &repo,
    &["log", "--reverse", "--format=%ad|%cd|%an|%s", "--date=format:%Y-%m-%d %H:%M"],
  );
  let lines: Vec<&str> = log.lines().collect();
  assert_eq!(lines.len(), 2, "log was:\n{log}");
  assert!(lines[0].starts_with("2024-03-04 20:00|2024-03-04 20:00|Fixture Bot|"));
  assert!(lines[1].starts_with("2024-03-05 20:00|2024-03-05 20:00|Fixture Bot|"));

  let readme = std::fs::read_to_string(repo.join("README.md")).unwrap();
  assert!(readme.starts_with(
    "# Project History\n\nGenerated commit history for repository-2024-03-06-09-30-00\n\n"
  ));
  for line in &lines {
    let subject = line.rsplit('|').next().unwrap();
    assert!(readme.contains(&format!("- {subject} (")), "README missing {subject}");
  }
  assert_eq!(readme.matches("\n- ").count(), 2);

  let files = files_with_extension(&repo, "txt");
  assert_eq!(files.len(), 2);
  let names: Vec<String> = files
    .iter()
    .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
    .collect();
  assert!(names.contains(&"file_20240304_2000.txt".to_string()));
  assert!(names.contains(&"file_20240305_2000.txt".to_string()));

  assert_eq!(git_stdout(sandbox.path(), &repo, &["rev-parse", "--abbrev-ref", "HEAD"]), "main");
  assert_eq!(git_stdout(sandbox.path(), &repo, &["status", "--porcelain"]), "");
}

#[test]
fn no_weekends_keeps_weekends_empty() {
  let sandbox = tempdir();
  let mut cmd = generator_cmd(sandbox.path());
  cmd.args([
    "--now-override",
    NOW,
    "--no-weekends",
    "--days-before",
    "14",
    "--frequency",
    "100",
    "--max-commits",
    "3",
    "--seed",
    "11",
    "--user-name",
    "Fixture Bot",
    "--user-email",
    "fixture@example.com",
  ]);
  cmd.assert().success();

  let repo = work_dir(sandbox.path()).join("repository-2024-03-06-09-30-00");
  let days = git_stdout(sandbox.path(), &repo, &["log", "--format=%ad", "--date=format:%a"]);
  assert!(!days.is_empty());
  for d in days.lines() {
    assert!(d != "Sat" && d != "Sun", "weekend commit: {d}");
  }
}

#[test]
fn zero_frequency_leaves_history_empty() {
  let sandbox = tempdir();
  let mut cmd = generator_cmd(sandbox.path());
  cmd.args(["--now-override", NOW, "-db", "30", "-fr", "0"]);
  cmd.assert().success();

  let repo = work_dir(sandbox.path()).join("repository-2024-03-06-09-30-00");
  assert!(repo.join(".git").is_dir());
  assert!(files_with_extension(&repo, "txt").is_empty());
  let readme = std::fs::read_to_string(repo.join("README.md")).unwrap();
  assert!(!readme.contains("\n- "));
}

#[test]
fn same_seed_same_history() {
  let run = |sandbox: &std::path::Path| {
    let mut cmd = generator_cmd(sandbox);
    cmd.args([
      "--now-override",
      NOW,
      "-db",
      "10",
      "-fr",
      "60",
      "-mc",
      "4",
      "--seed",
      "2024",
      "-un",
      "Fixture Bot",
      "-ue",
      "fixture@example.com",
    ]);
    cmd.assert().success();
    let repo = work_dir(sandbox).join("repository-2024-03-06-09-30-00");
    git_stdout(sandbox, &repo, &["log", "--format=%ad %s", "--date=format:%Y-%m-%d %H:%M"])
  };
  let a = tempdir();
  let b = tempdir();
  assert_eq!(run(a.path()), run(b.path()));
}
