use test_support::{generator_cmd, git_stdout, init_bare_remote, tempdir, work_dir};

#[test]
fn pushes_history_to_remote_and_names_directory_after_it() {
  let sandbox = tempdir();
  let remote = init_bare_remote(sandbox.path(), "myproj.git");

  let mut cmd = generator_cmd(sandbox.path());
  cmd.args([
    "--now-override",
    "2024-03-06T09:30:00",
    "-r",
    remote.to_str().unwrap(),
    "-db",
    "3",
    "-fr",
    "100",
    "-mc",
    "2",
    "-un",
    "Fixture Bot",
    "-ue",
    "fixture@example.com",
  ]);
  let out = cmd.output().unwrap();
  assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
  assert!(String::from_utf8_lossy(&out.stderr).contains("Pushing to remote repository..."));

  let repo = work_dir(sandbox.path()).join("myproj");
  assert!(repo.join(".git").is_dir());

  let local = git_stdout(sandbox.path(), &repo, &["rev-parse", "HEAD"]);
  let pushed = git_stdout(sandbox.path(), &remote, &["rev-parse", "main"]);
  assert_eq!(local, pushed);
  assert_eq!(
    git_stdout(sandbox.path(), &repo, &["rev-parse", "--abbrev-ref", "main@{upstream}"]),
    "origin/main"
  );
}

#[test]
fn unreachable_remote_fails_after_generation() {
  let sandbox = tempdir();
  let missing = sandbox.path().join("nowhere").join("ghost.git");

  let mut cmd = generator_cmd(sandbox.path());
  cmd.args([
    "--now-override",
    "2024-03-06T09:30:00",
    "-r",
    missing.to_str().unwrap(),
    "-db",
    "1",
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
  assert_eq!(out.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&out.stderr).contains("Command failed: git push -u origin main"));

  // Commits made before the failure stay in place.
  let repo = work_dir(sandbox.path()).join("ghost");
  assert_eq!(git_stdout(sandbox.path(), &repo, &["rev-list", "--count", "HEAD"]), "1");
}
