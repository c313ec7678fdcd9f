use assert_cmd::Command;

#[test]
fn cli_generates_man_page() {
  let mut cmd = Command::cargo_bin("git-history-generator").unwrap();
  let out = cmd.args(["--gen-man"]).output().unwrap();
  assert!(out.status.success());
  let s = String::from_utf8_lossy(&out.stdout);
  // clap_mangen emits a roff manpage starting with .TH and mentions the binary name
  assert!(s.contains(".TH"));
  assert!(s.contains("git-history-generator"));
}

#[test]
fn help_lists_history_flags() {
  let mut cmd = Command::cargo_bin("git-history-generator").unwrap();
  let out = cmd.arg("--help").output().unwrap();
  assert!(out.status.success());
  let s = String::from_utf8_lossy(&out.stdout);
  for flag in [
    "--no-weekends",
    "--max-commits",
    "--frequency",
    "--repository",
    "--days-before",
    "--days-after",
  ] {
    assert!(s.contains(flag), "help missing {flag}");
  }
}
