// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Fixed message/module catalogs and the per-commit record written to disk and git
// role: model/types
// outputs: CommitRecord with file path, file contents, README line and git date strings
// invariants: message text is identical across file contents, README line, and commit message; file name is minute-resolution
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::NaiveDateTime;

pub const MODULE_PLACEHOLDER: &str = "{module}";

pub const MESSAGE_TEMPLATES: [&str; 10] = [
  "Fix bug in {module}",
  "Update documentation for {module}",
  "Add new feature to {module}",
  "Refactor {module} code",
  "Optimize {module} performance",
  "Implement {module} functionality",
  "Add tests for {module}",
  "Improve error handling in {module}",
  "Update dependencies for {module}",
  "Fix security issue in {module}",
];

pub const MODULES: [&str; 10] = [
  "core", "api", "database", "auth", "utils", "frontend", "backend", "tests", "docs", "config",
];

pub fn render_message(template: &str, module: &str) -> String {
  template.replace(MODULE_PLACEHOLDER, module)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
  pub message: String,
  pub authored_at: NaiveDateTime,
  /// Relative to the workspace root, `/`-separated.
  pub file_path: String,
  pub readme_line: String,
}

impl CommitRecord {
  pub fn new(message: String, file_module: &str, authored_at: NaiveDateTime) -> Self {
    let file_path = format!("src/{}/file_{}.txt", file_module, authored_at.format("%Y%m%d_%H%M"));
    let readme_line = format!("- {} ({})\n\n", message, authored_at.format("%Y-%m-%d %H:%M"));
    Self { message, authored_at, file_path, readme_line }
  }

  pub fn file_contents(&self) -> String {
    format!("{}\n\nDate: {}", self.message, self.git_date())
  }

  /// Timestamp handed to `git commit --date`.
  pub fn git_date(&self) -> String {
    self.authored_at.format("%Y-%m-%d %H:%M:%S").to_string()
  }
}
