//! Build script for the mantis-action binary
//!
//! Embeds the git commit hash for the long version string

use std::process::Command;

/// Entry point for the build script.
fn main() {
  embed_git_hash();
  set_rerun_conditions();
}

/// Captures the short commit hash, falling back to "unknown" outside a git
/// checkout so `env!("GIT_HASH")` always resolves
fn embed_git_hash() {
  let git_hash = Command::new("git")
    .args(["rev-parse", "--short", "HEAD"])
    .output()
    .ok()
    .filter(|output| output.status.success())
    .and_then(|output| String::from_utf8(output.stdout).ok())
    .map(|hash| hash.trim().to_string())
    .filter(|hash| !hash.is_empty())
    .unwrap_or_else(|| "unknown".to_string());

  println!("cargo:rustc-env=GIT_HASH={git_hash}");
}

/// Configures conditions that trigger build script re-execution.
fn set_rerun_conditions() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=../.git/HEAD");
}
