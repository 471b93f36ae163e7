//! Environment variable management for testing
//!
//! This module provides utilities for overriding process environment variables
//! during testing without leaking values between tests. Tests that use it must
//! still run serially (`#[serial]`), since the environment is process-wide.

use std::env;

/// Owns a set of environment variables for the lifetime of a test.
///
/// On creation the variables are snapshotted and cleared; on drop the original
/// values are restored.
pub struct EnvVarGuard {
  /// Variable names paired with their original values, `None` when unset
  originals: Vec<(String, Option<String>)>,
}

impl EnvVarGuard {
  /// Take ownership of `names`, clearing each of them
  pub fn new(names: &[&str]) -> Self {
    // Save original environment variables
    let originals = names
      .iter()
      .map(|name| (name.to_string(), env::var(name).ok()))
      .collect::<Vec<_>>();

    for (name, _) in &originals {
      // SAFETY: callers run under `#[serial]`, so no other test reads or
      // writes the environment concurrently.
      unsafe {
        env::remove_var(name);
      }
    }

    Self { originals }
  }

  /// Set one of the owned variables
  pub fn set(&self, name: &str, value: &str) {
    self.assert_owned(name);
    // SAFETY: see `EnvVarGuard::new`.
    unsafe {
      env::set_var(name, value);
    }
  }

  /// Remove one of the owned variables
  pub fn remove(&self, name: &str) {
    self.assert_owned(name);
    // SAFETY: see `EnvVarGuard::new`.
    unsafe {
      env::remove_var(name);
    }
  }

  fn assert_owned(&self, name: &str) {
    assert!(
      self.originals.iter().any(|(owned, _)| owned == name),
      "environment variable '{name}' is not owned by this guard"
    );
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    // Restore original environment variables
    for (name, original) in &self.originals {
      match original {
        // SAFETY: see `EnvVarGuard::new`.
        Some(val) => unsafe {
          env::set_var(name, val);
        },
        // SAFETY: see `EnvVarGuard::new`.
        None => unsafe {
          env::remove_var(name);
        },
      }
    }
  }
}
