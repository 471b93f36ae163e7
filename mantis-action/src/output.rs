//! # Workflow Output
//!
//! Workflow command lines written to stdout and coloured diagnostics written
//! to stderr.

use std::io::{self, Write};

use owo_colors::OwoColorize;

/// Write a `::set-output` workflow command for `name`
pub fn set_output<W: Write>(writer: &mut W, name: &str, value: impl std::fmt::Display) -> io::Result<()> {
  writeln!(writer, "::set-output name={name}::{value}")?;
  writer.flush()
}

/// Print an error message
#[allow(clippy::print_stderr)]
pub fn print_error(message: &str) {
  eprintln!("{} {}", "✗".red().bold(), message);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_set_output_line() {
    let mut buffer = Vec::new();

    set_output(&mut buffer, "issue-id", 42).unwrap();

    assert_eq!(String::from_utf8(buffer).unwrap(), "::set-output name=issue-id::42\n");
  }

  #[test]
  fn test_set_output_string_value() {
    let mut buffer = Vec::new();

    set_output(&mut buffer, "issue-id", "0042").unwrap();

    assert_eq!(String::from_utf8(buffer).unwrap(), "::set-output name=issue-id::0042\n");
  }
}
