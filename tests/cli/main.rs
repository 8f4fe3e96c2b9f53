//! CLI integration tests for mdabbr.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (parse, html, format, lint)
//! - Stdin/stdout handling
//! - Exit codes
//! - Config discovery

mod common;
mod format;
mod html;
mod lint;
mod parse;
