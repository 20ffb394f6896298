//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by
//! main.rs. Each handler returns the process exit code.

mod search;

pub use search::{run_search, SearchConfig};

use std::path::Path;

/// Process exit codes
pub mod exit_codes {
    /// Search completed
    pub const SUCCESS: i32 = 0;
    /// Keyword search returned no results
    pub const NO_MATCHES: i32 = 1;
    /// Assessed risk is critical (with --fail-on-risk)
    pub const CRITICAL_RISK: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Write report content to a file, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> std::io::Result<()> {
    match path {
        Some(path) => std::fs::write(path, content),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
