//! Tracing configuration for debugging enum lowering.
//!
//! Supports three output formats controlled by `ENUMLOWER_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Merge decisions per enum
//! ENUMLOWER_LOG=enumlower_emitter=debug ENUMLOWER_LOG_FORMAT=tree cargo test
//!
//! # Every resolved member value
//! ENUMLOWER_LOG="enumlower_emitter::enums=trace" cargo test
//! ```
//!
//! The subscriber is only initialised when `ENUMLOWER_LOG` (or `RUST_LOG`) is
//! set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_VAR: &str = "ENUMLOWER_LOG";
const LOG_FORMAT_VAR: &str = "ENUMLOWER_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to `Text`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var(LOG_FORMAT_VAR).unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `ENUMLOWER_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var(LOG_VAR) {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `ENUMLOWER_LOG` nor `RUST_LOG` is set. Output
/// goes to stderr so it never mixes with emitted JavaScript on stdout.
/// Calling it again after a subscriber is installed is a no-op.
pub fn init_tracing() {
    let has_own_log = std::env::var(LOG_VAR).is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    // `try_init` so a second call (tests, embedders) does not panic.
    let _ = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);

            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
}

#[cfg(test)]
#[path = "tests/tracing_config.rs"]
mod tests;
