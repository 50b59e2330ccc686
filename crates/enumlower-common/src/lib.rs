//! Common types and utilities for the enumlower workspace.
//!
//! This crate provides foundational types used across all enumlower crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, message lookup)
//! - Source spans (`Span`)
//! - Recursion limits shared by the lowering pass and the constant evaluator

// Diagnostic types and the message table
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticRelatedInformation};

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Centralized limits and thresholds
pub mod limits;
