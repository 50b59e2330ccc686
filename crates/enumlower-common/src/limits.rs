//! Centralized limits and thresholds for the enum lowering transform.
//!
//! Both limits guard recursive walks over host-provided ASTs. Exceeding one
//! never panics: the lowering pass stops descending and the evaluator reports
//! "not constant".

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum statement nesting depth visited by the lowering pass.
///
/// Statements nested deeper than this pass through unvisited, so enum
/// declarations inside them are emitted verbatim rather than lowered.
///
/// ```typescript
/// { { { { /* ... 500 levels ... */ enum E { A } } } } }
/// ```
pub const MAX_AST_DEPTH: u32 = 500;

/// Maximum expression depth for enum initializer constant folding.
///
/// An initializer nested deeper than this is treated as a runtime expression.
///
/// ```typescript
/// enum E { A = ((((((((1)))))))) /* ... hundreds of levels ... */ }
/// ```
pub const MAX_CONSTANT_EVAL_DEPTH: u32 = 256;
