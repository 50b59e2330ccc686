//! enumlower: lowering of TypeScript enum declarations to JavaScript.
//!
//! ```typescript
//! enum Color { Red, Green = "g" }
//! ```
//!
//! lowers to
//!
//! ```javascript
//! var Color;
//! (function (Color) {
//!     Color[Color["Red"] = 0] = "Red";
//!     Color["Green"] = "g";
//! })(Color || (Color = {}));
//! ```
//!
//! Repeated declarations of one name in a scope share the binding and the
//! backing object. The heavy lifting lives in the workspace crates; this crate
//! is the entry point and owns tracing setup.

pub use enumlower_ast as ast;
pub use enumlower_common as common;
pub use enumlower_emitter as emitter;

pub use enumlower_ast::{NodeArena, NodeIndex};
pub use enumlower_common::{Diagnostic, DiagnosticCategory};
pub use enumlower_emitter::{
    EnumLoweringOptions, LoweredProgram, LoweringError, LoweringPass, ScopeContext,
};

pub mod tracing_config;

use tracing::debug;

/// Lower every enum declaration in `root` and print the result.
///
/// The first lowering error is returned as a diagnostic against the arena's
/// file name.
pub fn lower_source_file(
    arena: &NodeArena,
    root: NodeIndex,
    options: &EnumLoweringOptions,
) -> Result<String, Diagnostic> {
    let program = LoweringPass::new(arena, options)
        .run(root)
        .map_err(|err| {
            debug!(code = err.code(), error = %err, "enum lowering failed");
            err.to_diagnostic(arena.file_name())
        })?;
    Ok(program.to_javascript())
}

/// Like [`lower_source_file`], with options given as a JSON compiler-options
/// object. Returns `{"output": ..., "diagnostics": [...]}`.
///
/// Invalid options JSON is an error; lowering errors are reported in
/// `diagnostics` with a `null` output.
pub fn lower_source_file_json(
    arena: &NodeArena,
    root: NodeIndex,
    options_json: &str,
) -> Result<String, serde_json::Error> {
    let options = EnumLoweringOptions::from_json(options_json)?;
    let result = match lower_source_file(arena, root, &options) {
        Ok(output) => serde_json::json!({
            "output": output,
            "diagnostics": [],
        }),
        Err(diagnostic) => serde_json::json!({
            "output": null,
            "diagnostics": [diagnostic],
        }),
    };
    serde_json::to_string(&result)
}
