//! JavaScript Transforms
//!
//! Transforms follow a two-phase approach:
//!
//! 1. **Transform Phase**: Analyze AST nodes and produce IR (Intermediate
//!    Representation) nodes that represent the lowered JavaScript constructs.
//!
//! 2. **Print Phase**: The printer walks IR trees and emits JavaScript strings.

pub mod emit_utils;
pub mod enum_es5_ir;
pub mod enum_lowering;
pub mod expression_ir;
pub mod ir;
pub mod ir_printer;

pub use enum_es5_ir::{EnumES5Transformer, LoweredEnum};
pub use ir::IRNode;
pub use ir_printer::IRPrinter;
