//! Enum declaration lowering for the enumlower workspace.
//!
//! The crate turns enum declarations into runtime JavaScript in two stages:
//!
//! 1. The **value resolver** ([`enums::EnumEvaluator`]) folds member
//!    initializers to constants where possible and keeps the rest as runtime
//!    expressions.
//! 2. The **emission and merge planner**
//!    ([`transforms::enum_lowering::transform_enum_declaration`]) builds the
//!    fill wrapper and decides whether the declaration introduces a binding
//!    or reuses one emitted by an earlier declaration of the same name.
//!
//! [`lowering_pass::LoweringPass`] drives both over a whole source file and
//! [`transforms::ir_printer::IRPrinter`] prints the result.

pub mod enums;
pub mod error;
pub mod lowering_pass;
pub mod options;
pub mod transform_context;
pub mod transforms;

pub use error::LoweringError;
pub use lowering_pass::{LoweredProgram, LoweringPass};
pub use options::EnumLoweringOptions;
pub use transform_context::{DeclaredBinding, ScopeContext};
