//! Enum Support Module
//!
//! Value resolution for enum members:
//!
//! - Numeric enums with auto-incrementing values
//! - String enums
//! - Constant folding of member initializers, including references to
//!   earlier members of the same enum
//! - Runtime fallbacks for members whose value is only known at execution
//!
//! # Example
//!
//! ```typescript
//! enum Flags { None, Read = 1 << 0, Write = 1 << 1, ReadWrite = Read | Write }
//! // None = 0, Read = 1, Write = 2, ReadWrite = 3
//!
//! enum Mixed { A = 1, B = compute(), C }
//! // A = 1, B = compute(), C = 1 + Mixed["B"] at runtime
//! ```

pub mod evaluator;

pub use evaluator::{EnumEvaluator, EnumValue, ResolvedMember, ResolvedValue};
