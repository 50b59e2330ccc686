//! Errors raised while lowering an enum declaration.

use enumlower_common::diagnostics::diagnostic_codes;
use enumlower_common::{Diagnostic, Span};

/// A fatal lowering error. Processing of the offending declaration stops and
/// the error propagates to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoweringError {
    /// The enum declaration is not a direct child of a source file, a block,
    /// or an export wrapper inside one of those.
    #[error("Unexpected enum parent '{parent_kind}'.")]
    UnexpectedParent {
        parent_kind: &'static str,
        span: Span,
    },

    /// A member without an initializer follows a string-valued member.
    #[error("Enum member must have initializer.")]
    MissingInitializer { member: String, span: Span },

    /// Statements nest deeper than `limits::MAX_AST_DEPTH`.
    #[error("Statement nesting exceeds the maximum depth of {max_depth}.")]
    NestingTooDeep { max_depth: u32, span: Span },
}

impl LoweringError {
    /// Diagnostic code for this error.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            LoweringError::UnexpectedParent { .. } => diagnostic_codes::UNEXPECTED_ENUM_PARENT,
            LoweringError::MissingInitializer { .. } => {
                diagnostic_codes::ENUM_MEMBER_MUST_HAVE_INITIALIZER
            }
            LoweringError::NestingTooDeep { .. } => diagnostic_codes::STATEMENT_NESTING_TOO_DEEP,
        }
    }

    /// Source span the error points at.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            LoweringError::UnexpectedParent { span, .. }
            | LoweringError::MissingInitializer { span, .. }
            | LoweringError::NestingTooDeep { span, .. } => *span,
        }
    }

    /// Convert to a user-facing diagnostic in `file_name`.
    #[must_use]
    pub fn to_diagnostic(&self, file_name: &str) -> Diagnostic {
        let span = self.span();
        let depth;
        let args: Vec<&str> = match self {
            LoweringError::UnexpectedParent { parent_kind, .. } => vec![*parent_kind],
            LoweringError::MissingInitializer { .. } => Vec::new(),
            LoweringError::NestingTooDeep { max_depth, .. } => {
                depth = max_depth.to_string();
                vec![depth.as_str()]
            }
        };
        Diagnostic::from_code(
            file_name.to_string(),
            span.start,
            span.len(),
            self.code(),
            &args,
        )
    }
}
