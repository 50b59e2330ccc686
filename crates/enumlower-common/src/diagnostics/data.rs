use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_messages {
    pub const ENUM_MEMBER_MUST_HAVE_INITIALIZER: &str = "Enum member must have initializer.";
    pub const UNEXPECTED_ENUM_PARENT: &str = "Unexpected enum parent '{0}'.";
    pub const STATEMENT_NESTING_TOO_DEEP: &str =
        "Statement nesting exceeds the maximum depth of {0}.";
}

pub mod diagnostic_codes {
    pub const ENUM_MEMBER_MUST_HAVE_INITIALIZER: u32 = 1061;
    pub const UNEXPECTED_ENUM_PARENT: u32 = 18061;
    pub const STATEMENT_NESTING_TOO_DEEP: u32 = 18062;
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::ENUM_MEMBER_MUST_HAVE_INITIALIZER,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ENUM_MEMBER_MUST_HAVE_INITIALIZER,
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNEXPECTED_ENUM_PARENT,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::UNEXPECTED_ENUM_PARENT,
    },
    DiagnosticMessage {
        code: diagnostic_codes::STATEMENT_NESTING_TOO_DEEP,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::STATEMENT_NESTING_TOO_DEEP,
    },
];
