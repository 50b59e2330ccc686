//! Options controlling enum lowering.
//!
//! Options are read from the same camelCase JSON shape used by
//! `compilerOptions`; unknown keys are ignored.
//!
//! ```json
//! { "preserveConstEnums": true, "targetEs5": false }
//! ```

use enumlower_ast::VarKind;
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumLoweringOptions {
    /// Lower `const enum` declarations like regular enums instead of erasing
    /// them.
    pub preserve_const_enums: bool,
    /// Emit `var` for every enum binding, including ones inside blocks.
    pub target_es5: bool,
}

impl EnumLoweringOptions {
    /// Parse options from a JSON object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Binding keyword for an enum name introduced in a scope.
    ///
    /// Source-file scope gets `var`; nested blocks get `let` unless targeting
    /// ES5.
    #[must_use]
    pub const fn binding_kind(&self, is_source_file_scope: bool) -> VarKind {
        if is_source_file_scope || self.target_es5 {
            VarKind::Var
        } else {
            VarKind::Let
        }
    }
}

#[cfg(test)]
#[path = "../tests/options.rs"]
mod tests;
