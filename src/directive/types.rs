//! Core types for the directive language: Operation, Scope, Mode, Directive, BindingRequest

use std::fmt;

use serde::Serialize;

/// What a directive does to the keymap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Bind,
    Unbind,
}

impl Operation {
    /// Number of operands a directive with this operation takes
    pub const fn arity(self) -> usize {
        match self {
            Operation::Bind => 2,
            Operation::Unbind => 1,
        }
    }
}

/// An explicit editing mode understood by the keymap backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Normal,
    Visual,
    Insert,
}

impl Mode {
    /// The scope token handed to the backend
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Visual => "visual",
            Mode::Insert => "insert",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a binding applies
///
/// `Default` is a sentinel: it means "whatever modes the backend treats as
/// default" and must reach the backend as a call without a mode, never as a
/// literal scope token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Normal,
    Visual,
    Insert,
    Default,
}

impl Scope {
    /// The explicit mode for this scope, or `None` for the default scope
    pub const fn mode(self) -> Option<Mode> {
        match self {
            Scope::Normal => Some(Mode::Normal),
            Scope::Visual => Some(Mode::Visual),
            Scope::Insert => Some(Mode::Insert),
            Scope::Default => None,
        }
    }
}

impl From<Mode> for Scope {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Normal => Scope::Normal,
            Mode::Visual => Scope::Visual,
            Mode::Insert => Scope::Insert,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode() {
            Some(mode) => mode.fmt(f),
            None => f.write_str("default"),
        }
    }
}

/// One tokenized, non-blank, non-comment line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    pub keyword: &'a str,
    pub operands: Vec<&'a str>,
}

/// A validated bind or unbind instruction, ready for the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingRequest {
    pub operation: Operation,
    pub scope: Scope,
    pub lhs: String,
    /// Present for binds, absent for unbinds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhs: Option<String>,
}

impl BindingRequest {
    pub fn bind(scope: Scope, lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self {
            operation: Operation::Bind,
            scope,
            lhs: lhs.into(),
            rhs: Some(rhs.into()),
        }
    }

    pub fn unbind(scope: Scope, lhs: impl Into<String>) -> Self {
        Self {
            operation: Operation::Unbind,
            scope,
            lhs: lhs.into(),
            rhs: None,
        }
    }
}

impl fmt::Display for BindingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.operation, &self.rhs) {
            (Operation::Bind, Some(rhs)) => {
                write!(f, "bind {} -> {} ({})", self.lhs, rhs, self.scope)
            }
            _ => write!(f, "unbind {} ({})", self.lhs, self.scope),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scope_has_no_mode() {
        assert_eq!(Scope::Default.mode(), None);
        assert_eq!(Scope::Normal.mode(), Some(Mode::Normal));
        assert_eq!(Scope::Insert.mode(), Some(Mode::Insert));
    }

    #[test]
    fn test_mode_tokens_are_non_empty() {
        for mode in [Mode::Normal, Mode::Visual, Mode::Insert] {
            assert!(!mode.as_str().is_empty());
            assert_eq!(Scope::from(mode).mode(), Some(mode));
        }
    }

    #[test]
    fn test_unbind_request_has_no_rhs() {
        let request = BindingRequest::unbind(Scope::Default, "jj");
        assert_eq!(request.operation, Operation::Unbind);
        assert!(request.rhs.is_none());
        assert_eq!(request.to_string(), "unbind jj (default)");
    }
}
