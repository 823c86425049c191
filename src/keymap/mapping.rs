//! Mapping struct representing one stored lhs → rhs binding in a single mode

use serde::Serialize;

use crate::directive::{CommandTable, Mode, Operation, Scope};

/// A single key sequence mapping held by the keymap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mapping {
    /// Mode the mapping is active in
    pub mode: Mode,
    /// Trigger key sequence, kept verbatim (`jj`, `<leader>d`)
    pub lhs: String,
    /// Resulting key sequence
    pub rhs: String,
}

impl Mapping {
    pub fn new(mode: Mode, lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self {
            mode,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    /// Check if this mapping is triggered by exactly these keys
    pub fn matches(&self, mode: Mode, keys: &str) -> bool {
        self.mode == mode && self.lhs == keys
    }

    /// The directive line that recreates this mapping
    pub fn display_string(&self) -> String {
        let keyword = CommandTable::global().keyword_for(Operation::Bind, Scope::from(self.mode));
        format!("{} {} {}", keyword, self.lhs, self.rhs)
    }
}
