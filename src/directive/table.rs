//! The frozen keyword table that drives directive classification

use std::collections::HashMap;
use std::sync::LazyLock;

use super::types::{Operation, Scope};

/// Operation and scope a keyword resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub operation: Operation,
    pub scope: Scope,
}

/// Every recognized keyword, in documentation order
const ENTRIES: &[(&str, Operation, Scope)] = &[
    ("nmap", Operation::Bind, Scope::Normal),
    ("vmap", Operation::Bind, Scope::Visual),
    ("imap", Operation::Bind, Scope::Insert),
    ("map", Operation::Bind, Scope::Default),
    ("nunmap", Operation::Unbind, Scope::Normal),
    ("vunmap", Operation::Unbind, Scope::Visual),
    ("iunmap", Operation::Unbind, Scope::Insert),
    ("unmap", Operation::Unbind, Scope::Default),
];

static TABLE: LazyLock<CommandTable> = LazyLock::new(|| CommandTable {
    entries: ENTRIES
        .iter()
        .map(|&(keyword, operation, scope)| (keyword, CommandSpec { operation, scope }))
        .collect(),
});

/// Immutable keyword → (operation, scope) map, built once per process
#[derive(Debug)]
pub struct CommandTable {
    entries: HashMap<&'static str, CommandSpec>,
}

impl CommandTable {
    /// The process-wide table
    pub fn global() -> &'static CommandTable {
        &TABLE
    }

    /// Exact, case-sensitive keyword lookup
    pub fn lookup(&self, keyword: &str) -> Option<CommandSpec> {
        self.entries.get(keyword).copied()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.entries.contains_key(keyword)
    }

    /// Recognized keywords in documentation order
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> {
        ENTRIES.iter().map(|&(keyword, _, _)| keyword)
    }

    /// The keyword that produces the given operation and scope
    pub fn keyword_for(&self, operation: Operation, scope: Scope) -> &'static str {
        ENTRIES
            .iter()
            .find(|&&(_, op, sc)| op == operation && sc == scope)
            .map(|&(keyword, _, _)| keyword)
            .unwrap_or("map")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
