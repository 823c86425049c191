//! In-memory modal keymap engine

use super::backend::KeymapBackend;
use super::mapping::Mapping;
use crate::directive::Mode;

/// Modes a scope-less `map`/`unmap` applies to unless configured otherwise
pub const DEFAULT_MODES: [Mode; 2] = [Mode::Normal, Mode::Visual];

/// The keymap stores mappings per mode and handles lookup
#[derive(Debug, Clone)]
pub struct Keymap {
    /// All mappings, in the order they were first bound
    mappings: Vec<Mapping>,
    /// Modes targeted by bind/unbind calls without an explicit mode
    default_modes: Vec<Mode>,
}

impl Keymap {
    /// Create an empty keymap with the standard default modes
    pub fn new() -> Self {
        Self::with_default_modes(DEFAULT_MODES.to_vec())
    }

    /// Create an empty keymap whose scope-less calls target `modes`
    pub fn with_default_modes(modes: Vec<Mode>) -> Self {
        Self {
            mappings: Vec::new(),
            default_modes: modes,
        }
    }

    pub fn default_modes(&self) -> &[Mode] {
        &self.default_modes
    }

    fn target_modes(&self, mode: Option<Mode>) -> Vec<Mode> {
        match mode {
            Some(mode) => vec![mode],
            None => self.default_modes.clone(),
        }
    }

    /// Add or replace a mapping in one mode
    pub fn insert(&mut self, mapping: Mapping) {
        let existing = self
            .mappings
            .iter()
            .position(|m| m.matches(mapping.mode, &mapping.lhs));

        match existing {
            Some(idx) => self.mappings[idx] = mapping,
            None => self.mappings.push(mapping),
        }
    }

    /// Remove a mapping from one mode, returning whether anything was removed
    pub fn remove(&mut self, mode: Mode, lhs: &str) -> bool {
        let before = self.mappings.len();
        self.mappings.retain(|m| !m.matches(mode, lhs));
        self.mappings.len() != before
    }

    /// Look up the exact trigger in a mode
    pub fn lookup(&self, mode: Mode, lhs: &str) -> Option<&str> {
        self.mappings
            .iter()
            .find(|m| m.matches(mode, lhs))
            .map(|m| m.rhs.as_str())
    }

    /// Get all mappings
    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Dump the keymap as directive lines, grouped by mode
    pub fn to_vimrc(&self) -> String {
        let mut sorted: Vec<&Mapping> = self.mappings.iter().collect();
        sorted.sort_by_key(|m| m.mode);

        sorted
            .iter()
            .map(|m| m.display_string() + "\n")
            .collect()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

impl KeymapBackend for Keymap {
    fn bind(&mut self, lhs: &str, rhs: &str, mode: Option<Mode>) {
        for mode in self.target_modes(mode) {
            self.insert(Mapping::new(mode, lhs, rhs));
        }
    }

    fn unbind(&mut self, lhs: &str, mode: Option<Mode>) {
        for mode in self.target_modes(mode) {
            self.remove(mode, lhs);
        }
    }

    fn clear_all(&mut self) {
        self.mappings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_mode_bind_and_lookup() {
        let mut keymap = Keymap::new();
        keymap.bind("jk", "<Esc>", Some(Mode::Insert));

        assert_eq!(keymap.lookup(Mode::Insert, "jk"), Some("<Esc>"));
        assert_eq!(keymap.lookup(Mode::Normal, "jk"), None);
    }

    #[test]
    fn test_rebind_replaces_in_place() {
        let mut keymap = Keymap::new();
        keymap.bind("a", "1", Some(Mode::Normal));
        keymap.bind("b", "2", Some(Mode::Normal));
        keymap.bind("a", "3", Some(Mode::Normal));

        assert_eq!(keymap.len(), 2);
        assert_eq!(keymap.mappings()[0].rhs, "3");
    }

    #[test]
    fn test_default_scope_targets_default_modes() {
        let mut keymap = Keymap::new();
        keymap.bind("Y", "y$", None);

        assert_eq!(keymap.lookup(Mode::Normal, "Y"), Some("y$"));
        assert_eq!(keymap.lookup(Mode::Visual, "Y"), Some("y$"));
        assert_eq!(keymap.lookup(Mode::Insert, "Y"), None);

        keymap.unbind("Y", None);
        assert!(keymap.is_empty());
    }

    #[test]
    fn test_custom_default_modes() {
        let mut keymap = Keymap::with_default_modes(vec![Mode::Insert]);
        keymap.bind("jk", "<Esc>", None);

        assert_eq!(keymap.default_modes(), &[Mode::Insert]);
        assert_eq!(keymap.lookup(Mode::Insert, "jk"), Some("<Esc>"));
        assert_eq!(keymap.len(), 1);
    }

    #[test]
    fn test_unbind_missing_is_noop() {
        let mut keymap = Keymap::new();
        keymap.bind("a", "b", Some(Mode::Normal));
        keymap.unbind("zz", Some(Mode::Normal));
        keymap.unbind("a", Some(Mode::Visual));

        assert_eq!(keymap.len(), 1);
    }

    #[test]
    fn test_lookup_is_exact_per_mode() {
        let mut keymap = Keymap::new();
        keymap.bind("j", "gj", Some(Mode::Normal));
        keymap.bind("jj", "<Down>", Some(Mode::Normal));

        assert_eq!(keymap.lookup(Mode::Normal, "j"), Some("gj"));
        assert_eq!(keymap.lookup(Mode::Normal, "jj"), Some("<Down>"));
        assert_eq!(keymap.lookup(Mode::Normal, "x"), None);
        assert_eq!(keymap.lookup(Mode::Visual, "j"), None);
    }

    #[test]
    fn test_clear_all() {
        let mut keymap = Keymap::new();
        keymap.bind("a", "b", None);
        keymap.clear_all();

        assert!(keymap.is_empty());
    }

    #[test]
    fn test_to_vimrc_groups_by_mode() {
        let mut keymap = Keymap::new();
        keymap.bind("jk", "<Esc>", Some(Mode::Insert));
        keymap.bind("jj", "<Down>", Some(Mode::Normal));

        assert_eq!(keymap.to_vimrc(), "nmap jj <Down>\nimap jk <Esc>\n");
    }
}
