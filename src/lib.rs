//! vimrc-loader - keybinding directives for modal keymaps
//!
//! This crate reads vimrc-style `map`/`unmap` directives and applies them, in
//! file order, to a modal keymap backend.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod directive;
pub mod keymap;
pub mod plugin;
pub mod source;
pub mod tracing;

// Re-export commonly used types
pub use config::Settings;
pub use directive::{interpret, BindingRequest, Interpretation};
pub use keymap::{Keymap, KeymapBackend};
pub use plugin::{PassError, PassReport, VimrcPlugin};
