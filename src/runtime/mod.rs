//! Runtime module - command execution for the binary
//!
//! - `app` - runs one CLI action against the filesystem and an in-memory keymap

pub mod app;

pub use app::run;
