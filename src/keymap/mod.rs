//! Modal keymap backend
//!
//! This module provides:
//! - The `KeymapBackend` capability the interpreter dispatches to
//! - An in-memory `Keymap` engine implementing it, with per-mode mappings
//! - Ordered dispatch of binding requests (`apply_requests`)
//!
//! # Architecture
//!
//! ```text
//! BindingRequest → apply_request() → KeymapBackend::{bind, unbind} → Mapping
//! ```

mod backend;
#[allow(clippy::module_inception)]
mod keymap;
mod mapping;

pub use backend::{apply_request, apply_requests, KeymapBackend};
pub use keymap::{Keymap, DEFAULT_MODES};
pub use mapping::Mapping;
