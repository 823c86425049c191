//! Directive language interpreter
//!
//! Reads vimrc-style keybinding directives and turns them into an ordered
//! list of bind/unbind requests for a keymap backend.
//!
//! # Pipeline
//!
//! ```text
//! text → lines → parse_line() → CommandTable::lookup() → BindingRequest
//! ```
//!
//! # Example
//!
//! ```
//! use vimrc_loader::directive::{interpret, BindingRequest, Scope};
//!
//! let result = interpret("\" comment\nnmap jj <Down>\nunmap jj\n");
//! assert_eq!(
//!     result.requests,
//!     vec![
//!         BindingRequest::bind(Scope::Normal, "jj", "<Down>"),
//!         BindingRequest::unbind(Scope::Default, "jj"),
//!     ]
//! );
//! ```

mod interpret;
mod parser;
mod table;
mod types;

pub use interpret::{interpret, Diagnostic, DiagnosticKind, Interpretation};
pub use parser::{parse_line, Line, COMMENT_MARKER};
pub use table::{CommandSpec, CommandTable};
pub use types::{BindingRequest, Directive, Mode, Operation, Scope};
