//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;

use vimrc_loader::directive::Mode;
use vimrc_loader::keymap::KeymapBackend;
use vimrc_loader::source::{SourceError, TextSource};

/// One call received by a `RecordingBackend`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Bind {
        lhs: String,
        rhs: String,
        mode: Option<Mode>,
    },
    Unbind {
        lhs: String,
        mode: Option<Mode>,
    },
    ClearAll,
}

/// Backend that records every call in order
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<Call>,
}

impl KeymapBackend for RecordingBackend {
    fn bind(&mut self, lhs: &str, rhs: &str, mode: Option<Mode>) {
        self.calls.push(Call::Bind {
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
            mode,
        });
    }

    fn unbind(&mut self, lhs: &str, mode: Option<Mode>) {
        self.calls.push(Call::Unbind {
            lhs: lhs.to_string(),
            mode,
        });
    }

    fn clear_all(&mut self) {
        self.calls.push(Call::ClearAll);
    }
}

pub fn bind(lhs: &str, rhs: &str, mode: Option<Mode>) -> Call {
    Call::Bind {
        lhs: lhs.to_string(),
        rhs: rhs.to_string(),
        mode,
    }
}

pub fn unbind(lhs: &str, mode: Option<Mode>) -> Call {
    Call::Unbind {
        lhs: lhs.to_string(),
        mode,
    }
}

/// In-memory text source that counts reads
#[derive(Debug, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
    reads: Cell<usize>,
}

impl MemorySource {
    pub fn with_file(path: &str, text: &str) -> Self {
        let mut source = Self::default();
        source.files.insert(path.to_string(), text.to_string());
        source
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl TextSource for MemorySource {
    fn read(&self, path: &str) -> Result<String, SourceError> {
        self.reads.set(self.reads.get() + 1);
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(path.to_string()))
    }
}
