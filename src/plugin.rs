//! Host lifecycle around the interpreter
//!
//! The host calls `on_load` once at startup, `on_unload` at teardown and may
//! call `reload` for a fresh pass. A pass reads the configured directive file,
//! interprets it and applies the resulting requests to the backend in order.
//!
//! Backend presence is detected once, when the plugin is built. Without a
//! backend no pass ever runs.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::Settings;
use crate::directive::{interpret, BindingRequest, Diagnostic};
use crate::keymap::{apply_request, KeymapBackend};
use crate::source::{SourceError, TextSource};

/// Summary of one completed pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassReport {
    /// Directive file path, as configured
    pub path: String,
    /// Raw lines read from the file
    pub line_count: usize,
    /// Requests applied to the backend, in order
    pub applied: Vec<BindingRequest>,
    /// Per-line diagnostics, in file order
    pub diagnostics: Vec<Diagnostic>,
}

impl PassReport {
    /// Number of lines that were skipped
    pub fn skipped(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_problem()).count()
    }

    /// Short message for the user
    pub fn notice(&self) -> String {
        match self.skipped() {
            0 => format!("Loaded vimrc ({} mappings)", self.applied.len()),
            n => format!(
                "Loaded vimrc ({} mappings, {} lines skipped)",
                self.applied.len(),
                n
            ),
        }
    }
}

/// Errors that abort a whole pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassError {
    /// No keymap engine was detected in the host
    BackendUnavailable,
    /// The directive file could not be read
    SourceUnavailable(SourceError),
}

impl PassError {
    /// Short message for the user
    pub fn notice(&self) -> String {
        match self {
            PassError::BackendUnavailable => "Vim keymap engine not available".to_string(),
            PassError::SourceUnavailable(e) => {
                format!("Could not find the file in {}", e.path())
            }
        }
    }
}

impl std::fmt::Display for PassError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PassError::BackendUnavailable => write!(f, "Keymap backend unavailable"),
            PassError::SourceUnavailable(e) => write!(f, "Source unavailable: {}", e),
        }
    }
}

impl std::error::Error for PassError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PassError::BackendUnavailable => None,
            PassError::SourceUnavailable(e) => Some(e),
        }
    }
}

impl From<SourceError> for PassError {
    fn from(e: SourceError) -> Self {
        PassError::SourceUnavailable(e)
    }
}

/// Ties settings, a text source and an optional backend together
pub struct VimrcPlugin<B, S> {
    backend: Option<B>,
    source: S,
    settings: Settings,
    /// Where settings changes are persisted
    settings_file: Option<PathBuf>,
}

impl<B: KeymapBackend, S: TextSource> VimrcPlugin<B, S> {
    /// Build a plugin from the result of backend detection
    pub fn new(backend: Option<B>, source: S, settings: Settings) -> Self {
        if backend.is_none() {
            tracing::warn!("Keymap backend not detected, vimrc will not be applied");
        }
        Self {
            backend,
            source,
            settings,
            settings_file: None,
        }
    }

    /// Persist settings changes to `path` instead of the user config dir
    pub fn with_settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_file = Some(path.into());
        self
    }

    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run one pass: read, interpret, apply
    ///
    /// Fails without touching the backend if it is missing or the directive
    /// file cannot be read. Per-line problems never fail the pass.
    pub fn on_load(&mut self) -> Result<PassReport, PassError> {
        let backend = self.backend.as_mut().ok_or(PassError::BackendUnavailable)?;

        let path = self.settings.vimrc_path.clone();
        let text = self.source.read(&path).map_err(|e| {
            tracing::warn!("Could not read vimrc at {}: {}", path, e);
            PassError::from(e)
        })?;

        let result = interpret(&text);
        tracing::info!("Processing vimrc file {} ({} lines)", path, result.line_count);

        for diagnostic in &result.diagnostics {
            if diagnostic.is_problem() {
                tracing::warn!("Could not map {}", diagnostic);
            } else {
                tracing::debug!("Successfully mapped! {}", diagnostic.line);
            }
        }

        let applied = apply_in_order(backend, result.requests);

        let report = PassReport {
            path,
            line_count: result.line_count,
            applied,
            diagnostics: result.diagnostics,
        };
        tracing::info!("{}", report.notice());
        Ok(report)
    }

    /// Tear down every binding the backend holds
    pub fn on_unload(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            backend.clear_all();
            tracing::info!("Cleared vimrc mappings");
        }
    }

    /// Teardown followed by a fresh pass, strictly in that order
    pub fn reload(&mut self) -> Result<PassReport, PassError> {
        if self.backend.is_none() {
            return Err(PassError::BackendUnavailable);
        }
        self.on_unload();
        self.on_load()
    }

    /// Record and persist a new directive path
    ///
    /// Does not re-run the pass; call `reload` for that.
    pub fn on_settings_changed(&mut self, vimrc_path: &str) -> Result<(), String> {
        let file = match &self.settings_file {
            Some(file) => file.clone(),
            None => crate::config_paths::config_file()
                .ok_or_else(|| "No config directory available".to_string())?,
        };
        self.settings.set_vimrc_path(vimrc_path, &file)
    }
}

/// Apply requests in file order, keeping the ones the backend accepted
fn apply_in_order<B: KeymapBackend>(
    backend: &mut B,
    requests: Vec<BindingRequest>,
) -> Vec<BindingRequest> {
    requests
        .into_iter()
        .filter(|request| apply_request(&mut *backend, request))
        .collect()
}
