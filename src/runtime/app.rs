use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use vimrc_loader::cli::{Action, RunConfig};
use vimrc_loader::config::Settings;
use vimrc_loader::directive::interpret;
use vimrc_loader::keymap::{Keymap, Mapping};
use vimrc_loader::plugin::{PassError, PassReport, VimrcPlugin};
use vimrc_loader::source::{FsTextSource, TextSource};

#[derive(Serialize)]
struct LoadOutput<'a> {
    report: &'a PassReport,
    mappings: &'a [Mapping],
}

#[derive(Serialize)]
struct ConfigOutput<'a> {
    settings_file: Option<PathBuf>,
    settings: &'a Settings,
}

/// Run one action, returning the process exit code
pub fn run(config: RunConfig, out: &mut impl Write) -> Result<i32> {
    let settings_file = config
        .settings_file
        .clone()
        .or_else(vimrc_loader::config_paths::config_file);

    let mut settings = match &settings_file {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };

    if let Some(path) = &config.vimrc_override {
        settings.vimrc_path = path.clone();
    }

    let source = FsTextSource::new(&config.root);

    match &config.action {
        Action::Load => load(settings, source, config.json, out),
        Action::Check => check(&settings, &source, config.json, out),
        Action::SetPath(path) => {
            let file = settings_file.context("No config directory available")?;
            settings
                .set_vimrc_path(path, &file)
                .map_err(anyhow::Error::msg)?;
            writeln!(out, "vimrc path set to {}", settings.vimrc_path)?;
            Ok(0)
        }
        Action::ShowConfig => {
            let output = ConfigOutput {
                settings_file,
                settings: &settings,
            };
            if config.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
            } else {
                if let Some(file) = &output.settings_file {
                    writeln!(out, "# {}", file.display())?;
                }
                write!(out, "{}", serde_yaml::to_string(output.settings)?)?;
            }
            Ok(0)
        }
    }
}

fn load(
    settings: Settings,
    source: FsTextSource,
    json: bool,
    out: &mut impl Write,
) -> Result<i32> {
    // The in-memory keymap is always present for the CLI host
    let mut plugin = VimrcPlugin::new(Some(Keymap::new()), source, settings);

    let report = match plugin.on_load() {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("{}", e);
            writeln!(out, "{}", e.notice())?;
            return Ok(1);
        }
    };

    let mappings = plugin
        .backend()
        .map(|keymap| keymap.mappings())
        .unwrap_or_default();

    if json {
        let output = LoadOutput {
            report: &report,
            mappings,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        writeln!(out, "\" {}", report.notice())?;
        for diagnostic in report.diagnostics.iter().filter(|d| d.is_problem()) {
            writeln!(out, "\" {}", diagnostic)?;
        }
        if let Some(keymap) = plugin.backend() {
            write!(out, "{}", keymap.to_vimrc())?;
        }
    }

    Ok(0)
}

fn check(
    settings: &Settings,
    source: &FsTextSource,
    json: bool,
    out: &mut impl Write,
) -> Result<i32> {
    let text = match source.read(&settings.vimrc_path) {
        Ok(text) => text,
        Err(e) => {
            let err = PassError::from(e);
            tracing::error!("{}", err);
            writeln!(out, "{}", err.notice())?;
            return Ok(1);
        }
    };

    let result = interpret(&text);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        for diagnostic in result.problems() {
            writeln!(out, "{}", diagnostic)?;
        }
        writeln!(
            out,
            "{}: {} directives, {} skipped",
            settings.vimrc_path,
            result.requests.len(),
            result.problem_count()
        )?;
    }

    Ok(if result.problem_count() == 0 { 0 } else { 1 })
}
