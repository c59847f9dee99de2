//! cli
//!
//! Command-line interface layer for autotag.
//!
//! # Responsibilities
//!
//! - Resolve argv and the defaults file into one option record
//! - Initialize logging once verbosity is known
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Parsing and validation live in [`crate::core`];
//! tag commands are handed to a [`commands::TagExecutor`], so nothing here
//! runs git itself.

pub mod commands;
pub mod logging;

use crate::core::config::DefaultsFile;
use crate::core::options::resolver;
use crate::core::settings::{Invocation, Settings};
use crate::ui::output::Verbosity;
use anyhow::{Context as _, Result};
use std::ffi::OsString;
use std::path::Path;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. `args` excludes the
/// program name; arguments that are not valid UTF-8 are rejected.
pub fn run<I, T>(args: I, cwd: &Path) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let command_line = resolver::from_command_line(args)?;

    let defaults = DefaultsFile::load(cwd, command_line.opts_file.as_deref())
        .context("Failed to load defaults")?;
    let options = command_line.layered_over(defaults.options.clone());

    let settings = Settings::from_options(&options);
    logging::init(settings.verbose);
    tracing::debug!(?options, "resolved options");

    let invocation = Invocation::resolve(&options)?;

    let ctx = commands::Context {
        verbosity: Verbosity::from_verbose(settings.verbose),
        defaults_path: defaults.loaded_from().map(Path::to_path_buf),
    };
    let mut executor = commands::PlanReporter::new(std::io::stdout());

    commands::dispatch(&invocation, &settings, &ctx, &mut executor)
}
