//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Receives an already validated [`Invocation`]
//! 2. Formats and displays output
//!
//! Tag commands go through a [`TagExecutor`]; handlers never touch a
//! repository directly.

mod config_cmd;
mod tag;

pub use config_cmd::{config, render as render_config};
pub use tag::{deprecation_warning, render_plan, PlanReporter, TagExecutor};

use crate::core::settings::{Invocation, Settings};
use crate::ui::output::{self, Verbosity};
use crate::VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// State shared by every command handler.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Output verbosity
    pub verbosity: Verbosity,
    /// Defaults file the options were read from, if any
    pub defaults_path: Option<PathBuf>,
}

/// Dispatch an invocation to its handler.
pub fn dispatch(
    invocation: &Invocation,
    settings: &Settings,
    ctx: &Context,
    executor: &mut dyn TagExecutor,
) -> Result<()> {
    match invocation {
        Invocation::Help { text } => {
            output::print(text);
            Ok(())
        }
        Invocation::Version => {
            output::print(version_line());
            Ok(())
        }
        Invocation::Config => config_cmd::config(ctx, settings),
        Invocation::Tag(command) => tag::tag(ctx, command, settings, executor),
    }
}

/// Line printed by `autotag version`.
pub fn version_line() -> String {
    format!("autotag {}", VERSION)
}
