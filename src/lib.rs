//! auto_tagger - Stage tags for git repositories
//!
//! autotag creates, lists and cleans up date-stamped tags under a ref
//! namespace (`refs/auto_tags/<stage>/...` by default), one series per
//! deployment stage.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (resolves args, dispatches)
//! - [`core`] - Option grammar, defaults file, settings and domain types
//! - [`ui`] - User-facing output
//!
//! # Option Resolution
//!
//! Options come from two sources. The command line is parsed with the full
//! grammar; the defaults file (`.auto_tagger`) only accepts the shared
//! flags. Values given on the command line win over the defaults file, and
//! built-in defaults fill whatever neither source sets.

pub mod cli;
pub mod core;
pub mod ui;

/// Version reported by `autotag version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
