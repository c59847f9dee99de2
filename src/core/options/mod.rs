//! core::options
//!
//! The option record produced by parsing and the two entry points that fill it.
//!
//! # Overview
//!
//! Options reach autotag from two places:
//! - **Defaults file**: `.auto_tagger` in the working directory (or the file
//!   named by `--opts-file`), parsed with [`resolver::from_file`]
//! - **Command line**: parsed with [`resolver::from_command_line`], which also
//!   classifies the positional tokens into a [`CommandKind`]
//!
//! Both entry points share the flag table in [`grammar`].
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Defaults file
//! 2. Command line
//! 3. Built-in defaults for anything still unset (see [`crate::core::settings`])
//!
//! # Example
//!
//! ```
//! use auto_tagger::core::options::{resolver, CommandKind};
//!
//! let defaults = resolver::from_file(&["--remote", "upstream"]).unwrap();
//! let cli = resolver::from_command_line(&["create", "demo", "--dry-run"]).unwrap();
//! let options = cli.layered_over(defaults);
//!
//! assert_eq!(options.command, Some(CommandKind::Create));
//! assert_eq!(options.remote.as_deref(), Some("upstream"));
//! assert_eq!(options.dry_run, Some(true));
//! ```

pub mod grammar;
pub mod resolver;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from parsing an argument vector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("unrecognized option '{0}'")]
    UnrecognizedOption(String),

    #[error("invalid value '{value}' for option '{flag}'")]
    MalformedOptionValue { flag: String, value: String },

    #[error("option '{0}' requires a value")]
    MissingOptionValue(String),

    #[error("arguments must be valid UTF-8")]
    InvalidUnicode,

    #[error("invalid argument '{arg}': {reason}")]
    Rejected { arg: String, reason: String },
}

/// The commands autotag knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Config,
    Version,
    Help,
    Cleanup,
    DeleteLocally,
    DeleteOnRemote,
    List,
    Create,
}

impl CommandKind {
    /// Every command, in the order they are documented.
    pub const ALL: [CommandKind; 8] = [
        CommandKind::Help,
        CommandKind::Version,
        CommandKind::Config,
        CommandKind::Create,
        CommandKind::List,
        CommandKind::Cleanup,
        CommandKind::DeleteLocally,
        CommandKind::DeleteOnRemote,
    ];

    /// Match a positional command word, ignoring case.
    pub fn from_word(word: &str) -> Option<Self> {
        let word = word.to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == word)
    }

    /// The word used to invoke this command.
    pub fn as_str(self) -> &'static str {
        match self {
            CommandKind::Config => "config",
            CommandKind::Version => "version",
            CommandKind::Help => "help",
            CommandKind::Cleanup => "cleanup",
            CommandKind::DeleteLocally => "delete_locally",
            CommandKind::DeleteOnRemote => "delete_on_remote",
            CommandKind::List => "list",
            CommandKind::Create => "create",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options collected from one argument vector.
///
/// A `None` field was not given; consumers apply their own default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Separator between the date parts of a ref
    pub date_separator: Option<String>,
    /// Fetch tags before creating one
    pub fetch_refs: Option<bool>,
    /// Push tags after creating one
    pub push_refs: Option<bool>,
    /// Git remote name
    pub remote: Option<String>,
    /// Namespace the stage refs live under
    pub ref_path: Option<String>,
    /// Comma-separated stage list, split by the consumer
    pub stages: Option<String>,
    /// Disable fetch and push
    pub offline: Option<bool>,
    /// Log commands instead of running them
    pub dry_run: Option<bool>,
    /// Log every command
    pub verbose: Option<bool>,
    /// Refs to keep per stage during cleanup
    pub refs_to_keep: Option<u32>,
    /// Path to the git executable
    pub executable: Option<String>,

    /// Defaults file named on the command line
    pub opts_file: Option<PathBuf>,
    /// Help was requested
    pub show_help: bool,
    /// Version was requested
    pub show_version: bool,
    /// Usage text, captured when help is the resolved command
    pub help_text: Option<String>,
    /// Resolved command
    pub command: Option<CommandKind>,
    /// Stage positional
    pub stage: Option<String>,
    /// Repository path positional
    pub path: Option<String>,
    /// Resolved from the shorthand that omits `create`
    pub deprecated: bool,
}

impl Options {
    /// Layer these options over `base`.
    ///
    /// Shared flags set here win; flags unset here fall back to `base`.
    /// Command, positionals and help/version state always come from `self`,
    /// since a defaults file never carries them.
    pub fn layered_over(self, base: Options) -> Options {
        Options {
            date_separator: self.date_separator.or(base.date_separator),
            fetch_refs: self.fetch_refs.or(base.fetch_refs),
            push_refs: self.push_refs.or(base.push_refs),
            remote: self.remote.or(base.remote),
            ref_path: self.ref_path.or(base.ref_path),
            stages: self.stages.or(base.stages),
            offline: self.offline.or(base.offline),
            dry_run: self.dry_run.or(base.dry_run),
            verbose: self.verbose.or(base.verbose),
            refs_to_keep: self.refs_to_keep.or(base.refs_to_keep),
            executable: self.executable.or(base.executable),
            ..self
        }
    }
}
