//! core::settings
//!
//! Effective settings and the validated command derived from [`Options`].
//!
//! # Defaults
//!
//! | setting          | default     |
//! |------------------|-------------|
//! | `date_separator` | `""`        |
//! | `fetch_refs`     | `true`      |
//! | `push_refs`      | `true`      |
//! | `remote`         | `origin`    |
//! | `ref_path`       | `auto_tags` |
//! | `stages`         | empty       |
//! | `dry_run`        | `false`     |
//! | `verbose`        | `false`     |
//! | `refs_to_keep`   | unset       |
//! | `executable`     | `git`       |
//!
//! # Offline
//!
//! The option record only stores `offline`. When present, its value is used
//! for both fetch and push, whatever `fetch_refs` and `push_refs` say: a bare
//! `--offline` stores `false` and disables both, while `--offline=true` from
//! the command line turns them back on over a defaults-file `--offline`.

use serde::Serialize;
use thiserror::Error;

use super::options::{resolver, CommandKind, Options};
use super::types::{StageName, TypeError};

/// Remote used when none is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// Ref namespace used when none is configured.
pub const DEFAULT_REF_PATH: &str = "auto_tags";

/// Git executable used when none is configured.
pub const DEFAULT_EXECUTABLE: &str = "git";

/// Errors from turning options into a runnable command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("'{command}' needs a stage, e.g. 'autotag {command} demo'")]
    MissingPositionalArgument { command: CommandKind },

    #[error(transparent)]
    InvalidStage(#[from] TypeError),

    #[error("no command was resolved")]
    NoCommand,
}

/// Settings with every default applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub date_separator: String,
    pub fetch_refs: bool,
    pub push_refs: bool,
    pub offline: bool,
    pub remote: String,
    pub ref_path: String,
    pub stages: Vec<String>,
    pub dry_run: bool,
    pub verbose: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs_to_keep: Option<u32>,
    pub executable: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

impl Settings {
    /// Apply defaults to everything `options` leaves unset.
    pub fn from_options(options: &Options) -> Self {
        let fetch_refs = options.offline.unwrap_or(options.fetch_refs.unwrap_or(true));
        let push_refs = options.offline.unwrap_or(options.push_refs.unwrap_or(true));
        Self {
            date_separator: options.date_separator.clone().unwrap_or_default(),
            fetch_refs,
            push_refs,
            offline: !fetch_refs && !push_refs,
            remote: options
                .remote
                .clone()
                .unwrap_or_else(|| DEFAULT_REMOTE.to_string()),
            ref_path: options
                .ref_path
                .clone()
                .unwrap_or_else(|| DEFAULT_REF_PATH.to_string()),
            stages: options.stages.as_deref().map(split_stages).unwrap_or_default(),
            dry_run: options.dry_run.unwrap_or(false),
            verbose: options.verbose.unwrap_or(false),
            refs_to_keep: options.refs_to_keep,
            executable: options
                .executable
                .clone()
                .unwrap_or_else(|| DEFAULT_EXECUTABLE.to_string()),
        }
    }
}

/// Split a comma-separated stage list, dropping blank entries.
pub fn split_stages(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|stage| !stage.is_empty())
        .map(str::to_string)
        .collect()
}

/// A command that touches stage tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagCommand {
    Create {
        stage: StageName,
        path: String,
        deprecated: bool,
    },
    List {
        stage: StageName,
    },
    Cleanup {
        stage: StageName,
    },
    DeleteLocally {
        stage: StageName,
    },
    DeleteOnRemote {
        stage: StageName,
    },
}

impl TagCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            TagCommand::Create { .. } => CommandKind::Create,
            TagCommand::List { .. } => CommandKind::List,
            TagCommand::Cleanup { .. } => CommandKind::Cleanup,
            TagCommand::DeleteLocally { .. } => CommandKind::DeleteLocally,
            TagCommand::DeleteOnRemote { .. } => CommandKind::DeleteOnRemote,
        }
    }

    pub fn stage(&self) -> &StageName {
        match self {
            TagCommand::Create { stage, .. }
            | TagCommand::List { stage }
            | TagCommand::Cleanup { stage }
            | TagCommand::DeleteLocally { stage }
            | TagCommand::DeleteOnRemote { stage } => stage,
        }
    }
}

/// A fully resolved, validated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help { text: String },
    Version,
    Config,
    Tag(TagCommand),
}

impl Invocation {
    /// Validate the command and its positionals.
    ///
    /// # Errors
    ///
    /// - `MissingPositionalArgument` if a tag command has no stage
    /// - `InvalidStage` if the stage cannot be a ref component
    /// - `NoCommand` if the options never resolved a command
    pub fn resolve(options: &Options) -> Result<Self, SettingsError> {
        let command = options.command.ok_or(SettingsError::NoCommand)?;

        let stage = || -> Result<StageName, SettingsError> {
            let raw = options
                .stage
                .as_deref()
                .ok_or(SettingsError::MissingPositionalArgument { command })?;
            Ok(StageName::new(raw)?)
        };

        let invocation = match command {
            CommandKind::Help => Invocation::Help {
                text: options.help_text.clone().unwrap_or_else(resolver::help_text),
            },
            CommandKind::Version => Invocation::Version,
            CommandKind::Config => Invocation::Config,
            CommandKind::Create => Invocation::Tag(TagCommand::Create {
                stage: stage()?,
                path: options.path.clone().unwrap_or_else(|| ".".to_string()),
                deprecated: options.deprecated,
            }),
            CommandKind::List => Invocation::Tag(TagCommand::List { stage: stage()? }),
            CommandKind::Cleanup => Invocation::Tag(TagCommand::Cleanup { stage: stage()? }),
            CommandKind::DeleteLocally => {
                Invocation::Tag(TagCommand::DeleteLocally { stage: stage()? })
            }
            CommandKind::DeleteOnRemote => {
                Invocation::Tag(TagCommand::DeleteOnRemote { stage: stage()? })
            }
        };
        Ok(invocation)
    }
}
