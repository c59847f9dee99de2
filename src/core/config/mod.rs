//! core::config
//!
//! Defaults file discovery, tokenizing and loading.
//!
//! # Location
//!
//! Searched in order:
//! 1. The path given with `--opts-file` (relative paths resolve against the
//!    working directory); it must exist
//! 2. `.auto_tagger` in the working directory; a missing file means no
//!    defaults
//!
//! # Format
//!
//! The file holds the same flags as the command line, split on whitespace:
//!
//! ```text
//! # deploy defaults
//! --remote upstream
//! --ref-path "deploy tags"
//! --fetch-refs=false
//! ```
//!
//! Lines whose first non-blank character is `#` are comments. Each line is
//! split with shell quoting rules: single or double quotes keep whitespace
//! inside one token, and a backslash escapes the next character.
//!
//! # Example
//!
//! ```no_run
//! use auto_tagger::core::config::DefaultsFile;
//! use std::path::Path;
//!
//! let defaults = DefaultsFile::load(Path::new("/path/to/repo"), None).unwrap();
//! if let Some(path) = defaults.loaded_from() {
//!     println!("defaults from {}", path.display());
//! }
//! println!("remote: {:?}", defaults.options.remote);
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::options::{resolver, OptionError, Options};

/// File name of the per-directory defaults file.
pub const DEFAULTS_FILE_NAME: &str = ".auto_tagger";

/// A quote that is never closed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unterminated quote on line {line}")]
pub struct UnterminatedQuote {
    pub line: usize,
}

/// Errors from loading the defaults file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("defaults file '{path}' does not exist")]
    NotFound { path: PathBuf },

    #[error("failed to read defaults file '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to tokenize defaults file '{path}': {source}")]
    Tokenize {
        path: PathBuf,
        source: UnterminatedQuote,
    },

    #[error("invalid defaults file '{path}': {source}")]
    Parse { path: PathBuf, source: OptionError },
}

/// Options read from a defaults file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultsFile {
    /// Shared flags found in the file.
    pub options: Options,
    /// Path the options were read from
    path: Option<PathBuf>,
}

impl DefaultsFile {
    /// Path of the defaults file for `cwd`, honoring an explicit override.
    pub fn locate(cwd: &Path, opts_file: Option<&Path>) -> PathBuf {
        match opts_file {
            Some(path) => cwd.join(path),
            None => cwd.join(DEFAULTS_FILE_NAME),
        }
    }

    /// Load the defaults file for `cwd`.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `opts_file` does not exist, or if the
    /// file exists but cannot be read or parsed. A missing `.auto_tagger`
    /// yields empty defaults.
    pub fn load(cwd: &Path, opts_file: Option<&Path>) -> Result<Self, ConfigError> {
        let path = Self::locate(cwd, opts_file);

        if !path.exists() {
            if opts_file.is_some() {
                return Err(ConfigError::NotFound { path });
            }
            tracing::debug!(path = %path.display(), "no defaults file");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let options = Self::parse(&path, &contents)?;

        tracing::debug!(path = %path.display(), "loaded defaults file");
        Ok(Self {
            options,
            path: Some(path),
        })
    }

    /// Parse defaults file contents; `path` is only used in errors.
    pub fn parse(path: &Path, contents: &str) -> Result<Options, ConfigError> {
        let tokens = tokenize(contents).map_err(|source| ConfigError::Tokenize {
            path: path.to_path_buf(),
            source,
        })?;
        resolver::from_file(&tokens).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the path the defaults were loaded from, if any.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Split defaults file contents into tokens.
///
/// Each line is split with shell quoting rules, so quotes and backslashes
/// work as they do in `sh`.
///
/// # Errors
///
/// Returns `UnterminatedQuote` if a quote is still open at the end of a line.
pub fn tokenize(contents: &str) -> Result<Vec<String>, UnterminatedQuote> {
    let mut tokens = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        if line.trim_start().starts_with('#') {
            continue;
        }
        let words = shell_words::split(line).map_err(|_| UnterminatedQuote { line: index + 1 })?;
        tokens.extend(words);
    }

    Ok(tokens)
}
