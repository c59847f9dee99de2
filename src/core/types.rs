//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`StageName`] - Validated stage name, usable as one git ref component
//!
//! # Validation
//!
//! These types enforce validity at construction time. A stage name ends up
//! inside a ref such as `refs/auto_tags/demo/...`, so it must be a valid
//! single component of a git refname.
//!
//! # Examples
//!
//! ```
//! use auto_tagger::core::types::StageName;
//!
//! let stage = StageName::new("demo").unwrap();
//! assert_eq!(stage.as_str(), "demo");
//!
//! assert!(StageName::new("ci/nightly").is_err());
//! assert!(StageName::new("--dry-run").is_err());
//! ```

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid stage name '{name}': {reason}")]
    InvalidStageName { name: String, reason: String },
}

/// A validated stage name.
///
/// Stage names follow git's rules for a single refname component
/// (see `git check-ref-format`):
/// - Cannot be empty
/// - Cannot start with `.` or `-`
/// - Cannot end with `.lock`
/// - Cannot contain `/`, `..`, `@{`, whitespace, or ASCII control characters
/// - Cannot contain `~`, `^`, `:`, `\`, `?`, `*`, `[`
/// - Cannot be exactly `@`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct StageName(String);

impl StageName {
    /// Create a new validated stage name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidStageName` if the name cannot be a ref component.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        match Self::validate(&name) {
            Ok(()) => Ok(Self(name)),
            Err(reason) => Err(TypeError::InvalidStageName {
                name,
                reason: reason.to_string(),
            }),
        }
    }

    fn validate(name: &str) -> Result<(), &'static str> {
        if name.is_empty() {
            return Err("stage name cannot be empty");
        }
        if name == "@" {
            return Err("stage name cannot be '@'");
        }
        if name.starts_with('.') {
            return Err("stage name cannot start with '.'");
        }
        if name.starts_with('-') {
            return Err("stage name cannot start with '-'");
        }
        if name.ends_with(".lock") {
            return Err("stage name cannot end with '.lock'");
        }
        if name.contains("..") {
            return Err("stage name cannot contain '..'");
        }
        if name.contains("@{") {
            return Err("stage name cannot contain '@{'");
        }
        if name.contains('/') {
            return Err("stage name cannot contain '/'");
        }

        const INVALID_CHARS: [char; 7] = ['~', '^', ':', '\\', '?', '*', '['];
        if name.contains(&INVALID_CHARS[..]) {
            return Err("stage name cannot contain any of '~^:\\?*['");
        }
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err("stage name cannot contain whitespace or control characters");
        }

        Ok(())
    }

    /// Get the stage name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<StageName> for String {
    fn from(stage: StageName) -> Self {
        stage.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_stage_names() {
        assert!(StageName::new("demo").is_ok());
        assert!(StageName::new("ci").is_ok());
        assert!(StageName::new("production").is_ok());
        assert!(StageName::new("Staging-2").is_ok());
        assert!(StageName::new("eu_west.1").is_ok());
        assert!(StageName::new("user@box").is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        assert!(StageName::new("").is_err());
    }

    #[test]
    fn leading_dot_or_dash_rejected() {
        assert!(StageName::new(".hidden").is_err());
        assert!(StageName::new("-x").is_err());
    }

    #[test]
    fn slash_rejected() {
        assert!(StageName::new("ci/nightly").is_err());
    }

    #[test]
    fn lock_suffix_rejected() {
        assert!(StageName::new("demo.lock").is_err());
    }

    #[test]
    fn ref_syntax_rejected() {
        assert!(StageName::new("a..b").is_err());
        assert!(StageName::new("a@{1}").is_err());
        assert!(StageName::new("@").is_err());
    }

    #[test]
    fn special_chars_rejected() {
        for name in ["has space", "a~b", "a^b", "a:b", "a\\b", "a?b", "a*b", "a[b", "a\tb"] {
            assert!(StageName::new(name).is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn error_names_the_stage() {
        let err = StageName::new("ci/nightly").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid stage name 'ci/nightly': stage name cannot contain '/'"
        );
    }
}
