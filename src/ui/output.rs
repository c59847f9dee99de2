//! ui::output
//!
//! Results go to stdout. Diagnostics go to stderr as `label: message`
//! lines; `debug:` lines only appear with `--verbose`.

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Normal,
    /// Set by `--verbose`
    Debug,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Format a stderr diagnostic.
pub fn labelled(label: &str, message: impl Display) -> String {
    format!("{label}: {message}")
}

/// Print a result line to stdout.
pub fn print(message: impl Display) {
    println!("{message}");
}

pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("{}", labelled("debug", message));
    }
}

pub fn warn(message: impl Display) {
    eprintln!("{}", labelled("warning", message));
}

pub fn error(message: impl Display) {
    eprintln!("{}", labelled("error", message));
}

/// Follow-up advice printed after an error.
pub fn hint(message: impl Display) {
    eprintln!("{}", labelled("hint", message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_verbose() {
        assert_eq!(Verbosity::from_verbose(true), Verbosity::Debug);
        assert_eq!(Verbosity::from_verbose(false), Verbosity::Normal);
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn diagnostics_carry_their_label() {
        assert_eq!(labelled("warning", "stage is deprecated"), "warning: stage is deprecated");
        assert_eq!(labelled("debug", 3), "debug: 3");
    }
}
