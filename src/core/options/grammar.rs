//! core::options::grammar
//!
//! Flags shared by the command line and the defaults file, as clap derive.
//!
//! # Design
//!
//! [`SharedArgs`] is the one table of shared flags. Both entry points in
//! [`super::resolver`] flatten it into their own parser, so a flag declared
//! here is accepted in both places with the same value rules.
//!
//! # Value syntax
//!
//! - Required values come from `--flag=value` or the next token, taken
//!   verbatim even when it starts with `-`.
//! - Optional booleans (`--offline`, `--dry-run`, `--verbose`) come from
//!   `--flag=value`, or from the next token when it does not start with `-`.
//!   A value taken that way must be a boolean literal.
//! - Boolean literals ignore case: `true`, `yes`, `+` and `false`, `no`, `-`,
//!   `nil`.
//! - `--` ends flag parsing; everything after it is positional.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Arg, ArgMatches, Args, CommandFactory, FromArgMatches};
use std::ffi::OsString;

use super::{OptionError, Options};

/// Flags understood by both the command line and the defaults file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedArgs {
    #[arg(
        long,
        value_name = "SEPARATOR",
        allow_hyphen_values = true,
        help = "Separator placed between the date parts of a ref\nDefaults to ''"
    )]
    pub date_separator: Option<String>,

    #[arg(
        long,
        value_name = "FETCH_REFS",
        allow_hyphen_values = true,
        value_parser = parse_bool,
        help = "Fetch tags from the remote before creating a tag\nDefaults to true"
    )]
    pub fetch_refs: Option<bool>,

    #[arg(
        long,
        value_name = "PUSH_REFS",
        allow_hyphen_values = true,
        value_parser = parse_bool,
        help = "Push tags to the remote after creating a tag\nDefaults to true"
    )]
    pub push_refs: Option<bool>,

    #[arg(
        long,
        value_name = "REMOTE",
        allow_hyphen_values = true,
        help = "Git remote to fetch from and push to\nDefaults to origin"
    )]
    pub remote: Option<String>,

    #[arg(
        long,
        value_name = "REF_PATH",
        allow_hyphen_values = true,
        help = "Namespace the stage refs live under\nDefaults to auto_tags"
    )]
    pub ref_path: Option<String>,

    #[arg(
        long,
        value_name = "STAGES",
        allow_hyphen_values = true,
        help = "Comma-separated list of known stages"
    )]
    pub stages: Option<String>,

    // A bare flag stores false, the value given to fetch and push.
    #[arg(
        long,
        value_name = "OFFLINE",
        num_args = 0..=1,
        default_missing_value = "false",
        value_parser = parse_bool,
        help = "Same as --fetch-refs=false --push-refs=false"
    )]
    pub offline: Option<bool>,

    #[arg(
        long,
        value_name = "DRY_RUN",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = parse_bool,
        help = "Log the git commands instead of running them"
    )]
    pub dry_run: Option<bool>,

    #[arg(
        long,
        value_name = "VERBOSE",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = parse_bool,
        help = "Log every git command that runs"
    )]
    pub verbose: Option<bool>,

    #[arg(
        long,
        value_name = "REFS_TO_KEEP",
        allow_hyphen_values = true,
        help = "Number of refs per stage kept by cleanup"
    )]
    pub refs_to_keep: Option<u32>,

    #[arg(
        long,
        value_name = "EXECUTABLE",
        allow_hyphen_values = true,
        help = "Path to the git executable\nDefaults to git, looked up on PATH\nExample: /usr/local/bin/git"
    )]
    pub executable: Option<String>,
}

impl SharedArgs {
    /// Start an option record from the shared flags.
    pub fn into_options(self) -> Options {
        Options {
            date_separator: self.date_separator,
            fetch_refs: self.fetch_refs,
            push_refs: self.push_refs,
            remote: self.remote,
            ref_path: self.ref_path,
            stages: self.stages,
            offline: self.offline,
            dry_run: self.dry_run,
            verbose: self.verbose,
            refs_to_keep: self.refs_to_keep,
            executable: self.executable,
            ..Options::default()
        }
    }
}

/// Parse a boolean literal.
pub fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "+" => Ok(true),
        "false" | "no" | "-" | "nil" => Ok(false),
        _ => Err(format!("'{raw}' is not a boolean")),
    }
}

/// Run a clap parser over `args` (no program name).
///
/// The matches are returned too, for callers that need argument positions.
///
/// # Errors
///
/// Any clap failure, translated by [`option_error`].
pub fn parse_args<P, I, T>(args: I) -> Result<(P, ArgMatches), OptionError>
where
    P: CommandFactory + FromArgMatches,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = P::command()
        .try_get_matches_from(args)
        .map_err(option_error)?;
    let parsed = P::from_arg_matches(&matches).map_err(option_error)?;
    Ok((parsed, matches))
}

/// Translate a clap error into an [`OptionError`].
pub fn option_error(err: clap::Error) -> OptionError {
    let context = |kind: ContextKind| match err.get(kind) {
        Some(ContextValue::String(value)) => value.clone(),
        _ => String::new(),
    };
    // clap renders the argument as e.g. `--remote <REMOTE>`.
    let invalid_arg = context(ContextKind::InvalidArg);
    let flag = invalid_arg
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();

    match err.kind() {
        ErrorKind::UnknownArgument => OptionError::UnrecognizedOption(invalid_arg),
        ErrorKind::ValueValidation => OptionError::MalformedOptionValue {
            flag,
            value: context(ContextKind::InvalidValue),
        },
        ErrorKind::InvalidValue => OptionError::MissingOptionValue(flag),
        ErrorKind::InvalidUtf8 => OptionError::InvalidUnicode,
        kind => OptionError::Rejected {
            arg: invalid_arg,
            reason: kind.as_str().unwrap_or("invalid argument").to_string(),
        },
    }
}

/// Left column of the help listing, e.g. `--remote REMOTE` or
/// `--dry-run [DRY_RUN]`.
pub fn synopsis(arg: &Arg) -> String {
    let mut names = Vec::new();
    if let Some(short) = arg.get_short() {
        names.push(format!("-{short}"));
    }
    if let Some(long) = arg.get_long() {
        names.push(format!("--{long}"));
    }
    names.extend(
        arg.get_visible_short_aliases()
            .unwrap_or_default()
            .into_iter()
            .map(|alias| format!("-{alias}")),
    );

    let names = names.join(", ");
    let optional = arg
        .get_num_args()
        .is_some_and(|range| range.min_values() == 0);
    match arg.get_value_names().and_then(|values| values.first()) {
        Some(value) if optional => format!("{names} [{value}]"),
        Some(value) => format!("{names} {value}"),
        None => names,
    }
}
