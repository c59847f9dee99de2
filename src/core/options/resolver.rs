//! core::options::resolver
//!
//! Entry points that turn an argument vector into [`Options`].
//!
//! # Command line
//!
//! [`from_command_line`] runs in two phases:
//!
//! ```text
//! ScanningFlags -> ClassifyingCommand -> Help | Version | Config | Create
//!                                        | List | Cleanup | DeleteLocally
//!                                        | DeleteOnRemote
//! ```
//!
//! Flags are consumed wherever they appear. `-h`/`--help`/`-?` and
//! `--version`/`-v` set the command as soon as they are seen but never stop
//! the scan. The first positional token then picks the command; an unknown
//! word is read as the old `autotag <stage> [path]` shorthand for `create`,
//! unless a help or version flag already chose a command.
//!
//! # Defaults file
//!
//! [`from_file`] applies the shared flags only. It never sets a command or
//! any positional value.

use clap::{ArgMatches, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use super::grammar::{self, SharedArgs};
use super::{CommandKind, OptionError, Options};

/// The full command-line grammar: shared flags plus the flags only the
/// command line accepts.
#[derive(Parser, Debug)]
#[command(
    name = "autotag",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct CommandLineArgs {
    #[command(flatten)]
    pub shared: SharedArgs,

    #[arg(
        long,
        value_name = "OPTS_FILE",
        allow_hyphen_values = true,
        help = "Path to a defaults file\nDefaults to .auto_tagger in the working directory\nExample: /usr/local/.auto_tagger"
    )]
    pub opts_file: Option<PathBuf>,

    #[arg(short = 'h', long, visible_short_alias = '?', help = "Show this message")]
    pub help: bool,

    #[arg(short = 'v', long, help = "Show version")]
    pub version: bool,

    #[arg(value_name = "ARGS")]
    pub positionals: Vec<String>,
}

/// The defaults-file grammar: shared flags only.
#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct DefaultsFileArgs {
    #[command(flatten)]
    pub shared: SharedArgs,

    #[arg(value_name = "IGNORED", hide = true)]
    pub ignored: Vec<String>,
}

const USAGE: &str = "\
Usage: autotag <command> [stage] [options]

Examples:

    autotag help
    autotag version
    autotag config
    autotag create demo
    autotag create demo .
    autotag create ci /data/myrepo
    autotag create ci /data/myrepo --fetch-refs=false --push-refs=false
    autotag create ci /data/myrepo --offline
    autotag create ci /data/myrepo --dry-run

    autotag list demo

    autotag cleanup demo --refs-to-keep=2
    autotag delete_locally demo
    autotag delete_on_remote demo

Options:";

/// Width of the flag column in the help listing.
const SYNOPSIS_WIDTH: usize = 32;

/// Render the usage banner and flag listing.
pub fn help_text() -> String {
    let command = CommandLineArgs::command();
    let mut lines = vec![USAGE.to_string()];
    for arg in command.get_arguments().filter(|arg| !arg.is_positional()) {
        let synopsis = grammar::synopsis(arg);
        let summary = arg.get_help().map(ToString::to_string).unwrap_or_default();
        for (i, line) in summary.lines().enumerate() {
            let left = if i == 0 { synopsis.as_str() } else { "" };
            lines.push(format!("    {left:<width$} {line}", width = SYNOPSIS_WIDTH));
        }
    }
    lines.join("\n")
}

/// Parse a command-line argument vector (without the program name).
///
/// # Errors
///
/// Fails on an unknown flag, a flag value that does not coerce to its type,
/// or an argument that is not valid UTF-8. An unknown command word is never
/// an error.
///
/// # Example
///
/// ```
/// use auto_tagger::core::options::{resolver, CommandKind};
///
/// let options = resolver::from_command_line(["cleanup", "demo", "--refs-to-keep=2"]).unwrap();
/// assert_eq!(options.command, Some(CommandKind::Cleanup));
/// assert_eq!(options.stage.as_deref(), Some("demo"));
/// assert_eq!(options.refs_to_keep, Some(2));
/// ```
pub fn from_command_line<I, T>(args: I) -> Result<Options, OptionError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let (parsed, matches) = grammar::parse_args::<CommandLineArgs, _, _>(args)?;

    let mut options = parsed.shared.into_options();
    options.opts_file = parsed.opts_file;
    apply_tail_flags(&mut options, &matches, parsed.help, parsed.version);
    classify(&mut options, &parsed.positionals);

    tracing::debug!(
        command = ?options.command,
        stage = ?options.stage,
        path = ?options.path,
        deprecated = options.deprecated,
        "resolved command line"
    );
    Ok(options)
}

/// Parse the tokens of a defaults file.
///
/// # Errors
///
/// Same as [`from_command_line`]; command-line-only flags such as
/// `--opts-file` or `--help` are unrecognized here.
pub fn from_file<I, T>(tokens: I) -> Result<Options, OptionError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let (parsed, _) = grammar::parse_args::<DefaultsFileArgs, _, _>(tokens)?;
    if !parsed.ignored.is_empty() {
        tracing::debug!(ignored = ?parsed.ignored, "positional tokens in defaults file");
    }
    Ok(parsed.shared.into_options())
}

/// Apply `--help` and `--version` in the order they were given; the later
/// one sets the command.
fn apply_tail_flags(options: &mut Options, matches: &ArgMatches, help: bool, version: bool) {
    let position = |id: &str| {
        matches
            .indices_of(id)
            .and_then(|mut indices| indices.next_back())
            .unwrap_or(0)
    };

    let mut seen = Vec::new();
    if help {
        seen.push((position("help"), CommandKind::Help));
    }
    if version {
        seen.push((position("version"), CommandKind::Version));
    }
    seen.sort_by_key(|(index, _)| *index);

    for (_, kind) in seen {
        match kind {
            CommandKind::Help => options.show_help = true,
            _ => options.show_version = true,
        }
        options.command = Some(kind);
    }
}

/// Pick the command from the positional tokens.
fn classify(options: &mut Options, positionals: &[String]) {
    let nth = |i: usize| positionals.get(i).cloned();

    let Some(first) = positionals.first() else {
        if options.show_version {
            options.command = Some(CommandKind::Version);
        } else {
            show_help(options);
        }
        return;
    };

    match CommandKind::from_word(first) {
        Some(CommandKind::Help) => show_help(options),
        Some(CommandKind::Version) => {
            options.show_version = true;
            options.command = Some(CommandKind::Version);
        }
        Some(CommandKind::Config) => options.command = Some(CommandKind::Config),
        Some(CommandKind::Create) => {
            options.command = Some(CommandKind::Create);
            options.stage = nth(1);
            options.path = nth(2);
        }
        Some(kind) => {
            options.command = Some(kind);
            options.stage = nth(1);
        }
        None if options.command.is_none() => {
            options.command = Some(CommandKind::Create);
            options.deprecated = true;
            options.stage = nth(0);
            options.path = nth(1);
        }
        None => {
            tracing::debug!(word = %first, command = ?options.command, "ignoring stage shorthand");
        }
    }
}

fn show_help(options: &mut Options) {
    options.show_help = true;
    options.help_text = Some(help_text());
    options.command = Some(CommandKind::Help);
}
