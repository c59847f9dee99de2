//! tag commands - create, list, cleanup, delete_locally, delete_on_remote
//!
//! Running git belongs to a [`TagExecutor`]. The shipped [`PlanReporter`]
//! prints what would run with the resolved settings.

use super::Context;
use crate::core::settings::{Settings, TagCommand};
use crate::ui::output;
use anyhow::{Context as _, Result};
use std::io::Write;

/// Carries out a tag command against a repository.
pub trait TagExecutor {
    fn execute(&mut self, command: &TagCommand, settings: &Settings) -> Result<()>;
}

/// Run a tag command, warning first about deprecated usage.
pub fn tag(
    ctx: &Context,
    command: &TagCommand,
    settings: &Settings,
    executor: &mut dyn TagExecutor,
) -> Result<()> {
    if let Some(warning) = deprecation_warning(command) {
        output::warn(warning);
    }
    output::debug(
        format!("{} {} via {}", command.kind(), command.stage(), settings.executable),
        ctx.verbosity,
    );
    executor.execute(command, settings)
}

/// Warning for the `autotag <stage> [path]` shorthand.
pub fn deprecation_warning(command: &TagCommand) -> Option<String> {
    match command {
        TagCommand::Create {
            stage,
            path,
            deprecated: true,
        } => Some(format!(
            "'autotag {stage} {path}' is deprecated, use 'autotag create {stage} {path}' instead"
        )),
        _ => None,
    }
}

/// Writes the resolved plan instead of running git.
pub struct PlanReporter<W: Write> {
    out: W,
}

impl<W: Write> PlanReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TagExecutor for PlanReporter<W> {
    fn execute(&mut self, command: &TagCommand, settings: &Settings) -> Result<()> {
        writeln!(self.out, "{}", render_plan(command, settings)).context("Failed to write plan")
    }
}

/// Render a plan, one `label: value` line per setting.
pub fn render_plan(command: &TagCommand, settings: &Settings) -> String {
    let yes_no = |value: bool| String::from(if value { "yes" } else { "no" });

    let mut rows = vec![
        ("command", command.kind().to_string()),
        ("stage", command.stage().to_string()),
    ];
    if let TagCommand::Create { path, .. } = command {
        rows.push(("path", path.clone()));
    }
    rows.extend([
        ("remote", settings.remote.clone()),
        (
            "ref prefix",
            format!("refs/{}/{}", settings.ref_path, command.stage()),
        ),
        ("fetch refs", yes_no(settings.fetch_refs)),
        ("push refs", yes_no(settings.push_refs)),
        ("dry run", yes_no(settings.dry_run)),
        (
            "refs to keep",
            settings
                .refs_to_keep
                .map_or_else(|| "all".to_string(), |n| n.to_string()),
        ),
        ("executable", settings.executable.clone()),
    ]);

    rows.iter()
        .map(|(label, value)| format!("{:<13} {}", format!("{label}:"), value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::resolver::from_command_line;
    use crate::core::settings::Invocation;
    use crate::core::types::StageName;

    fn resolve(args: &[&str]) -> (TagCommand, Settings) {
        let options = from_command_line(args).unwrap();
        let settings = Settings::from_options(&options);
        match Invocation::resolve(&options).unwrap() {
            Invocation::Tag(command) => (command, settings),
            other => panic!("expected a tag command, got {other:?}"),
        }
    }

    #[test]
    fn create_plan() {
        let (command, settings) = resolve(&["create", "ci", "/data/myrepo", "--offline"]);
        assert_eq!(
            render_plan(&command, &settings),
            "\
command:      create
stage:        ci
path:         /data/myrepo
remote:       origin
ref prefix:   refs/auto_tags/ci
fetch refs:   no
push refs:    no
dry run:      no
refs to keep: all
executable:   git"
        );
    }

    #[test]
    fn cleanup_plan_has_no_path() {
        let (command, settings) = resolve(&[
            "cleanup",
            "demo",
            "--refs-to-keep=2",
            "--ref-path",
            "deploys",
            "--dry-run",
        ]);
        let plan = render_plan(&command, &settings);
        assert!(!plan.contains("path:"));
        assert!(plan.contains("ref prefix:   refs/deploys/demo"));
        assert!(plan.contains("dry run:      yes"));
        assert!(plan.contains("refs to keep: 2"));
    }

    #[test]
    fn reporter_writes_plan_line() {
        let (command, settings) = resolve(&["list", "demo"]);
        let mut reporter = PlanReporter::new(Vec::new());

        reporter.execute(&command, &settings).unwrap();

        let written = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(written, format!("{}\n", render_plan(&command, &settings)));
    }

    #[test]
    fn shorthand_is_deprecated() {
        let (command, _) = resolve(&["demo"]);
        assert_eq!(
            deprecation_warning(&command).as_deref(),
            Some("'autotag demo .' is deprecated, use 'autotag create demo .' instead")
        );
    }

    #[test]
    fn explicit_create_is_not_deprecated() {
        let command = TagCommand::Create {
            stage: StageName::new("demo").unwrap(),
            path: ".".into(),
            deprecated: false,
        };
        assert_eq!(deprecation_warning(&command), None);
    }
}
