//! config command - Show the effective settings

use super::Context;
use crate::core::settings::Settings;
use crate::ui::output;
use anyhow::{Context as _, Result};
use std::path::Path;

/// Print the effective settings as TOML.
pub fn config(ctx: &Context, settings: &Settings) -> Result<()> {
    let rendered = render(settings, ctx.defaults_path.as_deref())?;
    output::debug("settings rendered from command line and defaults", ctx.verbosity);
    output::print(rendered.trim_end());
    Ok(())
}

/// Render settings with a header naming where defaults came from.
pub fn render(settings: &Settings, defaults_path: Option<&Path>) -> Result<String> {
    let header = match defaults_path {
        Some(path) => format!("# defaults file: {}", path.display()),
        None => "# no defaults file found".to_string(),
    };
    let body = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
    Ok(format!("{header}\n{body}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::Options;

    #[test]
    fn header_without_defaults_file() {
        let rendered = render(&Settings::default(), None).unwrap();
        assert!(rendered.starts_with("# no defaults file found\n"));
    }

    #[test]
    fn header_names_defaults_file() {
        let rendered = render(&Settings::default(), Some(Path::new("/repo/.auto_tagger"))).unwrap();
        assert!(rendered.starts_with("# defaults file: /repo/.auto_tagger\n"));
    }

    #[test]
    fn body_lists_every_setting() {
        let rendered = render(&Settings::default(), None).unwrap();
        for line in [
            "date_separator = \"\"",
            "fetch_refs = true",
            "push_refs = true",
            "offline = false",
            "remote = \"origin\"",
            "ref_path = \"auto_tags\"",
            "dry_run = false",
            "verbose = false",
            "executable = \"git\"",
        ] {
            assert!(rendered.contains(line), "missing {line:?} in:\n{rendered}");
        }
        assert!(!rendered.contains("refs_to_keep"));
    }

    #[test]
    fn refs_to_keep_shown_when_set() {
        let settings = Settings::from_options(&Options {
            refs_to_keep: Some(4),
            ..Default::default()
        });
        let rendered = render(&settings, None).unwrap();
        assert!(rendered.contains("refs_to_keep = 4"));
    }
}
