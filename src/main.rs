use auto_tagger::cli;
use auto_tagger::core::options::OptionError;
use auto_tagger::core::settings::SettingsError;
use auto_tagger::ui::output;

fn main() {
    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| cli::run(std::env::args_os().skip(1), &cwd));

    if let Err(err) = result {
        output::error(format!("{err:#}"));
        if is_usage_error(&err) {
            output::hint("run 'autotag help' for usage");
        }
        std::process::exit(1);
    }
}

fn is_usage_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause.downcast_ref::<OptionError>().is_some()
            || matches!(
                cause.downcast_ref::<SettingsError>(),
                Some(SettingsError::MissingPositionalArgument { .. })
            )
    })
}
