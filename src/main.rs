use anyhow::Context;
use ecsmeta::{cli::cli_options_from_args, commands, config::Config, logging::init_tracing};

fn main() -> anyhow::Result<()> {
    let options = cli_options_from_args()?;
    let config = match &options.config_path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    let logging_guard = init_tracing(&config.logging)?;

    let output = commands::execute(&options.command, &config).inspect_err(|err| {
        tracing::warn!(
            target: "cli",
            run_id = %logging_guard.run_id(),
            error_kind = commands::error_kind(err).map_or("other", |kind| kind.as_str()),
            error = %format!("{err:#}"),
            "command_failed"
        );
    })?;
    println!("{output}");
    Ok(())
}
