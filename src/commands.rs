use anyhow::{Context, Result, anyhow};

use crate::{
    arn::{Arn, arn_format},
    cli::Command,
    config::Config,
    error::{MetaError, MetaErrorKind},
    tags::{compare_tags, format_tags, parse_tags},
};

/// Runs a command and returns the text to print on stdout.
pub fn execute(command: &Command, config: &Config) -> Result<String> {
    tracing::debug!(target: "cli", command = ?command, "command_started");

    match command {
        Command::ArnFormat { arn } => {
            let format = arn_format(arn).with_context(|| format!("cannot classify '{arn}'"))?;
            Ok(format.to_string())
        }
        Command::ArnName { arn } => {
            let parsed = Arn::parse(arn).with_context(|| format!("cannot parse '{arn}'"))?;
            Ok(parsed.resource_name().to_string())
        }
        Command::ParseTags { src } => {
            let tags = parse_tags(src)?;
            serde_json::to_string_pretty(&tags).context("failed to encode tags")
        }
        Command::FormatTags { src } => Ok(format_tags(&parse_tags(src)?)),
        Command::DiffTags { current, desired } => {
            let current = parse_tags(current).context("invalid --current tags")?;
            let desired = match (desired, &config.desired_tags) {
                (Some(src), _) => parse_tags(src).context("invalid --desired tags")?,
                (None, Some(tags)) => tags.clone(),
                (None, None) => {
                    return Err(anyhow!(
                        "no desired tags: pass --desired or set desired_tags in the config"
                    ));
                }
            };

            let delta = compare_tags(&current, &desired);
            if delta.is_empty() {
                tracing::info!(target: "cli", "tags_in_sync");
            }
            serde_json::to_string_pretty(&delta).context("failed to encode tag delta")
        }
    }
}

/// Kind of the input rejection behind a failed command, if there was one.
pub fn error_kind(err: &anyhow::Error) -> Option<MetaErrorKind> {
    err.downcast_ref::<MetaError>().map(|meta_error| meta_error.kind)
}
