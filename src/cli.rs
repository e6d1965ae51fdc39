use std::{env, path::PathBuf};

use anyhow::{Result, anyhow};

pub const USAGE: &str = "usage: ecsmeta [--config <path>] <command>
commands:
  arn-format <arn>
  arn-name <arn>
  parse-tags <tags>
  format-tags <tags>
  diff-tags --current <tags> [--desired <tags>]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ArnFormat { arn: String },
    ArnName { arn: String },
    ParseTags { src: String },
    FormatTags { src: String },
    DiffTags { current: String, desired: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub config_path: Option<PathBuf>,
    pub command: Command,
}

pub fn cli_options_from_args() -> Result<CliOptions> {
    parse_cli_options(env::args().skip(1))
}

pub fn parse_cli_options<I>(mut args: I) -> Result<CliOptions>
where
    I: Iterator<Item = String>,
{
    let mut config_path = None;
    let mut command_name = None;
    let mut positional = Vec::new();
    let mut current = None;
    let mut desired = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = Some(PathBuf::from(flag_value(&mut args, "--config")?)),
            "--current" => current = Some(flag_value(&mut args, "--current")?),
            "--desired" => desired = Some(flag_value(&mut args, "--desired")?),
            other if other.starts_with("--") => {
                return Err(anyhow!("unknown argument: {other}. {USAGE}"));
            }
            _ if command_name.is_none() => command_name = Some(arg),
            _ => positional.push(arg),
        }
    }

    let command_name = command_name.ok_or_else(|| anyhow!("missing command. {USAGE}"))?;
    let is_diff = command_name == "diff-tags";
    if !is_diff && (current.is_some() || desired.is_some()) {
        return Err(anyhow!(
            "--current/--desired are only valid for diff-tags. {USAGE}"
        ));
    }

    let command = match command_name.as_str() {
        "arn-format" => Command::ArnFormat {
            arn: single_positional(&command_name, positional)?,
        },
        "arn-name" => Command::ArnName {
            arn: single_positional(&command_name, positional)?,
        },
        "parse-tags" => Command::ParseTags {
            src: single_positional(&command_name, positional)?,
        },
        "format-tags" => Command::FormatTags {
            src: single_positional(&command_name, positional)?,
        },
        "diff-tags" => {
            if !positional.is_empty() {
                return Err(anyhow!(
                    "diff-tags takes no positional arguments. {USAGE}"
                ));
            }
            Command::DiffTags {
                current: current
                    .ok_or_else(|| anyhow!("missing required argument --current. {USAGE}"))?,
                desired,
            }
        }
        other => return Err(anyhow!("unknown command: {other}. {USAGE}")),
    };

    Ok(CliOptions {
        config_path,
        command,
    })
}

fn flag_value<I>(args: &mut I, flag: &str) -> Result<String>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| anyhow!("missing value for {flag}"))
}

fn single_positional(command_name: &str, positional: Vec<String>) -> Result<String> {
    let mut positional = positional.into_iter();
    match (positional.next(), positional.next()) {
        (Some(value), None) => Ok(value),
        (None, _) => Err(anyhow!("{command_name} expects one argument. {USAGE}")),
        (Some(_), Some(_)) => Err(anyhow!(
            "{command_name} expects exactly one argument. {USAGE}"
        )),
    }
}
