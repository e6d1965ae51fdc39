use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use jsonschema::{JSONSchema, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tags::Tag;

const EMBEDDED_SCHEMA: &str = include_str!("../ecsmeta.schema.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Desired-state tag set used by `diff-tags` when `--desired` is absent.
    #[serde(default)]
    pub desired_tags: Option<Vec<Tag>>,
}

fn default_logging_filter() -> String {
    "warn".to_string()
}

fn default_logging_rotation() -> LoggingRotation {
    LoggingRotation::Daily
}

fn default_logging_retention_days() -> usize {
    14
}

fn default_enabled_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    #[serde(default = "default_enabled_true")]
    pub stderr_enabled: bool,
    /// JSON file logging is enabled only when a directory is set.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_logging_rotation")]
    pub rotation: LoggingRotation,
    #[serde(default = "default_logging_retention_days")]
    pub retention_days: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_logging_filter(),
            stderr_enabled: true,
            dir: None,
            rotation: default_logging_rotation(),
            retention_days: default_logging_retention_days(),
        }
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config_value: Value = json5::from_str(&config_content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        let config_base = config_path.parent().unwrap_or_else(|| Path::new("."));
        let schema = load_schema(config_base, &config_value)?;
        validate_against_schema(&config_value, &schema)?;

        let mut config: Config =
            serde_json::from_value(config_value).context("failed to deserialize config")?;

        if let Some(dir) = &config.logging.dir
            && !dir.is_absolute()
        {
            config.logging.dir = Some(config_base.join(dir));
        }
        if let Some(tags) = &config.desired_tags {
            validate_tag_set(tags).context("invalid desired_tags")?;
        }

        tracing::debug!(
            target: "config",
            path = %config_path.display(),
            desired_tags = ?config.desired_tags.as_ref().map(Vec::len),
            "config_loaded"
        );
        Ok(config)
    }
}

fn load_schema(config_base: &Path, config_value: &Value) -> Result<Value> {
    let Some(path_text) = config_value.get("$schema").and_then(|value| value.as_str()) else {
        return serde_json::from_str(EMBEDDED_SCHEMA).context("failed to parse embedded schema");
    };

    let configured = PathBuf::from(path_text);
    let schema_path = if configured.is_absolute() {
        configured
    } else {
        config_base.join(&configured)
    };
    let schema_content = fs::read_to_string(&schema_path)
        .with_context(|| format!("failed to read schema {}", schema_path.display()))?;
    serde_json::from_str(&schema_content)
        .with_context(|| format!("failed to parse schema {}", schema_path.display()))
}

fn validate_against_schema(config_value: &Value, schema: &Value) -> Result<()> {
    let compiled =
        JSONSchema::compile(schema).map_err(|e| anyhow!("failed to compile schema: {e}"))?;

    match compiled.validate(config_value) {
        Ok(()) => Ok(()),
        Err(errors_iter) => {
            let validation_errors: Vec<ValidationError> = errors_iter.collect();
            let messages: Vec<String> = validation_errors
                .into_iter()
                .map(|error| error.to_string())
                .collect();
            Err(anyhow!("config validation failed: {}", messages.join("; ")))
        }
    }
}

fn validate_tag_set(tags: &[Tag]) -> Result<()> {
    let mut seen = HashSet::with_capacity(tags.len());
    for tag in tags {
        if tag.key.is_empty() {
            return Err(anyhow!("tag key cannot be empty"));
        }
        if !seen.insert(tag.key.as_str()) {
            return Err(anyhow!("duplicate tag key '{}'", tag.key));
        }
    }
    Ok(())
}
