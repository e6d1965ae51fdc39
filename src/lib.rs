//! ECS resource metadata helpers: ARN format classification and tag set
//! parsing, reconciliation and formatting.

pub mod arn;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod tags;

pub use arn::{Arn, ArnFormat, EcsResource, EcsResourceKind, arn_format, is_long_arn_format};
pub use error::{MetaError, MetaErrorKind};
pub use tags::{Tag, TagDelta, compare_tags, format_map, format_tags, parse_tags};
