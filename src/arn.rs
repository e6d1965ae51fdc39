//! Amazon Resource Name parsing and ECS long/short format classification.
//!
//! ECS introduced a "long" ARN format for container instances, services and
//! tasks that embeds the cluster name in the resource field:
//!
//! - short: `arn:aws:ecs:region:account:service/service-name`
//! - long:  `arn:aws:ecs:region:account:service/cluster-name/service-name`

use std::{fmt, str::FromStr};

use crate::error::{MetaError, malformed_arn};

const ARN_PREFIX: &str = "arn";
const ARN_SECTIONS: usize = 6;
const RESOURCE_DELIMITER: char = '/';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arn {
    pub partition: String,
    pub service: String,
    pub region: String,
    pub account_id: String,
    /// Everything after the fifth colon; may itself contain colons.
    pub resource: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcsResourceKind {
    ContainerInstance,
    Service,
    Task,
}

impl EcsResourceKind {
    pub fn from_resource_type(resource_type: &str) -> Option<Self> {
        match resource_type {
            "container-instance" => Some(Self::ContainerInstance),
            "service" => Some(Self::Service),
            "task" => Some(Self::Task),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContainerInstance => "container-instance",
            Self::Service => "service",
            Self::Task => "task",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArnFormat {
    Long,
    Short,
}

impl ArnFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }
}

impl fmt::Display for ArnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource field of a container instance, service or task ARN.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EcsResource {
    pub kind: EcsResourceKind,
    /// Present only in the long format.
    pub cluster_name: Option<String>,
    pub id: String,
}

impl EcsResource {
    pub fn format(&self) -> ArnFormat {
        if self.cluster_name.is_some() {
            ArnFormat::Long
        } else {
            ArnFormat::Short
        }
    }
}

impl Arn {
    pub fn parse(input: &str) -> Result<Self, MetaError> {
        let sections: Vec<&str> = input.splitn(ARN_SECTIONS, ':').collect();
        if sections.len() != ARN_SECTIONS {
            tracing::debug!(target: "arn", arn = %input, sections = sections.len(), "arn_rejected");
            return Err(malformed_arn(format!(
                "arn '{}' has {} colon-delimited sections, expected {}",
                input,
                sections.len(),
                ARN_SECTIONS
            )));
        }

        let [prefix, partition, service, region, account_id, resource] = sections[..] else {
            return Err(malformed_arn(format!("arn '{}' is not well-formed", input)));
        };

        if prefix != ARN_PREFIX {
            return Err(malformed_arn(format!(
                "arn '{}' must start with '{}:'",
                input, ARN_PREFIX
            )));
        }
        for (name, value) in [
            ("partition", partition),
            ("service", service),
            ("resource", resource),
        ] {
            if value.is_empty() {
                return Err(malformed_arn(format!("arn '{}' has an empty {}", input, name)));
            }
        }

        Ok(Self {
            partition: partition.to_string(),
            service: service.to_string(),
            region: region.to_string(),
            account_id: account_id.to_string(),
            resource: resource.to_string(),
        })
    }

    pub fn resource_type(&self) -> &str {
        self.resource
            .split(RESOURCE_DELIMITER)
            .next()
            .unwrap_or(self.resource.as_str())
    }

    /// Last `/`-delimited segment of the resource, e.g. the service name or task id.
    pub fn resource_name(&self) -> &str {
        self.resource
            .rsplit(RESOURCE_DELIMITER)
            .next()
            .unwrap_or(self.resource.as_str())
    }

    /// Breaks the resource field into kind, optional cluster and id.
    ///
    /// Returns `Ok(None)` for resource types that never carry a cluster segment.
    pub fn ecs_resource(&self) -> Result<Option<EcsResource>, MetaError> {
        let segments: Vec<&str> = self.resource.split(RESOURCE_DELIMITER).collect();
        let Some(kind) = EcsResourceKind::from_resource_type(segments[0]) else {
            return Ok(None);
        };

        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(malformed_arn(format!(
                "{} resource '{}' has an empty segment",
                kind.as_str(),
                self.resource
            )));
        }

        match segments[..] {
            [_, id] => Ok(Some(EcsResource {
                kind,
                cluster_name: None,
                id: id.to_string(),
            })),
            [_, cluster_name, id] => Ok(Some(EcsResource {
                kind,
                cluster_name: Some(cluster_name.to_string()),
                id: id.to_string(),
            })),
            _ => {
                tracing::debug!(
                    target: "arn",
                    resource = %self.resource,
                    segments = segments.len(),
                    "arn_resource_rejected"
                );
                Err(malformed_arn(format!(
                    "{} resource '{}' has {} segments, expected 2 (short) or 3 (long)",
                    kind.as_str(),
                    self.resource,
                    segments.len()
                )))
            }
        }
    }

    pub fn format(&self) -> Result<ArnFormat, MetaError> {
        Ok(self
            .ecs_resource()?
            .map_or(ArnFormat::Short, |resource| resource.format()))
    }
}

impl FromStr for Arn {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:{}",
            ARN_PREFIX, self.partition, self.service, self.region, self.account_id, self.resource
        )
    }
}

pub fn arn_format(arn: &str) -> Result<ArnFormat, MetaError> {
    Arn::parse(arn)?.format()
}

/// Reports whether `arn` uses the long format that includes a cluster name.
///
/// Input that is not a well-formed ARN fails with `MalformedArn`; a failure
/// must not be read as "short".
pub fn is_long_arn_format(arn: &str) -> Result<bool, MetaError> {
    Ok(arn_format(arn)? == ArnFormat::Long)
}
