#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaErrorKind {
    MalformedArn,
    InvalidTagSyntax,
}

impl MetaErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedArn => "malformed_arn",
            Self::InvalidTagSyntax => "invalid_tag_syntax",
        }
    }
}

/// Rejection of caller input by one of the metadata parsers.
///
/// Classification and parsing either fully succeed or fail with one of these;
/// there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct MetaError {
    pub kind: MetaErrorKind,
    pub message: String,
}

impl MetaError {
    pub fn new(kind: MetaErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub fn malformed_arn(message: impl Into<String>) -> MetaError {
    MetaError::new(MetaErrorKind::MalformedArn, message)
}

pub fn invalid_tag_syntax(message: impl Into<String>) -> MetaError {
    MetaError::new(MetaErrorKind::InvalidTagSyntax, message)
}
