use crate::canonicalize::CanonicalizeError;
use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    RegexCompile,
    Canonicalization,
    InputShape,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlPatternError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Canonicalize(#[from] CanonicalizeError),
    #[error("generated regular expression '{regex_source}' failed to compile: {error}")]
    RegexCompile { regex_source: String, error: String },
    #[error("base URL must be given through the init's baseURL field, not alongside it")]
    BaseUrlWithInit,
    #[error("relative pattern '{pattern}' requires a protocol or a base URL")]
    MissingProtocolOrBase { pattern: String },
    #[error("base URL '{base_url}' could not be parsed")]
    InvalidBaseUrl { base_url: String },
}

impl UrlPatternError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Pattern(PatternError::Encoding(_)) | Self::Canonicalize(_) => {
                ErrorKind::Canonicalization
            }
            Self::Pattern(_) => ErrorKind::Syntax,
            Self::RegexCompile { .. } => ErrorKind::RegexCompile,
            Self::BaseUrlWithInit
            | Self::MissingProtocolOrBase { .. }
            | Self::InvalidBaseUrl { .. } => ErrorKind::InputShape,
        }
    }
}

pub type UrlPatternResult<T> = Result<T, UrlPatternError>;
