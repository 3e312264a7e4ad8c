mod constructor;
mod process;

pub use constructor::parse_constructor_string;
pub use process::{PatternProcessType, process_init};

use serde::{Deserialize, Serialize};

/// Per-field pattern (or URL) strings, plus an optional base URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternInit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pathname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(rename = "baseURL", default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl PatternInit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn protocol<S: Into<String>>(mut self, value: S) -> Self {
        self.protocol = Some(value.into());
        self
    }

    pub fn username<S: Into<String>>(mut self, value: S) -> Self {
        self.username = Some(value.into());
        self
    }

    pub fn password<S: Into<String>>(mut self, value: S) -> Self {
        self.password = Some(value.into());
        self
    }

    pub fn hostname<S: Into<String>>(mut self, value: S) -> Self {
        self.hostname = Some(value.into());
        self
    }

    pub fn port<S: Into<String>>(mut self, value: S) -> Self {
        self.port = Some(value.into());
        self
    }

    pub fn pathname<S: Into<String>>(mut self, value: S) -> Self {
        self.pathname = Some(value.into());
        self
    }

    pub fn search<S: Into<String>>(mut self, value: S) -> Self {
        self.search = Some(value.into());
        self
    }

    pub fn hash<S: Into<String>>(mut self, value: S) -> Self {
        self.hash = Some(value.into());
        self
    }

    pub fn base_url<S: Into<String>>(mut self, value: S) -> Self {
        self.base_url = Some(value.into());
        self
    }
}

/// Either a whole pattern/URL string or a structured init.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UrlPatternInput {
    String(String),
    Init(PatternInit),
}

impl From<&str> for UrlPatternInput {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for UrlPatternInput {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<PatternInit> for UrlPatternInput {
    fn from(value: PatternInit) -> Self {
        Self::Init(value)
    }
}
