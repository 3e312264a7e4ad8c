use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlPatternOptions {
    /// Case-insensitive matching of pathname, search and hash.
    pub ignore_case: bool,
}

impl UrlPatternOptions {
    pub fn builder() -> UrlPatternOptionsBuilder {
        UrlPatternOptionsBuilder::default()
    }
}

#[derive(Debug, Default, Clone)]
pub struct UrlPatternOptionsBuilder {
    options: UrlPatternOptions,
}

impl UrlPatternOptionsBuilder {
    pub fn ignore_case(mut self, value: bool) -> Self {
        self.options.ignore_case = value;
        self
    }

    pub fn build(self) -> UrlPatternOptions {
        self.options
    }
}
