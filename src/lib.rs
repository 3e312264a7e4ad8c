pub mod canonicalize;
pub mod component;
pub mod errors;
pub mod init;
pub mod options;
pub mod pattern;
pub mod record;

pub use errors::{ErrorKind, UrlPatternError, UrlPatternResult};
pub use init::{PatternInit, UrlPatternInput};
pub use options::{UrlPatternOptions, UrlPatternOptionsBuilder};
pub use record::{ComponentKind, ComponentResult, MatchGroups, MatchResult, PatternRecord};

/// A compiled URL pattern.
///
/// ```
/// use url_pattern_rs::UrlPattern;
///
/// let pattern = UrlPattern::parse("https://example.com/users/:id(\\d+)").unwrap();
/// let result = pattern.exec("https://example.com/users/42", None).unwrap().unwrap();
///
/// assert_eq!(result.pathname.groups.get("id"), Some(Some("42")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPattern {
    record: PatternRecord,
}

impl UrlPattern {
    pub fn new<I: Into<UrlPatternInput>>(
        input: I,
        base_url: Option<&str>,
        options: Option<UrlPatternOptions>,
    ) -> UrlPatternResult<Self> {
        let record = PatternRecord::create(
            &input.into(),
            base_url,
            &options.unwrap_or_default(),
        )?;

        Ok(Self { record })
    }

    pub fn parse<I: Into<UrlPatternInput>>(input: I) -> UrlPatternResult<Self> {
        Self::new(input, None, None)
    }

    pub fn protocol(&self) -> &str {
        self.pattern_string(ComponentKind::Protocol)
    }

    pub fn username(&self) -> &str {
        self.pattern_string(ComponentKind::Username)
    }

    pub fn password(&self) -> &str {
        self.pattern_string(ComponentKind::Password)
    }

    pub fn hostname(&self) -> &str {
        self.pattern_string(ComponentKind::Hostname)
    }

    pub fn port(&self) -> &str {
        self.pattern_string(ComponentKind::Port)
    }

    pub fn pathname(&self) -> &str {
        self.pattern_string(ComponentKind::Pathname)
    }

    pub fn search(&self) -> &str {
        self.pattern_string(ComponentKind::Search)
    }

    pub fn hash(&self) -> &str {
        self.pattern_string(ComponentKind::Hash)
    }

    pub fn has_regexp_groups(&self) -> bool {
        self.record.has_regexp_groups()
    }

    pub fn test<I: Into<UrlPatternInput>>(
        &self,
        input: I,
        base_url: Option<&str>,
    ) -> UrlPatternResult<bool> {
        Ok(self.exec(input, base_url)?.is_some())
    }

    pub fn exec<I: Into<UrlPatternInput>>(
        &self,
        input: I,
        base_url: Option<&str>,
    ) -> UrlPatternResult<Option<MatchResult>> {
        self.record.match_input(&input.into(), base_url)
    }

    pub fn record(&self) -> &PatternRecord {
        &self.record
    }

    fn pattern_string(&self, kind: ComponentKind) -> &str {
        self.record.component(kind).pattern_string()
    }
}
