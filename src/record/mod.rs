mod result;

pub use result::{ComponentResult, MatchGroups, MatchResult};

use url::Url;

use crate::canonicalize::{
    canonicalize_hash, canonicalize_hostname, canonicalize_ipv6_hostname,
    canonicalize_opaque_pathname, canonicalize_password, canonicalize_pathname,
    canonicalize_port, canonicalize_protocol, canonicalize_search, canonicalize_username,
    default_port_for_scheme, is_special_scheme,
};
use crate::component::{CaptureList, Component};
use crate::errors::{UrlPatternError, UrlPatternResult};
use crate::init::{
    PatternInit, PatternProcessType, UrlPatternInput, parse_constructor_string, process_init,
};
use crate::options::UrlPatternOptions;
use crate::pattern::Options;

const WILDCARD: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Protocol,
    Username,
    Password,
    Hostname,
    Port,
    Pathname,
    Search,
    Hash,
}

impl ComponentKind {
    /// Compile and match order.
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Protocol,
        ComponentKind::Username,
        ComponentKind::Password,
        ComponentKind::Hostname,
        ComponentKind::Port,
        ComponentKind::Pathname,
        ComponentKind::Search,
        ComponentKind::Hash,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Protocol => "protocol",
            ComponentKind::Username => "username",
            ComponentKind::Password => "password",
            ComponentKind::Hostname => "hostname",
            ComponentKind::Port => "port",
            ComponentKind::Pathname => "pathname",
            ComponentKind::Search => "search",
            ComponentKind::Hash => "hash",
        }
    }
}

/// Eight compiled components, immutable after [`PatternRecord::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRecord {
    protocol: Component,
    username: Component,
    password: Component,
    hostname: Component,
    port: Component,
    pathname: Component,
    search: Component,
    hash: Component,
}

/// Literal values of one URL, one per component.
#[derive(Debug, Default)]
struct UrlValues {
    protocol: String,
    username: String,
    password: String,
    hostname: String,
    port: String,
    pathname: String,
    search: String,
    hash: String,
}

impl UrlValues {
    fn from_url(url: &Url) -> Self {
        Self {
            protocol: url.scheme().to_string(),
            username: url.username().to_string(),
            password: url.password().unwrap_or_default().to_string(),
            hostname: url.host_str().unwrap_or_default().to_string(),
            port: url.port().map(|p| p.to_string()).unwrap_or_default(),
            pathname: url.path().to_string(),
            search: url.query().unwrap_or_default().to_string(),
            hash: url.fragment().unwrap_or_default().to_string(),
        }
    }

    fn from_init(init: PatternInit) -> Self {
        Self {
            protocol: init.protocol.unwrap_or_default(),
            username: init.username.unwrap_or_default(),
            password: init.password.unwrap_or_default(),
            hostname: init.hostname.unwrap_or_default(),
            port: init.port.unwrap_or_default(),
            pathname: init.pathname.unwrap_or_default(),
            search: init.search.unwrap_or_default(),
            hash: init.hash.unwrap_or_default(),
        }
    }

    fn get(&self, kind: ComponentKind) -> &str {
        match kind {
            ComponentKind::Protocol => &self.protocol,
            ComponentKind::Username => &self.username,
            ComponentKind::Password => &self.password,
            ComponentKind::Hostname => &self.hostname,
            ComponentKind::Port => &self.port,
            ComponentKind::Pathname => &self.pathname,
            ComponentKind::Search => &self.search,
            ComponentKind::Hash => &self.hash,
        }
    }
}

impl PatternRecord {
    #[tracing::instrument(level = "debug", skip_all, fields(base_url = base_url))]
    pub fn create(
        input: &UrlPatternInput,
        base_url: Option<&str>,
        options: &UrlPatternOptions,
    ) -> UrlPatternResult<Self> {
        let init = match input {
            UrlPatternInput::String(pattern) => {
                let mut init = parse_constructor_string(pattern)?;

                if base_url.is_none() && init.protocol.is_none() {
                    return Err(UrlPatternError::MissingProtocolOrBase {
                        pattern: pattern.clone(),
                    });
                }

                init.base_url = base_url.map(str::to_string);
                init
            }
            UrlPatternInput::Init(init) => {
                if base_url.is_some() {
                    return Err(UrlPatternError::BaseUrlWithInit);
                }

                init.clone()
            }
        };

        let processed = process_init(&init, PatternProcessType::Pattern)?;

        let protocol = processed.protocol.unwrap_or_else(|| WILDCARD.to_string());
        let username = processed.username.unwrap_or_else(|| WILDCARD.to_string());
        let password = processed.password.unwrap_or_else(|| WILDCARD.to_string());
        let hostname = processed.hostname.unwrap_or_else(|| WILDCARD.to_string());
        let mut port = processed.port.unwrap_or_else(|| WILDCARD.to_string());
        let pathname = processed.pathname.unwrap_or_else(|| WILDCARD.to_string());
        let search = processed.search.unwrap_or_else(|| WILDCARD.to_string());
        let hash = processed.hash.unwrap_or_else(|| WILDCARD.to_string());

        if is_special_scheme(&protocol)
            && default_port_for_scheme(&protocol).is_some_and(|p| p.to_string() == port)
        {
            port.clear();
        }

        let protocol = Component::compile(&protocol, &canonicalize_protocol, &Options::DEFAULT)?;
        let username = Component::compile(&username, &canonicalize_username, &Options::DEFAULT)?;
        let password = Component::compile(&password, &canonicalize_password, &Options::DEFAULT)?;

        let hostname = if hostname_pattern_is_ipv6_address(&hostname) {
            Component::compile(&hostname, &canonicalize_ipv6_hostname, &Options::HOSTNAME)?
        } else {
            Component::compile(&hostname, &canonicalize_hostname, &Options::HOSTNAME)?
        };

        let port = Component::compile(
            &port,
            &|value: &str| canonicalize_port(value, None),
            &Options::DEFAULT,
        )?;

        let ignore_case = options.ignore_case;

        let pathname = if protocol.matches_special_scheme() {
            Component::compile(
                &pathname,
                &canonicalize_pathname,
                &Options::PATHNAME.with_ignore_case(ignore_case),
            )?
        } else {
            Component::compile(
                &pathname,
                &canonicalize_opaque_pathname,
                &Options::DEFAULT.with_ignore_case(ignore_case),
            )?
        };

        let search = Component::compile(
            &search,
            &canonicalize_search,
            &Options::DEFAULT.with_ignore_case(ignore_case),
        )?;
        let hash = Component::compile(
            &hash,
            &canonicalize_hash,
            &Options::DEFAULT.with_ignore_case(ignore_case),
        )?;

        let record = Self {
            protocol,
            username,
            password,
            hostname,
            port,
            pathname,
            search,
            hash,
        };

        tracing::debug!(
            protocol = record.protocol.pattern_string(),
            hostname = record.hostname.pattern_string(),
            pathname = record.pathname.pattern_string(),
            "pattern record created"
        );

        Ok(record)
    }

    pub fn component(&self, kind: ComponentKind) -> &Component {
        match kind {
            ComponentKind::Protocol => &self.protocol,
            ComponentKind::Username => &self.username,
            ComponentKind::Password => &self.password,
            ComponentKind::Hostname => &self.hostname,
            ComponentKind::Port => &self.port,
            ComponentKind::Pathname => &self.pathname,
            ComponentKind::Search => &self.search,
            ComponentKind::Hash => &self.hash,
        }
    }

    pub fn has_regexp_groups(&self) -> bool {
        ComponentKind::ALL
            .iter()
            .any(|&kind| self.component(kind).has_regexp_groups())
    }

    /// `Ok(None)` for inputs that fail to parse, process, or match; errors are
    /// reserved for misuse such as pairing an init with a base URL.
    #[tracing::instrument(level = "trace", skip_all, fields(base_url = base_url))]
    pub fn match_input(
        &self,
        input: &UrlPatternInput,
        base_url: Option<&str>,
    ) -> UrlPatternResult<Option<MatchResult>> {
        let mut inputs = vec![input.clone()];

        let values = match input {
            UrlPatternInput::Init(init) => {
                if base_url.is_some() {
                    return Err(UrlPatternError::BaseUrlWithInit);
                }

                match process_init(init, PatternProcessType::Url) {
                    Ok(processed) => UrlValues::from_init(processed),
                    Err(err) => {
                        tracing::trace!(error = %err, "init could not be processed");
                        return Ok(None);
                    }
                }
            }
            UrlPatternInput::String(url) => {
                let base = match base_url {
                    Some(base) => match Url::parse(base) {
                        Ok(parsed) => Some(parsed),
                        Err(_) => return Ok(None),
                    },
                    None => None,
                };

                let Ok(parsed) = Url::options().base_url(base.as_ref()).parse(url) else {
                    return Ok(None);
                };

                if let Some(base) = base_url {
                    inputs.push(UrlPatternInput::String(base.to_string()));
                }

                UrlValues::from_url(&parsed)
            }
        };

        let mut captures: [CaptureList; 8] = Default::default();

        for (slot, kind) in captures.iter_mut().zip(ComponentKind::ALL) {
            match self.component(kind).captures(values.get(kind)) {
                Some(found) => *slot = found,
                None => {
                    tracing::debug!(component = kind.as_str(), "component did not match");
                    return Ok(None);
                }
            }
        }

        let [protocol, username, password, hostname, port, pathname, search, hash] = captures;

        Ok(Some(MatchResult {
            inputs,
            protocol: component_result(&self.protocol, values.protocol, protocol),
            username: component_result(&self.username, values.username, username),
            password: component_result(&self.password, values.password, password),
            hostname: component_result(&self.hostname, values.hostname, hostname),
            port: component_result(&self.port, values.port, port),
            pathname: component_result(&self.pathname, values.pathname, pathname),
            search: component_result(&self.search, values.search, search),
            hash: component_result(&self.hash, values.hash, hash),
        }))
    }
}

fn component_result(
    component: &Component,
    input: String,
    captures: CaptureList,
) -> ComponentResult {
    let groups = component
        .group_name_list()
        .iter()
        .cloned()
        .zip(captures)
        .collect::<MatchGroups>();

    ComponentResult { input, groups }
}

fn hostname_pattern_is_ipv6_address(input: &str) -> bool {
    let mut chars = input.chars();

    matches!(
        (chars.next(), chars.next()),
        (Some('['), Some(_)) | (Some('{'), Some('[')) | (Some('\\'), Some('['))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_ipv6_hostname_patterns() {
        assert!(hostname_pattern_is_ipv6_address("[::1]"));
        assert!(hostname_pattern_is_ipv6_address("{[::1]}"));
        assert!(hostname_pattern_is_ipv6_address("\\[::1]"));
        assert!(!hostname_pattern_is_ipv6_address("["));
        assert!(!hostname_pattern_is_ipv6_address("example.com"));
    }

    #[test]
    fn default_port_of_special_scheme_is_cleared() {
        let input = UrlPatternInput::Init(PatternInit::new().protocol("https").port("443"));
        let record = PatternRecord::create(&input, None, &UrlPatternOptions::default()).unwrap();

        assert_eq!(record.component(ComponentKind::Port).pattern_string(), "");
    }

    #[test]
    fn missing_fields_become_wildcards() {
        let input = UrlPatternInput::Init(PatternInit::new().pathname("/a"));
        let record = PatternRecord::create(&input, None, &UrlPatternOptions::default()).unwrap();

        for kind in ComponentKind::ALL {
            let expected = if kind == ComponentKind::Pathname { "/a" } else { "*" };
            assert_eq!(record.component(kind).pattern_string(), expected, "{}", kind.as_str());
        }
    }
}
