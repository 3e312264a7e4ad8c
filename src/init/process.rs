use memchr::memrchr;
use url::Url;

use crate::canonicalize::{
    canonicalize_hash, canonicalize_hostname, canonicalize_opaque_pathname,
    canonicalize_password, canonicalize_pathname, canonicalize_port, canonicalize_protocol,
    canonicalize_search, canonicalize_username, is_special_scheme,
};
use crate::errors::{UrlPatternError, UrlPatternResult};
use crate::init::PatternInit;
use crate::pattern::escape_pattern_string;

/// `Pattern` keeps values as pattern text; `Url` canonicalizes them as literal URL parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternProcessType {
    Pattern,
    Url,
}

#[tracing::instrument(level = "trace", skip(init), fields(base_url = init.base_url.as_deref()))]
pub fn process_init(init: &PatternInit, kind: PatternProcessType) -> UrlPatternResult<PatternInit> {
    let mut result = match kind {
        PatternProcessType::Pattern => PatternInit::default(),
        PatternProcessType::Url => PatternInit {
            protocol: Some(String::new()),
            username: Some(String::new()),
            password: Some(String::new()),
            hostname: Some(String::new()),
            port: Some(String::new()),
            pathname: Some(String::new()),
            search: Some(String::new()),
            hash: Some(String::new()),
            base_url: None,
        },
    };

    let base_url = match &init.base_url {
        Some(base) => Some(Url::parse(base).map_err(|_| UrlPatternError::InvalidBaseUrl {
            base_url: base.clone(),
        })?),
        None => None,
    };

    if let Some(base) = &base_url {
        inherit_from_base_url(&mut result, init, base, kind);
    }

    if let Some(protocol) = &init.protocol {
        result.protocol = Some(process_protocol_for_init(protocol, kind)?);
    }

    if let Some(username) = &init.username {
        result.username = Some(process_username_for_init(username, kind)?);
    }

    if let Some(password) = &init.password {
        result.password = Some(process_password_for_init(password, kind)?);
    }

    if let Some(hostname) = &init.hostname {
        result.hostname = Some(process_hostname_for_init(hostname, kind)?);
    }

    if let Some(port) = &init.port {
        result.port = Some(process_port_for_init(
            port,
            result.protocol.as_deref(),
            kind,
        )?);
    }

    if let Some(pathname) = &init.pathname {
        let mut pathname = pathname.clone();

        if let Some(base) = &base_url
            && !base.cannot_be_a_base()
            && !is_absolute_pathname(&pathname, kind)
        {
            let base_path = process_base_url_string(base.path(), kind);

            if let Some(slash_index) = memrchr(b'/', base_path.as_bytes()) {
                pathname = format!("{}{}", &base_path[..=slash_index], pathname);
            }
        }

        result.pathname = Some(process_pathname_for_init(
            &pathname,
            result.protocol.as_deref(),
            kind,
        )?);
    }

    if let Some(search) = &init.search {
        result.search = Some(process_search_for_init(search, kind)?);
    }

    if let Some(hash) = &init.hash {
        result.hash = Some(process_hash_for_init(hash, kind)?);
    }

    Ok(result)
}

/// A field is inherited only when no more significant field was given.
fn inherit_from_base_url(
    result: &mut PatternInit,
    init: &PatternInit,
    base: &Url,
    kind: PatternProcessType,
) {
    let has_protocol = init.protocol.is_some();
    let has_hostname = has_protocol || init.hostname.is_some();
    let has_port = has_hostname || init.port.is_some();
    let has_pathname = has_port || init.pathname.is_some();
    let has_search = has_pathname || init.search.is_some();
    let has_hash = has_search || init.hash.is_some();

    if !has_protocol {
        result.protocol = Some(process_base_url_string(base.scheme(), kind));
    }

    if kind != PatternProcessType::Pattern && !has_port && init.username.is_none() {
        result.username = Some(process_base_url_string(base.username(), kind));
    }

    if kind != PatternProcessType::Pattern
        && !has_port
        && init.username.is_none()
        && init.password.is_none()
    {
        result.password = Some(process_base_url_string(
            base.password().unwrap_or_default(),
            kind,
        ));
    }

    if !has_hostname {
        result.hostname = Some(process_base_url_string(
            base.host_str().unwrap_or_default(),
            kind,
        ));
    }

    if !has_port {
        result.port = Some(base.port().map(|p| p.to_string()).unwrap_or_default());
    }

    if !has_pathname {
        result.pathname = Some(process_base_url_string(base.path(), kind));
    }

    if !has_search {
        result.search = Some(process_base_url_string(
            base.query().unwrap_or_default(),
            kind,
        ));
    }

    if !has_hash {
        result.hash = Some(process_base_url_string(
            base.fragment().unwrap_or_default(),
            kind,
        ));
    }
}

fn process_base_url_string(input: &str, kind: PatternProcessType) -> String {
    match kind {
        PatternProcessType::Pattern => escape_pattern_string(input),
        PatternProcessType::Url => input.to_string(),
    }
}

fn is_absolute_pathname(input: &str, kind: PatternProcessType) -> bool {
    let mut chars = input.chars();

    match (chars.next(), chars.next()) {
        (Some('/'), _) => true,
        _ if kind == PatternProcessType::Url => false,
        (Some('\\'), Some('/')) | (Some('{'), Some('/')) => true,
        _ => false,
    }
}

fn process_protocol_for_init(value: &str, kind: PatternProcessType) -> UrlPatternResult<String> {
    let stripped = value.strip_suffix(':').unwrap_or(value);

    match kind {
        PatternProcessType::Pattern => Ok(stripped.to_string()),
        PatternProcessType::Url => Ok(canonicalize_protocol(stripped)?),
    }
}

fn process_username_for_init(value: &str, kind: PatternProcessType) -> UrlPatternResult<String> {
    match kind {
        PatternProcessType::Pattern => Ok(value.to_string()),
        PatternProcessType::Url => Ok(canonicalize_username(value)?),
    }
}

fn process_password_for_init(value: &str, kind: PatternProcessType) -> UrlPatternResult<String> {
    match kind {
        PatternProcessType::Pattern => Ok(value.to_string()),
        PatternProcessType::Url => Ok(canonicalize_password(value)?),
    }
}

fn process_hostname_for_init(value: &str, kind: PatternProcessType) -> UrlPatternResult<String> {
    match kind {
        PatternProcessType::Pattern => Ok(value.to_string()),
        PatternProcessType::Url => Ok(canonicalize_hostname(value)?),
    }
}

fn process_port_for_init(
    value: &str,
    protocol: Option<&str>,
    kind: PatternProcessType,
) -> UrlPatternResult<String> {
    match kind {
        PatternProcessType::Pattern => Ok(value.to_string()),
        PatternProcessType::Url => Ok(canonicalize_port(value, protocol)?),
    }
}

fn process_pathname_for_init(
    value: &str,
    protocol: Option<&str>,
    kind: PatternProcessType,
) -> UrlPatternResult<String> {
    if kind == PatternProcessType::Pattern {
        return Ok(value.to_string());
    }

    let protocol = protocol.unwrap_or_default();

    if protocol.is_empty() || is_special_scheme(protocol) {
        Ok(canonicalize_pathname(value)?)
    } else {
        Ok(canonicalize_opaque_pathname(value)?)
    }
}

fn process_search_for_init(value: &str, kind: PatternProcessType) -> UrlPatternResult<String> {
    let stripped = value.strip_prefix('?').unwrap_or(value);

    match kind {
        PatternProcessType::Pattern => Ok(stripped.to_string()),
        PatternProcessType::Url => Ok(canonicalize_search(stripped)?),
    }
}

fn process_hash_for_init(value: &str, kind: PatternProcessType) -> UrlPatternResult<String> {
    let stripped = value.strip_prefix('#').unwrap_or(value);

    match kind {
        PatternProcessType::Pattern => Ok(stripped.to_string()),
        PatternProcessType::Url => Ok(canonicalize_hash(stripped)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_pathname_rules_depend_on_process_type() {
        assert!(is_absolute_pathname("/a", PatternProcessType::Url));
        assert!(!is_absolute_pathname("{/a}", PatternProcessType::Url));
        assert!(is_absolute_pathname("{/a}", PatternProcessType::Pattern));
        assert!(is_absolute_pathname("\\/a", PatternProcessType::Pattern));
        assert!(!is_absolute_pathname("a", PatternProcessType::Pattern));
        assert!(!is_absolute_pathname("", PatternProcessType::Pattern));
    }
}
