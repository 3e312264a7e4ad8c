use percent_encoding::{CONTROLS, utf8_percent_encode};
use url::Url;

use crate::canonicalize::{CanonicalizeError, CanonicalizeResult};

const DUMMY_URL: &str = "http://dummy.test";
const DUMMY_NON_SPECIAL_URL: &str = "fake://dummy.test";
const NON_SPECIAL_SCHEME: &str = "fake";

fn dummy_url(
    input: &str,
    on_error: impl FnOnce() -> CanonicalizeError,
) -> CanonicalizeResult<Url> {
    Url::parse(input).map_err(|_| on_error())
}

pub fn canonicalize_protocol(value: &str) -> CanonicalizeResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    // The protocol setter rejects some scheme transitions, so parse a whole URL instead.
    Url::parse(&format!("{value}://dummy.test"))
        .map(|url| url.scheme().to_string())
        .map_err(|_| CanonicalizeError::Protocol {
            value: value.to_string(),
        })
}

pub fn canonicalize_username(value: &str) -> CanonicalizeResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let err = || CanonicalizeError::Username {
        value: value.to_string(),
    };
    let mut url = dummy_url(DUMMY_URL, err)?;
    url.set_username(value).map_err(|_| err())?;

    Ok(url.username().to_string())
}

pub fn canonicalize_password(value: &str) -> CanonicalizeResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let err = || CanonicalizeError::Password {
        value: value.to_string(),
    };
    let mut url = dummy_url(DUMMY_URL, err)?;
    url.set_password(Some(value)).map_err(|_| err())?;

    Ok(url.password().unwrap_or_default().to_string())
}

pub fn canonicalize_hostname(value: &str) -> CanonicalizeResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let err = || CanonicalizeError::Hostname {
        value: value.to_string(),
    };
    let mut url = dummy_url(DUMMY_URL, err)?;
    url::quirks::set_hostname(&mut url, value).map_err(|_| err())?;

    Ok(url::quirks::hostname(&url).to_string())
}

pub fn canonicalize_ipv6_hostname(value: &str) -> CanonicalizeResult<String> {
    let mut result = String::with_capacity(value.len());

    for code_point in value.chars() {
        if !code_point.is_ascii_hexdigit() && !matches!(code_point, '[' | ']' | ':') {
            return Err(CanonicalizeError::Ipv6Hostname {
                value: value.to_string(),
                invalid: code_point,
            });
        }

        result.push(code_point.to_ascii_lowercase());
    }

    Ok(result)
}

/// `protocol` lets the default port of a special scheme canonicalize to "".
/// Anything after the leading digits is ignored, as the URL port setter does.
pub fn canonicalize_port(value: &str, protocol: Option<&str>) -> CanonicalizeResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let err = || CanonicalizeError::Port {
        value: value.to_string(),
    };

    if !value.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(err());
    }

    let scheme = protocol
        .filter(|p| !p.is_empty())
        .unwrap_or(NON_SPECIAL_SCHEME);
    let mut url = dummy_url(&format!("{scheme}://dummy.test"), err)?;
    url::quirks::set_port(&mut url, value).map_err(|_| err())?;

    Ok(url.port().map(|port| port.to_string()).unwrap_or_default())
}

pub fn canonicalize_pathname(value: &str) -> CanonicalizeResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let leading_slash = value.starts_with('/');
    let modified_value = if leading_slash {
        value.to_string()
    } else {
        format!("/-{value}")
    };

    let mut url = dummy_url(DUMMY_URL, || CanonicalizeError::Pathname {
        value: value.to_string(),
    })?;
    url.set_path(&modified_value);

    let path = url.path();

    if leading_slash {
        Ok(path.to_string())
    } else {
        Ok(path.get(2..).unwrap_or_default().to_string())
    }
}

/// Opaque paths only escape C0 controls and non-ASCII; a leading `/` stays literal.
pub fn canonicalize_opaque_pathname(value: &str) -> CanonicalizeResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    Ok(utf8_percent_encode(value, CONTROLS).to_string())
}

pub fn canonicalize_search(value: &str) -> CanonicalizeResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    // Non-special query encoding leaves `'` alone.
    let mut url = dummy_url(DUMMY_NON_SPECIAL_URL, || CanonicalizeError::Search {
        value: value.to_string(),
    })?;
    url.set_query(Some(value));

    Ok(url.query().unwrap_or_default().to_string())
}

pub fn canonicalize_hash(value: &str) -> CanonicalizeResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let mut url = dummy_url(DUMMY_URL, || CanonicalizeError::Hash {
        value: value.to_string(),
    })?;
    url.set_fragment(Some(value));

    Ok(url.fragment().unwrap_or_default().to_string())
}
