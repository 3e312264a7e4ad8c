mod error;
mod field;
mod scheme;

pub use error::{CanonicalizeError, CanonicalizeResult};
pub use field::{
    canonicalize_hash, canonicalize_hostname, canonicalize_ipv6_hostname,
    canonicalize_opaque_pathname, canonicalize_password, canonicalize_pathname,
    canonicalize_port, canonicalize_protocol, canonicalize_search, canonicalize_username,
};
pub use scheme::{SPECIAL_SCHEMES, default_port_for_scheme, is_special_scheme};
