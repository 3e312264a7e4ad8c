use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalizeError {
    #[error("protocol '{value}' cannot be canonicalized")]
    Protocol { value: String },
    #[error("username '{value}' cannot be canonicalized")]
    Username { value: String },
    #[error("password '{value}' cannot be canonicalized")]
    Password { value: String },
    #[error("hostname '{value}' cannot be canonicalized")]
    Hostname { value: String },
    #[error("IPv6 hostname '{value}' contains invalid character '{invalid}'")]
    Ipv6Hostname { value: String, invalid: char },
    #[error("port '{value}' is not a valid port number")]
    Port { value: String },
    #[error("pathname '{value}' cannot be canonicalized")]
    Pathname { value: String },
    #[error("search '{value}' cannot be canonicalized")]
    Search { value: String },
    #[error("hash '{value}' cannot be canonicalized")]
    Hash { value: String },
}

pub type CanonicalizeResult<T> = Result<T, CanonicalizeError>;
