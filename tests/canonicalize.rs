use url_pattern_rs::canonicalize::{
    CanonicalizeError, canonicalize_hash, canonicalize_hostname, canonicalize_ipv6_hostname,
    canonicalize_opaque_pathname, canonicalize_pathname, canonicalize_port,
    canonicalize_protocol, canonicalize_search, canonicalize_username, default_port_for_scheme,
    is_special_scheme,
};

#[test]
fn empty_values_pass_through() {
    assert_eq!(canonicalize_protocol("").expect("empty protocol"), "");
    assert_eq!(canonicalize_hostname("").expect("empty hostname"), "");
    assert_eq!(canonicalize_port("", Some("http")).expect("empty port"), "");
    assert_eq!(canonicalize_pathname("").expect("empty pathname"), "");
    assert_eq!(canonicalize_search("").expect("empty search"), "");
}

#[test]
fn protocol_is_lowercased() {
    assert_eq!(canonicalize_protocol("HTTPS").expect("protocol"), "https");
}

#[test]
fn invalid_protocol_is_rejected() {
    let err = canonicalize_protocol("1http").expect_err("scheme must start with a letter");
    match err {
        CanonicalizeError::Protocol { value } => assert_eq!(value, "1http"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn hostname_is_lowercased() {
    assert_eq!(
        canonicalize_hostname("EXAMPLE.com").expect("hostname"),
        "example.com"
    );
}

#[test]
fn ipv6_hostname_accepts_only_hex_colons_and_brackets() {
    assert_eq!(
        canonicalize_ipv6_hostname("[::AB]").expect("ipv6 hostname"),
        "[::ab]"
    );

    let err = canonicalize_ipv6_hostname("[::g]").expect_err("g is not a hex digit");
    match err {
        CanonicalizeError::Ipv6Hostname { invalid, .. } => assert_eq!(invalid, 'g'),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn port_requires_leading_digits_in_range() {
    assert_eq!(canonicalize_port("8080", None).expect("port"), "8080");
    assert!(canonicalize_port("a80", None).is_err());
    assert!(canonicalize_port("65536", None).is_err());
}

#[test]
fn port_ignores_trailing_non_digits() {
    assert_eq!(canonicalize_port("8080abc", None).expect("port"), "8080");
    assert_eq!(canonicalize_port("80a", None).expect("port"), "80");
    assert_eq!(canonicalize_port("80a", Some("http")).expect("port"), "");
}

#[test]
fn default_port_of_special_scheme_is_empty() {
    assert_eq!(canonicalize_port("80", Some("http")).expect("port"), "");
    assert_eq!(canonicalize_port("80", Some("https")).expect("port"), "80");
    assert_eq!(canonicalize_port("21", Some("ftp")).expect("port"), "");
}

#[test]
fn pathname_is_percent_encoded() {
    assert_eq!(canonicalize_pathname("/a b").expect("pathname"), "/a%20b");
    assert_eq!(
        canonicalize_opaque_pathname("text/plain,x").expect("opaque pathname"),
        "text/plain,x"
    );
}

#[test]
fn opaque_pathname_keeps_leading_slash() {
    assert_eq!(
        canonicalize_opaque_pathname("/bar").expect("opaque pathname"),
        "/bar"
    );
    assert_eq!(
        canonicalize_opaque_pathname("/repo/:name").expect("opaque pathname"),
        "/repo/:name"
    );
}

#[test]
fn search_and_hash_are_percent_encoded() {
    assert_eq!(canonicalize_search("q=a b").expect("search"), "q=a%20b");
    assert_eq!(canonicalize_hash("a b").expect("hash"), "a%20b");
}

#[test]
fn search_uses_non_special_query_encoding() {
    assert_eq!(canonicalize_search("a'b").expect("search"), "a'b");
    assert_eq!(canonicalize_search("q=\"x\"").expect("search"), "q=%22x%22");
}

#[test]
fn username_encodes_userinfo_characters() {
    assert_eq!(canonicalize_username("a@b").expect("username"), "a%40b");
}

#[test]
fn special_schemes_and_default_ports() {
    for scheme in ["ftp", "file", "http", "https", "ws", "wss"] {
        assert!(is_special_scheme(scheme), "{scheme}");
    }
    assert!(!is_special_scheme("data"));

    assert_eq!(default_port_for_scheme("http"), Some(80));
    assert_eq!(default_port_for_scheme("wss"), Some(443));
    assert_eq!(default_port_for_scheme("file"), None);
}
