use pretty_assertions::assert_eq;
use url_pattern_rs::PatternInit;
use url_pattern_rs::init::{PatternProcessType, parse_constructor_string, process_init};

#[test]
fn splits_every_component() {
    let init = parse_constructor_string("https://example.com:8080/foo/bar?q=*#frag")
        .expect("constructor string should parse");

    assert_eq!(
        init,
        PatternInit::new()
            .protocol("https")
            .hostname("example.com")
            .port("8080")
            .pathname("/foo/bar")
            .search("q=*")
            .hash("frag")
    );
}

#[test]
fn search_prefix_after_name_is_a_modifier() {
    let init = parse_constructor_string("https://example.com/:id?")
        .expect("constructor string should parse");

    assert_eq!(init.pathname.as_deref(), Some("/:id?"));
    assert_eq!(init.search, None);
}

#[test]
fn hash_only_string() {
    let init = parse_constructor_string("#top").expect("constructor string should parse");

    assert_eq!(init.hash.as_deref(), Some("top"));
    assert_eq!(init.pathname, None);
}

#[test]
fn search_fills_in_pathname_for_special_scheme() {
    let init = parse_constructor_string("https://example.com?q")
        .expect("constructor string should parse");

    assert_eq!(init.hostname.as_deref(), Some("example.com"));
    assert_eq!(init.pathname.as_deref(), Some("/"));
    assert_eq!(init.search.as_deref(), Some("q"));
}

#[test]
fn ipv6_brackets_hide_port_prefix() {
    let init = parse_constructor_string("http://[\\:\\:1]:8080/")
        .expect("constructor string should parse");

    assert_eq!(init.hostname.as_deref(), Some("[\\:\\:1]"));
    assert_eq!(init.port.as_deref(), Some("8080"));
}

#[test]
fn grouped_protocol_pattern_is_kept_whole() {
    let init = parse_constructor_string("http{s}?://example.com/")
        .expect("constructor string should parse");

    assert_eq!(init.protocol.as_deref(), Some("http{s}?"));
    assert_eq!(init.hostname.as_deref(), Some("example.com"));
}

#[test]
fn pattern_mode_inherits_from_base_url() {
    let init = PatternInit::new()
        .pathname("c")
        .base_url("https://example.com/a/b?x#y");

    let processed =
        process_init(&init, PatternProcessType::Pattern).expect("init should process");

    assert_eq!(processed.protocol.as_deref(), Some("https"));
    assert_eq!(processed.hostname.as_deref(), Some("example.com"));
    assert_eq!(processed.port.as_deref(), Some(""));
    assert_eq!(processed.pathname.as_deref(), Some("/a/c"));
    assert_eq!(processed.username, None);
    assert_eq!(processed.search, None);
    assert_eq!(processed.hash, None);
}

#[test]
fn pattern_mode_strips_delimiters_without_canonicalizing() {
    let init = PatternInit::new()
        .protocol("HTTP:")
        .search("?a b")
        .hash("#frag");

    let processed =
        process_init(&init, PatternProcessType::Pattern).expect("init should process");

    assert_eq!(processed.protocol.as_deref(), Some("HTTP"));
    assert_eq!(processed.search.as_deref(), Some("a b"));
    assert_eq!(processed.hash.as_deref(), Some("frag"));
}

#[test]
fn url_mode_canonicalizes_values() {
    let init = PatternInit::new()
        .protocol("HTTP")
        .hostname("EXAMPLE.com")
        .port("80")
        .pathname("/a b");

    let processed = process_init(&init, PatternProcessType::Url).expect("init should process");

    assert_eq!(processed.protocol.as_deref(), Some("http"));
    assert_eq!(processed.hostname.as_deref(), Some("example.com"));
    assert_eq!(processed.port.as_deref(), Some(""));
    assert_eq!(processed.pathname.as_deref(), Some("/a%20b"));
    assert_eq!(processed.search.as_deref(), Some(""));
}

#[test]
fn invalid_base_url_is_rejected() {
    let init = PatternInit::new().pathname("/a").base_url("not a url");

    let err = process_init(&init, PatternProcessType::Pattern)
        .expect_err("base URL should be rejected");
    assert_eq!(err.kind(), url_pattern_rs::ErrorKind::InputShape);
}
