use url_pattern_rs::pattern::PatternError;
use url_pattern_rs::{
    ErrorKind, PatternInit, UrlPattern, UrlPatternError, UrlPatternInput, UrlPatternOptions,
};

#[test]
fn options_builder_sets_ignore_case() {
    let options = UrlPatternOptions::builder().ignore_case(true).build();
    assert!(options.ignore_case);
    assert!(!UrlPatternOptions::default().ignore_case);
}

#[test]
fn options_deserialize_from_camel_case() {
    let options: UrlPatternOptions =
        serde_json::from_str(r#"{"ignoreCase":true}"#).expect("options should deserialize");
    assert!(options.ignore_case);

    let empty: UrlPatternOptions = serde_json::from_str("{}").expect("defaults should apply");
    assert_eq!(empty, UrlPatternOptions::default());
}

#[test]
fn input_deserializes_as_string_or_init() {
    let string: UrlPatternInput =
        serde_json::from_str(r#""https://example.com/*""#).expect("string input");
    assert_eq!(string, UrlPatternInput::from("https://example.com/*"));

    let init: UrlPatternInput = serde_json::from_str(
        r#"{"pathname":"/books/:id","baseURL":"https://example.com"}"#,
    )
    .expect("init input");
    assert_eq!(
        init,
        UrlPatternInput::from(
            PatternInit::new()
                .pathname("/books/:id")
                .base_url("https://example.com")
        )
    );
}

#[test]
fn match_result_serializes_groups_as_map() {
    let pattern = UrlPattern::parse("https://example.com/books/:id/:rev?")
        .expect("pattern should compile");
    let result = pattern
        .exec("https://example.com/books/7", None)
        .expect("exec should not fail")
        .expect("url should match");

    let value = serde_json::to_value(&result).expect("result should serialize");

    assert_eq!(value["inputs"][0], "https://example.com/books/7");
    assert_eq!(value["pathname"]["input"], "/books/7");
    assert_eq!(value["pathname"]["groups"]["id"], "7");
    assert!(value["pathname"]["groups"]["rev"].is_null());
}

#[test]
fn relative_string_without_base_is_rejected() {
    let err = UrlPattern::parse("/books/:id").expect_err("relative pattern needs a base");
    assert_eq!(err.kind(), ErrorKind::InputShape);
    match err {
        UrlPatternError::MissingProtocolOrBase { pattern } => assert_eq!(pattern, "/books/:id"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn init_with_separate_base_is_rejected() {
    let err = UrlPattern::new(
        PatternInit::new().pathname("/a"),
        Some("https://example.com"),
        None,
    )
    .expect_err("init plus base should be rejected");
    assert_eq!(err, UrlPatternError::BaseUrlWithInit);

    let pattern = UrlPattern::parse("https://example.com/*").expect("pattern should compile");
    let err = pattern
        .exec(PatternInit::new().pathname("/a"), Some("https://example.com"))
        .expect_err("init plus base should be rejected when matching");
    assert_eq!(err.kind(), ErrorKind::InputShape);
}

#[test]
fn syntax_errors_are_classified() {
    let err = UrlPattern::new(PatternInit::new().pathname("/:id/:id"), None, None)
        .expect_err("duplicate names should be rejected");
    assert_eq!(err.kind(), ErrorKind::Syntax);
    match err {
        UrlPatternError::Pattern(PatternError::DuplicateName { name, .. }) => {
            assert_eq!(name, "id")
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = UrlPattern::new(PatternInit::new().pathname("/(a"), None, None)
        .expect_err("unterminated regexp should be rejected");
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn invalid_regexp_body_is_a_compile_error() {
    let err = UrlPattern::new(PatternInit::new().pathname("/(a{2,1})"), None, None)
        .expect_err("regex backend should reject the group");
    assert_eq!(err.kind(), ErrorKind::RegexCompile);
}

#[test]
fn invalid_literal_is_a_canonicalization_error() {
    let err = UrlPattern::new(PatternInit::new().port("http"), None, None)
        .expect_err("port must be numeric");
    assert_eq!(err.kind(), ErrorKind::Canonicalization);
}

#[test]
fn pattern_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<UrlPattern>();

    let pattern = std::sync::Arc::new(
        UrlPattern::parse("https://example.com/items/:id").expect("pattern should compile"),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let pattern = std::sync::Arc::clone(&pattern);
            std::thread::spawn(move || {
                let url = format!("https://example.com/items/{i}");
                pattern
                    .test(url.as_str(), None)
                    .expect("test should not fail")
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("thread should finish"));
    }
}
