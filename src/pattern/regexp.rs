use crate::pattern::Options;
use crate::pattern::ast::{Modifier, Part, PartType};

pub const FULL_WILDCARD_REGEXP: &str = ".*";

/// Backend rendering of a segment wildcard with no delimiter; `[^]` has no
/// equivalent in the regex crate.
const UNDELIMITED_SEGMENT_BODY: &str = "(?s:.)+?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexAndNameList {
    pub regex_source: String,
    pub name_list: Vec<String>,
}

pub fn escape_regexp_string(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for c in input.chars() {
        if matches!(
            c,
            '.' | '+' | '*' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '[' | ']' | '|' | '/' | '\\'
        ) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Pattern-level text of a segment wildcard, used to classify parts and to
/// regenerate pattern strings.
pub fn segment_wildcard_regexp(options: &Options) -> String {
    let delimiter = options
        .delimiter_code_point
        .map(|c| escape_regexp_string(c.encode_utf8(&mut [0u8; 4])))
        .unwrap_or_default();

    format!("[^{delimiter}]+?")
}

fn segment_wildcard_body(options: &Options) -> String {
    match options.delimiter_code_point {
        Some(_) => segment_wildcard_regexp(options),
        None => UNDELIMITED_SEGMENT_BODY.to_string(),
    }
}

#[tracing::instrument(level = "trace", skip_all, fields(parts = parts.len() as u64))]
pub fn generate_regex_and_name_list(parts: &[Part], options: &Options) -> RegexAndNameList {
    let mut result = String::from("^");
    let mut name_list = Vec::new();

    for part in parts {
        if part.kind == PartType::FixedText {
            if part.modifier == Modifier::None {
                result.push_str(&escape_regexp_string(&part.value));
            } else {
                result.push_str("(?:");
                result.push_str(&escape_regexp_string(&part.value));
                result.push(')');
                result.push_str(part.modifier.as_str());
            }
            continue;
        }

        debug_assert!(!part.name.is_empty());
        name_list.push(part.name.clone());

        let regexp_value = match part.kind {
            PartType::SegmentWildcard => segment_wildcard_body(options),
            PartType::FullWildcard => FULL_WILDCARD_REGEXP.to_string(),
            _ => part.value.clone(),
        };

        if part.prefix.is_empty() && part.suffix.is_empty() {
            if part.modifier.is_repeating() {
                result.push_str("((?:");
                result.push_str(&regexp_value);
                result.push(')');
                result.push_str(part.modifier.as_str());
                result.push(')');
            } else {
                result.push('(');
                result.push_str(&regexp_value);
                result.push(')');
                result.push_str(part.modifier.as_str());
            }
            continue;
        }

        let prefix = escape_regexp_string(&part.prefix);
        let suffix = escape_regexp_string(&part.suffix);

        if !part.modifier.is_repeating() {
            result.push_str("(?:");
            result.push_str(&prefix);
            result.push('(');
            result.push_str(&regexp_value);
            result.push(')');
            result.push_str(&suffix);
            result.push(')');
            result.push_str(part.modifier.as_str());
            continue;
        }

        // Later repetitions are joined by suffix+prefix, so the capture spans
        // every occurrence while the outer prefix/suffix appear once.
        result.push_str("(?:");
        result.push_str(&prefix);
        result.push_str("((?:");
        result.push_str(&regexp_value);
        result.push_str(")(?:");
        result.push_str(&suffix);
        result.push_str(&prefix);
        result.push_str("(?:");
        result.push_str(&regexp_value);
        result.push_str("))*)");
        result.push_str(&suffix);
        result.push(')');

        if part.modifier == Modifier::ZeroOrMore {
            result.push('?');
        }
    }

    result.push('$');

    RegexAndNameList {
        regex_source: result,
        name_list,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_every_regexp_syntax_character() {
        assert_eq!(escape_regexp_string("a.b/c"), "a\\.b\\/c");
        assert_eq!(escape_regexp_string("(x|y)"), "\\(x\\|y\\)");
        assert_eq!(escape_regexp_string("-_~"), "-_~");
    }

    #[test]
    fn segment_wildcard_uses_escaped_delimiter() {
        assert_eq!(segment_wildcard_regexp(&Options::PATHNAME), "[^\\/]+?");
        assert_eq!(segment_wildcard_regexp(&Options::HOSTNAME), "[^\\.]+?");
        assert_eq!(segment_wildcard_regexp(&Options::DEFAULT), "[^]+?");
    }

    #[test]
    fn undelimited_segment_body_is_backend_compatible() {
        assert_eq!(segment_wildcard_body(&Options::DEFAULT), "(?s:.)+?");
        assert_eq!(segment_wildcard_body(&Options::PATHNAME), "[^\\/]+?");
    }
}
