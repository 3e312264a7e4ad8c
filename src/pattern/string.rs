use crate::pattern::Options;
use crate::pattern::ast::{Modifier, Part, PartType};
use crate::pattern::lexer::is_valid_name_code_point;
use crate::pattern::regexp::{FULL_WILDCARD_REGEXP, segment_wildcard_regexp};

pub fn escape_pattern_string(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for c in input.chars() {
        if matches!(c, '+' | '*' | '?' | ':' | '{' | '}' | '(' | ')' | '\\') {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Regenerates a pattern string that re-parses to the same part list.
pub fn generate_pattern_string(parts: &[Part], options: &Options) -> String {
    let mut result = String::new();
    let prefix_code_point = options.prefix_string();

    for (index, part) in parts.iter().enumerate() {
        let previous_part = index.checked_sub(1).and_then(|i| parts.get(i));
        let next_part = parts.get(index + 1);

        if part.kind == PartType::FixedText {
            if part.modifier == Modifier::None {
                result.push_str(&escape_pattern_string(&part.value));
            } else {
                result.push('{');
                result.push_str(&escape_pattern_string(&part.value));
                result.push('}');
                result.push_str(part.modifier.as_str());
            }
            continue;
        }

        let custom_name = part.has_custom_name();

        let mut needs_grouping = !part.suffix.is_empty()
            || (!part.prefix.is_empty() && part.prefix != prefix_code_point);

        if !needs_grouping
            && custom_name
            && part.kind == PartType::SegmentWildcard
            && part.modifier == Modifier::None
            && let Some(next) = next_part
            && next.prefix.is_empty()
            && next.suffix.is_empty()
        {
            needs_grouping = if next.kind == PartType::FixedText {
                next.value
                    .chars()
                    .next()
                    .is_some_and(|c| is_valid_name_code_point(c, false))
            } else {
                !next.has_custom_name()
            };
        }

        if !needs_grouping
            && part.prefix.is_empty()
            && let Some(previous) = previous_part
            && previous.kind == PartType::FixedText
            && !prefix_code_point.is_empty()
            && previous.value.ends_with(prefix_code_point.as_str())
        {
            needs_grouping = true;
        }

        if needs_grouping {
            result.push('{');
        }

        result.push_str(&escape_pattern_string(&part.prefix));

        if custom_name {
            result.push(':');
            result.push_str(&part.name);
        }

        match part.kind {
            PartType::Regexp => {
                result.push('(');
                result.push_str(&part.value);
                result.push(')');
            }
            PartType::SegmentWildcard if !custom_name => {
                result.push('(');
                result.push_str(&segment_wildcard_regexp(options));
                result.push(')');
            }
            PartType::FullWildcard => {
                let bare_asterisk = !custom_name
                    && (previous_part.is_none_or(|p| {
                        p.kind == PartType::FixedText || p.modifier != Modifier::None
                    }) || needs_grouping
                        || !part.prefix.is_empty());

                if bare_asterisk {
                    result.push('*');
                } else {
                    result.push('(');
                    result.push_str(FULL_WILDCARD_REGEXP);
                    result.push(')');
                }
            }
            _ => {}
        }

        if part.kind == PartType::SegmentWildcard
            && custom_name
            && part
                .suffix
                .chars()
                .next()
                .is_some_and(|c| is_valid_name_code_point(c, false))
        {
            result.push('\\');
        }

        result.push_str(&escape_pattern_string(&part.suffix));

        if needs_grouping {
            result.push('}');
        }

        result.push_str(part.modifier.as_str());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_pattern_syntax_but_not_slashes() {
        assert_eq!(escape_pattern_string("/a:b*"), "/a\\:b\\*");
        assert_eq!(escape_pattern_string("{x}"), "\\{x\\}");
    }
}
