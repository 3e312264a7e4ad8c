mod compiled;

pub use compiled::{CaptureList, CompiledRegex, RegexFlags};

use crate::canonicalize::SPECIAL_SCHEMES;
use crate::errors::{UrlPatternError, UrlPatternResult};
use crate::pattern::{
    EncodingCallback, Options, PartType, RegexAndNameList, generate_pattern_string,
    generate_regex_and_name_list, parse_pattern_string,
};

/// The compiled matcher for one URL field. Immutable once compiled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Component {
    pattern_string: String,
    regular_expression: Option<CompiledRegex>,
    group_name_list: Vec<String>,
    has_regexp_groups: bool,
}

impl Component {
    #[tracing::instrument(level = "trace", skip_all, fields(pattern = %input))]
    pub fn compile(
        input: &str,
        encoding_callback: EncodingCallback<'_>,
        options: &Options,
    ) -> UrlPatternResult<Self> {
        let parts = parse_pattern_string(input, options, encoding_callback)?;

        let RegexAndNameList {
            regex_source,
            name_list,
        } = generate_regex_and_name_list(&parts, options);

        let mut flags = RegexFlags::UNICODE;
        if options.ignore_case {
            flags |= RegexFlags::IGNORE_CASE;
        }

        let regular_expression = CompiledRegex::compile(&regex_source, flags).map_err(|err| {
            UrlPatternError::RegexCompile {
                regex_source: regex_source.clone(),
                error: err.to_string(),
            }
        })?;

        let pattern_string = generate_pattern_string(&parts, options);
        let has_regexp_groups = parts.iter().any(|p| p.kind == PartType::Regexp);

        tracing::debug!(
            regex = %regex_source,
            groups = name_list.len() as u64,
            "component compiled"
        );

        Ok(Self {
            pattern_string,
            regular_expression: Some(regular_expression),
            group_name_list: name_list,
            has_regexp_groups,
        })
    }

    pub fn pattern_string(&self) -> &str {
        &self.pattern_string
    }

    pub fn regular_expression(&self) -> Option<&CompiledRegex> {
        self.regular_expression.as_ref()
    }

    pub fn group_name_list(&self) -> &[String] {
        &self.group_name_list
    }

    pub fn has_regexp_groups(&self) -> bool {
        self.has_regexp_groups
    }

    /// `None` when the input does not match, or the component was never compiled.
    pub fn captures(&self, input: &str) -> Option<CaptureList> {
        self.regular_expression.as_ref()?.captures(input)
    }

    pub fn matches_special_scheme(&self) -> bool {
        let Some(regex) = &self.regular_expression else {
            return false;
        };

        SPECIAL_SCHEMES.iter().any(|scheme| regex.is_match(scheme))
    }
}
