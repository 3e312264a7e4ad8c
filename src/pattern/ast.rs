use crate::pattern::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartType {
    #[default]
    FixedText,
    /// A group with a custom regular expression.
    Regexp,
    /// Matches up to the next delimiter code point, e.g. `:foo`.
    SegmentWildcard,
    /// Matches greedily across delimiters, e.g. `*`.
    FullWildcard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifier {
    #[default]
    None,
    Optional,
    ZeroOrMore,
    OneOrMore,
}

impl Modifier {
    pub fn from_token(token: Option<&Token>) -> Self {
        match token.map(|t| t.value.as_str()) {
            Some("?") => Self::Optional,
            Some("*") => Self::ZeroOrMore,
            Some("+") => Self::OneOrMore,
            _ => Self::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Optional => "?",
            Self::ZeroOrMore => "*",
            Self::OneOrMore => "+",
        }
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, Self::ZeroOrMore | Self::OneOrMore)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Part {
    pub kind: PartType,
    pub value: String,
    pub modifier: Modifier,
    pub name: String,
    pub prefix: String,
    pub suffix: String,
}

impl Part {
    pub fn fixed(value: String, modifier: Modifier) -> Self {
        Self {
            kind: PartType::FixedText,
            value,
            modifier,
            ..Self::default()
        }
    }

    pub fn group(
        kind: PartType,
        value: String,
        modifier: Modifier,
        name: String,
        prefix: String,
        suffix: String,
    ) -> Self {
        Self {
            kind,
            value,
            modifier,
            name,
            prefix,
            suffix,
        }
    }

    pub fn is_fixed_text(&self) -> bool {
        self.kind == PartType::FixedText
    }

    /// Auto-assigned names are numeric; user names cannot start with a digit.
    pub fn has_custom_name(&self) -> bool {
        self.name
            .chars()
            .next()
            .is_some_and(|c| !c.is_ascii_digit())
    }
}
