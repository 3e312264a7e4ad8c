/// Per-component parsing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Code point a segment wildcard stops at.
    pub delimiter_code_point: Option<char>,
    /// Code point that, placed right before a group, becomes the group's prefix.
    pub prefix_code_point: Option<char>,
    pub ignore_case: bool,
}

impl Options {
    pub const DEFAULT: Options = Options {
        delimiter_code_point: None,
        prefix_code_point: None,
        ignore_case: false,
    };

    pub const HOSTNAME: Options = Options {
        delimiter_code_point: Some('.'),
        prefix_code_point: None,
        ignore_case: false,
    };

    pub const PATHNAME: Options = Options {
        delimiter_code_point: Some('/'),
        prefix_code_point: Some('/'),
        ignore_case: false,
    };

    pub fn with_ignore_case(mut self, value: bool) -> Self {
        self.ignore_case = value;
        self
    }

    pub(crate) fn prefix_string(&self) -> String {
        self.prefix_code_point
            .map(String::from)
            .unwrap_or_default()
    }
}
