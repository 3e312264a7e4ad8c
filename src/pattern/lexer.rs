use crate::pattern::{PatternError, PatternResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// `{`
    Open,
    /// `}`
    Close,
    /// `(...)`, the value holds the text between the parentheses.
    Regexp,
    /// `:name`, the value holds the name without the colon.
    Name,
    Char,
    /// `\x`, the value holds `x`.
    EscapedChar,
    /// `?` or `+`; `*` is always lexed as [`TokenType::Asterisk`].
    Modifier,
    Asterisk,
    End,
    /// Only produced under [`TokenizePolicy::Lenient`].
    InvalidChar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    /// Code point index of the token in the source pattern.
    pub position: usize,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizePolicy {
    #[default]
    Strict,
    Lenient,
}

#[tracing::instrument(level = "trace", skip_all, fields(pattern = %input, policy = ?policy))]
pub fn tokenize(input: &str, policy: TokenizePolicy) -> PatternResult<Vec<Token>> {
    let mut tokenizer = Tokenizer::new(input, policy);
    tokenizer.run()?;
    Ok(tokenizer.tokens)
}

/// ID_Start / ID_Continue approximation plus `$`, and ZWNJ/ZWJ for continuations.
pub(crate) fn is_valid_name_code_point(code_point: char, first: bool) -> bool {
    if code_point == '$' || code_point == '_' {
        return true;
    }

    if first {
        code_point.is_alphabetic()
    } else {
        code_point.is_alphanumeric() || code_point == '\u{200C}' || code_point == '\u{200D}'
    }
}

struct Tokenizer<'a> {
    pattern: &'a str,
    input: Vec<char>,
    policy: TokenizePolicy,
    tokens: Vec<Token>,
    index: usize,
    next_index: usize,
    code_point: char,
}

impl<'a> Tokenizer<'a> {
    fn new(pattern: &'a str, policy: TokenizePolicy) -> Self {
        Self {
            pattern,
            input: pattern.chars().collect(),
            policy,
            tokens: Vec::new(),
            index: 0,
            next_index: 0,
            code_point: '\0',
        }
    }

    fn run(&mut self) -> PatternResult<()> {
        let len = self.input.len();

        while self.index < len {
            self.seek_and_get_next_code_point(self.index);

            match self.code_point {
                '*' => self.add_token_at_cursor(TokenType::Asterisk),
                '+' | '?' => self.add_token_at_cursor(TokenType::Modifier),
                '\\' => {
                    if self.index == len - 1 {
                        let err = PatternError::LoneEscapeCharacter {
                            pattern: self.pattern.to_string(),
                            index: self.index,
                        };
                        self.tokenizing_error(self.next_index, self.index, err)?;
                        continue;
                    }

                    let escaped_index = self.next_index;
                    self.get_next_code_point();
                    self.add_token_with_default_length(
                        TokenType::EscapedChar,
                        self.next_index,
                        escaped_index,
                    );
                }
                '{' => self.add_token_at_cursor(TokenType::Open),
                '}' => self.add_token_at_cursor(TokenType::Close),
                ':' => self.consume_name()?,
                '(' => self.consume_regexp()?,
                _ => self.add_token_at_cursor(TokenType::Char),
            }
        }

        self.add_token_with_default_length(TokenType::End, self.index, self.index);

        Ok(())
    }

    fn consume_name(&mut self) -> PatternResult<()> {
        let name_start = self.next_index;
        let mut name_position = name_start;

        while name_position < self.input.len() {
            self.seek_and_get_next_code_point(name_position);

            if !is_valid_name_code_point(self.code_point, name_position == name_start) {
                break;
            }

            name_position = self.next_index;
        }

        if name_position <= name_start {
            let err = PatternError::ParameterMissingName {
                pattern: self.pattern.to_string(),
                index: self.index,
            };
            return self.tokenizing_error(name_start, self.index, err);
        }

        self.add_token_with_default_length(TokenType::Name, name_position, name_start);

        Ok(())
    }

    fn consume_regexp(&mut self) -> PatternResult<()> {
        let len = self.input.len();
        let regexp_start = self.next_index;
        let mut regexp_position = regexp_start;
        let mut depth = 1usize;

        while regexp_position < len {
            self.seek_and_get_next_code_point(regexp_position);

            if !self.code_point.is_ascii() {
                return self.regexp_error(regexp_start, "contains a non-ASCII code point");
            }

            if regexp_position == regexp_start && self.code_point == '?' {
                return self.regexp_error(regexp_start, "must not start with '?'");
            }

            if self.code_point == '\\' {
                if regexp_position == len - 1 {
                    return self.regexp_error(regexp_start, "ends with a lone escape character");
                }

                self.get_next_code_point();

                if !self.code_point.is_ascii() {
                    return self.regexp_error(regexp_start, "contains a non-ASCII code point");
                }

                regexp_position = self.next_index;
                continue;
            }

            if self.code_point == ')' {
                depth -= 1;

                if depth == 0 {
                    regexp_position = self.next_index;
                    break;
                }
            } else if self.code_point == '(' {
                depth += 1;

                if regexp_position == len - 1 {
                    return self.regexp_error(regexp_start, "nested group is not terminated");
                }

                let temporary_position = self.next_index;
                self.get_next_code_point();

                if self.code_point != '?' {
                    return self.regexp_error(regexp_start, "nested groups must be non-capturing");
                }

                self.next_index = temporary_position;
            }

            regexp_position = self.next_index;
        }

        if depth != 0 {
            let err = PatternError::UnterminatedRegexpGroup {
                pattern: self.pattern.to_string(),
                index: self.index,
            };
            return self.tokenizing_error(regexp_start, self.index, err);
        }

        let regexp_length = regexp_position - regexp_start - 1;

        if regexp_length == 0 {
            let err = PatternError::EmptyRegexpGroup {
                pattern: self.pattern.to_string(),
                index: self.index,
            };
            return self.tokenizing_error(regexp_start, self.index, err);
        }

        self.add_token(
            TokenType::Regexp,
            regexp_position,
            regexp_start,
            regexp_length,
        );

        Ok(())
    }

    fn regexp_error(&mut self, regexp_start: usize, reason: &'static str) -> PatternResult<()> {
        let err = PatternError::InvalidRegexpGroup {
            pattern: self.pattern.to_string(),
            index: self.index,
            reason,
        };
        self.tokenizing_error(regexp_start, self.index, err)
    }

    fn tokenizing_error(
        &mut self,
        next_position: usize,
        value_position: usize,
        err: PatternError,
    ) -> PatternResult<()> {
        if self.policy == TokenizePolicy::Strict {
            return Err(err);
        }

        self.add_token_with_default_length(TokenType::InvalidChar, next_position, value_position);

        Ok(())
    }

    fn seek_and_get_next_code_point(&mut self, index: usize) {
        self.next_index = index;
        self.get_next_code_point();
    }

    fn get_next_code_point(&mut self) {
        self.code_point = self.input[self.next_index];
        self.next_index += 1;
    }

    fn add_token(
        &mut self,
        kind: TokenType,
        next_position: usize,
        value_position: usize,
        value_length: usize,
    ) {
        let value = self.input[value_position..value_position + value_length]
            .iter()
            .collect();

        self.tokens.push(Token {
            kind,
            position: self.index,
            value,
        });
        self.index = next_position;
    }

    fn add_token_with_default_length(
        &mut self,
        kind: TokenType,
        next_position: usize,
        value_position: usize,
    ) {
        self.add_token(
            kind,
            next_position,
            value_position,
            next_position - value_position,
        );
    }

    fn add_token_at_cursor(&mut self, kind: TokenType) {
        self.add_token_with_default_length(kind, self.next_index, self.index);
    }
}
