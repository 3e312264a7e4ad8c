use hashbrown::HashSet;

use crate::canonicalize::CanonicalizeResult;
use crate::pattern::ast::{Modifier, Part, PartType};
use crate::pattern::lexer::{Token, TokenType, TokenizePolicy, tokenize};
use crate::pattern::regexp::{FULL_WILDCARD_REGEXP, segment_wildcard_regexp};
use crate::pattern::{Options, PatternError, PatternResult};

/// Validates and encodes a literal run of pattern text for one URL component.
pub type EncodingCallback<'a> = &'a dyn Fn(&str) -> CanonicalizeResult<String>;

#[tracing::instrument(level = "trace", skip_all, fields(pattern = %input))]
pub fn parse_pattern_string(
    input: &str,
    options: &Options,
    encoding_callback: EncodingCallback<'_>,
) -> PatternResult<Vec<Part>> {
    let tokens = tokenize(input, TokenizePolicy::Strict)?;
    let mut parser = PatternParser::new(input, tokens, options, encoding_callback);
    parser.run()?;

    tracing::trace!(parts = parser.parts.len() as u64, "pattern parsed");

    Ok(parser.parts)
}

struct PatternParser<'a> {
    pattern: &'a str,
    tokens: Vec<Token>,
    encoding_callback: EncodingCallback<'a>,
    segment_wildcard_regexp: String,
    prefix_code_point: String,
    parts: Vec<Part>,
    pending_fixed_value: String,
    index: usize,
    next_numeric_name: usize,
    names: HashSet<String>,
}

impl<'a> PatternParser<'a> {
    fn new(
        pattern: &'a str,
        tokens: Vec<Token>,
        options: &Options,
        encoding_callback: EncodingCallback<'a>,
    ) -> Self {
        Self {
            pattern,
            tokens,
            encoding_callback,
            segment_wildcard_regexp: segment_wildcard_regexp(options),
            prefix_code_point: options.prefix_string(),
            parts: Vec::new(),
            pending_fixed_value: String::new(),
            index: 0,
            next_numeric_name: 0,
            names: HashSet::new(),
        }
    }

    fn run(&mut self) -> PatternResult<()> {
        while self.index < self.tokens.len() {
            let char_token = self.try_consume(TokenType::Char);
            let name_token = self.try_consume(TokenType::Name);
            let regexp_or_wildcard = self.try_consume_regexp_or_wildcard(name_token.is_some());

            if name_token.is_some() || regexp_or_wildcard.is_some() {
                let mut prefix = char_token.map(|t| t.value).unwrap_or_default();

                if !prefix.is_empty() && prefix != self.prefix_code_point {
                    self.pending_fixed_value.push_str(&prefix);
                    prefix.clear();
                }

                self.flush_pending_fixed_value()?;

                let modifier_token = self.try_consume_modifier();
                self.add_part(
                    prefix,
                    name_token,
                    regexp_or_wildcard,
                    String::new(),
                    modifier_token,
                )?;
                continue;
            }

            let fixed_token = char_token.or_else(|| self.try_consume(TokenType::EscapedChar));

            if let Some(token) = fixed_token {
                self.pending_fixed_value.push_str(&token.value);
                continue;
            }

            if self.try_consume(TokenType::Open).is_some() {
                let prefix = self.consume_text();
                let name_token = self.try_consume(TokenType::Name);
                let regexp_or_wildcard =
                    self.try_consume_regexp_or_wildcard(name_token.is_some());
                let suffix = self.consume_text();

                self.consume_required(TokenType::Close)?;

                let modifier_token = self.try_consume_modifier();
                self.add_part(
                    prefix,
                    name_token,
                    regexp_or_wildcard,
                    suffix,
                    modifier_token,
                )?;
                continue;
            }

            self.flush_pending_fixed_value()?;
            self.consume_required(TokenType::End)?;
        }

        Ok(())
    }

    fn try_consume(&mut self, kind: TokenType) -> Option<Token> {
        let token = self.tokens.get(self.index)?;

        if token.kind != kind {
            return None;
        }

        self.index += 1;
        Some(token.clone())
    }

    fn try_consume_modifier(&mut self) -> Option<Token> {
        self.try_consume(TokenType::Modifier)
            .or_else(|| self.try_consume(TokenType::Asterisk))
    }

    fn try_consume_regexp_or_wildcard(&mut self, has_name: bool) -> Option<Token> {
        let token = self.try_consume(TokenType::Regexp);

        if token.is_none() && !has_name {
            return self.try_consume(TokenType::Asterisk);
        }

        token
    }

    fn consume_required(&mut self, kind: TokenType) -> PatternResult<()> {
        if self.try_consume(kind).is_some() {
            return Ok(());
        }

        let (index, found) = self
            .tokens
            .get(self.index)
            .map(|t| (t.position, t.kind))
            .unwrap_or((self.pattern.chars().count(), TokenType::End));

        Err(PatternError::MissingToken {
            pattern: self.pattern.to_string(),
            index,
            expected: kind,
            found,
        })
    }

    fn consume_text(&mut self) -> String {
        let mut result = String::new();

        while let Some(token) = self
            .try_consume(TokenType::Char)
            .or_else(|| self.try_consume(TokenType::EscapedChar))
        {
            result.push_str(&token.value);
        }

        result
    }

    fn flush_pending_fixed_value(&mut self) -> PatternResult<()> {
        if self.pending_fixed_value.is_empty() {
            return Ok(());
        }

        let value = std::mem::take(&mut self.pending_fixed_value);
        let encoded = (self.encoding_callback)(&value)?;
        self.parts.push(Part::fixed(encoded, Modifier::None));

        Ok(())
    }

    fn add_part(
        &mut self,
        prefix: String,
        name_token: Option<Token>,
        regexp_or_wildcard: Option<Token>,
        suffix: String,
        modifier_token: Option<Token>,
    ) -> PatternResult<()> {
        let modifier = Modifier::from_token(modifier_token.as_ref());

        if name_token.is_none() && regexp_or_wildcard.is_none() && modifier == Modifier::None {
            self.pending_fixed_value.push_str(&prefix);
            return Ok(());
        }

        self.flush_pending_fixed_value()?;

        if name_token.is_none() && regexp_or_wildcard.is_none() {
            debug_assert!(suffix.is_empty());

            if prefix.is_empty() {
                return Ok(());
            }

            let encoded = (self.encoding_callback)(&prefix)?;
            self.parts.push(Part::fixed(encoded, modifier));
            return Ok(());
        }

        let mut regexp_value = match &regexp_or_wildcard {
            None => self.segment_wildcard_regexp.clone(),
            Some(token) if token.kind == TokenType::Asterisk => FULL_WILDCARD_REGEXP.to_string(),
            Some(token) => token.value.clone(),
        };

        let mut kind = PartType::Regexp;

        if regexp_value == self.segment_wildcard_regexp {
            kind = PartType::SegmentWildcard;
            regexp_value.clear();
        } else if regexp_value == FULL_WILDCARD_REGEXP {
            kind = PartType::FullWildcard;
            regexp_value.clear();
        }

        let name = match name_token {
            Some(token) => token.value,
            None => {
                let name = self.next_numeric_name.to_string();
                self.next_numeric_name += 1;
                name
            }
        };

        if !self.names.insert(name.clone()) {
            return Err(PatternError::DuplicateName {
                pattern: self.pattern.to_string(),
                name,
            });
        }

        let encoded_prefix = (self.encoding_callback)(&prefix)?;
        let encoded_suffix = (self.encoding_callback)(&suffix)?;

        self.parts.push(Part::group(
            kind,
            regexp_value,
            modifier,
            name,
            encoded_prefix,
            encoded_suffix,
        ));

        Ok(())
    }
}
