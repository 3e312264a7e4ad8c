use crate::canonicalize::canonicalize_protocol;
use crate::component::Component;
use crate::errors::UrlPatternResult;
use crate::init::PatternInit;
use crate::pattern::{Options, Token, TokenType, TokenizePolicy, tokenize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Init,
    Protocol,
    Authority,
    Username,
    Password,
    Hostname,
    Port,
    Pathname,
    Search,
    Hash,
    Done,
}

impl State {
    fn is_before_hostname(self) -> bool {
        matches!(
            self,
            State::Protocol | State::Authority | State::Username | State::Password
        )
    }

    fn is_before_pathname(self) -> bool {
        self.is_before_hostname() || matches!(self, State::Hostname | State::Port)
    }

    fn is_before_search(self) -> bool {
        self.is_before_pathname() || self == State::Pathname
    }
}

/// Splits a whole-URL pattern string such as `https://*.example.com/:id` into
/// per-field pattern strings.
#[tracing::instrument(level = "trace", skip_all, fields(pattern = %input))]
pub fn parse_constructor_string(input: &str) -> UrlPatternResult<PatternInit> {
    let token_list = tokenize(input, TokenizePolicy::Lenient)?;

    let mut parser = ConstructorStringParser {
        input: input.chars().collect(),
        token_list,
        result: PatternInit::default(),
        component_start: 0,
        token_index: 0,
        token_increment: 1,
        group_depth: 0,
        hostname_ipv6_bracket_depth: 0,
        protocol_matches_special_scheme: false,
        state: State::Init,
    };

    parser.run()?;

    Ok(parser.result)
}

struct ConstructorStringParser {
    input: Vec<char>,
    token_list: Vec<Token>,
    result: PatternInit,
    component_start: usize,
    token_index: usize,
    token_increment: usize,
    group_depth: usize,
    hostname_ipv6_bracket_depth: usize,
    protocol_matches_special_scheme: bool,
    state: State,
}

impl ConstructorStringParser {
    fn run(&mut self) -> UrlPatternResult<()> {
        while self.token_index < self.token_list.len() {
            self.token_increment = 1;

            if self.token_list[self.token_index].kind == TokenType::End {
                match self.state {
                    State::Init => {
                        self.rewind();

                        if self.is_hash_prefix() {
                            self.change_state(State::Hash, 1);
                        } else if self.is_search_prefix() {
                            self.change_state(State::Search, 1);
                        } else {
                            self.change_state(State::Pathname, 0);
                        }

                        self.token_index += self.token_increment;
                        continue;
                    }
                    State::Authority => {
                        self.rewind_and_set_state(State::Hostname);
                        self.token_index += self.token_increment;
                        continue;
                    }
                    _ => {
                        self.change_state(State::Done, 0);
                        break;
                    }
                }
            }

            if self.is_group_open() {
                self.group_depth += 1;
                self.token_index += self.token_increment;
                continue;
            }

            if self.group_depth > 0 {
                if self.is_group_close() {
                    self.group_depth -= 1;
                } else {
                    self.token_index += self.token_increment;
                    continue;
                }
            }

            match self.state {
                State::Init => {
                    if self.is_protocol_suffix() {
                        self.rewind_and_set_state(State::Protocol);
                    }
                }
                State::Protocol => {
                    if self.is_protocol_suffix() {
                        self.compute_protocol_matches_special_scheme()?;

                        let (next_state, skip) = if self.next_is_authority_slashes() {
                            (State::Authority, 3)
                        } else if self.protocol_matches_special_scheme {
                            (State::Authority, 1)
                        } else {
                            (State::Pathname, 1)
                        };

                        self.change_state(next_state, skip);
                    }
                }
                State::Authority => {
                    if self.is_identity_terminator() {
                        self.rewind_and_set_state(State::Username);
                    } else if self.is_pathname_start()
                        || self.is_search_prefix()
                        || self.is_hash_prefix()
                    {
                        self.rewind_and_set_state(State::Hostname);
                    }
                }
                State::Username => {
                    if self.is_password_prefix() {
                        self.change_state(State::Password, 1);
                    } else if self.is_identity_terminator() {
                        self.change_state(State::Hostname, 1);
                    }
                }
                State::Password => {
                    if self.is_identity_terminator() {
                        self.change_state(State::Hostname, 1);
                    }
                }
                State::Hostname => {
                    if self.is_ipv6_open() {
                        self.hostname_ipv6_bracket_depth += 1;
                    } else if self.is_ipv6_close() {
                        self.hostname_ipv6_bracket_depth =
                            self.hostname_ipv6_bracket_depth.saturating_sub(1);
                    } else if self.is_port_prefix() && self.hostname_ipv6_bracket_depth == 0 {
                        self.change_state(State::Port, 1);
                    } else if self.is_pathname_start() {
                        self.change_state(State::Pathname, 0);
                    } else if self.is_search_prefix() {
                        self.change_state(State::Search, 1);
                    } else if self.is_hash_prefix() {
                        self.change_state(State::Hash, 1);
                    }
                }
                State::Port => {
                    if self.is_pathname_start() {
                        self.change_state(State::Pathname, 0);
                    } else if self.is_search_prefix() {
                        self.change_state(State::Search, 1);
                    } else if self.is_hash_prefix() {
                        self.change_state(State::Hash, 1);
                    }
                }
                State::Pathname => {
                    if self.is_search_prefix() {
                        self.change_state(State::Search, 1);
                    } else if self.is_hash_prefix() {
                        self.change_state(State::Hash, 1);
                    }
                }
                State::Search => {
                    if self.is_hash_prefix() {
                        self.change_state(State::Hash, 1);
                    }
                }
                State::Hash | State::Done => {}
            }

            self.token_index += self.token_increment;
        }

        if self.result.hostname.is_some() && self.result.port.is_none() {
            self.result.port = Some(String::new());
        }

        Ok(())
    }

    fn change_state(&mut self, new_state: State, skip: usize) {
        if !matches!(self.state, State::Init | State::Authority | State::Done) {
            let value = self.make_component_string();
            if let Some(slot) = field_for_state(&mut self.result, self.state) {
                *slot = Some(value);
            }
        }

        if self.state != State::Init && new_state != State::Done {
            if self.state.is_before_hostname()
                && matches!(
                    new_state,
                    State::Port | State::Pathname | State::Search | State::Hash
                )
                && self.result.hostname.is_none()
            {
                self.result.hostname = Some(String::new());
            }

            if self.state.is_before_pathname()
                && matches!(new_state, State::Search | State::Hash)
                && self.result.pathname.is_none()
            {
                let pathname = if self.protocol_matches_special_scheme {
                    "/"
                } else {
                    ""
                };
                self.result.pathname = Some(pathname.to_string());
            }

            if self.state.is_before_search()
                && new_state == State::Hash
                && self.result.search.is_none()
            {
                self.result.search = Some(String::new());
            }
        }

        self.state = new_state;
        self.token_index += skip;
        self.component_start = self.token_index;
        self.token_increment = 0;
    }

    fn rewind(&mut self) {
        self.token_index = self.component_start;
        self.token_increment = 0;
    }

    fn rewind_and_set_state(&mut self, state: State) {
        self.rewind();
        self.state = state;
    }

    /// Out-of-range indexes resolve to the trailing `End` token.
    fn safe_token(&self, index: usize) -> &Token {
        let last = self.token_list.len() - 1;
        &self.token_list[index.min(last)]
    }

    fn is_non_special_pattern_char(&self, index: usize, value: &str) -> bool {
        let token = self.safe_token(index);

        token.value == value
            && matches!(
                token.kind,
                TokenType::Char | TokenType::EscapedChar | TokenType::InvalidChar
            )
    }

    fn is_protocol_suffix(&self) -> bool {
        self.is_non_special_pattern_char(self.token_index, ":")
    }

    fn next_is_authority_slashes(&self) -> bool {
        self.is_non_special_pattern_char(self.token_index + 1, "/")
            && self.is_non_special_pattern_char(self.token_index + 2, "/")
    }

    fn is_identity_terminator(&self) -> bool {
        self.is_non_special_pattern_char(self.token_index, "@")
    }

    fn is_password_prefix(&self) -> bool {
        self.is_non_special_pattern_char(self.token_index, ":")
    }

    fn is_port_prefix(&self) -> bool {
        self.is_non_special_pattern_char(self.token_index, ":")
    }

    fn is_pathname_start(&self) -> bool {
        self.is_non_special_pattern_char(self.token_index, "/")
    }

    /// A `?` modifier right after a name, regexp, group or asterisk is not a search prefix.
    fn is_search_prefix(&self) -> bool {
        if self.is_non_special_pattern_char(self.token_index, "?") {
            return true;
        }

        if self.token_list[self.token_index].value != "?" {
            return false;
        }

        if self.token_index == 0 {
            return true;
        }

        let previous = self.safe_token(self.token_index - 1);

        !matches!(
            previous.kind,
            TokenType::Name | TokenType::Regexp | TokenType::Close | TokenType::Asterisk
        )
    }

    fn is_hash_prefix(&self) -> bool {
        self.is_non_special_pattern_char(self.token_index, "#")
    }

    fn is_group_open(&self) -> bool {
        self.token_list[self.token_index].kind == TokenType::Open
    }

    fn is_group_close(&self) -> bool {
        self.token_list[self.token_index].kind == TokenType::Close
    }

    fn is_ipv6_open(&self) -> bool {
        self.is_non_special_pattern_char(self.token_index, "[")
    }

    fn is_ipv6_close(&self) -> bool {
        self.is_non_special_pattern_char(self.token_index, "]")
    }

    fn make_component_string(&self) -> String {
        let end = self.token_list[self.token_index].position;
        let start = self.safe_token(self.component_start).position;

        self.input[start..end].iter().collect()
    }

    fn compute_protocol_matches_special_scheme(&mut self) -> UrlPatternResult<()> {
        let protocol = self.make_component_string();
        let component = Component::compile(&protocol, &canonicalize_protocol, &Options::DEFAULT)?;

        if component.matches_special_scheme() {
            self.protocol_matches_special_scheme = true;
        }

        Ok(())
    }
}

fn field_for_state(init: &mut PatternInit, state: State) -> Option<&mut Option<String>> {
    match state {
        State::Protocol => Some(&mut init.protocol),
        State::Username => Some(&mut init.username),
        State::Password => Some(&mut init.password),
        State::Hostname => Some(&mut init.hostname),
        State::Port => Some(&mut init.port),
        State::Pathname => Some(&mut init.pathname),
        State::Search => Some(&mut init.search),
        State::Hash => Some(&mut init.hash),
        State::Init | State::Authority | State::Done => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_full_url_pattern() {
        let init = parse_constructor_string("https://*.example.com:8080/a/:id/x?q=1#top").unwrap();

        assert_eq!(init.protocol.as_deref(), Some("https"));
        assert_eq!(init.username, None);
        assert_eq!(init.hostname.as_deref(), Some("*.example.com"));
        assert_eq!(init.port.as_deref(), Some("8080"));
        assert_eq!(init.pathname.as_deref(), Some("/a/:id/x"));
        assert_eq!(init.search.as_deref(), Some("q=1"));
        assert_eq!(init.hash.as_deref(), Some("top"));
    }

    #[test]
    fn reads_credentials_before_identity_terminator() {
        let init = parse_constructor_string("https://user\\:pw@example.com/").unwrap();

        assert_eq!(init.username.as_deref(), Some("user"));
        assert_eq!(init.password.as_deref(), Some("pw"));
        assert_eq!(init.hostname.as_deref(), Some("example.com"));
        assert_eq!(init.pathname.as_deref(), Some("/"));
    }

    #[test]
    fn relative_pattern_is_pathname_only() {
        let init = parse_constructor_string("/books/:id").unwrap();

        assert_eq!(init.protocol, None);
        assert_eq!(init.hostname, None);
        assert_eq!(init.pathname.as_deref(), Some("/books/:id"));
    }

    #[test]
    fn optional_name_modifier_is_not_a_search_prefix() {
        let init = parse_constructor_string("/books/:id?").unwrap();

        assert_eq!(init.pathname.as_deref(), Some("/books/:id?"));
        assert_eq!(init.search, None);
    }

    #[test]
    fn special_scheme_without_slashes_still_reads_authority() {
        let init = parse_constructor_string("https\\:example.com/x").unwrap();

        assert_eq!(init.hostname.as_deref(), Some("example.com"));
        assert_eq!(init.pathname.as_deref(), Some("/x"));
        assert_eq!(init.port.as_deref(), Some(""));
    }

    #[test]
    fn non_special_scheme_goes_straight_to_pathname() {
        let init = parse_constructor_string("data\\:text/plain,*").unwrap();

        assert_eq!(init.protocol.as_deref(), Some("data"));
        assert_eq!(init.hostname.as_deref(), Some(""));
        assert_eq!(init.pathname.as_deref(), Some("text/plain,*"));
    }
}
