mod ast;
mod error;
mod lexer;
mod options;
mod parser;
mod regexp;
mod string;

pub use ast::{Modifier, Part, PartType};
pub use error::{PatternError, PatternResult};
pub use lexer::{Token, TokenType, TokenizePolicy, tokenize};
pub use options::Options;
pub use parser::{EncodingCallback, parse_pattern_string};
pub use regexp::{
    FULL_WILDCARD_REGEXP, RegexAndNameList, escape_regexp_string, generate_regex_and_name_list,
    segment_wildcard_regexp,
};
pub use string::{escape_pattern_string, generate_pattern_string};
