use crate::env::Env;
use crate::error::GrammarError;
use crate::parser::Parser;
use crate::result::ParseResult;
use regex::Regex;
use std::rc::Rc;

/// A run of characters accepted by a predicate
#[derive(Debug, Clone, Copy)]
pub struct CharClass {
    test: fn(char) -> bool,
    min: usize,
    max: Option<usize>,
}

impl CharClass {
    pub fn new(test: fn(char) -> bool, min: usize, max: Option<usize>) -> Self {
        Self { test, min, max }
    }

    fn match_len(&self, input: &str) -> Option<usize> {
        let mut count = 0;
        let mut len = 0;

        for ch in input.chars() {
            if self.max.is_some_and(|max| count >= max) || !(self.test)(ch) {
                break;
            }
            count += 1;
            len += ch.len_utf8();
        }

        (count >= self.min).then_some(len)
    }
}

/// Terminal parsers, the leaves of every grammar
///
/// All of them produce the matched text. They are the only parsers that move
/// the environment's location, and the only ones affected by a terminals
/// wrapper installed with [`crate::terminals::terminals`].
#[derive(Debug, Clone)]
pub enum Primitive {
    /// Matches exactly this text
    Literal(String),
    /// Matches the regex when the match starts at the beginning of the input
    Pattern(Regex),
    /// Matches a run of characters accepted by a predicate
    Class(CharClass),
}

impl Primitive {
    fn match_len(&self, input: &str) -> Option<usize> {
        match self {
            Primitive::Literal(text) => input.starts_with(text.as_str()).then_some(text.len()),
            Primitive::Pattern(regex) => regex
                .find(input)
                .filter(|found| found.start() == 0)
                .map(|found| found.end()),
            Primitive::Class(class) => class.match_len(input),
        }
    }
}

impl Parser for Primitive {
    type Output = String;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        if let Some(wrapper) = env.terminals() {
            // The wrapper's own primitives must match bare
            let wrapped = wrapper.wrap(Rc::new(self.clone()));
            return wrapped.parse(input, &env.without_terminals());
        }

        match self.match_len(input) {
            Some(len) => {
                let (matched, rest) = input.split_at(len);
                env.advance(matched);
                ParseResult::success(matched.to_string(), rest)
            }
            None => ParseResult::failure(input),
        }
    }
}

/// Parser matching an exact string
pub fn literal(text: impl Into<String>) -> Primitive {
    Primitive::Literal(text.into())
}

/// Parser matching a regular expression at the start of the input
///
/// The source is compiled anchored, so the regex engine never scans past the
/// first character looking for a later match.
pub fn pattern(source: &str) -> Result<Primitive, GrammarError> {
    Regex::new(&format!("^(?:{})", source))
        .map(Primitive::Pattern)
        .map_err(|source_error| GrammarError::InvalidPattern {
            pattern: source.to_string(),
            source: source_error,
        })
}

/// Parser from an already compiled regex
pub fn regex(regex: Regex) -> Primitive {
    Primitive::Pattern(regex)
}

/// Parser consuming exactly one character of non-empty input
pub fn any() -> Primitive {
    Primitive::Class(CharClass::new(|_| true, 1, Some(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Location;
    use crate::parser::ParserExt;

    #[test]
    fn test_literal_match() {
        let result = literal("hello").run("hello world");
        assert!(result.is_ok());
        assert_eq!(result.value().map(String::as_str), Some("hello"));
        assert_eq!(result.rest(), " world");
    }

    #[test]
    fn test_literal_mismatch_does_not_consume() {
        let result = literal("hello").run("help");
        assert!(!result.is_ok());
        assert_eq!(result.rest(), "help");
        assert_eq!(result.value(), None);
    }

    #[test]
    fn test_literal_insufficient_input() {
        assert!(!literal("hello").run("hel").is_ok());
        assert!(!literal("hello").run("").is_ok());
    }

    #[test]
    fn test_empty_literal_always_matches() {
        let result = literal("").run("abc");
        assert!(result.is_ok());
        assert_eq!(result.rest(), "abc");
    }

    #[test]
    fn test_literal_unicode() {
        let result = literal("こんにちは").run("こんにちは世界");
        assert!(result.is_ok());
        assert_eq!(result.rest(), "世界");
    }

    #[test]
    fn test_operators_and_symbols() {
        let test_cases = ["<-", "->", "==", "!=", "<=", ">=", "::", "&&", "||"];

        for symbol in test_cases {
            let result = literal(symbol).run(symbol);
            assert!(result.is_complete(), "Failed for symbol: {}", symbol);
        }
    }

    #[test]
    fn test_pattern_match() {
        let parser = pattern("[a-z]+[0-9]*").unwrap();
        let result = parser.run("abc12;");
        assert_eq!(result.value().map(String::as_str), Some("abc12"));
        assert_eq!(result.rest(), ";");
    }

    #[test]
    fn test_pattern_is_anchored() {
        let parser = pattern("[0-9]+").unwrap();
        let result = parser.run("x123");
        assert!(!result.is_ok());
        assert_eq!(result.rest(), "x123");
    }

    #[test]
    fn test_pattern_alternation_stays_anchored() {
        let parser = pattern("a|b").unwrap();
        assert!(!parser.run("cb").is_ok());
        assert!(parser.run("bc").is_ok());
    }

    #[test]
    fn test_pattern_empty_match_succeeds() {
        let parser = pattern(r"\s*").unwrap();
        let result = parser.run("abc");
        assert!(result.is_ok());
        assert_eq!(result.value().map(String::as_str), Some(""));
        assert_eq!(result.rest(), "abc");
    }

    #[test]
    fn test_invalid_pattern_is_a_grammar_error() {
        let error = pattern("(unclosed").unwrap_err();
        assert!(matches!(error, GrammarError::InvalidPattern { .. }));
    }

    #[test]
    fn test_unanchored_regex_only_matches_at_start() {
        let parser = regex(Regex::new("b+").unwrap());
        assert!(!parser.run("abb").is_ok());
        assert_eq!(parser.run("bba").rest(), "a");
    }

    #[test]
    fn test_any_consumes_one_char() {
        let result = any().run("🚀x");
        assert_eq!(result.value().map(String::as_str), Some("🚀"));
        assert_eq!(result.rest(), "x");
    }

    #[test]
    fn test_any_fails_on_empty_input() {
        let result = any().run("");
        assert!(!result.is_ok());
        assert_eq!(result.rest(), "");
    }

    #[test]
    fn test_char_class_bounds() {
        let two_to_three = Primitive::Class(CharClass::new(|c| c == 'a', 2, Some(3)));
        assert!(!two_to_three.run("ab").is_ok());
        assert_eq!(two_to_three.run("aab").rest(), "b");
        assert_eq!(two_to_three.run("aaaaa").rest(), "aa");
    }

    #[test]
    fn test_success_advances_env() {
        let env = Env::new();
        literal("ab\nc").parse("ab\ncd", &env);
        assert_eq!(env.location(), Location::new(2, 2));
    }

    #[test]
    fn test_every_success_advances_env() {
        let env = Env::new();
        literal("a").parse("a", &env);
        literal("a").parse("a", &env);
        assert_eq!(env.location(), Location::new(1, 3));
    }

    #[test]
    fn test_failure_does_not_advance_env() {
        let env = Env::new();
        literal("xyz").parse("xy", &env);
        pattern("[0-9]").unwrap().parse("a", &env);
        assert_eq!(env.location(), Location::new(1, 1));
    }
}
