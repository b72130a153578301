use crate::env::Env;
use crate::parser::{IntoParser, Parser};
use crate::result::ParseResult;
use crate::terminal::{Primitive, literal};

/// Parser combinator that matches a list of items separated by a parser
///
/// Zero or more items, each after the first preceded by a separator. It
/// returns a vector of all items and never fails; an empty input, or one that
/// does not start with an item, gives an empty list.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!["a", "b", "c"]`
/// - `"1;2;3"` with separator `;` → `vec![1, 2, 3]`
///
/// # Note
/// - A trailing separator is left unconsumed
/// - Does not handle whitespace automatically
#[derive(Clone)]
pub struct List<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> List<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        List { parser, separator }
    }
}

impl<P, PS> Parser for List<P, PS>
where
    P: Parser,
    PS: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        let first = self.parser.parse(input, env);
        if !first.is_ok() {
            return ParseResult::success(Vec::new(), input);
        }
        let (first_value, mut rest) = first.into_parts();
        let mut results: Vec<P::Output> = first_value.into_iter().collect();

        loop {
            let separator = self.separator.parse(rest, env);
            if !separator.is_ok() {
                break;
            }
            let item = self.parser.parse(separator.rest(), env);
            if !item.is_ok() {
                // Leave the dangling separator for the caller
                break;
            }
            let (value, next) = item.into_parts();
            results.extend(value);
            if next.len() == rest.len() {
                break;
            }
            rest = next;
        }

        ParseResult::success(results, rest)
    }
}

/// Convenience function to create a List parser
pub fn list<S, T>(parser: S, separator: T) -> List<S::Parser, T::Parser>
where
    S: IntoParser,
    T: IntoParser,
{
    List::new(parser.into_parser(), separator.into_parser())
}

/// List separated by commas
pub fn comma_list<S>(parser: S) -> List<S::Parser, Primitive>
where
    S: IntoParser,
{
    List::new(parser.into_parser(), literal(","))
}
