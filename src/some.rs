use crate::env::Env;
use crate::parser::{IntoParser, Parser};
use crate::result::ParseResult;

/// Parser combinator that matches one or more occurrences of the given parser
#[derive(Clone)]
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<P> Parser for Many1<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        // First parse must succeed
        let first = self.parser.parse(input, env);
        if !first.is_ok() {
            return first.fail_from(input);
        }
        let (first_value, mut rest) = first.into_parts();
        let mut results: Vec<P::Output> = first_value.into_iter().collect();

        // Continue parsing zero or more times
        loop {
            let result = self.parser.parse(rest, env);
            if !result.is_ok() {
                break;
            }
            let (value, next) = result.into_parts();
            results.extend(value);
            if next.len() == rest.len() {
                break;
            }
            rest = next;
        }

        ParseResult::success(results, rest)
    }
}

/// Convenience function to create a Many1 parser
pub fn some<S>(parser: S) -> Many1<S::Parser>
where
    S: IntoParser,
{
    Many1::new(parser.into_parser())
}
