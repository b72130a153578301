use crate::env::Env;
use crate::parser::{IntoParser, Parser};
use crate::result::ParseResult;

/// Parser combinator that matches zero or more occurrences of the given parser
#[derive(Clone)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<P> Parser for Many<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let mut rest = input;

        loop {
            let result = self.parser.parse(rest, env);
            if !result.is_ok() {
                // Many matches zero or more, so the failure is not propagated
                break;
            }
            let (value, next) = result.into_parts();
            results.extend(value);

            // A parser that matched without consuming would match forever
            if next.len() == rest.len() {
                break;
            }
            rest = next;
        }

        ParseResult::success(results, rest)
    }
}

/// Convenience function to create a Many parser
pub fn many<S>(parser: S) -> Many<S::Parser>
where
    S: IntoParser,
{
    Many::new(parser.into_parser())
}
