use crate::env::Env;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A value rejected by the predicate fails at the original input.
#[derive(Clone)]
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<P, F, T> Parser for FilterParser<P, F>
where
    P: Parser<Output = T>,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        let result = self.parser.parse(input, env);
        let rejected = result
            .value()
            .is_some_and(|value| !(self.predicate)(value));

        if rejected {
            ParseResult::failure(input)
        } else {
            result
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt: Parser + Sized {
    fn filter<F>(self, predicate: F) -> FilterParser<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate)
    }
}

impl<P: Parser> FilterExt for P {}

/// Convenience function to create a filtered parser
pub fn filter<P, F>(parser: P, predicate: F) -> FilterParser<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate)
}
