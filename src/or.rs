use crate::env::Env;
use crate::parser::{BoxedParser, IntoParser, Parser, boxed};
use crate::result::ParseResult;

/// Parser combinator that tries alternatives in order
///
/// Every alternative sees the same input. The first success is returned
/// unchanged; when none matches the result is a failure at the original input
/// without a value.
pub struct Or<O> {
    parsers: Vec<BoxedParser<O>>,
}

impl<O> Clone for Or<O> {
    fn clone(&self) -> Self {
        Or {
            parsers: self.parsers.clone(),
        }
    }
}

impl<O> Or<O> {
    pub fn new(parsers: Vec<BoxedParser<O>>) -> Self {
        Or { parsers }
    }
}

impl<O> Parser for Or<O> {
    type Output = O;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        for parser in &self.parsers {
            let result = parser.parse(input, env);
            if result.is_ok() {
                return result;
            }
        }
        ParseResult::failure(input)
    }
}

/// Convenience function to create an Or parser
///
/// All alternatives must share one shorthand type; use [`or!`](crate::or!) to
/// mix different parser types with a common output.
pub fn or<I>(parsers: I) -> Or<<I::Item as IntoParser>::Output>
where
    I: IntoIterator,
    I::Item: IntoParser,
    <I::Item as IntoParser>::Output: 'static,
{
    Or::new(
        parsers
            .into_iter()
            .map(|shorthand| boxed(shorthand.into_parser()))
            .collect(),
    )
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized + 'static {
    fn or<S>(self, other: S) -> Or<Self::Output>
    where
        S: IntoParser<Output = Self::Output>,
        Self::Output: 'static,
    {
        Or::new(vec![boxed(self), boxed(other.into_parser())])
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser + 'static {}
