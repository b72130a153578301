use crate::env::Env;
use crate::parser::{BoxedParser, IntoParser, Parser};
use crate::result::ParseResult;

/// Parser combinator that applies parsers one after another
///
/// Each parser starts where the previous one stopped and the values are
/// collected in order. If any parser fails the whole sequence fails with its
/// own input as `rest`; the failing parser's diagnostic is kept so that an
/// `expect` deep inside a sequence still reaches the caller.
pub struct Seq<O> {
    parsers: Vec<BoxedParser<O>>,
}

impl<O> Clone for Seq<O> {
    fn clone(&self) -> Self {
        Seq {
            parsers: self.parsers.clone(),
        }
    }
}

impl<O> Seq<O> {
    pub fn new(parsers: Vec<BoxedParser<O>>) -> Self {
        Seq { parsers }
    }
}

impl<O> Parser for Seq<O> {
    type Output = Vec<O>;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        let mut values = Vec::with_capacity(self.parsers.len());
        let mut rest = input;

        for parser in &self.parsers {
            let result = parser.parse(rest, env);
            if !result.is_ok() {
                return result.fail_from(input);
            }
            let (value, next) = result.into_parts();
            values.extend(value);
            rest = next;
        }

        ParseResult::success(values, rest)
    }
}

/// Convenience function to create a Seq parser
///
/// All elements must share one shorthand type; use [`seq!`](crate::seq!) to
/// mix different parser types with a common output.
pub fn seq<I>(parsers: I) -> Seq<<I::Item as IntoParser>::Output>
where
    I: IntoIterator,
    I::Item: IntoParser,
    <I::Item as IntoParser>::Output: 'static,
{
    Seq::new(
        parsers
            .into_iter()
            .map(|shorthand| crate::parser::boxed(shorthand.into_parser()))
            .collect(),
    )
}
