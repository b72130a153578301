use crate::env::Env;
use crate::parser::{IntoParser, Parser};
use crate::result::ParseResult;

/// Parser combinator that makes its parser optional
///
/// Always succeeds: with `Some(value)` when the inner parser matched, or with
/// `None` and the input untouched when it did not.
#[derive(Clone)]
pub struct Opt<P> {
    parser: P,
}

impl<P> Opt<P> {
    pub fn new(parser: P) -> Self {
        Opt { parser }
    }
}

impl<P> Parser for Opt<P>
where
    P: Parser,
{
    type Output = Option<P::Output>;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        let result = self.parser.parse(input, env);
        if result.is_ok() {
            let (value, rest) = result.into_parts();
            ParseResult::success(value, rest)
        } else {
            ParseResult::success(None, input)
        }
    }
}

/// Convenience function to create an Opt parser
pub fn opt<S>(parser: S) -> Opt<S::Parser>
where
    S: IntoParser,
{
    Opt::new(parser.into_parser())
}
