use crate::env::Env;
use crate::parser::{IntoParser, Parser};
use crate::result::ParseResult;

/// Parser that repeatedly applies another parser until a terminator matches
///
/// Before each application of `parser` the `stop` parser is tried; as soon as
/// it matches, its value is appended and the repetition ends after the
/// terminator. This is the "everything up to" shape of quoted string bodies
/// and comments.
///
/// When `parser` fails before `stop` ever matched, the outcome is `stop`
/// applied to the original input.
#[derive(Clone)]
pub struct LazyMany<P, S> {
    parser: P,
    stop: S,
}

impl<P, S> LazyMany<P, S> {
    pub fn new(parser: P, stop: S) -> Self {
        Self { parser, stop }
    }
}

impl<P, S, T> Parser for LazyMany<P, S>
where
    P: Parser<Output = T>,
    S: Parser<Output = T>,
{
    type Output = Vec<T>;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        let mut result = Vec::new();
        let mut rest = input;

        loop {
            let stop = self.stop.parse(rest, env);
            if stop.is_ok() {
                let (value, rest) = stop.into_parts();
                result.extend(value);
                return ParseResult::success(result, rest);
            }

            let item = self.parser.parse(rest, env);
            if !item.is_ok() || item.rest().len() == rest.len() {
                break;
            }
            let (value, next) = item.into_parts();
            result.extend(value);
            rest = next;
        }

        self.stop.parse(input, env).map_value(|value| vec![value])
    }
}

/// Convenience function to create a LazyMany parser
pub fn lazy_many<A, B>(parser: A, stop: B) -> LazyMany<A::Parser, B::Parser>
where
    A: IntoParser,
    B: IntoParser<Output = A::Output>,
{
    LazyMany::new(parser.into_parser(), stop.into_parser())
}
