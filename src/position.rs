use crate::env::{Env, Location};
use crate::parser::Parser;
use crate::result::ParseResult;
use serde::Serialize;

/// Region of the source covered by a successful parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Location of the first consumed character
    pub start: Location,
    /// Location just past the last consumed character
    pub end: Location,
    /// The consumed text
    pub text: String,
}

impl Span {
    pub fn new(start: Location, text: impl Into<String>) -> Self {
        let text = text.into();
        Span {
            start,
            end: start.after(&text),
            text,
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A parser combinator that captures the span of a successful parse
///
/// `start` and `end` are the environment's location before and after the
/// parse. Matches made by abandoned alternatives have already advanced it.
#[derive(Clone)]
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<P> Parser for Position<P>
where
    P: Parser,
{
    type Output = (P::Output, Span);

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        let start = env.location();
        let result = self.parser.parse(input, env);
        let consumed = &input[..input.len() - result.rest().len()];
        let span = Span {
            start,
            end: env.location(),
            text: consumed.to_string(),
        };
        result.map_value(|value| (value, span))
    }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt: Parser + Sized {
    /// Wrap this parser to capture its span
    fn with_span(self) -> Position<Self> {
        Position::new(self)
    }
}

impl<P> PositionExt for P where P: Parser {}

/// Convenience function to create a Position combinator
pub fn position<P>(parser: P) -> Position<P> {
    Position::new(parser)
}
