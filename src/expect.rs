use crate::env::Env;
use crate::parser::{IntoParser, Parser};
use crate::result::ParseResult;

/// Number of characters of upcoming input quoted in a diagnostic
const PREVIEW_CHARS: usize = 20;

/// Parser that attaches a positioned diagnostic to the failure of another
///
/// On success the inner result passes through unchanged. On failure the
/// result carries the message
/// `[{line}:{col}]: Expected {description}, got "{preview}"`
/// where the position is the environment's location after the last
/// successful match, and `rest` is the original input.
#[derive(Clone)]
pub struct Expect<P> {
    parser: P,
    description: String,
}

impl<P> Expect<P> {
    pub fn new(parser: P, description: impl Into<String>) -> Self {
        Expect {
            parser,
            description: description.into(),
        }
    }
}

impl<P> Parser for Expect<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        let result = self.parser.parse(input, env);
        if result.is_ok() {
            return result;
        }

        let message = format!(
            "[{}]: Expected {}, got \"{}\"",
            env.location(),
            self.description,
            preview(input)
        );
        ParseResult::expected(input, message)
    }
}

/// The start of `input`, cut to a short preview
fn preview(input: &str) -> String {
    match input.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &input[..cut]),
        None => input.to_string(),
    }
}

/// Wrap a parser so its failure reports what was expected
pub fn expect<S>(parser: S, description: impl Into<String>) -> Expect<S::Parser>
where
    S: IntoParser,
{
    Expect::new(parser.into_parser(), description)
}

pub trait ExpectExt: Parser + Sized {
    fn expect(self, description: impl Into<String>) -> Expect<Self> {
        Expect::new(self, description)
    }
}

impl<P: Parser> ExpectExt for P {}
