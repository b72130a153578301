use crate::env::Env;
use crate::parser::{BoxedParser, IntoParser, Parser, boxed};
use crate::result::ParseResult;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `left + inner + right` and returns just the `inner` value with the
/// delimiters discarded. The delimiters may produce any type. Failure of any
/// part fails the whole parser at its original input.
///
/// Does not handle whitespace automatically; combine with
/// [`crate::skip::skip`] or [`crate::terminals::terminals`] for that.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
/// - `"'data'"` → `"data"`
#[derive(Clone)]
pub struct Wrap<L, P, R> {
    left: L,
    inner: P,
    right: R,
}

impl<L, P, R> Wrap<L, P, R> {
    pub fn new(left: L, inner: P, right: R) -> Self {
        Wrap { left, inner, right }
    }
}

impl<L, P, R> Parser for Wrap<L, P, R>
where
    L: Parser,
    P: Parser,
    R: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        let open = self.left.parse(input, env);
        if !open.is_ok() {
            return open.fail_from(input);
        }

        let content = self.inner.parse(open.rest(), env);
        if !content.is_ok() {
            return content.fail_from(input);
        }

        let close = self.right.parse(content.rest(), env);
        if !close.is_ok() {
            return close.fail_from(input);
        }

        content.with_rest(close.rest())
    }
}

/// Creates a parser that matches `inner` between `left` and `right`
pub fn wrap<A, B, C>(left: A, right: C, inner: B) -> Wrap<A::Parser, B::Parser, C::Parser>
where
    A: IntoParser,
    B: IntoParser,
    C: IntoParser,
{
    Wrap::new(left.into_parser(), inner.into_parser(), right.into_parser())
}

/// Creates a parser that matches `inner` between two occurrences of `quote`
pub fn quoted<A, B>(
    quote: A,
    inner: B,
) -> Wrap<BoxedParser<A::Output>, B::Parser, BoxedParser<A::Output>>
where
    A: IntoParser,
    A::Output: 'static,
    B: IntoParser,
{
    let quote = boxed(quote.into_parser());
    Wrap::new(quote.clone(), inner.into_parser(), quote)
}
