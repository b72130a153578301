use crate::env::Env;
use crate::parser::{IntoParser, Parser};
use crate::result::ParseResult;
use crate::terminals::{Terminal, TerminalWrapper};
use std::rc::Rc;

/// Discards matches of a parser before and after whatever it is applied to
///
/// `skip(ignore).apply(p)` behaves like `seq(ignore, p, ignore).nth(1)`
/// except that `ignore` and `p` may produce different types.
pub struct Skip<I> {
    ignore: Rc<I>,
}

impl<I> Clone for Skip<I> {
    fn clone(&self) -> Self {
        Skip {
            ignore: Rc::clone(&self.ignore),
        }
    }
}

impl<I> Skip<I> {
    pub fn new(ignore: I) -> Self {
        Skip {
            ignore: Rc::new(ignore),
        }
    }

    pub fn apply<S>(&self, parser: S) -> Skipped<I, S::Parser>
    where
        S: IntoParser,
    {
        Skipped {
            ignore: Rc::clone(&self.ignore),
            parser: parser.into_parser(),
        }
    }
}

impl<I> TerminalWrapper for Skip<I>
where
    I: Parser + 'static,
{
    fn wrap(&self, terminal: Terminal) -> Terminal {
        Rc::new(self.apply(terminal))
    }
}

/// Parser produced by [`Skip::apply`]
pub struct Skipped<I, P> {
    ignore: Rc<I>,
    parser: P,
}

impl<I, P: Clone> Clone for Skipped<I, P> {
    fn clone(&self) -> Self {
        Skipped {
            ignore: Rc::clone(&self.ignore),
            parser: self.parser.clone(),
        }
    }
}

impl<I, P> Parser for Skipped<I, P>
where
    I: Parser,
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        let before = self.ignore.parse(input, env);
        if !before.is_ok() {
            return before.fail_from(input);
        }

        let inner = self.parser.parse(before.rest(), env);
        if !inner.is_ok() {
            return inner.fail_from(input);
        }

        let after = self.ignore.parse(inner.rest(), env);
        if !after.is_ok() {
            return after.fail_from(input);
        }

        inner.with_rest(after.rest())
    }
}

/// Create a [`Skip`] from a shorthand
pub fn skip<S>(ignore: S) -> Skip<S::Parser>
where
    S: IntoParser,
{
    Skip::new(ignore.into_parser())
}
