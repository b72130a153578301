use crate::env::Env;
use crate::parser::{BoxedParser, IntoParser, Parser};
use crate::result::ParseResult;
use std::rc::Rc;

/// A primitive parser as seen by a terminals wrapper
pub type Terminal = BoxedParser<String>;

/// Rewrites every primitive parser before it is applied
///
/// Implemented for closures `Fn(Terminal) -> Terminal` and for
/// [`crate::skip::Skip`], which makes `terminals(skip(whitespace()))` skip
/// whitespace around every token of a grammar.
pub trait TerminalWrapper {
    fn wrap(&self, terminal: Terminal) -> Terminal;
}

impl<F> TerminalWrapper for F
where
    F: Fn(Terminal) -> Terminal,
{
    fn wrap(&self, terminal: Terminal) -> Terminal {
        self(terminal)
    }
}

/// Installs a terminals wrapper for the parsers it is applied to
#[derive(Clone)]
pub struct Terminals {
    wrapper: Rc<dyn TerminalWrapper>,
}

impl Terminals {
    pub fn new(wrapper: impl TerminalWrapper + 'static) -> Self {
        Terminals {
            wrapper: Rc::new(wrapper),
        }
    }

    pub fn apply<S>(&self, parser: S) -> WithTerminals<S::Parser>
    where
        S: IntoParser,
    {
        WithTerminals {
            parser: parser.into_parser(),
            wrapper: Rc::clone(&self.wrapper),
        }
    }
}

/// Parser running its child with a terminals wrapper installed
#[derive(Clone)]
pub struct WithTerminals<P> {
    parser: P,
    wrapper: Rc<dyn TerminalWrapper>,
}

impl<P> Parser for WithTerminals<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        self.parser
            .parse(input, &env.with_terminals(Rc::clone(&self.wrapper)))
    }
}

/// Create a [`Terminals`] from a wrapper
pub fn terminals(wrapper: impl TerminalWrapper + 'static) -> Terminals {
    Terminals::new(wrapper)
}
