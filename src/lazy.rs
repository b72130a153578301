use crate::env::Env;
use crate::error::GrammarError;
use crate::parser::{BoxedParser, IntoParser, Parser, boxed};
use crate::result::ParseResult;
use once_cell::unsync::OnceCell;
use std::fmt;
use std::rc::Rc;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers built by functions.
///
/// The factory runs on the first parse only; the built parser is kept for
/// every later call.
#[derive(Clone)]
pub struct Lazy<F, P> {
    factory: F,
    parser: OnceCell<P>,
}

impl<F, P> Lazy<F, P> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            parser: OnceCell::new(),
        }
    }

    pub fn is_built(&self) -> bool {
        self.parser.get().is_some()
    }
}

impl<F, S, P> Parser for Lazy<F, P>
where
    F: Fn() -> S,
    S: IntoParser<Parser = P>,
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        self.parser
            .get_or_init(|| (self.factory)().into_parser())
            .parse(input, env)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, S>(factory: F) -> Lazy<F, S::Parser>
where
    F: Fn() -> S,
    S: IntoParser,
{
    Lazy::new(factory)
}

/// Late-bound reference to a parser defined after its first use
///
/// Clones share one cell: build the grammar with clones of the forward
/// reference, then [`define`](Forward::define) it once. Parsing through an
/// undefined reference is an ordinary failure.
///
/// A grammar that refers to itself through a `Forward` forms an `Rc` cycle
/// and is never freed.
pub struct Forward<O> {
    name: Rc<str>,
    cell: Rc<OnceCell<BoxedParser<O>>>,
}

impl<O> Clone for Forward<O> {
    fn clone(&self) -> Self {
        Forward {
            name: Rc::clone(&self.name),
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<O> Forward<O> {
    pub fn new(name: impl Into<String>) -> Self {
        Forward {
            name: Rc::from(name.into()),
            cell: Rc::new(OnceCell::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_defined(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Bind the parser this reference stands for
    pub fn define<S>(&self, parser: S) -> Result<(), GrammarError>
    where
        S: IntoParser<Output = O>,
        O: 'static,
    {
        self.cell
            .set(boxed(parser.into_parser()))
            .map_err(|_| GrammarError::AlreadyDefined {
                name: self.name.to_string(),
            })
    }
}

impl<O> Parser for Forward<O> {
    type Output = O;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        match self.cell.get() {
            Some(parser) => parser.parse(input, env),
            None => ParseResult::failure(input),
        }
    }
}

impl<O> fmt::Debug for Forward<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forward")
            .field("name", &self.name)
            .field("defined", &self.is_defined())
            .finish()
    }
}

/// Create an undefined forward reference
pub fn forward<O>(name: impl Into<String>) -> Forward<O> {
    Forward::new(name)
}
