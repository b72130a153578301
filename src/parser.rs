use crate::env::Env;
use crate::error::{CodeLoc, ParseError};
use crate::result::ParseResult;
use crate::seq::{Seq, seq};
use crate::terminal::{Primitive, literal};
use std::marker::PhantomData;
use std::rc::Rc;

/// Core parser trait for parser combinators
///
/// Every parser shares one calling convention: it receives the remaining
/// input and the environment of the current run, and returns a
/// [`ParseResult`]. Failures must not consume input.
pub trait Parser {
    type Output;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output>;
}

/// Type-erased, cheaply clonable parser
pub type BoxedParser<O> = Rc<dyn Parser<Output = O>>;

impl<P> Parser for Rc<P>
where
    P: Parser + ?Sized,
{
    type Output = P::Output;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        (**self).parse(input, env)
    }
}

/// Erase the concrete type of a parser
pub fn boxed<P>(parser: P) -> BoxedParser<P::Output>
where
    P: Parser + 'static,
{
    Rc::new(parser)
}

/// Anything that can be turned into a parser
///
/// - a parser is used as is
/// - `&'static str` and `String` match that exact text
/// - a [`regex::Regex`] matches the pattern at the start of the input
/// - a `Vec` or array of shorthands is a [`Seq`] over its elements
pub trait IntoParser {
    type Output;
    type Parser: Parser<Output = Self::Output> + 'static;

    fn into_parser(self) -> Self::Parser;
}

impl<P> IntoParser for P
where
    P: Parser + 'static,
{
    type Output = P::Output;
    type Parser = P;

    fn into_parser(self) -> Self::Parser {
        self
    }
}

impl IntoParser for &'static str {
    type Output = String;
    type Parser = Primitive;

    fn into_parser(self) -> Self::Parser {
        literal(self)
    }
}

impl IntoParser for String {
    type Output = String;
    type Parser = Primitive;

    fn into_parser(self) -> Self::Parser {
        literal(self)
    }
}

impl IntoParser for regex::Regex {
    type Output = String;
    type Parser = Primitive;

    fn into_parser(self) -> Self::Parser {
        Primitive::Pattern(self)
    }
}

impl<S> IntoParser for Vec<S>
where
    S: IntoParser,
    S::Output: 'static,
{
    type Output = Vec<S::Output>;
    type Parser = Seq<S::Output>;

    fn into_parser(self) -> Self::Parser {
        seq(self)
    }
}

impl<S, const N: usize> IntoParser for [S; N]
where
    S: IntoParser,
    S::Output: 'static,
{
    type Output = Vec<S::Output>;
    type Parser = Seq<S::Output>;

    fn into_parser(self) -> Self::Parser {
        seq(self)
    }
}

/// Normalize a shorthand into a parser
///
/// For the multi-argument form (alternatives) use the [`parse!`](crate::parse!)
/// macro.
pub fn parse<S>(shorthand: S) -> S::Parser
where
    S: IntoParser,
{
    shorthand.into_parser()
}

/// Parser backed by a user supplied function
pub struct FnParser<F, O> {
    f: F,
    _output: PhantomData<fn() -> O>,
}

impl<F: Clone, O> Clone for FnParser<F, O> {
    fn clone(&self) -> Self {
        FnParser {
            f: self.f.clone(),
            _output: PhantomData,
        }
    }
}

impl<F, O> Parser for FnParser<F, O>
where
    F: for<'code> Fn(&'code str, &Env) -> ParseResult<'code, O>,
{
    type Output = O;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        (self.f)(input, env)
    }
}

/// Turn a function with the parser calling convention into a parser
pub fn from_fn<F, O>(f: F) -> FnParser<F, O>
where
    F: for<'code> Fn(&'code str, &Env) -> ParseResult<'code, O>,
{
    FnParser {
        f,
        _output: PhantomData,
    }
}

/// Entry points available on every parser
pub trait ParserExt: Parser + Sized {
    /// Parse `input` in a fresh environment
    fn run<'code>(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.parse(input, &Env::new())
    }

    /// Parse the whole of `input`, reporting failures as [`ParseError`]
    fn parse_str<'code>(&self, input: &'code str) -> Result<Self::Output, ParseError<'code>> {
        let env = Env::new();
        let result = self.parse(input, &env);

        if !result.is_ok() {
            // The shared location stops after the last successful match
            let loc = CodeLoc::at_location(input, env.location());
            return Err(match result.message() {
                Some(message) => ParseError::Expected {
                    message: message.to_string(),
                    loc,
                },
                None => ParseError::NoMatch(loc),
            });
        }

        let loc = CodeLoc::at_rest(input, result.rest());
        if !result.rest().is_empty() {
            return Err(ParseError::TrailingInput(loc));
        }
        result.into_value().ok_or(ParseError::NoMatch(loc))
    }

    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: 'static,
    {
        Rc::new(self)
    }
}

impl<P> ParserExt for P where P: Parser {}
