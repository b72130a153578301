use crate::env::Env;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that transforms the output of a parser using a mapping function
#[derive(Clone)]
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, T, U> Parser for Map<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        self.parser.parse(input, env).map_value(&self.mapper)
    }
}

/// Map whose function may reject the value
///
/// A rejected value turns the success into a failure at the original input.
#[derive(Clone)]
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        TryMap { parser, mapper }
    }
}

impl<P, F, T, U> Parser for TryMap<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> Option<U>,
{
    type Output = U;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        let result = self.parser.parse(input, env);
        if !result.is_ok() {
            return result.fail_from(input);
        }
        let (value, rest) = result.into_parts();
        match value.and_then(&self.mapper) {
            Some(mapped) => ParseResult::success(mapped, rest),
            None => ParseResult::failure(input),
        }
    }
}

/// Replaces any successful value with a constant
#[derive(Clone)]
pub struct To<P, C> {
    parser: P,
    constant: C,
}

impl<P, C> To<P, C> {
    pub fn new(parser: P, constant: C) -> Self {
        To { parser, constant }
    }
}

impl<P, C> Parser for To<P, C>
where
    P: Parser,
    C: Clone,
{
    type Output = C;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        self.parser
            .parse(input, env)
            .map_value(|_| self.constant.clone())
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map(), .try_map() and .to() to every parser
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn try_map<F, U>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Option<U>,
    {
        TryMap::new(self, mapper)
    }

    /// Discard the matched value in favor of `constant`
    fn to<C: Clone>(self, constant: C) -> To<Self, C> {
        To::new(self, constant)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}
