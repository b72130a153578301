use crate::env::Env;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Projects one element out of a sequence-valued parser
///
/// An index past the end of the produced sequence is a failure that consumes
/// nothing.
#[derive(Clone)]
pub struct Nth<P> {
    parser: P,
    index: usize,
}

impl<P> Nth<P> {
    pub fn new(parser: P, index: usize) -> Self {
        Nth { parser, index }
    }
}

impl<P, T> Parser for Nth<P>
where
    P: Parser<Output = Vec<T>>,
{
    type Output = T;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        let result = self.parser.parse(input, env);
        if !result.is_ok() {
            return result.fail_from(input);
        }

        let (values, rest) = result.into_parts();
        match values.and_then(|values| values.into_iter().nth(self.index)) {
            Some(value) => ParseResult::success(value, rest),
            None => ParseResult::failure(input),
        }
    }
}

/// Projects several elements, in the order the indices are given
#[derive(Clone)]
pub struct Select<P> {
    parser: P,
    indices: Vec<usize>,
}

impl<P> Select<P> {
    pub fn new(parser: P, indices: Vec<usize>) -> Self {
        Select { parser, indices }
    }
}

impl<P, T> Parser for Select<P>
where
    P: Parser<Output = Vec<T>>,
    T: Clone,
{
    type Output = Vec<T>;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        let result = self.parser.parse(input, env);
        if !result.is_ok() {
            return result.fail_from(input);
        }

        let (values, rest) = result.into_parts();
        let values = values.unwrap_or_default();
        let selected: Option<Vec<T>> = self
            .indices
            .iter()
            .map(|&index| values.get(index).cloned())
            .collect();

        match selected {
            Some(selected) => ParseResult::success(selected, rest),
            None => ParseResult::failure(input),
        }
    }
}

/// Extension trait to add .nth() and .select() to sequence-valued parsers
pub trait NthExt<T>: Parser<Output = Vec<T>> + Sized {
    fn nth(self, index: usize) -> Nth<Self> {
        Nth::new(self, index)
    }

    fn select<I>(self, indices: I) -> Select<Self>
    where
        I: IntoIterator<Item = usize>,
        T: Clone,
    {
        Select::new(self, indices.into_iter().collect())
    }
}

impl<P, T> NthExt<T> for P where P: Parser<Output = Vec<T>> {}
