use crate::env::Env;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Which part of a sequence value to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    /// Drop `n` elements from the front
    Skip(usize),
    /// Drop `n` elements from the back
    SkipLast(usize),
    /// Keep the first `n` elements
    Take(usize),
    /// Keep the last `n` elements
    TakeLast(usize),
}

impl Slice {
    fn apply<T>(self, mut values: Vec<T>) -> Vec<T> {
        let len = values.len();
        match self {
            Slice::Skip(n) => {
                values.drain(..n.min(len));
            }
            Slice::SkipLast(n) => values.truncate(len.saturating_sub(n)),
            Slice::Take(n) => values.truncate(n),
            Slice::TakeLast(n) => {
                values.drain(..len.saturating_sub(n));
            }
        }
        values
    }
}

/// Trims a sequence-valued success; counts larger than the sequence clamp
#[derive(Clone)]
pub struct Sliced<P> {
    parser: P,
    slice: Slice,
}

impl<P> Sliced<P> {
    pub fn new(parser: P, slice: Slice) -> Self {
        Sliced { parser, slice }
    }
}

impl<P, T> Parser for Sliced<P>
where
    P: Parser<Output = Vec<T>>,
{
    type Output = Vec<T>;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        self.parser
            .parse(input, env)
            .map_value(|values| self.slice.apply(values))
    }
}

pub trait SliceExt<T>: Parser<Output = Vec<T>> + Sized {
    fn skip(self, n: usize) -> Sliced<Self> {
        Sliced::new(self, Slice::Skip(n))
    }

    fn skip_last(self, n: usize) -> Sliced<Self> {
        Sliced::new(self, Slice::SkipLast(n))
    }

    fn take(self, n: usize) -> Sliced<Self> {
        Sliced::new(self, Slice::Take(n))
    }

    fn take_last(self, n: usize) -> Sliced<Self> {
        Sliced::new(self, Slice::TakeLast(n))
    }
}

impl<P, T> SliceExt<T> for P where P: Parser<Output = Vec<T>> {}
