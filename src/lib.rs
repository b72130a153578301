//! # parsewise - Parser Combinator Library
//!
//! Composable backtracking parsers over `&str` that thread a shared
//! environment through every call.
//!
//! Grammars are built from small pieces:
//!
//! - **Shorthands**: string literals, [`regex::Regex`] values and arrays of
//!   shorthands are parsers too (see [`parser::IntoParser`])
//! - **Combinators**: [`or!`], [`seq!`], [`many::many`], [`opt::opt`],
//!   [`list::list`], [`lazy_many::lazy_many`], [`wrap::wrap`]
//! - **Mapping chain**: `.map`, `.to`, `.nth`, `.set`, `.skip`, `.take`, ...
//!   on every parser
//! - **Terminals**: [`terminals::terminals`] rewrites every primitive of a
//!   grammar, typically to skip whitespace around each token
//!
//! Parsing never panics. Every outcome is a [`ParseResult`]; failures leave
//! the input unconsumed and may carry a diagnostic written by
//! [`expect::expect`].
//!
//! ```
//! use parsewise::prelude::*;
//!
//! let ws = terminals(skip(whitespace()));
//! let numbers = ws.apply(wrap("[", "]", comma_list(integer())));
//!
//! let result = numbers.run(" [ 1, 2 ,3 ] ");
//! assert!(is_success(&result));
//! assert_eq!(result.into_value(), Some(vec![1, 2, 3]));
//! ```

pub mod ascii;
pub mod env;
pub mod error;
pub mod expect;
pub mod filter;
pub mod lazy;
pub mod lazy_many;
pub mod list;
pub mod many;
pub mod map;
pub mod map_seq;
pub mod nth;
pub mod opt;
pub mod or;
pub mod parser;
pub mod position;
pub mod result;
pub mod seq;
pub mod set;
pub mod skip;
pub mod slice;
pub mod some;
pub mod terminal;
pub mod terminals;
pub mod wrap;

pub use env::{Env, Location};
pub use error::{CodeLoc, GrammarError, ParseError};
pub use lazy::{Forward, forward, lazy};
pub use parser::{BoxedParser, IntoParser, Parser, ParserExt, from_fn, parse};
pub use position::{Position, PositionExt, Span, position};
pub use result::{ParseResult, is_success, value};
pub use terminal::{Primitive, any, literal, pattern};

/// Everything needed to write a grammar
pub mod prelude {
    pub use crate::ascii::{digit, integer, whitespace};
    pub use crate::env::{Env, Location};
    pub use crate::expect::{ExpectExt, expect};
    pub use crate::filter::FilterExt;
    pub use crate::lazy::{Forward, forward, lazy};
    pub use crate::lazy_many::lazy_many;
    pub use crate::list::{comma_list, list};
    pub use crate::many::many;
    pub use crate::map::MapExt;
    pub use crate::map_seq::{capture, ignore, map_seq};
    pub use crate::nth::NthExt;
    pub use crate::opt::opt;
    pub use crate::or::{OrExt, or};
    pub use crate::parser::{BoxedParser, IntoParser, Parser, ParserExt, from_fn};
    pub use crate::position::PositionExt;
    pub use crate::result::{ParseResult, is_success, value};
    pub use crate::seq::seq;
    pub use crate::set::SetExt;
    pub use crate::skip::skip;
    pub use crate::slice::SliceExt;
    pub use crate::some::some;
    pub use crate::terminal::{any, literal, pattern};
    pub use crate::terminals::terminals;
    pub use crate::wrap::{quoted, wrap};
    pub use crate::{or, parse, seq};
}

/// Alternatives with a common output, tried in order
///
/// Each argument may be any shorthand; they are boxed so that different
/// parser types can be mixed.
#[macro_export]
macro_rules! or {
    ($($parser:expr),+ $(,)?) => {
        $crate::or::Or::new(vec![
            $($crate::parser::boxed($crate::parser::IntoParser::into_parser($parser))),+
        ])
    };
}

/// Sequence of parsers with a common output, applied one after another
#[macro_export]
macro_rules! seq {
    ($($parser:expr),+ $(,)?) => {
        $crate::seq::Seq::new(vec![
            $($crate::parser::boxed($crate::parser::IntoParser::into_parser($parser))),+
        ])
    };
}

/// Normalize shorthands into a parser
///
/// One argument is [`parser::parse`]; several are alternatives, as [`or!`].
#[macro_export]
macro_rules! parse {
    ($parser:expr $(,)?) => {
        $crate::parser::parse($parser)
    };
    ($($parser:expr),+ $(,)?) => {
        $crate::or!($($parser),+)
    };
}
