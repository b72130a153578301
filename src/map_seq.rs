use crate::env::Env;
use crate::map::MapExt;
use crate::parser::{BoxedParser, IntoParser, Parser, boxed};
use crate::result::ParseResult;
use std::collections::BTreeMap;

/// One element of a [`MapSeq`]
pub enum Field<O> {
    /// Parse and store the value under the key
    Capture(String, BoxedParser<O>),
    /// Parse and discard the value
    Ignore(BoxedParser<()>),
}

impl<O> Clone for Field<O> {
    fn clone(&self) -> Self {
        match self {
            Field::Capture(key, parser) => Field::Capture(key.clone(), parser.clone()),
            Field::Ignore(parser) => Field::Ignore(parser.clone()),
        }
    }
}

/// Field whose value is stored under `key`
pub fn capture<S>(key: impl Into<String>, parser: S) -> Field<S::Output>
where
    S: IntoParser,
    S::Output: 'static,
{
    Field::Capture(key.into(), boxed(parser.into_parser()))
}

/// Field that must match but contributes nothing to the result
pub fn ignore<O, S>(parser: S) -> Field<O>
where
    S: IntoParser,
{
    Field::Ignore(boxed(parser.into_parser().map(|_| ())))
}

/// Sequence that builds a named-field record
///
/// Fields run one after another like [`crate::seq::Seq`]. On success the
/// value is the mapping of captured keys; a key captured twice keeps the
/// later value. On failure `rest` is the original input and the failing
/// field's diagnostic is kept.
pub struct MapSeq<O> {
    fields: Vec<Field<O>>,
}

impl<O> Clone for MapSeq<O> {
    fn clone(&self) -> Self {
        MapSeq {
            fields: self.fields.clone(),
        }
    }
}

impl<O> MapSeq<O> {
    pub fn new(fields: Vec<Field<O>>) -> Self {
        MapSeq { fields }
    }
}

impl<O> Parser for MapSeq<O> {
    type Output = BTreeMap<String, O>;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        let mut captured = BTreeMap::new();
        let mut rest = input;

        for field in &self.fields {
            match field {
                Field::Capture(key, parser) => {
                    let result = parser.parse(rest, env);
                    if !result.is_ok() {
                        return result.fail_from(input);
                    }
                    let (value, next) = result.into_parts();
                    if let Some(value) = value {
                        captured.insert(key.clone(), value);
                    }
                    rest = next;
                }
                Field::Ignore(parser) => {
                    let result = parser.parse(rest, env);
                    if !result.is_ok() {
                        return result.fail_from(input);
                    }
                    rest = result.rest();
                }
            }
        }

        ParseResult::success(captured, rest)
    }
}

/// Build a [`MapSeq`] from its fields
pub fn map_seq<I, O>(fields: I) -> MapSeq<O>
where
    I: IntoIterator<Item = Field<O>>,
{
    MapSeq::new(fields.into_iter().collect())
}
