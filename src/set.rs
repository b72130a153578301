use crate::env::Env;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::collections::BTreeMap;

/// Writes a fixed entry into a mapping-valued success
///
/// Used to tag structured results with a discriminator, e.g. the `type` of
/// an AST node built with [`crate::map_seq::map_seq`]. An existing entry
/// under the same key is overwritten.
#[derive(Clone)]
pub struct Set<P, V> {
    parser: P,
    key: String,
    value: V,
}

impl<P, V> Set<P, V> {
    pub fn new(parser: P, key: impl Into<String>, value: V) -> Self {
        Set {
            parser,
            key: key.into(),
            value,
        }
    }
}

impl<P, V> Parser for Set<P, V>
where
    P: Parser<Output = BTreeMap<String, V>>,
    V: Clone,
{
    type Output = BTreeMap<String, V>;

    fn parse<'code>(&self, input: &'code str, env: &Env) -> ParseResult<'code, Self::Output> {
        self.parser.parse(input, env).map_value(|mut fields| {
            fields.insert(self.key.clone(), self.value.clone());
            fields
        })
    }
}

pub trait SetExt<V>: Parser<Output = BTreeMap<String, V>> + Sized {
    fn set(self, key: impl Into<String>, value: V) -> Set<Self, V>
    where
        V: Clone,
    {
        Set::new(self, key, value)
    }
}

impl<P, V> SetExt<V> for P where P: Parser<Output = BTreeMap<String, V>> {}
