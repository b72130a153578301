use serde::Serialize;

/// Outcome of applying a parser to some input
///
/// `value` is present exactly when `success` is true. `rest` is the input that
/// was not consumed: on failure it is the failing parser's own input, on
/// success it is shorter by exactly what was consumed.
///
/// `message` carries the diagnostic written by [`crate::expect::expect`].
/// Combinators that propagate a child's failure propagate its message too,
/// so the diagnostic survives enclosing sequences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult<'code, T> {
    success: bool,
    value: Option<T>,
    rest: &'code str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl<'code, T> ParseResult<'code, T> {
    pub fn success(value: T, rest: &'code str) -> Self {
        ParseResult {
            success: true,
            value: Some(value),
            rest,
            message: None,
        }
    }

    pub fn failure(rest: &'code str) -> Self {
        ParseResult {
            success: false,
            value: None,
            rest,
            message: None,
        }
    }

    /// Failure with a positioned diagnostic
    pub fn expected(rest: &'code str, message: impl Into<String>) -> Self {
        ParseResult {
            success: false,
            value: None,
            rest,
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.success
    }

    /// Matched and consumed the whole input
    pub fn is_complete(&self) -> bool {
        self.success && self.rest.is_empty()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    pub fn rest(&self) -> &'code str {
        self.rest
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn into_parts(self) -> (Option<T>, &'code str) {
        (self.value, self.rest)
    }

    /// Transform the value of a success, failures pass through untouched
    pub fn map_value<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<'code, U> {
        ParseResult {
            success: self.success,
            value: self.value.map(f),
            rest: self.rest,
            message: self.message,
        }
    }

    /// Same outcome, ending where a later parser stopped
    pub(crate) fn with_rest(self, rest: &'code str) -> Self {
        ParseResult { rest, ..self }
    }

    /// Re-type a failure, keeping its diagnostic
    ///
    /// `rest` is replaced by `input` so that a compound parser reports its own
    /// input rather than the position its child stopped at.
    pub fn fail_from<U>(self, input: &'code str) -> ParseResult<'code, U> {
        ParseResult {
            success: false,
            value: None,
            rest: input,
            message: self.message,
        }
    }
}

/// True when `result` succeeded and consumed the entire input
pub fn is_success<T>(result: &ParseResult<'_, T>) -> bool {
    result.is_complete()
}

/// Project the value out of a result
pub fn value<T>(result: ParseResult<'_, T>) -> Option<T> {
    result.into_value()
}
