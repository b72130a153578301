use crate::terminal::{CharClass, Primitive};

/// Parser that matches zero or more whitespace characters
///
/// Never fails, which makes it the usual argument to
/// [`crate::skip::skip`].
pub fn whitespace() -> Primitive {
    Primitive::Class(CharClass::new(char::is_whitespace, 0, None))
}
