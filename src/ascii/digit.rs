use crate::terminal::{CharClass, Primitive};

/// Parser that matches a single ASCII digit (0-9)
pub fn digit() -> Primitive {
    Primitive::Class(CharClass::new(|c| c.is_ascii_digit(), 1, Some(1)))
}
