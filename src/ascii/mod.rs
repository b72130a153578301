pub mod digit;
pub mod integer;
pub mod whitespace;

pub use digit::digit;
pub use integer::integer;
pub use whitespace::whitespace;
