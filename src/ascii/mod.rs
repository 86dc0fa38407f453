pub mod digit;
pub mod identifier;
pub mod letter;
pub mod number;
pub mod whitespace;

pub use digit::{digit, digits};
pub use identifier::identifier;
pub use letter::{alpha, alphanumeric, lowercase, uppercase};
pub use number::{decimal, integer, non_negative_integer, positive_integer};
pub use whitespace::{newline, newlines, opt_ws, space, spaces, tab, tabs, ws};
