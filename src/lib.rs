//! # TextComb - Parser Combinator Library
//!
//! A parser combinator library for character-level text parsing.
//!
//! TextComb provides composable, type-safe parsers that can be combined to build
//! complex parsing logic from simple building blocks. The library emphasizes:
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Rich error reporting**: Provides line numbers, context, and detailed error messages
//! - **Composability**: Small parsers combine into larger ones using combinators
//! - **Free backtracking**: Cursors are `Copy`, so alternation retries from a saved position

pub mod and;
pub mod ascii;
pub mod bind;
pub mod block;
pub mod chain;
pub mod char;
pub mod choice;
pub mod cursor;
pub mod eoi;
pub mod error;
pub mod filter;
pub mod ignore;
pub mod literal;
pub mod many;
pub mod map;
pub mod opt;
pub mod or;
pub mod parser;
pub mod pure;
pub mod some;
pub mod take;
pub mod try_map;
pub mod word;

pub use and::{And, AndExt, and};
pub use bind::{Bind, BindExt, bind};
pub use block::{n_block, n_blocks};
pub use chain::{Chain, chain};
pub use self::char::{AnyChar, IsChar, OneOf, any_char, is_char, one_of};
pub use choice::{Choice, choice};
pub use cursor::CharCursor;
pub use eoi::{Eoi, eoi};
pub use error::{CodeLoc, ParseError, ReadablePosition};
pub use filter::{Filter, FilterExt, filter};
pub use ignore::{Ignore, IgnoreExt, ignore};
pub use literal::{Literal, literal};
pub use many::{Many, many};
pub use map::{Map, MapExt, map};
pub use opt::{Opt, OptExt, opt};
pub use or::{Or, OrExt, or};
pub use parser::{BoxedParser, Parser};
pub use pure::{Epsilon, Pure, epsilon, pure};
pub use some::some;
pub use take::{Take, take};
pub use try_map::{TryMap, TryMapExt, try_map};
pub use word::{join, word};
