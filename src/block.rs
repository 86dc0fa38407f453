use crate::ascii::number::positive_integer;
use crate::bind::BindExt;
use crate::parser::Parser;
use crate::some::some;
use crate::take::take;
use crate::try_map::TryMapExt;

/// Parser for one length-prefixed block: a positive integer `n` followed
/// by exactly `n` characters of opaque payload
///
/// The block length is data, not grammar, so this cannot be written with
/// the concatenative combinators alone: `bind` feeds the parsed length
/// into `take` to build the payload parser at parse time. A length too
/// large to represent is a fatal error; a payload shorter than `n` is an
/// ordinary recoverable mismatch.
pub fn n_block() -> impl for<'text> Parser<'text, Output = String> {
    positive_integer()
        .try_map(|run| {
            run.parse::<usize>()
                .map_err(|e| format!("block length {run} is out of range: {e}").into())
        })
        .bind(take)
}

/// Parser for a maximal run of one or more length-prefixed blocks
///
/// Stops at the first position where no further length prefix parses.
pub fn n_blocks() -> impl for<'text> Parser<'text, Output = Vec<String>> {
    some(n_block())
}
