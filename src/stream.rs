//! Stream in/out traits: the external textual format shared
//! by every container's `streamOut`/`streamIn` operation — `<size> <elem>
//! <elem> ...\n`, parsed back element-by-element with `FromStr`.
//!
//! Grounded on scapegoat's own `core::fmt::Debug`/`Display` formatting
//! conventions in `tree/tree.rs` (`impl Debug for SGTree`, which walks the
//! tree and writes a textual rendering directly rather than building an
//! intermediate `String`) — `stream_out` takes a `core::fmt::Write` sink
//! for the same reason: no intermediate allocation forced on the caller.

use core::fmt;
use core::str::FromStr;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::InvariantError;

/// An element type that knows how to write itself in the crate's external
/// stream format. Blanket-implemented for any `Display` type, matching the
/// teacher's reliance on std's own formatting traits rather than a custom
/// one wherever `Display` already does the job.
pub trait StreamOut {
    /// Writes this value's external representation to `out`. Must not
    /// write leading/trailing whitespace — callers are responsible for
    /// separators.
    fn stream_out<W: fmt::Write>(&self, out: &mut W) -> fmt::Result;
}

impl<T: fmt::Display> StreamOut for T {
    fn stream_out<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{}", self)
    }
}

/// An element type that can be parsed back out of the crate's external
/// stream format.
pub trait StreamIn: Sized {
    /// The error produced on a malformed token.
    type Err;

    /// Parses a single whitespace-delimited token.
    fn stream_in(token: &str) -> Result<Self, Self::Err>;
}

impl<T: FromStr> StreamIn for T {
    type Err = T::Err;

    fn stream_in(token: &str) -> Result<Self, Self::Err> {
        token.parse()
    }
}

/// Parses a `<size> <elem> <elem> ...` line into a `Vec<T>`, verifying
/// that the declared size matches the number of elements actually present
/// ("a size that disagrees with the element count that
/// follows is an argument error").
pub fn read_stream<T>(input: &str) -> Result<Vec<T>, InvariantError>
where
    T: StreamIn,
{
    let mut tokens = input.split_whitespace();

    let declared_size: usize = tokens
        .next()
        .ok_or(InvariantError {
            reason: "stream input is empty",
        })?
        .parse()
        .map_err(|_| InvariantError {
            reason: "stream input does not begin with a size",
        })?;

    let mut out = Vec::with_capacity(declared_size);
    for token in tokens {
        let elem = T::stream_in(token).map_err(|_| InvariantError {
            reason: "stream element failed to parse",
        })?;
        out.push(elem);
    }

    if out.len() != declared_size {
        return Err(InvariantError {
            reason: "declared stream size disagrees with element count",
        });
    }

    Ok(out)
}

/// Renders `elems` in the crate's external stream format as an owned
/// `String`, for callers that don't have their own `core::fmt::Write` sink
/// handy.
pub fn write_stream<T: StreamOut>(elems: &[T]) -> String {
    let mut out = String::new();
    let _ = crate::algorithms::stream(elems.iter(), elems.len(), &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn round_trips_integers() {
        let s = write_stream(&[1, 2, 3]);
        assert_eq!(s, "3 1 2 3\n");
        let parsed: Vec<i32> = read_stream(&s).unwrap();
        assert_eq!(parsed, vec![1, 2, 3]);
    }

    #[test]
    fn rejects_size_mismatch() {
        let err = read_stream::<i32>("3 1 2").unwrap_err();
        assert_eq!(err.reason, "declared stream size disagrees with element count");
    }

    #[test]
    fn rejects_empty_input() {
        let err = read_stream::<i32>("").unwrap_err();
        assert_eq!(err.reason, "stream input is empty");
    }

    #[test]
    fn rejects_malformed_element() {
        let err = read_stream::<i32>("1 x").unwrap_err();
        assert_eq!(err.reason, "stream element failed to parse");
    }
}
