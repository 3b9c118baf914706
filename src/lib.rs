//! Fixed-length typed arrays with checked element casts, bounded reduction
//! and small helper combinators.
//!
//! The core of the crate is the typed-array subsystem:
//!
//! - [`TArray`]: a fixed-length, ordered, homogeneous array, built from
//!   explicit elements with [`array_of!`] or slot by slot with
//!   [`TArray::fill`];
//! - [`is_castable`] / [`cast_array`]: runtime type checks and element-wise
//!   checked casts over dynamically typed ([`DynElement`]) arrays;
//! - [`reduce_array_as_needed`]: bounding an array to a maximum size by
//!   keeping the prefix, the suffix, or a uniform random sample drawn with
//!   replacement;
//! - [`pick_random`]: uniform selection from a non-empty slice.
//!
//! ```
//! use tarray::{array_of, reduce_array_as_needed, ReductionMethod, TArray};
//!
//! let words: TArray<&str> = array_of!["lorem", "ipsum", "dolor", "sit", "amet"];
//! let first_two = reduce_array_as_needed(words, 2, ReductionMethod::First);
//! assert_eq!(first_two.as_slice(), ["lorem", "ipsum"]);
//!
//! let greetings: TArray<String> = TArray::fill(3, |_, _| "Hello".to_string());
//! assert_eq!(greetings.len(), 3);
//! ```
//!
//! Every operation is a synchronous pure function of its arguments, and
//! failures are surfaced as `Result`s to the immediate caller. The
//! only shared state is the thread-local random source behind
//! [`pick_random`], and [`pick_random_with`] accepts a caller-owned
//! generator where an independent or seeded stream is needed.
//!
//! Alongside the core, the crate carries a set of small, independent
//! helpers: control combinators ([`repeat`], [`run_if`], [`run_catching`],
//! the [`Tap`] scope functions), calendar-aware time shifting
//! ([`shift_time`]), an opt-in description capability ([`Describe`]) and a
//! line-based file reader ([`read_lines`]).

mod array;
mod cast;
mod combinators;
mod describe;
mod error;
mod io;
mod random;
mod reduce;
mod time;

pub use crate::array::TArray;
pub use crate::cast::{cast_array, erase, is_castable, AnyElement, DynElement};
pub use crate::combinators::{
    repeat, repeat_indexed, run_catching, run_if, run_if_else, with, Tap,
};
pub use crate::describe::Describe;
pub use crate::error::{CastError, TArrayError};
pub use crate::io::read_lines;
pub use crate::random::{pick_random, pick_random_with};
pub use crate::reduce::{reduce_array_as_needed, ReductionMethod};
pub use crate::time::{now, shift_time, TimeShift};
