//! Bounding arrays to a maximum size

use crate::random::pick_random_with;
use crate::TArray;

/// Policy for shrinking an array that exceeds a size bound.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReductionMethod {
    /// Keep the first `max_size` elements, preserving order
    First,
    /// Keep the last `max_size` elements, preserving order
    Last,
    /// Fill each output slot with an element drawn uniformly at random from
    /// the whole input, with replacement
    Random,
}

/// Bounds `array` to at most `max_size` elements using the given method.
///
/// If the array already fits, it is returned as-is: the backing allocation
/// is not touched and no copy is made, regardless of method. Otherwise a new
/// array of exactly `max_size` elements is built per [`ReductionMethod`].
///
/// `Random` draws each output slot independently from the entire original
/// array, so the output may contain duplicates and need not include every
/// distinct element of the source.
///
/// ```
/// use tarray::{array_of, reduce_array_as_needed, ReductionMethod, TArray};
///
/// let words: TArray<&str> = array_of!["lorem", "ipsum", "dolor", "sit", "amet"];
/// let first = reduce_array_as_needed(words.clone(), 2, ReductionMethod::First);
/// assert_eq!(first.as_slice(), ["lorem", "ipsum"]);
/// let last = reduce_array_as_needed(words, 2, ReductionMethod::Last);
/// assert_eq!(last.as_slice(), ["sit", "amet"]);
/// ```
pub fn reduce_array_as_needed<T: Clone>(
    array: TArray<T>,
    max_size: usize,
    method: ReductionMethod,
) -> TArray<T> {
    if array.len() <= max_size {
        return array;
    }
    match method {
        ReductionMethod::First => {
            let mut items = array.into_vec();
            items.truncate(max_size);
            items.into()
        }
        ReductionMethod::Last => {
            let mut items = array.into_vec();
            let tail = items.split_off(items.len() - max_size);
            tail.into()
        }
        ReductionMethod::Random => {
            let mut rng = rand::thread_rng();
            let source = array.as_slice();
            TArray::fill(max_size, |_, _| {
                // len > max_size, so the source cannot be empty here
                pick_random_with(&mut rng, source)
                    .expect("drawing from a non-empty array")
                    .clone()
            })
        }
    }
}
