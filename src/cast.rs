//! Checked element-wise casts between array element types

use std::any::{type_name, Any};

use crate::error::CastError;
use crate::TArray;

/// An element whose concrete type is recoverable at runtime.
///
/// This is the crate's type descriptor: where a monomorphized constructor
/// like [`TArray::fill`] knows its element type statically, a cast has to
/// test each element's runtime type against the requested target. The trait
/// is blanket-implemented for every `'static` type, so any value can be
/// erased into a [`DynElement`] and later recovered with [`cast_array`].
pub trait AnyElement: Any {
    /// Name of the element's concrete type, for diagnostics.
    fn type_name(&self) -> &'static str;
    /// Borrows the element as `Any` so it can be downcast.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AnyElement for T {
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A boxed element whose concrete type is only known at runtime.
pub type DynElement = Box<dyn AnyElement>;

/// Returns `true` iff `value`'s runtime type is the target type `A`.
///
/// Pure predicate, no side effects.
///
/// ```
/// use tarray::is_castable;
///
/// let greeting = "Hello".to_string();
/// assert!(is_castable::<String>(&greeting));
/// assert!(!is_castable::<i32>(&greeting));
/// ```
#[must_use]
pub fn is_castable<A: Any>(value: &dyn AnyElement) -> bool {
    value.as_any().is::<A>()
}

/// Erases the element type of `array`, yielding a dynamically typed array.
///
/// The inverse of a successful [`cast_array`] back to the original element
/// type.
#[must_use]
pub fn erase<T: Any>(array: TArray<T>) -> TArray<DynElement> {
    array
        .into_iter()
        .map(|element| Box::new(element) as DynElement)
        .collect()
}

/// Produces a new array of element type `A` from a dynamically typed source,
/// checking each element left-to-right.
///
/// On the first element whose runtime type is not `A` the operation aborts
/// with a [`CastError`] naming the offending index, the element's runtime
/// type and the requested target type; nothing built so far is returned to
/// the caller. On success the new array has the same length and order as
/// `source`, which is left unmodified either way.
pub fn cast_array<A: Any + Clone>(source: &TArray<DynElement>) -> Result<TArray<A>, CastError> {
    let mut cast = Vec::with_capacity(source.len());
    for (index, element) in source.iter().enumerate() {
        // deref past the box so the element's own impl answers, not `Box`'s
        let element: &dyn AnyElement = &**element;
        match element.as_any().downcast_ref::<A>() {
            Some(value) => cast.push(value.clone()),
            None => {
                return Err(CastError {
                    index,
                    actual: element.type_name(),
                    expected: type_name::<A>(),
                })
            }
        }
    }
    Ok(cast.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array_of;

    #[test]
    fn test_is_castable() {
        let greeting = "Hello".to_string();
        assert!(is_castable::<String>(&greeting));
        assert!(!is_castable::<i32>(&greeting));

        let number = 42i32;
        assert!(is_castable::<i32>(&number));
        assert!(!is_castable::<i64>(&number));
    }

    #[test]
    fn test_is_castable_through_an_erased_element() {
        let element: DynElement = Box::new("Hello".to_string());
        // deref past the box: the check must see the element's type
        assert!(is_castable::<String>(&*element));
        assert!(!is_castable::<i32>(&*element));
    }

    #[test]
    fn test_cast_array_success_preserves_order() {
        let words: TArray<String> = array_of!["lorem".to_string(), "ipsum".to_string()];
        let erased = erase(words.clone());
        let cast: TArray<String> = cast_array(&erased).unwrap();
        assert_eq!(cast, words);
        // the source survives the cast unmodified
        assert_eq!(erased.len(), 2);
        assert!(is_castable::<String>(&*erased[0]));
    }

    #[test]
    fn test_cast_array_reports_first_offending_index() {
        let mixed: TArray<DynElement> = array_of![
            Box::new("lorem".to_string()) as DynElement,
            Box::new(7i32) as DynElement,
            Box::new(true) as DynElement,
        ];
        let err = cast_array::<String>(&mixed).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.actual, std::any::type_name::<i32>());
        assert_eq!(err.expected, std::any::type_name::<String>());
    }

    #[test]
    fn test_cast_array_empty() {
        let empty: TArray<DynElement> = array_of![];
        let cast: TArray<u8> = cast_array(&empty).unwrap();
        assert!(cast.is_empty());
    }

    #[test]
    fn test_cast_error_display() {
        let mixed: TArray<DynElement> = array_of![Box::new(1.5f64) as DynElement];
        let err = cast_array::<bool>(&mixed).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("index 0"));
        assert!(message.contains("f64"));
        assert!(message.contains("bool"));
    }
}
