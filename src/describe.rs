//! Opt-in human-readable descriptions

use crate::TArray;

/// Capability for producing a human-readable description of a value.
///
/// Unlike `Debug`, which is derived mechanically, a type opts in and chooses
/// what to expose; nothing is recovered by introspection.
pub trait Describe {
    /// Returns the description.
    fn describe(&self) -> String;
}

macro_rules! describe_via_display {
    ($($ty:ty),*) => {
        $(impl Describe for $ty {
            fn describe(&self) -> String {
                self.to_string()
            }
        })*
    };
}

describe_via_display!(
    i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64, bool, char, String,
    &str
);

impl<T: Describe> Describe for TArray<T> {
    fn describe(&self) -> String {
        let elements: Vec<String> = self.iter().map(Describe::describe).collect();
        format!("[{}]", elements.join(", "))
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe(&self) -> String {
        match self {
            Some(value) => value.describe(),
            None => "none".to_string(),
        }
    }
}
