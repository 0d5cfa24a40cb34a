//! Truthiness for value-keyed construction and assertion.

use alloc::string::String;
use alloc::vec::Vec;

/// Types with a conventional "truthy" interpretation.
///
/// Used by [`from_truthy`](crate::convert::from_truthy) and the
/// `assert_truthy` family to test a payload without an explicit predicate:
/// zero numbers, empty strings and collections, and `None` are falsy,
/// everything else is truthy.
///
/// # Examples
///
/// ```
/// use outcome_rail::Truthy;
///
/// assert!(1u32.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(!Option::<i32>::None.is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value counts as truthy.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($ty:ty),*) => {
        $(impl Truthy for $ty {
            #[inline]
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

impl_truthy_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    /// `None` is falsy; `Some` defers to the contained value.
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(T::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
