//! Element formatting used when a container renders itself as text.

use core::fmt;
use std::{borrow::Cow, rc::Rc, sync::Arc};

/// Formats a single element inside a container's textual representation.
///
/// This is implemented for the std types that implement [`Display`](fmt::Display), and for `Option<T>`, where `None` is rendered as `null`.
/// Use [`impl_display_element!`](crate::impl_display_element) to implement it for your own [`Display`](fmt::Display) types.
pub trait DisplayElement {
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Implement [`DisplayElement`] by forwarding to the type's [`Display`](core::fmt::Display) implementation.
///
/// ```
/// use core::fmt;
/// use dyna_common::{dynarr, impl_display_element};
///
/// struct Point(i32, i32);
///
/// impl fmt::Display for Point {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "({},{})", self.0, self.1)
///     }
/// }
/// impl_display_element!(Point);
///
/// let arr = dynarr![Point(1, 2), Point(3, 4)];
/// assert_eq!(arr.to_string(), "[ (1,2) (3,4) ]");
/// ```
#[macro_export]
macro_rules! impl_display_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::fmt::DisplayElement for $ty {
                #[inline]
                fn fmt_element(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    core::fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

impl_display_element!(
    bool, char, str, String,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl<T: DisplayElement> DisplayElement for Option<T> {
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(val) => val.fmt_element(f),
            None => f.write_str("null"),
        }
    }
}

impl<T: DisplayElement + ?Sized> DisplayElement for &T {
    #[inline]
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_element(f)
    }
}

impl<T: DisplayElement + ?Sized> DisplayElement for &mut T {
    #[inline]
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_element(f)
    }
}

impl<T: DisplayElement + ?Sized> DisplayElement for Box<T> {
    #[inline]
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_element(f)
    }
}

impl<T: DisplayElement + ?Sized> DisplayElement for Rc<T> {
    #[inline]
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_element(f)
    }
}

impl<T: DisplayElement + ?Sized> DisplayElement for Arc<T> {
    #[inline]
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_element(f)
    }
}

impl<T: DisplayElement + ToOwned + ?Sized> DisplayElement for Cow<'_, T> {
    #[inline]
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_element(f)
    }
}

/// Adapter to use a [`DisplayElement`] where a [`Display`](fmt::Display) is expected
pub struct ElementDisplay<'a, T: ?Sized>(pub &'a T);

impl<T: DisplayElement + ?Sized> fmt::Display for ElementDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_element(f)
    }
}
