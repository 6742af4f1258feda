//! Entry points for callers whose source sequence may be missing.
//!
//! A missing sequence is an `Option::None`, and is rejected with [`ArrayError::InvalidArgument`] before anything is touched.

use super::{rejected, DynArr, IndexRange};
use crate::collections::{ArrayError, ReserveStrategy};

const ABSENT_SOURCE : ArrayError = ArrayError::InvalidArgument("source sequence is absent");

impl<T> DynArr<T> {
    /// Creates a `DynArr<T>` holding the elements of `source`, in iteration order.
    ///
    /// The capacity is equal to the number of elements, any finite sequence is accepted, e.g. an insertion-ordered set.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidArgument`] if `source` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use dyna_common::collections::{DynArr, ArrayError};
    ///
    /// let set = BTreeSet::from(["b", "a", "c"]);
    /// let arr = DynArr::try_from_source(Some(set)).unwrap();
    /// assert_eq!(arr, ["a", "b", "c"]);
    /// assert_eq!(arr.capacity(), 3);
    ///
    /// assert!(matches!(DynArr::<i32>::try_from_source(None::<Vec<i32>>), Err(ArrayError::InvalidArgument(_))));
    /// ```
    pub fn try_from_source<I: IntoIterator<Item = T>>(source: Option<I>) -> Result<Self, ArrayError> {
        match source {
            Some(source) => Ok(source.into_iter().collect()),
            None => Err(rejected("try_from_source", ABSENT_SOURCE)),
        }
    }
}

impl<T, R: ReserveStrategy> DynArr<T, R> {
    /// Appends all elements of `items`, see [`add_all`](DynArr::add_all).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidArgument`] if `items` is `None`.
    pub fn try_add_all<I: IntoIterator<Item = T>>(&mut self, items: Option<I>) -> Result<bool, ArrayError> {
        match items {
            Some(items) => Ok(self.add_all(items)),
            None => Err(rejected("try_add_all", ABSENT_SOURCE)),
        }
    }

    /// Inserts all elements of `items` at `index`, see [`add_all_at`](DynArr::add_all_at).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index > len`, checked first.
    /// Otherwise returns [`ArrayError::InvalidArgument`] if `items` is `None`.
    pub fn try_add_all_at<I: IntoIterator<Item = T>>(&mut self, index: usize, items: Option<I>) -> Result<bool, ArrayError> {
        self.range_check("try_add_all_at", index, IndexRange::Insert)?;
        match items {
            Some(items) => self.add_all_at(index, items),
            None => Err(rejected("try_add_all_at", ABSENT_SOURCE)),
        }
    }
}
