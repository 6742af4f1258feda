use core::{
    fmt, mem::{self, ManuallyDrop}, ptr, slice,
};

use scopeguard::guard;
use static_assertions as sa;

use crate::{fmt::DisplayElement, logging};
use super::{
    imp::array::{handle_error, RawArray},
    impl_slice_partial_eq_generic,
    ArrayError, DoubleOrMinReserveStrategy, ReserveStrategy, TryReserveError,
};

mod nullable;

/// A contiguous growable array type, also known as a dynamic array, or DynArr.
///
/// Dynamic arrays have *O*(1) indexing, amortized *O*(1) appends, and keep their elements in positional order.
/// Elements only move when the array is explicitly asked to: inserting shifts later elements to the right, removing shifts them to the left, and [`reverse`] flips the order.
///
/// _Note: It was decided to not name this `Vec` as in the standard library, as this is easily confusable with a math vector_
///
/// # Examples
///
/// ```
/// use dyna_common::collections::DynArr;
///
/// let mut arr = DynArr::new();
/// arr.add(1);
/// arr.add(2);
///
/// assert_eq!(arr.len(), 2);
/// assert_eq!(arr.get(0), Ok(&1));
///
/// assert_eq!(arr.set(0, 7), Ok(1));
/// assert_eq!(arr.get(0), Ok(&7));
///
/// arr.add_all([1, 2, 3]);
/// assert_eq!(arr, [7, 1, 2, 3]);
/// assert_eq!(arr.to_string(), "[ 7 1 2 3 ]");
/// ```
///
/// The [`dynarr!`] macro is provided for convenient initialization:
///
/// ```
/// use dyna_common::dynarr;
///
/// let mut arr1 = dynarr![1, 2, 3];
/// arr1.add(4);
/// let arr2 = dynarr![1, 2, 3, 4];
/// assert_eq!(arr1, arr2);
///
/// let zeros = dynarr![0; 5];
/// assert_eq!(zeros, [0, 0, 0, 0, 0]);
/// ```
///
/// # Absent values
///
/// A `DynArr` never interprets its elements, so an "absent" value is just an element like any other.
/// Use an `Option<T>` element type to store them; `None` compares equal to `None`, and is rendered as `null`:
///
/// ```
/// use dyna_common::collections::DynArr;
///
/// let mut arr = DynArr::new();
/// arr.add(Some("first"));
/// arr.add(None);
/// arr.add(Some("last"));
///
/// assert!(arr.contains(&None));
/// assert_eq!(arr.index_of(&None), Some(1));
/// assert_eq!(arr.to_string(), "[ first null last ]");
/// ```
///
/// # Errors
///
/// Operations taking an index check it first and return [`ArrayError::IndexOutOfRange`] when it is out of range.
/// Reading, replacing, or removing an element needs an index in `0..len`, inserting accepts `0..=len`, where `len` inserts at the end.
/// A failing operation never modifies the dynamic array.
///
/// # Capacity and reallocation
///
/// The capacity of a dynamic array is the amount of space allocated for any future elements that will be added onto the dynamic array.
/// This is not to be confused with the *length* of the dynamic array, which specifies the number of actual elements within the dynamic array.
/// If a dynamic array's length exceeds its capacity, its capacity will automatically be increased, but its elements will have to be reallocated.
///
/// An empty dynamic array created with [`DynArr::new`] has room for [`DynArr::DEFAULT_CAPACITY`] elements,
/// a dynamic array created from an existing sequence has exactly enough room for the elements in it.
///
/// How much the capacity grows is decided by the [`ReserveStrategy`].
/// The default [`DoubleOrMinReserveStrategy`] doubles the capacity, or grows to exactly the required capacity if doubling is not enough,
/// which guarantees an amortized *O*(1) [`add`].
///
/// `DynArr` will never automatically shrink itself, even if completely empty.
///
/// [`reverse`]: DynArr::reverse
/// [`add`]: DynArr::add
pub struct DynArr<T, R: ReserveStrategy = DoubleOrMinReserveStrategy> {
    arr: RawArray<T, R>,
    len: usize,
}

sa::assert_impl_all!(DynArr<u32>: Send, Sync);
sa::assert_not_impl_any!(DynArr<std::rc::Rc<u32>>: Send, Sync);
sa::const_assert!(DynArr::<u8>::DEFAULT_CAPACITY > 0);

/// Which indices are valid for an operation
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum IndexRange {
    /// Reading, replacing, or removing an existing element: `0..len`
    Element,
    /// Inserting in front of an element, or at the end: `0..=len`
    Insert,
}

fn rejected(operation: &str, err: ArrayError) -> ArrayError {
    logging::rejected(operation, &err);
    err
}

impl<T> DynArr<T> {
    /// Capacity of a dynamic array created with [`DynArr::new`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Constructs a new, empty `DynArr<T>` with room for [`DEFAULT_CAPACITY`](DynArr::DEFAULT_CAPACITY) elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyna_common::collections::DynArr;
    ///
    /// let arr = DynArr::<i32>::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.capacity(), 10);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Constructs a new, empty `DynArr<T>` with exactly the specified capacity.
    ///
    /// If `capacity` is 0, the dynamic array will not allocate.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_.
    /// Use [`try_with_capacity`](DynArr::try_with_capacity) to get an error instead.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, DoubleOrMinReserveStrategy)
    }

    /// Tries to construct a new, empty `DynArr<T>` with exactly the specified capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidArgument`] if the capacity exceeds `isize::MAX` _bytes_, or `isize::MAX` elements.
    /// This includes any negative signed capacity that was converted to `usize`.
    ///
    /// ```
    /// use dyna_common::collections::{DynArr, ArrayError};
    ///
    /// assert!(DynArr::<u8>::try_with_capacity(100).is_ok());
    /// assert!(matches!(DynArr::<u8>::try_with_capacity(-1i64 as usize), Err(ArrayError::InvalidArgument(_))));
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Self::try_with_capacity_in(capacity, DoubleOrMinReserveStrategy)
    }

    /// Creates a `DynArr<T>` with `n` clones of `elem`.
    pub fn from_elem(elem: T, n: usize) -> Self where
        T: Clone
    {
        let mut arr = Self::with_capacity(n);
        if n > 0 {
            for _ in 1..n {
                arr.add(elem.clone());
            }
            arr.add(elem);
        }
        arr
    }
}

impl<T, R: ReserveStrategy> DynArr<T, R> {
    /// Constructs a new, empty `DynArr<T, R>` with exactly the specified capacity, growing according to the provided reserve strategy.
    ///
    /// Only the type of `_strategy` matters, strategies are stateless and the value is not stored.
    /// It is taken so `R` can be inferred at the call site.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_, or `isize::MAX` elements.
    #[must_use]
    pub fn with_capacity_in(capacity: usize, _strategy: R) -> Self {
        Self { arr: RawArray::with_capacity(capacity), len: 0 }
    }

    /// Tries to construct a new, empty `DynArr<T, R>` with exactly the specified capacity, growing according to the provided reserve strategy.
    ///
    /// As with [`with_capacity_in`](DynArr::with_capacity_in), only the type of `_strategy` matters.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidArgument`] if the capacity exceeds `isize::MAX` _bytes_, or `isize::MAX` elements.
    pub fn try_with_capacity_in(capacity: usize, _strategy: R) -> Result<Self, ArrayError> {
        match RawArray::try_with_capacity(capacity) {
            Ok(arr) => Ok(Self { arr, len: 0 }),
            Err(TryReserveError::CapacityOverflow) => Err(rejected("try_with_capacity", ArrayError::InvalidArgument("capacity exceeds isize::MAX bytes"))),
            Err(err) => handle_error(err),
        }
    }

    /// Returns the number of elements in the dynamic array.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the dynamic array contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the total number of element the dynamic array can hold without reallocating.
    ///
    /// # Example
    ///
    /// ```
    /// use dyna_common::collections::DynArr;
    ///
    /// let mut arr = DynArr::with_capacity(0);
    /// arr.add(42);
    /// assert_eq!(arr.capacity(), 1);
    /// ```
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.arr.capacity()
    }

    /// Ensures there is room for at least `additional` more elements.
    ///
    /// Does nothing if `len + additional` already fits in the capacity.
    /// Otherwise the storage is moved into a new buffer whose size is decided by the reserve strategy, for the default strategy this is `max(2 * capacity, len + additional)`.
    /// The capacity never shrinks.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyna_common::dynarr;
    ///
    /// let mut arr = dynarr![1];
    /// arr.ensure_capacity(10);
    /// assert_eq!(arr.capacity(), 11);
    /// ```
    pub fn ensure_capacity(&mut self, additional: usize) {
        let old_capacity = self.capacity();
        self.arr.reserve(self.len, additional);

        let new_capacity = self.capacity();
        if new_capacity != old_capacity {
            logging::growth(old_capacity, new_capacity, self.len);
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.range_check("get", index, IndexRange::Element)?;
        Ok(&self.as_slice()[index])
    }

    /// Replaces the element at `index` with `item`, returning the element that was previously there.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len`, the item is dropped in that case.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, ArrayError> {
        self.range_check("set", index, IndexRange::Element)?;
        Ok(mem::replace(&mut self.as_mut_slice()[index], item))
    }

    /// Returns `true` if the dynamic array contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool where
        T: PartialEq
    {
        self.index_of(item).is_some()
    }

    /// Returns the index of the first element equal to `item`, or `None` if there is no such element.
    pub fn index_of(&self, item: &T) -> Option<usize> where
        T: PartialEq
    {
        self.as_slice().iter().position(|elem| elem == item)
    }

    /// Returns a copy of the elements in the dynamic array.
    ///
    /// The copy is independent from the dynamic array, modifying one never affects the other.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyna_common::dynarr;
    ///
    /// let arr = dynarr![1, 2, 3];
    /// let mut copy = arr.to_array();
    /// copy[0] = 42;
    ///
    /// assert_eq!(*copy, [42, 2, 3]);
    /// assert_eq!(arr, [1, 2, 3]);
    /// ```
    pub fn to_array(&self) -> Box<[T]> where
        T: Clone
    {
        Box::from(self.as_slice())
    }

    /// Appends an element to the back of the dynamic array.
    ///
    /// Always returns `true`.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_.
    ///
    /// # Time complexity
    ///
    /// Takes amortized *O*(1) time.
    /// If the dynamic array's length would exceed its capacity after the add, *O*(*capacity*) time is taken to copy the dynamic array's elements to a larger allocation.
    pub fn add(&mut self, item: T) -> bool {
        let len = self.len;
        if len == self.capacity() {
            self.ensure_capacity(1);
        }
        // SAFETY: There is room for at least one more element at the end
        unsafe {
            ptr::write(self.as_mut_ptr().add(len), item);
            self.len = len + 1;
        }
        true
    }

    /// Appends all elements of `items` to the back of the dynamic array, in iteration order.
    ///
    /// The storage is grown once for the whole batch, based on the number of elements `items` reports.
    /// Always returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyna_common::dynarr;
    ///
    /// let mut arr = dynarr!["first", "second"];
    /// arr.add_all(["third", "last"]);
    /// assert_eq!(arr, ["first", "second", "third", "last"]);
    /// ```
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> bool {
        let iter = items.into_iter();
        let (lower, _) = iter.size_hint();
        self.ensure_capacity(lower);

        for item in iter {
            self.add(item);
        }
        true
    }

    /// Inserts all elements of `items` at position `index`, in iteration order.
    ///
    /// The result contains the elements in `0..index`, followed by the inserted elements, followed by the elements that were at `index..len`.
    /// An `index` equal to `len` appends the elements.
    ///
    /// All elements are taken from `items` before the dynamic array is modified.
    /// Always returns `Ok(true)` when the index is valid.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyna_common::dynarr;
    ///
    /// let mut arr = dynarr![1, 2, 5];
    /// assert_eq!(arr.add_all_at(2, [3, 4]), Ok(true));
    /// assert_eq!(arr, [1, 2, 3, 4, 5]);
    ///
    /// assert!(arr.add_all_at(6, [6]).is_err());
    /// ```
    pub fn add_all_at<I: IntoIterator<Item = T>>(&mut self, index: usize, items: I) -> Result<bool, ArrayError> {
        self.range_check("add_all_at", index, IndexRange::Insert)?;

        let mut block = Self { arr: RawArray::new(), len: 0 };
        block.add_all(items);
        let count = block.len;
        if count == 0 {
            return Ok(true);
        }

        self.ensure_capacity(count);
        // SAFETY:
        // - There is room for `count` more elements, so the shifted suffix and the block both fit.
        // - The block gives up its elements by setting its length to 0, so they are not dropped twice.
        unsafe {
            let len = self.len;
            let gap = self.as_mut_ptr().add(index);
            // Shift the suffix over to make space for the block
            ptr::copy(gap, gap.add(count), len - index);
            ptr::copy_nonoverlapping(block.as_mut_ptr(), gap, count);
            block.set_len(0);
            self.set_len(len + count);
        }
        Ok(true)
    }

    /// Removes and returns the element at position `index`, shifting all elements after it to the left.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyna_common::dynarr;
    ///
    /// let mut arr = dynarr![1, 2, 3];
    /// assert_eq!(arr.remove_at(1), Ok(2));
    /// assert_eq!(arr, [1, 3]);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, ArrayError> {
        self.range_check("remove_at", index, IndexRange::Element)?;
        Ok(self.take_at(index))
    }

    /// Removes the first element equal to `item`, shifting all elements after it to the left.
    ///
    /// Returns `true` if an element was removed, `false` leaves the dynamic array untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyna_common::dynarr;
    ///
    /// let mut arr = dynarr![Some(1), None, Some(2), None];
    /// assert!(arr.remove_item(&None));
    /// assert_eq!(arr, [Some(1), Some(2), None]);
    /// assert!(!arr.remove_item(&Some(3)));
    /// ```
    pub fn remove_item(&mut self, item: &T) -> bool where
        T: PartialEq
    {
        match self.index_of(item) {
            Some(index) => {
                drop(self.take_at(index));
                true
            },
            None => false,
        }
    }

    /// Reverses the order of the elements.
    ///
    /// The length and capacity stay the same.
    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    //--------------------------------------------------------------

    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: The first `len` elements are initialized, and the pointer is aligned and non-null, even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.arr.ptr(), self.len) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: See `as_slice`
        unsafe { slice::from_raw_parts_mut(self.arr.ptr(), self.len) }
    }

    fn as_mut_ptr(&mut self) -> *mut T {
        self.arr.ptr()
    }

    /// # Safety
    ///
    /// - `new_len` must be less than or equal to [`capacity`](DynArr::capacity).
    /// - The elements at `old_len..new_len` must be initialized.
    unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity());
        self.len = new_len;
    }

    /// Single place where indices are validated, so every operation reports the same error.
    fn range_check(&self, operation: &str, index: usize, range: IndexRange) -> Result<(), ArrayError> {
        let valid = match range {
            IndexRange::Element => index < self.len,
            IndexRange::Insert => index <= self.len,
        };
        if valid {
            Ok(())
        } else {
            Err(rejected(operation, ArrayError::IndexOutOfRange { index, len: self.len }))
        }
    }

    fn take_at(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);
        let len = self.len;
        // SAFETY: `index < len`, the element is read out before the suffix is moved over it
        unsafe {
            let ptr = self.as_mut_ptr().add(index);
            let ret = ptr::read(ptr);

            // Shift everything down to fill in that spot
            ptr::copy(ptr.add(1), ptr, len - index - 1);
            self.set_len(len - 1);
            ret
        }
    }

    /// Clone `s` into a new dynamic array with exactly `capacity` room.
    fn from_slice_with_capacity(s: &[T], capacity: usize) -> Self where
        T: Clone
    {
        debug_assert!(capacity >= s.len());
        let mut arr = Self { arr: RawArray::with_capacity(capacity), len: 0 };
        let dst = arr.as_mut_ptr();
        {
            // Commit whatever was cloned, even when a `clone` panics
            let mut num_init = guard(0usize, |num_init| unsafe { arr.set_len(num_init) });
            for (idx, elem) in s.iter().enumerate() {
                // SAFETY: `idx < s.len() <= capacity`
                unsafe { ptr::write(dst.add(idx), elem.clone()) };
                *num_init += 1;
            }
        }
        arr
    }
}

impl<T, R: ReserveStrategy> Drop for DynArr<T, R> {
    fn drop(&mut self) {
        // SAFETY: The first `len` elements are initialized, `RawArray` frees the memory afterwards
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), self.len)) }
    }
}

impl<T: Clone, R: ReserveStrategy> Clone for DynArr<T, R> {
    /// Clones the elements, the clone gets the same capacity as the original.
    fn clone(&self) -> Self {
        Self::from_slice_with_capacity(self.as_slice(), self.capacity())
    }
}

impl<T> Default for DynArr<T> {
    /// Creates an empty `DynArr<T>`, with the default capacity.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, R: ReserveStrategy> fmt::Debug for DynArr<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

/// Elements are rendered through [`DisplayElement`], not [`Display`](fmt::Display) directly, so `None` can show up as `null`.
///
/// A type that only implements [`Display`](fmt::Display) needs [`impl_display_element!`](crate::impl_display_element) before a `DynArr` of it can be displayed:
///
/// ```
/// use core::fmt;
/// use dyna_common::{dynarr, impl_display_element};
///
/// struct Id(u32);
///
/// impl fmt::Display for Id {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "#{}", self.0)
///     }
/// }
/// impl_display_element!(Id);
///
/// assert_eq!(dynarr![Some(Id(1)), None].to_string(), "[ #1 null ]");
/// ```
impl<T: DisplayElement, R: ReserveStrategy> fmt::Display for DynArr<T, R> {
    /// Renders the elements as `[ e1 e2 ... eN ]`, or `[ ]` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for elem in self.as_slice() {
            f.write_str(" ")?;
            elem.fmt_element(f)?;
        }
        f.write_str(" ]")
    }
}

impl_slice_partial_eq_generic! { [R: ReserveStrategy] DynArr<T, R>, [U] }
impl_slice_partial_eq_generic! { [R: ReserveStrategy] DynArr<T, R>, &[U] }
impl_slice_partial_eq_generic! { [R: ReserveStrategy] DynArr<T, R>, &mut [U] }
impl_slice_partial_eq_generic! { [R: ReserveStrategy, const N: usize] DynArr<T, R>, [U; N] }
impl_slice_partial_eq_generic! { [R: ReserveStrategy, const N: usize] DynArr<T, R>, &[U; N] }

impl<T: PartialEq<U>, U, R: ReserveStrategy, R2: ReserveStrategy> PartialEq<DynArr<U, R2>> for DynArr<T, R> {
    #[inline]
    fn eq(&self, other: &DynArr<U, R2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, R: ReserveStrategy> Eq for DynArr<T, R> {}

impl<T, R: ReserveStrategy> FromIterator<T> for DynArr<T, R> {
    /// Collects the elements, the resulting dynamic array has a capacity equal to its length.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut arr = Self { arr: RawArray::with_capacity(iter.size_hint().0), len: 0 };
        arr.add_all(iter);
        arr.arr.resize_exact(arr.len, arr.len);
        arr
    }
}

impl<T: Clone> From<&[T]> for DynArr<T> {
    /// Allocate a `DynArr<T>` and fill it by cloning `s`'s items.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyna_common::{collections::DynArr, dynarr};
    ///
    /// assert_eq!(DynArr::from(&[1, 2, 3][..]), dynarr![1, 2, 3]);
    /// ```
    fn from(s: &[T]) -> Self {
        Self::from_slice_with_capacity(s, s.len())
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for DynArr<T> {
    /// Allocate a `DynArr<T>` and fill it by cloning `s`'s items.
    fn from(s: &[T; N]) -> Self {
        Self::from(s.as_slice())
    }
}

impl<T, const N: usize> From<[T; N]> for DynArr<T> {
    /// Allocate a `DynArr<T>` and move the array's items into it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyna_common::{collections::DynArr, dynarr};
    ///
    /// assert_eq!(DynArr::from([1, 2, 3]), dynarr![1, 2, 3]);
    /// ```
    fn from(value: [T; N]) -> Self {
        let mut res = Self::with_capacity(N);
        // SAFETY: There is room for exactly `N` elements, and the array gives up ownership of its items
        unsafe {
            let value = ManuallyDrop::new(value);
            ptr::copy_nonoverlapping(value.as_ptr(), res.as_mut_ptr(), N);
            res.set_len(N);
        }
        res
    }
}

/// Creates a [`DynArr`] containing the arguments.
///
/// - Create a [`DynArr`] containing a given list of elements, its capacity matches the number of elements:
///
/// ```
/// use dyna_common::dynarr;
///
/// let arr = dynarr![1, 2, 3];
/// assert_eq!(arr.capacity(), 3);
/// ```
///
/// - Create a [`DynArr`] from a given element and size, the element is cloned:
///
/// ```
/// use dyna_common::dynarr;
///
/// let arr = dynarr!["a"; 3];
/// assert_eq!(arr, ["a", "a", "a"]);
/// ```
///
/// - `dynarr![]` is the same as [`DynArr::new`].
#[macro_export]
macro_rules! dynarr {
    () => {
        $crate::collections::DynArr::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::collections::DynArr::from_elem($elem, $n)
    };
    ($($val:expr),+ $(,)?) => {
        {
            let mut arr = $crate::collections::DynArr::with_capacity($crate::__count_exprs!($($val),+));
            $(
                arr.add($val);
            )+
            arr
        }
    };
}

#[cfg(test)]
mod tests;
