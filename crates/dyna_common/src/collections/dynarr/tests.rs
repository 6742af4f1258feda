use std::{cell::Cell, rc::Rc};

use super::*;

/// `[ first second third null null last ]`
fn named_arr() -> DynArr<Option<&'static str>> {
    let mut arr = DynArr::new();
    arr.add(Some("first"));
    arr.add(Some("second"));
    arr.add(Some("third"));
    arr.add(None);
    arr.add(None);
    arr.add(Some("last"));
    arr
}

/// Counts how many values sharing the counter were dropped
struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn dynarr_new() {
    let arr = DynArr::<i32>::new();
    assert_eq!(arr.capacity(), 10);
    assert_eq!(arr.len(), 0);
    assert!(arr.is_empty());

    let arr = DynArr::<i32>::with_capacity(21);
    assert_eq!(arr.capacity(), 21);
    assert_eq!(arr.len(), 0);

    let arr = DynArr::<i32>::default();
    assert_eq!(arr.capacity(), DynArr::<i32>::DEFAULT_CAPACITY);
}

#[test]
fn dynarr_try_with_capacity() {
    let arr = DynArr::<u64>::try_with_capacity(4).unwrap();
    assert_eq!(arr.capacity(), 4);

    let negative = -1i32 as usize;
    assert!(matches!(DynArr::<u64>::try_with_capacity(negative), Err(ArrayError::InvalidArgument(_))));
    assert!(matches!(DynArr::<u64>::try_with_capacity(isize::MAX as usize), Err(ArrayError::InvalidArgument(_))));

    // Zero-sized elements never allocate, but the element count is still limited
    assert!(matches!(DynArr::<()>::try_with_capacity(-1i64 as usize), Err(ArrayError::InvalidArgument(_))));
    assert!(matches!(DynArr::<()>::try_with_capacity(isize::MAX as usize + 1), Err(ArrayError::InvalidArgument(_))));
    let arr = DynArr::<()>::try_with_capacity(isize::MAX as usize).unwrap();
    assert_eq!(arr.capacity(), isize::MAX as usize);
}

#[test]
fn dynarr_with_capacity_in() {
    /// Grows by 4 elements at a time
    struct AddFourReserveStrategy;

    impl ReserveStrategy for AddFourReserveStrategy {
        fn calculate(cur_capacity: usize, min_capacity: usize) -> Result<usize, ()> {
            Ok(cur_capacity.checked_add(4).ok_or(())?.max(min_capacity))
        }
    }

    let mut arr = DynArr::with_capacity_in(0, AddFourReserveStrategy);
    arr.add(1);
    assert_eq!(arr.capacity(), 4);
    arr.add_all([2, 3, 4, 5]);
    assert_eq!(arr.capacity(), 8);
    assert_eq!(arr, [1, 2, 3, 4, 5]);

    let arr = DynArr::<u8, _>::try_with_capacity_in(3, AddFourReserveStrategy).unwrap();
    assert_eq!(arr.capacity(), 3);
}

#[test]
fn dynarr_add_and_get() {
    let mut arr = DynArr::<i32>::new();

    assert!(arr.add(42));
    assert_eq!(arr.len(), 1);
    assert_eq!(arr.get(0), Ok(&42));

    assert!(arr.add(84));
    assert_eq!(arr.len(), 2);
    assert_eq!(arr.get(1), Ok(&84));

    assert_eq!(arr.get(2), Err(ArrayError::IndexOutOfRange { index: 2, len: 2 }));
}

#[test]
fn dynarr_grow_from_zero() {
    let mut arr = DynArr::with_capacity(0);
    assert_eq!(arr.capacity(), 0);

    arr.add("first");
    assert_eq!(arr.capacity(), 1);
    arr.add("second");
    assert_eq!(arr.capacity(), 2);
    arr.add("third");
    assert_eq!(arr.capacity(), 4);
}

#[test]
fn dynarr_grow_doubles() {
    let mut arr = DynArr::new();
    for i in 0..10 {
        arr.add(i);
    }
    assert_eq!(arr.capacity(), 10);

    arr.add(10);
    assert_eq!(arr.capacity(), 20);
    assert_eq!(arr.len(), 11);
}

#[test]
fn dynarr_ensure_capacity() {
    let mut arr = dynarr![1, 2, 3];

    arr.ensure_capacity(0);
    assert_eq!(arr.capacity(), 3);

    // Doubling is enough
    arr.ensure_capacity(2);
    assert_eq!(arr.capacity(), 6);

    // Doubling is not enough, so the required capacity is used
    arr.ensure_capacity(20);
    assert_eq!(arr.capacity(), 23);

    // Never shrinks
    arr.ensure_capacity(1);
    assert_eq!(arr.capacity(), 23);
    assert_eq!(arr, [1, 2, 3]);
}

#[test]
fn dynarr_set() {
    let mut arr = dynarr![1, 2, 3];
    assert_eq!(arr.set(1, 42), Ok(2));
    assert_eq!(arr.get(1), Ok(&42));
    assert_eq!(arr.len(), 3);

    assert_eq!(arr.set(3, 5), Err(ArrayError::IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(arr, [1, 42, 3]);
}

#[test]
fn dynarr_contains_and_index_of() {
    let arr = named_arr();
    assert!(arr.contains(&Some("third")));
    assert!(arr.contains(&None));
    assert!(!arr.contains(&Some("missing")));

    assert_eq!(arr.index_of(&Some("first")), Some(0));
    assert_eq!(arr.index_of(&None), Some(3));
    assert_eq!(arr.index_of(&Some("missing")), None);

    let arr = dynarr![Some(1), Some(2)];
    assert!(!arr.contains(&None));
}

#[test]
fn dynarr_to_array() {
    let arr = dynarr![1, 2, 3];
    let mut copy = arr.to_array();
    assert_eq!(copy.len(), arr.len());
    assert_eq!(*copy, [1, 2, 3]);

    copy[1] = 42;
    assert_eq!(arr, [1, 2, 3]);

    let empty = DynArr::<i32>::new();
    assert!(empty.to_array().is_empty());
}

#[test]
fn dynarr_display() {
    assert_eq!(DynArr::<i32>::new().to_string(), "[ ]");
    assert_eq!(dynarr![1].to_string(), "[ 1 ]");
    assert_eq!(named_arr().to_string(), "[ first second third null null last ]");

    let arr = dynarr![String::from("a"), String::from("b")];
    assert_eq!(arr.to_string(), "[ a b ]");
}

#[test]
fn dynarr_display_after_adds() {
    let arr = named_arr();
    assert_eq!(arr.len(), 6);
    assert_eq!(arr.to_string(), "[ first second third null null last ]");
}

#[test]
fn dynarr_add_all() {
    let mut arr = DynArr::with_capacity(2);
    arr.add(1);
    arr.add(2);

    assert!(arr.add_all([3, 4, 5, 6, 7]));
    assert_eq!(arr, [1, 2, 3, 4, 5, 6, 7]);
    // A single grow for the whole batch
    assert_eq!(arr.capacity(), 7);

    assert!(arr.add_all(Vec::new()));
    assert_eq!(arr.len(), 7);

    // Iterators that don't know their length up front still get every element
    arr.add_all((8..20).filter(|x| x % 2 == 0));
    assert_eq!(arr, [1, 2, 3, 4, 5, 6, 7, 8, 10, 12, 14, 16, 18]);
}

#[test]
fn dynarr_add_all_at() {
    let mut arr = named_arr();
    assert_eq!(arr.add_all_at(2, [Some("first"), Some("second")]), Ok(true));
    assert_eq!(arr.len(), 8);
    assert_eq!(arr.to_string(), "[ first second first second third null null last ]");
}

#[test]
fn dynarr_add_all_at_front() {
    let mut arr = dynarr![3, 4];
    assert_eq!(arr.add_all_at(0, [1, 2]), Ok(true));
    assert_eq!(arr, [1, 2, 3, 4]);

    let mut arr = DynArr::with_capacity(0);
    assert_eq!(arr.add_all_at(0, [1, 2]), Ok(true));
    assert_eq!(arr, [1, 2]);
}

#[test]
fn dynarr_add_all_at_end_appends() {
    let mut appended = named_arr();
    appended.add_all([Some("a"), None, Some("b")]);

    let mut inserted = named_arr();
    let len = inserted.len();
    assert_eq!(inserted.add_all_at(len, [Some("a"), None, Some("b")]), Ok(true));

    assert_eq!(inserted, appended);
    assert_eq!(inserted.to_string(), "[ first second third null null last a null b ]");
}

#[test]
fn dynarr_add_all_at_out_of_range() {
    let mut arr = dynarr![1, 2, 3];
    assert_eq!(arr.add_all_at(4, [5]), Err(ArrayError::IndexOutOfRange { index: 4, len: 3 }));
    assert_eq!(arr, [1, 2, 3]);
    assert_eq!(arr.capacity(), 3);

    // Nothing to insert is still a valid insert
    assert_eq!(arr.add_all_at(1, []), Ok(true));
    assert_eq!(arr, [1, 2, 3]);
}

#[test]
fn dynarr_remove_at() {
    let mut arr = dynarr![1, 2, 3, 4, 5, 6];
    assert_eq!(arr.remove_at(2), Ok(3));
    assert_eq!(arr, [1, 2, 4, 5, 6]);

    assert_eq!(arr.remove_at(4), Ok(6));
    assert_eq!(arr, [1, 2, 4, 5]);

    assert_eq!(arr.remove_at(4), Err(ArrayError::IndexOutOfRange { index: 4, len: 4 }));
    assert_eq!(arr.len(), 4);
    // Capacity never shrinks
    assert_eq!(arr.capacity(), 6);
}

#[test]
fn dynarr_remove_item() {
    let mut arr = named_arr();
    assert!(arr.remove_item(&None));
    assert_eq!(arr.len(), 5);
    assert_eq!(arr, [Some("first"), Some("second"), Some("third"), None, Some("last")]);

    assert!(!arr.remove_item(&Some("missing")));
    assert_eq!(arr.len(), 5);

    assert!(arr.remove_item(&Some("first")));
    assert_eq!(arr, [Some("second"), Some("third"), None, Some("last")]);
}

#[test]
fn dynarr_remove_item_duplicates() {
    let mut arr = dynarr![1, 2, 1, 2];
    assert!(arr.remove_item(&2));
    assert_eq!(arr, [1, 1, 2]);
}

#[test]
fn dynarr_reverse() {
    let mut arr = named_arr();
    let capacity = arr.capacity();

    arr.reverse();
    assert_eq!(arr.to_string(), "[ last null null third second first ]");
    assert_eq!(arr.len(), 6);
    assert_eq!(arr.capacity(), capacity);

    arr.reverse();
    assert_eq!(arr, named_arr());

    let mut empty = DynArr::<i32>::new();
    empty.reverse();
    assert!(empty.is_empty());
}

#[test]
fn dynarr_from_array() {
    let arr = DynArr::from(["hello", "world", "!"]);
    assert_eq!(arr, ["hello", "world", "!"]);
    assert_eq!(arr.capacity(), 3);

    let arr = dynarr!["hello", "world", "!"];
    assert_eq!(arr.capacity(), 3);
}

#[test]
fn dynarr_from_slice() {
    let src = [String::from("a"), String::from("b")];
    let arr = DynArr::from(&src[..]);
    assert_eq!(arr, src);
    assert_eq!(arr.capacity(), 2);

    let arr = DynArr::from(&src);
    assert_eq!(arr.len(), 2);
}

#[test]
fn dynarr_from_iter() {
    let arr: DynArr<_> = (0..5).map(|x| x * x).collect();
    assert_eq!(arr, [0, 1, 4, 9, 16]);
    assert_eq!(arr.capacity(), 5);

    let arr: DynArr<_> = (0..20).filter(|x| x % 5 == 0).collect();
    assert_eq!(arr, [0, 5, 10, 15]);
    assert_eq!(arr.capacity(), 4);
}

#[test]
fn dynarr_from_elem() {
    let arr = dynarr![String::from("x"); 3];
    assert_eq!(arr, ["x", "x", "x"]);

    let arr = dynarr![1; 0];
    assert!(arr.is_empty());
    assert_eq!(arr.capacity(), 0);
}

#[test]
fn dynarr_clone() {
    let mut arr = dynarr![1, 2, 3];
    arr.ensure_capacity(5);

    let copy = arr.clone();
    assert_eq!(copy, arr);
    assert_eq!(copy.capacity(), arr.capacity());

    arr.set(0, 42).unwrap();
    assert_eq!(copy, [1, 2, 3]);
}

#[test]
fn dynarr_eq() {
    let a = dynarr![1, 2, 3];
    let b: DynArr<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(a, b);
    assert_ne!(a, dynarr![1, 2]);
    assert_eq!(a, &[1, 2, 3][..]);
    assert_eq!(format!("{a:?}"), "[1, 2, 3]");
}

#[test]
fn dynarr_errors_leave_array_untouched() {
    let mut arr = named_arr();
    let capacity = arr.capacity();

    assert!(arr.get(6).is_err());
    assert!(arr.set(6, Some("x")).is_err());
    assert!(arr.remove_at(usize::MAX).is_err());
    assert!(arr.add_all_at(7, [Some("x")]).is_err());

    assert_eq!(arr, named_arr());
    assert_eq!(arr.capacity(), capacity);
}

#[test]
fn dynarr_zero_sized() {
    let mut arr = DynArr::<()>::new();
    for _ in 0..11 {
        arr.add(());
    }
    assert_eq!(arr.len(), 11);
    assert_eq!(arr.capacity(), 20);

    assert_eq!(arr.remove_at(3), Ok(()));
    assert_eq!(arr.len(), 10);
    assert_eq!(arr.to_array().len(), 10);
}

#[test]
fn dynarr_drops_elements() {
    let drops = Rc::new(Cell::new(0));

    let mut arr = DynArr::new();
    for _ in 0..4 {
        arr.add(DropCounter(drops.clone()));
    }

    drop(arr.remove_at(0));
    assert_eq!(drops.get(), 1);

    drop(arr.set(0, DropCounter(drops.clone())));
    assert_eq!(drops.get(), 2);

    arr.add_all_at(1, [DropCounter(drops.clone()), DropCounter(drops.clone())]).unwrap();
    assert_eq!(drops.get(), 2);
    assert_eq!(arr.len(), 5);

    drop(arr);
    assert_eq!(drops.get(), 7);
}

#[test]
fn dynarr_clone_panic_keeps_cloned_elements() {
    #[derive(Debug)]
    struct PanicOnClone {
        id:    usize,
        drops: Rc<Cell<usize>>,
    }

    impl Clone for PanicOnClone {
        fn clone(&self) -> Self {
            if self.id == 2 {
                panic!("clone failed");
            }
            Self { id: self.id, drops: self.drops.clone() }
        }
    }

    impl Drop for PanicOnClone {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    let drops = Rc::new(Cell::new(0));
    let src: Vec<_> = (0..4).map(|id| PanicOnClone { id, drops: drops.clone() }).collect();

    let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| DynArr::from(&src[..])));
    assert!(res.is_err());
    // The two clones made before the panic are dropped, the source is untouched
    assert_eq!(drops.get(), 2);
    assert_eq!(src.len(), 4);
}

#[cfg(feature = "logging")]
#[test]
fn dynarr_logs_growth_and_rejections() {
    use std::{io, sync::{Arc, Mutex}};
    use dyna_logging::{set_logger, Logger};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if let Ok(mut data) = self.0.lock() {
                data.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let logger: &'static Logger = Box::leak(Box::new(Logger::new()));
    logger.set_log_to_console(false);
    logger.set_always_flush(true);
    let capture = Capture::default();
    assert!(logger.add_writer(Box::new(capture.clone())).is_ok());
    set_logger(logger);

    let mut arr = DynArr::with_capacity(1);
    arr.add(1);
    arr.add(2);
    assert!(arr.remove_at(5).is_err());

    let output = String::from_utf8_lossy(&capture.0.lock().unwrap()).into_owned();
    assert!(output.contains("Common(DynArr)"));
    assert!(output.contains("grew capacity from 1 to 2 (len 1)"));
    assert!(output.contains("remove_at rejected: index 5 is out of range for length 2"), "{output}");
}
