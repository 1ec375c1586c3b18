use std::cell::Cell;

use growvec::{growvec, GrowVec};

/// Payload that counts how many instances have been dropped.
#[derive(Clone)]
struct Tracked<'a> {
    drops: &'a Cell<usize>,
}

impl Drop for Tracked<'_> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn test_push_growth_trace() {
    let mut vec: GrowVec<usize> = GrowVec::new();
    let mut capacities = Vec::new();

    for i in 0..7 {
        vec.push(i);
        capacities.push(vec.capacity());
    }

    // 1.5x growth, floored at the required size; the factor alone cannot
    // escape capacity 0 or 1
    assert_eq!(capacities, vec![1, 2, 3, 4, 6, 6, 9]);
    assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_push_returns_stored_element() {
    let mut vec = GrowVec::new();
    assert_eq!(vec.push(41), &41);
    assert_eq!(vec.push(42), &42);
    assert_eq!(vec.back(), Ok(&42));
}

#[test]
fn test_push_pop_round_trip() {
    let mut vec = growvec![1, 2, 3];
    let before = vec.len();

    vec.push(10);
    assert_eq!(vec.back(), Ok(&10));
    assert_eq!(vec.len(), before + 1);

    assert_eq!(vec.pop(), Some(10));
    assert_eq!(vec.len(), before);
}

#[test]
fn test_pop_empty() {
    let mut vec: GrowVec<i32> = GrowVec::new();

    assert_eq!(vec.pop(), None);
    assert!(vec.try_pop().is_err());
}

#[test]
fn test_reserve_is_noop_at_or_below_capacity() {
    let mut vec = growvec![1, 2, 3];
    vec.reserve(10);
    assert_eq!(vec.capacity(), 10);

    vec.reserve(5);
    vec.reserve(10);

    assert_eq!(vec.capacity(), 10);
    assert_eq!(vec, [1, 2, 3]);
}

#[test]
fn test_reserve_grows_to_exact_capacity() {
    let mut vec: GrowVec<i32> = GrowVec::new();

    // no growth factor on top of the request
    vec.reserve(7);
    assert_eq!(vec.capacity(), 7);
    assert_eq!(vec.len(), 0);
}

#[test]
fn test_shrink_to_fit() {
    let mut vec = growvec![1, 2, 3];
    vec.reserve(100);

    vec.shrink_to_fit();

    assert_eq!(vec.capacity(), 3);
    assert_eq!(vec, [1, 2, 3]);
}

#[test]
fn test_resize_grows_with_default_fill() {
    let mut vec = growvec![1, 2];

    vec.resize(5);

    assert_eq!(vec, [1, 2, 0, 0, 0]);
    assert_eq!(vec.capacity(), 5);
}

#[test]
fn test_resize_with_custom_fill() {
    let mut vec = growvec![1, 2];

    vec.resize_with(4, 9);

    assert_eq!(vec, [1, 2, 9, 9]);
}

#[test]
fn test_resize_shrink_drops_excluded_elements() {
    let drops = Cell::new(0);
    let mut vec = GrowVec::with_value(5, Tracked { drops: &drops });

    vec.resize_with(2, Tracked { drops: &drops });

    // three excluded elements, plus the two fill values passed by value
    assert_eq!(drops.get(), 5);
    assert_eq!(vec.len(), 2);
    assert_eq!(vec.capacity(), 2);
}

#[test]
fn test_clear_drops_all_live_elements() {
    let drops = Cell::new(0);
    let mut vec = GrowVec::with_value(3, Tracked { drops: &drops });

    let fill_drops = drops.get();
    vec.clear();

    assert_eq!(drops.get() - fill_drops, 3);
    assert!(vec.is_empty());
}

#[test]
fn test_drop_releases_live_elements() {
    let drops = Cell::new(0);
    {
        let _vec = GrowVec::with_value(4, Tracked { drops: &drops });
        assert_eq!(drops.get(), 1); // only the constructor's fill value so far
    }
    assert_eq!(drops.get(), 5);
}

#[test]
fn test_remove_by_index() {
    let mut vec = growvec![1, 2, 3, 4, 5];
    let capacity = vec.capacity();

    assert_eq!(vec.remove(2), Some(3));

    assert_eq!(vec, [1, 2, 4, 5]);
    assert_eq!(vec.len(), 4);
    assert_eq!(vec.capacity(), capacity);
}

#[test]
fn test_remove_out_of_range_is_noop() {
    let mut vec = growvec![1, 2, 3];

    assert_eq!(vec.remove(3), None);
    assert_eq!(vec, [1, 2, 3]);
}

#[test]
fn test_remove_last_element() {
    let mut vec = growvec![1, 2, 3];

    assert_eq!(vec.remove(2), Some(3));
    assert_eq!(vec, [1, 2]);
}

#[test]
fn test_insert_by_index() {
    let mut vec = growvec![1, 2, 3, 4, 5];

    assert_eq!(vec.insert(2, 10), Ok(&10));

    assert_eq!(vec, [1, 2, 10, 3, 4, 5]);
    assert_eq!(vec.len(), 6);
}

#[test]
fn test_insert_at_len_appends() {
    let mut vec = growvec![1, 2];

    assert_eq!(vec.insert(2, 3), Ok(&3));
    assert_eq!(vec, [1, 2, 3]);
}

#[test]
fn test_insert_past_len_fails_without_mutating() {
    let mut vec = growvec![1, 2];

    assert!(vec.insert(3, 9).is_err());
    assert_eq!(vec, [1, 2]);
}

#[test]
fn test_insert_grows_when_full() {
    let mut vec = growvec![1, 2, 3];
    assert!(vec.is_full());

    vec.insert(0, 0).unwrap();

    assert_eq!(vec, [0, 1, 2, 3]);
    assert_eq!(vec.capacity(), 4);
}

#[test]
fn test_insert_at_cursor() {
    let mut vec = growvec![1, 2, 4];
    let third = vec.begin() + 2;

    vec.insert_at(third, 3).unwrap();

    assert_eq!(vec, [1, 2, 3, 4]);
}

#[test]
fn test_insert_slice_mid_sequence() {
    let mut vec = growvec![1, 2, 7, 8];
    let mid = vec.begin() + 2;

    vec.insert_slice(mid, &[3, 4, 5, 6]).unwrap();

    assert_eq!(vec, [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_insert_slice_growth_takes_required_floor() {
    let mut vec = growvec![1, 2];
    assert_eq!(vec.capacity(), 2);

    // required size 7 beats the 1.5x factor (3)
    vec.insert_slice(vec.end(), &[3, 4, 5, 6, 7]).unwrap();

    assert_eq!(vec.capacity(), 7);
    assert_eq!(vec, [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_insert_slice_empty_is_noop() {
    let mut vec = growvec![1, 2];

    vec.insert_slice(vec.begin(), &[]).unwrap();

    assert_eq!(vec, [1, 2]);
}

#[test]
fn test_insert_slice_past_end_fails() {
    let mut vec = growvec![1, 2];
    let past = vec.end() + 1;

    assert!(vec.insert_slice(past, &[9]).is_err());
    assert_eq!(vec, [1, 2]);
}

#[test]
fn test_erase_at_cursor() {
    let mut vec = growvec![1, 2, 3, 4];
    let second = vec.begin() + 1;

    assert_eq!(vec.erase(second), Some(2));
    assert_eq!(vec, [1, 3, 4]);
}

#[test]
fn test_erase_past_end_is_noop() {
    let mut vec = growvec![1, 2];

    assert_eq!(vec.erase(vec.end()), None);
    assert_eq!(vec.erase(growvec::Cursor::sentinel()), None);
    assert_eq!(vec, [1, 2]);
}

#[test]
fn test_erase_range() {
    let mut vec = growvec![1, 2, 3, 4, 5, 6];
    let first = vec.begin() + 1;
    let last = vec.begin() + 4;

    assert_eq!(vec.erase_range(first, last), 3);
    assert_eq!(vec, [1, 5, 6]);
}

#[test]
fn test_erase_range_clamps_to_len() {
    let mut vec = growvec![1, 2, 3, 4];

    assert_eq!(vec.erase_range(vec.begin() + 2, vec.end() + 10), 2);
    assert_eq!(vec, [1, 2]);
}

#[test]
fn test_erase_range_empty_or_invalid_is_noop() {
    let mut vec = growvec![1, 2, 3];

    assert_eq!(vec.erase_range(vec.begin() + 1, vec.begin() + 1), 0);
    assert_eq!(vec.erase_range(vec.begin() + 2, vec.begin()), 0);
    assert_eq!(vec.erase_range(vec.end(), vec.end() + 2), 0);
    assert_eq!(vec, [1, 2, 3]);
}

#[test]
fn test_erase_range_drops_removed_elements() {
    let drops = Cell::new(0);
    let mut vec = GrowVec::with_value(5, Tracked { drops: &drops });

    let before = drops.get();
    let removed = vec.erase_range(vec.begin() + 1, vec.begin() + 3);

    assert_eq!(removed, 2);
    assert_eq!(drops.get() - before, 2);
    assert_eq!(vec.len(), 3);
}
