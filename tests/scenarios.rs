use num_traits::{NumCast, PrimInt, Unsigned};
use sparsesets::{Error, SparseSet};
use test_case::test_case;

fn sorted<T: Ord + Copy>(elems: &[T]) -> Vec<T> {
    let mut elems = elems.to_vec();
    elems.sort_unstable();
    elems
}

#[test]
fn render_after_inserts() {
    let mut set: SparseSet = SparseSet::new(5);
    set.insert(2).unwrap();
    set.insert(4).unwrap();
    assert_eq!(
        set.to_string(),
        "{0: false, 1: false, 2: true, 3: false, 4: true}"
    );
}

#[test]
fn content_and_absent_after_remove() {
    let mut set: SparseSet = SparseSet::new(5);
    set.insert(2).unwrap();
    set.insert(3).unwrap();
    set.insert(4).unwrap();
    set.remove(3).unwrap();

    assert_eq!(sorted(set.content()), vec![2, 4]);
    assert_eq!(sorted(set.absent()), vec![0, 1, 3]);
    for elem in set.absent() {
        assert!(!set.contains(*elem));
    }
}

#[test]
fn zero_capacity() {
    let mut set: SparseSet = SparseSet::new(0);
    assert_eq!(set.len(), 0);
    assert_eq!(set.to_string(), "{}");
    assert_eq!(
        set.insert(0),
        Err(Error::OutOfRange {
            elem: 0,
            capacity: 0
        })
    );
    assert_eq!(
        set.remove(0),
        Err(Error::OutOfRange {
            elem: 0,
            capacity: 0
        })
    );
}

#[test]
fn negative_capacity_is_rejected() {
    let result = SparseSet::<usize>::try_new(-1_i32);
    assert!(matches!(result, Err(Error::InvalidCapacity { .. })));
}

#[test_case(1; "single element")]
#[test_case(5; "small")]
#[test_case(100; "larger")]
fn bounds_are_checked_at_capacity(capacity: usize) {
    let mut set: SparseSet = SparseSet::new(capacity);
    set.insert(capacity - 1).unwrap();
    let content = set.content().to_vec();

    assert!(set.insert(capacity).is_err());
    assert!(set.remove(capacity).is_err());
    assert_eq!(set.len(), 1);
    assert_eq!(set.content(), content.as_slice());
}

#[test_case(0; "empty")]
#[test_case(1; "single element")]
#[test_case(7; "small")]
fn fill_then_clear(capacity: usize) {
    let mut set: SparseSet = SparseSet::new(capacity);
    set.fill();
    assert_eq!(set.len(), capacity);
    assert!(set.absent().is_empty());

    set.clear();
    assert!(set.content().is_empty());
    assert_eq!(sorted(set.absent()), (0..capacity).collect::<Vec<_>>());
}

fn exercise<T: PrimInt + Unsigned + std::fmt::Debug>(capacity: usize) {
    let mut set: SparseSet<T> = SparseSet::new(capacity);
    let last = <T as NumCast>::from(capacity - 1).unwrap();
    let zero = T::zero();

    assert_eq!(set.insert(last), Ok(true));
    assert_eq!(set.insert(zero), Ok(true));
    assert_eq!(set.insert(last), Ok(false));
    assert!(set.contains(last));
    assert_eq!(set.len(), 2);

    assert_eq!(set.remove(last), Ok(true));
    assert!(!set.contains(last));
    assert_eq!(set.content(), &[zero]);
    assert_eq!(set.absent().len(), capacity - 1);
}

#[test_case(exercise::<u8>, 256; "u8 full range")]
#[test_case(exercise::<u16>, 1000; "u16")]
#[test_case(exercise::<u32>, 1000; "u32")]
#[test_case(exercise::<u64>, 1000; "u64")]
#[test_case(exercise::<usize>, 1000; "usize")]
fn works_for_every_unsigned_type(check: fn(usize), capacity: usize) {
    check(capacity);
}

#[test_case(257, 256; "u8 one past the range")]
#[test_case(100_000, 256; "u8 far past the range")]
fn capacity_must_fit_element_type(capacity: usize, max: u128) {
    assert_eq!(
        SparseSet::<u8>::try_new(capacity),
        Err(Error::InvalidCapacity {
            capacity: capacity.to_string(),
            max
        })
    );
}
