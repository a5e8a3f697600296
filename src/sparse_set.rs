use std::fmt;

use num_traits::{NumCast, PrimInt, ToPrimitive, Unsigned};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::iter::Iter;

/// A set of integers drawn from `[0, capacity)`, that supports
/// constant-time insertion, removal, lookup, and clearing,
/// as well as iteration that is proportional to the number of elements
/// being visited rather than the capacity of the set.
///
/// Internally the set keeps two vectors of length `capacity`:
///
/// - `values` is a permutation of `[0, capacity)`. Its first `len()` entries
///   are the members of the set, the rest are the non-members.
/// - `positions` is the inverse permutation: `positions[v]` is the index of
///   `v` in `values`.
///
/// An element `e` is a member iff `positions[e] < len()`. Insertion and removal
/// move an element across the boundary with a single swap, and clearing just
/// moves the boundary back to zero.
///
/// The implementation isn't efficient in terms of space, since it allocates
/// two vectors of size `capacity` up front. It never allocates afterwards.
#[derive(Clone)]
pub struct SparseSet<T = usize> {
    size: usize,
    values: Vec<T>,
    positions: Vec<usize>,
}

/// Largest capacity whose elements can all be represented by `T`.
fn max_capacity<T: PrimInt + Unsigned>() -> u128 {
    T::max_value()
        .to_u128()
        .map_or(u128::MAX, |max| max.saturating_add(1))
        .min(usize::MAX as u128)
}

impl<T: PrimInt + Unsigned> SparseSet<T> {
    /// Creates an empty set for elements in `[0, capacity)`.
    ///
    /// ```
    /// use sparsesets::SparseSet;
    ///
    /// let set: SparseSet<u16> = SparseSet::new(10); // holds integers 0..=9
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), 10);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `capacity` elements can't be represented by `T`
    /// (e.g. a capacity of 300 for `u8`). Use [`SparseSet::try_new`] to get an
    /// error instead.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(set) => set,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates an empty set for elements in `[0, capacity)`, failing with
    /// [`Error::InvalidCapacity`] if `capacity` is negative or too large for `T`.
    ///
    /// ```
    /// use sparsesets::{Error, SparseSet};
    ///
    /// assert!(SparseSet::<u8>::try_new(256).is_ok());
    /// assert!(matches!(
    ///     SparseSet::<u8>::try_new(-1),
    ///     Err(Error::InvalidCapacity { .. })
    /// ));
    /// ```
    pub fn try_new<C: ToPrimitive + fmt::Display>(capacity: C) -> Result<Self> {
        let max = max_capacity::<T>();
        let invalid = || Error::InvalidCapacity {
            capacity: capacity.to_string(),
            max,
        };

        let n = capacity
            .to_usize()
            .filter(|&n| n as u128 <= max)
            .ok_or_else(invalid)?;

        // the initial state is the identity permutation: everything is absent,
        // in natural order
        let values = (0..n)
            .map(|i| <T as NumCast>::from(i))
            .collect::<Option<Vec<T>>>()
            .ok_or_else(invalid)?;
        let positions = (0..n).collect();

        trace!(capacity = n, "allocated sparse set");

        Ok(Self {
            size: 0,
            values,
            positions,
        })
    }

    /// Returns `true` if `elem` is in the set.
    ///
    /// Elements outside of `[0, capacity)` are never members, so this returns
    /// `false` for them. Use [`SparseSet::try_contains`] to treat them as errors.
    pub fn contains(&self, elem: T) -> bool {
        self.slot(elem)
            .map_or(false, |index| self.positions[index] < self.size)
    }

    /// Returns whether `elem` is in the set, or [`Error::OutOfRange`] if `elem`
    /// lies outside of `[0, capacity)`.
    pub fn try_contains(&self, elem: T) -> Result<bool> {
        let index = self.check(elem, "contains")?;
        Ok(self.positions[index] < self.size)
    }

    /// Inserts `elem` into the set.
    ///
    /// Returns `Ok(true)` if the element was not in the set before, `Ok(false)`
    /// if it already was. Fails with [`Error::OutOfRange`] without touching the
    /// set if `elem` lies outside of `[0, capacity)`.
    ///
    /// ```
    /// use sparsesets::SparseSet;
    ///
    /// let mut set: SparseSet = SparseSet::new(5);
    /// set.insert(2)?;
    /// set.insert(4)?;
    /// assert_eq!(set.to_string(), "{0: false, 1: false, 2: true, 3: false, 4: true}");
    /// assert!(set.insert(5).is_err());
    /// # Ok::<(), sparsesets::Error>(())
    /// ```
    pub fn insert(&mut self, elem: T) -> Result<bool> {
        let index = self.check(elem, "insert")?;
        let position = self.positions[index];
        if position < self.size {
            return Ok(false);
        }

        // move elem to the first slot of the absent partition, then grow the
        // present partition over it
        self.swap(position, self.size);
        self.size += 1;
        Ok(true)
    }

    /// Removes `elem` from the set.
    ///
    /// Returns `Ok(true)` if the element was in the set, `Ok(false)` if it
    /// wasn't. Fails with [`Error::OutOfRange`] without touching the set if
    /// `elem` lies outside of `[0, capacity)`.
    pub fn remove(&mut self, elem: T) -> Result<bool> {
        let index = self.check(elem, "remove")?;
        let position = self.positions[index];
        if position >= self.size {
            return Ok(false);
        }

        // shrink first: slot `size` is now the last present element, and the
        // swap is skipped if elem already sits there
        self.size -= 1;
        self.swap(position, self.size);
        Ok(true)
    }

    /// Inserts every element of `elems`, stopping at the first one that is out
    /// of range. Elements inserted before the failing one stay in the set.
    pub fn extend_from<I: IntoIterator<Item = T>>(&mut self, elems: I) -> Result<()> {
        for elem in elems {
            self.insert(elem)?;
        }
        Ok(())
    }

    /// Maps an element to its index in `positions`, if it is in range.
    fn slot(&self, elem: T) -> Option<usize> {
        elem.to_usize().filter(|&index| index < self.capacity())
    }

    fn check(&self, elem: T, op: &'static str) -> Result<usize> {
        self.slot(elem).ok_or_else(|| {
            let err = Error::OutOfRange {
                elem: elem.to_u128().unwrap_or(u128::MAX),
                capacity: self.capacity(),
            };
            debug!(op, %err, "rejected element");
            err
        })
    }

    fn swap(&mut self, p1: usize, p2: usize) {
        if p1 == p2 {
            return;
        }
        let v1 = self.value_slot(p1);
        let v2 = self.value_slot(p2);
        self.values.swap(p1, p2);
        self.positions[v1] = p2;
        self.positions[v2] = p1;
    }

    /// The element stored at `position`, as an index into `positions`.
    fn value_slot(&self, position: usize) -> usize {
        // every stored value is below the capacity, which itself fits in a usize
        self.values[position]
            .to_usize()
            .expect("stored values always fit in usize")
    }
}

impl<T> SparseSet<T> {
    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the capacity of the set: elements range over `[0, capacity)`.
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if every element of `[0, capacity)` is in the set.
    pub fn is_full(&self) -> bool {
        self.size == self.values.len()
    }

    /// Empties the set in constant time.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Makes every element of `[0, capacity)` a member in constant time.
    pub fn fill(&mut self) {
        self.size = self.values.len();
    }

    /// The elements currently in the set.
    ///
    /// The slice is a direct view of the set's storage. No particular order is
    /// guaranteed: removals may reorder the remaining elements.
    ///
    /// ```
    /// use sparsesets::SparseSet;
    ///
    /// let mut set: SparseSet = SparseSet::new(5);
    /// set.extend_from([2, 3, 4])?;
    /// set.remove(3)?;
    /// assert_eq!(set.content(), &[2, 4]);
    /// # Ok::<(), sparsesets::Error>(())
    /// ```
    pub fn content(&self) -> &[T] {
        &self.values[..self.size]
    }

    /// The elements of `[0, capacity)` currently NOT in the set, in no
    /// particular order.
    ///
    /// ```
    /// use sparsesets::SparseSet;
    ///
    /// let mut set: SparseSet = SparseSet::new(5);
    /// set.extend_from([2, 3, 4])?;
    /// set.remove(3)?;
    /// assert_eq!(set.absent(), &[3, 1, 0]);
    /// # Ok::<(), sparsesets::Error>(())
    /// ```
    pub fn absent(&self) -> &[T] {
        &self.values[self.size..]
    }

    /// Iterates over the elements in the set, in the order of [`SparseSet::content`].
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.content())
    }

    /// Iterates over the elements not in the set, in the order of [`SparseSet::absent`].
    pub fn iter_absent(&self) -> Iter<'_, T> {
        Iter::new(self.absent())
    }
}

impl<T> Default for SparseSet<T> {
    fn default() -> Self {
        Self {
            size: 0,
            values: Vec::new(),
            positions: Vec::new(),
        }
    }
}

impl<'a, T: Copy> IntoIterator for &'a SparseSet<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two sets are equal when they have the same capacity and the same members,
/// regardless of the order their storage keeps them in.
impl<T: PrimInt + Unsigned> PartialEq for SparseSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity()
            && self.len() == other.len()
            && self.iter().all(|elem| other.contains(elem))
    }
}

impl<T: PrimInt + Unsigned> Eq for SparseSet<T> {}

impl<T: fmt::Debug> fmt::Debug for SparseSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseSet")
            .field("len", &self.size)
            .field("capacity", &self.values.len())
            .field("content", &self.content())
            .finish()
    }
}

/// Lists every element of `[0, capacity)` in ascending order, each followed by
/// whether it is in the set: `{0: false, 1: true, 2: false}`.
impl<T> fmt::Display for SparseSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (elem, &position) in self.positions.iter().enumerate() {
            if elem > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", elem, position < self.size)?;
        }
        f.write_str("}")
    }
}
