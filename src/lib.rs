//! A sparse set: a dynamic subset of the integers `[0, N)`.
//!
//! [`SparseSet`] supports the following operations with these time
//! complexities:
//!
//! - [`insert`](SparseSet::insert): O(1)
//! - [`remove`](SparseSet::remove): O(1)
//! - [`contains`](SparseSet::contains): O(1)
//! - [`clear`](SparseSet::clear): O(1)
//! - [`content`](SparseSet::content): O(len) to traverse
//! - [`absent`](SparseSet::absent): O(N - len) to traverse
//!
//! This comes at the cost of memory: the set keeps two vectors of `N`
//! integers, allocated once at construction.
//!
//! ```
//! use sparsesets::{sparse_set, SparseSet};
//!
//! let mut set: SparseSet<u32> = sparse_set![5; 2, 3, 4];
//! set.remove(3)?;
//!
//! let mut content: Vec<_> = set.iter().collect();
//! content.sort();
//! assert_eq!(content, vec![2, 4]);
//! assert!(set.iter_absent().all(|elem| !set.contains(elem)));
//! # Ok::<(), sparsesets::Error>(())
//! ```

mod error;
mod iter;
mod sparse_set;

pub use error::{Error, Result};
pub use iter::Iter;
pub use sparse_set::SparseSet;

/// Creates a [`SparseSet`] with the given capacity, holding the listed elements.
///
/// ```
/// use sparsesets::{sparse_set, SparseSet};
///
/// let set: SparseSet<u8> = sparse_set![64; 4, 32, 16];
/// assert!(set.contains(32));
/// assert_eq!(set.len(), 3);
///
/// let empty: SparseSet = sparse_set![10];
/// assert!(empty.is_empty());
/// ```
///
/// # Panics
///
/// Panics if the capacity is too large for the element type, or if any
/// element is out of range.
#[macro_export]
macro_rules! sparse_set {
    ($capacity:expr; $($elem:expr),* $(,)?) => {{
        let mut set = $crate::SparseSet::new($capacity);
        $(
            if let Err(err) = set.insert($elem) {
                panic!("{}", err);
            }
        )*
        set
    }};
    ($capacity:expr) => {
        $crate::SparseSet::new($capacity)
    };
}
