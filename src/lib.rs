//! A sorted, duplicate-permitting list backed by an order-statistic AVL tree.
//!
//! [`SortedList`] keeps its values in ascending order under a comparator chosen at
//! construction time, and answers positional queries in O(log n):
//!
//! - [`get`](SortedList::get) - The value at a given sorted position
//! - [`rank_of`](SortedList::rank_of) - The sorted position of a value
//! - [`lower`](SortedList::lower) / [`higher`](SortedList::higher) - Strict predecessor and successor
//! - Indexing by [`Rank`] - e.g., `list[Rank(0)]` for the smallest value
//!
//! # Example
//!
//! ```
//! use sorted_avl::{Rank, SortedList};
//!
//! let mut list = SortedList::new();
//! for value in [9, 5, 1, 7, 3] {
//!     list.insert(value);
//! }
//!
//! assert_eq!(list.to_vec(), [1, 3, 5, 7, 9]);
//! assert_eq!(list.get(2), Ok(&5));
//! assert_eq!(list.rank_of(&7), Ok(3));
//! assert_eq!(list.lower(&7), Ok(&5));
//! assert_eq!(list[Rank(0)], 1);
//!
//! // Duplicates are kept; removal takes out a single copy.
//! list.insert(5);
//! assert!(list.remove(&5));
//! assert_eq!(list.len(), 5);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Custom ordering** - Any [`Compare`] implementation, including plain closures
//! - **Augmentation** - Per-subtree summaries through [`Augment`], such as a running [`Sum`]
//! - **Fail-fast traversal** - A detached [`Cursor`] reports structural modification instead of
//!   yielding stale values
//!
//! # Implementation
//!
//! Nodes live in a contiguous arena and refer to their parent and children by handle. Each
//! node caches its height, subtree size and summary; every insertion or removal finishes
//! with a single upward pass that refreshes those caches and restores AVL balance.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod augment;
mod compare;
mod error;
mod order_statistic;
mod raw;

pub mod sorted_list;

pub use augment::{Augment, Sum};
pub use compare::{Compare, Natural};
pub use error::{Error, ErrorKind};
pub use order_statistic::Rank;
pub use sorted_list::{Builder, Cursor, SortedList};
