//! Category-partitioned slab with stable ids.
//!
//! This crate provides [`CategorySlab`], a container for records that
//! belong to exactly one of a small, fixed set of categories, where
//! membership changes constantly but the records themselves must stay
//! addressable. The motivating access pattern:
//!
//! - insert a record into a category, get a stable id back
//! - look it up by id, or by position within its category
//! - move it to another category without invalidating anything
//! - walk one category, or everything, without a filter pass
//!
//! # Design Philosophy
//!
//! The obvious encodings all pay on the wrong operation:
//!
//! ```text
//! Vec<(T, usize)> + filter   - O(n) per category walk
//! HashMap<Id, T> per category - moving a record reallocates/rehashes
//! Vec<Vec<T>>                - indices unstable, no whole-store handle
//! ```
//!
//! `CategorySlab` instead keeps one backing array indexed by id and a
//! permutation of positions partitioned by category. Reclassification
//! swaps the record's *position* across partition boundaries, one swap
//! per category stepped over, and never touches the record:
//!
//! ```text
//! positions: [ cat 0 | cat 1 | cat 2 | free pool ]
//!                     ^ boundaries shift by one per swap
//! ```
//!
//! Benefits:
//! - **Stable ids**: survive any number of reclassifications
//! - **O(1) category counts** and positional access within a category
//! - **O(distance) reclassification**, bounded by the category count
//! - **Zero allocation** on every path except growth
//!
//! # Quick Start
//!
//! ```
//! use category_slab::CategorySlab;
//!
//! // Network nodes bucketed by degree class
//! let mut nodes: CategorySlab<&str> = CategorySlab::with_capacity(3, 16);
//!
//! let a = nodes.insert_into("alice", 0).unwrap();
//! let b = nodes.insert_into("bob", 0).unwrap();
//! nodes.set_category(b, 2).unwrap();
//!
//! assert_eq!(nodes.category_len(0), 1);
//! assert_eq!(nodes.category_len(2), 1);
//!
//! // Whole-store iteration in ascending id order
//! for (id, name) in nodes.iter() {
//!     assert!(nodes.contains(id));
//!     assert!(!name.is_empty());
//! }
//!
//! // Per-category iteration in positional order
//! assert_eq!(nodes.category_iter(0).next(), Some((a, &"alice")));
//! ```
//!
//! # Caveats
//!
//! - The category count is meant to be small: category lookup and the
//!   reclassification walk are linear in it.
//! - `T: Default` is required for the mutating surface; freed slots hold
//!   a default value until reused.
//! - Removed ids are recycled. *Which* id a later insert receives is
//!   unspecified; never store meaning in a dead id.
//! - Single-threaded by design. `&mut self` serializes all mutation and
//!   the borrow checker rejects mutation while an iterator is live.

#![warn(missing_docs)]

mod error;
mod id;
mod slab;

pub use error::{CategoryError, InsertError};
pub use id::Id;
pub use slab::{CategoryIter, CategorySlab, Iter, IterMut};
