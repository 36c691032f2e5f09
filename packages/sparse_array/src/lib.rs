//! A growable sparse array with stack discipline, direct index addressing and a
//! configurable release hook.
//!
//! This crate provides [`SparseArray`], a dynamically growing container of owned
//! values that behaves as a stack and as an index-addressed array at the same time.
//! It grows by a configurable fixed increment, tolerates holes created by
//! out-of-order writes, and can route every value it relinquishes through a
//! caller-supplied [release hook][ReleaseHook].
//!
//! # Key Features
//!
//! - **Dual access discipline**: push/pop/top/pick stack operations alongside
//!   get/set random access over the same slots
//! - **Step-wise growth**: capacity grows by a configurable increment, never
//!   shrinks, and growth is always by exactly the amount the triggering operation
//!   asks for
//! - **Sparse writes**: setting an index beyond the current length materializes the
//!   skipped slots as explicit holes rather than shifting or erroring
//! - **Release hook**: an optional callback that receives ownership of every value
//!   the array releases on overwrite, purge or teardown - and is never invoked on
//!   pop, growth or reads
//! - **Two-tier failure model**: contract violations (popping an empty array,
//!   shrinking the capacity) panic loudly, while expected misses (reading past the
//!   capacity, reading a hole) are ordinary [`None`] results
//!
//! # Examples
//!
//! ## Stack discipline with automatic growth
//!
//! ```rust
//! use sparse_array::SparseArray;
//!
//! let mut array = SparseArray::<String>::new(2);
//!
//! array.push("first".to_string());
//! array.push("second".to_string());
//!
//! // The array is now full; the next push grows it by one grow step.
//! array.push("third".to_string());
//!
//! assert_eq!(array.capacity(), 4);
//! assert_eq!(array.top().map(String::as_str), Some("third"));
//! assert_eq!(array.pop().as_deref(), Some("third"));
//! ```
//!
//! ## Sparse indexed writes
//!
//! ```rust
//! use sparse_array::SparseArray;
//!
//! let mut array = SparseArray::<u32>::new(4);
//!
//! // Writing far beyond the length grows the array and leaves holes behind.
//! array.set(10, 99);
//!
//! assert_eq!(array.capacity(), 14);
//! assert_eq!(array.len(), 11);
//! assert_eq!(array.get(10), Some(&99));
//! assert_eq!(array.get(7), None);
//! ```
//!
//! ## Releasing values through a hook
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use sparse_array::SparseArray;
//!
//! let released = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&released);
//!
//! let mut array = SparseArray::new_with(4, move |_value: u32| {
//!     counter.set(counter.get() + 1);
//! });
//!
//! array.push(1);
//! array.push(2);
//! array.purge();
//!
//! assert_eq!(released.get(), 2);
//! ```

mod builder;
mod sparse_array;

pub use builder::*;
pub use sparse_array::*;
