//! Ownership-aware contiguous collections.
//!
//! This crate provides contiguous containers whose borrows are tracked at
//! run time as well as compile time. Every owner keeps a lease record
//! counting its outstanding views; operations that would move, mutate, or
//! free storage out from under a live view refuse to run.
//!
//! - [`vec::Vec`] is a growable heap-backed array. Because its block does
//!   not move with the owner, it can lend out [`vec::Lent`] and
//!   [`vec::LentMut`] handles that survive moves of the owner itself.
//! - [`array::Array`] is a fixed-size inline array whose views are bound
//!   to a borrow, with cursor counts still observable.
//! - [`slice::Slice`] and [`slice::SliceMut`] are the plain views both
//!   containers hand out, with sub-ranging, splitting, windowing, and
//!   chunking adaptors.
//! - [`relocate`] classifies value types by whether they can be moved to a
//!   new address as a bulk byte copy, which decides how [`vec::Vec`] grows
//!   its block.
//! - [`lease`] is the counting machinery itself.

#![no_std]

extern crate alloc;

pub mod array;
pub mod lease;
pub mod relocate;
pub mod slice;
pub mod vec;
