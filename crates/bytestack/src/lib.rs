//! A byte-oriented, growable LIFO buffer.
//!
//! [`ByteStack`] owns one contiguous backing store, a stack pointer and a
//! capacity. Bytes are pushed in order and popped top-first; the backing
//! store grows by a fixed, externally configured step and never shrinks.
//!
//! ```rust
//! use bytestack::{ByteStack, StackOptions};
//!
//! let mut stack = ByteStack::new(StackOptions::new(4, 4));
//! stack.push(b"AB");
//! stack.push(b"CDE");
//! assert_eq!(stack.capacity(), 8);
//!
//! assert_eq!(stack.pop(3)?, b"EDC");
//! assert_eq!(stack.slice(0, 2)?, b"AB");
//! # Ok::<(), bytestack::StackError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod stack;

#[cfg(test)]
mod tests;

pub use error::StackError;
pub use options::{ReloadableOptions, StackConfig, StackOptions};
pub use stack::ByteStack;
