use alloc::{vec, vec::Vec};
use core::fmt;

use bstr::BStr;

use crate::{StackConfig, StackError, StackOptions};

/// A growable LIFO buffer of bytes.
///
/// The backing store is always fully initialized: `[0, len)` holds the live
/// stack, everything from `len` up to `capacity` reads as zero. Capacity grows
/// by the configured expansion step whenever a push runs out of room and is
/// never given back.
///
/// Popped bytes come out top-first (most recently pushed first), while
/// [`slice`](Self::slice) copies raw storage in forward order.
pub struct ByteStack<C: StackConfig = StackOptions> {
    data: Vec<u8>,
    len: usize,
    config: C,
}

impl<C: StackConfig> ByteStack<C> {
    /// Creates an empty stack whose capacity is `config.initial_stack_size()`.
    ///
    /// Allocation failure aborts the process.
    #[must_use]
    pub fn new(config: C) -> Self {
        let capacity = config.initial_stack_size().get();
        tracing::trace!(capacity, "created byte stack");
        Self {
            data: vec![0; capacity],
            len: 0,
            config,
        }
    }

    /// Number of live bytes, i.e. the stack pointer.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no bytes are on the stack.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the backing store in bytes.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// The live bytes, bottom of the stack first.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// The configuration provider consulted on growth.
    #[must_use]
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Mutable access to the configuration provider.
    ///
    /// A changed expansion step applies from the next growth event on.
    pub fn config_mut(&mut self) -> &mut C {
        &mut self.config
    }

    /// Pushes `bytes` in order, so the last byte ends up on top.
    ///
    /// Capacity grows in whole expansion steps until every byte fits; a push
    /// larger than one step grows several times. Pushing an empty slice does
    /// nothing.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize`.
    pub fn push(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        let end = self.reserve(bytes.len());
        self.data[self.len..end].copy_from_slice(bytes);
        self.len = end;
    }

    /// Pushes a single byte.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize`.
    pub fn push_byte(&mut self, byte: u8) {
        let end = self.reserve(1);
        self.data[self.len] = byte;
        self.len = end;
    }

    /// Removes the top `count` bytes without returning them.
    ///
    /// The vacated slots are zeroed.
    ///
    /// # Errors
    ///
    /// [`StackError::Underflow`] if `count` exceeds [`len`](Self::len); the
    /// stack is left unchanged.
    pub fn pop_discard(&mut self, count: usize) -> Result<(), StackError> {
        let new_len = self.checked_pop_len(count)?;
        self.data[new_len..self.len].fill(0);
        self.len = new_len;
        Ok(())
    }

    /// Removes the top `count` bytes into `buffer[..count]`, top-first.
    ///
    /// `buffer[0]` receives the most recently pushed byte. Bytes of `buffer`
    /// past `count` are left alone and the vacated slots are zeroed.
    ///
    /// # Errors
    ///
    /// [`StackError::Underflow`] if `count` exceeds [`len`](Self::len), or
    /// [`StackError::BufferTooSmall`] if `buffer` is shorter than `count`.
    /// Neither the stack nor `buffer` is modified on error.
    pub fn pop_into(&mut self, buffer: &mut [u8], count: usize) -> Result<(), StackError> {
        let new_len = self.checked_pop_len(count)?;
        let Some(dst) = buffer.get_mut(..count) else {
            return Err(StackError::BufferTooSmall {
                needed: count,
                len: buffer.len(),
            });
        };

        let vacated = &mut self.data[new_len..self.len];
        for (out, slot) in dst.iter_mut().zip(vacated.iter_mut().rev()) {
            *out = core::mem::take(slot);
        }
        self.len = new_len;
        Ok(())
    }

    /// Removes the top `count` bytes and returns them top-first.
    ///
    /// # Errors
    ///
    /// [`StackError::Underflow`] if `count` exceeds [`len`](Self::len).
    pub fn pop(&mut self, count: usize) -> Result<Vec<u8>, StackError> {
        self.checked_pop_len(count)?;
        let mut out = vec![0; count];
        self.pop_into(&mut out, count)?;
        Ok(out)
    }

    /// Copies backing-store bytes `[from, to)` in forward order.
    ///
    /// The range is checked against [`capacity`](Self::capacity), not
    /// [`len`](Self::len): bytes above the stack pointer are readable and are
    /// zero. `from == to` returns an empty vector.
    ///
    /// # Errors
    ///
    /// [`StackError::SliceOutOfRange`] if `from > to` or `to > capacity`.
    pub fn slice(&self, from: usize, to: usize) -> Result<Vec<u8>, StackError> {
        self.data
            .get(from..to)
            .map(<[u8]>::to_vec)
            .ok_or(StackError::SliceOutOfRange {
                from,
                to,
                capacity: self.capacity(),
            })
    }

    /// Releases the backing store.
    pub fn destroy(self) {
        tracing::trace!(capacity = self.capacity(), "destroyed byte stack");
        drop(self);
    }

    /// Asserts the storage invariants.
    ///
    /// # Panics
    ///
    /// Panics if the stack pointer exceeds the capacity or a byte above the
    /// stack pointer is non-zero.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn check_invariants(&self) {
        assert!(
            self.len <= self.data.len(),
            "stack pointer {} past capacity {}",
            self.len,
            self.data.len()
        );
        if let Some(offset) = self.data[self.len..].iter().position(|&b| b != 0) {
            panic!("non-zero byte at {} above stack pointer {}", self.len + offset, self.len);
        }
    }

    fn checked_pop_len(&self, count: usize) -> Result<usize, StackError> {
        self.len.checked_sub(count).ok_or(StackError::Underflow {
            requested: count,
            len: self.len,
        })
    }

    /// Grows the backing store until `additional` more bytes fit and returns
    /// the new stack pointer.
    fn reserve(&mut self, additional: usize) -> usize {
        let Some(end) = self.len.checked_add(additional) else {
            panic!("byte stack capacity overflow");
        };

        let from = self.data.len();
        if end <= from {
            return end;
        }

        let mut capacity = from;
        let mut events = 0usize;
        while capacity < end {
            let step = self.config.stack_expansion_step_size().get();
            let Some(next) = capacity.checked_add(step) else {
                panic!("byte stack capacity overflow");
            };
            capacity = next;
            events += 1;
        }

        tracing::debug!(from, to = capacity, events, "grew byte stack");
        self.data.resize(capacity, 0);
        end
    }
}

impl<C: StackConfig + Default> Default for ByteStack<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: StackConfig> Extend<u8> for ByteStack<C> {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.push_byte(byte);
        }
    }
}

impl<'a, C: StackConfig> Extend<&'a u8> for ByteStack<C> {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<C: StackConfig> fmt::Debug for ByteStack<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteStack")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("live", &BStr::new(self.as_bytes()))
            .finish()
    }
}
