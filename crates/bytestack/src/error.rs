use thiserror::Error;

/// A caller-contract violation reported by [`ByteStack`](crate::ByteStack).
///
/// Every fallible operation checks its preconditions before touching the
/// backing store, so a returned error means the stack is unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// A pop asked for more bytes than the stack holds.
    #[error("cannot pop {requested} bytes from a stack holding {len}")]
    Underflow {
        /// Bytes the caller asked to pop.
        requested: usize,
        /// Bytes currently on the stack.
        len: usize,
    },
    /// The destination of a `pop_into` cannot hold the requested bytes.
    #[error("destination holds {len} bytes but {needed} were requested")]
    BufferTooSmall {
        /// Bytes the caller asked to pop.
        needed: usize,
        /// Length of the destination buffer.
        len: usize,
    },
    /// A slice range is reversed or extends past the backing store.
    #[error("slice {from}..{to} is out of range for capacity {capacity}")]
    SliceOutOfRange {
        /// Requested start offset.
        from: usize,
        /// Requested end offset (exclusive).
        to: usize,
        /// Capacity of the backing store.
        capacity: usize,
    },
}
