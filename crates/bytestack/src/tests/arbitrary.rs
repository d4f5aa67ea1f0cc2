use alloc::{boxed::Box, vec::Vec};

use quickcheck::{Arbitrary, Gen};

use crate::StackOptions;

/// One call against a [`ByteStack`](crate::ByteStack).
#[derive(Debug, Clone)]
pub(crate) enum StackOp {
    Push(Vec<u8>),
    PushByte(u8),
    PopDiscard(usize),
    PopInto { count: usize, spare: usize },
    Pop(usize),
    Slice { from: usize, to: usize },
}

impl Arbitrary for StackOp {
    fn arbitrary(g: &mut Gen) -> Self {
        // Small counts keep underflow and growth both reachable.
        let count = usize::arbitrary(g) % 24;
        match usize::arbitrary(g) % 6 {
            0 => StackOp::Push(Vec::<u8>::arbitrary(g)),
            1 => StackOp::PushByte(u8::arbitrary(g)),
            2 => StackOp::PopDiscard(count),
            3 => StackOp::PopInto {
                count,
                spare: usize::arbitrary(g) % 4,
            },
            4 => StackOp::Pop(count),
            _ => StackOp::Slice {
                from: usize::arbitrary(g) % 48,
                to: usize::arbitrary(g) % 48,
            },
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            StackOp::Push(bytes) => Box::new(bytes.shrink().map(StackOp::Push)),
            StackOp::Pop(count) => Box::new(count.shrink().map(StackOp::Pop)),
            StackOp::PopDiscard(count) => Box::new(count.shrink().map(StackOp::PopDiscard)),
            _ => quickcheck::empty_shrinker(),
        }
    }
}

/// Growth parameters small enough that most op sequences grow at least once.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SmallOptions(pub(crate) StackOptions);

impl Arbitrary for SmallOptions {
    fn arbitrary(g: &mut Gen) -> Self {
        let initial = 1 + usize::arbitrary(g) % 8;
        let step = 1 + usize::arbitrary(g) % 8;
        Self(StackOptions::new(initial, step))
    }
}
