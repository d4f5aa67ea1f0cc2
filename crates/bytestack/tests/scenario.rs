#![allow(missing_docs)]

use bytestack::{ByteStack, StackError, StackOptions};

#[test]
fn push_grow_pop_slice() -> Result<(), StackError> {
    let mut stack = ByteStack::new(StackOptions::new(4, 4));

    stack.push(b"AB");
    assert_eq!((stack.len(), stack.capacity()), (2, 4));

    stack.push(b"CDE");
    assert_eq!((stack.len(), stack.capacity()), (5, 8));

    assert_eq!(stack.pop(3)?, b"EDC");
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.slice(2, 5)?, [0, 0, 0]);
    assert_eq!(stack.slice(0, 2)?, b"AB");

    stack.destroy();
    Ok(())
}

#[test]
fn slice_and_pop_disagree_on_order() -> Result<(), StackError> {
    let mut stack = ByteStack::<StackOptions>::default();
    stack.push(b"abc");

    assert_eq!(stack.slice(0, 3)?, b"abc");
    assert_eq!(stack.pop(3)?, b"cba");
    assert!(stack.is_empty());
    Ok(())
}

#[test]
fn length_tracks_pushes_minus_pops() -> Result<(), StackError> {
    let mut stack = ByteStack::new(StackOptions::new(3, 2));
    let mut expected = 0usize;

    for round in 1..=20usize {
        let chunk = vec![u8::try_from(round).unwrap(); round];
        stack.push(&chunk);
        expected += round;

        let popped = round / 2;
        stack.pop_discard(popped)?;
        expected -= popped;

        assert_eq!(stack.len(), expected);
        assert!(stack.len() <= stack.capacity());
        assert_eq!((stack.capacity() - 3) % 2, 0, "grows in whole steps");
    }
    Ok(())
}

#[test]
fn underflow_is_reported_not_wrapped() {
    let mut stack = ByteStack::new(StackOptions::new(4, 4));
    stack.push(b"ab");

    let err = stack.pop(3).unwrap_err();
    assert_eq!(
        err,
        StackError::Underflow {
            requested: 3,
            len: 2
        }
    );
    assert_eq!(stack.as_bytes(), b"ab");
}
