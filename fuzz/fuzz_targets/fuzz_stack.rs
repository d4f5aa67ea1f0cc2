#![no_main]
use arbitrary::Arbitrary;
use bytestack::{ByteStack, StackError, StackOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Push(Vec<u8>),
    PushByte(u8),
    PopDiscard(u8),
    PopInto(u8),
    Pop(u8),
    Slice(u16, u16),
}

#[derive(Debug, Arbitrary)]
struct Input {
    initial: u8,
    step: u8,
    ops: Vec<Op>,
}

fn run(input: Input) {
    // Keep both sizes positive; zero is rejected by `StackOptions::new`.
    let options = StackOptions::new(usize::from(input.initial) + 1, usize::from(input.step) + 1);
    let mut stack = ByteStack::new(options);
    let mut model: Vec<u8> = Vec::new();

    for op in input.ops {
        match op {
            Op::Push(bytes) => {
                stack.push(&bytes);
                model.extend_from_slice(&bytes);
            }
            Op::PushByte(b) => {
                stack.push_byte(b);
                model.push(b);
            }
            Op::PopDiscard(count) => {
                let count = usize::from(count);
                let result = stack.pop_discard(count);
                if count <= model.len() {
                    assert_eq!(result, Ok(()));
                    model.truncate(model.len() - count);
                } else {
                    assert!(matches!(result, Err(StackError::Underflow { .. })));
                }
            }
            Op::PopInto(count) => {
                let count = usize::from(count);
                let mut buffer = vec![0u8; count];
                match stack.pop_into(&mut buffer, count) {
                    Ok(()) => {
                        let expected: Vec<u8> = model.drain(model.len() - count..).rev().collect();
                        assert_eq!(buffer, expected);
                    }
                    Err(err) => {
                        assert!(count > model.len(), "unexpected {err}");
                    }
                }
            }
            Op::Pop(count) => {
                let count = usize::from(count);
                if let Ok(popped) = stack.pop(count) {
                    let expected: Vec<u8> = model.drain(model.len() - count..).rev().collect();
                    assert_eq!(popped, expected);
                } else {
                    assert!(count > model.len());
                }
            }
            Op::Slice(from, to) => {
                let (from, to) = (usize::from(from), usize::from(to));
                let in_range = from <= to && to <= stack.capacity();
                match stack.slice(from, to) {
                    Ok(bytes) => {
                        assert!(in_range);
                        assert_eq!(bytes.len(), to - from);
                    }
                    Err(_) => assert!(!in_range),
                }
            }
        }

        stack.check_invariants();
        assert_eq!(stack.as_bytes(), model.as_slice());
    }
}

fuzz_target!(|input: Input| run(input));
