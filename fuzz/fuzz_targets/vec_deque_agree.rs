#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use tinutil::sequence::SequenceExt;

#[derive(arbitrary::Arbitrary, Debug)]
pub enum Op {
    Insert(u8),
    InsertDescending(u8),
    Erase(u8),
    EraseAll(u8),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut vec: Vec<u8> = Vec::new();
    let mut deque: VecDeque<u8> = VecDeque::new();

    for op in ops {
        match op {
            Op::Insert(x) => assert_eq!(
                vec.insert_ordered(x, |a, b| a < b),
                deque.insert_ordered(x, |a, b| a < b)
            ),
            Op::InsertDescending(x) => assert_eq!(
                vec.insert_ordered(x, |a, b| a > b),
                deque.insert_ordered(x, |a, b| a > b)
            ),
            Op::Erase(x) => assert_eq!(vec.erase_item(&x), deque.erase_item(&x)),
            Op::EraseAll(x) => assert_eq!(vec.erase_all_items(&x), deque.erase_all_items(&x)),
        }
        assert!(vec.iter().eq(deque.iter()));
    }
});
