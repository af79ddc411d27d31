#![no_main]

use libfuzzer_sys::fuzz_target;
use tinutil::collection::{contains, find_if};
use tinutil::sequence::{erase, erase_all};

fuzz_target!(|input: (Vec<u8>, u8)| {
    let (mut seq, item) = input;
    let original = seq.clone();

    let first = find_if(&original, |x| *x == item);
    match erase(&mut seq, &item) {
        Some(at) => {
            assert_eq!(first, Some(at));
            assert_eq!(seq.len(), original.len() - 1);
            assert_eq!(seq[..at], original[..at]);
            assert_eq!(seq[at..], original[at + 1..]);
        }
        None => {
            assert!(!contains(&original, &item));
            assert_eq!(seq, original);
        }
    }

    let count = original.iter().filter(|x| **x == item).count();
    let mut seq = original.clone();
    assert_eq!(erase_all(&mut seq, &item), count);
    assert!(!contains(&seq, &item));
    assert!(seq.iter().copied().eq(original.iter().copied().filter(|x| *x != item)));
});
