#![no_main]

use libfuzzer_sys::fuzz_target;
use tinutil::sequence::insert_ordered;

#[derive(arbitrary::Arbitrary, Debug)]
pub struct InsertOrdered {
    pub values: Vec<i16>,
    pub items: Vec<i16>,
}

fuzz_target!(|input: InsertOrdered| {
    let mut seq = input.values;
    seq.sort();

    for item in input.items {
        let len = seq.len();
        let at = insert_ordered(&mut seq, item, |a, b| a < b);

        assert_eq!(seq.len(), len + 1);
        assert_eq!(seq[at], item);
        assert!(seq.windows(2).all(|w| w[0] <= w[1]));
        // Strict comparator: the item lands after all its equals
        assert!(seq.get(at + 1).map_or(true, |next| *next > item));
    }
});
