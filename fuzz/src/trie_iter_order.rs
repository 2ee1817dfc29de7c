#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use bitprefix::BitPrefixTrie;

#[derive(Arbitrary, Debug)]
struct Input {
    prefixes: Vec<(u32, u8)>,
}

// Replays the walk with a reference ordering: a stored prefix comes before anything it is an
// ancestor of, otherwise the prefix whose first differing bit is 1 comes first.
fn precedes(a: (u32, u8), b: (u32, u8)) -> bool {
    let common = a.1.min(b.1) as u32;
    let diff = if common == 0 {
        0
    } else {
        ((a.0 ^ b.0) >> (32 - common)) << (32 - common)
    };
    if diff == 0 {
        a.1 < b.1
    } else {
        let pos = diff.leading_zeros();
        (a.0 >> (31 - pos)) & 1 == 1
    }
}

fuzz_target!(|input: Input| {
    let mut trie = BitPrefixTrie::new();
    for (value, size) in input.prefixes {
        let _ = trie.insert(value, (size % 32) as u16);
    }

    let walked: Vec<(u32, u8)> = trie
        .prefixes()
        .map(|(key, len)| (key.to_u32(), len))
        .collect();
    assert_eq!(walked.len(), trie.len());
    for pair in walked.windows(2) {
        assert!(precedes(pair[0], pair[1]), "{:08x?} before {:08x?}", pair[0], pair[1]);
    }
});
