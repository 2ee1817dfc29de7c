#![no_main]

use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use bitprefix::{BitKey, BitPrefixTrie, Error};

#[derive(Arbitrary, Debug)]
enum TrieMethod {
    Insert { value: u32, size: u16 },
    Match { value: u32 },
    Contains { value: u32, size: u16 },
}

fn mask(value: u32, size: u16) -> u32 {
    if size == 0 {
        0
    } else {
        value & (u32::MAX << (32 - size as u32))
    }
}

fuzz_target!(|methods: Vec<TrieMethod>| {
    let mut trie = BitPrefixTrie::new();
    let mut model = BTreeSet::<(u32, u16)>::new();

    for m in methods {
        match m {
            TrieMethod::Insert { value, size } => {
                let result = trie.insert(value, size);
                if size >= 32 {
                    assert_eq!(result, Err(Error::InvalidArgument { size }));
                } else if model.insert((mask(value, size), size)) {
                    assert_eq!(result, Ok(()));
                } else {
                    assert_eq!(result, Err(Error::AlreadyExists));
                }
            }
            TrieMethod::Match { value } => {
                let key = BitKey::from(value);
                let expected = model
                    .iter()
                    .any(|(v, s)| BitKey::from(*v).shares_prefix(&key, *s as usize));
                assert_eq!(trie.matches(value), expected, "match {value:08x}");
            }
            TrieMethod::Contains { value, size } => {
                let expected = size < 32 && model.contains(&(mask(value, size), size));
                assert_eq!(trie.contains(value, size), expected);
            }
        }
    }

    assert_eq!(trie.len(), model.len());
    assert_eq!(trie.iter().count(), model.len());
});
