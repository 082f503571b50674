#![no_main]
use libfuzzer_sys::fuzz_target;
use louds_trie::LoudsTrie;

fuzz_target!(|data: (Vec<Vec<u8>>, Vec<u8>)| {
    let (keys, query) = data;
    let keys: Vec<Vec<u8>> = keys.into_iter().filter(|k| !k.is_empty()).collect();
    if keys.is_empty() {
        assert!(LoudsTrie::new(&keys).is_err());
        return;
    }

    let trie = LoudsTrie::new(&keys).unwrap();

    // Every stored key is found as its own longest prefix.
    for key in &keys {
        let hits = trie.common_prefix_search(key).unwrap();
        let id = *hits.last().expect("stored key not found");
        assert_eq!(&trie.id2word(id).unwrap(), key);
    }

    // Hits spell growing prefixes of the query.
    let mut prev = 0;
    for id in trie.common_prefix_search(&query).unwrap() {
        let word = trie.id2word(id).unwrap();
        assert!(query.starts_with(&word));
        assert!(word.len() > prev);
        prev = word.len();
    }
});
