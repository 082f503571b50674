use louds_trie::{BitSequence, LinearRankSelect, LoudsTrie, RankSelectIndex};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_rank_select_property(bits in prop::collection::vec(any::<bool>(), 1..1200)) {
        let seq = BitSequence::from_bits(bits.iter().copied());
        let rs = RankSelectIndex::new(seq.clone());
        let naive = LinearRankSelect::new(seq);
        let len = bits.len();

        let mut prev1 = 0;
        let mut prev0 = 0;
        for pos in 0..len {
            let r1 = rs.rank1(pos).unwrap();
            let r0 = rs.rank0(pos).unwrap();
            prop_assert_eq!(r1 + r0, pos + 1);
            prop_assert!(r1 >= prev1);
            prop_assert!(r0 >= prev0);
            prev1 = r1;
            prev0 = r0;

            // Every bit is the r-th of its kind.
            if bits[pos] {
                prop_assert_eq!(rs.select1(r1), Some(pos));
            } else {
                prop_assert_eq!(rs.select0(r0), Some(pos));
            }
        }
        prop_assert!(rs.rank1(len).is_err());

        // Agree with the linear scan at sampled points.
        for pos in (0..len).step_by(17) {
            prop_assert_eq!(rs.rank1(pos).unwrap(), naive.rank1(pos).unwrap());
        }
        let ones = rs.count_ones();
        let zeros = rs.count_zeros();
        for k in (0..=ones + 1).step_by(7).chain([ones, ones + 1]) {
            prop_assert_eq!(rs.select1(k), naive.select1(k));
        }
        for k in (0..=zeros + 1).step_by(7).chain([zeros, zeros + 1]) {
            prop_assert_eq!(rs.select0(k), naive.select0(k));
        }
    }
}

fn keys() -> impl Strategy<Value = Vec<Vec<u8>>> {
    // A small alphabet forces shared prefixes.
    prop::collection::vec(prop::collection::vec(b'a'..=b'd', 1..7), 1..40)
}

fn normalized(keys: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let mut keys = keys.to_vec();
    keys.sort();
    keys.dedup();
    keys
}

proptest! {
    #[test]
    fn test_prefix_search_finds_exactly_the_stored_prefixes(
        keys in keys(),
        query in prop::collection::vec(b'a'..=b'd', 0..10),
    ) {
        let trie = LoudsTrie::new(&keys).unwrap();
        let stored = normalized(&keys);

        let mut expected: Vec<&Vec<u8>> =
            stored.iter().filter(|k| query.starts_with(k)).collect();
        expected.sort_by_key(|k| k.len());

        let hits = trie.common_prefix_search(&query).unwrap();
        let words: Vec<Vec<u8>> = hits.iter().map(|&id| trie.id2word(id).unwrap()).collect();
        prop_assert_eq!(words.iter().collect::<Vec<_>>(), expected);

        // Immutable: asking again gives the same answer.
        prop_assert_eq!(trie.common_prefix_search(&query).unwrap(), hits);
    }

    #[test]
    fn test_every_key_round_trips(keys in keys()) {
        let trie = LoudsTrie::new(&keys).unwrap();
        let stored = normalized(&keys);
        prop_assert_eq!(trie.num_keys(), stored.len());

        for key in &stored {
            let hits = trie.common_prefix_search(key).unwrap();
            let id = *hits.last().unwrap();
            prop_assert!(trie.is_terminal(id).unwrap());
            prop_assert_eq!(&trie.id2word(id).unwrap(), key);
        }
    }

    #[test]
    fn test_input_order_does_not_matter(
        (keys, shuffled) in keys().prop_flat_map(|k| (Just(k.clone()), Just(k).prop_shuffle())),
    ) {
        let a = LoudsTrie::new(&keys).unwrap();
        let b = LoudsTrie::new(&shuffled).unwrap();
        prop_assert_eq!(&a, &b);

        for id in 0..a.num_nodes() {
            prop_assert_eq!(a.id2word(id).unwrap(), b.id2word(id).unwrap());
        }
    }

    #[test]
    fn test_first_child_parent_inverse(keys in keys()) {
        let trie = LoudsTrie::new(&keys).unwrap();
        let lbs = trie.lbs();

        // Every node: the root plus each labelled node.
        let nodes = std::iter::once(0)
            .chain((0..trie.num_nodes()).map(|id| trie.node_id(id).unwrap()));
        for x in nodes {
            prop_assert!(lbs.get(x).unwrap());
            match trie.first_child(x).unwrap() {
                Some(child) => {
                    prop_assert_eq!(trie.parent(child).unwrap(), Some(x));
                    prop_assert!(child > x);
                }
                None => {
                    // A leaf's child run is the bare `0` right after the previous run.
                    let run_end = lbs.select0(lbs.rank1(x).unwrap()).unwrap();
                    prop_assert!(run_end + 1 == lbs.len() || !lbs.get(run_end + 1).unwrap());
                }
            }
        }
    }
}
