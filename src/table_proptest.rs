#![cfg(test)]

// Property tests for ChainTable kept inside the crate so they can check the
// bucket layout directly, not just the public results.

use crate::{ChainTable, Config, PutOutcome};
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, String),
    Get(usize),
    Delete(usize),
    Contains(String),
}

fn arb_scenario(key: &'static str) -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec(key, 1..=24).prop_flat_map(move |pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            3 => (idx.clone(), "[a-z0-9]{0,6}").prop_map(|(i, v)| OpI::Put(i, v)),
            1 => idx.clone().prop_map(OpI::Get),
            1 => idx.clone().prop_map(OpI::Delete),
            1 => key.prop_map(OpI::Contains),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

/// Runs `ops` against `sut` and a `HashMap` model, checking results and the
/// structural invariants after every step. `may_degrade` allows
/// `PutOutcome::Degraded` for tables with a bucket cap.
fn run(
    mut sut: ChainTable,
    pool: &[String],
    ops: Vec<OpI>,
    may_degrade: bool,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, String> = HashMap::new();
    let initial = sut.capacity();
    let lf = sut.config().get_max_load_factor();

    for op in ops {
        let before_cap = sut.capacity();
        match op {
            OpI::Put(i, v) => {
                let k = &pool[i];
                let already = model.contains_key(k);
                let len_before = sut.len();
                let outcome = sut.put(k, &v).expect("no allocation failure");
                match outcome {
                    PutOutcome::Updated => {
                        prop_assert!(already, "update only for existing keys");
                        prop_assert_eq!(sut.len(), len_before);
                        prop_assert_eq!(sut.capacity(), before_cap, "update must not grow");
                    }
                    PutOutcome::Inserted => {
                        prop_assert!(!already, "insert only for new keys");
                        prop_assert_eq!(sut.len(), len_before + 1);
                        prop_assert!(sut.load_factor() < lf);
                    }
                    PutOutcome::Degraded(_) => {
                        prop_assert!(may_degrade, "unexpected degraded growth");
                        prop_assert!(!already);
                        prop_assert_eq!(sut.len(), len_before + 1);
                        prop_assert_eq!(sut.capacity(), before_cap);
                    }
                }
                model.insert(k.clone(), v);
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k).map(String::as_str));
            }
            OpI::Delete(i) => {
                let k = &pool[i];
                let len_before = sut.len();
                match (sut.delete(k), model.remove(k)) {
                    (Some((kk, vv)), Some(mv)) => {
                        prop_assert_eq!(&kk, k);
                        prop_assert_eq!(vv, mv);
                        prop_assert_eq!(sut.len(), len_before - 1);
                    }
                    (None, None) => prop_assert_eq!(sut.len(), len_before),
                    (s, m) => prop_assert!(false, "delete mismatch: {:?} vs {:?}", s, m),
                }
                prop_assert!(sut.get(k).is_none());
                prop_assert_eq!(sut.capacity(), before_cap, "delete must not shrink");
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
        }

        // Post-conditions after each op
        sut.check_invariants();
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert!(sut.capacity() >= before_cap);
        prop_assert!(sut.capacity() % initial == 0);
        prop_assert!((sut.capacity() / initial).is_power_of_two());
    }

    // Every key the model holds is still readable after all the growth.
    for (k, v) in &model {
        prop_assert_eq!(sut.get(k), Some(v.as_str()));
    }
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `put` reports Inserted exactly for absent keys and Updated otherwise.
// - `get`/`contains_key` agree with the model; `delete` hands back the model's pair.
// - Every entry sits in the chain of its own bucket; keys never repeat.
// - Capacity only doubles, never shrinks; load factor stays below the threshold.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario("[a-z]{0,5}")) {
        run(ChainTable::with_capacity(4).unwrap(), &pool, ops, false)?;
    }
}

// Property: same invariants starting from one bucket with a tiny key
// alphabet, so chains are long and growth happens many times.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario("[ab]{0,4}")) {
        run(ChainTable::with_capacity(1).unwrap(), &pool, ops, false)?;
    }
}

// Property: with a bucket cap the table keeps answering correctly once it
// can no longer grow and runs above its load factor.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_bucket_cap((pool, ops) in arb_scenario("[a-z]{0,3}")) {
        let sut = Config::new().initial_capacity(2).max_buckets(4).build().unwrap();
        run(sut, &pool, ops, true)?;
    }
}
