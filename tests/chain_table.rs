// ChainTable unit test suite (public API).
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The core invariants exercised:
// - Round-trip: a put value is what get returns.
// - Uniqueness: putting an existing key updates it in place.
// - Counting: len moves by exactly one per insert/delete, never on update.
// - Growth: reaching the load factor doubles capacity without losing entries.
// - Deletion: removed keys are gone; misses change nothing; no shrinking.
use chain_table::{AllocErrorKind, ChainTable, Config, PutOutcome, DEFAULT_CAPACITY};

// Test: the four-key scenario from the demo program.
// Assumes: create(4) with the default 0.75 load factor.
// Verifies: growth to 8 buckets happens along the way; all values survive.
#[test]
fn four_keys_grow_to_eight_buckets() {
    let mut t = ChainTable::with_capacity(4).unwrap();
    let pairs = [
        ("name", "Andrea"),
        ("age", "21"),
        ("city", "Mexico"),
        ("country", "Mexico"),
    ];
    for (k, v) in pairs {
        assert_eq!(t.put(k, v).unwrap(), PutOutcome::Inserted);
    }
    assert_eq!(t.len(), 4);
    assert_eq!(t.capacity(), 8);
    for (k, v) in pairs {
        assert_eq!(t.get(k), Some(v));
    }
}

// Test: insert then update of one key.
// Assumes: create(10) has room, no growth involved.
// Verifies: Inserted then Updated; len stays 1; latest value wins.
#[test]
fn insert_then_update_same_key() {
    let mut t = ChainTable::with_capacity(10).unwrap();
    assert_eq!(t.put("foo", "bar").unwrap(), PutOutcome::Inserted);
    assert_eq!(t.len(), 1);
    assert_eq!(t.put("foo", "baz").unwrap(), PutOutcome::Updated);
    assert_eq!(t.len(), 1);
    assert_eq!(t.get("foo"), Some("baz"));
}

// Test: a short demo sequence.
// Verifies: capacity and len after two inserts into ten buckets.
#[test]
fn demo_program_sequence() {
    let mut t = ChainTable::with_capacity(10).unwrap();
    assert_eq!(t.capacity(), 10);
    let _ = t.put("balls", "hot").unwrap();
    let _ = t.put("hot", "balls").unwrap();
    assert_eq!(t.len(), 2);
    assert_eq!(t.get("hot"), Some("balls"));
    t.destroy();
}

// Test: default capacity.
// Verifies: 0 and new() both mean 256 buckets.
#[test]
fn zero_means_default_capacity() {
    assert_eq!(ChainTable::with_capacity(0).unwrap().capacity(), DEFAULT_CAPACITY);
    assert_eq!(ChainTable::new().capacity(), 256);
    assert_eq!(Config::new().build().unwrap().capacity(), 256);
}

// Test: delete round trip.
// Verifies: delete returns the pair, len drops by one, get then misses,
// and a second delete misses without touching len.
#[test]
fn delete_after_put() {
    let mut t = ChainTable::with_capacity(8).unwrap();
    let _ = t.put("a", "1").unwrap();
    let _ = t.put("b", "2").unwrap();

    assert_eq!(t.delete("a"), Some(("a".to_string(), "1".to_string())));
    assert_eq!(t.len(), 1);
    assert_eq!(t.get("a"), None);
    assert!(!t.contains_key("a"));

    assert_eq!(t.delete("a"), None);
    assert_eq!(t.len(), 1);
    assert_eq!(t.get("b"), Some("2"));
}

// Test: reinserting a deleted key.
// Verifies: a fresh Inserted outcome and the new value.
#[test]
fn delete_then_reinsert() {
    let mut t = ChainTable::with_capacity(8).unwrap();
    let _ = t.put("k", "1").unwrap();
    let _ = t.delete("k").unwrap();
    assert_eq!(t.put("k", "2").unwrap(), PutOutcome::Inserted);
    assert_eq!(t.get("k"), Some("2"));
    assert_eq!(t.len(), 1);
}

// Test: growth sequence over many inserts.
// Assumes: doubling at len / capacity >= 0.75.
// Verifies: capacity is always initial * 2^k and every key stays readable.
#[test]
fn growth_keeps_all_entries() {
    let mut t = ChainTable::with_capacity(2).unwrap();
    let mut last = t.capacity();
    for i in 0..300 {
        let key = format!("k{i}");
        assert_eq!(t.put(&key, &format!("v{i}")).unwrap(), PutOutcome::Inserted);
        let cap = t.capacity();
        assert!(cap == last || cap == last * 2);
        last = cap;
        assert!(t.load_factor() < 0.75);
        for j in 0..=i {
            assert_eq!(t.get(&format!("k{j}")), Some(format!("v{j}").as_str()));
        }
    }
    assert_eq!(t.len(), 300);
    assert_eq!(t.capacity(), 512);
}

// Test: a table that cannot grow.
// Assumes: max_buckets equals the initial capacity.
// Verifies: Degraded outcome, entry kept, lookups still work above the load factor.
#[test]
fn capped_table_reports_degraded_growth() {
    let mut t = Config::new()
        .initial_capacity(2)
        .max_buckets(2)
        .build()
        .unwrap();
    assert_eq!(t.put("a", "1").unwrap(), PutOutcome::Inserted);
    let outcome = t.put("b", "2").unwrap();
    assert!(outcome.is_insert());
    match outcome {
        PutOutcome::Degraded(e) => {
            assert_eq!(e.kind(), &AllocErrorKind::CapacityOverflow);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    for i in 0..20 {
        let _ = t.put(&i.to_string(), "x").unwrap();
    }
    assert_eq!(t.capacity(), 2);
    assert_eq!(t.len(), 22);
    assert!(t.load_factor() > 10.0);
    assert_eq!(t.get("a"), Some("1"));
    assert_eq!(t.get("b"), Some("2"));
    assert_eq!(t.get("19"), Some("x"));
}

// Test: caller ownership.
// Verifies: the table keeps its own copies; the caller's strings can go away.
#[test]
fn table_copies_its_inputs() {
    let mut t = ChainTable::with_capacity(4).unwrap();
    {
        let key = String::from("owned-key");
        let value = String::from("owned-value");
        let _ = t.put(&key, &value).unwrap();
    }
    assert_eq!(t.get("owned-key"), Some("owned-value"));
}

// Test: keys are compared byte for byte.
// Verifies: case, trailing spaces and non-ASCII keys are distinct.
#[test]
fn keys_compare_exactly() {
    let mut t = ChainTable::with_capacity(4).unwrap();
    for k in ["key", "Key", "key ", "kéy", ""] {
        assert_eq!(t.put(k, k).unwrap(), PutOutcome::Inserted);
    }
    assert_eq!(t.len(), 5);
    for k in ["key", "Key", "key ", "kéy", ""] {
        assert_eq!(t.get(k), Some(k));
    }
    assert_eq!(t.get("KEY"), None);
}

// Test: Debug output.
// Verifies: only the counters are shown, never keys or values.
#[test]
fn debug_output() {
    let mut t = ChainTable::with_capacity(16).unwrap();
    let _ = t.put("password", "hunter2").unwrap();
    let s = format!("{t:?}");
    assert!(s.contains("len: 1"));
    assert!(s.contains("capacity: 16"));
    assert!(!s.contains("hunter2"));
}
