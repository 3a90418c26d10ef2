// ==============================================
// LRU BEHAVIOR SCENARIOS (integration)
// ==============================================
//
// End-to-end recency behavior of the item cache: fill/evict sequences,
// ordering laws, miss purity, and callback error propagation. Structural
// details (relinking, arena reuse) are covered by the unit tests next to the
// data structures.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lrukit::error::LruError;
use lrukit::lru::LruCache;
use lrukit::traits::{LruItem, ReadOnlyLru};

#[derive(Debug, Clone, PartialEq)]
struct Record {
    id: i64,
    revision: u32,
}

impl Record {
    fn new(id: i64) -> Self {
        Self { id, revision: 0 }
    }
}

impl LruItem for Record {
    type Key = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

fn fill(cache: &mut LruCache<Record>, ids: &[i64]) {
    for &id in ids {
        let (inserted, evicted) = cache.set(Record::new(id)).unwrap();
        assert!(inserted, "id {id} should have been new");
        assert!(evicted.is_none(), "no eviction expected while filling");
    }
}

#[test]
fn fill_below_capacity_keeps_insertion_order() {
    // Capacity 5; insert 11,22,33,44.
    let mut cache = LruCache::new(5);
    fill(&mut cache, &[11, 22, 33, 44]);

    assert_eq!(cache.len(), 4);
    assert!(!cache.is_full());
    assert_eq!(cache.newest(), Some(44));
    assert_eq!(cache.oldest(), Some(11));
}

#[test]
fn reaching_capacity_exactly_does_not_evict() {
    let mut cache = LruCache::new(5);
    fill(&mut cache, &[11, 22, 33, 44, 55]);

    assert_eq!(cache.len(), 5);
    assert!(cache.is_full());
    assert_eq!(cache.newest(), Some(55));
    assert_eq!(cache.oldest(), Some(11));
}

#[test]
fn exceeding_capacity_evicts_the_oldest_only() {
    let dropped = Arc::new(AtomicI64::new(0));
    let seen = Arc::clone(&dropped);
    let mut cache = LruCache::with_evict(5, move |record: &Record| {
        seen.store(record.id, Ordering::SeqCst);
        Ok(())
    });
    fill(&mut cache, &[11, 22, 33, 44, 55]);

    let oldest_before = cache.oldest();
    let (inserted, evicted) = cache.set(Record::new(66)).unwrap();

    assert!(inserted);
    assert_eq!(evicted.as_ref().map(|r| r.id), Some(11));
    assert_eq!(evicted.map(|r| r.id), oldest_before);
    assert_eq!(dropped.load(Ordering::SeqCst), 11);
    assert_eq!(cache.len(), 5);
    assert_eq!(cache.newest(), Some(66));
    assert_eq!(cache.oldest(), Some(22));
}

#[test]
fn get_promotes_without_changing_count() {
    let mut cache = LruCache::new(5);
    fill(&mut cache, &[11, 22, 33, 44, 55]);
    cache.set(Record::new(66)).unwrap(); // evicts 11

    assert_eq!(cache.get(&33).map(|r| r.id), Some(33));
    assert_eq!(cache.newest(), Some(33));
    assert_eq!(cache.len(), 5);
}

#[test]
fn pop_oldest_drains_in_lru_order_then_errors() {
    let mut cache = LruCache::new(2);
    fill(&mut cache, &[11, 22]);

    assert_eq!(cache.pop_oldest().unwrap().id, 11);
    assert_eq!(cache.pop_oldest().unwrap().id, 22);
    assert!(matches!(cache.pop_oldest(), Err(LruError::EmptyCache)));
}

#[test]
fn find_position_tracks_reinsertion() {
    let mut cache = LruCache::new(2);

    cache.set(Record::new(11)).unwrap();
    assert_eq!(cache.find_position(&11), Some(0));

    cache.set(Record::new(22)).unwrap();
    assert_eq!(cache.find_position(&11), Some(1));
    assert_eq!(cache.find_position(&22), Some(0));

    cache.set(Record::new(11)).unwrap();
    assert_eq!(cache.find_position(&11), Some(0));
}

#[test]
fn miss_never_mutates_order() {
    let mut cache = LruCache::new(3);
    fill(&mut cache, &[1, 2, 3]);

    let (newest, oldest, len) = (cache.newest(), cache.oldest(), cache.len());
    assert!(cache.get(&99).is_none());
    assert_eq!(cache.find_position(&99), None);

    assert_eq!(cache.newest(), newest);
    assert_eq!(cache.oldest(), oldest);
    assert_eq!(cache.len(), len);
}

#[test]
fn set_or_get_always_makes_key_newest() {
    let mut cache = LruCache::new(4);
    fill(&mut cache, &[1, 2, 3, 4]);

    cache.set(Record::new(2)).unwrap();
    assert_eq!(cache.newest(), Some(2));

    cache.get(&3);
    assert_eq!(cache.newest(), Some(3));

    cache.touch(&1);
    assert_eq!(cache.newest(), Some(1));
}

#[test]
fn retouching_the_front_never_evicts() {
    let mut cache = LruCache::new(2);
    fill(&mut cache, &[1, 2]);

    for _ in 0..10 {
        let (inserted, evicted) = cache.set(Record::new(2)).unwrap();
        assert!(!inserted);
        assert!(evicted.is_none());
        assert_eq!(cache.len(), 2);
    }
}

#[test]
fn set_with_existing_key_replaces_payload() {
    let mut cache = LruCache::new(2);
    cache.set(Record { id: 7, revision: 1 }).unwrap();
    cache.set(Record { id: 7, revision: 2 }).unwrap();

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.peek(&7).map(|r| r.revision), Some(2));
}

#[test]
fn callback_failure_surfaces_but_removal_stands() {
    let mut cache = LruCache::with_evict(2, |record: &Record| {
        if record.id == 1 {
            Err("downstream rejected writeback".into())
        } else {
            Ok(())
        }
    });
    fill(&mut cache, &[1, 2]);

    let err = cache.set(Record::new(3)).unwrap_err();
    match &err {
        LruError::EvictionCallback(source) => {
            assert!(source.to_string().contains("rejected"));
        },
        other => panic!("unexpected error: {other:?}"),
    }

    // The victim is already gone and the new entry is in.
    assert!(!cache.contains(&1));
    assert!(cache.contains(&3));
    assert_eq!(cache.len(), 2);

    // remove() propagates the same way.
    cache.remove(&2).unwrap();
    cache.set(Record::new(1)).unwrap();
    assert!(cache.remove(&1).is_err());
    assert!(!cache.contains(&1));
}

#[test]
fn count_never_exceeds_capacity_under_mixed_operations() {
    let mut rng = StdRng::seed_from_u64(0x1ec4);
    let mut cache = LruCache::new(8);

    for _ in 0..5_000 {
        let key = rng.gen_range(0..32i64);
        match rng.gen_range(0..5u8) {
            0 | 1 => {
                cache.set(Record::new(key)).unwrap();
                assert_eq!(cache.newest(), Some(key));
            },
            2 => {
                if cache.get(&key).is_some() {
                    assert_eq!(cache.newest(), Some(key));
                }
            },
            3 => {
                cache.remove(&key).unwrap();
                assert!(!cache.contains(&key));
            },
            _ => {
                cache.touch(&key);
            },
        }
        assert!(cache.len() <= cache.capacity());
    }
}
