#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::key_lru::KeyLru;
use lrukit::traits::ReadOnlyLru;

// Fuzz arbitrary operation sequences on the bare-key LRU
//
// Tests random sequences of touch, remove, pop_oldest, find_position and
// clear operations against the count/capacity and recency invariants.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // Small capacities keep eviction hot.
    let capacity = usize::from(data[0] % 8) + 1;
    let mut lru: KeyLru<u32> = KeyLru::new(capacity);

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 6;
        let key = u32::from(data[idx + 1] % 32);

        match op {
            0 | 1 => {
                // touch
                let was_present = lru.contains(&key);
                let old_len = lru.len();
                let (inserted, evicted) = lru.touch(key).unwrap();

                assert_eq!(inserted, !was_present);
                assert_eq!(lru.newest(), Some(key));
                assert_eq!(lru.find_position(&key), Some(0));
                if let Some(victim) = evicted {
                    assert!(was_present || old_len == capacity);
                    assert!(!lru.contains(&victim));
                }
            }
            2 => {
                // remove
                let was_present = lru.contains(&key);
                let removed = lru.remove(&key).unwrap();

                assert_eq!(removed, was_present);
                assert!(!lru.contains(&key));
            }
            3 => {
                // pop_oldest
                let oldest = lru.oldest();
                match lru.pop_oldest() {
                    Ok(popped) => {
                        assert_eq!(Some(popped), oldest);
                        assert!(!lru.contains(&popped));
                    }
                    Err(err) => {
                        assert!(err.is_empty_cache());
                        assert!(lru.is_empty());
                    }
                }
            }
            4 => {
                // find_position agrees with contains
                match lru.find_position(&key) {
                    Some(pos) => {
                        assert!(lru.contains(&key));
                        assert!(pos < lru.len());
                    }
                    None => assert!(!lru.contains(&key)),
                }
            }
            5 => {
                lru.clear();
                assert!(lru.is_empty());
                assert_eq!(lru.newest(), None);
                assert_eq!(lru.oldest(), None);
            }
            _ => unreachable!(),
        }

        // Basic invariants after every operation
        assert!(lru.len() <= capacity);
        assert_eq!(lru.keys().len(), lru.len());
        if lru.is_empty() {
            assert_eq!(lru.newest(), None);
            assert_eq!(lru.oldest(), None);
        } else {
            assert!(lru.newest().is_some());
            assert!(lru.oldest().is_some());
            if lru.len() == 1 {
                assert_eq!(lru.newest(), lru.oldest());
            }
        }

        idx += 2;
    }
});
