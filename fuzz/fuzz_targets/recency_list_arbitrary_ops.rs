#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::RecencyList;

// Fuzz arbitrary operation sequences on RecencyList
//
// Tests random sequences of push_front, pop_back, move_to_front, remove and
// clear against length tracking and front/back consistency.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut list: RecencyList<u32> = RecencyList::new();
    let mut live_ids = Vec::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 5;
        let value = u32::from(data[idx + 1]);

        match op {
            0 => {
                // push_front
                let id = list.push_front(value);
                live_ids.push(id);

                assert_eq!(list.front(), Some(&value));
                assert_eq!(list.front_id(), Some(id));
                assert_eq!(list.get(id), Some(&value));
            }
            1 => {
                // pop_back
                let old_len = list.len();
                let back_id = list.back_id();
                if let Some(_popped) = list.pop_back() {
                    assert_eq!(list.len(), old_len - 1);
                    live_ids.retain(|id| Some(*id) != back_id);
                } else {
                    assert_eq!(old_len, 0);
                }
            }
            2 => {
                // move_to_front
                if !live_ids.is_empty() {
                    let id = live_ids[(value as usize) % live_ids.len()];
                    assert!(list.move_to_front(id));
                    assert_eq!(list.front_id(), Some(id));
                }
            }
            3 => {
                // remove
                if !live_ids.is_empty() {
                    let pick = (value as usize) % live_ids.len();
                    let id = live_ids.swap_remove(pick);

                    let old_len = list.len();
                    assert!(list.remove(id).is_some());
                    assert_eq!(list.len(), old_len - 1);
                    assert_eq!(list.get(id), None);
                }
            }
            4 => {
                list.clear();
                live_ids.clear();

                assert!(list.is_empty());
                assert_eq!(list.front(), None);
                assert_eq!(list.back(), None);
            }
            _ => unreachable!(),
        }

        // Length agrees with the set of live handles and with iteration.
        assert_eq!(list.len(), live_ids.len());
        assert_eq!(list.iter().count(), list.len());
        if list.is_empty() {
            assert_eq!(list.front_id(), None);
            assert_eq!(list.back_id(), None);
        }

        idx += 2;
    }
});
