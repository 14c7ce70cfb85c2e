//! Member Store Tests
//!
//! Behaviour of the store against the sample roster, plus delivery order.

use std::sync::{Arc, Mutex};

use super::{MemberStore, Snapshot};
use crate::domain::{DomainError, Member, Summary};

/// Records every snapshot a listener receives
fn recorder(store: &MemberStore) -> (Arc<Mutex<Vec<Snapshot>>>, super::Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let sub = store.subscribe(move |snap| sink.lock().unwrap().push(snap.clone()));
    (seen, sub)
}

fn names(snap: &Snapshot) -> Vec<&str> {
    snap.members().iter().map(|m| m.name.as_str()).collect()
}

fn ids(snap: &Snapshot) -> Vec<u32> {
    snap.members().iter().map(|m| m.id).collect()
}

#[test]
fn test_sample_data() {
    let store = MemberStore::with_sample_data();
    let snap = store.snapshot();
    assert_eq!(snap.version(), 0);
    assert_eq!(
        snap.members(),
        &[
            Member::new(1, "Ava"),
            Member::new(2, "Ben"),
            Member::inactive(3, "Chris"),
        ]
    );
}

#[test]
fn test_add_appends_active_member() {
    let store = MemberStore::with_sample_data();

    assert_eq!(store.add("Dee"), Some(4));

    let snap = store.snapshot();
    assert_eq!(snap.members().last(), Some(&Member::new(4, "Dee")));
    assert_eq!(store.summary(), Summary { total: 4, active: 3 });
}

#[test]
fn test_add_trims_name() {
    let store = MemberStore::new();
    let id = store.add("  Eve \t").unwrap();
    assert_eq!(store.find(id).unwrap().name, "Eve");
}

#[test]
fn test_add_ids_strictly_increase() {
    let store = MemberStore::with_sample_data();
    let new_ids: Vec<u32> = ["Dee", "Eve", "Finn", "Gus"]
        .iter()
        .filter_map(|name| store.add(name))
        .collect();

    assert_eq!(new_ids, vec![4, 5, 6, 7]);
    assert!(new_ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_ids_never_reused_after_remove() {
    let store = MemberStore::with_sample_data();
    let dee = store.add("Dee").unwrap();
    assert!(store.remove(dee));

    let eve = store.add("Eve").unwrap();
    assert!(eve > dee);
}

#[test]
fn test_blank_add_is_ignored() {
    let store = MemberStore::with_sample_data();
    let (seen, _sub) = recorder(&store);

    assert_eq!(store.add(""), None);
    assert_eq!(store.add("   "), None);

    assert_eq!(store.snapshot().len(), 3);
    assert_eq!(seen.lock().unwrap().len(), 1, "only the initial replay");
}

#[test]
fn test_rename() {
    let store = MemberStore::with_sample_data();

    assert!(store.rename(2, "Benjamin"));

    let ben = store.find(2).unwrap();
    assert_eq!(ben, Member::new(2, "Benjamin"));
    assert_eq!(names(&store.snapshot()), vec!["Ava", "Benjamin", "Chris"]);
}

#[test]
fn test_blank_rename_is_ignored() {
    let store = MemberStore::with_sample_data();
    let before = store.snapshot();

    assert!(!store.rename(2, ""));
    assert!(!store.rename(2, "  "));

    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_rename_unknown_id_is_ignored() {
    let store = MemberStore::with_sample_data();
    assert!(!store.rename(42, "Nobody"));
    assert_eq!(store.snapshot().version(), 0);
}

#[test]
fn test_toggle_active() {
    let store = MemberStore::with_sample_data();

    assert!(store.toggle_active(3));
    assert!(store.find(3).unwrap().active);

    assert!(store.toggle_active(3));
    assert!(!store.find(3).unwrap().active);
}

#[test]
fn test_toggle_unknown_id_is_ignored() {
    let store = MemberStore::with_sample_data();
    assert!(!store.toggle_active(99));
    assert_eq!(store.summary(), Summary { total: 3, active: 2 });
}

#[test]
fn test_remove_preserves_order() {
    let store = MemberStore::with_sample_data();

    assert!(store.remove(1));

    assert_eq!(ids(&store.snapshot()), vec![2, 3]);
    assert_eq!(names(&store.snapshot()), vec!["Ben", "Chris"]);
}

#[test]
fn test_remove_twice_is_idempotent() {
    let store = MemberStore::with_sample_data();
    let (seen, _sub) = recorder(&store);

    assert!(store.remove(2));
    assert!(!store.remove(2));

    assert_eq!(store.snapshot().len(), 2);
    // Replay plus one removal; the miss emits nothing
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[test]
fn test_subscribe_replays_current_snapshot() {
    let store = MemberStore::with_sample_data();
    store.add("Dee");
    store.toggle_active(1);
    store.remove(2);

    let (seen, _sub) = recorder(&store);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].version(), 3);
    assert_eq!(ids(&seen[0]), vec![1, 3, 4]);
    assert!(!seen[0].find(1).unwrap().active);
}

#[test]
fn test_subscribers_see_same_sequence() {
    let store = MemberStore::with_sample_data();
    let (first, _a) = recorder(&store);
    let (second, _b) = recorder(&store);

    store.add("Dee");
    store.rename(4, "Deirdre");
    store.remove(1);

    let first = first.lock().unwrap();
    let second = second.lock().unwrap();
    assert_eq!(*first, *second);
    let versions: Vec<u64> = first.iter().map(Snapshot::version).collect();
    assert_eq!(versions, vec![0, 1, 2, 3]);
}

#[test]
fn test_cancelled_subscription_stops_receiving() {
    let store = MemberStore::with_sample_data();
    let (seen, sub) = recorder(&store);

    store.add("Dee");
    sub.cancel();
    sub.cancel();
    store.add("Eve");

    assert!(!sub.is_active());
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[test]
fn test_listener_may_mutate_store() {
    let store = MemberStore::new();
    let (seen, _sub) = recorder(&store);

    // Greets every new member by adding a follow-up, once
    let handle = store.clone();
    let _greeter = store.subscribe(move |snap| {
        if snap.len() == 1 {
            handle.add("Second");
        }
    });

    store.add("First");

    assert_eq!(names(&store.snapshot()), vec!["First", "Second"]);
    let versions: Vec<u64> = seen.lock().unwrap().iter().map(Snapshot::version).collect();
    assert_eq!(versions, vec![0, 1, 2]);
}

#[test]
fn test_late_subscriber_skips_queued_snapshots() {
    let store = MemberStore::new();
    let late_seen = Arc::new(Mutex::new(Vec::new()));

    let handle = store.clone();
    let sink = late_seen.clone();
    let _spawner = store.subscribe(move |snap| {
        if snap.version() == 1 {
            // Queue another mutation, then subscribe before it is delivered
            handle.add("Queued");
            let sink = sink.clone();
            let _ = handle.subscribe(move |s: &Snapshot| sink.lock().unwrap().push(s.version()));
        }
    });

    store.add("First");

    assert_eq!(*late_seen.lock().unwrap(), vec![2]);
}

#[test]
fn test_with_members_continues_ids() {
    let store = MemberStore::with_members(vec![
        Member::new(10, " Zed "),
        Member::inactive(4, "Yan"),
    ])
    .unwrap();

    assert_eq!(store.find(10).unwrap().name, "Zed");
    assert_eq!(store.add("Xia"), Some(11));
    assert_eq!(ids(&store.snapshot()), vec![10, 4, 11]);
}

#[test]
fn test_with_members_rejects_bad_seed() {
    let err = MemberStore::with_members(vec![Member::new(1, "Ava"), Member::new(1, "Ben")])
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));

    let err = MemberStore::with_members(vec![Member::new(1, "  ")]).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[test]
fn test_empty_store_starts_at_one() {
    let store = MemberStore::new();
    assert!(store.snapshot().is_empty());
    assert_eq!(store.add("Ava"), Some(1));

    let store = MemberStore::with_members(Vec::new()).unwrap();
    assert_eq!(store.add("Ava"), Some(1));
}

#[test]
fn test_exhausted_ids_stop_adds() {
    let store = MemberStore::with_members(vec![Member::new(u32::MAX, "Last")]).unwrap();
    assert_eq!(store.add("Overflow"), None);
    assert_eq!(store.snapshot().len(), 1);
}

#[test]
fn test_cancel_during_delivery_skips_rest_of_it() {
    let store = MemberStore::new();
    let late = Arc::new(Mutex::new(None::<super::Subscription>));

    // Registered first, so it runs before the listener it cancels
    let target = late.clone();
    let _canceller = store.subscribe(move |snap| {
        if snap.version() == 1 {
            if let Some(sub) = target.lock().unwrap().as_ref() {
                sub.cancel();
            }
        }
    });
    let (seen, sub) = recorder(&store);
    *late.lock().unwrap() = Some(sub.clone());

    store.add("First");
    store.add("Second");

    let versions: Vec<u64> = seen.lock().unwrap().iter().map(Snapshot::version).collect();
    assert_eq!(versions, vec![0]);
    assert!(!sub.is_active());
}

#[test]
fn test_panicking_listener_does_not_stall_delivery() {
    let store = MemberStore::new();

    // Registered first, so the panic interrupts delivery before the recorder
    let _faulty = store.subscribe(|snap| {
        if snap.version() == 1 {
            panic!("listener failure");
        }
    });
    let (seen, _sub) = recorder(&store);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| store.add("A")));
    assert!(result.is_err());

    store.add("B");

    let versions: Vec<u64> = seen.lock().unwrap().iter().map(Snapshot::version).collect();
    assert_eq!(versions, vec![0, 1, 2]);
    assert_eq!(names(&store.snapshot()), vec!["A", "B"]);
}
