use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;

fn policy(initial: usize) -> GrowthPolicy {
    let Some(initial) = NonZeroUsize::new(initial) else {
        panic!("initial capacity must be nonzero");
    };
    GrowthPolicy::new(initial)
}

fn seq<T>(policy: GrowthPolicy) -> TokenSeq<T> {
    match TokenSeq::with_policy(policy) {
        Ok(seq) => seq,
        Err(e) => panic!("reservation failed: {e}"),
    }
}

#[test]
fn default_policy_starts_at_sixteen() {
    let policy = GrowthPolicy::default();
    assert_eq!(policy.initial_capacity().get(), 16);
    assert_eq!(policy.max_capacity(), None);

    let seq: TokenSeq<String> = seq(policy);
    assert_eq!(seq.len(), 0);
    assert!(seq.is_empty());
    assert_eq!(seq.capacity(), 16);
}

#[test]
fn capacity_doubles_when_full() {
    let mut seq = seq(policy(2));
    let mut capacities = Vec::new();
    for i in 0..9 {
        assert_eq!(seq.push(Some(i)), Ok(()));
        capacities.push(seq.capacity());
    }
    assert_eq!(capacities, [2, 2, 4, 4, 8, 8, 8, 8, 16]);
    assert_eq!(seq.len(), 9);
}

#[test]
fn order_and_none_slots_are_preserved() {
    let mut seq = seq(policy(1));
    for slot in [Some("a"), None, Some("b")] {
        assert_eq!(seq.push(slot), Ok(()));
    }
    assert_eq!(seq.as_slice(), &[Some("a"), None, Some("b")]);
    assert_eq!(seq.get(0), Some(Some(&"a")));
    assert_eq!(seq.get(1), Some(None));
    assert_eq!(seq.get(3), None);
    assert_eq!(seq[2], Some("b"));
    let borrowed: Vec<_> = (&seq).into_iter().copied().collect();
    assert_eq!(borrowed, seq.into_vec());
}

#[test]
fn initial_reservation_over_limit_fails() {
    let result: Result<TokenSeq<u8>, _> = TokenSeq::with_policy(policy(32).with_max_capacity(16));
    let Err(err) = result else {
        panic!("expected LimitExceeded");
    };
    assert_eq!(
        err,
        GrowError::LimitExceeded {
            requested: 32,
            limit: 16
        }
    );
}

#[test]
fn initial_reservation_too_large_for_allocator_fails() {
    let result: Result<TokenSeq<String>, _> = TokenSeq::with_policy(policy(usize::MAX));
    let Err(err) = result else {
        panic!("expected Alloc");
    };
    assert_eq!(
        err,
        GrowError::Alloc {
            requested: usize::MAX
        }
    );
}

#[test]
fn failed_growth_drops_in_flight_slot_and_keeps_contents() {
    let payload = Rc::new(());
    let mut seq = seq(policy(2).with_max_capacity(2));
    assert_eq!(seq.push(Some(Rc::clone(&payload))), Ok(()));
    assert_eq!(seq.push(Some(Rc::clone(&payload))), Ok(()));
    assert_eq!(Rc::strong_count(&payload), 3);

    let err = seq.push(Some(Rc::clone(&payload)));
    assert_eq!(
        err,
        Err(GrowError::LimitExceeded {
            requested: 4,
            limit: 2
        })
    );
    // The in-flight clone is gone, the stored two remain.
    assert_eq!(Rc::strong_count(&payload), 3);
    assert_eq!(seq.len(), 2);
    assert_eq!(seq.capacity(), 2);
}

#[test]
fn rollback_releases_every_payload() {
    let payload = Rc::new(());
    let mut seq = seq(policy(4));
    for _ in 0..10 {
        assert_eq!(seq.push(Some(Rc::clone(&payload))), Ok(()));
    }
    assert_eq!(seq.push(None), Ok(()));
    assert_eq!(Rc::strong_count(&payload), 11);

    assert_eq!(seq.rollback(), 11);
    assert_eq!(Rc::strong_count(&payload), 1);
}

#[test]
fn drop_releases_every_payload() {
    let payload = Rc::new(());
    {
        let mut seq = seq(policy(1));
        for _ in 0..5 {
            assert_eq!(seq.push(Some(Rc::clone(&payload))), Ok(()));
        }
        assert_eq!(Rc::strong_count(&payload), 6);
    }
    assert_eq!(Rc::strong_count(&payload), 1);
}

#[test]
fn doubling_overflow_is_an_error() {
    let capacity = usize::MAX / 2 + 1;
    let mut seq: TokenSeq<()> = TokenSeq {
        items: Vec::new(),
        capacity,
        policy: GrowthPolicy::default(),
    };
    assert_eq!(seq.grow(), Err(GrowError::Overflow { capacity }));
    assert_eq!(seq.capacity(), capacity);
}

#[test]
fn debug_shows_policy_and_items() {
    let mut seq = seq(policy(2).with_max_capacity(8));
    assert_eq!(seq.push(Some("a")), Ok(()));
    assert_eq!(
        format!("{seq:?}"),
        "TokenSeq { len: 1, capacity: 2, policy: GrowthPolicy { initial_capacity: 2, \
         max_capacity: Some(8) }, items: [Some(\"a\")] }"
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        GrowError::LimitExceeded {
            requested: 32,
            limit: 16
        }
        .to_string(),
        "capacity 32 exceeds the configured limit of 16"
    );
    assert_eq!(
        GrowError::Overflow { capacity: 8 }.to_string(),
        "capacity overflow doubling 8"
    );
    assert_eq!(
        GrowError::Alloc { requested: 64 }.to_string(),
        "allocation of 64 slots failed"
    );
}
