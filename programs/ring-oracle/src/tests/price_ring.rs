use crate::constants::RING_CAPACITY;
use crate::errors::OracleError;
use crate::state::{PricePoint, PriceRing};

fn fresh_ring() -> Box<PriceRing> {
    Box::new(PriceRing {
        capacity: RING_CAPACITY as u32,
        head: 0,
        bump: 255,
        _padding: [0; 7],
        points: [PricePoint::default(); RING_CAPACITY],
    })
}

fn sample(n: u64) -> PricePoint {
    PricePoint {
        slot: 1_000 + n,
        price: 1 + n,
    }
}

#[test]
fn append_writes_at_head_then_advances() {
    let mut ring = fresh_ring();

    for n in 0..5u64 {
        let head_before = ring.head;
        ring.append(sample(n)).unwrap();
        assert_eq!(ring.head, head_before + 1);
        assert_eq!(ring.points[head_before as usize].slot, sample(n).slot);
        assert_eq!(ring.points[head_before as usize].price, sample(n).price);
    }
    assert_eq!(ring.head, 5);
}

#[test]
fn second_append_leaves_first_sample_untouched() {
    let mut ring = fresh_ring();

    ring.append(sample(0)).unwrap();
    ring.append(sample(1)).unwrap();

    assert_eq!(ring.head, 2);
    assert_eq!(ring.points[0].price, sample(0).price);
    assert_eq!(ring.points[0].slot, sample(0).slot);
    assert_eq!(ring.points[1].price, sample(1).price);
}

#[test]
fn full_pass_writes_every_slot_and_returns_head_to_zero() {
    let mut ring = fresh_ring();

    for n in 0..RING_CAPACITY as u64 {
        ring.append(sample(n)).unwrap();
    }

    assert_eq!(ring.head, 0);
    for (i, point) in ring.points.iter().enumerate() {
        assert_eq!(point.price, sample(i as u64).price);
    }
}

#[test]
fn wrap_around_overwrites_oldest_samples_only() {
    let mut ring = fresh_ring();
    let extra = 5u64;

    for n in 0..RING_CAPACITY as u64 + extra {
        ring.append(sample(n)).unwrap();
    }

    assert_eq!(ring.head, extra as u32);
    // Slots below head hold the newest samples, everything above still holds
    // the previous pass.
    for i in 0..extra {
        assert_eq!(ring.points[i as usize].price, sample(RING_CAPACITY as u64 + i).price);
    }
    for i in extra..RING_CAPACITY as u64 {
        assert_eq!(ring.points[i as usize].price, sample(i).price);
    }
}

#[test]
fn append_rejects_zero_price_without_mutating() {
    let mut ring = fresh_ring();
    ring.append(sample(0)).unwrap();

    let result = ring.append(PricePoint { slot: 2_000, price: 0 });

    assert_eq!(result, Err(OracleError::InvalidPrice.into()));
    assert_eq!(ring.head, 1);
    assert_eq!(ring.points[1].slot, 0);
}

#[test]
fn append_rejects_capacity_mismatch() {
    let mut ring = fresh_ring();
    ring.capacity = 16;

    let result = ring.append(sample(0));

    assert_eq!(result, Err(OracleError::MalformedStore.into()));
    assert_eq!(ring.head, 0);
}

#[test]
fn append_rejects_out_of_range_head() {
    let mut ring = fresh_ring();
    ring.head = RING_CAPACITY as u32;

    assert_eq!(ring.append(sample(0)), Err(OracleError::MalformedStore.into()));
}

#[test]
fn latest_is_none_on_fresh_ring() {
    assert!(fresh_ring().latest().is_none());
}

#[test]
fn latest_tracks_most_recent_write() {
    let mut ring = fresh_ring();

    ring.append(sample(0)).unwrap();
    assert_eq!(ring.latest().unwrap().price, sample(0).price);

    ring.append(sample(1)).unwrap();
    assert_eq!(ring.latest().unwrap().price, sample(1).price);
}

#[test]
fn latest_survives_wrap_around() {
    let mut ring = fresh_ring();

    for n in 0..RING_CAPACITY as u64 {
        ring.append(sample(n)).unwrap();
    }
    // head is back at zero, the newest sample sits in the last slot
    assert_eq!(ring.head, 0);
    assert_eq!(
        ring.latest().unwrap().price,
        sample(RING_CAPACITY as u64 - 1).price
    );

    ring.append(sample(RING_CAPACITY as u64)).unwrap();
    assert_eq!(
        ring.latest().unwrap().price,
        sample(RING_CAPACITY as u64).price
    );
}
