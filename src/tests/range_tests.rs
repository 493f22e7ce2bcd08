// src/tests/range_tests.rs - BitRange construction and iteration

use crate::error::Error;
use crate::position::BitPosition;
use crate::range::BitRange;

#[test]
fn test_range_from_two_positions() {
    let range = BitRange::new(BitPosition::new(5, 1), BitPosition::new(5, 3));
    assert_eq!(range.start(), BitPosition::new(5, 1));
    assert_eq!(range.end(), BitPosition::new(5, 3));
    assert_eq!(range.len(), 3);
}

#[test]
fn test_range_from_count() -> Result<(), Error> {
    let range = BitRange::with_count(BitPosition::new(5, 1), 3)?;
    assert_eq!(range.end(), BitPosition::new(5, 3));

    let range = BitRange::with_count(BitPosition::new(0, 6), 4)?;
    assert_eq!(range.end(), BitPosition::new(1, 1));
    assert_eq!(range.len(), 4);

    let range = BitRange::with_count(BitPosition::ZERO, 1)?;
    assert_eq!(range.start(), range.end());
    Ok(())
}

#[test]
fn test_range_from_zero_count_is_rejected() {
    assert_eq!(
        BitRange::with_count(BitPosition::new(3, 0), 0),
        Err(Error::EmptyRange)
    );
}

#[test]
fn test_default_range_covers_first_bit() {
    let range = BitRange::default();
    assert_eq!(range.start(), BitPosition::ZERO);
    assert_eq!(range.end(), BitPosition::ZERO);
    assert_eq!(range.len(), 1);
}

#[test]
fn test_start_after_end_is_empty() {
    let range = BitRange::new(BitPosition::new(2, 0), BitPosition::new(1, 7));
    assert!(range.is_empty());
    assert_eq!(range.len(), 0);
    assert_eq!(range.iter().count(), 0);
    assert!(!range.contains(BitPosition::new(2, 0)));
}

#[test]
fn test_iteration_crosses_byte_boundary() {
    let range = BitRange::from(BitPosition::new(0, 6)..=BitPosition::new(1, 1));
    let positions: Vec<_> = range.into_iter().collect();
    assert_eq!(
        positions,
        vec![
            BitPosition::new(0, 6),
            BitPosition::new(0, 7),
            BitPosition::new(1, 0),
            BitPosition::new(1, 1),
        ]
    );
    assert_eq!(range.iter().size_hint(), (4, Some(4)));
}

#[test]
fn test_iteration_ending_at_max_stops() {
    let range = BitRange::new(BitPosition::new(u32::MAX, 6), BitPosition::MAX);
    assert_eq!(range.iter().count(), 2);
}

#[test]
fn test_contains() {
    let range = BitRange::new(BitPosition::new(1, 4), BitPosition::new(3, 2));
    assert!(range.contains(BitPosition::new(1, 4)));
    assert!(range.contains(BitPosition::new(2, 0)));
    assert!(range.contains(BitPosition::new(3, 2)));
    assert!(!range.contains(BitPosition::new(1, 3)));
    assert!(!range.contains(BitPosition::new(3, 3)));
}

#[test]
fn test_display() {
    let range = BitRange::new(BitPosition::new(5, 1), BitPosition::new(5, 3));
    assert_eq!(range.to_string(), "5.1 .. 5.3");
}

#[test]
fn test_unnormalized_ends_are_folded() {
    let range = BitRange::new(BitPosition::new(0, 9), BitPosition::new(1, 0));
    assert_eq!(range.start(), BitPosition::new(1, 1));
    assert_eq!(range.end(), BitPosition::new(1, 0));
    assert!(range.is_empty());
    assert_eq!(range.len(), 0);
    assert_eq!(range.iter().count(), 0);

    let range = BitRange::new(BitPosition::new(0, 8), BitPosition::new(1, 2));
    assert_eq!(range.len(), 3);
    assert!(range.contains(BitPosition::new(1, 0)));
    assert!(!range.contains(BitPosition::new(1, 3)));
}

#[test]
fn test_range_from_count_at_unnormalized_start() -> Result<(), Error> {
    let range = BitRange::with_count(BitPosition::new(0, 12), 3)?;
    assert_eq!(range.start(), BitPosition::new(1, 4));
    assert_eq!(range.end(), BitPosition::new(1, 6));
    assert_eq!(range.len(), 3);
    assert_eq!(range.to_string(), "1.4 .. 1.6");
    Ok(())
}
