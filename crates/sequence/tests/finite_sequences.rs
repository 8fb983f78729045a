//! Behaviour of the finite sequences at and beyond their last element.

use carpe_sequence::{EULER_DIGITS, PERFECT_NUMBERS, PI_DIGITS, Sequence, prefixes};

#[test]
fn pi_exhaustion_is_best_effort() {
    let last = prefixes(PI_DIGITS).last().unwrap();
    for n in [last - 1, last, last + 1, i64::MAX] {
        let hit = Sequence::Pi.next_after(n).unwrap();
        assert_eq!(hit.value(), last);
        assert_eq!(hit.ordinal(), PI_DIGITS.len() as u64);
    }
}

#[test]
fn euler_exhaustion_is_best_effort() {
    let last = prefixes(EULER_DIGITS).last().unwrap();
    let hit = Sequence::Euler.next_after(last + 10).unwrap();
    assert_eq!(hit.value(), last);
    assert_eq!(hit.days_after(last + 10), -10);
}

#[test]
fn perfect_ordinals_are_zero_based() {
    for (idx, &value) in PERFECT_NUMBERS.iter().enumerate() {
        let hit = Sequence::Perfect.next_after(value - 1).unwrap();
        assert_eq!(hit.value(), value);
        assert_eq!(hit.ordinal(), idx as u64);
    }
}

#[test]
fn perfect_has_no_result_past_table() {
    let last = *PERFECT_NUMBERS.last().unwrap();
    assert_eq!(Sequence::Perfect.next_after(last), None);
}
