use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use timed_zones::{LowerBound, UpperBound, Zone, ZoneSet};

fn period(begin: f64, end: f64) -> ZoneSet<f64> {
    let mut set = ZoneSet::new();
    set.add_from_period(begin, end);
    set
}

fn universal() -> ZoneSet<f64> {
    let mut set = ZoneSet::new();
    set.add(Zone::universal());
    set
}

/// Equality of antichains as sets: mutual piecewise inclusion plus size.
fn assert_same_set(a: &ZoneSet<f64>, b: &ZoneSet<f64>) {
    assert!(
        a.includes(b) && b.includes(a),
        "sets differ:\n{}\nvs\n{}",
        a,
        b
    );
    assert_eq!(a.len(), b.len());
}

/// A small union of periods with half-integer endpoints, optionally
/// duration-restricted; always within the universal zone.
fn random_set(rng: &mut StdRng) -> ZoneSet<f64> {
    let mut set = ZoneSet::new();
    for _ in 0..rng.gen_range(1..=3) {
        let begin = rng.gen_range(0..20) as f64 / 2.0;
        let length = rng.gen_range(1..=12) as f64 / 2.0;
        set.add_from_period(begin, begin + length);
    }
    if rng.gen_bool(0.3) {
        let dmin = rng.gen_range(0..3) as f64 / 2.0;
        set = set.duration_restriction_values(dmin, dmin + rng.gen_range(1..=4) as f64);
    }
    set
}

#[test]
fn filter_drops_subsumed_zones() {
    let mut set = ZoneSet::new();
    set.add_values([0.0, 10.0, 0.0, 10.0, 0.0, 10.0], [true; 6]);
    set.add_values([1.0, 2.0, 3.0, 4.0, 2.0, 3.0], [true; 6]);

    let filtered = set.filter();
    assert_eq!(filtered.len(), 1);
    assert_eq!(
        filtered.zones()[0],
        Zone::from_values([0.0, 10.0, 0.0, 10.0, 0.0, 10.0], [true; 6])
    );
}

#[test]
fn filter_is_order_insensitive() {
    let mut forward = ZoneSet::new();
    forward.add_values([0.0, 10.0, 0.0, 10.0, 0.0, 10.0], [true; 6]);
    forward.add_values([1.0, 2.0, 3.0, 4.0, 2.0, 3.0], [true; 6]);

    let mut backward = ZoneSet::new();
    backward.add_values([1.0, 2.0, 3.0, 4.0, 2.0, 3.0], [true; 6]);
    backward.add_values([0.0, 10.0, 0.0, 10.0, 0.0, 10.0], [true; 6]);

    assert_eq!(forward.filter(), backward.filter());
}

#[test]
fn filter_yields_sorted_antichains() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..50 {
        let filtered = random_set(&mut rng).filter();
        for (z1, z2) in filtered.iter().tuple_windows() {
            assert_ne!(z1.bmin().cmp(z2.bmin()), std::cmp::Ordering::Greater);
        }
        for (z1, z2) in filtered.iter().tuple_combinations() {
            assert!(!Zone::includes(z1, z2));
            assert!(!Zone::includes(z2, z1));
        }
    }
}

#[test]
fn filter_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..50 {
        let filtered = random_set(&mut rng).filter();
        assert_eq!(filtered.filter(), filtered);
    }
}

#[test]
fn intersection_of_overlapping_periods() {
    assert_eq!(period(0.0, 2.0).intersection(&period(1.0, 3.0)), period(1.0, 2.0));
}

#[test]
fn intersection_of_disjoint_periods_is_empty() {
    assert!(period(0.0, 1.0).intersection(&period(2.0, 3.0)).is_empty());
}

#[test]
fn intersection_is_commutative_and_associative() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..30 {
        let a = random_set(&mut rng);
        let b = random_set(&mut rng);
        let c = random_set(&mut rng);
        assert_same_set(&a.intersection(&b), &b.intersection(&a));
        assert_same_set(
            &a.intersection(&b).intersection(&c).filter(),
            &a.intersection(&b.intersection(&c)).filter(),
        );
    }
}

#[test]
fn universal_is_an_intersection_identity() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..30 {
        let a = random_set(&mut rng);
        assert_same_set(&a.intersection(&universal()), &a.filter());
    }
}

#[test]
fn union_laws() {
    let mut rng = StdRng::seed_from_u64(4);
    let empty = ZoneSet::new();
    for _ in 0..30 {
        let a = random_set(&mut rng);
        let b = random_set(&mut rng);
        assert_same_set(&a.set_union(&b), &b.set_union(&a));
        assert_eq!(a.set_union(&empty), a.filter());
        assert!(a.set_union(&b).includes(&a.filter()));
    }
}

#[test]
fn concatenation_of_adjacent_periods() {
    let joined = period(0.0, 1.0).concatenation(&period(1.0, 2.0));
    let mut expected = ZoneSet::new();
    expected.add(Zone::make(
        LowerBound::Closed(0.0),
        UpperBound::Open(1.0),
        LowerBound::Open(1.0),
        UpperBound::Closed(2.0),
        LowerBound::Open(0.0),
        UpperBound::Closed(2.0),
    ));
    assert_eq!(joined, expected);
    assert!(period(0.0, 2.0).includes(&joined));
}

#[test]
fn concatenation_with_empty_is_empty() {
    let empty = ZoneSet::new();
    assert!(empty.concatenation(&period(0.0, 1.0)).is_empty());
    assert!(period(0.0, 1.0).concatenation(&empty).is_empty());
}

#[test]
fn concatenation_is_associative() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..30 {
        let a = random_set(&mut rng);
        let b = random_set(&mut rng);
        let c = random_set(&mut rng);
        assert_same_set(
            &a.concatenation(&b).concatenation(&c).filter(),
            &a.concatenation(&b.concatenation(&c)).filter(),
        );
    }
}

#[test]
fn complement_of_empty_is_universal() {
    let empty: ZoneSet<f64> = ZoneSet::new();
    assert_eq!(empty.complementation(), universal());
    assert!(universal().complementation().is_empty());
}

#[test]
fn complementation_excludes_exactly_the_set() {
    let a = period(1.0, 3.0);
    let complement = a.complementation();
    assert!(a.intersection(&complement).is_empty());
    // The member itself sits outside the complement.
    assert!(!complement.includes(&a));
}

#[test]
fn de_morgan() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..20 {
        let a = random_set(&mut rng);
        let b = random_set(&mut rng);
        assert_same_set(
            &a.set_union(&b).complementation(),
            &a.complementation().intersection(&b.complementation()).filter(),
        );
    }
}

#[test]
fn difference_laws() {
    let mut rng = StdRng::seed_from_u64(7);
    let empty = ZoneSet::new();
    for _ in 0..20 {
        let a = random_set(&mut rng);
        let b = random_set(&mut rng);
        let difference = a.set_difference(&b);
        assert!(a.filter().includes(&difference.filter()));
        assert!(difference.intersection(&b).is_empty());
        assert!(a.set_difference(&a).is_empty());
        assert_eq!(a.set_difference(&empty), a);
    }
}

#[test]
fn inclusion_laws() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..30 {
        let a = random_set(&mut rng).filter();
        let b = random_set(&mut rng);
        assert!(a.includes(&a));
        assert!(universal().includes(&a));
        assert!(a.includes(&ZoneSet::new()));
        assert!(a.set_union(&b).includes(&a));
    }
    assert!(!ZoneSet::new().includes(&period(0.0, 1.0)));
}

#[test]
fn closure_of_one_period_is_itself() {
    // A period composed with itself stays inside it, so the fixpoint is
    // reached without iterating.
    let p = period(0.0, 1.0);
    assert_eq!(p.transitive_closure(), p);
}

#[test]
fn closure_of_a_two_period_chain() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut chain = period(0.0, 1.0);
    chain.add_from_period(1.0, 2.0);

    let closure = chain.transitive_closure();

    // The only new zone is the composition across the seam at 1.
    let mut expected = period(0.0, 1.0);
    expected.add(Zone::make(
        LowerBound::Closed(0.0),
        UpperBound::Open(1.0),
        LowerBound::Open(1.0),
        UpperBound::Closed(2.0),
        LowerBound::Open(0.0),
        UpperBound::Closed(2.0),
    ));
    expected.add_from_period(1.0, 2.0);

    assert_eq!(closure.len(), 3);
    assert_same_set(&closure, &expected.filter());

    assert!(closure.includes(&chain.filter()));
    assert!(closure.includes(&closure.concatenation(&chain).filter()));
}

#[test]
fn duration_restriction_of_a_period() {
    let restricted = period(0.0, 10.0).duration_restriction_values(2.0, 5.0);
    let mut expected = ZoneSet::new();
    expected.add(Zone::make(
        LowerBound::Closed(0.0),
        UpperBound::Open(8.0),
        LowerBound::Open(2.0),
        UpperBound::Closed(10.0),
        LowerBound::Open(2.0),
        UpperBound::Closed(5.0),
    ));
    assert_eq!(restricted, expected);
}

#[test]
fn duration_restriction_can_empty_a_set() {
    assert!(period(0.0, 1.0).duration_restriction_values(5.0, 9.0).is_empty());
}

#[test]
fn rational_string_construction() {
    let mut exact: ZoneSet<timed_zones::BigRational> = ZoneSet::new();
    exact.add_from_period_str("1/2", "5/2").unwrap();

    let restricted = exact.duration_restriction_str("1/2", "3/2").unwrap();
    assert_eq!(restricted.len(), 1);

    let approx = restricted.to_doubles();
    assert_eq!(approx, period(0.5, 2.5).duration_restriction_values(0.5, 1.5));

    assert!(exact.duration_restriction_str("not a rational", "1").is_err());
}

#[test]
fn value_conversions_round_trip() {
    let set = period(0.5, 2.5);
    assert_eq!(set.to_rationals().to_doubles(), set);
}
