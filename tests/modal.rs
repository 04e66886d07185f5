use timed_zones::{BigRational, LowerBound, UpperBound, Zone, ZoneSet};

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

fn single(zone: Zone<f64>) -> ZoneSet<f64> {
    let mut set = ZoneSet::new();
    set.add(zone);
    set
}

#[test]
fn diamond_meets_follows_the_end() {
    // Intervals beginning where a subperiod of [0, 1] ends, lasting (0, 1].
    let result = period(0.0, 1.0).diamond_meets_values(0.0, 1.0);
    let expected = single(Zone::make(
        LowerBound::Open(0.0),
        UpperBound::Closed(1.0),
        LowerBound::Open(0.0),
        UpperBound::Closed(2.0),
        LowerBound::Open(0.0),
        UpperBound::Closed(1.0),
    ));
    assert_eq!(result, expected);
}

#[test]
fn diamond_met_by_precedes_the_begin() {
    // Intervals ending where a subperiod of [1, 2] begins, lasting (0, 1].
    let result = period(1.0, 2.0).diamond_met_by_values(0.0, 1.0);
    let expected = single(Zone::make(
        LowerBound::Closed(0.0),
        UpperBound::Open(2.0),
        LowerBound::Closed(1.0),
        UpperBound::Open(2.0),
        LowerBound::Open(0.0),
        UpperBound::Closed(1.0),
    ));
    assert_eq!(result, expected);
}

#[test]
fn diamond_started_by_extends_the_end() {
    let result = period(0.0, 2.0).diamond_started_by_values(0.0, 1.0);
    let expected = single(Zone::make(
        LowerBound::Closed(0.0),
        UpperBound::Open(2.0),
        LowerBound::Open(0.0),
        UpperBound::Closed(3.0),
        LowerBound::Open(0.0),
        UpperBound::Closed(3.0),
    ));
    assert_eq!(result, expected);
}

#[test]
fn diamond_starts_retracts_the_end() {
    let result = period(0.0, 2.0).diamond_starts_values(0.0, 1.0);
    let expected = single(Zone::make(
        LowerBound::Closed(0.0),
        UpperBound::Open(1.0),
        LowerBound::Open(1.0),
        UpperBound::Open(2.0),
        LowerBound::Open(1.0),
        UpperBound::Open(2.0),
    ));
    assert_eq!(result, expected);
}

#[test]
fn modal_operators_filter_their_output() {
    // Two nested periods collapse to one zone once shifted identically.
    let mut nested = period(0.0, 2.0);
    nested.add_from_period(0.5, 1.5);
    let result = nested.diamond_met_by_values(0.0, 1.0);
    assert_eq!(result.len(), 1);
}

#[test]
fn box_operators_fix_the_universe() {
    let u = universal();
    for result in [
        u.box_meets_values(0.0, 1.0),
        u.box_met_by_values(0.0, 1.0),
        u.box_starts_values(0.0, 1.0),
        u.box_started_by_values(0.0, 1.0),
        u.box_finishes_values(0.0, 1.0),
        u.box_finished_by_values(0.0, 1.0),
    ] {
        assert_eq!(result, u);
    }
}

#[test]
fn box_is_the_dual_of_diamond() {
    let mut set = period(0.0, 3.0);
    set.add_from_period(2.0, 5.0);
    let lbound = LowerBound::Open(0.0);
    let ubound = UpperBound::Closed(1.0);
    assert_eq!(
        set.box_meets(&lbound, &ubound),
        set.complementation()
            .diamond_meets(&lbound, &ubound)
            .complementation()
    );
}

#[test]
fn box_result_is_disjoint_from_diamond_of_complement() {
    let set = period(1.0, 4.0);
    let boxed = set.box_met_by_values(0.0, 1.0);
    let escaped = set.complementation().diamond_met_by_values(0.0, 1.0);
    assert!(boxed.intersection(&escaped).is_empty());
}

#[test]
fn scalar_variants_use_half_open_offsets() {
    let set = period(0.0, 1.0);
    assert_eq!(
        set.diamond_meets_values(0.0, 1.0),
        set.diamond_meets(&LowerBound::Open(0.0), &UpperBound::Closed(1.0))
    );
}

#[test]
fn string_variants_match_their_scalar_counterparts() {
    let mut exact: ZoneSet<BigRational> = ZoneSet::new();
    exact.add_from_period_str("0", "1").unwrap();

    let via_str = exact.diamond_meets_str("1/2", "3/2").unwrap();
    let via_values = exact.diamond_meets_values(
        BigRational::new(1.into(), 2.into()),
        BigRational::new(3.into(), 2.into()),
    );
    assert_eq!(via_str, via_values);

    assert!(exact.diamond_meets_str("1/0x", "2").is_err());
}
