use timed_zones::{time_robustness_translation, time_robustness_translation_rationals, ZoneSet};

fn line_zone(values: [f64; 6]) -> ZoneSet<f64> {
    let mut set = ZoneSet::new();
    set.add_values(values, [true; 6]);
    set
}

#[test]
fn single_zone_translation() {
    // Begin in [0, 10], end in [5, 15], duration pinned to 5. The nominal
    // interval [3, 8] can slide 3 to the left and 7 to the right before its
    // begin leaves [0, 10].
    let set = line_zone([0.0, 10.0, 5.0, 15.0, 5.0, 5.0]);
    let (left, right) = time_robustness_translation(&set, 3.0, 8.0, 0.0, 15.0);
    assert_eq!((left, right), (3.0, 7.0));
}

#[test]
fn contiguous_zones_pass_the_seam() {
    // Two constant-duration zones meeting at begin time 4: the sweep steps
    // through the seam point and keeps going.
    let mut set = line_zone([0.0, 4.0, 5.0, 9.0, 5.0, 5.0]);
    set.add_values([4.0, 10.0, 9.0, 15.0, 5.0, 5.0], [true; 6]);
    let (left, right) = time_robustness_translation(&set, 3.0, 8.0, 0.0, 15.0);
    assert_eq!((left, right), (3.0, 7.0));
}

#[test]
fn a_gap_stops_the_sweep() {
    // Same as above with the second zone starting at 6: sliding right is cut
    // off at the end of the first zone.
    let mut set = line_zone([0.0, 4.0, 5.0, 9.0, 5.0, 5.0]);
    set.add_values([6.0, 10.0, 11.0, 15.0, 5.0, 5.0], [true; 6]);
    let (left, right) = time_robustness_translation(&set, 3.0, 8.0, 0.0, 15.0);
    assert_eq!((left, right), (3.0, 1.0));
}

#[test]
fn nominal_outside_the_set_has_no_slack() {
    let set = line_zone([0.0, 10.0, 5.0, 15.0, 5.0, 5.0]);
    let (left, right) = time_robustness_translation(&set, 20.0, 25.0, 0.0, 30.0);
    assert_eq!((left, right), (0.0, 0.0));
}

#[test]
fn empty_set_has_no_slack() {
    let set = ZoneSet::new();
    let (left, right) = time_robustness_translation(&set, 3.0, 8.0, 0.0, 15.0);
    assert_eq!((left, right), (0.0, 0.0));
}

#[test]
fn robustness_is_nonnegative() {
    let set = line_zone([2.0, 6.0, 5.0, 9.0, 3.0, 3.0]);
    for l in [2.0, 3.0, 5.0, 6.0] {
        let (left, right) = time_robustness_translation(&set, l, l + 3.0, 0.0, 20.0);
        assert!(left >= 0.0);
        assert!(right >= 0.0);
    }
}

#[test]
fn rational_sets_measure_in_floating_point() {
    let set = line_zone([0.0, 10.0, 5.0, 15.0, 5.0, 5.0]).to_rationals();
    let (left, right) = time_robustness_translation_rationals(&set, 3.0, 8.0, 0.0, 15.0);
    assert_eq!((left, right), (3.0, 7.0));
}
