//! Time robustness of a zone set under horizontal translation.
//!
//! Given a nominal interval `[l, u]` and a scope, the translation robustness
//! measures how far the interval can slide left or right, keeping its
//! duration, while remaining inside the zone set. The sweep walks the begin
//! endpoints of the intersection with the constant-duration line through
//! `[l, u]`, extending a closed segment zone point by point for as long as
//! the set still includes it.

use num_rational::BigRational;

use crate::value::Value;
use crate::zone_set::ZoneSet;

/// Largest left and right translations of `[l, u]` (over the scope
/// `[scope_start, scope_end]`) that stay inside `zs`, in that order.
///
/// Exact when the numeric domain is exact, and monotone with respect to
/// floating-point rounding otherwise.
pub fn translation_robustness<T: Value>(
    zs: &ZoneSet<T>,
    l: &T,
    u: &T,
    scope_start: &T,
    scope_end: &T,
) -> (T, T) {
    use std::cmp::Ordering::{Greater, Less};

    let duration = u.minus(l);

    let mut line = ZoneSet::new();
    line.add_values(
        [
            scope_start.clone(),
            scope_end.clone(),
            scope_start.clone(),
            scope_end.clone(),
            duration.clone(),
            duration.clone(),
        ],
        [true; 6],
    );
    let inter = zs.intersection(&line);

    // Begin endpoints of the intersection on either side of `l`, each paired
    // with the matching end endpoint.
    let mut right: Vec<(T, T)> = Vec::new();
    let mut left: Vec<(T, T)> = Vec::new();
    for z in &inter {
        let (sp, ep, esp, eep) = match (
            z.bmin().value(),
            z.bmax().value(),
            z.emin().value(),
            z.emax().value(),
        ) {
            (Some(sp), Some(ep), Some(esp), Some(eep)) => (sp, ep, esp, eep),
            _ => continue,
        };
        if sp.total_cmp(l) != Less {
            right.push((sp.clone(), esp.clone()));
        }
        if ep.total_cmp(l) != Less {
            right.push((ep.clone(), eep.clone()));
        }
        if sp.total_cmp(l) != Greater {
            left.push((sp.clone(), esp.clone()));
        }
        if ep.total_cmp(l) != Greater {
            left.push((ep.clone(), eep.clone()));
        }
    }
    right.sort_by(|a, b| a.0.total_cmp(&b.0));
    left.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut old = l.clone();
    let mut eold = u.clone();
    for (new, enew) in right {
        let mut segment = ZoneSet::new();
        segment.add_values(
            [
                old.clone(),
                new.clone(),
                eold.clone(),
                enew.clone(),
                duration.clone(),
                duration.clone(),
            ],
            [true; 6],
        );
        if !inter.includes(&segment) {
            break;
        }
        old = new;
        eold = enew;
    }
    let rob_right = old.minus(l);

    let mut old = l.clone();
    let mut eold = u.clone();
    for (new, enew) in left.into_iter().rev() {
        let mut segment = ZoneSet::new();
        segment.add_values(
            [
                new.clone(),
                old.clone(),
                enew.clone(),
                eold.clone(),
                duration.clone(),
                duration.clone(),
            ],
            [true; 6],
        );
        if !inter.includes(&segment) {
            break;
        }
        old = new;
        eold = enew;
    }
    let rob_left = l.minus(&old);

    (rob_left, rob_right)
}

/// Translation robustness of a floating-point zone set.
pub fn time_robustness_translation(
    zs: &ZoneSet<f64>,
    l: f64,
    u: f64,
    scope_start: f64,
    scope_end: f64,
) -> (f64, f64) {
    translation_robustness(zs, &l, &u, &scope_start, &scope_end)
}

/// Translation robustness of a rational zone set, measured in floating point.
pub fn time_robustness_translation_rationals(
    zs: &ZoneSet<BigRational>,
    l: f64,
    u: f64,
    scope_start: f64,
    scope_end: f64,
) -> (f64, f64) {
    time_robustness_translation(&zs.to_doubles(), l, u, scope_start, scope_end)
}
