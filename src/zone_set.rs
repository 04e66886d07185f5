//! Finite unions of zones, and the sweep algebra over them.
//!
//! A [`ZoneSet`] is an ordered sequence of non-empty zones whose union is the
//! represented set of timed intervals. The sequence is not deduplicated on
//! insertion; canonicalization is explicit through [`ZoneSet::filter`], which
//! reduces a set to a `bmin`-sorted antichain (no member includes another).
//! Every producing operator ends with that normal form, and the sweeping
//! operators ([`ZoneSet::intersection`], [`ZoneSet::concatenation`],
//! [`ZoneSet::includes`]) lean on it: they advance two cursors through
//! `bmin`-ordered inputs, maintain small active windows of zones whose spans
//! still overlap the cursor, and retire zones that the sweep has passed.
//!
//! Equality of zone sets is syntactic (same zones in the same order). Clients
//! that want set semantics compare `filter`-ed values or use
//! [`ZoneSet::includes`] in both directions.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::debug;
use num_rational::{BigRational, ParseRatioError};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::bound::{compatible, LowerBound, UpperBound};
use crate::value::Value;
use crate::zone::Zone;

/// Working window of a sweep; stays inline until a sweep gets unusually wide.
type Active<T> = SmallVec<[Zone<T>; 8]>;

/// A finite union of non-empty zones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneSet<T> {
    zones: Vec<Zone<T>>,
}

impl<T> Default for ZoneSet<T> {
    fn default() -> Self {
        ZoneSet { zones: Vec::new() }
    }
}

impl<T> ZoneSet<T> {
    /// The empty union.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of zones in the sequence.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// True when the sequence holds no zones.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// The zones in sequence order.
    pub fn zones(&self) -> &[Zone<T>] {
        &self.zones
    }

    /// Iterates over the zones in sequence order.
    pub fn iter(&self) -> std::slice::Iter<'_, Zone<T>> {
        self.zones.iter()
    }
}

impl<'a, T> IntoIterator for &'a ZoneSet<T> {
    type Item = &'a Zone<T>;
    type IntoIter = std::slice::Iter<'a, Zone<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.zones.iter()
    }
}

impl<T: Value> FromIterator<Zone<T>> for ZoneSet<T> {
    fn from_iter<I: IntoIterator<Item = Zone<T>>>(iter: I) -> Self {
        let mut set = ZoneSet::new();
        for zone in iter {
            set.add(zone);
        }
        set
    }
}

/// Inserts `kid` into the pending antichain `act_r`, unless it is empty or
/// subsumed; zones it subsumes are dropped. Members whose span ends before
/// `cutoff` can no longer be subsumed by later arrivals and move to `result`.
fn absorb<T: Value>(
    kid: Zone<T>,
    cutoff: &LowerBound<T>,
    act_r: &mut Active<T>,
    act_r_temp: &mut Active<T>,
    result: &mut Vec<Zone<T>>,
) {
    if !kid.is_nonempty() {
        return;
    }
    if act_r.iter().any(|zr| Zone::includes(zr, &kid)) {
        return;
    }
    act_r.retain(|zr| !Zone::includes(&kid, zr));
    act_r.push(kid);
    act_r_temp.clear();
    for zr in act_r.drain(..) {
        if zr.bmax().precedes(cutoff) {
            result.push(zr);
        } else {
            act_r_temp.push(zr);
        }
    }
    mem::swap(act_r, act_r_temp);
}

impl<T: Value> ZoneSet<T> {
    /// Appends a zone, dropping it if empty.
    pub fn add(&mut self, zone: Zone<T>) {
        if zone.is_nonempty() {
            self.zones.push(zone);
        }
    }

    /// Appends the zone built from six endpoint values and six strictness
    /// flags (`true` for closed), dropping it if empty.
    pub fn add_values(&mut self, values: [T; 6], signs: [bool; 6]) {
        self.add(Zone::from_values(values, signs));
    }

    /// Appends the zone of intervals contained in `[begin, end]`.
    pub fn add_from_period(&mut self, begin: T, end: T) {
        self.add(Zone::from_period(begin, end));
    }

    /// Appends the begin-anchored zone of `[begin, end]`.
    pub fn add_from_period_rise_anchor(&mut self, begin: T, end: T) {
        self.add(Zone::from_period_rise_anchor(begin, end));
    }

    /// Appends the end-anchored zone of `[begin, end]`.
    pub fn add_from_period_fall_anchor(&mut self, begin: T, end: T) {
        self.add(Zone::from_period_fall_anchor(begin, end));
    }

    /// Appends the singleton zone of the period `(begin, end)`.
    pub fn add_from_period_both_anchor(&mut self, begin: T, end: T) {
        self.add(Zone::from_period_both_anchor(begin, end));
    }

    /// Sorts the sequence by `bmin`.
    pub fn sort_by_bmin(&mut self) {
        self.zones.sort_by(|z1, z2| z1.bmin().cmp(z2.bmin()));
    }

    /// Sorts the sequence by `emin`.
    pub fn sort_by_emin(&mut self) {
        self.zones.sort_by(|z1, z2| z1.emin().cmp(z2.emin()));
    }

    fn is_sorted_by_bmin(&self) -> bool {
        self.zones
            .windows(2)
            .all(|w| w[0].bmin().cmp(w[1].bmin()) != Ordering::Greater)
    }

    /// The zones in `bmin` order, borrowing when already sorted.
    fn bmin_sorted(&self) -> Cow<'_, [Zone<T>]> {
        if self.is_sorted_by_bmin() {
            Cow::Borrowed(&self.zones)
        } else {
            let mut zones = self.zones.clone();
            zones.sort_by(|z1, z2| z1.bmin().cmp(z2.bmin()));
            Cow::Owned(zones)
        }
    }

    /// The zones in `emin` order, borrowing when already sorted.
    fn emin_sorted(&self) -> Cow<'_, [Zone<T>]> {
        let sorted = self
            .zones
            .windows(2)
            .all(|w| w[0].emin().cmp(w[1].emin()) != Ordering::Greater);
        if sorted {
            Cow::Borrowed(&self.zones)
        } else {
            let mut zones = self.zones.clone();
            zones.sort_by(|z1, z2| z1.emin().cmp(z2.emin()));
            Cow::Owned(zones)
        }
    }

    /// Reduces the set to an equivalent `bmin`-sorted antichain: same union,
    /// and no member includes another.
    ///
    /// Streaming antichain maintenance: each input zone is dropped if some
    /// active zone already covers it, and otherwise displaces the active zones
    /// it covers. Active zones whose span ends before the newcomer's `bmin`
    /// are settled into the output early; with roughly `bmin`-ordered input
    /// that keeps the window small, and with arbitrary input it is merely
    /// harmless.
    pub fn filter(&self) -> Self {
        let mut active: Active<T> = SmallVec::new();
        let mut active_temp: Active<T> = SmallVec::new();
        let mut result: Vec<Zone<T>> = Vec::new();

        for z1 in &self.zones {
            if active.iter().any(|z2| Zone::includes(z2, z1)) {
                continue;
            }
            active.retain(|z2| !Zone::includes(z1, z2));
            active.push(z1.clone());

            active_temp.clear();
            for z2 in active.drain(..) {
                if z2.bmax().precedes(z1.bmin()) {
                    result.push(z2);
                } else {
                    active_temp.push(z2);
                }
            }
            mem::swap(&mut active, &mut active_temp);
        }
        result.extend(active);

        result.sort_by(|z1, z2| z1.bmin().cmp(z2.bmin()));
        ZoneSet { zones: result }
    }

    /// Piecewise inclusion: every zone of `other` is included in some single
    /// zone of `self`.
    ///
    /// This is stronger than containment of the unions, and is the relation
    /// that `filter`-reduced antichains support; on them the two coincide.
    pub fn includes(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }

        let zs1 = self.bmin_sorted();
        let zs2 = other.bmin_sorted();

        let mut act_1: SmallVec<[&Zone<T>; 8]> = SmallVec::new();
        let mut i1 = 0;
        let mut i2 = 0;

        while i1 < zs1.len() && i2 < zs2.len() {
            let z2 = &zs2[i2];
            if compatible(zs1[i1].bmin(), z2.bmax()) {
                act_1.push(&zs1[i1]);
                i1 += 1;
            } else {
                act_1.retain(|z1| !z1.bmax().precedes(z2.bmin()));
                if !act_1.iter().any(|z1| Zone::includes(z1, z2)) {
                    return false;
                }
                i2 += 1;
            }
        }
        while i2 < zs2.len() && !act_1.is_empty() {
            let z2 = &zs2[i2];
            act_1.retain(|z1| !z1.bmax().precedes(z2.bmin()));
            if !act_1.iter().any(|z1| Zone::includes(z1, z2)) {
                return false;
            }
            i2 += 1;
        }
        i2 == zs2.len()
    }

    /// Intersection of the two unions, as a `bmin`-sorted antichain.
    ///
    /// Two-pointer sweep over `bmin`-ordered operands. The side whose cursor
    /// has the smaller `bmin` advances (the right side on ties), its zone
    /// enters that side's active window, zones on the opposite window whose
    /// span the sweep has passed are evicted, and each surviving opposite
    /// zone contributes a pairwise intersection to the pending antichain.
    pub fn intersection(&self, other: &Self) -> Self {
        let zs1 = self.bmin_sorted();
        let zs2 = other.bmin_sorted();

        let mut result: Vec<Zone<T>> = Vec::new();
        let mut act_1: Active<T> = SmallVec::new();
        let mut act_2: Active<T> = SmallVec::new();
        let mut act_r: Active<T> = SmallVec::new();
        let mut act_r_temp: Active<T> = SmallVec::new();

        let mut i1 = 0;
        let mut i2 = 0;

        while i1 < zs1.len() && i2 < zs2.len() {
            if zs1[i1].bmin().cmp(zs2[i2].bmin()) == Ordering::Less {
                let z1 = &zs1[i1];
                act_1.push(z1.clone());
                act_2.retain(|z2| !z2.bmax().precedes(z1.bmin()));
                for z2 in &act_2 {
                    absorb(
                        Zone::intersection(z1, z2),
                        z1.bmin(),
                        &mut act_r,
                        &mut act_r_temp,
                        &mut result,
                    );
                }
                i1 += 1;
            } else {
                let z2 = &zs2[i2];
                act_2.push(z2.clone());
                act_1.retain(|z1| !z1.bmax().precedes(z2.bmin()));
                for z1 in &act_1 {
                    absorb(
                        Zone::intersection(z1, z2),
                        z2.bmin(),
                        &mut act_r,
                        &mut act_r_temp,
                        &mut result,
                    );
                }
                i2 += 1;
            }
        }

        while i1 < zs1.len() {
            let z1 = &zs1[i1];
            act_2.retain(|z2| !z2.bmax().precedes(z1.bmin()));
            for z2 in &act_2 {
                absorb(
                    Zone::intersection(z1, z2),
                    z1.bmin(),
                    &mut act_r,
                    &mut act_r_temp,
                    &mut result,
                );
            }
            i1 += 1;
        }

        while i2 < zs2.len() {
            let z2 = &zs2[i2];
            act_1.retain(|z1| !z1.bmax().precedes(z2.bmin()));
            for z1 in &act_1 {
                absorb(
                    Zone::intersection(z1, z2),
                    z2.bmin(),
                    &mut act_r,
                    &mut act_r_temp,
                    &mut result,
                );
            }
            i2 += 1;
        }

        result.extend(act_r);
        result.sort_by(|z1, z2| z1.bmin().cmp(z2.bmin()));
        ZoneSet { zones: result }
    }

    /// Concatenation of the two unions: intervals splitting into a left part
    /// from `self` and a right part from `other` that meet at a point.
    ///
    /// The same sweep as [`ZoneSet::intersection`], except that the left
    /// operand is ordered and keyed by `emin` (its end must reach the right
    /// operand's begin) and eviction on the left side watches `emax`.
    pub fn concatenation(&self, other: &Self) -> Self {
        let zs1 = self.emin_sorted();
        let zs2 = other.bmin_sorted();

        let mut result: Vec<Zone<T>> = Vec::new();
        let mut act_1: Active<T> = SmallVec::new();
        let mut act_2: Active<T> = SmallVec::new();
        let mut act_r: Active<T> = SmallVec::new();
        let mut act_r_temp: Active<T> = SmallVec::new();

        let mut i1 = 0;
        let mut i2 = 0;

        while i1 < zs1.len() && i2 < zs2.len() {
            if zs1[i1].emin().cmp(zs2[i2].bmin()) == Ordering::Less {
                let z1 = &zs1[i1];
                act_1.push(z1.clone());
                act_2.retain(|z2| !z2.bmax().precedes(z1.emin()));
                for z2 in &act_2 {
                    absorb(
                        Zone::concatenation(z1, z2),
                        z1.bmin(),
                        &mut act_r,
                        &mut act_r_temp,
                        &mut result,
                    );
                }
                i1 += 1;
            } else {
                let z2 = &zs2[i2];
                act_2.push(z2.clone());
                act_1.retain(|z1| !z1.emax().precedes(z2.bmin()));
                for z1 in &act_1 {
                    absorb(
                        Zone::concatenation(z1, z2),
                        z2.bmin(),
                        &mut act_r,
                        &mut act_r_temp,
                        &mut result,
                    );
                }
                i2 += 1;
            }
        }

        while i1 < zs1.len() {
            let z1 = &zs1[i1];
            act_2.retain(|z2| !z2.bmax().precedes(z1.bmin()));
            for z2 in &act_2 {
                absorb(
                    Zone::concatenation(z1, z2),
                    z1.bmin(),
                    &mut act_r,
                    &mut act_r_temp,
                    &mut result,
                );
            }
            i1 += 1;
        }

        while i2 < zs2.len() {
            let z2 = &zs2[i2];
            act_1.retain(|z1| !z1.emax().precedes(z2.bmin()));
            for z1 in &act_1 {
                absorb(
                    Zone::concatenation(z1, z2),
                    z2.bmin(),
                    &mut act_r,
                    &mut act_r_temp,
                    &mut result,
                );
            }
            i2 += 1;
        }

        result.extend(act_r);
        result.sort_by(|z1, z2| z1.bmin().cmp(z2.bmin()));
        ZoneSet { zones: result }
    }

    /// Union of the two unions, as a `bmin`-sorted antichain.
    pub fn set_union(&self, other: &Self) -> Self {
        let mut combined = self.clone();
        combined.zones.extend(other.zones.iter().cloned());
        combined.filter()
    }

    /// Complement of a single zone with respect to the universal zone.
    ///
    /// A zone is a conjunction of six half-space constraints, so its
    /// complement is the union of at most six zones, each unconstrained in
    /// five dimensions and violating one of the original bounds. Unbounded
    /// dimensions contribute nothing.
    pub fn complement_of(zone: &Zone<T>) -> Self {
        let unb_l = || LowerBound::Unbounded;
        let unb_u = || UpperBound::Unbounded;
        let mut result = ZoneSet::new();
        if let Some(bmin) = zone.bmax().complement() {
            result.add(Zone::make(bmin, unb_u(), unb_l(), unb_u(), unb_l(), unb_u()));
        }
        if let Some(bmax) = zone.bmin().complement() {
            result.add(Zone::make(unb_l(), bmax, unb_l(), unb_u(), unb_l(), unb_u()));
        }
        if let Some(emin) = zone.emax().complement() {
            result.add(Zone::make(unb_l(), unb_u(), emin, unb_u(), unb_l(), unb_u()));
        }
        if let Some(emax) = zone.emin().complement() {
            result.add(Zone::make(unb_l(), unb_u(), unb_l(), emax, unb_l(), unb_u()));
        }
        if let Some(dmin) = zone.dmax().complement() {
            result.add(Zone::make(unb_l(), unb_u(), unb_l(), unb_u(), dmin, unb_u()));
        }
        if let Some(dmax) = zone.dmin().complement() {
            result.add(Zone::make(unb_l(), unb_u(), unb_l(), unb_u(), unb_l(), dmax));
        }
        result.filter()
    }

    /// Complement of the union with respect to the universal zone.
    ///
    /// Starts from the universe and intersects with each member's complement;
    /// every intersection returns an antichain, which keeps the intermediate
    /// sets bounded.
    pub fn complementation(&self) -> Self {
        let mut result = ZoneSet::new();
        result.add(Zone::universal());
        for zone in &self.zones {
            result = result.intersection(&Self::complement_of(zone));
        }
        result
    }

    /// The intervals of `self` not in `other`.
    pub fn set_difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for zone in &other.zones {
            result = result.intersection(&Self::complement_of(zone));
        }
        result
    }

    /// Least fixpoint of `X -> self ∪ (X ∘ self)` starting from `self`: the
    /// closure of the union under concatenation.
    ///
    /// Terminates when the reachable compositions admit a finite antichain;
    /// on other operands it runs forever, and bounding it is the caller's
    /// concern.
    pub fn transitive_closure(&self) -> Self {
        let mut zplus = self.clone();
        let mut zlast = self.clone();

        let mut znext = zlast.concatenation(self);
        while !zplus.includes(&znext) {
            debug!(
                "transitive closure: frontier of {} zones, {} accumulated",
                znext.len(),
                zplus.len()
            );
            zplus = zplus.set_union(&znext);
            zlast = znext;
            znext = zlast.concatenation(self);
        }
        zplus
    }

    /// Restricts every member's duration to the given bounds, dropping zones
    /// that become empty.
    pub fn duration_restriction(&self, dmin: &LowerBound<T>, dmax: &UpperBound<T>) -> Self {
        let mut result = ZoneSet::new();
        for zone in &self.zones {
            result.add(Zone::duration_restriction(zone, dmin, dmax));
        }
        result.sort_by_bmin();
        result.filter()
    }

    /// Restricts durations to the half-open interval `(dmin, dmax]`.
    pub fn duration_restriction_values(&self, dmin: T, dmax: T) -> Self {
        self.duration_restriction(&LowerBound::Open(dmin), &UpperBound::Closed(dmax))
    }
}

impl ZoneSet<f64> {
    /// Exact rational rendition of the set, strictness preserved.
    pub fn to_rationals(&self) -> ZoneSet<BigRational> {
        let mut result = ZoneSet::new();
        for zone in &self.zones {
            result.add(zone.to_rationals());
        }
        result
    }
}

impl ZoneSet<BigRational> {
    /// Nearest floating-point rendition of the set, strictness preserved.
    pub fn to_doubles(&self) -> ZoneSet<f64> {
        let mut result = ZoneSet::new();
        for zone in &self.zones {
            result.add(zone.to_doubles());
        }
        result
    }

    /// Parses two decimal-rational endpoints and appends the zone of
    /// intervals contained in `[begin, end]`.
    pub fn add_from_period_str(&mut self, begin: &str, end: &str) -> Result<(), ParseRatioError> {
        self.add_from_period(begin.parse()?, end.parse()?);
        Ok(())
    }

    /// As [`ZoneSet::add_from_period_str`], begin-anchored.
    pub fn add_from_period_rise_anchor_str(
        &mut self,
        begin: &str,
        end: &str,
    ) -> Result<(), ParseRatioError> {
        self.add_from_period_rise_anchor(begin.parse()?, end.parse()?);
        Ok(())
    }

    /// As [`ZoneSet::add_from_period_str`], end-anchored.
    pub fn add_from_period_fall_anchor_str(
        &mut self,
        begin: &str,
        end: &str,
    ) -> Result<(), ParseRatioError> {
        self.add_from_period_fall_anchor(begin.parse()?, end.parse()?);
        Ok(())
    }

    /// As [`ZoneSet::add_from_period_str`], both-anchored.
    pub fn add_from_period_both_anchor_str(
        &mut self,
        begin: &str,
        end: &str,
    ) -> Result<(), ParseRatioError> {
        self.add_from_period_both_anchor(begin.parse()?, end.parse()?);
        Ok(())
    }

    /// Parses two decimal-rational endpoints and restricts durations to
    /// `(dmin, dmax]`.
    pub fn duration_restriction_str(
        &self,
        dmin: &str,
        dmax: &str,
    ) -> Result<ZoneSet<BigRational>, ParseRatioError> {
        Ok(self.duration_restriction(
            &LowerBound::Open(dmin.parse()?),
            &UpperBound::Closed(dmax.parse()?),
        ))
    }
}

impl<T: Value> fmt::Display for ZoneSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for zone in &self.zones {
            writeln!(f, "({}),", zone)?;
        }
        write!(f, "]")
    }
}
