//! Convex regions of timed intervals.
//!
//! A zone constrains a timed interval `(b, e)` by six bounds: on the begin
//! time `b`, the end time `e`, and the duration `d = e - b`. Constructors
//! tighten the six bounds into canonical form, which is what makes bound-wise
//! comparison ([`Zone::includes`]) a complete containment test and keeps the
//! emptiness check local.
//!
//! Tightening is shortest-path closure over the three-node difference graph
//! on `{origin, begin, end}`. With three nodes, every shortest simple path
//! routes through at most one intermediate node, so a single pass over the
//! raw bounds reaches the closure.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bound::{compatible, LowerBound, UpperBound};
use crate::value::{f64_from_rational, rational_from_f64, Value};

use num_rational::BigRational;

/// A convex set of timed intervals, held in canonical (tightened) form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Zone<T> {
    bmin: LowerBound<T>,
    bmax: UpperBound<T>,
    emin: LowerBound<T>,
    emax: UpperBound<T>,
    dmin: LowerBound<T>,
    dmax: UpperBound<T>,
}

impl<T> Zone<T> {
    /// Lower bound on the begin time.
    pub fn bmin(&self) -> &LowerBound<T> { &self.bmin }
    /// Upper bound on the begin time.
    pub fn bmax(&self) -> &UpperBound<T> { &self.bmax }
    /// Lower bound on the end time.
    pub fn emin(&self) -> &LowerBound<T> { &self.emin }
    /// Upper bound on the end time.
    pub fn emax(&self) -> &UpperBound<T> { &self.emax }
    /// Lower bound on the duration.
    pub fn dmin(&self) -> &LowerBound<T> { &self.dmin }
    /// Upper bound on the duration.
    pub fn dmax(&self) -> &UpperBound<T> { &self.dmax }
}

impl<T: Value> Zone<T> {
    /// Builds a zone from six bounds, tightening them into canonical form.
    pub fn make(
        bmin: LowerBound<T>,
        bmax: UpperBound<T>,
        emin: LowerBound<T>,
        emax: UpperBound<T>,
        dmin: LowerBound<T>,
        dmax: UpperBound<T>,
    ) -> Self {
        Zone {
            bmin: LowerBound::intersection(&bmin, &emin.sub_upper(&dmax)),
            bmax: UpperBound::intersection(&bmax, &emax.sub_lower(&dmin)),
            emin: LowerBound::intersection(&emin, &bmin.add(&dmin)),
            emax: UpperBound::intersection(&emax, &bmax.add(&dmax)),
            dmin: LowerBound::intersection(&dmin, &emin.sub_upper(&bmax)),
            dmax: UpperBound::intersection(&dmax, &emax.sub_lower(&bmin)),
        }
    }

    /// Builds a zone from six endpoint values and six strictness flags
    /// (`true` for closed), in the order `bmin, bmax, emin, emax, dmin, dmax`.
    pub fn from_values(values: [T; 6], signs: [bool; 6]) -> Self {
        let [bmin, bmax, emin, emax, dmin, dmax] = values;
        fn low<T>(v: T, closed: bool) -> LowerBound<T> {
            if closed { LowerBound::Closed(v) } else { LowerBound::Open(v) }
        }
        fn up<T>(v: T, closed: bool) -> UpperBound<T> {
            if closed { UpperBound::Closed(v) } else { UpperBound::Open(v) }
        }
        Self::make(
            low(bmin, signs[0]),
            up(bmax, signs[1]),
            low(emin, signs[2]),
            up(emax, signs[3]),
            low(dmin, signs[4]),
            up(dmax, signs[5]),
        )
    }

    /// The zone of every timed interval contained in the period `[begin, end]`.
    pub fn from_period(begin: T, end: T) -> Self {
        Self::make(
            LowerBound::Closed(begin.clone()),
            UpperBound::Closed(end.clone()),
            LowerBound::Closed(begin),
            UpperBound::Closed(end),
            LowerBound::Open(T::zero()),
            UpperBound::Unbounded,
        )
    }

    /// As [`Zone::from_period`], with the begin time pinned to `begin`.
    pub fn from_period_rise_anchor(begin: T, end: T) -> Self {
        Self::make(
            LowerBound::Closed(begin.clone()),
            UpperBound::Closed(begin.clone()),
            LowerBound::Closed(begin),
            UpperBound::Closed(end),
            LowerBound::Open(T::zero()),
            UpperBound::Unbounded,
        )
    }

    /// As [`Zone::from_period`], with the end time pinned to `end`.
    pub fn from_period_fall_anchor(begin: T, end: T) -> Self {
        Self::make(
            LowerBound::Closed(begin),
            UpperBound::Closed(end.clone()),
            LowerBound::Closed(end.clone()),
            UpperBound::Closed(end),
            LowerBound::Open(T::zero()),
            UpperBound::Unbounded,
        )
    }

    /// The singleton zone holding exactly the period `(begin, end)`.
    pub fn from_period_both_anchor(begin: T, end: T) -> Self {
        Self::make(
            LowerBound::Closed(begin.clone()),
            UpperBound::Closed(begin),
            LowerBound::Closed(end.clone()),
            UpperBound::Closed(end),
            LowerBound::Open(T::zero()),
            UpperBound::Unbounded,
        )
    }

    /// The universe of timed intervals: begin at or after time zero, strictly
    /// positive duration.
    pub fn universal() -> Self {
        Self::make(
            LowerBound::Closed(T::zero()),
            UpperBound::Unbounded,
            LowerBound::Closed(T::zero()),
            UpperBound::Unbounded,
            LowerBound::Open(T::zero()),
            UpperBound::Unbounded,
        )
    }

    /// A canonically empty zone, used where an operation has no result.
    pub(crate) fn empty() -> Self {
        Zone {
            bmin: LowerBound::Open(T::zero()),
            bmax: UpperBound::Open(T::zero()),
            emin: LowerBound::Unbounded,
            emax: UpperBound::Unbounded,
            dmin: LowerBound::Unbounded,
            dmax: UpperBound::Unbounded,
        }
    }

    /// True when some timed interval satisfies all six bounds.
    ///
    /// The five pairwise checks characterize emptiness exactly on canonical
    /// zones: the three coordinate intervals must each be satisfiable, and the
    /// duration interval must be reachable from the begin/end intervals.
    pub fn is_nonempty(&self) -> bool {
        compatible(&self.bmin, &self.bmax)
            && compatible(&self.emin, &self.emax)
            && compatible(&self.dmin, &self.dmax)
            && compatible(&self.bmin.add(&self.dmin), &self.emax)
            && compatible(&self.emin, &self.bmax.add(&self.dmax))
    }

    /// Set-theoretic containment: every interval of `z2` lies in `z1`.
    ///
    /// Complete only because both zones are canonical; on raw bounds a looser
    /// sixth bound could hide a constraint implied by the other five.
    pub fn includes(z1: &Self, z2: &Self) -> bool {
        use std::cmp::Ordering::Greater;
        z1.bmin.cmp(&z2.bmin) != Greater
            && z2.bmax.cmp(&z1.bmax) != Greater
            && z1.emin.cmp(&z2.emin) != Greater
            && z2.emax.cmp(&z1.emax) != Greater
            && z1.dmin.cmp(&z2.dmin) != Greater
            && z2.dmax.cmp(&z1.dmax) != Greater
    }

    /// The zone of intervals common to both zones.
    pub fn intersection(z1: &Self, z2: &Self) -> Self {
        Self::make(
            LowerBound::intersection(&z1.bmin, &z2.bmin),
            UpperBound::intersection(&z1.bmax, &z2.bmax),
            LowerBound::intersection(&z1.emin, &z2.emin),
            UpperBound::intersection(&z1.emax, &z2.emax),
            LowerBound::intersection(&z1.dmin, &z2.dmin),
            UpperBound::intersection(&z1.dmax, &z2.dmax),
        )
    }

    /// Composition: intervals `(b, e)` that split at a meeting point `m` with
    /// `(b, m)` in `z1` and `(m, e)` in `z2`.
    ///
    /// The meeting point ranges over the overlap of `z1`'s end interval and
    /// `z2`'s begin interval; projecting it out tightens the begin bounds
    /// through `z1`'s duration and the end bounds through `z2`'s, while the
    /// duration bounds add.
    pub fn concatenation(z1: &Self, z2: &Self) -> Self {
        let mmin = LowerBound::intersection(&z1.emin, &z2.bmin);
        let mmax = UpperBound::intersection(&z1.emax, &z2.bmax);
        if !compatible(&mmin, &mmax) {
            return Self::empty();
        }
        Self::make(
            LowerBound::intersection(&z1.bmin, &mmin.sub_upper(&z1.dmax)),
            UpperBound::intersection(&z1.bmax, &mmax.sub_lower(&z1.dmin)),
            LowerBound::intersection(&z2.emin, &mmin.add(&z2.dmin)),
            UpperBound::intersection(&z2.emax, &mmax.add(&z2.dmax)),
            z1.dmin.add(&z2.dmin),
            z1.dmax.add(&z2.dmax),
        )
    }

    /// Restricts the duration of `z` to the given bounds.
    pub fn duration_restriction(z: &Self, dmin: &LowerBound<T>, dmax: &UpperBound<T>) -> Self {
        Self::make(
            z.bmin.clone(),
            z.bmax.clone(),
            z.emin.clone(),
            z.emax.clone(),
            LowerBound::intersection(&z.dmin, dmin),
            UpperBound::intersection(&z.dmax, dmax),
        )
    }
}

impl Zone<f64> {
    /// Exact rational rendition of this zone, strictness preserved.
    pub fn to_rationals(&self) -> Zone<BigRational> {
        Zone::make(
            self.bmin.map(|v| rational_from_f64(*v)),
            self.bmax.map(|v| rational_from_f64(*v)),
            self.emin.map(|v| rational_from_f64(*v)),
            self.emax.map(|v| rational_from_f64(*v)),
            self.dmin.map(|v| rational_from_f64(*v)),
            self.dmax.map(|v| rational_from_f64(*v)),
        )
    }
}

impl Zone<BigRational> {
    /// Nearest floating-point rendition of this zone, strictness preserved.
    pub fn to_doubles(&self) -> Zone<f64> {
        Zone::make(
            self.bmin.map(f64_from_rational),
            self.bmax.map(f64_from_rational),
            self.emin.map(f64_from_rational),
            self.emax.map(f64_from_rational),
            self.dmin.map(f64_from_rational),
            self.dmax.map(f64_from_rational),
        )
    }
}

fn fmt_lower<T: Value>(bound: &LowerBound<T>, f: &mut fmt::Formatter) -> fmt::Result {
    match bound {
        LowerBound::Unbounded => write!(f, "(-oo"),
        LowerBound::Open(v) => write!(f, "({}", v),
        LowerBound::Closed(v) => write!(f, "[{}", v),
    }
}

fn fmt_upper<T: Value>(bound: &UpperBound<T>, f: &mut fmt::Formatter) -> fmt::Result {
    match bound {
        UpperBound::Unbounded => write!(f, "+oo)"),
        UpperBound::Open(v) => write!(f, "{})", v),
        UpperBound::Closed(v) => write!(f, "{}]", v),
    }
}

impl<T: Value> fmt::Display for Zone<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_lower(&self.bmin, f)?;
        write!(f, ", ")?;
        fmt_upper(&self.bmax, f)?;
        write!(f, " x ")?;
        fmt_lower(&self.emin, f)?;
        write!(f, ", ")?;
        fmt_upper(&self.emax, f)?;
        write!(f, " x ")?;
        fmt_lower(&self.dmin, f)?;
        write!(f, ", ")?;
        fmt_upper(&self.dmax, f)
    }
}
