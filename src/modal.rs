//! Metric modal operators over zone sets.
//!
//! Six diamond operators, one per Allen-style relation with a metric offset
//! interval: `meets`, `met_by`, `starts`, `started_by`, `finishes`,
//! `finished_by`. Each rewrites every zone's six bounds independently and
//! reduces the result with `filter`. The box operators are the De Morgan
//! duals, obtained by complementing, applying the diamond, and complementing
//! again.
//!
//! Convenience variants accept scalar endpoints `(a, b)` denoting the
//! half-open offset interval `(a, b]`, and, on the rational instantiation,
//! decimal-rational strings.

use num_rational::{BigRational, ParseRatioError};
use paste::paste;

use crate::bound::{LowerBound, UpperBound};
use crate::value::Value;
use crate::zone::Zone;
use crate::zone_set::ZoneSet;

impl<T: Value> ZoneSet<T> {
    /// Intervals met by a member on the left: they begin where the member
    /// ends, with a duration in the offset interval.
    pub fn diamond_meets(&self, lbound: &LowerBound<T>, ubound: &UpperBound<T>) -> Self {
        let mut result = ZoneSet::new();
        for z in self {
            result.add(Zone::make(
                z.emin().clone(),
                z.emax().clone(),
                LowerBound::Unbounded,
                UpperBound::Unbounded,
                lbound.clone(),
                ubound.clone(),
            ));
        }
        result.filter()
    }

    /// Intervals that meet a member on the left: they end where the member
    /// begins, with a duration in the offset interval.
    pub fn diamond_met_by(&self, lbound: &LowerBound<T>, ubound: &UpperBound<T>) -> Self {
        let mut result = ZoneSet::new();
        for z in self {
            result.add(Zone::make(
                LowerBound::Unbounded,
                UpperBound::Unbounded,
                z.bmin().clone(),
                z.bmax().clone(),
                lbound.clone(),
                ubound.clone(),
            ));
        }
        result.filter()
    }

    /// Intervals started by a member: same begin, extended past the member's
    /// end by the offset interval.
    pub fn diamond_started_by(&self, lbound: &LowerBound<T>, ubound: &UpperBound<T>) -> Self {
        let mut result = ZoneSet::new();
        for z in self {
            result.add(Zone::make(
                z.bmin().clone(),
                z.bmax().clone(),
                z.emin().add(lbound),
                z.emax().add(ubound),
                z.dmin().add(lbound),
                z.dmax().add(ubound),
            ));
        }
        result.filter()
    }

    /// Intervals that start a member: same begin, ending short of the
    /// member's end by the offset interval.
    pub fn diamond_starts(&self, lbound: &LowerBound<T>, ubound: &UpperBound<T>) -> Self {
        let mut result = ZoneSet::new();
        for z in self {
            result.add(Zone::make(
                z.bmin().clone(),
                z.bmax().clone(),
                z.emin().add_upper(ubound),
                z.emax().add_lower(lbound),
                z.dmin().add_upper(ubound),
                z.dmax().add_lower(lbound),
            ));
        }
        result.filter()
    }

    /// Intervals finished by a member: same end, begun earlier by the offset
    /// interval.
    pub fn diamond_finished_by(&self, lbound: &LowerBound<T>, ubound: &UpperBound<T>) -> Self {
        let mut result = ZoneSet::new();
        for z in self {
            result.add(Zone::make(
                z.bmin().add_upper(ubound),
                z.bmax().add_lower(lbound),
                z.emin().clone(),
                z.emax().clone(),
                z.dmin().add(lbound),
                z.dmax().add(ubound),
            ));
        }
        result.filter()
    }

    /// Intervals that finish a member: same end, begun later by the offset
    /// interval. The duration is clamped strictly positive.
    pub fn diamond_finishes(&self, lbound: &LowerBound<T>, ubound: &UpperBound<T>) -> Self {
        let mut result = ZoneSet::new();
        for z in self {
            result.add(Zone::make(
                z.bmin().add(lbound),
                z.bmax().add(ubound),
                z.emin().clone(),
                z.emax().clone(),
                LowerBound::intersection(
                    &LowerBound::Open(T::zero()),
                    &z.dmin().add_upper(ubound),
                ),
                z.dmax().add_lower(lbound),
            ));
        }
        result.filter()
    }

    /// Dual of [`ZoneSet::diamond_meets`].
    pub fn box_meets(&self, lbound: &LowerBound<T>, ubound: &UpperBound<T>) -> Self {
        self.complementation()
            .diamond_meets(lbound, ubound)
            .complementation()
    }

    /// Dual of [`ZoneSet::diamond_met_by`].
    pub fn box_met_by(&self, lbound: &LowerBound<T>, ubound: &UpperBound<T>) -> Self {
        self.complementation()
            .diamond_met_by(lbound, ubound)
            .complementation()
    }

    /// Dual of [`ZoneSet::diamond_starts`].
    pub fn box_starts(&self, lbound: &LowerBound<T>, ubound: &UpperBound<T>) -> Self {
        self.complementation()
            .diamond_starts(lbound, ubound)
            .complementation()
    }

    /// Dual of [`ZoneSet::diamond_started_by`].
    pub fn box_started_by(&self, lbound: &LowerBound<T>, ubound: &UpperBound<T>) -> Self {
        self.complementation()
            .diamond_started_by(lbound, ubound)
            .complementation()
    }

    /// Dual of [`ZoneSet::diamond_finishes`].
    pub fn box_finishes(&self, lbound: &LowerBound<T>, ubound: &UpperBound<T>) -> Self {
        self.complementation()
            .diamond_finishes(lbound, ubound)
            .complementation()
    }

    /// Dual of [`ZoneSet::diamond_finished_by`].
    pub fn box_finished_by(&self, lbound: &LowerBound<T>, ubound: &UpperBound<T>) -> Self {
        self.complementation()
            .diamond_finished_by(lbound, ubound)
            .complementation()
    }
}

/// Scalar and string-endpoint variants of the modal operators, mapping
/// `(a, b)` to the offset interval `(a, b]`.
macro_rules! modal_variants {
    ($($op:ident),* $(,)?) => { paste! {
        impl<T: Value> ZoneSet<T> {
            $(
                #[doc = concat!("As [`ZoneSet::", stringify!($op), "`], over the offset interval `(a, b]`.")]
                pub fn [<$op _values>](&self, a: T, b: T) -> Self {
                    self.$op(&LowerBound::Open(a), &UpperBound::Closed(b))
                }
            )*
        }

        impl ZoneSet<BigRational> {
            $(
                #[doc = concat!("As [`ZoneSet::", stringify!($op), "`], parsing decimal-rational endpoints of `(a, b]`.")]
                pub fn [<$op _str>](&self, a: &str, b: &str) -> Result<Self, ParseRatioError> {
                    Ok(self.$op(&LowerBound::Open(a.parse()?), &UpperBound::Closed(b.parse()?)))
                }
            )*
        }
    } };
}

modal_variants!(
    diamond_meets,
    diamond_met_by,
    diamond_starts,
    diamond_started_by,
    diamond_finishes,
    diamond_finished_by,
    box_meets,
    box_met_by,
    box_starts,
    box_started_by,
    box_finishes,
    box_finished_by,
);
