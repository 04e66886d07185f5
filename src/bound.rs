//! Lower and upper bounds on a single timed coordinate.
//!
//! A bound carries an endpoint value and a strictness flag, or is `Unbounded`.
//! Lower and upper bounds are distinct types: the two sides order differently,
//! complement into one another, and combine with different tie rules, so
//! conflating them invites sign errors that the type system can rule out
//! instead.
//!
//! Arithmetic on bounds lifts the endpoint arithmetic over the `Unbounded`
//! sentinel (which absorbs) and combines strictness by conjunction: a sum or
//! difference of bounds is closed only when both operands are closed.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A lower bound on a coordinate: `Closed(v)` admits `x >= v`, `Open(v)`
/// admits `x > v`, and `Unbounded` admits everything.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LowerBound<T> {
    /// No constraint.
    Unbounded,
    /// Strict: `x > v`.
    Open(T),
    /// Non-strict: `x >= v`.
    Closed(T),
}

/// An upper bound on a coordinate: `Closed(v)` admits `x <= v`, `Open(v)`
/// admits `x < v`, and `Unbounded` admits everything.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum UpperBound<T> {
    /// No constraint.
    Unbounded,
    /// Strict: `x < v`.
    Open(T),
    /// Non-strict: `x <= v`.
    Closed(T),
}

/// Endpoint and closedness of a finite bound, shared by both sides.
fn combine<T: Value>(
    a: Option<(&T, bool)>,
    b: Option<(&T, bool)>,
    op: impl Fn(&T, &T) -> T,
) -> Option<(T, bool)> {
    match (a, b) {
        (Some((av, ac)), Some((bv, bc))) => Some((op(av, bv), ac && bc)),
        _ => None,
    }
}

impl<T> LowerBound<T> {
    fn parts(&self) -> Option<(&T, bool)> {
        match self {
            LowerBound::Unbounded => None,
            LowerBound::Open(v) => Some((v, false)),
            LowerBound::Closed(v) => Some((v, true)),
        }
    }

    /// The endpoint value, if the bound is finite.
    pub fn value(&self) -> Option<&T> {
        self.parts().map(|(v, _)| v)
    }

    /// Applies `f` to the endpoint, preserving strictness.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> LowerBound<U> {
        match self {
            LowerBound::Unbounded => LowerBound::Unbounded,
            LowerBound::Open(v) => LowerBound::Open(f(v)),
            LowerBound::Closed(v) => LowerBound::Closed(f(v)),
        }
    }
}

impl<T> UpperBound<T> {
    fn parts(&self) -> Option<(&T, bool)> {
        match self {
            UpperBound::Unbounded => None,
            UpperBound::Open(v) => Some((v, false)),
            UpperBound::Closed(v) => Some((v, true)),
        }
    }

    /// The endpoint value, if the bound is finite.
    pub fn value(&self) -> Option<&T> {
        self.parts().map(|(v, _)| v)
    }

    /// Applies `f` to the endpoint, preserving strictness.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> UpperBound<U> {
        match self {
            UpperBound::Unbounded => UpperBound::Unbounded,
            UpperBound::Open(v) => UpperBound::Open(f(v)),
            UpperBound::Closed(v) => UpperBound::Closed(f(v)),
        }
    }
}

impl<T: Value> LowerBound<T> {
    fn from_parts(parts: Option<(T, bool)>) -> Self {
        match parts {
            None => LowerBound::Unbounded,
            Some((v, true)) => LowerBound::Closed(v),
            Some((v, false)) => LowerBound::Open(v),
        }
    }

    /// Total order by restrictiveness: `Unbounded` is least, and at equal
    /// endpoints a closed bound (which still admits the endpoint) precedes an
    /// open one.
    pub fn cmp(&self, other: &Self) -> Ordering {
        match (self.parts(), other.parts()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some((a, ac)), Some((b, bc))) => a.total_cmp(b).then(match (ac, bc) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            }),
        }
    }

    /// The tighter of two lower bounds.
    pub fn intersection(a: &Self, b: &Self) -> Self {
        if a.cmp(b) == Ordering::Less { b.clone() } else { a.clone() }
    }

    /// Sum of two lower bounds.
    pub fn add(&self, other: &Self) -> Self {
        Self::from_parts(combine(self.parts(), other.parts(), T::plus))
    }

    /// Shifts this lower bound up by an upper-bounded offset.
    pub fn add_upper(&self, other: &UpperBound<T>) -> Self {
        Self::from_parts(combine(self.parts(), other.parts(), T::plus))
    }

    /// Shifts this lower bound down by an upper-bounded offset: if `x >= self`
    /// and `y <= other` then `x - y >= self - other`.
    pub fn sub_upper(&self, other: &UpperBound<T>) -> Self {
        Self::from_parts(combine(self.parts(), other.parts(), T::minus))
    }

    /// The complementary upper bound, with dual strictness. The complement of
    /// `Unbounded` admits nothing and is reported as `None`.
    pub fn complement(&self) -> Option<UpperBound<T>> {
        match self {
            LowerBound::Unbounded => None,
            LowerBound::Open(v) => Some(UpperBound::Closed(v.clone())),
            LowerBound::Closed(v) => Some(UpperBound::Open(v.clone())),
        }
    }
}

impl<T: Value> UpperBound<T> {
    fn from_parts(parts: Option<(T, bool)>) -> Self {
        match parts {
            None => UpperBound::Unbounded,
            Some((v, true)) => UpperBound::Closed(v),
            Some((v, false)) => UpperBound::Open(v),
        }
    }

    /// Total order by restrictiveness: `Unbounded` is greatest, and at equal
    /// endpoints an open bound (which excludes the endpoint) precedes a
    /// closed one.
    pub fn cmp(&self, other: &Self) -> Ordering {
        match (self.parts(), other.parts()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some((a, ac)), Some((b, bc))) => a.total_cmp(b).then(match (ac, bc) {
                (false, true) => Ordering::Less,
                (true, false) => Ordering::Greater,
                _ => Ordering::Equal,
            }),
        }
    }

    /// The tighter of two upper bounds.
    pub fn intersection(a: &Self, b: &Self) -> Self {
        if a.cmp(b) == Ordering::Greater { b.clone() } else { a.clone() }
    }

    /// Sum of two upper bounds.
    pub fn add(&self, other: &Self) -> Self {
        Self::from_parts(combine(self.parts(), other.parts(), T::plus))
    }

    /// Shifts this upper bound up by a lower-bounded offset.
    pub fn add_lower(&self, other: &LowerBound<T>) -> Self {
        Self::from_parts(combine(self.parts(), other.parts(), T::plus))
    }

    /// Shifts this upper bound down by a lower-bounded offset: if `x <= self`
    /// and `y >= other` then `x - y <= self - other`.
    pub fn sub_lower(&self, other: &LowerBound<T>) -> Self {
        Self::from_parts(combine(self.parts(), other.parts(), T::minus))
    }

    /// The complementary lower bound, with dual strictness. The complement of
    /// `Unbounded` admits nothing and is reported as `None`.
    pub fn complement(&self) -> Option<LowerBound<T>> {
        match self {
            UpperBound::Unbounded => None,
            UpperBound::Open(v) => Some(LowerBound::Closed(v.clone())),
            UpperBound::Closed(v) => Some(LowerBound::Open(v.clone())),
        }
    }

    /// True when every point admitted by this upper bound lies strictly below
    /// every point admitted by the lower bound, i.e. the two constraints are
    /// jointly unsatisfiable.
    pub fn precedes(&self, lower: &LowerBound<T>) -> bool {
        !compatible(lower, self)
    }
}

/// True when some point satisfies both constraints at once.
pub fn compatible<T: Value>(lower: &LowerBound<T>, upper: &UpperBound<T>) -> bool {
    match (lower.parts(), upper.parts()) {
        (None, _) | (_, None) => true,
        (Some((lv, lc)), Some((uv, uc))) => match lv.total_cmp(uv) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => lc && uc,
        },
    }
}
