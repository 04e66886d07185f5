//! Numeric domains over which zones are expressed.
//!
//! The algebra is generic in its endpoint type. Two instantiations are
//! supported: `f64` for fast approximate analysis, and
//! [`BigRational`](num_rational::BigRational) for exact symbolic computation.
//! Everything the zone layer needs from a numeric domain is collected in the
//! [`Value`] trait: a zero, addition, subtraction, and a total comparison.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

/// A numeric domain usable as the endpoint type of zone bounds.
///
/// The comparison must be total: endpoints are sorted and deduplicated, and a
/// partial order would make sweep results depend on the placement of
/// incomparable values.
pub trait Value: Clone + PartialEq + PartialOrd + Debug + Display + 'static {
    /// The additive identity.
    fn zero() -> Self;
    /// Addition of two endpoints.
    fn plus(&self, other: &Self) -> Self;
    /// Subtraction of two endpoints.
    fn minus(&self, other: &Self) -> Self;
    /// Total comparison; incomparable pairs collapse to `Equal`.
    fn total_cmp(&self, other: &Self) -> Ordering;
}

impl Value for f64 {
    #[inline(always)] fn zero() -> Self { 0.0 }
    #[inline(always)] fn plus(&self, other: &Self) -> Self { self + other }
    #[inline(always)] fn minus(&self, other: &Self) -> Self { self - other }
    #[inline(always)] fn total_cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

impl Value for BigRational {
    #[inline(always)] fn zero() -> Self { <BigRational as Zero>::zero() }
    #[inline(always)] fn plus(&self, other: &Self) -> Self { self + other }
    #[inline(always)] fn minus(&self, other: &Self) -> Self { self - other }
    #[inline(always)] fn total_cmp(&self, other: &Self) -> Ordering { self.cmp(other) }
}

/// Exact rational rendition of a floating-point endpoint.
///
/// Non-finite inputs have no rational counterpart and collapse to zero.
pub fn rational_from_f64(value: f64) -> BigRational {
    BigRational::from_float(value).unwrap_or_else(|| BigRational::from_integer(BigInt::from(0)))
}

/// Nearest floating-point rendition of a rational endpoint.
pub fn f64_from_rational(value: &BigRational) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
