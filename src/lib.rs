//! A symbolic algebra over timed zones.
//!
//! A timed interval is a pair `(b, e)` of a begin and an end time with
//! `b < e`. A zone is a convex region of such intervals, written as six
//! bounds on the begin time, the end time, and the duration `d = e - b`. A
//! zone set is a finite union of zones, kept as a `bmin`-sorted antichain
//! under canonicalization, and closed under the operations a dense-time
//! model checker asks for: union, intersection, complementation,
//! concatenation, transitive closure, duration restriction, an inclusion
//! test, and six Allen-style metric modal operators in diamond and box form.
//!
//! The heavy lifting is done by two-pointer sweeps that walk ordered zone
//! sequences while maintaining small active windows, so intersection and
//! concatenation cost grows with the overlap structure of the operands
//! rather than with the full cross product.
//!
//! The algebra is generic over its numeric domain: `f64` for fast
//! approximate analysis, arbitrary-precision rationals for exact symbolic
//! computation. See [`Value`] for the few capabilities a domain provides.
//!
//! # Examples
//!
//! ```
//! use timed_zones::ZoneSet;
//!
//! // Intervals contained in [0, 2], and intervals contained in [1, 3].
//! let mut first = ZoneSet::new();
//! first.add_from_period(0.0, 2.0);
//! let mut second = ZoneSet::new();
//! second.add_from_period(1.0, 3.0);
//!
//! // Their intersection is exactly the intervals contained in [1, 2].
//! let mut expected = ZoneSet::new();
//! expected.add_from_period(1.0, 2.0);
//! assert_eq!(first.intersection(&second), expected);
//! ```

#![forbid(missing_docs)]

pub mod bound;
pub mod modal;
pub mod robustness;
pub mod value;
pub mod zone;
pub mod zone_set;

pub use crate::bound::{LowerBound, UpperBound};
pub use crate::robustness::{
    time_robustness_translation, time_robustness_translation_rationals, translation_robustness,
};
pub use crate::value::{f64_from_rational, rational_from_f64, Value};
pub use crate::zone::Zone;
pub use crate::zone_set::ZoneSet;

pub use num_rational::BigRational;
