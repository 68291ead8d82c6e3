//! Bound comparison, written once for both sides.

use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::foundation::Keyword;
use crate::number::Numeric;

/// Which side of the candidate a bound constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    /// `minimum` / `exclusiveMinimum`: the candidate must lie above.
    Lower,
    /// `maximum` / `exclusiveMaximum`: the candidate must lie below.
    Upper,
}

impl Side {
    pub(crate) const fn keyword(self, exclusive: bool) -> Keyword {
        match (self, exclusive) {
            (Self::Lower, false) => Keyword::Minimum,
            (Self::Lower, true) => Keyword::ExclusiveMinimum,
            (Self::Upper, false) => Keyword::Maximum,
            (Self::Upper, true) => Keyword::ExclusiveMaximum,
        }
    }

    /// Returns true when `value` lies on the wrong side of `bound`.
    ///
    /// Equality violates an exclusive bound and satisfies an inclusive one.
    /// Unordered values (NaN) never violate.
    pub(crate) fn violated_by(self, value: Numeric, bound: Numeric, exclusive: bool) -> bool {
        let Some(ordering) = value.partial_cmp(&bound) else {
            return false;
        };
        match (self, exclusive) {
            (Self::Lower, false) => ordering == Ordering::Less,
            (Self::Lower, true) => ordering != Ordering::Greater,
            (Self::Upper, false) => ordering == Ordering::Greater,
            (Self::Upper, true) => ordering != Ordering::Less,
        }
    }

    pub(crate) fn message(self, candidate: &Value, bound: &Number, exclusive: bool) -> String {
        let relation = match (self, exclusive) {
            (Self::Lower, false) => "greater or equal to",
            (Self::Lower, true) => "greater than",
            (Self::Upper, false) => "less or equal to",
            (Self::Upper, true) => "less than",
        };
        format!("{candidate} is not {relation} {bound}")
    }
}
