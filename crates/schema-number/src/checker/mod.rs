//! Numeric constraint checker
//!
//! Checking one candidate against one [`NumberSchema`] is a single pass:
//!
//! 1. the type gate ([`NumberChecker::admit`]) decides whether the candidate
//!    is a number of the required kind; if not, at most one type mismatch is
//!    reported and nothing else runs;
//! 2. the lower side: `minimum` with its exclusivity flag, then the
//!    standalone exclusive limit;
//! 3. the upper side, mirrored;
//! 4. `multipleOf`.
//!
//! Every applicable check runs exactly once, whatever the reporter does with
//! the failures. The flag-based and limit-based exclusive checks are
//! independent and may both report.

mod bounds;
mod multiple;

use serde_json::{Number, Value};
use tracing::{debug, trace};

use crate::foundation::{ExpectedKind, FailureReporter, Keyword, Validate};
use crate::number::Numeric;
use crate::schema::{Bound, NumberSchema};

use bounds::Side;

/// Checks `candidate` against `schema`, reporting every failure.
///
/// # Examples
///
/// ```
/// use nebula_schema_number::check_number;
/// use nebula_schema_number::foundation::CollectingReporter;
/// use nebula_schema_number::NumberSchema;
/// use serde_json::json;
///
/// let schema = NumberSchema::builder()
///     .minimum(5)
///     .exclusive_minimum_limit(10)
///     .build()
///     .unwrap();
///
/// let mut reporter = CollectingReporter::new();
/// check_number(&schema, &json!(7), &mut reporter);
///
/// let errors = reporter.into_errors();
/// assert_eq!(errors.codes(), vec!["exclusiveMinimum"]);
/// assert_eq!(errors.errors()[0].message, "7 is not greater than 10");
/// ```
pub fn check_number<R: FailureReporter>(
    schema: &NumberSchema,
    candidate: &Value,
    reporter: &mut R,
) {
    let Some(mut checker) = NumberChecker::admit(schema, candidate, reporter) else {
        return;
    };

    checker.check_minimum(schema.lower_bound());
    checker.check_exclusive_minimum_limit(schema.exclusive_minimum_limit());
    checker.check_maximum(schema.upper_bound());
    checker.check_exclusive_maximum_limit(schema.exclusive_maximum_limit());
    checker.check_multiple_of(schema.multiple_of());
}

/// A candidate that passed the type gate, ready for constraint checks.
///
/// Only [`admit`](Self::admit) creates one, so bound and divisor checks can
/// never run on a value that failed the gate.
#[derive(Debug)]
pub struct NumberChecker<'a, R: FailureReporter> {
    candidate: &'a Value,
    value: Numeric,
    reporter: &'a mut R,
}

impl<'a, R: FailureReporter> NumberChecker<'a, R> {
    /// Applies the type gate.
    ///
    /// - A non-number is reported iff the schema requires numbers, and is
    ///   never admitted.
    /// - With `requires_integer`, a number written with a fraction or
    ///   exponent (`4.0`, `1e2`) is reported even if its value is whole.
    pub fn admit(schema: &NumberSchema, candidate: &'a Value, reporter: &'a mut R) -> Option<Self> {
        let Value::Number(number) = candidate else {
            if schema.requires_number() {
                debug!(%candidate, expected = %ExpectedKind::Number, "type mismatch");
                reporter.type_mismatch(ExpectedKind::Number, candidate);
            } else {
                trace!(%candidate, "not a number, numeric constraints skipped");
            }
            return None;
        };

        let value = Numeric::from_json(number);
        if schema.requires_integer() && !value.is_integral_kind() {
            debug!(%candidate, expected = %ExpectedKind::Integer, "type mismatch");
            reporter.type_mismatch(ExpectedKind::Integer, candidate);
            return None;
        }

        Some(Self {
            candidate,
            value,
            reporter,
        })
    }

    /// The admitted candidate in working form.
    pub const fn value(&self) -> Numeric {
        self.value
    }

    /// `minimum`, exclusive when its flag is set.
    pub fn check_minimum(&mut self, bound: Option<Bound<'_>>) {
        if let Some(bound) = bound {
            self.check_bound(Side::Lower, bound.value, bound.exclusive);
        }
    }

    /// Standalone `exclusiveMinimum` limit.
    pub fn check_exclusive_minimum_limit(&mut self, limit: Option<&Number>) {
        if let Some(limit) = limit {
            self.check_bound(Side::Lower, limit, true);
        }
    }

    /// `maximum`, exclusive when its flag is set.
    pub fn check_maximum(&mut self, bound: Option<Bound<'_>>) {
        if let Some(bound) = bound {
            self.check_bound(Side::Upper, bound.value, bound.exclusive);
        }
    }

    /// Standalone `exclusiveMaximum` limit.
    pub fn check_exclusive_maximum_limit(&mut self, limit: Option<&Number>) {
        if let Some(limit) = limit {
            self.check_bound(Side::Upper, limit, true);
        }
    }

    pub fn check_multiple_of(&mut self, divisor: Option<&Number>) {
        let Some(divisor) = divisor else {
            return;
        };
        trace!(candidate = %self.candidate, %divisor, "checking multipleOf");
        if !multiple::is_multiple_of(self.value, Numeric::from_json(divisor)) {
            let message = format!("{} is not a multiple of {divisor}", self.candidate);
            self.report(Keyword::MultipleOf, divisor, message);
        }
    }

    fn check_bound(&mut self, side: Side, bound: &Number, exclusive: bool) {
        let keyword = side.keyword(exclusive);
        trace!(candidate = %self.candidate, %bound, %keyword, "checking bound");
        if side.violated_by(self.value, Numeric::from_json(bound), exclusive) {
            let message = side.message(self.candidate, bound, exclusive);
            self.report(keyword, bound, message);
        }
    }

    fn report(&mut self, keyword: Keyword, bound: &Number, message: String) {
        debug!(%keyword, candidate = %self.candidate, %bound, "numeric constraint violated");
        self.reporter.constraint_violation(message, keyword);
    }
}

impl Validate for NumberSchema {
    type Input = Value;

    fn validate_with<R: FailureReporter>(&self, input: &Value, reporter: &mut R) {
        check_number(self, input, reporter);
    }
}
