//! Failure reporters
//!
//! The checker never decides what happens to a failure. It hands every
//! violation to a [`FailureReporter`], and the reporter alone decides whether
//! failures are collected, truncated to the first one, or forwarded elsewhere.

use std::borrow::Cow;

use serde_json::Value;

use super::error::{ExpectedKind, Keyword, ValidationError, ValidationErrors};

/// Receives the failures produced by a numeric constraint check.
///
/// Implementations must not assume anything about how many calls arrive:
/// the checker evaluates every applicable constraint exactly once and reports
/// each violation as it is found.
pub trait FailureReporter {
    /// The candidate failed the type gate.
    fn type_mismatch(&mut self, expected: ExpectedKind, actual: &Value);

    /// The candidate violated a numeric constraint.
    fn constraint_violation(&mut self, message: String, keyword: Keyword);
}

impl<R: FailureReporter + ?Sized> FailureReporter for &mut R {
    fn type_mismatch(&mut self, expected: ExpectedKind, actual: &Value) {
        (**self).type_mismatch(expected, actual);
    }

    fn constraint_violation(&mut self, message: String, keyword: Keyword) {
        (**self).constraint_violation(message, keyword);
    }
}

// ============================================================================
// COLLECTING
// ============================================================================

/// Records every failure, in report order.
///
/// # Examples
///
/// ```
/// use nebula_schema_number::foundation::{CollectingReporter, FailureReporter, Keyword};
///
/// let mut reporter = CollectingReporter::at("#/price");
/// reporter.constraint_violation("0 is not greater than 0".into(), Keyword::ExclusiveMinimum);
///
/// let errors = reporter.into_result().unwrap_err();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.errors()[0].field.as_deref(), Some("#/price"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    location: Option<Cow<'static, str>>,
    errors: ValidationErrors,
}

impl CollectingReporter {
    /// Creates a reporter without an instance location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reporter that tags every failure with `location`.
    pub fn at(location: impl Into<Cow<'static, str>>) -> Self {
        Self {
            location: Some(location.into()),
            errors: ValidationErrors::new(),
        }
    }

    /// Returns the failures recorded so far.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Consumes the reporter, returning the recorded failures.
    #[must_use]
    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    /// `Ok(())` when nothing was reported.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        self.errors.into_result(())
    }

    fn record(&mut self, error: ValidationError) {
        let error = match &self.location {
            Some(location) => error.with_field(location.clone()),
            None => error,
        };
        self.errors.add(error);
    }
}

impl FailureReporter for CollectingReporter {
    fn type_mismatch(&mut self, expected: ExpectedKind, actual: &Value) {
        self.record(ValidationError::type_mismatch(expected, actual));
    }

    fn constraint_violation(&mut self, message: String, keyword: Keyword) {
        self.record(ValidationError::constraint(keyword, message));
    }
}

// ============================================================================
// FAIL FAST
// ============================================================================

/// Keeps only the first failure; later ones are dropped.
#[derive(Debug, Clone, Default)]
pub struct FailFastReporter {
    location: Option<Cow<'static, str>>,
    first: Option<ValidationError>,
    dropped: usize,
}

impl FailFastReporter {
    /// Creates a reporter without an instance location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reporter that tags the kept failure with `location`.
    pub fn at(location: impl Into<Cow<'static, str>>) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::default()
        }
    }

    /// Returns true once any failure has been seen.
    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.first.is_some()
    }

    /// Number of failures reported after the first one.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// `Ok(())` when nothing was reported, otherwise the first failure.
    pub fn into_result(self) -> Result<(), ValidationError> {
        self.first.map_or(Ok(()), Err)
    }

    fn record(&mut self, error: ValidationError) {
        if self.first.is_some() {
            self.dropped += 1;
            return;
        }
        self.first = Some(match &self.location {
            Some(location) => error.with_field(location.clone()),
            None => error,
        });
    }
}

impl FailureReporter for FailFastReporter {
    fn type_mismatch(&mut self, expected: ExpectedKind, actual: &Value) {
        self.record(ValidationError::type_mismatch(expected, actual));
    }

    fn constraint_violation(&mut self, message: String, keyword: Keyword) {
        self.record(ValidationError::constraint(keyword, message));
    }
}
