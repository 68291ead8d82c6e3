//! Core validator trait
//!
//! Anything that can check a value and describe its failures implements
//! [`Validate`]. The trait is small on purpose: the numeric checker reports
//! through a [`FailureReporter`](super::FailureReporter), and `Validate`
//! is the convenience surface on top of that.

use super::error::ValidationErrors;
use super::reporter::{CollectingReporter, FailFastReporter, FailureReporter};

/// A validator over some input type.
///
/// Implementors provide [`validate_with`](Validate::validate_with); the
/// collecting and fail-fast entry points are derived from it.
///
/// # Examples
///
/// ```
/// use nebula_schema_number::foundation::Validate;
/// use nebula_schema_number::NumberSchema;
/// use serde_json::json;
///
/// let schema = NumberSchema::builder().minimum(1).build().unwrap();
/// assert!(schema.validate(&json!(3)).is_ok());
/// assert!(schema.validate(&json!(0)).is_err());
/// ```
pub trait Validate {
    /// The type being validated.
    type Input: ?Sized;

    /// Checks `input`, sending every failure to `reporter`.
    fn validate_with<R: FailureReporter>(&self, input: &Self::Input, reporter: &mut R);

    /// Checks `input` and collects every failure.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationErrors> {
        let mut reporter = CollectingReporter::new();
        self.validate_with(input, &mut reporter);
        reporter.into_result()
    }

    /// Checks `input` and keeps only the first failure.
    fn validate_fail_fast(&self, input: &Self::Input) -> Result<(), super::ValidationError> {
        let mut reporter = FailFastReporter::new();
        self.validate_with(input, &mut reporter);
        reporter.into_result()
    }

    /// Returns true if `input` passes.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate_fail_fast(input).is_ok()
    }
}
