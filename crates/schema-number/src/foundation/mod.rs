//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`FailureReporter`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`Keyword`]
//! - **Reporters**: [`CollectingReporter`], [`FailFastReporter`]
//!
//! The checker produces failures; reporters decide what to do with them.
//! Whether a validation stops at the first failure or gathers all of them is
//! purely a matter of which reporter is passed in.
//!
//! ```
//! use nebula_schema_number::foundation::{CollectingReporter, Validate};
//! use nebula_schema_number::NumberSchema;
//! use serde_json::json;
//!
//! let schema = NumberSchema::builder().minimum(0).multiple_of(2).build().unwrap();
//!
//! let mut reporter = CollectingReporter::at("#/count");
//! schema.validate_with(&json!(-3), &mut reporter);
//!
//! let errors = reporter.into_errors();
//! assert_eq!(errors.codes(), vec!["minimum", "multipleOf"]);
//! ```

pub mod error;
pub mod reporter;
pub mod traits;

pub use error::{ExpectedKind, Keyword, ValidationError, ValidationErrors};
pub use reporter::{CollectingReporter, FailFastReporter, FailureReporter};
pub use traits::Validate;

use serde_json::Value;

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates each element of `values` independently.
///
/// Every element gets its own reporter located at `#/<index>`, so failures
/// from different elements never mix. All failures are returned together in
/// element order.
///
/// # Examples
///
/// ```
/// use nebula_schema_number::foundation::validate_each;
/// use nebula_schema_number::NumberSchema;
/// use serde_json::json;
///
/// let schema = NumberSchema::builder().maximum(10).build().unwrap();
/// let errors = validate_each(&schema, &[json!(1), json!(11), json!(12)]).unwrap_err();
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.errors()[0].field.as_deref(), Some("#/1"));
/// ```
pub fn validate_each<V>(validator: &V, values: &[Value]) -> ValidationResultMulti<()>
where
    V: Validate<Input = Value> + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for (index, value) in values.iter().enumerate() {
        let mut reporter = CollectingReporter::at(format!("#/{index}"));
        validator.validate_with(value, &mut reporter);
        errors.extend(reporter.into_errors());
    }

    errors.into_result(())
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A validation result that can contain multiple errors.
pub type ValidationResultMulti<T> = Result<T, ValidationErrors>;
