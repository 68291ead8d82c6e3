//! Error types for numeric constraint failures
//!
//! Every failure carries a machine-readable `code` (the JSON Schema keyword
//! that failed, or `type_mismatch`) and a human-readable message naming the
//! candidate and the bound. Type mismatches also carry `expected` and
//! `actual` parameters; other parameters are attached by callers.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static codes.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// KEYWORD
// ============================================================================

/// The numeric JSON Schema keyword a constraint violation is attributed to.
///
/// The string form returned by [`Keyword::as_str`] is the stable identifier
/// used in error codes and is identical to the schema keyword spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Keyword {
    /// Inclusive lower bound.
    Minimum,
    /// Inclusive upper bound.
    Maximum,
    /// Exclusive lower bound, either the legacy flag or the standalone limit.
    ExclusiveMinimum,
    /// Exclusive upper bound, either the legacy flag or the standalone limit.
    ExclusiveMaximum,
    /// Divisibility constraint.
    MultipleOf,
}

impl Keyword {
    /// Returns the keyword exactly as spelled in a schema document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::ExclusiveMinimum => "exclusiveMinimum",
            Self::ExclusiveMaximum => "exclusiveMaximum",
            Self::MultipleOf => "multipleOf",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of value the type gate expected but did not get.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedKind {
    /// Any JSON number.
    Number,
    /// A JSON number written in integral form.
    Integer,
}

impl ExpectedKind {
    /// Returns the JSON Schema `type` name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Integer => "integer",
        }
    }
}

impl fmt::Display for ExpectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use nebula_schema_number::foundation::{Keyword, ValidationError};
///
/// let error = ValidationError::constraint(Keyword::Minimum, "4 is not greater or equal to 5")
///     .with_field("#/age")
///     .with_param("bound", "5");
///
/// assert_eq!(error.code, "minimum");
/// assert_eq!(error.param("bound"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// One of the numeric keywords (`minimum`, `multipleOf`, ...) or
    /// `type_mismatch`.
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// JSON pointer to the offending instance, when the reporter knows it.
    ///
    /// Examples: "#", "#/price", "#/items/3"
    pub field: Option<Cow<'static, str>>,

    /// Parameters describing the failure.
    ///
    /// Stored as ordered key-value pairs (typically 1-2 params).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Nested causes, used when several failures are folded into one.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Creates an error attributed to a numeric keyword.
    pub fn constraint(keyword: Keyword, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(keyword.as_str(), message)
    }

    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(expected: ExpectedKind, actual: &serde_json::Value) -> Self {
        Self::new(
            "type_mismatch",
            format!("expected type: {expected}, found: {}", json_type_name(actual)),
        )
        .with_param("expected", expected.as_str())
        .with_param("actual", json_type_name(actual))
    }

    /// Sets the instance location for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds nested validation errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns the keyword this error is attributed to, if it is a
    /// constraint violation rather than a type mismatch.
    #[must_use]
    pub fn keyword(&self) -> Option<Keyword> {
        match self.code.as_ref() {
            "minimum" => Some(Keyword::Minimum),
            "maximum" => Some(Keyword::Maximum),
            "exclusiveMinimum" => Some(Keyword::ExclusiveMinimum),
            "exclusiveMaximum" => Some(Keyword::ExclusiveMaximum),
            "multipleOf" => Some(Keyword::MultipleOf),
            _ => None,
        }
    }

    /// Returns true if this error came from the type gate.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        self.code == "type_mismatch"
    }

    /// Flattens all errors into a single list (depth-first).
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for nested in &self.nested {
            result.extend(nested.flatten());
        }
        result
    }

    /// Converts the error to a JSON structure.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
            "nested": self.nested.iter().map(ValidationError::to_json_value).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.nested.is_empty() {
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n    {}. {}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Returns the JSON type name of a value, as used in type mismatch messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds multiple errors to the collection.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors in report order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the codes of all errors in report order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.code.as_ref()).collect()
    }

    /// Folds the collection into one error.
    ///
    /// Returns `None` for an empty collection. A single error is returned
    /// unchanged; several become the nested causes of a `validation_errors`
    /// error located at `field`.
    #[must_use]
    pub fn into_single_error(
        mut self,
        field: impl Into<Cow<'static, str>>,
    ) -> Option<ValidationError> {
        match self.errors.len() {
            0 => None,
            1 => Some(self.errors.remove(0)),
            count => Some(
                ValidationError::new(
                    "validation_errors",
                    format!("{count} schema violations found"),
                )
                .with_field(field)
                .with_nested(self.errors),
            ),
        }
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
