//! Numeric schema constraints
//!
//! [`NumberSchema`] is a plain, immutable set of optional constraints. It is
//! built either in code through [`NumberSchema::builder`] or from a schema
//! document through [`SchemaLoader`].
//!
//! Both exclusivity encodings are kept side by side:
//!
//! - the legacy flag (`exclusive_minimum: bool`) turns `minimum` into an
//!   exclusive bound;
//! - the standalone limit (`exclusive_minimum_limit`) is its own exclusive
//!   bound, independent of `minimum`.
//!
//! A schema may carry both, and both are checked.

pub mod error;
pub mod loader;

pub use error::{SchemaError, SchemaResult};
pub use loader::{Draft, SchemaLoader};

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::number::Numeric;

// ============================================================================
// BOUND
// ============================================================================

/// A `minimum`/`maximum` bound together with its legacy exclusivity flag.
///
/// The flag travels with the bound, so a bound can never be evaluated before
/// its exclusivity is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound<'a> {
    /// The bound value.
    pub value: &'a Number,
    /// Whether equality to the bound is a violation.
    pub exclusive: bool,
}

impl<'a> Bound<'a> {
    /// An inclusive bound.
    pub const fn inclusive(value: &'a Number) -> Self {
        Self {
            value,
            exclusive: false,
        }
    }

    /// An exclusive bound.
    pub const fn exclusive(value: &'a Number) -> Self {
        Self {
            value,
            exclusive: true,
        }
    }
}

// ============================================================================
// NUMBER SCHEMA
// ============================================================================

/// The numeric constraints of one schema node.
///
/// # Examples
///
/// ```
/// use nebula_schema_number::NumberSchema;
///
/// let schema = NumberSchema::builder()
///     .requires_integer(true)
///     .minimum(0)
///     .exclusive_maximum_limit(100)
///     .multiple_of(5)
///     .build()
///     .unwrap();
///
/// assert!(schema.requires_integer());
/// assert_eq!(schema.multiple_of().map(ToString::to_string).as_deref(), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "NumberSchemaBuilder")]
pub struct NumberSchema {
    requires_number: bool,
    requires_integer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    maximum: Option<Number>,
    exclusive_minimum: bool,
    exclusive_maximum: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclusive_minimum_limit: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclusive_maximum_limit: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    multiple_of: Option<Number>,
}

impl NumberSchema {
    /// Starts a builder. Numbers are required by default.
    pub fn builder() -> NumberSchemaBuilder {
        NumberSchemaBuilder::new()
    }

    /// Loads the numeric keywords of a schema document, detecting the draft
    /// from `$schema`.
    pub fn from_json(schema: &serde_json::Value) -> SchemaResult<Self> {
        SchemaLoader::detect(schema).load(schema)
    }

    /// Non-numeric candidates are a type violation.
    pub const fn requires_number(&self) -> bool {
        self.requires_number
    }

    /// Numeric candidates must be written as integers.
    pub const fn requires_integer(&self) -> bool {
        self.requires_integer
    }

    pub const fn minimum(&self) -> Option<&Number> {
        self.minimum.as_ref()
    }

    pub const fn maximum(&self) -> Option<&Number> {
        self.maximum.as_ref()
    }

    /// Legacy flag making `minimum` exclusive.
    pub const fn exclusive_minimum(&self) -> bool {
        self.exclusive_minimum
    }

    /// Legacy flag making `maximum` exclusive.
    pub const fn exclusive_maximum(&self) -> bool {
        self.exclusive_maximum
    }

    /// Standalone exclusive lower limit.
    pub const fn exclusive_minimum_limit(&self) -> Option<&Number> {
        self.exclusive_minimum_limit.as_ref()
    }

    /// Standalone exclusive upper limit.
    pub const fn exclusive_maximum_limit(&self) -> Option<&Number> {
        self.exclusive_maximum_limit.as_ref()
    }

    pub const fn multiple_of(&self) -> Option<&Number> {
        self.multiple_of.as_ref()
    }

    /// `minimum` paired with its exclusivity flag.
    pub fn lower_bound(&self) -> Option<Bound<'_>> {
        self.minimum.as_ref().map(|value| Bound {
            value,
            exclusive: self.exclusive_minimum,
        })
    }

    /// `maximum` paired with its exclusivity flag.
    pub fn upper_bound(&self) -> Option<Bound<'_>> {
        self.maximum.as_ref().map(|value| Bound {
            value,
            exclusive: self.exclusive_maximum,
        })
    }

    /// Returns true if the schema declares any bound or divisor.
    pub const fn has_constraints(&self) -> bool {
        self.minimum.is_some()
            || self.maximum.is_some()
            || self.exclusive_minimum_limit.is_some()
            || self.exclusive_maximum_limit.is_some()
            || self.multiple_of.is_some()
    }
}

impl Default for NumberSchema {
    fn default() -> Self {
        Self {
            requires_number: true,
            requires_integer: false,
            minimum: None,
            maximum: None,
            exclusive_minimum: false,
            exclusive_maximum: false,
            exclusive_minimum_limit: None,
            exclusive_maximum_limit: None,
            multiple_of: None,
        }
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Conversion of Rust numbers into JSON numbers.
///
/// Returns `None` for NaN and infinities, which JSON cannot represent.
pub trait IntoNumber {
    fn into_number(self) -> Option<Number>;
}

macro_rules! impl_into_number {
    ($($t:ty),*) => {
        $(
            impl IntoNumber for $t {
                fn into_number(self) -> Option<Number> {
                    Some(Number::from(self))
                }
            }
        )*
    };
}

impl_into_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoNumber for f64 {
    fn into_number(self) -> Option<Number> {
        Number::from_f64(self)
    }
}

impl IntoNumber for f32 {
    fn into_number(self) -> Option<Number> {
        Number::from_f64(f64::from(self))
    }
}

impl IntoNumber for Number {
    fn into_number(self) -> Option<Number> {
        Some(self)
    }
}

impl IntoNumber for &Number {
    fn into_number(self) -> Option<Number> {
        Some(self.clone())
    }
}

/// Builder for [`NumberSchema`].
///
/// Invalid inputs (non-finite numbers, a non-positive `multipleOf`) are
/// remembered and surface from [`build`](Self::build).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberSchemaBuilder {
    requires_number: bool,
    requires_integer: bool,
    minimum: Option<Number>,
    maximum: Option<Number>,
    exclusive_minimum: bool,
    exclusive_maximum: bool,
    exclusive_minimum_limit: Option<Number>,
    exclusive_maximum_limit: Option<Number>,
    multiple_of: Option<Number>,
    #[serde(skip)]
    invalid: Option<SchemaError>,
}

impl Default for NumberSchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberSchemaBuilder {
    /// Creates a builder that requires numbers and nothing else.
    pub fn new() -> Self {
        Self {
            requires_number: true,
            requires_integer: false,
            minimum: None,
            maximum: None,
            exclusive_minimum: false,
            exclusive_maximum: false,
            exclusive_minimum_limit: None,
            exclusive_maximum_limit: None,
            multiple_of: None,
            invalid: None,
        }
    }

    pub fn requires_number(mut self, requires: bool) -> Self {
        self.requires_number = requires;
        self
    }

    pub fn requires_integer(mut self, requires: bool) -> Self {
        self.requires_integer = requires;
        self
    }

    pub fn minimum(mut self, value: impl IntoNumber) -> Self {
        self.minimum = self.finite("minimum", value);
        self
    }

    pub fn maximum(mut self, value: impl IntoNumber) -> Self {
        self.maximum = self.finite("maximum", value);
        self
    }

    /// Sets the legacy flag making `minimum` exclusive.
    pub fn exclusive_minimum(mut self, exclusive: bool) -> Self {
        self.exclusive_minimum = exclusive;
        self
    }

    /// Sets the legacy flag making `maximum` exclusive.
    pub fn exclusive_maximum(mut self, exclusive: bool) -> Self {
        self.exclusive_maximum = exclusive;
        self
    }

    /// Sets the standalone exclusive lower limit.
    pub fn exclusive_minimum_limit(mut self, value: impl IntoNumber) -> Self {
        self.exclusive_minimum_limit = self.finite("exclusiveMinimum", value);
        self
    }

    /// Sets the standalone exclusive upper limit.
    pub fn exclusive_maximum_limit(mut self, value: impl IntoNumber) -> Self {
        self.exclusive_maximum_limit = self.finite("exclusiveMaximum", value);
        self
    }

    pub fn multiple_of(mut self, value: impl IntoNumber) -> Self {
        self.multiple_of = self.finite("multipleOf", value);
        self
    }

    fn finite(&mut self, keyword: &'static str, value: impl IntoNumber) -> Option<Number> {
        let number = value.into_number();
        if number.is_none() && self.invalid.is_none() {
            self.invalid = Some(SchemaError::NonFinite { keyword });
        }
        number
    }

    /// Finishes the schema.
    pub fn build(self) -> SchemaResult<NumberSchema> {
        if let Some(error) = self.invalid {
            return Err(error);
        }
        if let Some(divisor) = &self.multiple_of
            && Numeric::from_json(divisor).to_f64() <= 0.0
        {
            return Err(SchemaError::NonPositiveMultipleOf {
                value: divisor.clone(),
            });
        }

        Ok(NumberSchema {
            requires_number: self.requires_number,
            requires_integer: self.requires_integer,
            minimum: self.minimum,
            maximum: self.maximum,
            exclusive_minimum: self.exclusive_minimum,
            exclusive_maximum: self.exclusive_maximum,
            exclusive_minimum_limit: self.exclusive_minimum_limit,
            exclusive_maximum_limit: self.exclusive_maximum_limit,
            multiple_of: self.multiple_of,
        })
    }
}

impl TryFrom<NumberSchemaBuilder> for NumberSchema {
    type Error = SchemaError;

    fn try_from(builder: NumberSchemaBuilder) -> SchemaResult<Self> {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn default_requires_number_only() {
        let schema = NumberSchema::builder().build().unwrap();
        assert_eq!(schema, NumberSchema::default());
        assert!(schema.requires_number());
        assert!(!schema.has_constraints());
    }

    #[test]
    fn lower_bound_carries_flag() {
        let schema = NumberSchema::builder()
            .minimum(5)
            .exclusive_minimum(true)
            .build()
            .unwrap();
        let bound = schema.lower_bound().unwrap();
        assert!(bound.exclusive);
        assert_eq!(bound.value, &Number::from(5));
        assert_eq!(schema.upper_bound(), None);
    }

    #[test]
    fn flag_without_bound_has_no_bound() {
        let schema = NumberSchema::builder()
            .exclusive_maximum(true)
            .build()
            .unwrap();
        assert_eq!(schema.upper_bound(), None);
    }

    #[test]
    fn nan_is_rejected() {
        let err = NumberSchema::builder().maximum(f64::NAN).build().unwrap_err();
        assert_eq!(err, SchemaError::NonFinite { keyword: "maximum" });
    }

    #[test]
    fn non_positive_multiple_of_is_rejected() {
        for divisor in [json!(0), json!(-2), json!(-0.5)] {
            let number = divisor.as_number().unwrap().clone();
            let err = NumberSchema::builder()
                .multiple_of(number.clone())
                .build()
                .unwrap_err();
            assert_eq!(err, SchemaError::NonPositiveMultipleOf { value: number });
        }
    }

    #[test]
    fn serde_roundtrip_keeps_both_encodings() {
        let schema = NumberSchema::builder()
            .minimum(5)
            .exclusive_minimum(true)
            .exclusive_minimum_limit(10)
            .multiple_of(0.5)
            .build()
            .unwrap();

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value,
            json!({
                "requiresNumber": true,
                "requiresInteger": false,
                "minimum": 5,
                "exclusiveMinimum": true,
                "exclusiveMaximum": false,
                "exclusiveMinimumLimit": 10,
                "multipleOf": 0.5
            })
        );

        let back: NumberSchema = serde_json::from_value(value).unwrap();
        assert_eq!(back, schema);
    }

    #[test]
    fn deserialize_validates() {
        let result: Result<NumberSchema, _> = serde_json::from_value(json!({"multipleOf": 0}));
        assert!(result.is_err());
    }
}
