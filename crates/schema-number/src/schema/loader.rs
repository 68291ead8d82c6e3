//! Loading numeric constraints from a schema document
//!
//! Draft 4 writes exclusivity as a boolean next to `minimum`/`maximum`:
//!
//! ```json
//! { "minimum": 5, "exclusiveMinimum": true }
//! ```
//!
//! Draft 6 and later write it as a standalone number:
//!
//! ```json
//! { "exclusiveMinimum": 5 }
//! ```
//!
//! The loader maps the boolean form to the legacy flag and the numeric form
//! to the standalone limit. By default each draft only accepts its own form;
//! [`SchemaLoader::lenient`] accepts both.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::error::{SchemaError, SchemaResult};
use super::{NumberSchema, NumberSchemaBuilder};
use crate::foundation::error::json_type_name;

// ============================================================================
// DRAFT
// ============================================================================

/// JSON Schema draft generation, as far as numeric keywords are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Draft {
    /// Boolean `exclusiveMinimum`/`exclusiveMaximum`.
    Draft4,
    /// Numeric `exclusiveMinimum`/`exclusiveMaximum`.
    Draft6,
    /// Same numeric rules as draft 6.
    #[default]
    Draft7,
}

impl Draft {
    /// Recognizes a `$schema` meta-schema URI.
    ///
    /// ```
    /// use nebula_schema_number::schema::Draft;
    ///
    /// assert_eq!(
    ///     Draft::from_schema_uri("http://json-schema.org/draft-04/schema#"),
    ///     Some(Draft::Draft4)
    /// );
    /// assert_eq!(Draft::from_schema_uri("https://example.com/custom"), None);
    /// ```
    pub fn from_schema_uri(uri: &str) -> Option<Self> {
        let uri = uri.trim_end_matches('#');
        let path = uri
            .strip_prefix("http://json-schema.org/")
            .or_else(|| uri.strip_prefix("https://json-schema.org/"))?;

        match path {
            "draft-04/schema" => Some(Self::Draft4),
            "draft-06/schema" => Some(Self::Draft6),
            "draft-07/schema" => Some(Self::Draft7),
            _ => None,
        }
    }

    /// Returns true if exclusivity is written as a boolean flag.
    pub const fn uses_exclusivity_flags(self) -> bool {
        matches!(self, Self::Draft4)
    }
}

impl fmt::Display for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Draft4 => "draft-04",
            Self::Draft6 => "draft-06",
            Self::Draft7 => "draft-07",
        })
    }
}

// ============================================================================
// LOADER
// ============================================================================

/// Reads the numeric keywords of a single schema node.
///
/// # Examples
///
/// ```
/// use nebula_schema_number::schema::{Draft, SchemaLoader};
/// use serde_json::json;
///
/// let schema = SchemaLoader::new(Draft::Draft4)
///     .load(&json!({"type": "integer", "minimum": 0, "exclusiveMinimum": true}))
///     .unwrap();
///
/// assert!(schema.requires_integer());
/// assert!(schema.exclusive_minimum());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SchemaLoader {
    draft: Draft,
    lenient: bool,
}

impl SchemaLoader {
    /// A strict loader for `draft`.
    pub const fn new(draft: Draft) -> Self {
        Self {
            draft,
            lenient: false,
        }
    }

    /// A loader accepting both exclusivity encodings.
    pub const fn lenient() -> Self {
        Self {
            draft: Draft::Draft7,
            lenient: true,
        }
    }

    /// A strict loader for the draft named by `$schema`, or the default draft.
    pub fn detect(schema: &Value) -> Self {
        let draft = schema
            .get("$schema")
            .and_then(Value::as_str)
            .and_then(Draft::from_schema_uri)
            .unwrap_or_default();
        Self::new(draft)
    }

    /// Toggles acceptance of both exclusivity encodings.
    pub const fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    pub const fn draft(&self) -> Draft {
        self.draft
    }

    /// Loads the numeric constraints of `schema`.
    ///
    /// Keywords other than `type`, `minimum`, `maximum`, `exclusiveMinimum`,
    /// `exclusiveMaximum` and `multipleOf` are ignored.
    pub fn load(&self, schema: &Value) -> SchemaResult<NumberSchema> {
        let object = schema.as_object().ok_or(SchemaError::NotAnObject {
            found: json_type_name(schema),
        })?;

        let mut builder = apply_type(NumberSchema::builder().requires_number(false), object)?;

        if let Some(minimum) = number_keyword(object, "minimum")? {
            builder = builder.minimum(minimum);
        }
        if let Some(maximum) = number_keyword(object, "maximum")? {
            builder = builder.maximum(maximum);
        }

        match self.exclusivity(object, "exclusiveMinimum")? {
            Some(Exclusivity::Flag(flag)) => builder = builder.exclusive_minimum(flag),
            Some(Exclusivity::Limit(limit)) => builder = builder.exclusive_minimum_limit(limit),
            None => {}
        }
        match self.exclusivity(object, "exclusiveMaximum")? {
            Some(Exclusivity::Flag(flag)) => builder = builder.exclusive_maximum(flag),
            Some(Exclusivity::Limit(limit)) => builder = builder.exclusive_maximum_limit(limit),
            None => {}
        }

        if let Some(divisor) = number_keyword(object, "multipleOf")? {
            builder = builder.multiple_of(divisor);
        }

        let schema = builder.build()?;
        tracing::debug!(
            draft = %self.draft,
            lenient = self.lenient,
            requires_number = schema.requires_number(),
            requires_integer = schema.requires_integer(),
            "loaded numeric schema"
        );
        Ok(schema)
    }

    fn exclusivity(
        &self,
        object: &Map<String, Value>,
        keyword: &'static str,
    ) -> SchemaResult<Option<Exclusivity>> {
        let flags = self.draft.uses_exclusivity_flags();
        match object.get(keyword) {
            None => Ok(None),
            Some(Value::Bool(flag)) if flags || self.lenient => Ok(Some(Exclusivity::Flag(*flag))),
            Some(Value::Number(limit)) if !flags || self.lenient => {
                Ok(Some(Exclusivity::Limit(limit.clone())))
            }
            Some(value @ (Value::Bool(_) | Value::Number(_))) => {
                Err(SchemaError::ExclusivityEncoding {
                    keyword,
                    found: json_type_name(value),
                    draft: self.draft,
                })
            }
            Some(other) => Err(SchemaError::InvalidKeywordType {
                keyword,
                expected: "boolean or number",
                found: json_type_name(other),
            }),
        }
    }
}

enum Exclusivity {
    Flag(bool),
    Limit(Number),
}

fn number_keyword(
    object: &Map<String, Value>,
    keyword: &'static str,
) -> SchemaResult<Option<Number>> {
    match object.get(keyword) {
        None => Ok(None),
        Some(Value::Number(n)) => Ok(Some(n.clone())),
        Some(other) => Err(SchemaError::InvalidKeywordType {
            keyword,
            expected: "number",
            found: json_type_name(other),
        }),
    }
}

/// Applies the `type` keyword.
///
/// With a type array, numbers are only required when every listed type is
/// numeric; other types belong to other schemas and must not be rejected here.
fn apply_type(
    builder: NumberSchemaBuilder,
    object: &Map<String, Value>,
) -> SchemaResult<NumberSchemaBuilder> {
    match object.get("type") {
        None => Ok(builder),
        Some(Value::String(name)) => match name.as_str() {
            "number" => Ok(builder.requires_number(true)),
            "integer" => Ok(builder.requires_number(true).requires_integer(true)),
            other => Err(SchemaError::NotNumeric {
                found: other.to_owned(),
            }),
        },
        Some(Value::Array(names)) => {
            let mut number = false;
            let mut integer = false;
            let mut other = false;
            for name in names {
                match name.as_str() {
                    Some("number") => number = true,
                    Some("integer") => integer = true,
                    Some(_) => other = true,
                    None => {
                        return Err(SchemaError::InvalidKeywordType {
                            keyword: "type",
                            expected: "array of strings",
                            found: json_type_name(name),
                        });
                    }
                }
            }
            if !number && !integer {
                return Err(SchemaError::NotNumeric {
                    found: Value::Array(names.clone()).to_string(),
                });
            }
            Ok(builder
                .requires_number(!other)
                .requires_integer(integer && !number))
        }
        Some(other) => Err(SchemaError::InvalidKeywordType {
            keyword: "type",
            expected: "string or array",
            found: json_type_name(other),
        }),
    }
}
