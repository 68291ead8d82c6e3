//! Prelude module for convenient imports.
//!
//! ```rust
//! use nebula_schema_number::prelude::*;
//! use serde_json::json;
//!
//! let schema = NumberSchema::builder().maximum(10).build().unwrap();
//! assert!(schema.is_valid(&json!(10)));
//! ```

pub use crate::foundation::{
    CollectingReporter, ExpectedKind, FailFastReporter, FailureReporter, Keyword, Validate,
    ValidationError, ValidationErrors, validate_each,
};

pub use crate::checker::{NumberChecker, check_number};
pub use crate::schema::{Bound, Draft, NumberSchema, NumberSchemaBuilder, SchemaError, SchemaLoader};
