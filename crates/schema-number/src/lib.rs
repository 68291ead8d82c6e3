//! # nebula-schema-number
//!
//! Checks a single JSON value against the numeric keywords of a JSON Schema:
//! `type` (`number` / `integer`), `minimum`, `maximum`, both encodings of
//! `exclusiveMinimum` / `exclusiveMaximum`, and `multipleOf`.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_schema_number::prelude::*;
//! use serde_json::json;
//!
//! let schema = NumberSchema::from_json(&json!({
//!     "type": "number",
//!     "minimum": 0,
//!     "exclusiveMaximum": 100,
//!     "multipleOf": 0.01
//! }))
//! .unwrap();
//!
//! assert!(schema.validate(&json!(19.99)).is_ok());
//!
//! let errors = schema.validate(&json!(100)).unwrap_err();
//! assert_eq!(errors.codes(), vec!["exclusiveMaximum"]);
//! ```
//!
//! ## Exclusivity
//!
//! Draft 4 schemas write `"exclusiveMinimum": true` next to `minimum`;
//! later drafts write `"exclusiveMinimum": 5` on its own. A [`NumberSchema`]
//! keeps both forms and checks both, so a schema mixing them behaves as the
//! logical AND of every bound it declares.
//!
//! ## Reporting
//!
//! The checker never stops early and never returns errors itself. Failures go
//! to a [`FailureReporter`](foundation::FailureReporter):
//! [`CollectingReporter`](foundation::CollectingReporter) keeps all of them,
//! [`FailFastReporter`](foundation::FailFastReporter) keeps the first.

pub mod checker;
pub mod foundation;
pub mod number;
pub mod prelude;
pub mod schema;

pub use checker::{NumberChecker, check_number};
pub use number::Numeric;
pub use schema::{NumberSchema, NumberSchemaBuilder, SchemaError};
