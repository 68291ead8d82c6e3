//! Property-based tests for the numeric checker.

use nebula_schema_number::prelude::*;
use proptest::prelude::*;
use serde_json::{Value, json};

fn run(schema: &NumberSchema, candidate: &Value) -> ValidationErrors {
    let mut reporter = CollectingReporter::new();
    check_number(schema, candidate, &mut reporter);
    reporter.into_errors()
}

fn any_schema() -> impl Strategy<Value = NumberSchema> {
    (
        any::<bool>(),
        proptest::option::of(-1000i64..1000),
        proptest::option::of(-1000i64..1000),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(-1000i64..1000),
        proptest::option::of(-1000i64..1000),
        proptest::option::of(1u32..50),
    )
        .prop_map(
            |(integer, minimum, maximum, ex_min, ex_max, min_limit, max_limit, divisor)| {
                let mut builder = NumberSchema::builder()
                    .requires_integer(integer)
                    .exclusive_minimum(ex_min)
                    .exclusive_maximum(ex_max);
                if let Some(v) = minimum {
                    builder = builder.minimum(v);
                }
                if let Some(v) = maximum {
                    builder = builder.maximum(v);
                }
                if let Some(v) = min_limit {
                    builder = builder.exclusive_minimum_limit(v);
                }
                if let Some(v) = max_limit {
                    builder = builder.exclusive_maximum_limit(v);
                }
                if let Some(v) = divisor {
                    builder = builder.multiple_of(f64::from(v) / 10.0);
                }
                builder.build().unwrap()
            },
        )
}

fn any_candidate() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-2000i64..2000).prop_map(|i| json!(i)),
        (-2000.0f64..2000.0).prop_map(|f| json!(f)),
        Just(json!(null)),
        ".{0,8}".prop_map(|s| json!(s)),
    ]
}

// ============================================================================
// IDEMPOTENCY: the same pair always produces the same reports
// ============================================================================

proptest! {
    #[test]
    fn checking_is_idempotent(schema in any_schema(), candidate in any_candidate()) {
        let first = run(&schema, &candidate);
        let second = run(&schema, &candidate);
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// GATE: a type failure is alone
// ============================================================================

proptest! {
    #[test]
    fn type_mismatch_suppresses_everything_else(
        schema in any_schema(),
        candidate in any_candidate(),
    ) {
        let errors = run(&schema, &candidate);
        if errors.errors().iter().any(ValidationError::is_type_mismatch) {
            prop_assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn non_numbers_only_ever_fail_the_gate(schema in any_schema(), text in ".{0,8}") {
        let errors = run(&schema, &json!(text));
        prop_assert_eq!(errors.len(), 1);
        prop_assert!(errors.errors()[0].is_type_mismatch());
    }
}

// ============================================================================
// BOUNDS: exclusive is strictly stronger than inclusive
// ============================================================================

proptest! {
    #[test]
    fn inclusive_failure_implies_exclusive_failure(bound in -100i64..100, value in -100i64..100) {
        let inclusive = NumberSchema::builder().minimum(bound).build().unwrap();
        let exclusive = NumberSchema::builder()
            .minimum(bound)
            .exclusive_minimum(true)
            .build()
            .unwrap();

        let candidate = json!(value);
        if inclusive.validate(&candidate).is_err() {
            prop_assert!(exclusive.validate(&candidate).is_err());
        }
        prop_assert_eq!(exclusive.is_valid(&candidate), value > bound);
        prop_assert_eq!(inclusive.is_valid(&candidate), value >= bound);
    }

    #[test]
    fn limit_matches_flagged_bound(bound in -100i64..100, value in -100.0f64..100.0) {
        let flagged = NumberSchema::builder()
            .maximum(bound)
            .exclusive_maximum(true)
            .build()
            .unwrap();
        let limit = NumberSchema::builder()
            .exclusive_maximum_limit(bound)
            .build()
            .unwrap();

        let candidate = json!(value);
        prop_assert_eq!(flagged.validate(&candidate), limit.validate(&candidate));
    }
}

// ============================================================================
// MULTIPLE OF: decimal multiples are always divisible
// ============================================================================

proptest! {
    #[test]
    fn hundredths_are_multiples_of_a_hundredth(cents in -1_000_000i64..1_000_000) {
        let schema = NumberSchema::builder().multiple_of(0.01).build().unwrap();
        let candidate = json!(cents as f64 / 100.0);
        prop_assert!(schema.is_valid(&candidate), "{} rejected", candidate);
    }
}
