//! Boundary evaluation: turns a table plus registered boundaries into a row mask.
//!
//! Every boundary yields a per-row satisfaction vector; vectors are AND-combined
//! into a mask that starts all-true. Columns without a boundary do not affect the
//! mask. Null values never satisfy a range or set boundary, and the returned mask
//! never contains null slots.

mod error;
mod kernels;

use arrow::{
    array::{Array, BooleanArray},
    compute::and,
};
pub use error::EvalError;
use gamestate_predicate::{Boundaries, Boundary};

use crate::{
    observability::{log_debug, log_warn},
    table::Table,
};

/// Evaluates every registered boundary against `table`.
///
/// Range and set boundaries for columns the table does not have are ignored.
/// Selector boundaries read no column and always apply, so they may be
/// registered under synthetic names.
///
/// # Errors
/// Fails on a selector whose length differs from the table row count, on a
/// literal that cannot be cast to its column type, and on range or set
/// boundaries over nested columns. No partial mask is returned.
pub fn evaluate(table: &Table, boundaries: &Boundaries) -> Result<BooleanArray, EvalError> {
    let num_rows = table.num_rows();
    let mut mask = kernels::all_true(num_rows);
    let mut applied = 0usize;

    for column in table.columns() {
        let Some(boundary) = boundaries.get(column) else {
            continue;
        };
        let satisfied = column_mask(table, column, boundary)?;
        mask = and(&mask, &satisfied)?;
        applied += 1;
    }

    for (column, boundary) in boundaries.iter() {
        if table.column(column).is_some() {
            continue;
        }
        match boundary {
            Boundary::Selector(selector) => {
                let satisfied = selector_mask(column, selector, num_rows)?;
                mask = and(&mask, &satisfied)?;
                applied += 1;
            }
            Boundary::Range { .. } | Boundary::Set(_) => {
                log_debug!(
                    component = "eval",
                    event = "boundary_ignored",
                    column = column,
                    kind = %boundary.kind(),
                );
            }
            _ => {
                return Err(EvalError::UnknownConstraintKind {
                    column: column.to_string(),
                })
            }
        }
    }

    log_debug!(
        component = "eval",
        event = "boundaries_evaluated",
        rows = num_rows,
        applied = applied,
        selected = mask.true_count(),
    );
    Ok(mask)
}

/// Number of rows selected by a mask produced by [`evaluate`].
#[must_use]
pub fn count_selected(mask: &BooleanArray) -> usize {
    mask.true_count()
}

fn column_mask(
    table: &Table,
    column: &str,
    boundary: &Boundary,
) -> Result<BooleanArray, EvalError> {
    let Some(array) = table.column(column) else {
        return Ok(kernels::all_true(table.num_rows()));
    };
    log_debug!(
        component = "eval",
        event = "boundary_applied",
        column = column,
        kind = %boundary.kind(),
        data_type = %array.data_type(),
    );

    match boundary {
        Boundary::Range { lower, upper } => {
            kernels::range_mask(column, array, lower.as_ref(), upper.as_ref())
        }
        Boundary::Set(values) => kernels::set_mask(column, array, values),
        Boundary::Selector(selector) => selector_mask(column, selector, table.num_rows()),
        _ => Err(EvalError::UnknownConstraintKind {
            column: column.to_string(),
        }),
    }
}

fn selector_mask(
    column: &str,
    selector: &BooleanArray,
    num_rows: usize,
) -> Result<BooleanArray, EvalError> {
    kernels::selector_mask(column, selector, num_rows).inspect_err(|err| {
        log_warn!(
            component = "eval",
            event = "selector_rejected",
            column = column,
            error = %err,
        );
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::{
        array::{Int32Array, StringArray},
        datatypes::{DataType, Field, Schema},
        record_batch::RecordBatch,
    };
    use gamestate_predicate::ScalarValue;

    use super::*;
    use crate::test_util::round_table;

    fn bools(mask: &BooleanArray) -> Vec<bool> {
        assert_eq!(mask.null_count(), 0);
        mask.values().iter().collect()
    }

    #[test]
    fn no_boundaries_select_every_row() {
        let table = round_table();
        let mask = evaluate(&table, &Boundaries::new()).expect("evaluate");
        assert_eq!(bools(&mask), vec![true; table.num_rows()]);
    }

    #[test]
    fn end_to_end_side_team_hp() {
        let table = round_table();
        let mut boundaries = Boundaries::new();
        boundaries
            .side(["T"])
            .team(["Team2"])
            .set_range("hp", Some(0_i64), Some(50_i64));

        let mask = evaluate(&table, &boundaries).expect("evaluate");
        assert_eq!(bools(&mask), vec![true, false, false]);
        assert_eq!(count_selected(&mask), 1);
    }

    #[test]
    fn registration_order_does_not_matter() {
        let table = round_table();
        let mut forward = Boundaries::new();
        forward
            .set_range("hp", Some(20_i64), None::<i64>)
            .set_membership("team", ["Team2"]);
        let mut backward = Boundaries::new();
        backward
            .set_membership("team", ["Team2"])
            .set_range("hp", Some(20_i64), None::<i64>);

        assert_eq!(
            evaluate(&table, &forward).expect("forward"),
            evaluate(&table, &backward).expect("backward")
        );
    }

    #[test]
    fn boundary_on_missing_column_is_ignored() {
        let table = round_table();
        let mut boundaries = Boundaries::new();
        boundaries.set_range("armor", Some(0_i64), Some(0_i64));
        let mask = evaluate(&table, &boundaries).expect("evaluate");
        assert_eq!(bools(&mask), vec![true, true, true]);
    }

    #[test]
    fn value_boundaries_on_missing_columns_are_skipped_but_selectors_apply() {
        let table = round_table();
        let mut boundaries = Boundaries::new();
        boundaries
            .set_membership("weapon_class", ["Rifle"])
            .set_range("armor", None::<i64>, Some(0_i64))
            .set_boolean_selector("has_weapon_mix", BooleanArray::from(vec![true, true, false]));
        let mask = evaluate(&table, &boundaries).expect("evaluate");
        assert_eq!(bools(&mask), vec![true, true, false]);
    }

    #[test]
    fn unconstrained_columns_do_not_filter() {
        let table = round_table();
        let mut boundaries = Boundaries::new();
        boundaries.team(["Team2"]);
        let mask = evaluate(&table, &boundaries).expect("evaluate");
        assert_eq!(bools(&mask), vec![true, true, false]);
    }

    #[test]
    fn selector_passes_through_unchanged() {
        let schema = Arc::new(Schema::new(vec![Field::new("tick", DataType::Int32, false)]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(Int32Array::from(vec![1, 2, 3, 4, 5]))],
        )
        .expect("record batch");
        let table = Table::from_batch(batch);

        let selector = BooleanArray::from(vec![true, false, true, false, true]);
        let mut boundaries = Boundaries::new();
        boundaries.set_boolean_selector("has_weapon_mix", selector.clone());

        let mask = evaluate(&table, &boundaries).expect("evaluate");
        assert_eq!(mask, selector);
    }

    #[test]
    fn short_selector_fails_the_whole_call() {
        let table = round_table();
        let mut boundaries = Boundaries::new();
        boundaries
            .side(["T"])
            .set_boolean_selector("has_weapon_mix", BooleanArray::from(vec![true, false]));

        let err = evaluate(&table, &boundaries).expect_err("selector too short");
        assert!(matches!(
            err,
            EvalError::LengthMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn selector_registered_on_existing_column_replaces_value_check() {
        let table = round_table();
        let mut boundaries = Boundaries::new();
        boundaries.set_boolean_selector("hp", BooleanArray::from(vec![false, true, true]));
        let mask = evaluate(&table, &boundaries).expect("evaluate");
        assert_eq!(bools(&mask), vec![false, true, true]);
    }

    #[test]
    fn null_values_fail_value_boundaries() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("side", DataType::Utf8, true),
            Field::new("hp", DataType::Int32, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(StringArray::from(vec![Some("T"), None, Some("T")])),
                Arc::new(Int32Array::from(vec![Some(10), Some(10), None])),
            ],
        )
        .expect("record batch");
        let table = Table::from_batch(batch);

        let mut boundaries = Boundaries::new();
        boundaries
            .set_value("side", "T")
            .set_range("hp", None::<i64>, Some(100_i64));
        let mask = evaluate(&table, &boundaries).expect("evaluate");
        assert_eq!(bools(&mask), vec![true, false, false]);
    }

    #[test]
    fn boolean_columns_support_sets_and_ranges() {
        let schema = Arc::new(Schema::new(vec![Field::new(
            "is_alive",
            DataType::Boolean,
            true,
        )]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(BooleanArray::from(vec![Some(true), Some(false), None]))],
        )
        .expect("record batch");
        let table = Table::from_batch(batch);

        let mut boundaries = Boundaries::new();
        boundaries.set_membership("is_alive", [true]);
        assert_eq!(
            bools(&evaluate(&table, &boundaries).expect("set")),
            vec![true, false, false]
        );

        boundaries.set_range("is_alive", Some(false), None::<bool>);
        assert_eq!(
            bools(&evaluate(&table, &boundaries).expect("range")),
            vec![true, true, false]
        );
    }

    #[test]
    fn coercion_failure_aborts_evaluation() {
        let table = round_table();
        let mut boundaries = Boundaries::new();
        boundaries.set_membership("hp", [ScalarValue::from("full")]);
        assert!(matches!(
            evaluate(&table, &boundaries),
            Err(EvalError::Coercion { .. })
        ));
    }
}
