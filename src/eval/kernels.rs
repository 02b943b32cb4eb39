//! Per-kind mask kernels built on Arrow compute.

use std::sync::Arc;

use arrow::{
    array::{Array, ArrayRef, BooleanArray, Scalar},
    buffer::BooleanBuffer,
    compute::{
        and, cast, cast_with_options, is_not_null,
        kernels::cmp::{eq, gt_eq, lt_eq},
        or_kleene, CastOptions,
    },
    datatypes::DataType,
};
use gamestate_predicate::ScalarValue;

use super::EvalError;

/// Mask with every slot set.
pub(crate) fn all_true(len: usize) -> BooleanArray {
    BooleanArray::new(BooleanBuffer::new_set(len), None)
}

fn all_false(len: usize) -> BooleanArray {
    BooleanArray::new(BooleanBuffer::new_unset(len), None)
}

/// Folds null slots into `false` so that missing values never satisfy a boundary.
pub(crate) fn nulls_as_false(mask: BooleanArray) -> BooleanArray {
    match mask.nulls() {
        Some(nulls) if nulls.null_count() > 0 => {
            let values = mask.values() & nulls.inner();
            BooleanArray::new(values, None)
        }
        _ => mask,
    }
}

/// Rows whose value lies in `[lower, upper]`. Null bounds are open.
pub(crate) fn range_mask(
    column: &str,
    array: &ArrayRef,
    lower: Option<&ScalarValue>,
    upper: Option<&ScalarValue>,
) -> Result<BooleanArray, EvalError> {
    let Some(array) = comparable(column, array)? else {
        return Ok(all_false(array.len()));
    };

    let lower = lower
        .filter(|value| !value.is_null())
        .map(|value| operands(column, &array, value))
        .transpose()?;
    let upper = upper
        .filter(|value| !value.is_null())
        .map(|value| operands(column, &array, value))
        .transpose()?;

    let mut mask = is_not_null(array.as_ref())?;
    match lower {
        Some(Operands::Compare(lhs, rhs)) => mask = and(&mask, &gt_eq(&lhs, &rhs)?)?,
        Some(Operands::AboveColumn) => return Ok(all_false(array.len())),
        Some(Operands::BelowColumn) | None => {}
    }
    match upper {
        Some(Operands::Compare(lhs, rhs)) => mask = and(&mask, &lt_eq(&lhs, &rhs)?)?,
        Some(Operands::BelowColumn) => return Ok(all_false(array.len())),
        Some(Operands::AboveColumn) | None => {}
    }
    Ok(nulls_as_false(mask))
}

/// Rows whose value equals one of `values`. Null members never match.
pub(crate) fn set_mask(
    column: &str,
    array: &ArrayRef,
    values: &[ScalarValue],
) -> Result<BooleanArray, EvalError> {
    let Some(array) = comparable(column, array)? else {
        return Ok(all_false(array.len()));
    };

    let mut mask = all_false(array.len());
    for value in values.iter().filter(|value| !value.is_null()) {
        if let Operands::Compare(lhs, rhs) = operands(column, &array, value)? {
            mask = or_kleene(&mask, &eq(&lhs, &rhs)?)?;
        }
    }
    Ok(nulls_as_false(mask))
}

/// Validates a selector against the table length.
pub(crate) fn selector_mask(
    column: &str,
    selector: &BooleanArray,
    num_rows: usize,
) -> Result<BooleanArray, EvalError> {
    if selector.len() != num_rows {
        return Err(EvalError::LengthMismatch {
            column: column.to_string(),
            expected: num_rows,
            actual: selector.len(),
        });
    }
    Ok(nulls_as_false(selector.clone()))
}

/// Decodes dictionaries and rejects nested columns.
///
/// Returns `None` for all-null columns, which no literal can satisfy.
fn comparable(column: &str, array: &ArrayRef) -> Result<Option<ArrayRef>, EvalError> {
    let array = match array.data_type() {
        DataType::Dictionary(_, value_type) => cast(array, value_type)?,
        _ => Arc::clone(array),
    };
    let data_type = array.data_type();
    if data_type.is_nested() {
        return Err(EvalError::UnsupportedColumn {
            column: column.to_string(),
            data_type: data_type.clone(),
        });
    }
    if matches!(data_type, DataType::Null) {
        return Ok(None);
    }
    Ok(Some(array))
}

/// A column and a literal brought to a shared Arrow type, or the literal's
/// position relative to every value the column type can hold.
enum Operands {
    /// Column and single-element literal of the same type.
    Compare(ArrayRef, Scalar<ArrayRef>),
    /// Integer literal smaller than the column type's minimum.
    BelowColumn,
    /// Integer literal larger than the column type's maximum.
    AboveColumn,
}

/// Brings the column and a literal to a shared Arrow type.
///
/// The literal is cast to the column type, except that a floating literal
/// against an integer column compares both sides as `Float64`. An integer
/// literal outside an integer column's width is not an error; it is reported
/// as lying below or above the column's domain.
fn operands(column: &str, array: &ArrayRef, value: &ScalarValue) -> Result<Operands, EvalError> {
    let lhs = match value {
        ScalarValue::Float64(_) if array.data_type().is_integer() => {
            cast(array, &DataType::Float64)?
        }
        _ => Arc::clone(array),
    };

    let options = CastOptions {
        safe: false,
        ..Default::default()
    };
    let integer_column = lhs.data_type().is_integer();
    match cast_with_options(&value.to_arrow_array(), lhs.data_type(), &options) {
        Ok(rhs) => Ok(Operands::Compare(lhs, Scalar::new(rhs))),
        Err(_) if integer_column && matches!(value, ScalarValue::Int64(v) if *v < 0) => {
            Ok(Operands::BelowColumn)
        }
        Err(_)
            if integer_column
                && matches!(value, ScalarValue::Int64(_) | ScalarValue::UInt64(_)) =>
        {
            Ok(Operands::AboveColumn)
        }
        Err(source) => Err(EvalError::Coercion {
            column: column.to_string(),
            value: value.clone(),
            source,
        }),
    }
}
