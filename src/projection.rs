//! Per-row projections over the nested `inventory` column.
//!
//! These produce derived arrays that callers either append to the table or
//! register as selector boundaries.

use std::sync::Arc;

use arrow::{
    array::{Array, AsArray, BooleanArray, Int64Array, ListArray, StringArray},
    buffer::NullBuffer,
    compute::{cast, kernels::cmp::gt_eq},
    datatypes::{DataType, Field},
    error::ArrowError,
};
use thiserror::Error;

use crate::{observability::log_debug, table::Table};

/// Nested column listing the items each player carries.
pub const INVENTORY_COLUMN: &str = "inventory";
/// Struct field inside each inventory item, and name of the derived column.
pub const WEAPON_CLASS_COLUMN: &str = "weapon_class";
/// Weapon classes counted toward a primary-weapon loadout.
pub const PRIMARY_WEAPON_CLASSES: [&str; 2] = ["Rifle", "SMG"];

/// Error returned by inventory projections.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// The table has no column with the requested name.
    #[error("column `{name}` does not exist")]
    MissingColumn {
        /// Requested column.
        name: String,
    },
    /// The inventory column is not a list of structs carrying weapon classes.
    #[error("inventory has unexpected shape: {reason}")]
    InvalidInventory {
        /// What was found instead.
        reason: String,
    },
    /// An Arrow kernel failed.
    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
}

/// Projects `inventory: List<Struct{weapon_class, ..}>` to `List<Utf8>`.
///
/// Rows with a null inventory stay null; null items yield null entries.
pub fn extract_weapon_classes(table: &Table) -> Result<ListArray, ProjectionError> {
    let inventory = table
        .column(INVENTORY_COLUMN)
        .ok_or_else(|| ProjectionError::MissingColumn {
            name: INVENTORY_COLUMN.to_string(),
        })?;
    let list = inventory
        .as_list_opt::<i32>()
        .ok_or_else(|| ProjectionError::InvalidInventory {
            reason: format!("expected a list column, found {}", inventory.data_type()),
        })?;
    let items = list
        .values()
        .as_struct_opt()
        .ok_or_else(|| ProjectionError::InvalidInventory {
            reason: format!("expected struct items, found {}", list.values().data_type()),
        })?;
    let classes = items
        .column_by_name(WEAPON_CLASS_COLUMN)
        .ok_or_else(|| ProjectionError::InvalidInventory {
            reason: format!("items have no `{WEAPON_CLASS_COLUMN}` field"),
        })?;

    let classes = cast(classes, &DataType::Utf8)?;
    let classes = utf8(&classes)?;
    let nulls = NullBuffer::union(items.nulls(), classes.nulls());
    let classes = StringArray::try_new(
        classes.offsets().clone(),
        classes.values().clone(),
        nulls,
    )?;

    let field = Arc::new(Field::new("item", DataType::Utf8, true));
    let projected = ListArray::try_new(
        field,
        list.offsets().clone(),
        Arc::new(classes),
        list.nulls().cloned(),
    )?;
    log_debug!(
        component = "projection",
        event = "weapon_classes_extracted",
        rows = projected.len(),
        null_rows = projected.null_count(),
    );
    Ok(projected)
}

/// Counts, per row, the entries whose class is one of `classes`.
///
/// Null rows and null entries count as zero.
pub fn count_weapon_classes(
    weapon_classes: &ListArray,
    classes: &[&str],
) -> Result<Int64Array, ProjectionError> {
    let values = utf8(weapon_classes.values())?;
    let counts = weapon_classes
        .value_offsets()
        .windows(2)
        .enumerate()
        .map(|(row, window)| {
            if weapon_classes.is_null(row) {
                return 0;
            }
            let (start, end) = (window[0] as usize, window[1] as usize);
            (start..end)
                .filter(|&idx| {
                    values.is_valid(idx)
                        && classes.iter().any(|class| *class == values.value(idx))
                })
                .count() as i64
        })
        .collect::<Vec<_>>();
    Ok(Int64Array::from(counts))
}

/// Selector that is true where at least `min_count` entries fall in `classes`.
///
/// `weapon_mix_selector(&list, &PRIMARY_WEAPON_CLASSES, 2)` marks rows carrying
/// two or more rifles or SMGs.
pub fn weapon_mix_selector(
    weapon_classes: &ListArray,
    classes: &[&str],
    min_count: i64,
) -> Result<BooleanArray, ProjectionError> {
    let counts = count_weapon_classes(weapon_classes, classes)?;
    Ok(gt_eq(&counts, &Int64Array::new_scalar(min_count))?)
}

fn utf8(array: &dyn Array) -> Result<&StringArray, ProjectionError> {
    array
        .as_string_opt::<i32>()
        .ok_or_else(|| ProjectionError::InvalidInventory {
            reason: format!("expected utf8 weapon classes, found {}", array.data_type()),
        })
}
