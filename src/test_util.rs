//! Test-only builders for small telemetry tables.

use std::sync::Arc;

use arrow::{
    array::{
        Array, ArrayRef, Int32Array, ListArray, ListBuilder, StringArray, StringBuilder,
        StructArray,
    },
    buffer::{NullBuffer, OffsetBuffer},
    datatypes::{DataType, Field, Fields, Schema},
    record_batch::RecordBatch,
};

use crate::table::Table;

/// Three players at one tick: `(side, team, hp)`.
pub(crate) fn round_table() -> Table {
    let schema = Arc::new(Schema::new(vec![
        Field::new("side", DataType::Utf8, true),
        Field::new("team", DataType::Utf8, true),
        Field::new("hp", DataType::Int32, true),
    ]));
    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(vec!["T", "CT", "T"])),
            Arc::new(StringArray::from(vec!["Team2", "Team2", "Team1"])),
            Arc::new(Int32Array::from(vec![40, 90, 10])),
        ],
    )
    .expect("record batch");
    Table::from_batch(batch)
}

/// Inventory item fields: `weapon_name`, `weapon_class`.
pub(crate) fn inventory_item_fields() -> Fields {
    Fields::from(vec![
        Field::new("weapon_name", DataType::Utf8, true),
        Field::new("weapon_class", DataType::Utf8, true),
    ])
}

/// Builds a `List<Struct>` inventory column from per-row item lists.
pub(crate) fn inventory_column(rows: &[Option<Vec<(&str, &str)>>]) -> ArrayRef {
    let mut names = Vec::new();
    let mut classes = Vec::new();
    let mut offsets = vec![0usize];
    for row in rows {
        for (name, class) in row.iter().flatten() {
            names.push(*name);
            classes.push(*class);
        }
        offsets.push(names.len());
    }

    let items = StructArray::new(
        inventory_item_fields(),
        vec![
            Arc::new(StringArray::from(names)) as ArrayRef,
            Arc::new(StringArray::from(classes)) as ArrayRef,
        ],
        None,
    );
    let item_field = Arc::new(Field::new(
        "item",
        DataType::Struct(inventory_item_fields()),
        true,
    ));
    let offsets = OffsetBuffer::from_lengths(offsets.windows(2).map(|w| w[1] - w[0]));
    let nulls = NullBuffer::from(rows.iter().map(Option::is_some).collect::<Vec<_>>());
    Arc::new(ListArray::new(item_field, offsets, Arc::new(items), Some(nulls)))
}

/// Four players with inventories; the third has none recorded.
pub(crate) fn inventory_table() -> Table {
    let inventory = inventory_column(&[
        Some(vec![("AK-47", "Rifle"), ("Glock-18", "Pistols")]),
        Some(vec![("MP9", "SMG")]),
        None,
        Some(vec![]),
    ]);
    let schema = Arc::new(Schema::new(vec![
        Field::new("side", DataType::Utf8, true),
        Field::new("inventory", inventory.data_type().clone(), true),
    ]));
    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(vec!["T", "CT", "T", "CT"])),
            inventory,
        ],
    )
    .expect("record batch");
    Table::from_batch(batch)
}

/// Already projected weapon classes, with primary counts `[2, 1, 0, 3]`.
pub(crate) fn weapon_lists() -> ListArray {
    let mut builder = ListBuilder::new(StringBuilder::new());
    for row in [
        Some(vec!["Rifle", "SMG", "Pistols"]),
        Some(vec!["Rifle", "Grenade"]),
        None,
        Some(vec!["SMG", "SMG", "Rifle"]),
    ] {
        match row {
            Some(classes) => {
                for class in classes {
                    builder.values().append_value(class);
                }
                builder.append(true);
            }
            None => builder.append(false),
        }
    }
    builder.finish()
}
