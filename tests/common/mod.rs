//! Common test utilities for integration tests.

use std::{fs::File, path::Path, sync::Arc};

use arrow::{
    array::{
        Array, ArrayRef, BooleanArray, Float64Array, Int32Array, ListArray, StringArray,
        StructArray,
    },
    buffer::{NullBuffer, OffsetBuffer},
    datatypes::{DataType, Field, Fields, Schema},
    record_batch::RecordBatch,
};
use parquet::arrow::ArrowWriter;

/// One player at one tick.
pub struct Frame {
    pub round_num: i32,
    pub side: &'static str,
    pub team: &'static str,
    pub hp: Option<i32>,
    pub area_name: &'static str,
    pub seconds: f64,
    pub is_alive: bool,
    pub inventory: Option<Vec<(&'static str, &'static str)>>,
}

/// Frames spanning two rounds; only T-side Team2 players enter BombsiteB.
pub fn frames() -> Vec<Frame> {
    vec![
        Frame {
            round_num: 1,
            side: "T",
            team: "Team2",
            hp: Some(100),
            area_name: "BombsiteB",
            seconds: 30.0,
            is_alive: true,
            inventory: Some(vec![("AK-47", "Rifle"), ("MAC-10", "SMG")]),
        },
        Frame {
            round_num: 1,
            side: "T",
            team: "Team2",
            hp: Some(45),
            area_name: "BombsiteB",
            seconds: 34.0,
            is_alive: true,
            inventory: Some(vec![("Glock-18", "Pistols")]),
        },
        Frame {
            round_num: 1,
            side: "CT",
            team: "Team1",
            hp: Some(80),
            area_name: "BombsiteB",
            seconds: 35.0,
            is_alive: true,
            inventory: Some(vec![("M4A4", "Rifle"), ("MP9", "SMG")]),
        },
        Frame {
            round_num: 2,
            side: "T",
            team: "Team2",
            hp: None,
            area_name: "BombsiteB",
            seconds: 41.0,
            is_alive: false,
            inventory: None,
        },
        Frame {
            round_num: 2,
            side: "T",
            team: "Team2",
            hp: Some(70),
            area_name: "BombsiteB",
            seconds: 50.0,
            is_alive: true,
            inventory: Some(vec![("Galil AR", "Rifle"), ("UMP-45", "SMG"), ("Flash", "Grenade")]),
        },
        Frame {
            round_num: 2,
            side: "T",
            team: "Team2",
            hp: Some(100),
            area_name: "TSpawn",
            seconds: 5.0,
            is_alive: true,
            inventory: Some(vec![("AK-47", "Rifle"), ("AWP", "Rifle")]),
        },
    ]
}

fn inventory_array(frames: &[Frame]) -> ArrayRef {
    let item_fields = Fields::from(vec![
        Field::new("weapon_name", DataType::Utf8, true),
        Field::new("weapon_class", DataType::Utf8, true),
    ]);
    let mut names = Vec::new();
    let mut classes = Vec::new();
    let mut lengths = Vec::new();
    for frame in frames {
        let items = frame.inventory.as_deref().unwrap_or_default();
        for (name, class) in items {
            names.push(*name);
            classes.push(*class);
        }
        lengths.push(items.len());
    }
    let items = StructArray::new(
        item_fields.clone(),
        vec![
            Arc::new(StringArray::from(names)) as ArrayRef,
            Arc::new(StringArray::from(classes)) as ArrayRef,
        ],
        None,
    );
    let nulls = NullBuffer::from(
        frames
            .iter()
            .map(|frame| frame.inventory.is_some())
            .collect::<Vec<_>>(),
    );
    Arc::new(ListArray::new(
        Arc::new(Field::new("item", DataType::Struct(item_fields), true)),
        OffsetBuffer::from_lengths(lengths),
        Arc::new(items),
        Some(nulls),
    ))
}

/// Builds the record batch for `frames`.
pub fn frames_batch(frames: &[Frame]) -> RecordBatch {
    let inventory = inventory_array(frames);
    let schema = Arc::new(Schema::new(vec![
        Field::new("round_num", DataType::Int32, false),
        Field::new("side", DataType::Utf8, false),
        Field::new("team", DataType::Utf8, false),
        Field::new("hp", DataType::Int32, true),
        Field::new("area_name", DataType::Utf8, false),
        Field::new("seconds", DataType::Float64, false),
        Field::new("is_alive", DataType::Boolean, false),
        Field::new("inventory", inventory.data_type().clone(), true),
    ]));
    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(Int32Array::from_iter_values(frames.iter().map(|f| f.round_num))),
            Arc::new(StringArray::from_iter_values(frames.iter().map(|f| f.side))),
            Arc::new(StringArray::from_iter_values(frames.iter().map(|f| f.team))),
            Arc::new(Int32Array::from_iter(frames.iter().map(|f| f.hp))),
            Arc::new(StringArray::from_iter_values(frames.iter().map(|f| f.area_name))),
            Arc::new(Float64Array::from_iter_values(frames.iter().map(|f| f.seconds))),
            Arc::new(BooleanArray::from_iter(frames.iter().map(|f| Some(f.is_alive)))),
            inventory,
        ],
    )
    .expect("record batch")
}

/// Writes `frames` to a parquet file at `path`.
pub fn write_frames(path: &Path, frames: &[Frame]) {
    let batch = frames_batch(frames);
    let file = File::create(path).expect("create parquet file");
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None).expect("parquet writer");
    writer.write(&batch).expect("write batch");
    writer.close().expect("close writer");
}
