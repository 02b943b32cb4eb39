//! Command-line driver: load a snapshot, register boundaries, report matches.
//!
//! ```text
//! gamestate-cli game_state_frame_data.parquet --side T --team Team2 \
//!     --site BombsiteB --weapon-mix 2 --mean seconds
//! ```

use anyhow::Context;
use clap::Parser;
use gamestate::{
    analysis,
    projection::{weapon_mix_selector, PRIMARY_WEAPON_CLASSES},
    GameState, LoadOptions, ScalarValue,
};
use tracing_subscriber::EnvFilter;

/// Synthetic column name for the weapon-mix selector.
const WEAPON_MIX_COLUMN: &str = "has_weapon_mix";

#[derive(Parser, Debug)]
#[command(author, version, about = "Filter game-state telemetry by boundaries")]
struct Args {
    /// Parquet snapshot to read.
    path: std::path::PathBuf,
    /// Allowed team names.
    #[arg(long)]
    team: Vec<String>,
    /// Allowed sides (`T`, `CT`).
    #[arg(long)]
    side: Vec<String>,
    /// Allowed map areas, e.g. `BombsiteB`.
    #[arg(long)]
    site: Vec<String>,
    /// Inclusive range, `column=lo..hi`; either side may be empty.
    #[arg(long, value_parser = parse_range)]
    range: Vec<RangeArg>,
    /// Membership, `column=a,b,c`.
    #[arg(long, value_parser = parse_member)]
    member: Vec<MemberArg>,
    /// Require at least this many rifles or SMGs in the inventory.
    #[arg(long)]
    weapon_mix: Option<i64>,
    /// Report the mean of this column over the selected rows.
    #[arg(long)]
    mean: Option<String>,
    /// Read only these columns.
    #[arg(long, value_delimiter = ',')]
    columns: Vec<String>,
    /// Rows decoded per parquet batch.
    #[arg(long, default_value_t = gamestate::option::DEFAULT_BATCH_SIZE)]
    batch_size: usize,
}

#[derive(Clone, Debug)]
struct RangeArg {
    column: String,
    lower: Option<ScalarValue>,
    upper: Option<ScalarValue>,
}

#[derive(Clone, Debug)]
struct MemberArg {
    column: String,
    values: Vec<ScalarValue>,
}

fn parse_literal(raw: &str) -> ScalarValue {
    if let Ok(value) = raw.parse::<i64>() {
        return ScalarValue::Int64(value);
    }
    if let Ok(value) = raw.parse::<f64>() {
        return ScalarValue::Float64(value);
    }
    match raw {
        "true" => ScalarValue::Boolean(true),
        "false" => ScalarValue::Boolean(false),
        _ => ScalarValue::from(raw),
    }
}

fn parse_range(raw: &str) -> Result<RangeArg, String> {
    let (column, bounds) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected column=lo..hi, got `{raw}`"))?;
    let (lower, upper) = bounds
        .split_once("..")
        .ok_or_else(|| format!("expected lo..hi, got `{bounds}`"))?;
    let bound = |side: &str| (!side.is_empty()).then(|| parse_literal(side));
    Ok(RangeArg {
        column: column.to_string(),
        lower: bound(lower),
        upper: bound(upper),
    })
}

fn parse_member(raw: &str) -> Result<MemberArg, String> {
    let (column, values) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected column=a,b,c, got `{raw}`"))?;
    Ok(MemberArg {
        column: column.to_string(),
        values: values.split(',').map(parse_literal).collect(),
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut options = LoadOptions::from(&args.path).batch_size(args.batch_size);
    if !args.columns.is_empty() {
        options = options.projection(args.columns.iter().cloned());
    }

    let mut state = GameState::new(options);
    let rows = state
        .read_data()
        .with_context(|| format!("reading {}", args.path.display()))?
        .num_rows();

    if let Some(min_count) = args.weapon_mix {
        let classes = state.extract_weapon_classes()?;
        let selector = weapon_mix_selector(&classes, &PRIMARY_WEAPON_CLASSES, min_count)?;
        state
            .boundaries_mut()
            .set_boolean_selector(WEAPON_MIX_COLUMN, selector);
    }

    let boundaries = state.boundaries_mut();
    if !args.team.is_empty() {
        boundaries.team(args.team.iter().map(String::as_str));
    }
    if !args.side.is_empty() {
        boundaries.side(args.side.iter().map(String::as_str));
    }
    if !args.site.is_empty() {
        boundaries.site(args.site.iter().map(String::as_str));
    }
    for range in args.range {
        boundaries.set_range(range.column, range.lower, range.upper);
    }
    for member in args.member {
        boundaries.set_membership(member.column, member.values);
    }

    let selected = state.filtered()?;
    println!("matched {} of {} rows", selected.num_rows(), rows);

    if let Some(column) = args.mean {
        match analysis::mean(&selected, &column)? {
            Some(mean) => println!("mean {column}: {mean:.3}"),
            None => println!("mean {column}: no values"),
        }
    }
    Ok(())
}
