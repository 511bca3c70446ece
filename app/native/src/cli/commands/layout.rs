//! Layout CLI command.
//!
//! Builds a workspace from the configuration and the command-line overrides,
//! replays shortcuts and resize gestures, and prints the resulting geometry.

use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::types::{AreaSpec, CliLayoutType, ResizeSpec};
use crate::cli::output;
use crate::config::{self, GapValue, TricolConfig};
use crate::error::TricolError;
use crate::tiling::{Rect, ShortcutCommand, StrategyState, Tile, TilingWorkspace};

/// Arguments for the `layout` command.
#[derive(Args, Debug)]
#[command(after_long_help = r#"Examples:
  tricol layout --tiles 4
  tricol layout --tiles 3 --resize 2:west:20
  tricol layout --layout left-master-rows --tiles 5 --area 1920x1080+0+25
  tricol layout --tiles 6 --shortcut increase-master --json"#)]
pub struct LayoutArgs {
    /// Layout to arrange tiles with. Defaults to the configured layout.
    #[arg(long, short, value_enum)]
    pub layout: Option<CliLayoutType>,

    /// Number of tiles to arrange.
    #[arg(long, short, default_value_t = 3)]
    pub tiles: u32,

    /// Screen area as WIDTHxHEIGHT or WIDTHxHEIGHT+X+Y.
    #[arg(long, short, default_value = "1440x900", value_name = "AREA")]
    pub area: String,

    /// Gap between adjacent tiles, in pixels.
    #[arg(long, value_name = "PX")]
    pub gap: Option<u32>,

    /// Gap between the tiles and the screen edges, in pixels.
    #[arg(long, value_name = "PX")]
    pub outer_gap: Option<u32>,

    /// Initial share of the width given to the master column.
    #[arg(long, value_name = "RATIO")]
    pub ratio: Option<f64>,

    /// Initial number of tiles the master column holds.
    #[arg(long, value_name = "N")]
    pub capacity: Option<u32>,

    /// Resize gesture as TILE:EDGE:PX, applied after all shortcuts.
    ///
    /// EDGE is one of north, south, east, west. May be repeated; gestures are
    /// applied in the order given.
    #[arg(long = "resize", value_name = "TILE:EDGE:PX", allow_hyphen_values = true)]
    pub resizes: Vec<String>,

    /// Shortcut to apply before any resize. May be repeated.
    ///
    /// One of increase-master, decrease-master, shift-master-left,
    /// shift-master-right.
    #[arg(long = "shortcut", value_name = "CMD")]
    pub shortcuts: Vec<String>,

    /// Output the result as JSON.
    #[arg(long, short)]
    pub json: bool,
}

impl LayoutArgs {
    /// Applies the command-line overrides on top of `config`.
    fn configure(&self, mut config: TricolConfig) -> TricolConfig {
        if let Some(layout) = self.layout {
            config.layout.default = layout.into();
        }
        if let Some(gap) = self.gap {
            config.layout.tile_layout_gap = gap;
        }
        if let Some(ratio) = self.ratio {
            config.layout.master_ratio = ratio;
        }
        if let Some(capacity) = self.capacity {
            config.layout.master_capacity = capacity;
        }
        if let Some(outer) = self.outer_gap {
            config.gaps.outer = GapValue::Uniform(outer);
        }
        config
    }
}

/// Execute the layout command.
///
/// # Errors
///
/// Returns an error if an argument is malformed, a gesture names a tile that
/// does not exist, or the output cannot be serialized.
pub fn execute(args: &LayoutArgs) -> Result<(), TricolError> {
    let workspace = build_workspace(args, config::get_config())?;

    if args.json {
        let report = LayoutReport::new(&workspace);
        output::print_highlighted_json(&serde_json::to_value(&report)?);
    } else {
        print_table(&workspace);
    }

    Ok(())
}

/// Builds the workspace described by `args` and replays its gestures.
fn build_workspace(
    args: &LayoutArgs,
    base: &TricolConfig,
) -> Result<TilingWorkspace, TricolError> {
    let AreaSpec(frame) = args.area.parse().map_err(TricolError::InvalidArguments)?;
    let shortcuts = args
        .shortcuts
        .iter()
        .map(|s| s.parse::<ShortcutCommand>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(TricolError::InvalidArguments)?;
    let resizes = args
        .resizes
        .iter()
        .map(|s| s.parse::<ResizeSpec>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(TricolError::InvalidArguments)?;

    let config = args.configure(base.clone());
    let mut workspace = TilingWorkspace::new("cli", frame, &config);
    for tile in crate::tiling::state::tiles_with_ids(args.tiles) {
        workspace.push_tile(tile);
    }

    for command in shortcuts {
        workspace.shortcut(command);
    }

    for spec in resizes {
        if !workspace.resize(spec.tile, spec.delta()) {
            return Err(TricolError::InvalidArguments(format!(
                "Cannot resize tile {}: the layout has {} tiles",
                spec.tile, args.tiles
            )));
        }
    }

    Ok(workspace)
}

/// JSON shape of the `layout` command output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutReport<'a> {
    description: String,
    state: StrategyState,
    area: Rect,
    tiles: &'a [Tile],
}

impl<'a> LayoutReport<'a> {
    fn new(workspace: &'a TilingWorkspace) -> Self {
        Self {
            description: workspace.describe(),
            state: workspace.state(),
            area: workspace.usable_area(),
            tiles: workspace.tiles(),
        }
    }
}

#[derive(Tabled)]
struct TileRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "X")]
    x: String,
    #[tabled(rename = "Y")]
    y: String,
    #[tabled(rename = "Width")]
    width: String,
    #[tabled(rename = "Height")]
    height: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Row width")]
    row_width: String,
}

impl From<&Tile> for TileRow {
    fn from(tile: &Tile) -> Self {
        let g = tile.geometry;
        Self {
            id: tile.id.0,
            x: format!("{:.1}", g.x),
            y: format!("{:.1}", g.y),
            width: format!("{:.1}", g.width),
            height: format!("{:.1}", g.height),
            weight: format!("{:.3}", tile.weight),
            row_width: format!("{:.3}", tile.row_width_weight),
        }
    }
}

fn print_table(workspace: &TilingWorkspace) {
    println!("{}", workspace.describe().bold());

    if workspace.tiles().is_empty() {
        println!("No tiles.");
        return;
    }

    let rows: Vec<TileRow> = workspace.tiles().iter().map(TileRow::from).collect();
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(0..7)).with(Alignment::right()))
        .to_string();

    let area = workspace.usable_area();
    println!(
        "{} {}x{} at ({}, {})",
        "Area:".dimmed(),
        area.width,
        area.height,
        area.x,
        area.y
    );
    println!("{table}");
}
