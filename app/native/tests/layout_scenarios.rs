//! End-to-end layout scenarios.
//!
//! These drive the strategies through the public API only, the way a host
//! would: build a tile list, `apply`, feed resize gestures through `adjust`,
//! and `apply` again.
//!
//! ```bash
//! cargo test -p tricol --test layout_scenarios
//! ```

use tricol_lib::config::{LayoutConfig, LayoutKind, TricolConfig};
use tricol_lib::tiling::state::tiles_with_ids;
use tricol_lib::tiling::{
    LayoutStrategy, LeftMasterColumns, LeftMasterRows, Rect, ResizeDelta, ShortcutCommand, Tile,
    TileId, TileState, TilingWorkspace,
};

// ============================================================================
// Helpers
// ============================================================================

const GAP: f64 = 10.0;

fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-6 }

fn assert_rect(actual: Rect, expected: Rect) {
    assert!(
        approx(actual.x, expected.x)
            && approx(actual.y, expected.y)
            && approx(actual.width, expected.width)
            && approx(actual.height, expected.height),
        "expected {expected:?}, got {actual:?}"
    );
}

fn config_with_ratio(ratio: f64) -> LayoutConfig {
    LayoutConfig {
        master_ratio: ratio,
        ..LayoutConfig::default()
    }
}

fn area_1000() -> Rect { Rect::new(0.0, 0.0, 1000.0, 600.0) }

fn arranged(strategy: &dyn LayoutStrategy, count: u32, area: &Rect) -> Vec<Tile> {
    let mut tiles = tiles_with_ids(count);
    strategy.apply(&mut tiles, area, GAP);
    tiles
}

// ============================================================================
// Column Layout Scenarios
// ============================================================================

#[test]
fn test_two_tiles_split_at_master_ratio() {
    let strategy = LeftMasterColumns::new(&config_with_ratio(0.6));
    let tiles = arranged(&strategy, 2, &area_1000());

    assert_rect(tiles[0].geometry, Rect::new(0.0, 0.0, 595.0, 600.0));
    assert_rect(tiles[1].geometry, Rect::new(605.0, 0.0, 395.0, 600.0));
    assert!(tiles.iter().all(|t| t.state == TileState::Tiled));
}

#[test]
fn test_three_tiles_open_both_stacks() {
    let strategy = LeftMasterColumns::new(&config_with_ratio(0.5));
    let tiles = arranged(&strategy, 3, &area_1000());

    assert_rect(tiles[0].geometry, Rect::new(0.0, 0.0, 495.0, 600.0));
    assert_rect(tiles[1].geometry, Rect::new(505.0, 0.0, 242.5, 600.0));
    assert_rect(tiles[2].geometry, Rect::new(757.5, 0.0, 242.5, 600.0));
}

#[test]
fn test_one_tile_past_capacity_opens_single_stack() {
    let config = LayoutConfig {
        master_ratio: 0.5,
        master_capacity: 2,
        ..LayoutConfig::default()
    };
    let tiles = arranged(&LeftMasterColumns::new(&config), 3, &area_1000());

    assert_rect(tiles[0].geometry, Rect::new(0.0, 0.0, 495.0, 295.0));
    assert_rect(tiles[1].geometry, Rect::new(0.0, 305.0, 495.0, 295.0));
    assert_rect(tiles[2].geometry, Rect::new(505.0, 0.0, 495.0, 600.0));
}

#[test]
fn test_four_tiles_use_three_columns() {
    let strategy = LeftMasterColumns::new(&config_with_ratio(0.6));
    let tiles = arranged(&strategy, 4, &Rect::new(0.0, 0.0, 1200.0, 800.0));

    // Master, then two tiles in the left stack and one in the right stack.
    assert_rect(tiles[0].geometry, Rect::new(0.0, 0.0, 715.0, 800.0));
    assert_rect(tiles[1].geometry, Rect::new(725.0, 0.0, 232.5, 395.0));
    assert_rect(tiles[2].geometry, Rect::new(725.0, 405.0, 232.5, 395.0));
    assert_rect(tiles[3].geometry, Rect::new(967.5, 0.0, 232.5, 800.0));
}

#[test]
fn test_master_capacity_fills_before_stacks() {
    let config = LayoutConfig {
        master_capacity: 4,
        ..LayoutConfig::default()
    };
    let strategy = LeftMasterColumns::new(&config);
    let tiles = arranged(&strategy, 4, &Rect::new(0.0, 0.0, 1000.0, 830.0));

    for (i, tile) in tiles.iter().enumerate() {
        assert!(approx(tile.geometry.width, 1000.0));
        assert!(approx(tile.geometry.height, 200.0), "tile {i}: {:?}", tile.geometry);
    }
}

#[test]
fn test_resize_round_trip_moves_seam_by_delta() {
    let area = area_1000();
    for d in [-120.0, -20.0, 5.5, 20.0, 80.0] {
        let mut strategy = LeftMasterColumns::new(&config_with_ratio(0.6));
        let mut tiles = arranged(&strategy, 2, &area);
        let before = tiles[0].geometry.width;

        strategy.adjust(&area, &mut tiles, TileId(2), ResizeDelta::west(d), GAP);
        strategy.apply(&mut tiles, &area, GAP);

        assert!(approx(tiles[0].geometry.width, before - d), "delta {d}");
        assert!(approx(tiles[1].geometry.width, 395.0 + d), "delta {d}");
    }
}

#[test]
fn test_resize_round_trip_clamps_at_ratio_bounds() {
    let area = area_1000();
    let mut strategy = LeftMasterColumns::new(&config_with_ratio(0.6));
    let mut tiles = arranged(&strategy, 2, &area);

    strategy.adjust(&area, &mut tiles, TileId(2), ResizeDelta::west(900.0), GAP);
    strategy.apply(&mut tiles, &area, GAP);
    assert!(approx(tiles[0].geometry.width, 195.0));

    strategy.adjust(&area, &mut tiles, TileId(1), ResizeDelta::east(900.0), GAP);
    strategy.apply(&mut tiles, &area, GAP);
    assert!(approx(tiles[0].geometry.width, 745.0));
}

#[test]
fn test_stack_resize_only_moves_neighbours() {
    let area = Rect::new(0.0, 0.0, 1000.0, 900.0);
    let config = LayoutConfig {
        master_capacity: 1,
        ..LayoutConfig::default()
    };
    let mut strategy = LeftMasterColumns::new(&config);
    // Six tiles: master, three in the left stack, two in the right stack.
    let mut tiles = arranged(&strategy, 6, &area);
    let right_before: Vec<Rect> = tiles[4..].iter().map(|t| t.geometry).collect();
    let top_before = tiles[1].geometry;

    strategy.adjust(&area, &mut tiles, TileId(3), ResizeDelta::south(40.0), GAP);
    strategy.apply(&mut tiles, &area, GAP);

    assert_rect(tiles[1].geometry, top_before);
    assert!(approx(tiles[2].geometry.height, 290.0 + 40.0));
    assert!(approx(tiles[3].geometry.height, 295.0 - 40.0));
    for (tile, before) in tiles[4..].iter().zip(right_before) {
        assert_rect(tile.geometry, before);
    }
}

#[test]
fn test_diagonal_drag_moves_both_seams() {
    let area = area_1000();
    let mut strategy = LeftMasterColumns::new(&config_with_ratio(0.6));
    let mut tiles = arranged(&strategy, 4, &area);
    let right_before = tiles[3].geometry;

    strategy.adjust(&area, &mut tiles, TileId(3), ResizeDelta::new(30.0, 0.0, 0.0, 25.0), GAP);
    strategy.apply(&mut tiles, &area, GAP);

    assert!(approx(tiles[0].geometry.width, 570.0));
    assert!(approx(tiles[1].geometry.height, 265.0));
    assert!(approx(tiles[2].geometry.height, 325.0));
    assert!(approx(tiles[2].geometry.x, 580.0));
    assert_rect(tiles[3].geometry, right_before);
}

#[test]
fn test_ignored_resizes_change_nothing() {
    let area = area_1000();
    let mut strategy = LeftMasterColumns::new(&config_with_ratio(0.6));
    let mut single = arranged(&strategy, 1, &area);
    strategy.adjust(&area, &mut single, TileId(1), ResizeDelta::east(50.0), GAP);

    let mut tiles = arranged(&strategy, 2, &area);
    strategy.adjust(&area, &mut tiles, TileId(42), ResizeDelta::east(50.0), GAP);

    assert!(approx(strategy.master_ratio(), 0.6));
    assert!(tiles.iter().all(|t| approx(t.weight, 1.0)));
}

// ============================================================================
// Row Layout Scenarios
// ============================================================================

#[test]
fn test_rows_pair_up_stack_tiles() {
    let strategy = LeftMasterRows::new(&config_with_ratio(0.6));
    let tiles = arranged(&strategy, 6, &area_1000());

    assert_rect(tiles[0].geometry, Rect::new(0.0, 0.0, 595.0, 600.0));
    // Three rows cut at 200 and 400, the last holding one tile.
    assert_rect(tiles[1].geometry, Rect::new(605.0, 0.0, 192.5, 195.0));
    assert!(approx(tiles[3].geometry.height, 190.0));
    assert!(approx(tiles[2].geometry.x, 802.5));
    assert!(approx(tiles[3].geometry.y, tiles[4].geometry.y));
    assert!(approx(tiles[5].geometry.width, 395.0));
    assert!(approx(tiles[5].geometry.y + tiles[5].geometry.height, 600.0));
}

#[test]
fn test_row_width_resize_stays_inside_row() {
    let area = area_1000();
    let mut strategy = LeftMasterRows::new(&config_with_ratio(0.6));
    let mut tiles = arranged(&strategy, 5, &area);
    let second_row: Vec<Rect> = tiles[3..].iter().map(|t| t.geometry).collect();

    strategy.adjust(&area, &mut tiles, TileId(2), ResizeDelta::east(20.0), GAP);
    strategy.apply(&mut tiles, &area, GAP);

    assert!(approx(tiles[1].geometry.width, 212.5));
    assert!(approx(tiles[2].geometry.x, 827.5));
    assert!(approx(tiles[2].geometry.width, 172.5));
    assert_eq!(tiles[3..].iter().map(|t| t.geometry).collect::<Vec<_>>(), second_row);
    assert!(approx(strategy.master_ratio(), 0.6));
}

#[test]
fn test_row_height_resize_moves_whole_row() {
    let area = area_1000();
    let mut strategy = LeftMasterRows::new(&config_with_ratio(0.6));
    let mut tiles = arranged(&strategy, 5, &area);

    strategy.adjust(&area, &mut tiles, TileId(3), ResizeDelta::south(30.0), GAP);
    strategy.apply(&mut tiles, &area, GAP);

    assert!(approx(tiles[1].weight, tiles[2].weight));
    assert!(approx(tiles[1].geometry.height, 325.0));
    assert!(approx(tiles[2].geometry.height, 325.0));
    assert!(approx(tiles[3].geometry.y, 335.0));
    assert!(approx(tiles[4].geometry.height, 265.0));
}

#[test]
fn test_rows_with_three_tiles_stack_vertically() {
    let strategy = LeftMasterRows::new(&config_with_ratio(0.5));
    let tiles = arranged(&strategy, 3, &area_1000());

    assert_rect(tiles[0].geometry, Rect::new(0.0, 0.0, 495.0, 600.0));
    assert_rect(tiles[1].geometry, Rect::new(505.0, 0.0, 495.0, 295.0));
    assert_rect(tiles[2].geometry, Rect::new(505.0, 305.0, 495.0, 295.0));
}

#[test]
fn test_rows_with_two_tiles_match_columns() {
    let columns = LeftMasterColumns::new(&config_with_ratio(0.5));
    let rows = LeftMasterRows::new(&config_with_ratio(0.5));

    let a = arranged(&columns, 2, &area_1000());
    let b = arranged(&rows, 2, &area_1000());
    assert_eq!(a, b);
}

// ============================================================================
// Shortcuts and Cloning
// ============================================================================

#[test]
fn test_increase_master_clamps_at_capacity_max() {
    let mut strategy = LeftMasterColumns::new(&LayoutConfig::default());
    for _ in 0..20 {
        assert!(strategy.handle_shortcut(ShortcutCommand::IncreaseMaster));
    }
    assert_eq!(strategy.master_capacity(), 10);
}

#[test]
fn test_shift_master_right_clamps_at_ratio_max() {
    for kind in LayoutKind::ALL {
        let mut strategy = kind.create(&LayoutConfig::default());
        for _ in 0..20 {
            assert!(strategy.handle_shortcut(ShortcutCommand::ShiftMasterRight));
        }
        assert_eq!(strategy.state().master_ratio, 0.75, "{kind}");
    }
}

#[test]
fn test_row_layout_ignores_capacity_shortcuts() {
    let mut strategy = LeftMasterRows::default();
    assert!(!strategy.handle_shortcut(ShortcutCommand::IncreaseMaster));
    assert!(!strategy.handle_shortcut(ShortcutCommand::DecreaseMaster));
    assert_eq!(strategy.describe(), "Left Master Rows [ratio: 60%]");
}

#[test]
fn test_clone_is_independent() {
    let mut original = LayoutKind::LeftMasterColumns.create(&LayoutConfig::default());
    let copy = original.clone();

    original.handle_shortcut(ShortcutCommand::IncreaseMaster);
    original.handle_shortcut(ShortcutCommand::ShiftMasterLeft);

    assert_eq!(copy.describe(), "Left Master Columns [master: 1, ratio: 60%]");
    assert_eq!(original.describe(), "Left Master Columns [master: 2, ratio: 55%]");
}

// ============================================================================
// Workspace
// ============================================================================

#[test]
fn test_workspace_applies_outer_gaps_then_layout() {
    let json = r#"{ "layout": { "tileLayoutGap": 10 }, "gaps": { "outer": 20 } }"#;
    let config: TricolConfig = serde_json::from_str(json).unwrap();
    let mut ws = TilingWorkspace::new("main", Rect::new(0.0, 0.0, 1040.0, 640.0), &config);
    for tile in tiles_with_ids(2) {
        ws.push_tile(tile);
    }

    assert_rect(ws.tile(TileId(1)).unwrap().geometry, Rect::new(20.0, 20.0, 595.0, 600.0));
    assert_rect(ws.tile(TileId(2)).unwrap().geometry, Rect::new(625.0, 20.0, 395.0, 600.0));
}

#[test]
fn test_workspace_resize_then_remove_keeps_layout_whole() {
    let config = TricolConfig::default();
    let mut ws = TilingWorkspace::new("main", area_1000(), &config);
    for tile in tiles_with_ids(4) {
        ws.push_tile(tile);
    }

    assert!(ws.resize(TileId(3), ResizeDelta::north(40.0)));
    ws.remove_tile(TileId(2));

    // Three tiles left: one per column, two vertical seams.
    let covered: f64 = ws.tiles().iter().map(|t| t.geometry.area()).sum();
    let gaps = 2.0 * 10.0 * 600.0;
    assert!(approx(covered + gaps, 1000.0 * 600.0));
}
