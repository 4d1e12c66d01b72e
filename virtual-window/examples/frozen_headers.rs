// Example: a spreadsheet-like grid with a frozen header row and first column.
use virtual_window::{GridConfig, GridCore, Item};

fn main() {
    let config = GridConfig::new(24.0, 120.0, 480.0, 960.0)
        .with_fixed_rows(1, 0)
        .with_fixed_columns(1, 0);
    let mut grid = GridCore::new(config);
    grid.set_rows((0..50_000u64).map(|i| Item::new(i, i)).collect());
    grid.set_columns(
        (0..200u64)
            .map(|i| Item::new(i, format!("col {i}")))
            .collect(),
    );

    let update = grid.update_scroll_position(2_400.0, 600.0);
    let range = update.range;
    println!(
        "rows {:?} (offset_top={}) columns {:?} (offset_left={})",
        range.rows(),
        range.offset_top,
        range.columns(),
        range.offset_left
    );
    println!("total {}x{}", update.total_width, update.total_height);

    let fixed = grid.fixed_cells();
    println!(
        "frozen: {} header row(s), {} leading column(s): {:?}",
        fixed.rows_top.len(),
        fixed.columns_left.len(),
        fixed.columns_left.iter().map(|c| &c.data).collect::<Vec<_>>()
    );

    let target = grid.scroll_to_cell(1_000, 50);
    println!("scroll_to_cell(1000, 50) = {target:?}");
}
