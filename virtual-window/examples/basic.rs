// Example: a 100k-row list driven by scroll events.
use virtual_window::{Item, WindowConfig, WindowCore};

fn main() {
    let items = (0..100_000u64)
        .map(|i| Item::new(i, format!("row {i}")))
        .collect();
    let mut core = WindowCore::with_items(WindowConfig::new(20.0, 400.0), items);

    for scroll_top in [0.0, 15.0, 60.0, 200.0, 12_345.0] {
        let update = core.update_scroll_position(scroll_top);
        if !update.needs_update {
            println!("scroll_top={scroll_top}: within threshold, keep rendering");
            continue;
        }
        let visible = core.get_visible_items();
        println!(
            "scroll_top={scroll_top}: render {:?} ({} items, offset_top={}) of total_height={}",
            update.range.indexes(),
            visible.len(),
            update.range.offset_top,
            update.total_height
        );
    }

    let target = core.scroll_to_index(99_999);
    println!("scroll_to_index(99_999) = {target}");
}
