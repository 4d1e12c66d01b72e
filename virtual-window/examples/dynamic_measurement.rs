// Example: feeding measured heights back into the window.
use virtual_window::{Item, WindowConfig, WindowConfigPatch, WindowCore};

fn main() {
    let items = (0..1_000u64)
        .map(|i| {
            let item = Item::new(i, ());
            // Section headers know their height up front.
            if i % 100 == 0 { item.with_size(80.0) } else { item }
        })
        .collect();
    let mut core = WindowCore::with_items(WindowConfig::new(50.0, 300.0), items);

    let before = core.update_scroll_position(0.0);
    println!(
        "before: range={:?} total={} estimate={}",
        before.range.indexes(),
        before.total_height,
        core.estimated_item_height()
    );

    // Pretend the renderer laid out the first rows.
    core.set_item_sizes((1..8u64).map(|id| (id, 30.0 + id as f64)));
    let after = core.update_scroll_position(0.0);
    println!(
        "after: range={:?} total={} estimate={} needs_update={}",
        after.range.indexes(),
        after.total_height,
        core.estimated_item_height(),
        after.needs_update
    );

    // Measurements are persisted by id.
    let saved = core.export_size_cache();
    core.reset();
    core.import_size_cache(saved);
    println!("restored {} measurements", core.size_cache_len());

    core.update_config(WindowConfigPatch::default().container_height(600.0));
    let resized = core.update_scroll_position(core.scroll_to_index(500));
    println!(
        "resized: range={:?} position(500)={:?}",
        resized.range.indexes(),
        core.get_item_position(500)
    );
}
