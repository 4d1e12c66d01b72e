// Example: preserve visual scroll position across "prepend" (chat/timeline load older messages).
use virtual_window::{Item, WindowConfig};
use virtual_window_adapter::Controller;

fn page(ids: std::ops::Range<u64>) -> Vec<Item<String>> {
    ids.map(|id| Item::new(id, format!("message {id}"))).collect()
}

fn main() {
    let mut c = Controller::new(WindowConfig::new(32.0, 640.0));
    c.set_items(page(1_000..1_100));
    c.on_scroll(1_610.0);

    let anchor = c.capture_first_visible_anchor();
    println!("before prepend: scroll_top={} anchor={anchor:?}", c.core().scroll_top());

    // Load 50 older messages above the current ones.
    let mut items = page(950..1_000);
    items.extend(page(1_000..1_100));
    match c.set_items_anchored(items) {
        Some(update) => println!(
            "after prepend: scroll_top={} range={:?}",
            update.scroll_top,
            update.range.indexes()
        ),
        None => println!("anchor lost"),
    }
}
