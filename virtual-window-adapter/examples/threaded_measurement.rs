// Example: measuring rows on worker threads while the UI thread owns the core.
use std::thread;

use virtual_window::{Item, WindowConfig};
use virtual_window_adapter::Controller;

fn main() {
    let mut c = Controller::new(WindowConfig::new(20.0, 400.0));
    c.set_items((0..10_000u64).map(|id| Item::new(id, ())).collect());

    let workers: Vec<_> = (0..4u64)
        .map(|w| {
            let sender = c.sender();
            thread::spawn(move || {
                for id in (w..200).step_by(4) {
                    // Stand-in for real text layout.
                    sender.item_size(id, 18.0 + (id % 5) as f64 * 4.0);
                }
            })
        })
        .collect();
    for w in workers {
        let _ = w.join();
    }

    let update = c.on_scroll(0.0);
    println!(
        "range={:?} total_height={} estimate={}",
        update.range.indexes(),
        update.total_height,
        c.core().estimated_item_height()
    );
}
