use crossbeam_channel::{Receiver, Sender, unbounded};
use virtual_window::{GridCore, KeyCacheKey, WindowCore};

/// A size reported by layout code.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Measurement<K> {
    /// Main-axis size of a list item.
    Item { id: K, size: f64 },
    Row { id: K, height: f64 },
    Column { id: K, width: f64 },
}

/// Producer half of a [`MeasurementQueue`]. Cheap to clone and `Send` when `K` is.
#[derive(Clone, Debug)]
pub struct MeasurementSender<K> {
    tx: Sender<Measurement<K>>,
}

impl<K> MeasurementSender<K> {
    /// Queues a measurement. Returns `false` once the queue has been dropped.
    pub fn send(&self, measurement: Measurement<K>) -> bool {
        self.tx.send(measurement).is_ok()
    }

    pub fn item_size(&self, id: K, size: f64) -> bool {
        self.send(Measurement::Item { id, size })
    }

    pub fn row_height(&self, id: K, height: f64) -> bool {
        self.send(Measurement::Row { id, height })
    }

    pub fn column_width(&self, id: K, width: f64) -> bool {
        self.send(Measurement::Column { id, width })
    }
}

/// Serializes measurements from any number of producers into the single thread owning a core.
///
/// Nothing reaches the core until the owner drains the queue, so a core is never mutated
/// concurrently and measurements are applied in arrival order.
#[derive(Debug)]
pub struct MeasurementQueue<K> {
    tx: Sender<Measurement<K>>,
    rx: Receiver<Measurement<K>>,
}

impl<K> Default for MeasurementQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> MeasurementQueue<K> {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    pub fn sender(&self) -> MeasurementSender<K> {
        MeasurementSender {
            tx: self.tx.clone(),
        }
    }

    /// Number of queued measurements.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// Feeds every queued item measurement to `core`. Returns how many were drained.
    ///
    /// Row and column measurements have no meaning for a list and are dropped.
    pub fn drain_into_window<T>(&self, core: &mut WindowCore<T, K>) -> usize
    where
        K: KeyCacheKey,
    {
        let mut applied = 0usize;
        let sizes = self.rx.try_iter().filter_map(|m| match m {
            Measurement::Item { id, size } => {
                applied += 1;
                Some((id, size))
            }
            _ => {
                awarn!("dropping grid measurement sent to a list");
                None
            }
        });
        core.set_item_sizes(sizes);
        if applied > 0 {
            adebug!(applied, "drained list measurements");
        }
        applied
    }

    /// Feeds every queued row and column measurement to `core`. Returns how many were drained.
    ///
    /// Item measurements are dropped.
    pub fn drain_into_grid<R, C>(&self, core: &mut GridCore<R, C, K>) -> usize
    where
        K: KeyCacheKey,
    {
        let mut applied = 0usize;
        for m in self.rx.try_iter() {
            match m {
                Measurement::Row { id, height } => core.set_row_height(id, height),
                Measurement::Column { id, width } => core.set_column_width(id, width),
                Measurement::Item { .. } => {
                    awarn!("dropping list measurement sent to a grid");
                    continue;
                }
            }
            applied += 1;
        }
        if applied > 0 {
            adebug!(applied, "drained grid measurements");
        }
        applied
    }

    /// Discards everything queued so far.
    pub fn clear(&self) -> usize {
        self.rx.try_iter().count()
    }
}
