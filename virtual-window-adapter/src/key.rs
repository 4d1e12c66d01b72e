use virtual_window::KeyCacheKey;

/// Bound for ids that may be reported from other threads.
pub trait MeasurementKey: KeyCacheKey + Send + 'static {}
impl<K: KeyCacheKey + Send + 'static> MeasurementKey for K {}
