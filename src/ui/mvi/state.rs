/// Marker trait for state snapshots.
///
/// Snapshots are replaced, never mutated in place; `Default` is what the
/// dispatcher leaves behind while a reducer owns the previous value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
