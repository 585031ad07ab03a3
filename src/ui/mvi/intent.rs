/// Marker trait for user actions fed to a reducer.
pub trait Intent: Send + 'static {}
