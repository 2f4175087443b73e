/// Marker trait for reducer-owned state.
///
/// `Default` is the state a feature starts in; `Clone + PartialEq` let
/// callers snapshot and compare before and after a dispatch.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
