/// Marker trait for reducer-owned state.
///
/// `Default` is the session-start value and is what `dispatch_mvi!` swaps in
/// while the reducer holds the previous value by move.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
