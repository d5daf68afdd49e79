/// Marker trait for intents.
///
/// An intent names a transition that already happened outside the reducer:
/// a request was issued, a response arrived, the user dismissed an item.
pub trait Intent: Send + 'static {}
