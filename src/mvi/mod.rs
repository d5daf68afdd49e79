//! Unidirectional data-flow primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────── dispatch ────────┘
//! ```
//!
//! - **State**: owned snapshot of everything the screen renders
//! - **Intent**: something that happened (a fetch started, a story was dismissed)
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;

/// Run `$intent` through `$reducer`, replacing `$self.$field` in place.
#[macro_export]
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer as $crate::mvi::Reducer>::reduce(
            std::mem::take(&mut $self.$field),
            $intent,
        );
    };
}
