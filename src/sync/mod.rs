//! Cache-first synchronization with the remote content store.
//!
//! The `SyncCoordinator` renders from whatever is cached (or the bundled
//! defaults) immediately, then reconciles with the authoritative remote
//! values in the background. A fixed failsafe deadline guarantees the
//! loading state never outlives first paint.

pub mod coordinator;

pub use coordinator::{ContentState, LoadingGate, SyncCoordinator, FIRST_PAINT_DEADLINE};
