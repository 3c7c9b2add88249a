//! tpin-core: pinned tmux session engine.
//!
//! Reconciles a persisted, user-ordered list of pinned sessions against the
//! live sessions reported by tmux, and drives the single-keystroke menu
//! that edits it.

pub mod console;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod keymap;
pub mod multiplexer;
pub mod persist;
pub mod store;
pub mod view;

// Re-export commonly used items at crate root.
pub use console::{Console, Key};
pub use controller::{Flow, SessionController};
pub use cursor::{CursorModel, Region};
pub use error::{PinError, PinResult};
pub use keymap::{dispatch, Action};
pub use multiplexer::{ensure_running, Multiplexer, Tmux};
pub use persist::{PinStorage, PinnedFile};
pub use store::{reconcile, SessionStore};
