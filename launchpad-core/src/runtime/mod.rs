//! Reactive runtime
//!
//! A single-threaded update/view loop. The runtime owns the current
//! [`State`](crate::grid::State) and, for every dispatched message, runs the
//! program's pure `update`, executes the effect it returned (which may
//! dispatch one follow-up message, depth-first), and finally calls `view`
//! with the settled state.

pub mod dispatcher;
pub mod effect;
pub mod message;
pub mod program;

pub use dispatcher::Runtime;
pub use effect::{Dispatch, Effect};
pub use message::Message;
pub use program::Program;
