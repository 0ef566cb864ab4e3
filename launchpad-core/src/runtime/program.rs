//! Program abstraction

use super::effect::Effect;
use crate::grid::State;

/// The capability set a runtime drives
///
/// Implementations supply the initial state, a pure transition function and
/// the side-effecting view.
pub trait Program {
    /// Messages this program reacts to
    type Message;

    /// State the runtime starts from
    fn init(&self) -> State;

    /// Compute the next state for `msg`
    ///
    /// Must not have observable side effects. Anything external goes into the
    /// returned [`Effect`].
    fn update(&self, state: &State, msg: Self::Message) -> (State, Option<Effect<Self::Message>>);

    /// Present the settled state
    ///
    /// Called once per dispatch, nested dispatches included.
    fn view(&mut self, state: &State);
}
