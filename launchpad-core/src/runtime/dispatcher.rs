//! Runtime driving a program

use super::effect::Dispatch;
use super::program::Program;
use crate::grid::State;

/// Owns a program and its current state
///
/// The runtime has a single idle state and a single transition,
/// [`dispatch`](Runtime::dispatch). There is no reentrancy guard: an effect
/// that dispatches runs the nested dispatch to completion before the outer
/// one resumes.
pub struct Runtime<P: Program> {
    program: P,
    state: State,
}

impl<P: Program> Runtime<P> {
    /// Start `program` from its initial state
    pub fn new(program: P) -> Self {
        let state = program.init();
        Self { program, state }
    }

    /// Feed one message through update, effect and view
    pub fn dispatch(&mut self, msg: P::Message) {
        #[cfg(feature = "defmt")]
        defmt::trace!("dispatch");

        let (next, effect) = self.program.update(&self.state, msg);
        self.state = next;

        if let Some(effect) = effect {
            #[cfg(feature = "defmt")]
            defmt::debug!("running effect");
            effect.run(Dispatch::new(&mut |m| self.dispatch(m)));
        }

        self.program.view(&self.state);
    }

    /// Current settled state
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn program(&self) -> &P {
        &self.program
    }

    pub fn program_mut(&mut self) -> &mut P {
        &mut self.program
    }

    /// Tear down, returning the program and the last state
    pub fn into_parts(self) -> (P, State) {
        (self.program, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::Effect;
    use alloc::vec::Vec;
    use launchpad_protocol::{Color, Position};

    /// Records every call so ordering can be checked
    #[derive(Default)]
    struct Chain {
        updates: Vec<u8>,
        views: Vec<usize>,
    }

    /// Message `n` lights `(n, 1)` and schedules `n - 1` until zero
    struct Countdown {
        log: core::cell::RefCell<Chain>,
    }

    impl Program for Countdown {
        type Message = u8;

        fn init(&self) -> State {
            State::new()
        }

        fn update(&self, state: &State, msg: u8) -> (State, Option<Effect<u8>>) {
            self.log.borrow_mut().updates.push(msg);
            let mut next = state.clone();
            next.at_mut(Position::new(msg, 1)).color = Color::RED;
            let effect = if msg > 0 {
                Some(Effect::dispatch(msg - 1))
            } else {
                None
            };
            (next, effect)
        }

        fn view(&mut self, state: &State) {
            self.log.get_mut().views.push(state.lit_count());
        }
    }

    fn countdown() -> Runtime<Countdown> {
        Runtime::new(Countdown {
            log: core::cell::RefCell::new(Chain::default()),
        })
    }

    #[test]
    fn test_initial_state() {
        let rt = countdown();
        assert_eq!(rt.state(), &State::new());
        assert!(rt.program().log.borrow().views.is_empty());
    }

    #[test]
    fn test_single_dispatch_without_effect() {
        let mut rt = countdown();
        rt.dispatch(0);
        let (program, state) = rt.into_parts();
        let log = program.log.into_inner();
        assert_eq!(log.updates, [0]);
        assert_eq!(log.views, [1]);
        assert_eq!(state.lit_count(), 1);
    }

    #[test]
    fn test_nested_dispatch_is_depth_first() {
        let mut rt = countdown();
        rt.dispatch(3);

        let log = rt.program().log.borrow();
        assert_eq!(log.updates, [3, 2, 1, 0]);
        // Innermost dispatch settles first; every view sees the full chain
        assert_eq!(log.views, [4, 4, 4, 4]);
        assert_eq!(rt.state().lit_count(), 4);
    }

    #[test]
    fn test_update_does_not_touch_runtime_state() {
        let rt = countdown();
        let before = rt.state().clone();
        let (after, _) = rt.program().update(rt.state(), 5);
        assert_eq!(rt.state(), &before);
        assert_ne!(after, before);
    }
}
