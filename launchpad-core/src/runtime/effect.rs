//! Deferred effects

use alloc::boxed::Box;

/// One-shot handle for scheduling a follow-up message
///
/// Sending consumes the handle, so an effect can dispatch at most once.
pub struct Dispatch<'a, M> {
    sink: &'a mut dyn FnMut(M),
}

impl<'a, M> Dispatch<'a, M> {
    pub(crate) fn new(sink: &'a mut dyn FnMut(M)) -> Self {
        Self { sink }
    }

    /// Dispatch `msg` synchronously
    ///
    /// Returns once the nested update, effect and view have all completed.
    pub fn send(self, msg: M) {
        (self.sink)(msg)
    }
}

/// A deferred action returned by `update`
pub struct Effect<M> {
    run: Box<dyn FnOnce(Dispatch<'_, M>)>,
}

impl<M> Effect<M> {
    /// Wrap an arbitrary action
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(Dispatch<'_, M>) + 'static,
    {
        Self { run: Box::new(f) }
    }

    /// Effect that immediately dispatches `msg`
    pub fn dispatch(msg: M) -> Self
    where
        M: 'static,
    {
        Self::new(move |dispatch| dispatch.send(msg))
    }

    pub(crate) fn run(self, dispatch: Dispatch<'_, M>) {
        (self.run)(dispatch)
    }
}

impl<M> core::fmt::Debug for Effect<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Effect(..)")
    }
}
