//! Deferred callbacks.
//!
//! [`Scheduler`] is the page's `setTimeout`. Repeating work (counter ticks)
//! is built on top of it as a chain of single-shot timeouts, which lets a
//! step end the chain by returning `false` without any handle bookkeeping.

/// Single-shot deferred callbacks.
pub trait Scheduler: Clone + 'static {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Run `step` every `period_ms`, starting one period from now, until it
/// returns `false`.
pub fn repeat<S, F>(scheduler: &S, period_ms: u32, step: F)
where
    S: Scheduler,
    F: FnMut() -> bool + 'static,
{
    fn chain<S, F>(scheduler: S, period_ms: u32, mut step: F)
    where
        S: Scheduler,
        F: FnMut() -> bool + 'static,
    {
        let next = scheduler.clone();
        scheduler.after(
            period_ms,
            Box::new(move || {
                if step() {
                    chain(next, period_ms, step);
                }
            }),
        );
    }
    chain(scheduler.clone(), period_ms, step);
}
