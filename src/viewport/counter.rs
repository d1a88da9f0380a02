//! Stat counters that count up from zero when the stats block scrolls in.

use super::Observation;
use crate::config::CounterConfig;
use crate::dom::Element;
use crate::schedule::{self, Scheduler};
use std::cell::Cell;
use tracing::debug;

/// Parse the integer shown in a stat, ignoring every non-digit character.
///
/// `"1,234 Homes"` → `Some(1234)`, `"$12M+"` → `Some(12)`. Text with no
/// digits, or digits that overflow `u64`, yields `None`.
pub fn parse_stat_value(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// One fixed-step count-up.
///
/// Each [`tick`](Self::tick) adds `target / (duration / tick)` to a running
/// float. While below the target the floored value is shown; the first tick
/// that reaches or passes it shows the exact target and finishes.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, config: &CounterConfig) -> Self {
        let steps = f64::from(config.duration_ms) / f64::from(config.tick_ms);
        Self {
            target,
            increment: target as f64 / steps,
            current: 0.0,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one tick. Returns the value to display, or `None` once
    /// finished (the caller should stop ticking).
    pub fn tick(&mut self) -> Option<u64> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            Some(self.target)
        } else {
            Some(self.current.floor() as u64)
        }
    }
}

/// A number element paired with its running animation.
pub struct RunningCounter<E> {
    pub element: E,
    pub animation: CounterAnimation,
}

impl<E: Element> RunningCounter<E> {
    /// Advance and write the next value. Returns `false` once finished.
    pub fn step(&mut self) -> bool {
        match self.animation.tick() {
            Some(value) => {
                self.element.set_text(&value.to_string());
                !self.animation.is_finished()
            }
            None => false,
        }
    }
}

/// Drive `counter` every `tick_ms` until it reaches its target.
pub fn animate<S, E>(scheduler: &S, tick_ms: u32, mut counter: RunningCounter<E>)
where
    S: Scheduler,
    E: Element + 'static,
{
    schedule::repeat(scheduler, tick_ms, move || counter.step());
}

/// One-shot trigger for a stats container.
pub struct StatsWatcher {
    config: CounterConfig,
    fired: Cell<bool>,
}

impl StatsWatcher {
    pub fn new(config: &CounterConfig) -> Self {
        Self {
            config: config.clone(),
            fired: Cell::new(false),
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }

    /// Handle an observer callback for the container.
    ///
    /// On the first intersection every number element whose text parses is
    /// reset to `"0"` and returned with a fresh animation; elements with no
    /// digits are left alone. Later calls return nothing.
    pub fn on_intersection<E: Element + Clone>(
        &self,
        is_intersecting: bool,
        numbers: &[E],
    ) -> (Vec<RunningCounter<E>>, Observation) {
        if !is_intersecting || self.fired.get() {
            let observation = if self.fired.get() {
                Observation::Stop
            } else {
                Observation::Keep
            };
            return (Vec::new(), observation);
        }
        self.fired.set(true);

        let counters = numbers
            .iter()
            .filter_map(|el| {
                let text = el.text();
                let Some(target) = parse_stat_value(&text) else {
                    debug!(text, "stat has no numeric value; not animating");
                    return None;
                };
                el.set_text("0");
                Some(RunningCounter {
                    element: el.clone(),
                    animation: CounterAnimation::new(target, &self.config),
                })
            })
            .collect();
        (counters, Observation::Stop)
    }
}
