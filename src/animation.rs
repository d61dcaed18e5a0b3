//! Animate fade transitions.

use crate::time::{Duration, Instant};

pub use lilt::Easing;

/// The animation of some state.
///
/// A thin wrapper over [`lilt`]; the clock of every fade transition.
#[derive(Debug, Clone)]
pub struct Animation<T>
where
    T: lilt::FloatRepresentable + Clone + Copy + PartialEq,
{
    raw: lilt::Animated<T, Instant>,
}

impl<T> Animation<T>
where
    T: lilt::FloatRepresentable + Clone + Copy + PartialEq,
{
    /// Creates a new [`Animation`] at the given state, with no transition
    /// in progress.
    pub fn new(state: T) -> Self {
        Self {
            raw: lilt::Animated::new(state),
        }
    }

    /// Sets the [`Easing`] curve of the [`Animation`].
    pub fn easing(mut self, easing: Easing) -> Self {
        self.raw = self.raw.easing(easing);
        self
    }

    /// Sets the duration of the [`Animation`].
    pub fn duration(mut self, duration: Duration) -> Self {
        self.raw = self.raw.duration(duration.as_secs_f32() * 1_000.0);
        self
    }

    /// Transitions the [`Animation`] to a new state at the given time.
    pub fn go(mut self, new_state: T, at: Instant) -> Self {
        self.go_mut(new_state, at);
        self
    }

    /// Transitions the [`Animation`] to a new state at the given time, by
    /// reference.
    pub fn go_mut(&mut self, new_state: T, at: Instant) {
        self.raw.transition(new_state, at);
    }

    /// Whether the [`Animation`] is still in progress at the given time.
    pub fn is_animating(&self, at: Instant) -> bool {
        self.raw.in_progress(at)
    }

    /// The current target state of the [`Animation`].
    pub fn value(&self) -> T {
        self.raw.value
    }
}

impl Animation<bool> {
    /// Interpolates between two values at the given time; `start`
    /// corresponds to the `false` state.
    pub fn interpolate(&self, start: f32, end: f32, at: Instant) -> f32 {
        self.raw.animate_bool(start, end, at)
    }
}

/// An in-flight eased change of a presented value toward a target.
///
/// Retargeting is last-write-wins: starting a new [`Transition`] from the
/// currently presented value supersedes the old one, it is never queued.
#[derive(Debug, Clone)]
pub struct Transition {
    start: f32,
    clock: Animation<bool>,
}

impl Transition {
    /// Starts a [`Transition`] from the given presented value.
    pub fn new(start: f32, duration: Duration, now: Instant) -> Self {
        Self {
            start,
            clock: Animation::new(false)
                .easing(Easing::EaseOut)
                .duration(duration)
                .go(true, now),
        }
    }

    /// Whether the [`Transition`] is still in progress.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.clock.is_animating(now)
    }

    /// The presented value at the given time, converging on `target`.
    pub fn sample(&self, target: f32, now: Instant) -> f32 {
        if self.is_animating(now) {
            let progress = self.clock.interpolate(0.0, 1.0, now);

            self.start + (target - self.start) * progress
        } else {
            target
        }
    }
}
