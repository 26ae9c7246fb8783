//! One-time staggered entrance
//!
//! On first load the pills rise in from a slightly lower, transparent state,
//! one after another. This runs exactly once and is gated by the
//! `initial_load_animation` configuration flag; layout resyncs later in the
//! session never replay it.

use std::time::{Duration, Instant};

use super::easing::Ease;

/// Per-pill rise duration.
pub const INTRO_DURATION: Duration = Duration::from_millis(400);

/// Delay before the first pill starts.
pub const INTRO_DELAY: Duration = Duration::from_millis(400);

/// Gap between consecutive pills.
pub const INTRO_STAGGER: Duration = Duration::from_millis(50);

/// Starting vertical offset in pixels.
pub const INTRO_RISE: f32 = 20.0;

/// Staggered fade/slide-in over an ordered set of pills.
#[derive(Debug, Clone)]
pub struct IntroAnimation {
    ease: Ease,
    item_count: usize,
    started: Option<Instant>,
    clock: Option<Instant>,
}

impl IntroAnimation {
    pub fn new(ease: Ease, item_count: usize) -> Self {
        Self {
            ease,
            item_count,
            started: None,
            clock: None,
        }
    }

    /// Advance on the rendering clock; the first tick starts the sequence.
    /// Returns true while any pill is still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.started.is_none() {
            self.started = Some(now);
        }
        self.clock = Some(now);
        self.is_animating()
    }

    /// True until the last pill has settled.
    pub fn is_animating(&self) -> bool {
        let (Some(started), Some(clock)) = (self.started, self.clock) else {
            // Not started yet: still owed its run.
            return true;
        };
        let last = self
            .item_count
            .saturating_sub(1)
            .try_into()
            .map(|i: u32| INTRO_STAGGER * i)
            .unwrap_or_default();
        clock < started + INTRO_DELAY + last + INTRO_DURATION
    }

    /// Eased progress of pill `index`, 0 before its slot starts, 1 once it
    /// has settled.
    fn progress(&self, index: usize) -> f32 {
        let (Some(started), Some(clock)) = (self.started, self.clock) else {
            return 0.0;
        };
        let slot = started + INTRO_DELAY + INTRO_STAGGER * index.min(u32::MAX as usize) as u32;
        let elapsed = clock.saturating_duration_since(slot);
        let raw = (elapsed.as_secs_f32() / INTRO_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        self.ease.eval(raw)
    }

    /// Extra downward offset for pill `index`.
    pub fn offset(&self, index: usize) -> f32 {
        INTRO_RISE * (1.0 - self.progress(index))
    }

    /// Opacity multiplier for pill `index`.
    pub fn opacity(&self, index: usize) -> f32 {
        self.progress(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pills_are_hidden_before_their_slot() {
        let mut intro = IntroAnimation::new(Ease::Linear, 3);
        let t0 = Instant::now();
        intro.tick(t0);

        // Inside the initial delay nothing has moved yet.
        intro.tick(t0 + Duration::from_millis(200));
        for i in 0..3 {
            assert_eq!(intro.opacity(i), 0.0, "pill {i} visible too early");
            assert_eq!(intro.offset(i), INTRO_RISE);
        }
    }

    #[test]
    fn stagger_orders_consecutive_pills() {
        let mut intro = IntroAnimation::new(Ease::Linear, 3);
        let t0 = Instant::now();
        intro.tick(t0);

        // 450ms in: pill 0 is 50ms into its rise, pill 1 exactly starting,
        // pill 2 still waiting.
        intro.tick(t0 + Duration::from_millis(450));
        assert!(intro.opacity(0) > 0.0);
        assert_eq!(intro.opacity(1), 0.0);
        assert_eq!(intro.opacity(2), 0.0);

        // 500ms in: pill 1 has started, still behind pill 0 by one stagger.
        intro.tick(t0 + Duration::from_millis(500));
        assert!(intro.opacity(0) > intro.opacity(1));
        assert!(intro.opacity(1) > 0.0);
    }

    #[test]
    fn settles_after_last_pill_finishes() {
        let mut intro = IntroAnimation::new(Ease::Linear, 3);
        let t0 = Instant::now();
        intro.tick(t0);

        // delay 400 + stagger 2*50 + duration 400 = 900ms total.
        assert!(intro.tick(t0 + Duration::from_millis(899)));
        assert!(!intro.tick(t0 + Duration::from_millis(900)));

        for i in 0..3 {
            assert_eq!(intro.opacity(i), 1.0, "pill {i} must settle opaque");
            assert_eq!(intro.offset(i), 0.0, "pill {i} must settle at rest");
        }
    }

    #[test]
    fn owed_a_run_until_first_tick() {
        let intro = IntroAnimation::new(Ease::Linear, 2);
        assert!(intro.is_animating(), "must request frames before starting");
    }
}
