//! Reversible hover timeline
//!
//! A timeline coordinates the parallel property tracks of one pill's hover
//! reveal (circle scale, label lift, hover-label fade). All tracks share the
//! same start, duration, and easing curve, so the timeline advances a single
//! progress value and samples every track from it.
//!
//! Playback is cooperative and frame-driven: nothing moves until `tick(now)`
//! is called from the rendering clock. The timeline itself is the only driver
//! of its tracks; switching direction replaces the previous drive in place,
//! so an enter that interrupts a leave (or vice versa) resumes from the
//! current progress instead of fighting it.

use std::time::{Duration, Instant};

use super::easing::Ease;

/// Shared duration of every hover track.
pub const TIMELINE_DURATION: Duration = Duration::from_millis(300);

/// Forward (pointer-enter) playback speed.
pub const FORWARD_SPEED: f32 = 1.0;

/// Reverse (pointer-leave) playback speed. Leaving is deliberately snappier.
pub const REVERSE_SPEED: f32 = 1.5;

/// Animated property a tween drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    /// Hover circle scale, 0 at rest, 1.2 fully revealed.
    CircleScale,
    /// Resting label vertical offset in pixels (negative moves up).
    LabelOffset,
    /// Hover label opacity.
    HoverLabelOpacity,
    /// Hover label vertical offset in pixels.
    HoverLabelOffset,
}

/// One property track between two values.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    pub property: Property,
    pub from: f32,
    pub to: f32,
}

impl Tween {
    pub fn new(property: Property, from: f32, to: f32) -> Self {
        Self { property, from, to }
    }

    fn sample(&self, eased: f32) -> f32 {
        self.from + (self.to - self.from) * eased
    }
}

/// Playback direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Reverse,
}

/// Observable state of the hover sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Circle hidden, labels at rest.
    Idle,
    /// Playing toward the revealed state.
    Entering,
    /// Fully revealed.
    Active,
    /// Playing back toward rest.
    Leaving,
}

/// Reversible, pausable multi-track timeline.
#[derive(Debug, Clone)]
pub struct Timeline {
    tweens: Vec<Tween>,
    duration: Duration,
    ease: Ease,
    progress: f32,
    direction: Direction,
    speed: f32,
    playing: bool,
    last_tick: Option<Instant>,
}

impl Timeline {
    /// Build a timeline over the given tracks. Tracks for missing pieces are
    /// simply not added by the caller; the rest still run.
    pub fn new(ease: Ease, tweens: Vec<Tween>) -> Self {
        Self {
            tweens,
            duration: TIMELINE_DURATION,
            ease,
            progress: 0.0,
            direction: Direction::Forward,
            speed: FORWARD_SPEED,
            playing: false,
            last_tick: None,
        }
    }

    /// Play forward from the current progress, cancelling any in-flight
    /// reverse drive.
    pub fn play(&mut self, now: Instant) {
        self.direction = Direction::Forward;
        self.speed = FORWARD_SPEED;
        self.playing = self.progress < 1.0;
        self.last_tick = self.playing.then_some(now);
    }

    /// Play in reverse from the current progress at 1.5x, cancelling any
    /// in-flight forward drive. A reverse on an idle timeline is a no-op.
    pub fn reverse(&mut self, now: Instant) {
        self.direction = Direction::Reverse;
        self.speed = REVERSE_SPEED;
        self.playing = self.progress > 0.0;
        self.last_tick = self.playing.then_some(now);
    }

    /// Stop driving the tracks without touching progress.
    pub fn cancel(&mut self) {
        self.playing = false;
        self.last_tick = None;
    }

    /// Advance on the rendering clock. Returns true while the timeline is
    /// still moving afterwards.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playing {
            return false;
        }

        let last = self.last_tick.unwrap_or(now);
        let dt = now.saturating_duration_since(last).as_secs_f32();
        self.last_tick = Some(now);

        let step = dt / self.duration.as_secs_f32() * self.speed;
        match self.direction {
            Direction::Forward => {
                self.progress = (self.progress + step).min(1.0);
                if self.progress >= 1.0 {
                    self.playing = false;
                }
            }
            Direction::Reverse => {
                self.progress = (self.progress - step).max(0.0);
                if self.progress <= 0.0 {
                    self.playing = false;
                }
            }
        }

        self.playing
    }

    /// Raw (un-eased) progress in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Current phase of the hover sequence.
    pub fn phase(&self) -> Phase {
        if self.playing {
            match self.direction {
                Direction::Forward => Phase::Entering,
                Direction::Reverse => Phase::Leaving,
            }
        } else if self.progress >= 1.0 {
            Phase::Active
        } else if self.progress <= 0.0 {
            Phase::Idle
        } else {
            // Paused mid-flight (cancelled drive); report the direction it
            // was last heading in.
            match self.direction {
                Direction::Forward => Phase::Entering,
                Direction::Reverse => Phase::Leaving,
            }
        }
    }

    /// True while a drive is advancing the tracks.
    pub fn is_animating(&self) -> bool {
        self.playing
    }

    /// True when a forward drive owns the timeline.
    pub fn is_playing_forward(&self) -> bool {
        self.playing && self.direction == Direction::Forward
    }

    /// Sample one track at the current eased progress. `None` when the track
    /// was omitted from this timeline.
    pub fn value(&self, property: Property) -> Option<f32> {
        let eased = self.ease.eval(self.progress);
        self.tweens
            .iter()
            .find(|tween| tween.property == property)
            .map(|tween| tween.sample(eased))
    }

    /// Snap back to the resting state, used when visuals are reset during a
    /// layout resync.
    pub fn rewind(&mut self) {
        self.progress = 0.0;
        self.playing = false;
        self.last_tick = None;
    }
}
