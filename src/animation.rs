//! Animation engine for the pill navigation
//!
//! Three cooperating pieces, all frame-driven and clock-free (every advance
//! takes `now` from the caller):
//!
//! - [`easing`]: named curves evaluated at normalized progress
//! - [`timeline`]: the reversible per-pill hover reveal
//! - [`intro`]: the one-time staggered entrance

pub mod easing;
pub mod intro;
pub mod timeline;

pub use easing::Ease;
pub use intro::IntroAnimation;
pub use timeline::{Phase, Property, Timeline, Tween};
