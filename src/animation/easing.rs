//! Named easing curves
//!
//! Small closed-form curves evaluated at a normalized progress value.
//! Names follow the CSS convention; GSAP-style aliases (`power2.inOut`
//! and friends) are also accepted.

use serde::{Deserialize, Serialize};

/// Easing curve applied to timeline progress.
///
/// `power1`/`power2`/`power3` aliases map to quad/cubic/quart as GSAP
/// defines them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    #[serde(alias = "power1.easeIn", alias = "power1.in")]
    QuadIn,
    #[serde(alias = "power1.easeOut", alias = "power1.out")]
    QuadOut,
    #[serde(alias = "power1.easeInOut", alias = "power1.inOut")]
    QuadInOut,
    #[serde(alias = "power2.easeIn", alias = "power2.in")]
    CubicIn,
    #[default]
    #[serde(alias = "power2.easeOut", alias = "power2.out")]
    CubicOut,
    #[serde(alias = "power2.easeInOut", alias = "power2.inOut")]
    CubicInOut,
    #[serde(alias = "power3.easeIn", alias = "power3.in")]
    QuartIn,
    #[serde(alias = "power3.easeOut", alias = "power3.out")]
    QuartOut,
    #[serde(alias = "power3.easeInOut", alias = "power3.inOut")]
    QuartInOut,
}

impl Ease {
    /// Evaluate the curve at progress `t`, clamped to [0, 1].
    pub fn eval(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadIn => t * t,
            Ease::QuadOut => 1.0 - (1.0 - t).powi(2),
            Ease::QuadInOut => in_out(t, 2),
            Ease::CubicIn => t * t * t,
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
            Ease::CubicInOut => in_out(t, 3),
            Ease::QuartIn => t.powi(4),
            Ease::QuartOut => 1.0 - (1.0 - t).powi(4),
            Ease::QuartInOut => in_out(t, 4),
        }
    }

    /// Resolve a curve from either naming convention.
    ///
    /// Accepts the kebab-case names (`cubic-out`) as well as GSAP names
    /// (`power2.inOut`, `power3.easeOut`).
    pub fn from_name(name: &str) -> Option<Self> {
        let ease = match name {
            "linear" | "power0" | "none" => Ease::Linear,
            "quad-in" | "power1.easeIn" | "power1.in" => Ease::QuadIn,
            "quad-out" | "power1.easeOut" | "power1.out" => Ease::QuadOut,
            "quad-in-out" | "power1.easeInOut" | "power1.inOut" => Ease::QuadInOut,
            "cubic-in" | "power2.easeIn" | "power2.in" => Ease::CubicIn,
            "cubic-out" | "power2.easeOut" | "power2.out" => Ease::CubicOut,
            "cubic-in-out" | "power2.easeInOut" | "power2.inOut" => Ease::CubicInOut,
            "quart-in" | "power3.easeIn" | "power3.in" => Ease::QuartIn,
            "quart-out" | "power3.easeOut" | "power3.out" => Ease::QuartOut,
            "quart-in-out" | "power3.easeInOut" | "power3.inOut" => Ease::QuartInOut,
            _ => return None,
        };
        Some(ease)
    }
}

/// Symmetric in-out curve built from the matching power-in half.
fn in_out(t: f32, power: i32) -> f32 {
    if t < 0.5 {
        0.5 * (2.0 * t).powi(power)
    } else {
        1.0 - 0.5 * (2.0 - 2.0 * t).powi(power)
    }
}
