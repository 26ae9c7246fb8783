//! Nav color tokens and style helpers
//!
//! Colors arrive as CSS-style string tokens in the configuration and are
//! resolved here into a concrete palette. Unknown tokens degrade to the
//! documented defaults with a warning rather than failing the component.

use iced::font::Weight;
use iced::{Color, color};
use tracing::warn;

/// Default accent, the active pill background and the hover circle fill.
pub const DEFAULT_BASE: Color = color!(0xffffff);

/// Default resting pill background.
pub const DEFAULT_PILL: Color = color!(0x060010);

/// Default label color inside an active or hovered pill.
pub const DEFAULT_HOVER_TEXT: Color = color!(0x060010);

/// Translucent dark backdrop behind the pill row.
pub const CONTAINER_BG: Color = color!(0x111111, 0.5);

/// Hairline border around the backdrop.
pub const CONTAINER_BORDER: Color = color!(0xffffff, 0.1);

/// Pill label weight.
pub const MEDIUM_WEIGHT: Weight = Weight::Medium;

/// Resolved color set for one nav instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavPalette {
    /// Active pill background and hover circle fill.
    pub base: Color,
    /// Resting pill background.
    pub pill: Color,
    /// Label color over `base` (active pill, hover label).
    pub hover_text: Color,
    /// Label color over `pill` (resting label).
    pub pill_text: Color,
}

impl Default for NavPalette {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            pill: DEFAULT_PILL,
            hover_text: DEFAULT_HOVER_TEXT,
            pill_text: DEFAULT_BASE,
        }
    }
}

impl NavPalette {
    /// Resolve configured tokens, falling back per token. An absent
    /// `pill_text` inherits `base`.
    pub fn resolve(
        base: Option<&str>,
        pill: Option<&str>,
        hover_text: Option<&str>,
        pill_text: Option<&str>,
    ) -> Self {
        let base = resolve_token(base, DEFAULT_BASE);
        Self {
            base,
            pill: resolve_token(pill, DEFAULT_PILL),
            hover_text: resolve_token(hover_text, DEFAULT_HOVER_TEXT),
            pill_text: resolve_token(pill_text, base),
        }
    }
}

fn resolve_token(token: Option<&str>, fallback: Color) -> Color {
    match token {
        None => fallback,
        Some(token) => parse_color(token).unwrap_or_else(|| {
            warn!("unrecognized color token {token:?}, using default");
            fallback
        }),
    }
}

/// Multiply a color's alpha, used for the hover-label fade and the intro.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Parse a CSS-style color token: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
/// `rgb(r, g, b)`, or `rgba(r, g, b, a)`.
pub fn parse_color(token: &str) -> Option<Color> {
    let token = token.trim();
    if let Some(hex) = token.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(args) = token
        .strip_prefix("rgba(")
        .or_else(|| token.strip_prefix("rgb("))
    {
        return parse_rgb_args(args.strip_suffix(')')?);
    }
    None
}

fn parse_hex(hex: &str) -> Option<Color> {
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 | 4 => {
            let r = nibble(0)?;
            let g = nibble(1)?;
            let b = nibble(2)?;
            let a = if hex.len() == 4 { nibble(3)? } else { 0xf };
            Some(Color::from_rgba8(
                r * 17,
                g * 17,
                b * 17,
                f32::from(a * 17) / 255.0,
            ))
        }
        6 | 8 => {
            let r = byte(0)?;
            let g = byte(2)?;
            let b = byte(4)?;
            let a = if hex.len() == 8 { byte(6)? } else { 0xff };
            Some(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
        }
        _ => None,
    }
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let mut parts = args.split(',').map(str::trim);
    let r = parts.next()?.parse::<u8>().ok()?;
    let g = parts.next()?.parse::<u8>().ok()?;
    let b = parts.next()?.parse::<u8>().ok()?;
    let a = match parts.next() {
        Some(a) => a.parse::<f32>().ok().filter(|a| (0.0..=1.0).contains(a))?,
        None => 1.0,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(Color::from_rgba8(r, g, b, a))
}
