//! Per-pill animation record
//!
//! Each nav item owns exactly one of these: the last measured layout, the
//! solved circle geometry, and the hover timeline built from it. Records are
//! keyed by the item's `href` in the arena, never by position, so the item
//! list can change without animation state bleeding between entries.

use std::time::Instant;

use iced::Size;
use tracing::trace;

use crate::animation::{Ease, Phase, Property, Timeline, Tween};
use crate::config::NavItem;
use crate::geometry::{self, PillGeometry};

/// Circle scale at full reveal.
pub const FULL_SCALE: f32 = 1.2;

/// Extra lift past the pill height when the resting label slides out.
pub const LABEL_LIFT: f32 = 8.0;

/// Offset below the pill where the hover label starts.
pub const HOVER_LABEL_DROP: f32 = 12.0;

/// Animation state for one nav item.
#[derive(Debug)]
pub struct PillState {
    pub item: NavItem,
    measured: Option<Size>,
    geometry: Option<PillGeometry>,
    timeline: Timeline,
    hovered: bool,
}

/// Sampled track values for drawing one pill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillVisual {
    pub circle_scale: f32,
    pub label_offset: f32,
    pub hover_label_opacity: f32,
    pub hover_label_offset: f32,
}

impl PillState {
    pub fn new(item: NavItem, ease: Ease) -> Self {
        Self {
            item,
            measured: None,
            geometry: None,
            // Static until the first measurement arrives.
            timeline: Timeline::new(ease, Vec::new()),
            hovered: false,
        }
    }

    pub fn measured(&self) -> Option<Size> {
        self.measured
    }

    pub fn geometry(&self) -> Option<PillGeometry> {
        self.geometry
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Take a fresh layout measurement. A zero-size measurement is skipped
    /// outright and the previous geometry stays in effect; a changed one
    /// re-solves the circle and rebuilds the timeline from it.
    pub fn set_measured(&mut self, size: Size, ease: Ease) {
        if size.width <= 0.0 || size.height <= 0.0 {
            return;
        }
        if self.measured == Some(size) {
            return;
        }
        trace!(
            href = %self.item.href,
            width = size.width,
            height = size.height,
            "pill measured"
        );
        self.measured = Some(size);
        self.rebuild(ease);
    }

    /// Rebuild geometry and timeline from the current measurement, resetting
    /// the pill to its resting visual state. The previous timeline is
    /// cancelled before it is replaced, so its drive can never outlive it.
    pub fn rebuild(&mut self, ease: Ease) {
        self.timeline.cancel();

        let Some(size) = self.measured else {
            self.timeline = Timeline::new(ease, Vec::new());
            return;
        };
        let Some(geometry) = geometry::solve(size.width, size.height) else {
            return;
        };
        self.geometry = Some(geometry);

        let h = size.height;
        let mut tweens = vec![
            Tween::new(Property::CircleScale, 0.0, FULL_SCALE),
            Tween::new(Property::LabelOffset, 0.0, -(h + LABEL_LIFT)),
        ];
        // A pill without a label has no hover label to cross-fade; the
        // remaining tracks still run.
        if !self.item.label.is_empty() {
            tweens.push(Tween::new(Property::HoverLabelOpacity, 0.0, 1.0));
            tweens.push(Tween::new(
                Property::HoverLabelOffset,
                h + HOVER_LABEL_DROP,
                0.0,
            ));
        }
        self.timeline = Timeline::new(ease, tweens);
    }

    /// Pointer entered the pill: cancel any reverse drive and play forward.
    pub fn enter(&mut self, now: Instant) {
        self.hovered = true;
        self.timeline.play(now);
    }

    /// Pointer left the pill: cancel any forward drive and reverse at 1.5x.
    pub fn leave(&mut self, now: Instant) {
        self.hovered = false;
        self.timeline.reverse(now);
    }

    /// Advance on the rendering clock.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.timeline.tick(now)
    }

    pub fn phase(&self) -> Phase {
        self.timeline.phase()
    }

    pub fn is_animating(&self) -> bool {
        self.timeline.is_animating()
    }

    /// Sample the current track values. Omitted tracks report their resting
    /// value so drawing can stay oblivious.
    pub fn visual(&self) -> PillVisual {
        let rest_drop = self
            .measured
            .map(|size| size.height + HOVER_LABEL_DROP)
            .unwrap_or(HOVER_LABEL_DROP);
        PillVisual {
            circle_scale: self.timeline.value(Property::CircleScale).unwrap_or(0.0),
            label_offset: self.timeline.value(Property::LabelOffset).unwrap_or(0.0),
            hover_label_opacity: self
                .timeline
                .value(Property::HoverLabelOpacity)
                .unwrap_or(0.0),
            hover_label_offset: self
                .timeline
                .value(Property::HoverLabelOffset)
                .unwrap_or(rest_drop),
        }
    }

    #[cfg(test)]
    pub(crate) fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn measured_pill() -> PillState {
        let mut pill = PillState::new(NavItem::new("Feed", "/"), Ease::Linear);
        pill.set_measured(Size::new(96.0, 48.0), Ease::Linear);
        pill
    }

    #[test]
    fn measurement_builds_geometry_and_tracks() {
        let pill = measured_pill();
        assert!(pill.geometry().is_some());

        let rest = pill.visual();
        assert_eq!(rest.circle_scale, 0.0);
        assert_eq!(rest.label_offset, 0.0);
        assert_eq!(rest.hover_label_opacity, 0.0);
        assert_eq!(rest.hover_label_offset, 48.0 + HOVER_LABEL_DROP);
    }

    #[test]
    fn zero_size_measurement_keeps_previous_geometry() {
        let mut pill = measured_pill();
        let before = pill.geometry();

        pill.set_measured(Size::new(0.0, 48.0), Ease::Linear);
        pill.set_measured(Size::new(96.0, 0.0), Ease::Linear);

        assert_eq!(pill.geometry(), before);
        assert_eq!(pill.measured(), Some(Size::new(96.0, 48.0)));
    }

    #[test]
    fn unmeasured_pill_stays_static() {
        let mut pill = PillState::new(NavItem::new("Feed", "/"), Ease::Linear);
        let t0 = Instant::now();
        pill.enter(t0);
        pill.tick(t0 + Duration::from_millis(150));

        // No tracks, so everything samples to rest.
        assert_eq!(pill.visual().circle_scale, 0.0);
        assert!(pill.geometry().is_none());
    }

    #[test]
    fn full_reveal_reaches_target_values() {
        let mut pill = measured_pill();
        let t0 = Instant::now();

        pill.enter(t0);
        pill.tick(t0 + Duration::from_millis(300));

        let full = pill.visual();
        assert_eq!(pill.phase(), Phase::Active);
        assert!((full.circle_scale - FULL_SCALE).abs() < 1e-6);
        assert!((full.label_offset - -(48.0 + LABEL_LIFT)).abs() < 1e-3);
        assert_eq!(full.hover_label_opacity, 1.0);
        assert_eq!(full.hover_label_offset, 0.0);
    }

    #[test]
    fn empty_label_omits_hover_tracks() {
        let mut pill = PillState::new(NavItem::new("", "/blank"), Ease::Linear);
        pill.set_measured(Size::new(48.0, 48.0), Ease::Linear);

        let t0 = Instant::now();
        pill.enter(t0);
        pill.tick(t0 + Duration::from_millis(300));

        let full = pill.visual();
        // The circle still runs.
        assert!((full.circle_scale - FULL_SCALE).abs() < 1e-6);
        // The hover label tracks were omitted and stay at rest.
        assert_eq!(full.hover_label_opacity, 0.0);
    }

    #[test]
    fn rebuild_resets_to_rest_and_replaces_the_driver() {
        let mut pill = measured_pill();
        let t0 = Instant::now();

        pill.enter(t0);
        pill.tick(t0 + Duration::from_millis(150));
        assert!(pill.is_animating());

        pill.rebuild(Ease::Linear);
        assert!(!pill.is_animating(), "old drive must not survive a rebuild");
        assert_eq!(pill.visual().circle_scale, 0.0);
        assert_eq!(pill.phase(), Phase::Idle);
    }

    #[test]
    fn remeasure_mid_hover_rebuilds_tracks_from_new_height() {
        let mut pill = measured_pill();
        let t0 = Instant::now();
        pill.enter(t0);
        pill.tick(t0 + Duration::from_millis(150));

        pill.set_measured(Size::new(80.0, 42.0), Ease::Linear);
        pill.enter(t0 + Duration::from_millis(200));
        pill.tick(t0 + Duration::from_millis(500));

        let full = pill.visual();
        assert!((full.label_offset - -(42.0 + LABEL_LIFT)).abs() < 1e-3);
    }
}
