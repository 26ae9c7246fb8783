//! Pill navigation component
//!
//! `PillNav` is the host-owned controller: it keeps the per-item animation
//! arena (keyed by `href`), reacts to the widget's interaction events, and
//! advances everything on the host's rendering clock. The widget in
//! [`widget`] renders from this state and publishes [`NavEvent`]s back; the
//! host forwards them into [`PillNav::update`] and handles the returned
//! action, so navigation itself stays with the host's router.
//!
//! Layout resynchronization: measurements flow in
//! continuously from the widget's layout pass (`NavEvent::Measured`), window
//! resizes are debounced through `notify_resized`, font-load completion is
//! `notify_fonts_loaded`, and item-list changes go through `set_items`. Every
//! trigger rebuilds the affected timelines from fresh geometry and resets
//! resting visuals; the replaced timelines are cancelled first, so a pill
//! never has two drivers.

pub mod pill;
pub mod widget;

use std::time::{Duration, Instant};

use iced::Size;
use tracing::{debug, trace};

use crate::animation::IntroAnimation;
use crate::config::{NavItem, PillNavConfig};
use crate::route;
use crate::theme::NavPalette;

pub use pill::{PillState, PillVisual};
pub use widget::PillNavWidget;

/// Window resizes are coalesced for this long before geometry is rebuilt.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Interaction reported by the nav widget to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// Pointer entered the pill with this href.
    Entered(String),
    /// Pointer left the pill with this href.
    Left(String),
    /// A pill was selected.
    Selected(String),
    /// The widget laid a pill out at a new size.
    Measured(String, Size),
}

/// What the host should do in response to an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Navigate to this href. The component never navigates itself.
    Navigate(String),
}

/// Animated pill navigation state.
#[derive(Debug)]
pub struct PillNav {
    config: PillNavConfig,
    palette: NavPalette,
    pills: Vec<PillState>,
    intro: Option<IntroAnimation>,
    resize_deadline: Option<Instant>,
}

impl PillNav {
    pub fn new(config: PillNavConfig) -> Self {
        let palette = config.palette();
        let pills = config
            .items
            .iter()
            .cloned()
            .map(|item| PillState::new(item, config.ease))
            .collect::<Vec<_>>();
        let intro = config
            .initial_load_animation
            .then(|| IntroAnimation::new(config.ease, pills.len()));

        debug!(items = pills.len(), "pill nav created");
        Self {
            config,
            palette,
            pills,
            intro,
            resize_deadline: None,
        }
    }

    /// Handle an interaction event from the widget. Returns the action the
    /// host should take, if any.
    pub fn update(&mut self, event: NavEvent, now: Instant) -> Option<NavAction> {
        match event {
            NavEvent::Entered(href) => {
                trace!(%href, "pointer entered pill");
                if let Some(pill) = self.pill_mut(&href) {
                    pill.enter(now);
                }
                None
            }
            NavEvent::Left(href) => {
                trace!(%href, "pointer left pill");
                if let Some(pill) = self.pill_mut(&href) {
                    pill.leave(now);
                }
                None
            }
            NavEvent::Selected(href) => {
                debug!(%href, "navigation requested");
                Some(NavAction::Navigate(href))
            }
            NavEvent::Measured(href, size) => {
                let ease = self.config.ease;
                if let Some(pill) = self.pill_mut(&href) {
                    pill.set_measured(size, ease);
                }
                None
            }
        }
    }

    /// Advance all animations on the rendering clock. Returns true while
    /// another frame is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.resize_deadline.is_some_and(|deadline| now >= deadline) {
            self.resize_deadline = None;
            debug!("resize debounce elapsed, resyncing layout");
            self.resync();
        }

        let mut animating = false;
        for pill in &mut self.pills {
            animating |= pill.tick(now);
        }
        if let Some(intro) = &mut self.intro {
            animating |= intro.tick(now);
        }
        animating || self.resize_deadline.is_some()
    }

    /// The window resized; schedule a debounced resync so continuous resizes
    /// do not thrash geometry.
    pub fn notify_resized(&mut self, now: Instant) {
        self.resize_deadline = Some(now + RESIZE_DEBOUNCE);
    }

    /// Font loading finished; label widths may have changed, resync now.
    pub fn notify_fonts_loaded(&mut self) {
        debug!("fonts loaded, resyncing layout");
        self.resync();
    }

    /// Route changed on the host side.
    pub fn set_active_href(&mut self, href: impl Into<String>) {
        self.config.active_href = href.into();
    }

    /// Replace the item set. Records for surviving hrefs keep their
    /// measurements; removed items drop their animation state with them.
    pub fn set_items(&mut self, items: Vec<NavItem>) {
        let ease = self.config.ease;
        let mut old = std::mem::take(&mut self.pills);
        self.pills = items
            .iter()
            .cloned()
            .map(|item| {
                match old.iter().position(|pill| pill.item.href == item.href) {
                    Some(index) => {
                        let mut pill = old.swap_remove(index);
                        pill.item = item;
                        pill
                    }
                    None => PillState::new(item, ease),
                }
            })
            .collect();
        self.config.items = items;

        debug!(items = self.pills.len(), "item set replaced, resyncing");
        self.resync();
    }

    /// Rebuild every pill's geometry and timeline from its current
    /// measurement and reset resting visuals.
    fn resync(&mut self) {
        let ease = self.config.ease;
        for pill in &mut self.pills {
            pill.rebuild(ease);
        }
    }

    /// True while any timeline, the intro, or a pending resize debounce
    /// still needs rendering-clock ticks.
    pub fn is_animating(&self) -> bool {
        self.resize_deadline.is_some()
            || self.intro.as_ref().is_some_and(IntroAnimation::is_animating)
            || self.pills.iter().any(PillState::is_animating)
    }

    /// Whether the pill with this href matches the current route.
    pub fn is_item_active(&self, href: &str) -> bool {
        route::is_active(&self.config.active_href, href)
    }

    pub fn pills(&self) -> &[PillState] {
        &self.pills
    }

    pub fn palette(&self) -> NavPalette {
        self.palette
    }

    pub fn config(&self) -> &PillNavConfig {
        &self.config
    }

    /// Entrance offset for pill `index`; 0 once settled or when disabled.
    pub fn intro_offset(&self, index: usize) -> f32 {
        self.intro
            .as_ref()
            .map(|intro| intro.offset(index))
            .unwrap_or(0.0)
    }

    /// Entrance opacity for pill `index`; 1 once settled or when disabled.
    pub fn intro_opacity(&self, index: usize) -> f32 {
        self.intro
            .as_ref()
            .map(|intro| intro.opacity(index))
            .unwrap_or(1.0)
    }

    /// Build the widget for this nav.
    pub fn view<'a, Message: 'a>(
        &'a self,
        on_event: impl Fn(NavEvent) -> Message + 'a,
    ) -> iced::Element<'a, Message> {
        PillNavWidget::new(self, on_event).into()
    }

    fn pill_mut(&mut self, href: &str) -> Option<&mut PillState> {
        self.pills.iter_mut().find(|pill| pill.item.href == href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Ease, Phase};

    fn skillswap_nav() -> PillNav {
        let mut config = PillNavConfig::new(
            vec![NavItem::new("Feed", "/"), NavItem::new("Swap", "/swap")],
            "/swap",
        );
        config.ease = Ease::Linear;
        config.initial_load_animation = false;
        let mut nav = PillNav::new(config);

        // Feed the measurements the widget's layout pass would report.
        let t0 = Instant::now();
        nav.update(NavEvent::Measured("/".into(), Size::new(80.0, 48.0)), t0);
        nav.update(
            NavEvent::Measured("/swap".into(), Size::new(90.0, 48.0)),
            t0,
        );
        nav
    }

    mod active_route {
        use super::*;

        #[test]
        fn exactly_one_pill_is_active() {
            let nav = skillswap_nav();
            assert!(!nav.is_item_active("/"));
            assert!(nav.is_item_active("/swap"));
        }

        #[test]
        fn trailing_slash_still_pins_the_pill() {
            let mut nav = skillswap_nav();
            nav.set_active_href("/swap/");
            assert!(nav.is_item_active("/swap"));
        }

        #[test]
        fn unknown_route_pins_nothing() {
            let mut nav = skillswap_nav();
            nav.set_active_href("/elsewhere");
            assert!(!nav.is_item_active("/"));
            assert!(!nav.is_item_active("/swap"));
        }
    }

    mod interaction {
        use super::*;

        #[test]
        fn rapid_enter_leave_enter_leaves_one_forward_driver() {
            let mut nav = skillswap_nav();
            let t0 = Instant::now();

            nav.update(NavEvent::Entered("/".into()), t0);
            nav.tick(t0 + Duration::from_millis(50));
            nav.update(NavEvent::Left("/".into()), t0 + Duration::from_millis(50));
            nav.tick(t0 + Duration::from_millis(80));
            nav.update(NavEvent::Entered("/".into()), t0 + Duration::from_millis(80));

            let driving: Vec<_> = nav
                .pills()
                .iter()
                .filter(|pill| pill.is_animating())
                .collect();
            assert_eq!(driving.len(), 1, "exactly one tween may run");
            assert!(
                driving[0].timeline().is_playing_forward(),
                "the surviving driver must play forward"
            );
        }

        #[test]
        fn selection_requests_navigation_without_performing_it() {
            let mut nav = skillswap_nav();
            let action = nav.update(NavEvent::Selected("/".into()), Instant::now());
            assert_eq!(action, Some(NavAction::Navigate("/".into())));
            // The active route is untouched until the host navigates.
            assert!(nav.is_item_active("/swap"));
        }

        #[test]
        fn events_for_unknown_hrefs_are_ignored() {
            let mut nav = skillswap_nav();
            let t0 = Instant::now();
            assert_eq!(nav.update(NavEvent::Entered("/ghost".into()), t0), None);
            assert!(!nav.is_animating());
        }

        #[test]
        fn hover_settles_back_to_idle() {
            let mut nav = skillswap_nav();
            let t0 = Instant::now();

            nav.update(NavEvent::Entered("/".into()), t0);
            nav.tick(t0 + Duration::from_millis(300));
            assert_eq!(nav.pills()[0].phase(), Phase::Active);

            let t1 = t0 + Duration::from_millis(400);
            nav.update(NavEvent::Left("/".into()), t1);
            // Reverse runs 1.5x, so 200ms suffices.
            nav.tick(t1 + Duration::from_millis(200));
            assert_eq!(nav.pills()[0].phase(), Phase::Idle);
            assert!(!nav.is_animating());
        }
    }

    mod resync {
        use super::*;

        #[test]
        fn resize_is_debounced_and_coalesced() {
            let mut nav = skillswap_nav();
            let t0 = Instant::now();

            // A hover in flight gives us something observable to reset.
            nav.update(NavEvent::Entered("/".into()), t0);
            nav.tick(t0 + Duration::from_millis(50));
            assert!(nav.pills()[0].visual().circle_scale > 0.0);

            nav.notify_resized(t0 + Duration::from_millis(60));
            nav.notify_resized(t0 + Duration::from_millis(90));

            // First deadline (t0+160) must not fire: the second resize
            // pushed it to t0+190.
            nav.tick(t0 + Duration::from_millis(170));
            assert!(
                nav.pills()[0].is_animating(),
                "resync must not run before the coalesced deadline"
            );

            nav.tick(t0 + Duration::from_millis(195));
            assert_eq!(nav.pills()[0].visual().circle_scale, 0.0);
            assert!(!nav.pills()[0].is_animating());
        }

        #[test]
        fn pending_debounce_keeps_frames_coming() {
            let mut nav = skillswap_nav();
            let t0 = Instant::now();
            assert!(!nav.is_animating());

            nav.notify_resized(t0);
            assert!(
                nav.is_animating(),
                "the deadline can only fire if ticks keep arriving"
            );
            nav.tick(t0 + RESIZE_DEBOUNCE);
            assert!(!nav.is_animating());
        }

        #[test]
        fn font_load_resyncs_immediately() {
            let mut nav = skillswap_nav();
            let t0 = Instant::now();

            nav.update(NavEvent::Entered("/".into()), t0);
            nav.tick(t0 + Duration::from_millis(50));

            nav.notify_fonts_loaded();
            assert!(!nav.pills()[0].is_animating());
            assert_eq!(nav.pills()[0].visual().circle_scale, 0.0);
        }

        #[test]
        fn item_replacement_keeps_surviving_measurements() {
            let mut nav = skillswap_nav();
            let swap_geometry = nav.pills()[1].geometry();
            assert!(swap_geometry.is_some());

            nav.set_items(vec![
                NavItem::new("Swap", "/swap"),
                NavItem::new("Requests", "/requests"),
            ]);

            assert_eq!(nav.pills().len(), 2);
            assert_eq!(nav.pills()[0].item.href, "/swap");
            assert_eq!(
                nav.pills()[0].geometry(),
                swap_geometry,
                "surviving item keeps its measurement-derived geometry"
            );
            assert!(
                nav.pills()[1].geometry().is_none(),
                "new item waits for its first measurement"
            );
        }
    }

    mod intro {
        use super::*;

        #[test]
        fn intro_requests_frames_until_done() {
            let mut config = PillNavConfig::new(vec![NavItem::new("Feed", "/")], "/");
            config.initial_load_animation = true;
            let mut nav = PillNav::new(config);

            assert!(nav.is_animating(), "intro is owed a run");
            let t0 = Instant::now();
            nav.tick(t0);
            // delay 400 + duration 400 for a single pill.
            nav.tick(t0 + Duration::from_millis(800));
            assert!(!nav.is_animating());
            assert_eq!(nav.intro_opacity(0), 1.0);
            assert_eq!(nav.intro_offset(0), 0.0);
        }

        #[test]
        fn intro_can_be_disabled() {
            let mut config = PillNavConfig::new(vec![NavItem::new("Feed", "/")], "/");
            config.initial_load_animation = false;
            let nav = PillNav::new(config);

            assert!(!nav.is_animating());
            assert_eq!(nav.intro_opacity(0), 1.0);
            assert_eq!(nav.intro_offset(0), 0.0);
        }
    }
}
