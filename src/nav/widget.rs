//! Pill navigation widget
//!
//! Implements iced's `Widget` trait directly: the layout pass measures each
//! label with the renderer's paragraph shaping (so pill widths track the
//! real font metrics, including late font loads), the update pass turns raw
//! mouse events into per-pill enter/leave/select events for the controller,
//! and the draw pass renders everything from sampled track values. The
//! widget holds no animation state of its own; it is rebuilt every frame
//! from the [`PillNav`](super::PillNav) it borrows.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::text::{self, Paragraph as _, Renderer as _, Text};
use iced::advanced::widget::{self, Tree, Widget};
use iced::advanced::{Clipboard, Renderer as _, Shell};
use iced::alignment;
use iced::mouse::{self, Cursor};
use iced::{
    Background, Border, Element, Event, Font, Length, Pixels, Point, Rectangle, Size, Theme,
    window,
};

use super::pill::PillState;
use super::{NavEvent, PillNav};
use crate::theme::{self, NavPalette};

/// Pill row height.
pub const NAV_HEIGHT: f32 = 48.0;
/// Horizontal padding inside a pill.
pub const PILL_PAD_X: f32 = 20.0;
/// Gap between pills.
pub const PILL_GAP: f32 = 6.0;
/// Padding between the pills and the backdrop edge.
pub const OUTER_PAD: f32 = 6.0;
/// Label size.
pub const LABEL_SIZE: f32 = 14.0;

/// Below this available width the compact metrics apply.
pub const COMPACT_BREAKPOINT: f32 = 640.0;
pub const COMPACT_NAV_HEIGHT: f32 = 42.0;
pub const COMPACT_PILL_PAD_X: f32 = 12.0;
pub const COMPACT_PILL_GAP: f32 = 4.0;
pub const COMPACT_OUTER_PAD: f32 = 4.0;
pub const COMPACT_LABEL_SIZE: f32 = 12.0;

/// Layout constants for one breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Metrics {
    nav_height: f32,
    pad_x: f32,
    gap: f32,
    outer_pad: f32,
    label_size: f32,
}

impl Metrics {
    fn for_available_width(width: f32) -> Self {
        if width.is_finite() && width < COMPACT_BREAKPOINT {
            Self {
                nav_height: COMPACT_NAV_HEIGHT,
                pad_x: COMPACT_PILL_PAD_X,
                gap: COMPACT_PILL_GAP,
                outer_pad: COMPACT_OUTER_PAD,
                label_size: COMPACT_LABEL_SIZE,
            }
        } else {
            Self {
                nav_height: NAV_HEIGHT,
                pad_x: PILL_PAD_X,
                gap: PILL_GAP,
                outer_pad: OUTER_PAD,
                label_size: LABEL_SIZE,
            }
        }
    }
}

/// Internal widget state kept across frames.
#[derive(Debug)]
struct WidgetState {
    /// Index of the pill currently under the pointer.
    hovered: Option<usize>,
    /// Label size picked by the last layout pass.
    label_size: f32,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            hovered: None,
            label_size: LABEL_SIZE,
        }
    }
}

/// The rendered pill row. Build it through [`PillNav::view`].
pub struct PillNavWidget<'a, Message> {
    nav: &'a PillNav,
    on_event: Box<dyn Fn(NavEvent) -> Message + 'a>,
}

impl<'a, Message> PillNavWidget<'a, Message> {
    pub fn new(nav: &'a PillNav, on_event: impl Fn(NavEvent) -> Message + 'a) -> Self {
        Self {
            nav,
            on_event: Box::new(on_event),
        }
    }

    fn label_font(&self) -> Font {
        Font {
            weight: theme::MEDIUM_WEIGHT,
            ..Font::default()
        }
    }

    fn pill_under(&self, layout: Layout<'_>, position: Point) -> Option<usize> {
        layout
            .children()
            .position(|child| child.bounds().contains(position))
    }

    fn draw_pill(
        &self,
        renderer: &mut iced::Renderer,
        pill: &PillState,
        bounds: Rectangle,
        active: bool,
        intro_alpha: f32,
        label_size: f32,
        palette: &NavPalette,
    ) {
        let radius = bounds.height / 2.0;
        let center = Point::new(bounds.center_x(), bounds.center_y());
        let label = |renderer: &mut iced::Renderer, position: Point, color: iced::Color| {
            renderer.fill_text(
                Text {
                    content: pill.item.label.to_uppercase(),
                    bounds: Size::INFINITE,
                    size: Pixels(label_size),
                    line_height: text::LineHeight::default(),
                    font: self.label_font(),
                    align_x: text::Alignment::Center,
                    align_y: alignment::Vertical::Center,
                    shaping: text::Shaping::Basic,
                    wrapping: text::Wrapping::default(),
                },
                position,
                color,
                bounds,
            );
        };

        // Active pills are pinned to the active visual regardless of hover.
        if active {
            renderer.fill_quad(
                renderer::Quad {
                    bounds,
                    border: Border::default().rounded(radius),
                    ..Default::default()
                },
                Background::Color(theme::with_alpha(palette.base, intro_alpha)),
            );
            label(renderer, center, theme::with_alpha(palette.hover_text, intro_alpha));
            return;
        }

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: Border::default().rounded(radius),
                ..Default::default()
            },
            Background::Color(theme::with_alpha(palette.pill, intro_alpha)),
        );

        let visual = pill.visual();
        let geometry = pill.geometry();

        // Everything animated overflows the pill and is clipped to it.
        renderer.with_layer(bounds, |renderer| {
            if let Some(geometry) = geometry {
                let scale = visual.circle_scale;
                if scale > 0.0 {
                    // Scale about the origin on the pill's bottom edge; the
                    // circle grows up out of it.
                    let diameter = geometry.diameter * scale;
                    let top = bounds.y + bounds.height - scale * geometry.origin_y;
                    renderer.fill_quad(
                        renderer::Quad {
                            bounds: Rectangle {
                                x: center.x - diameter / 2.0,
                                y: top,
                                width: diameter,
                                height: diameter,
                            },
                            border: Border::default().rounded(diameter / 2.0),
                            ..Default::default()
                        },
                        Background::Color(theme::with_alpha(palette.base, intro_alpha)),
                    );
                }
            }

            label(
                renderer,
                Point::new(center.x, center.y + visual.label_offset),
                theme::with_alpha(palette.pill_text, intro_alpha),
            );

            if visual.hover_label_opacity > 0.0 {
                label(
                    renderer,
                    Point::new(center.x, center.y + visual.hover_label_offset),
                    theme::with_alpha(
                        palette.hover_text,
                        visual.hover_label_opacity * intro_alpha,
                    ),
                );
            }
        });
    }
}

impl<'a, Message> Widget<Message, Theme, iced::Renderer> for PillNavWidget<'a, Message> {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Shrink, Length::Shrink)
    }

    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<WidgetState>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(WidgetState::default())
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let metrics = Metrics::for_available_width(limits.max().width);
        let state = tree.state.downcast_mut::<WidgetState>();
        state.label_size = metrics.label_size;

        let font = self.label_font();
        let mut x = metrics.outer_pad;
        let mut children = Vec::with_capacity(self.nav.pills().len());

        for pill in self.nav.pills() {
            let content = pill.item.label.to_uppercase();
            let paragraph = <iced::Renderer as text::Renderer>::Paragraph::with_text(Text {
                content: content.as_str(),
                bounds: Size::INFINITE,
                size: Pixels(metrics.label_size),
                line_height: text::LineHeight::default(),
                font,
                align_x: text::Alignment::Center,
                align_y: alignment::Vertical::Center,
                shaping: text::Shaping::Basic,
                wrapping: text::Wrapping::default(),
            });
            let width = paragraph.min_bounds().width.ceil() + 2.0 * metrics.pad_x;

            children.push(
                layout::Node::new(Size::new(width, metrics.nav_height))
                    .move_to(Point::new(x, metrics.outer_pad)),
            );
            x += width + metrics.gap;
        }

        let content_width = if children.is_empty() {
            2.0 * metrics.outer_pad
        } else {
            x - metrics.gap + metrics.outer_pad
        };
        let intrinsic = Size::new(content_width, metrics.nav_height + 2.0 * metrics.outer_pad);
        let size = limits.resolve(Length::Shrink, Length::Shrink, intrinsic);

        layout::Node::with_children(size, children)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &iced::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<WidgetState>();

        match event {
            // Report fresh measurements once per frame so the controller can
            // resolve geometry from the real laid-out size.
            Event::Window(window::Event::RedrawRequested(_)) => {
                for (pill, child) in self.nav.pills().iter().zip(layout.children()) {
                    let size = child.bounds().size();
                    let known = pill.measured();
                    let changed = known.is_none_or(|known| {
                        (known.width - size.width).abs() > 0.5
                            || (known.height - size.height).abs() > 0.5
                    });
                    if changed {
                        shell.publish((self.on_event)(NavEvent::Measured(
                            pill.item.href.clone(),
                            size,
                        )));
                    }
                }
            }

            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let hovered = cursor
                    .position()
                    .and_then(|position| self.pill_under(layout, position));
                if hovered != state.hovered {
                    if let Some(old) = state.hovered.take() {
                        if let Some(pill) = self.nav.pills().get(old) {
                            shell.publish((self.on_event)(NavEvent::Left(
                                pill.item.href.clone(),
                            )));
                        }
                    }
                    if let Some(new) = hovered {
                        if let Some(pill) = self.nav.pills().get(new) {
                            shell.publish((self.on_event)(NavEvent::Entered(
                                pill.item.href.clone(),
                            )));
                        }
                    }
                    state.hovered = hovered;
                    shell.request_redraw();
                }
            }

            Event::Mouse(mouse::Event::CursorLeft) => {
                if let Some(old) = state.hovered.take() {
                    if let Some(pill) = self.nav.pills().get(old) {
                        shell.publish((self.on_event)(NavEvent::Left(pill.item.href.clone())));
                    }
                    shell.request_redraw();
                }
            }

            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position() {
                    if let Some(index) = self.pill_under(layout, position) {
                        if let Some(pill) = self.nav.pills().get(index) {
                            shell.publish((self.on_event)(NavEvent::Selected(
                                pill.item.href.clone(),
                            )));
                            shell.capture_event();
                        }
                    }
                }
            }

            _ => {}
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<WidgetState>();
        let bounds = layout.bounds();
        let palette = self.nav.palette();

        // Translucent backdrop with a hairline border.
        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: Border {
                    color: theme::CONTAINER_BORDER,
                    width: 1.0,
                    radius: (bounds.height / 2.0).into(),
                },
                ..Default::default()
            },
            Background::Color(theme::CONTAINER_BG),
        );

        for (index, (pill, child)) in self
            .nav
            .pills()
            .iter()
            .zip(layout.children())
            .enumerate()
        {
            let intro_alpha = self.nav.intro_opacity(index);
            if intro_alpha <= 0.0 {
                continue;
            }
            let mut pill_bounds = child.bounds();
            pill_bounds.y += self.nav.intro_offset(index);

            let active = self.nav.is_item_active(&pill.item.href);
            self.draw_pill(
                renderer,
                pill,
                pill_bounds,
                active,
                intro_alpha,
                state.label_size,
                &palette,
            );
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        let over_pill = cursor
            .position()
            .and_then(|position| self.pill_under(layout, position))
            .is_some();
        if over_pill {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message: 'a> From<PillNavWidget<'a, Message>> for Element<'a, Message> {
    fn from(widget: PillNavWidget<'a, Message>) -> Self {
        Element::new(widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_metrics_kick_in_under_the_breakpoint() {
        let regular = Metrics::for_available_width(1280.0);
        assert_eq!(regular.nav_height, NAV_HEIGHT);
        assert_eq!(regular.label_size, LABEL_SIZE);

        let compact = Metrics::for_available_width(480.0);
        assert_eq!(compact.nav_height, COMPACT_NAV_HEIGHT);
        assert_eq!(compact.pad_x, COMPACT_PILL_PAD_X);
        assert_eq!(compact.label_size, COMPACT_LABEL_SIZE);
    }

    #[test]
    fn unbounded_width_uses_regular_metrics() {
        let metrics = Metrics::for_available_width(f32::INFINITY);
        assert_eq!(metrics.nav_height, NAV_HEIGHT);
    }
}
