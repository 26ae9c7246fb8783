//! pillnav - animated pill navigation for iced
//!
//! A row of pill-shaped navigation buttons with a circular reveal on hover:
//! a circle solved from each pill's rendered geometry slides up from the
//! bottom edge while the resting label lifts out and a contrasting hover
//! label drops in. Playback is a reversible per-pill timeline driven by the
//! host's rendering clock, so enter/leave can interrupt each other at any
//! point without fighting.
//!
//! The host owns a [`PillNav`] controller, renders it with
//! [`PillNav::view`], forwards the widget's [`NavEvent`]s back into
//! [`PillNav::update`], and navigates when it receives
//! [`NavAction::Navigate`]. See `src/main.rs` for a complete shell.

pub mod animation;
pub mod config;
pub mod geometry;
pub mod nav;
pub mod route;
pub mod theme;

pub use animation::Ease;
pub use config::{ConfigError, NavItem, PillNavConfig};
pub use nav::{NavAction, NavEvent, PillNav};
pub use theme::NavPalette;
