//! SkillSwap demo shell
//!
//! A thin host application for the pill navigation: it supplies the item
//! list and the current route, swaps placeholder page content on navigation,
//! and drives the nav's animations from the window's rendering clock. All
//! real screen logic stays out of scope here on purpose; the shell exists to
//! play the role the surrounding app plays for the nav component.

use std::path::Path;
use std::time::Instant;

use iced::widget::{Space, column, container, text};
use iced::{Element, Fill, Subscription, Task, Theme};

use pillnav::{Ease, NavAction, NavEvent, NavItem, PillNav, PillNavConfig};

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .antialiasing(true)
        .run()
}

struct App {
    nav: PillNav,
    route: String,
}

#[derive(Debug, Clone)]
enum Message {
    /// Interaction reported by the nav widget
    Nav(NavEvent),
    /// Animation tick
    AnimationTick,
    /// Window resized
    WindowResized(iced::Size),
}

/// The nav setup the SkillSwap layout ships with.
fn default_config() -> PillNavConfig {
    let mut config = PillNavConfig::new(
        vec![
            NavItem::new("Feed", "/"),
            NavItem::new("Swap", "/swap"),
            NavItem::new("Search", "/search"),
            NavItem::new("Requests", "/requests"),
            NavItem::new("Messages", "/messages"),
        ],
        "/",
    );
    config.ease = Ease::from_name("power2.inOut").unwrap_or_default();
    config.base_color = Some("#ffffff".to_string());
    config.pill_color = Some("rgba(255, 255, 255, 0.1)".to_string());
    config.hovered_pill_text_color = Some("#000000".to_string());
    config.pill_text_color = Some("#ffffff".to_string());
    config
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let config = match PillNavConfig::load_from_file(Path::new("pillnav.json")) {
            Ok(config) => {
                tracing::info!("loaded nav config from pillnav.json");
                config
            }
            Err(err) => {
                tracing::debug!("using built-in nav config ({err})");
                default_config()
            }
        };
        let route = config.active_href.clone();

        (
            Self {
                nav: PillNav::new(config),
                route,
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Nav(event) => {
                if let Some(NavAction::Navigate(href)) = self.nav.update(event, Instant::now()) {
                    tracing::info!("navigating to {href}");
                    self.route = href.clone();
                    self.nav.set_active_href(href);
                }
            }
            Message::AnimationTick => {
                self.nav.tick(Instant::now());
            }
            Message::WindowResized(_size) => {
                self.nav.notify_resized(Instant::now());
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let (title, blurb) = page_content(&self.route);

        let page = column![
            text(title).size(28),
            Space::new().height(12),
            text(blurb).size(14),
        ]
        .padding(48);

        column![
            container(page).center_x(Fill),
            Space::new().height(Fill),
            container(self.nav.view(Message::Nav))
                .center_x(Fill)
                .padding(24),
        ]
        .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn title(&self) -> String {
        let (title, _) = page_content(&self.route);
        format!("SkillSwap - {title}")
    }

    /// Animation frames only while something is actually moving; resize
    /// events always, so the nav can debounce its relayout.
    fn subscription(&self) -> Subscription<Message> {
        let animation = if self.nav.is_animating() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            Subscription::none()
        };
        let resize =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        Subscription::batch([animation, resize])
    }
}

/// Placeholder content standing in for the real screens.
fn page_content(route: &str) -> (&'static str, &'static str) {
    match pillnav::route::normalize(route) {
        "/" => ("Feed", "What people around you are offering to teach."),
        "/swap" => ("Swap", "Propose a skill swap once matching ships."),
        "/search" => ("Search", "Find someone by the skill they offer."),
        "/requests" => ("Requests", "Swap requests waiting on your answer."),
        "/messages" => ("Messages", "Conversations with your swap partners."),
        _ => ("Not found", "That route has no screen yet."),
    }
}
