//! Home page render model
//!
//! Everything the home page shows is computed here from two inputs, the
//! [`Viewer`] and the [`Theme`], by [`HomeLayout::render`]. The Leptos component
//! only turns the resulting layout into markup, so the rules below are
//! testable without a browser.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::TypingError;
use super::typing::TypingConfig;

/// Strings cycled by the headline typewriter, in display order
pub const HEADLINES: [&str; 3] = [
    "Plan Your Perfect Trip with AI",
    "Discover Amazing Destinations",
    "Create Custom Itineraries",
];

pub const TYPE_SPEED: Duration = Duration::from_millis(50);
pub const BACK_SPEED: Duration = Duration::from_millis(30);
pub const BACK_DELAY: Duration = Duration::from_millis(1500);

pub const SUBHEADING: &str =
    "Get personalized travel itineraries generated by AI based on your preferences";

pub const LOGIN_PROMPT: &str = "Already have an account?";

/// Link targets used by the home page
pub mod routes {
    pub const HOME: &str = "/";
    pub const PLAN_TRIP: &str = "/plan-trip";
    pub const REGISTER: &str = "/register";
    pub const LOGIN: &str = "/login";
}

/// Typewriter configuration for the headline.
pub fn home_typing_config() -> Result<TypingConfig, TypingError> {
    Ok(TypingConfig::new(HEADLINES)?
        .with_type_speed(TYPE_SPEED)
        .with_back_speed(BACK_SPEED)
        .with_back_delay(BACK_DELAY)
        .with_loop(true))
}

/// Effective color theme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Signed-in user as exposed by the auth provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
}

/// Who is looking at the page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Viewer {
    Authenticated {
        user: User,
    },
    #[default]
    Anonymous,
}

impl Viewer {
    pub fn user(&self) -> Option<&User> {
        match self {
            Viewer::Authenticated { user } => Some(user),
            Viewer::Anonymous => None,
        }
    }
}

impl From<Option<User>> for Viewer {
    fn from(user: Option<User>) -> Self {
        match user {
            Some(user) => Viewer::Authenticated { user },
            None => Viewer::Anonymous,
        }
    }
}

/// Colors resolved from a [`Theme`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Headline and card titles
    pub heading: &'static str,
    /// Subheading, card descriptions and the login prompt
    pub body: &'static str,
    /// Card background
    pub surface: &'static str,
    /// Card border
    pub border: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        heading: "#1f2937",
        body: "#4b5563",
        surface: "#ffffff",
        border: "#e5e7eb",
    };

    pub const DARK: Palette = Palette {
        heading: "#ffffff",
        body: "#cbd5e1",
        surface: "var(--bg-secondary)",
        border: "var(--card-border)",
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }

    pub fn colors(&self) -> [&'static str; 4] {
        [self.heading, self.body, self.surface, self.border]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
    Map,
    Calendar,
    Plane,
}

/// Static content of one feature card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        icon: FeatureIcon::Map,
        title: "Smart Recommendations",
        description: "Get AI-powered suggestions for attractions, restaurants, and activities",
    },
    FeatureCard {
        icon: FeatureIcon::Calendar,
        title: "Detailed Itineraries",
        description: "Receive hour-by-hour schedules tailored to your preferences",
    },
    FeatureCard {
        icon: FeatureIcon::Plane,
        title: "Personalized Experience",
        description: "Plans adapted to your budget, companions, and travel style",
    },
];

/// A feature card with its theme colors applied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyledCard {
    pub card: FeatureCard,
    pub title_color: &'static str,
    pub description_color: &'static str,
    pub background: &'static str,
    pub border: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Action region at the bottom of the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallToAction {
    /// Signed in: go straight to planning
    PlanTrip { primary: NavLink },
    /// Signed out: register, or log in with an existing account
    SignUp {
        primary: NavLink,
        prompt: &'static str,
        login: NavLink,
    },
}

impl CallToAction {
    pub fn for_viewer(viewer: &Viewer) -> Self {
        match viewer {
            Viewer::Authenticated { .. } => CallToAction::PlanTrip {
                primary: NavLink {
                    href: routes::PLAN_TRIP,
                    label: "Start Planning Your Trip",
                },
            },
            Viewer::Anonymous => CallToAction::SignUp {
                primary: NavLink {
                    href: routes::REGISTER,
                    label: "Get Started",
                },
                prompt: LOGIN_PROMPT,
                login: NavLink {
                    href: routes::LOGIN,
                    label: "Login here",
                },
            },
        }
    }

    /// All links in the region, primary first
    pub fn links(&self) -> Vec<NavLink> {
        match *self {
            CallToAction::PlanTrip { primary } => vec![primary],
            CallToAction::SignUp { primary, login, .. } => vec![primary, login],
        }
    }
}

/// Blocks that take part in the entry transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntrySlot {
    Headline,
    Subheading,
    Cards,
    Card(usize),
    CallToAction,
}

/// Staggered fade/slide-in played once when the page appears
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryTransition {
    pub duration: Duration,
    pub stagger: Duration,
    /// Vertical slide distance in pixels
    pub offset: u32,
}

impl Default for EntryTransition {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(500),
            stagger: Duration::from_millis(200),
            offset: 20,
        }
    }
}

impl EntryTransition {
    /// Start delay of a block relative to the page container.
    ///
    /// Top-level blocks are staggered in order; cards are staggered again
    /// inside the grid, starting when the grid starts.
    pub fn delay(&self, slot: EntrySlot) -> Duration {
        let position = match slot {
            EntrySlot::Headline => 0,
            EntrySlot::Subheading => 1,
            EntrySlot::Cards => 2,
            EntrySlot::Card(index) => 2 + index as u32,
            EntrySlot::CallToAction => 3,
        };
        self.stagger * position
    }
}

/// Everything needed to draw the home page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeLayout {
    pub headline_color: &'static str,
    pub subheading: &'static str,
    pub subheading_color: &'static str,
    pub cards: [StyledCard; 3],
    pub call_to_action: CallToAction,
    pub prompt_color: &'static str,
    pub transition: EntryTransition,
}

impl HomeLayout {
    pub fn render(viewer: &Viewer, theme: Theme) -> Self {
        let palette = Palette::for_theme(theme);

        Self {
            headline_color: palette.heading,
            subheading: SUBHEADING,
            subheading_color: palette.body,
            cards: FEATURE_CARDS.map(|card| StyledCard {
                card,
                title_color: palette.heading,
                description_color: palette.body,
                background: palette.surface,
                border: palette.border,
            }),
            call_to_action: CallToAction::for_viewer(viewer),
            prompt_color: palette.body,
            transition: EntryTransition::default(),
        }
    }

    /// Every color value used by the layout
    pub fn colors(&self) -> Vec<&'static str> {
        let mut colors = vec![self.headline_color, self.subheading_color, self.prompt_color];
        for card in &self.cards {
            colors.extend([
                card.title_color,
                card.description_color,
                card.background,
                card.border,
            ]);
        }
        colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traveller() -> Viewer {
        Viewer::Authenticated {
            user: User {
                id: "u-1".to_string(),
                email: "ada@example.com".to_string(),
                username: "ada".to_string(),
            },
        }
    }

    fn viewers() -> [Viewer; 2] {
        [traveller(), Viewer::Anonymous]
    }

    fn count(links: &[NavLink], href: &str) -> usize {
        links.iter().filter(|l| l.href == href).count()
    }

    #[test]
    fn test_colors_come_from_theme_palette() {
        for theme in [Theme::Light, Theme::Dark] {
            let palette = Palette::for_theme(theme).colors();
            for viewer in viewers() {
                let layout = HomeLayout::render(&viewer, theme);
                for color in layout.colors() {
                    assert!(palette.contains(&color), "{color} not in {theme:?} palette");
                }
            }
        }
    }

    #[test]
    fn test_each_palette_slot_differs_by_theme() {
        let light = Palette::LIGHT.colors();
        let dark = Palette::DARK.colors();

        for (light, dark) in light.iter().zip(dark.iter()) {
            assert_ne!(light, dark);
        }
    }

    #[test]
    fn test_dark_layout_colors() {
        let layout = HomeLayout::render(&Viewer::Anonymous, Theme::Dark);

        assert_eq!(layout.headline_color, "#ffffff");
        assert_eq!(layout.subheading_color, "#cbd5e1");
        assert_eq!(layout.cards[0].background, "var(--bg-secondary)");
        assert_eq!(layout.cards[0].border, "var(--card-border)");
    }

    #[test]
    fn test_light_layout_colors() {
        let layout = HomeLayout::render(&Viewer::Anonymous, Theme::Light);

        assert_eq!(layout.headline_color, "#1f2937");
        assert_eq!(layout.prompt_color, "#4b5563");
        assert_eq!(layout.cards[2].background, "#ffffff");
        assert_eq!(layout.cards[2].border, "#e5e7eb");
    }

    #[test]
    fn test_anonymous_call_to_action() {
        let layout = HomeLayout::render(&Viewer::Anonymous, Theme::Light);
        let links = layout.call_to_action.links();

        assert_eq!(count(&links, routes::REGISTER), 1);
        assert_eq!(count(&links, routes::LOGIN), 1);
        assert_eq!(count(&links, routes::PLAN_TRIP), 0);
        assert_eq!(links[0].href, routes::REGISTER);
    }

    #[test]
    fn test_authenticated_call_to_action() {
        let layout = HomeLayout::render(&traveller(), Theme::Dark);
        let links = layout.call_to_action.links();

        assert_eq!(links.len(), 1);
        assert_eq!(count(&links, routes::PLAN_TRIP), 1);
        assert_eq!(count(&links, routes::REGISTER), 0);
        assert_eq!(count(&links, routes::LOGIN), 0);
    }

    #[test]
    fn test_three_cards_in_fixed_order() {
        for theme in [Theme::Light, Theme::Dark] {
            for viewer in viewers() {
                let layout = HomeLayout::render(&viewer, theme);
                let titles = layout.cards.map(|c| c.card.title);
                assert_eq!(
                    titles,
                    [
                        "Smart Recommendations",
                        "Detailed Itineraries",
                        "Personalized Experience"
                    ]
                );
                let icons = layout.cards.map(|c| c.card.icon);
                assert_eq!(
                    icons,
                    [FeatureIcon::Map, FeatureIcon::Calendar, FeatureIcon::Plane]
                );
            }
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        for theme in [Theme::Light, Theme::Dark] {
            for viewer in viewers() {
                assert_eq!(
                    HomeLayout::render(&viewer, theme),
                    HomeLayout::render(&viewer, theme)
                );
            }
        }
    }

    #[test]
    fn test_entry_transition_delays() {
        let transition = EntryTransition::default();

        assert_eq!(transition.delay(EntrySlot::Headline), Duration::ZERO);
        assert_eq!(transition.delay(EntrySlot::Subheading), Duration::from_millis(200));
        assert_eq!(transition.delay(EntrySlot::Cards), Duration::from_millis(400));
        assert_eq!(transition.delay(EntrySlot::Card(2)), Duration::from_millis(800));
        assert_eq!(transition.delay(EntrySlot::CallToAction), Duration::from_millis(600));
    }

    #[test]
    fn test_home_typing_config() {
        let config = home_typing_config().unwrap();

        assert_eq!(config.strings(), HEADLINES.map(String::from));
        assert_eq!(config.type_speed(), TYPE_SPEED);
        assert_eq!(config.back_speed(), BACK_SPEED);
        assert_eq!(config.back_delay(), BACK_DELAY);
        assert!(config.loops());
    }

    #[test]
    fn test_viewer_from_optional_user() {
        assert_eq!(Viewer::from(None), Viewer::Anonymous);
        let viewer = traveller();
        assert_eq!(Viewer::from(viewer.user().cloned()), viewer);
    }

    #[test]
    fn test_stored_user_json() {
        let json = r#"{"id":"u-1","email":"ada@example.com","username":"ada"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(Viewer::from(Some(user)), traveller());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(Theme::Dark.is_dark());
    }
}
