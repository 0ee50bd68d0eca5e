//! Home page component
//!
//! Marketing entry point of Tripwise:
//! - Typewriter headline cycling through the product pitches
//! - Three feature cards
//! - Call to action that depends on whether someone is signed in
//!
//! All colors and links come from [`HomeLayout`]; this module only maps the
//! layout onto markup.

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::{
    CallToAction, EntrySlot, EntryTransition, FEATURE_CARDS, HomeLayout, home_typing_config, routes,
};
use crate::ui::auth::use_auth_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::{ThemeContext, use_theme_context};
use crate::ui::typed_text::TypedText;

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth_context();
    let theme = use_theme_context();

    let layout = Memo::new(move |_| HomeLayout::render(&auth.viewer(), theme.theme.get()));
    let transition = layout.with_untracked(|l| l.transition);

    view! {
        <SeoMeta />
        <HomeStyles transition=transition />

        <div class="min-h-screen bg-theme-primary">
            <Header theme=theme />

            <main class="pt-28 pb-16 px-4">
                <div class="max-w-4xl mx-auto text-center home-enter">
                    <h1
                        class="text-5xl font-bold mb-6 home-enter-item"
                        style:color=move || layout.with(|l| l.headline_color)
                        style:animation-delay=entry_delay(transition, EntrySlot::Headline)
                    >
                        <Headline />
                    </h1>

                    <p
                        class="text-xl mb-8 home-enter-item"
                        style:color=move || layout.with(|l| l.subheading_color)
                        style:animation-delay=entry_delay(transition, EntrySlot::Subheading)
                    >
                        {layout.with_untracked(|l| l.subheading)}
                    </p>

                    <div
                        class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-12 home-enter"
                        style:animation-delay=entry_delay(transition, EntrySlot::Cards)
                    >
                        {(0..FEATURE_CARDS.len())
                            .map(|index| view! { <FeatureCardView layout=layout index=index /> })
                            .collect_view()}
                    </div>

                    <div
                        class="home-enter-item"
                        style:animation-delay=entry_delay(transition, EntrySlot::CallToAction)
                    >
                        <CallToActionView layout=layout />
                    </div>
                </div>
            </main>
        </div>
    }
}

/// Headline typewriter; falls back to the first pitch if the config is invalid
#[component]
fn Headline() -> impl IntoView {
    match home_typing_config() {
        Ok(config) => view! { <TypedText config=config /> }.into_any(),
        Err(e) => {
            leptos::logging::warn!("headline animation disabled: {e}");
            view! { <span>{crate::core::HEADLINES[0]}</span> }.into_any()
        }
    }
}

#[component]
fn FeatureCardView(layout: Memo<HomeLayout>, index: usize) -> impl IntoView {
    let card = FEATURE_CARDS[index];
    let icon = card.icon.icon_name();
    let transition = layout.with_untracked(|l| l.transition);

    view! {
        <div
            class="home-card home-enter-item p-6 rounded-xl border shadow-lg transition-all duration-300
                   hover:shadow-xl"
            style:background-color=move || layout.with(|l| l.cards[index].background)
            style:border-color=move || layout.with(|l| l.cards[index].border)
            style:animation-delay=entry_delay(transition, EntrySlot::Card(index))
        >
            <div class="flex justify-center mb-4">
                <Icon name=icon class="w-10 h-10" />
            </div>
            <h3
                class="text-xl font-semibold mb-2"
                style:color=move || layout.with(|l| l.cards[index].title_color)
            >
                {card.title}
            </h3>
            <p style:color=move || layout.with(|l| l.cards[index].description_color)>
                {card.description}
            </p>
        </div>
    }
}

#[component]
fn CallToActionView(layout: Memo<HomeLayout>) -> impl IntoView {
    const PRIMARY_CLASS: &str = "inline-block bg-gradient-to-r from-blue-500 to-blue-600 text-white px-8 py-3
                                 rounded-lg text-lg font-semibold hover:from-blue-600 hover:to-blue-700
                                 transition-all duration-300 transform hover:scale-105 hover:shadow-lg";

    move || match layout.with(|l| l.call_to_action) {
        CallToAction::PlanTrip { primary } => view! {
            <div>
                <A href=primary.href attr:class=PRIMARY_CLASS>
                    {primary.label}
                </A>
            </div>
        }
        .into_any(),
        CallToAction::SignUp {
            primary,
            prompt,
            login,
        } => view! {
            <div class="space-y-4">
                <A href=primary.href attr:class=PRIMARY_CLASS>
                    {primary.label}
                </A>
                <p style:color=move || layout.with(|l| l.prompt_color)>
                    {prompt}
                    " "
                    <A
                        href=login.href
                        attr:class="text-blue-500 hover:text-blue-600 transition-colors"
                    >
                        {login.label}
                    </A>
                </p>
            </div>
        }
        .into_any(),
    }
}

/// Header with logo and theme toggle
#[component]
fn Header(theme: ThemeContext) -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href=routes::HOME attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <div class="w-10 h-10 bg-gradient-to-br from-blue-500 to-blue-600 rounded-xl
                                    flex items-center justify-center shadow-lg">
                            <Icon name=icons::COMPASS class="w-6 h-6" />
                        </div>
                        <span class="text-xl font-bold text-theme-primary">"Tripwise"</span>
                    </A>
                    <ThemeToggle theme=theme />
                </div>
            </div>
        </header>
    }
}

/// Theme toggle button component
///
/// Once a theme has been picked explicitly, a second button returns to the
/// system preference.
#[component]
fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <div class="flex items-center gap-1">
            <Show when=move || !theme.follows_system()>
                <button
                    class="p-2 rounded-lg hover:bg-theme-secondary transition-colors"
                    on:click=move |_| theme.follow_system()
                    title="Use system theme"
                    aria-label="Use system theme"
                >
                    <Icon name=icons::MONITOR class="w-5 h-5" />
                </button>
            </Show>
            <button
                class="p-2 rounded-lg hover:bg-theme-secondary transition-colors"
                on:click=move |_| theme.toggle()
                title="Toggle theme"
                aria-label="Toggle theme"
            >
                {move || {
                    if theme.theme.get().is_dark() {
                        view! { <Icon name=icons::SUN class="w-5 h-5" /> }.into_any()
                    } else {
                        view! { <Icon name=icons::MOON class="w-5 h-5" /> }.into_any()
                    }
                }}
            </button>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Tripwise - AI Trip Planner" />
        <Meta name="description" content="Plan your perfect trip with AI. Get personalized travel itineraries, smart recommendations and hour-by-hour schedules tailored to your preferences." />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Tripwise - AI Trip Planner" />
        <Meta property="og:description" content="Get personalized travel itineraries generated by AI based on your preferences." />
    }
}

fn entry_delay(transition: EntryTransition, slot: EntrySlot) -> String {
    css_millis(transition.delay(slot))
}

fn css_millis(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}

/// Keyframes for the entry transition and the typewriter cursor
#[component]
fn HomeStyles(transition: EntryTransition) -> impl IntoView {
    let duration = css_millis(transition.duration);
    let offset = transition.offset;

    let css = format!(
        r#"
        @keyframes home-fade-in {{
            from {{ opacity: 0; }}
            to {{ opacity: 1; }}
        }}

        @keyframes home-fade-in-up {{
            from {{ opacity: 0; transform: translateY({offset}px); }}
            to {{ opacity: 1; transform: translateY(0); }}
        }}

        .home-enter {{
            animation: home-fade-in {duration} ease-out backwards;
        }}

        .home-enter-item {{
            animation: home-fade-in-up {duration} ease-out backwards;
        }}

        .home-card:hover {{
            transform: scale(1.03);
        }}

        .typed-cursor {{
            opacity: 1;
            animation: typed-blink 0.7s infinite;
        }}

        @keyframes typed-blink {{
            0%, 100% {{ opacity: 1; }}
            50% {{ opacity: 0; }}
        }}

        @media (prefers-reduced-motion: reduce) {{
            .home-enter, .home-enter-item {{
                animation: none;
            }}
        }}
        "#
    );

    view! { <style>{css}</style> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_delay_css() {
        let transition = EntryTransition::default();

        assert_eq!(entry_delay(transition, EntrySlot::Headline), "0ms");
        assert_eq!(entry_delay(transition, EntrySlot::Card(1)), "600ms");
        assert_eq!(css_millis(transition.duration), "500ms");
    }
}
