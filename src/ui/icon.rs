use leptos::prelude::*;

use crate::core::FeatureIcon;

#[component]
pub fn Icon(
    /// Icon name (file stem under /icons)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names shipped in public/icons
pub mod icons {
    pub const MAP: &str = "map";
    pub const CALENDAR: &str = "calendar";
    pub const PLANE: &str = "plane";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const COMPASS: &str = "compass";
    pub const MONITOR: &str = "monitor";
}

impl FeatureIcon {
    pub fn icon_name(self) -> &'static str {
        match self {
            FeatureIcon::Map => icons::MAP,
            FeatureIcon::Calendar => icons::CALENDAR,
            FeatureIcon::Plane => icons::PLANE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_icons_are_distinct() {
        let names = [FeatureIcon::Map, FeatureIcon::Calendar, FeatureIcon::Plane]
            .map(FeatureIcon::icon_name);
        assert_eq!(names, [icons::MAP, icons::CALENDAR, icons::PLANE]);
    }
}
