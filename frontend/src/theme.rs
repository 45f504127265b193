//! App theme: colors and spacing.

use eatnsplit_core::BalanceTone;

/// Warm orange palette. Light/dark selected at runtime.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    pub const PRIMARY: &'static str = "#ff922b";
    pub const ON_PRIMARY: &'static str = "#343a40";
    pub const CREDIT: &'static str = "#66a80f";
    pub const DEBT: &'static str = "#e03131";

    // Light
    pub const LIGHT_BACKGROUND: &'static str = "#ffffff";
    pub const LIGHT_SURFACE: &'static str = "#fff4e6";
    pub const LIGHT_SURFACE_SELECTED: &'static str = "#ffe8cc";
    pub const LIGHT_ON_SURFACE: &'static str = "#495057";

    // Dark
    pub const DARK_BACKGROUND: &'static str = "#1c1712";
    pub const DARK_SURFACE: &'static str = "#2b2118";
    pub const DARK_SURFACE_SELECTED: &'static str = "#4a3422";
    pub const DARK_ON_SURFACE: &'static str = "#f1f3f5";

    pub fn background(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_BACKGROUND
        } else {
            Self::LIGHT_BACKGROUND
        }
    }
    pub fn surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }
    pub fn surface_selected(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE_SELECTED
        } else {
            Self::LIGHT_SURFACE_SELECTED
        }
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_SURFACE
        } else {
            Self::LIGHT_ON_SURFACE
        }
    }

    /// Text color for a balance line.
    pub fn balance(tone: BalanceTone, is_dark: bool) -> &'static str {
        match tone {
            BalanceTone::Credit => Self::CREDIT,
            BalanceTone::Debt => Self::DEBT,
            BalanceTone::Even => Self::on_surface(is_dark),
        }
    }
}

pub mod spacing {
    pub const XS: &'static str = "4px";
    pub const SM: &'static str = "8px";
    pub const MD: &'static str = "16px";
    pub const LG: &'static str = "24px";
    pub const CARD_PADDING: &'static str = "16px";
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn balance_colors_follow_tone() {
        assert_eq!(AppColors::balance(BalanceTone::Credit, false), AppColors::CREDIT);
        assert_eq!(AppColors::balance(BalanceTone::Debt, true), AppColors::DEBT);
        assert_eq!(AppColors::balance(BalanceTone::Even, true), AppColors::DARK_ON_SURFACE);
    }

    #[test]
    fn dark_mode_switches_every_surface() {
        assert_ne!(AppColors::background(true), AppColors::background(false));
        assert_ne!(AppColors::surface(true), AppColors::surface(false));
        assert_ne!(AppColors::surface_selected(true), AppColors::surface_selected(false));
        assert_ne!(AppColors::on_surface(true), AppColors::on_surface(false));
    }
}
