//! Shared theme tokens and accessibility profile hooks for console rendering.
//!
//! Every domain status maps to a semantic token, and every token maps to a
//! concrete style in both palettes. The mappings are exhaustive matches, so
//! adding a status variant without a style is a compile error.

#![allow(missing_docs)]

use std::env;

use ratatui::style::{Color, Modifier, Style};

use crate::core::config::DisplayConfig;
use crate::domain::analytics::EfficiencyBand;
use crate::domain::records::{
    AccountStatus, DriverStatus, PickupStatus, Priority, ReviewStatus, RouteStatus, ServiceState,
    Tier,
};

use super::model::NotificationLevel;

/// Contrast profile used by theme token selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastMode {
    Standard,
    High,
}

/// Color output mode for compatibility with `NO_COLOR` and terminal policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Enabled,
    Disabled,
}

/// Accessibility knobs consumed by theme primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessibilityProfile {
    pub contrast: ContrastMode,
    pub color: ColorMode,
}

impl Default for AccessibilityProfile {
    fn default() -> Self {
        Self {
            contrast: ContrastMode::Standard,
            color: ColorMode::Enabled,
        }
    }
}

impl AccessibilityProfile {
    #[must_use]
    pub const fn new(high_contrast: bool, no_color: bool) -> Self {
        Self {
            contrast: if high_contrast {
                ContrastMode::High
            } else {
                ContrastMode::Standard
            },
            color: if no_color {
                ColorMode::Disabled
            } else {
                ColorMode::Enabled
            },
        }
    }

    /// Combine the display config with the `NO_COLOR` convention; either
    /// source can disable color.
    #[must_use]
    pub fn from_config(display: &DisplayConfig) -> Self {
        let env_no_color = env::var_os("NO_COLOR").is_some();
        Self::new(display.high_contrast, display.no_color || env_no_color)
    }

    #[must_use]
    pub const fn no_color(self) -> bool {
        matches!(self.color, ColorMode::Disabled)
    }
}

/// Semantic token category independent of concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticToken {
    Accent,
    Success,
    Warning,
    Danger,
    Muted,
    Neutral,
}

/// Shared semantic palette for all console pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    contrast: ContrastMode,
}

impl ThemePalette {
    #[must_use]
    pub const fn from_contrast(contrast: ContrastMode) -> Self {
        Self { contrast }
    }

    #[must_use]
    pub const fn color(self, token: SemanticToken) -> Color {
        match self.contrast {
            ContrastMode::Standard => match token {
                SemanticToken::Accent => Color::Cyan,
                SemanticToken::Success => Color::Green,
                SemanticToken::Warning => Color::Yellow,
                SemanticToken::Danger => Color::Red,
                SemanticToken::Muted => Color::DarkGray,
                SemanticToken::Neutral => Color::White,
            },
            ContrastMode::High => match token {
                SemanticToken::Accent => Color::LightCyan,
                SemanticToken::Success => Color::LightGreen,
                SemanticToken::Warning => Color::LightYellow,
                SemanticToken::Danger => Color::LightRed,
                SemanticToken::Muted => Color::Gray,
                SemanticToken::Neutral => Color::White,
            },
        }
    }
}

/// Full render theme (palette plus accessibility profile).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accessibility: AccessibilityProfile,
    pub palette: ThemePalette,
}

impl Theme {
    #[must_use]
    pub const fn new(accessibility: AccessibilityProfile) -> Self {
        Self {
            palette: ThemePalette::from_contrast(accessibility.contrast),
            accessibility,
        }
    }

    #[must_use]
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self::new(AccessibilityProfile::from_config(display))
    }

    /// Foreground style for a semantic token. In `NO_COLOR` mode every token
    /// renders with the default style so the layout stays legible.
    #[must_use]
    pub fn style(&self, token: SemanticToken) -> Style {
        if self.accessibility.no_color() {
            return Style::default();
        }
        Style::default().fg(self.palette.color(token))
    }

    /// Accent style with bold weight, used for the active page tab and the
    /// cursor row.
    #[must_use]
    pub fn emphasis(&self, token: SemanticToken) -> Style {
        self.style(token).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted(&self) -> Style {
        self.style(SemanticToken::Muted)
    }
}

// ──────────────────── status → token mappings ────────────────────

#[must_use]
pub const fn pickup_status_token(status: PickupStatus) -> SemanticToken {
    match status {
        PickupStatus::Scheduled => SemanticToken::Accent,
        PickupStatus::InProgress => SemanticToken::Warning,
        PickupStatus::Completed => SemanticToken::Success,
        PickupStatus::Cancelled => SemanticToken::Danger,
    }
}

#[must_use]
pub const fn review_status_token(status: ReviewStatus) -> SemanticToken {
    match status {
        ReviewStatus::Pending => SemanticToken::Warning,
        ReviewStatus::Approved => SemanticToken::Success,
        ReviewStatus::Rejected => SemanticToken::Danger,
    }
}

#[must_use]
pub const fn route_status_token(status: RouteStatus) -> SemanticToken {
    match status {
        RouteStatus::Active => SemanticToken::Success,
        RouteStatus::Planned => SemanticToken::Accent,
        RouteStatus::Completed => SemanticToken::Muted,
    }
}

#[must_use]
pub const fn account_status_token(status: AccountStatus) -> SemanticToken {
    match status {
        AccountStatus::Active => SemanticToken::Success,
        AccountStatus::Inactive => SemanticToken::Muted,
        AccountStatus::Suspended => SemanticToken::Danger,
    }
}

#[must_use]
pub const fn tier_token(tier: Tier) -> SemanticToken {
    match tier {
        Tier::Bronze => SemanticToken::Muted,
        Tier::Silver => SemanticToken::Neutral,
        Tier::Gold => SemanticToken::Warning,
    }
}

#[must_use]
pub const fn priority_token(priority: Priority) -> SemanticToken {
    match priority {
        Priority::Low => SemanticToken::Muted,
        Priority::Normal => SemanticToken::Neutral,
        Priority::High => SemanticToken::Danger,
    }
}

#[must_use]
pub const fn driver_status_token(status: DriverStatus) -> SemanticToken {
    match status {
        DriverStatus::Available => SemanticToken::Success,
        DriverStatus::OnRoute => SemanticToken::Accent,
    }
}

#[must_use]
pub const fn service_state_token(state: ServiceState) -> SemanticToken {
    match state {
        ServiceState::Operational => SemanticToken::Success,
        ServiceState::Maintenance => SemanticToken::Warning,
    }
}

#[must_use]
pub const fn efficiency_band_token(band: EfficiencyBand) -> SemanticToken {
    match band {
        EfficiencyBand::Good => SemanticToken::Success,
        EfficiencyBand::Fair => SemanticToken::Warning,
        EfficiencyBand::Poor => SemanticToken::Danger,
    }
}

#[must_use]
pub const fn notification_token(level: NotificationLevel) -> SemanticToken {
    match level {
        NotificationLevel::Info => SemanticToken::Accent,
        NotificationLevel::Success => SemanticToken::Success,
        NotificationLevel::Error => SemanticToken::Danger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_profile_yields_default_styles() {
        let theme = Theme::new(AccessibilityProfile::new(false, true));
        assert_eq!(theme.style(SemanticToken::Danger), Style::default());
    }

    #[test]
    fn high_contrast_palette_brightens_tokens() {
        let standard = ThemePalette::from_contrast(ContrastMode::Standard);
        let high = ThemePalette::from_contrast(ContrastMode::High);
        assert_eq!(standard.color(SemanticToken::Success), Color::Green);
        assert_eq!(high.color(SemanticToken::Success), Color::LightGreen);
    }

    #[test]
    fn statuses_map_to_expected_tokens() {
        assert_eq!(
            pickup_status_token(PickupStatus::Completed),
            SemanticToken::Success
        );
        assert_eq!(
            review_status_token(ReviewStatus::Pending),
            SemanticToken::Warning
        );
        assert_eq!(
            account_status_token(AccountStatus::Suspended),
            SemanticToken::Danger
        );
        assert_eq!(tier_token(Tier::Gold), SemanticToken::Warning);
    }

    #[test]
    fn emphasis_adds_bold_when_color_enabled() {
        let theme = Theme::new(AccessibilityProfile::default());
        let style = theme.emphasis(SemanticToken::Accent);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
