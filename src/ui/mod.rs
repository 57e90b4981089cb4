/// UI building blocks for the storefront page
///
/// This module handles:
/// - Product and service cards (cards.rs)
/// - Category filter chips (chips.rs)
/// - Deterministic page geometry for scrolling and reveals (layout.rs)

use iced::Color;

pub mod cards;
pub mod chips;
pub mod layout;

/// Accent color shared by buttons, chips, and prices
pub const ACCENT: Color = Color::from_rgb(0.36, 0.62, 0.98);

/// Card surface color on the dark theme
pub const SURFACE: Color = Color::from_rgb(0.12, 0.14, 0.18);

/// Primary text color
pub const TEXT_PRIMARY: Color = Color::from_rgb(0.92, 0.94, 0.97);

/// Secondary ("muted") text color
pub const TEXT_MUTED: Color = Color::from_rgb(0.62, 0.66, 0.72);

/// Scale a color's alpha channel; used to fade cards in as they reveal
pub fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}
