//! Theme system for the memory journal
//! Supports both dark and light modes with a lavender palette

use iced::color;
use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Typography
// ============================================================================

pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Bold;
pub const MEDIUM_WEIGHT: iced::font::Weight = iced::font::Weight::Medium;

/// Body handwriting face (falls back to the system font until loaded)
pub const HANDWRITING: iced::Font = iced::Font::with_name("Patrick Hand");

/// Script face used for the letter and the scrapbook lists
pub const SCRIPT: iced::Font = iced::Font::with_name("Caveat");

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(theme, Theme::Dark)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x16121f);
    pub const SURFACE: Color = color!(0x201a2c);
    pub const SURFACE_TINT: Color = color!(0x271f35);
    pub const BORDER: Color = color!(0x3a3050);
    pub const TEXT_MUTED: Color = color!(0x8a7fa8);
    pub const TEXT_SECONDARY: Color = color!(0xb6a8d6);
    pub const TEXT_PRIMARY: Color = color!(0xefe9fa);
    pub const ACCENT: Color = color!(0xa78bfa);
    pub const ACCENT_STRONG: Color = color!(0x8b5cf6);
    pub const HIGHLIGHT: Color = color!(0xf472b6);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xfaf5ff);
    pub const SURFACE: Color = color!(0xffffff);
    pub const SURFACE_TINT: Color = color!(0xf8f5ff);
    pub const BORDER: Color = color!(0xe9d5ff);
    pub const TEXT_MUTED: Color = color!(0xa78bba);
    pub const TEXT_SECONDARY: Color = color!(0x7e5a9e);
    pub const TEXT_PRIMARY: Color = color!(0x3b2b4f);
    pub const ACCENT: Color = color!(0x9333ea);
    pub const ACCENT_STRONG: Color = color!(0x7e22ce);
    pub const HIGHLIGHT: Color = color!(0xec4899);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get card surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get tinted paper color based on theme
pub fn surface_tint(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE_TINT
    } else {
        light::SURFACE_TINT
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Get accent color based on theme
pub fn accent(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::ACCENT
    } else {
        light::ACCENT
    }
}

/// Get strong accent color based on theme
pub fn accent_strong(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::ACCENT_STRONG
    } else {
        light::ACCENT_STRONG
    }
}

/// Get pink highlight color based on theme
pub fn highlight(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::HIGHLIGHT
    } else {
        light::HIGHLIGHT
    }
}

// ============================================================================
// Container styles
// ============================================================================

/// Page background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Rounded white card with a soft shadow
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            color: border_color(theme),
            width: 1.0,
            radius: 16.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.3, 0.2, 0.5, 0.12),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Tinted paper sheet for the scrapbook note
pub fn paper(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface_tint(theme))),
        border: Border {
            color: border_color(theme),
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.3, 0.2, 0.5, 0.18),
            offset: Vector::new(0.0, 6.0),
            blur_radius: 20.0,
        },
        ..Default::default()
    }
}

/// Letter sheet with a sharp edge and heavy shadow
pub fn letter_paper(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            color: border_color(theme),
            width: 1.0,
            radius: 2.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.2, 0.1, 0.4, 0.25),
            offset: Vector::new(0.0, 10.0),
            blur_radius: 30.0,
        },
        ..Default::default()
    }
}

/// Frosted pill used by the fixed nav
pub fn nav_pill(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            color: border_color(theme),
            width: 1.0,
            radius: 999.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.3, 0.2, 0.5, 0.1),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(accent_strong(theme)),
        ..Default::default()
    }
}

/// Round sticker badge
pub fn sticker(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            color: border_color(theme),
            width: 2.0,
            radius: 999.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.3, 0.2, 0.5, 0.15),
            offset: Vector::new(0.0, 3.0),
            blur_radius: 10.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button styles
// ============================================================================

/// Primary rounded call-to-action (the lock page Enter button)
pub fn enter_button(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => accent_strong(theme),
        _ => accent(theme),
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: Color::WHITE,
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.3, 0.2, 0.5, 0.3),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Round icon button in the nav pill
pub fn nav_icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => surface_tint(theme),
        _ => surface(theme),
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: accent_strong(theme),
        border: Border {
            color: border_color(theme),
            width: 1.0,
            radius: 999.0.into(),
        },
        ..Default::default()
    }
}

/// One note row; the expanded one is tinted and outlined
pub fn note_row(theme: &Theme, status: button::Status, expanded: bool) -> button::Style {
    let (bg, border) = if expanded {
        (surface_tint(theme), accent(theme))
    } else {
        match status {
            button::Status::Hovered => (surface(theme), border_color(theme)),
            _ => (surface(theme), Color::TRANSPARENT),
        }
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text_primary(theme),
        border: Border {
            color: border,
            width: 2.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.3, 0.2, 0.5, 0.08),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Scrollable style
// ============================================================================

pub fn soft_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}
