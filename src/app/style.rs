// SPDX-License-Identifier: GPL-3.0-only

//! Colors and text styles for the carousel

use crate::partners::PartnerCategory;
use ratatui::style::{Color, Modifier, Style};

/// Palette, in the spirit of the web design's Tailwind shades
pub mod palette {
    use ratatui::style::Color;

    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const INDIGO_600: Color = Color::Rgb(79, 70, 229);
    pub const EMERALD_600: Color = Color::Rgb(5, 150, 105);
    pub const GRAY_100: Color = Color::Rgb(243, 244, 246);
    pub const GRAY_300: Color = Color::Rgb(209, 213, 219);
    pub const GRAY_500: Color = Color::Rgb(107, 114, 128);
    pub const GRAY_600: Color = Color::Rgb(75, 85, 99);
    pub const GRAY_700: Color = Color::Rgb(55, 65, 81);
    pub const GRAY_800: Color = Color::Rgb(31, 41, 55);
    pub const BLUE_500: Color = Color::Rgb(59, 130, 246);
    pub const BLUE_600: Color = Color::Rgb(37, 99, 235);
    pub const BLUE_800: Color = Color::Rgb(30, 64, 175);
    pub const BLUE_900: Color = Color::Rgb(30, 58, 138);
}

/// Badge style for a partner category
///
/// Every category has a style; anything that is not a known partnership
/// kind gets the neutral gray badge.
pub fn category_style(category: &PartnerCategory) -> Style {
    let background = match category {
        PartnerCategory::Industrial => palette::INDIGO_600,
        PartnerCategory::Training => palette::EMERALD_600,
        PartnerCategory::Other(_) => palette::GRAY_500,
    };
    Style::default()
        .fg(palette::WHITE)
        .bg(background)
        .add_modifier(Modifier::BOLD)
}

/// Style of the "Since <year>" badge
pub fn since_badge_style() -> Style {
    Style::default().fg(palette::GRAY_800).bg(palette::GRAY_100)
}

pub fn section_title_style() -> Style {
    Style::default()
        .fg(palette::BLUE_800)
        .add_modifier(Modifier::BOLD)
}

pub fn section_subtitle_style() -> Style {
    Style::default().fg(palette::GRAY_600)
}

pub fn accent_rule_style() -> Style {
    Style::default().fg(palette::BLUE_500)
}

pub fn slide_title_style() -> Style {
    Style::default()
        .fg(palette::BLUE_900)
        .add_modifier(Modifier::BOLD)
}

pub fn slide_description_style() -> Style {
    Style::default().fg(palette::GRAY_700)
}

/// Style of one indicator dot
pub fn indicator_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(palette::BLUE_600)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette::GRAY_300)
    }
}

/// Background of the image containment box
pub const IMAGE_BOX_BACKGROUND: Color = palette::WHITE;
