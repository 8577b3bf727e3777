//! Parrot/neon theme tokens for the docdeck TUI
//!
//! # Color Palette
//! - **Accent**: Electric cyan (focus, active view and tab)
//! - **Positive**: Neon green (expanded sections)
//! - **Negative**: Hot pink (errors)
//! - **Warning**: Neon orange (rejected actions)
//! - **Neutral**: Cool purple (diagrams and listings)
//! - **Muted**: Steel blue (hints, collapsed summaries)

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Color for a payload kind as reported by `ContentPayload::kind`.
    pub fn payload_color(&self, kind: &str) -> Color {
        match kind {
            "diagram" => self.neutral,
            "table" | "fields" | "list" => self.text_primary,
            _ => self.text_secondary,
        }
    }

    /// Color of a section marker.
    pub fn disclosure_color(&self, expanded: bool) -> Color {
        if expanded {
            self.positive
        } else {
            self.muted
        }
    }
}

fn palette() -> Theme {
    Theme::default()
}

pub fn accent() -> Style {
    Style::default().fg(palette().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(palette().positive)
}

pub fn muted() -> Style {
    Style::default().fg(palette().muted)
}

pub fn neutral() -> Style {
    Style::default().fg(palette().neutral)
}

pub fn warning() -> Style {
    Style::default().fg(palette().warning)
}

pub fn negative() -> Style {
    Style::default().fg(palette().negative)
}

pub fn text() -> Style {
    Style::default().fg(palette().text_primary)
}

pub fn bold() -> Style {
    text().add_modifier(Modifier::BOLD)
}

pub fn payload(kind: &str) -> Style {
    Style::default().fg(palette().payload_color(kind))
}

pub fn disclosure(expanded: bool) -> Style {
    Style::default().fg(palette().disclosure_color(expanded))
}

/// Focused section summary line.
pub fn focused() -> Style {
    accent_bold().add_modifier(Modifier::REVERSED)
}
