//! Centralized theming for the redraft TUI
//!
//! Single source of truth for all colors and styles used throughout the
//! application.

use ratatui::style::{Color, Modifier, Style};
use std::sync::RwLock;

use crate::config::ThemeVariant;

/// Global theme variant storage (set once at startup)
static THEME_VARIANT: RwLock<ThemeVariant> = RwLock::new(ThemeVariant::Dark);

/// Initialize the theme variant (call once at startup)
pub fn init_theme(variant: ThemeVariant) {
    if let Ok(mut guard) = THEME_VARIANT.write() {
        *guard = variant;
    }
}

fn current_theme() -> ThemeVariant {
    THEME_VARIANT.read().map(|g| *g).unwrap_or_default()
}

fn high_contrast() -> bool {
    matches!(current_theme(), ThemeVariant::HighContrast)
}

pub struct Theme;

impl Theme {
    pub fn text() -> Style {
        if high_contrast() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn text_secondary() -> Style {
        if high_contrast() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn text_muted() -> Style {
        if high_contrast() {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        }
    }

    pub fn text_accent() -> Style {
        if high_contrast() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        }
    }

    pub fn title() -> Style {
        Style::default()
            .fg(if high_contrast() { Color::White } else { Color::Cyan })
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        if high_contrast() {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        }
    }

    pub fn border() -> Style {
        if high_contrast() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn border_focused() -> Style {
        if high_contrast() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Cyan)
        }
    }

    pub fn error_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::Red)
    }

    pub fn status_bar() -> Style {
        if high_contrast() {
            Style::default().fg(Color::White).bg(Color::Black)
        } else {
            Style::default().fg(Color::Gray).bg(Color::Indexed(236))
        }
    }

    pub fn status_loading() -> Style {
        Self::status_bar().fg(Color::Yellow)
    }

    pub fn status_ready() -> Style {
        Self::status_bar().fg(Color::Green)
    }

    pub fn status_warn() -> Style {
        Self::status_bar().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn help_key() -> Style {
        Style::default()
            .fg(if high_contrast() { Color::Yellow } else { Color::Cyan })
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_desc() -> Style {
        Self::text_secondary()
    }
}
