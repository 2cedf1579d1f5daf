//! TUI theme and styling

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub border: Color,
    pub selection: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,

    // Task colors
    pub low: Color,
    pub medium: Color,
    pub high: Color,
    pub overdue: Color,
    pub done: Color,

    // UI elements
    pub error: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Self {
            border: Color::Rgb(60, 66, 82),
            selection: Color::Rgb(45, 52, 70),

            title: Color::Rgb(140, 190, 255),
            text: Color::Rgb(205, 214, 230),
            dimmed: Color::Rgb(100, 110, 130),
            hint: Color::Rgb(130, 150, 180),

            low: Color::Rgb(110, 180, 140),
            medium: Color::Rgb(220, 200, 120),
            high: Color::Rgb(240, 130, 110),
            overdue: Color::Rgb(255, 100, 80),
            done: Color::Rgb(90, 160, 110),

            error: Color::Rgb(255, 100, 80),
            accent: Color::Rgb(140, 190, 255),
        }
    }
}
