use crossterm::style::Color;
use crossword_core::Difficulty;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Block (black) cell color
    pub block: Color,
    /// Clue number color
    pub number: Color,
    /// User-entered letter color
    pub filled: Color,
    /// Revealed letter color
    pub revealed: Color,
    /// Selected cell background
    pub selected_bg: Color,
    /// Highlighted word-span background
    pub highlight_bg: Color,
    /// Incorrect-answer color
    pub error: Color,
    /// Correct-answer color
    pub success: Color,
    /// Timer/info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            block: Color::Rgb { r: 45, g: 48, b: 60 },
            number: Color::Rgb { r: 140, g: 150, b: 180 },
            filled: Color::Rgb { r: 80, g: 180, b: 255 },
            revealed: Color::Rgb { r: 200, g: 140, b: 255 },
            selected_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            highlight_bg: Color::Rgb { r: 35, g: 40, b: 55 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            block: Color::Rgb { r: 90, g: 90, b: 105 },
            number: Color::Rgb { r: 120, g: 120, b: 140 },
            filled: Color::Rgb { r: 30, g: 100, b: 200 },
            revealed: Color::Rgb { r: 140, g: 60, b: 200 },
            selected_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            highlight_bg: Color::Rgb { r: 230, g: 232, b: 242 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            border: Color::Grey,
            block: Color::DarkGrey,
            number: Color::Grey,
            filled: Color::Cyan,
            revealed: Color::Magenta,
            selected_bg: Color::Blue,
            highlight_bg: Color::Rgb { r: 30, g: 30, b: 30 },
            error: Color::Red,
            success: Color::Green,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }

    /// Accent color for a difficulty badge.
    pub fn difficulty_color(&self, difficulty: Difficulty) -> Color {
        match difficulty {
            Difficulty::Easy => self.success,
            Difficulty::Medium => self.key,
            Difficulty::Hard => self.error,
        }
    }
}

/// Cosmetic metadata derived from the difficulty: skill label and a rough
/// time estimate. Display-only, deliberately outside the core model.
pub fn difficulty_meta(difficulty: Difficulty) -> (&'static str, &'static str) {
    match difficulty {
        Difficulty::Easy => ("Beginner friendly", "~5 min"),
        Difficulty::Medium => ("Some challenge", "~10 min"),
        Difficulty::Hard => ("Expert level", "~15 min"),
    }
}
