use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Show header color
    pub header: Color,
    /// Cell being edited
    pub editing: Color,
    /// Solved cell color
    pub correct: Color,
    /// Wrong answer color
    pub incorrect: Color,
    /// Selected cell background
    pub selected_bg: Color,
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
            border: Color::Rgb { r: 90, g: 95, b: 115 },
            header: Color::Rgb { r: 130, g: 180, b: 255 },
            editing: Color::Rgb { r: 255, g: 210, b: 100 },
            correct: Color::Rgb { r: 90, g: 255, b: 130 },
            incorrect: Color::Rgb { r: 255, g: 90, b: 90 },
            selected_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 150, g: 150, b: 170 },
            header: Color::Rgb { r: 30, g: 100, b: 200 },
            editing: Color::Rgb { r: 180, g: 120, b: 20 },
            correct: Color::Rgb { r: 40, g: 160, b: 60 },
            incorrect: Color::Rgb { r: 220, g: 50, b: 50 },
            selected_bg: Color::Rgb { r: 180, g: 200, b: 255 },
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
            header: Color::Cyan,
            editing: Color::Yellow,
            correct: Color::Green,
            incorrect: Color::Red,
            selected_bg: Color::Blue,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }
}
