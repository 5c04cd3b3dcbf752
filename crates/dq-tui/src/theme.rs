//! Terminal color theme system
//!
//! Provides adaptive color palettes for dark and light terminal backgrounds.
//! Auto-detects via COLORFGBG env var, or manual override with --light flag
//! or DQ_LIGHT_BG=1 environment variable.

use ratatui::style::Color;

/// Color theme for terminal UI.
/// All UI code should use theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // General UI text
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, instructions)
    pub text_dim: Color,
    /// Muted text (empty states, placeholder)
    pub text_muted: Color,

    // Borders
    /// Default border color
    pub border: Color,
    /// Informational border (help, clue lists)
    pub border_accent: Color,
    /// Case closed screen
    pub border_danger: Color,

    // Semantic colors
    /// Section headers, accent text
    pub accent: Color,
    /// Room names
    pub header: Color,
    /// Clue names
    pub clue: Color,
    /// Suspect names
    pub suspect: Color,
    /// Open doors
    pub good: Color,
    /// Walls and dead ends
    pub bad: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            text_muted: Color::Gray,
            border: Color::White,
            border_accent: Color::Cyan,
            border_danger: Color::Red,
            accent: Color::Cyan,
            header: Color::Yellow,
            clue: Color::LightGreen,
            suspect: Color::LightMagenta,
            good: Color::Green,
            bad: Color::Red,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            text_muted: Color::DarkGray,
            border: Color::DarkGray,
            border_accent: Color::Blue,
            border_danger: Color::Red,
            accent: Color::Blue,
            header: Color::Magenta,
            clue: Color::Green,
            suspect: Color::Magenta,
            good: Color::Green,
            bad: Color::Red,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and DQ_LIGHT_BG override.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    fn is_light_background() -> bool {
        if let Ok(val) = std::env::var("DQ_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is "fg;bg" with color indices (0-15)
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
