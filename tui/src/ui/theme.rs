use ratatui::style::{Color, Modifier, Style};

/// Ocean theme.
///
/// Base aesthetic:
/// - pale sea foam foreground on a deep navy background
/// - green and red reserved for outcomes
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(4, 12, 28);
    pub const FG: Color = Color::Rgb(200, 230, 240);
    pub const FG_DIM: Color = Color::Rgb(110, 150, 170);
    pub const FG_MUTED: Color = Color::Rgb(70, 90, 105);

    // Accents
    pub const ACCENT_CYAN: Color = Color::Rgb(0, 220, 255);
    pub const SUCCESS: Color = Color::Rgb(60, 220, 120);
    pub const ERROR: Color = Color::Rgb(255, 75, 75);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    /// Panel borders.
    pub fn border() -> Style {
        Style::default().fg(Self::FG_DIM).bg(Self::BG)
    }

    /// Border of the focused panel.
    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_CYAN).bg(Self::BG)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// The trigger button, inverted when focused.
    pub fn button(focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(Self::BG)
                .bg(Self::ERROR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Self::ERROR).add_modifier(Modifier::BOLD)
        }
    }

    pub fn success() -> Style {
        Style::default()
            .fg(Self::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR).add_modifier(Modifier::BOLD)
    }

    pub fn accent_cyan() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .add_modifier(Modifier::BOLD)
    }
}
